//! Button and slide-switch driven LED patterns for a Blue Pill carrying a
//! PMOD 8LD and a PMOD SWT module.
//!
//! Everything except [`board`] is written against the `embedded-hal` traits
//! and builds on the host, where the unit tests run against the mock bench in
//! `hardware::mock`.

#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
mod fmt;

pub mod config;
pub mod controller;
pub mod error;
pub mod hardware;
pub mod patterns;

#[cfg(target_os = "none")]
pub mod board;

pub use error::{Error, Result};
