//! Core library components.
//!
//! Key generation and settings line formatting, independent of the CLI.

pub mod constants;
pub mod line;
pub mod provider;
pub mod secret;
