//! Shared test utilities for auth-platform Rust libraries.
//!
//! This crate provides:
//! - Proptest generators for token file contents and paths
//! - Temporary token file fixtures with sample data

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod generators;
pub mod fixtures;

pub use fixtures::{TokenFile, sample_jwt};
pub use generators::*;
