//! Common utilities for clickq
//!
//! This crate provides the error type shared by all clickq crates.

pub mod error;

pub use error::{ClickqError, Result};
