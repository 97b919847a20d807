//! Error handling utilities
//!
//! This module provides the relay's error type and its HTTP response mapping.

pub mod error;

pub use error::*;
