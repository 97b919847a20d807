//! Core type definition module
//!
//! Data model shared by the provider clients and the HTTP layer.

pub mod completion;
pub mod task;

pub use completion::*;
pub use task::*;
