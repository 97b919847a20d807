//! Core traits module
//!
//! Contains the provider interfaces the relay is written against

pub mod provider;

pub use provider::*;
