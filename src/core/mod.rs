//! Core functionality for the relay
//!
//! Provider clients, the seams the HTTP layer talks through, and the
//! completion normalizer.

pub mod normalizer;
pub mod poller;
pub mod providers;
pub mod traits;
pub mod types;
