//! Integration tests for creative-relay
//!
//! Real clients against mocked provider endpoints.

pub mod completion_tests;
pub mod config_tests;
pub mod media_task_tests;
pub mod routes_tests;
