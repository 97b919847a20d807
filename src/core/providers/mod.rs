//! External service clients
//!
//! Each client implements one of the seams in [`crate::core::traits`] and is
//! constructed from its section of the provider configuration.

pub mod imgbb;
pub mod openrouter;
pub mod runway;
pub mod sendgrid;

pub(crate) mod shared;

pub use imgbb::{ImgbbClient, UploadError};
pub use openrouter::OpenRouterClient;
pub use runway::{MediaTaskError, RunwayClient};
pub use sendgrid::{EmailError, EmailMessage, SendGridClient};
