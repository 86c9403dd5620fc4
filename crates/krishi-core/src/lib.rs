//! Core types, configuration, errors, and domain events for Krishi Sahayi.
//!
//! Shared by every other crate in the workspace. Nothing here performs I/O
//! beyond reading and writing the TOML configuration file.

pub mod config;
pub mod error;
pub mod events;
pub mod types;

pub use config::KrishiConfig;
pub use error::{KrishiError, Result};
pub use events::SessionEvent;
pub use types::{AttachmentRef, Message, MessageAuthor, MessageCategory};
