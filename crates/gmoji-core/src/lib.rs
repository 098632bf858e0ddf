//! Core domain + application logic for the GlyphMoji cipher bot.
//!
//! This crate is intentionally framework-agnostic. Telegram lives behind the
//! messaging port (trait) implemented in the adapter crate, and the per-chat
//! mode store is likewise a port with a file-backed default.

pub mod cipher;
pub mod config;
pub mod domain;
pub mod errors;
pub mod formatting;
pub mod logging;
pub mod messaging;
pub mod mode;
pub mod session;

pub use errors::{Error, Result};
