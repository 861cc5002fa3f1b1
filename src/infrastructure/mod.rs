//! Infrastructure layer providing external service integrations.
//!
//! This module contains implementations for external concerns like
//! config persistence, the system clipboard, and other system-level
//! operations.

pub mod persistence;
pub mod clipboard;

pub use persistence::*;
pub use clipboard::*;
