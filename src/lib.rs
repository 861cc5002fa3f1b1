//! TCALC - Terminal Calculator Library
//!
//! A terminal-based calculator application, built in Rust.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
