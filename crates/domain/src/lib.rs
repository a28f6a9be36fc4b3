//! Shared types for the DevHub tool crates.

pub mod error;

pub use error::{Error, Result};
