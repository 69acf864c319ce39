//! Common utilities shared across services.
//!
//! This crate provides:
//! - Application error type with store-error classification
//! - Configuration structures

pub mod config;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult, OptionExt};
