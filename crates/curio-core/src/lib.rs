//! # curio-core
//!
//! Core types and shared abstractions for curio, a listing attribute
//! extraction engine for antique and vintage items.
//!
//! This crate provides:
//! - Reference catalogs (categories, materials, styles, periods, ...)
//! - Suggestion and extraction result models
//! - Error types and result alias
//! - Logging conventions
//! - The generation backend trait

pub mod catalog;
pub mod defaults;
pub mod error;
pub mod logging;
pub mod models;
pub mod traits;

// Re-export commonly used types
pub use error::{Error, Result};
pub use models::*;
pub use traits::*;
