//! # curio-assist
//!
//! Model-assisted listing attribute extraction for curio.
//!
//! This crate provides:
//! - The extraction engine, which asks a language model to read listing
//!   text and degrades to the deterministic matchers in `curio-match`
//!   whenever the model is unreachable, unconfigured, or unusable
//! - An Anthropic Messages API backend implementing
//!   [`curio_core::GenerationBackend`]
//! - Prompt construction embedding the canonical option catalogs
//! - Response payload parsing with per-field catalog re-validation
//!
//! # Feature Flags
//!
//! - `integration`: Enable integration tests that require a live API
//!   credential
//!
//! # Example
//!
//! ```rust,no_run
//! use curio_assist::{ExtractionEngine, ExtractionMode};
//!
//! #[tokio::main]
//! async fn main() {
//!     let engine = ExtractionEngine::from_env();
//!     let result = engine
//!         .extract("Walnut coffee table, circa 1958", false, ExtractionMode::Local)
//!         .await;
//!     println!("{:?}", result.suggestions);
//! }
//! ```

pub mod anthropic;
pub mod engine;
pub mod parse;
pub mod prompt;

// Mock generation backend for testing
#[cfg(test)]
pub mod mock;

// Re-export core types
pub use curio_core::*;

pub use anthropic::{
    AnthropicBackend, AssistConfig, ANTHROPIC_VERSION, DEFAULT_ASSIST_MODEL, DEFAULT_ASSIST_URL,
};
pub use engine::ExtractionEngine;
pub use parse::parse_and_validate;
pub use prompt::{build_system_prompt, build_user_prompt};
