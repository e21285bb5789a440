//! # curio-match
//!
//! Deterministic matchers and extractors for curio.
//!
//! This crate maps free-form listing text and model output onto the
//! reference catalogs in `curio-core`. Everything here is pure and
//! synchronous: the same input always produces the same suggestions,
//! with no network or model involvement.
//!
//! This crate provides:
//! - String similarity scoring (`similarity`)
//! - Per-field matchers (category, materials, style, origin, ...)
//! - Pattern extractors for dimensions, weight, and dates
//! - A whole-listing fallback extractor (`fallback`)

pub mod attributes;
pub mod category;
pub mod dimensions;
pub mod fallback;
pub mod materials;
pub mod period;
pub mod similarity;
pub mod weight;

// Re-export the matcher surface
pub use attributes::{
    find_matching_condition, find_matching_creator, find_matching_origin,
    find_matching_restoration, find_matching_style, find_matching_wear,
};
pub use category::find_matching_category;
pub use dimensions::{extract_dimensions, DimensionMatch};
pub use fallback::extract_suggestions;
pub use materials::find_matching_materials;
pub use period::{extract_date_of_manufacture, find_matching_period};
pub use similarity::{find_best_labeled_match, find_best_string_match, similarity};
pub use weight::find_matching_weight;
