//! Deterministic extraction without any model call.
//!
//! Runs every matcher over the same input text and merges the hits into
//! one [`Suggestions`] value. Total on any input, including the empty
//! string, so callers can always proceed with whatever was found.

use curio_core::{Dimensions, Suggestions};

use crate::{attributes, category, dimensions, materials, period, weight};

/// Builds a [`Suggestions`] value from `text` alone.
///
/// Every field is matched independently against the full input. Period
/// gets a second attempt against the extracted date of manufacture when
/// the text itself does not resolve to a period bucket. Title and
/// description are never produced by this path.
pub fn extract_suggestions(text: &str) -> Suggestions {
    let mut suggestions = Suggestions::default();

    suggestions.category = category::find_matching_category(text);

    let materials = materials::find_matching_materials(text);
    if !materials.is_empty() {
        suggestions.materials = Some(materials);
    }

    suggestions.style = attributes::find_matching_style(text);
    suggestions.place_of_origin = attributes::find_matching_origin(text);
    suggestions.condition = attributes::find_matching_condition(text);
    suggestions.wear = attributes::find_matching_wear(text);
    suggestions.creator = attributes::find_matching_creator(text);

    let date = period::extract_date_of_manufacture(text);
    suggestions.period = period::find_matching_period(text)
        .or_else(|| date.as_deref().and_then(period::find_matching_period));
    suggestions.date_of_manufacture = date;

    if let Some(found) = dimensions::extract_dimensions(text) {
        suggestions.dimensions = Some(Dimensions {
            width: found.width,
            depth: found.depth,
            height: found.height,
        });
        suggestions.dimension_unit = Some(found.unit);
    }

    suggestions.weight = weight::find_matching_weight(text);

    let restoration = attributes::find_matching_restoration(text);
    if !restoration.is_empty() {
        suggestions.restoration = Some(restoration);
    }

    suggestions
}
