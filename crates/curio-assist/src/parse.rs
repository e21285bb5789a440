//! Model payload parsing and catalog re-validation.
//!
//! The model's output is an untrusted hint. Every enumerated field is
//! re-matched through the same matchers the local extractor uses, and a
//! field the model omits or that fails validation is re-attempted
//! against the original listing text. An unparseable payload degrades
//! to the local extractor outright.

use curio_core::defaults::TITLE_MAX_CHARS;
use curio_core::{catalog, CategoryMatch, DimensionUnit, Dimensions, Suggestions};
use curio_match::{
    extract_date_of_manufacture, extract_dimensions, extract_suggestions, find_matching_category,
    find_matching_condition, find_matching_creator, find_matching_materials, find_matching_origin,
    find_matching_period, find_matching_restoration, find_matching_style, find_matching_wear,
    find_matching_weight,
};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::warn;

static FENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```(?:json)?\s*([\s\S]*?)```").expect("valid regex"));

/// Parses a raw model response and re-validates every field against the
/// canonical catalogs.
///
/// Tolerates the payload being wrapped in a fenced code block. When the
/// payload is not valid JSON at all, extraction runs locally against
/// `original_text` instead.
pub fn parse_and_validate(raw_response: &str, original_text: &str) -> Suggestions {
    let payload = FENCE_RE
        .captures(raw_response)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .unwrap_or(raw_response);

    let parsed: Value = match serde_json::from_str(payload.trim()) {
        Ok(value) => value,
        Err(err) => {
            warn!(error = %err, "Model payload was not valid JSON, extracting locally");
            return extract_suggestions(original_text);
        }
    };

    validate_fields(&parsed, original_text)
}

fn validate_fields(parsed: &Value, original_text: &str) -> Suggestions {
    let mut suggestions = Suggestions::default();

    // The model's category guess is re-matched; an unmatched pair is
    // kept verbatim since category pairs are not catalog-constrained
    let model_l1 = category_part(parsed, "l1");
    let model_l2 = category_part(parsed, "l2");
    suggestions.category = match (model_l1, model_l2) {
        (Some(l1), Some(l2)) => find_matching_category(&format!("{} {}", l1, l2))
            .or_else(|| Some(CategoryMatch::new(l1, l2))),
        _ => find_matching_category(original_text),
    };

    if let Some(title) = field_str(parsed, "title") {
        suggestions.title = Some(title.chars().take(TITLE_MAX_CHARS).collect());
    }

    let date = field_str(parsed, "dateOfManufacture")
        .map(str::to_string)
        .or_else(|| extract_date_of_manufacture(original_text));
    suggestions.period = field_str(parsed, "period")
        .and_then(find_matching_period)
        .or_else(|| find_matching_period(original_text))
        .or_else(|| date.as_deref().and_then(find_matching_period));
    suggestions.date_of_manufacture = date;

    let model_materials = valid_list_entries(parsed, "materials", catalog::MATERIALS);
    let materials = if model_materials.is_empty() {
        find_matching_materials(original_text)
    } else {
        model_materials
    };
    if !materials.is_empty() {
        suggestions.materials = Some(materials);
    }

    suggestions.condition = field_str(parsed, "condition")
        .and_then(find_matching_condition)
        .or_else(|| find_matching_condition(original_text));

    suggestions.wear = field_str(parsed, "wear")
        .and_then(find_matching_wear)
        .or_else(|| find_matching_wear(original_text));

    let model_restoration = valid_list_entries(parsed, "restoration", catalog::RESTORATIONS);
    let restoration = if model_restoration.is_empty() {
        find_matching_restoration(original_text)
    } else {
        model_restoration
    };
    if !restoration.is_empty() {
        suggestions.restoration = Some(restoration);
    }

    let model_dims = parsed
        .get("dimensions")
        .and_then(Value::as_object)
        .map(|obj| Dimensions {
            width: obj.get("width").and_then(Value::as_f64),
            depth: obj.get("depth").and_then(Value::as_f64),
            height: obj.get("height").and_then(Value::as_f64),
        });
    match model_dims {
        Some(dims) if !dims.is_empty() => {
            let unit = if parsed.get("dimensionUnit").and_then(Value::as_str) == Some("cm") {
                DimensionUnit::Cm
            } else {
                DimensionUnit::In
            };
            suggestions.dimensions = Some(dims);
            suggestions.dimension_unit = Some(unit);
        }
        _ => {
            if let Some(found) = extract_dimensions(original_text) {
                suggestions.dimensions = Some(Dimensions {
                    width: found.width,
                    depth: found.depth,
                    height: found.height,
                });
                suggestions.dimension_unit = Some(found.unit);
            }
        }
    }

    suggestions.weight = field_str(parsed, "weight")
        .and_then(find_matching_weight)
        .or_else(|| find_matching_weight(original_text));

    suggestions.creator = field_str(parsed, "creator")
        .and_then(find_matching_creator)
        .or_else(|| find_matching_creator(original_text));

    suggestions.style = field_str(parsed, "style")
        .and_then(find_matching_style)
        .or_else(|| find_matching_style(original_text));

    suggestions.place_of_origin = field_str(parsed, "placeOfOrigin")
        .and_then(find_matching_origin)
        .or_else(|| find_matching_origin(original_text));

    if let Some(description) = field_str(parsed, "description") {
        suggestions.description = Some(description.to_string());
    }

    suggestions
}

fn field_str<'a>(parsed: &'a Value, key: &str) -> Option<&'a str> {
    parsed
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

fn category_part<'a>(parsed: &'a Value, key: &str) -> Option<&'a str> {
    parsed
        .get("category")
        .and_then(|c| c.get(key))
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Keeps the list entries that exactly match a catalog value, case
/// insensitively, normalized to the catalog's casing. Non-string
/// entries are skipped.
fn valid_list_entries(parsed: &Value, key: &str, known_values: &[&'static str]) -> Vec<String> {
    parsed
        .get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .filter_map(|item| {
                    known_values
                        .iter()
                        .find(|known| known.eq_ignore_ascii_case(item))
                        .map(|known| (*known).to_string())
                })
                .collect()
        })
        .unwrap_or_default()
}
