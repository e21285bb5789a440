//! Prompt construction for the extraction model.
//!
//! The system prompt embeds the canonical option catalogs so the model
//! answers in vocabulary the validators can re-match against. The period
//! list is truncated to keep the prompt small.

use curio_core::catalog;
use curio_core::defaults::PROMPT_PERIOD_COUNT;

/// Builds the system prompt embedding the canonical option lists.
pub fn build_system_prompt() -> String {
    let category_list = catalog::CATEGORIES
        .iter()
        .map(|c| format!("{} > {}", c.l1, c.l2))
        .collect::<Vec<_>>()
        .join(", ");
    let material_list = catalog::MATERIALS.join(", ");
    let style_list = catalog::STYLES
        .iter()
        .map(|s| s.label)
        .collect::<Vec<_>>()
        .join(", ");
    let condition_list = catalog::CONDITIONS
        .iter()
        .map(|c| c.name)
        .collect::<Vec<_>>()
        .join(", ");
    let country_list = catalog::COUNTRIES
        .iter()
        .map(|c| c.label)
        .collect::<Vec<_>>()
        .join(", ");
    let creator_list = catalog::CREATORS
        .iter()
        .map(|c| c.label)
        .collect::<Vec<_>>()
        .join(", ");
    let period_list = catalog::PERIODS
        .iter()
        .take(PROMPT_PERIOD_COUNT)
        .copied()
        .collect::<Vec<_>>()
        .join(", ");
    let weight_list = catalog::WEIGHT_CLASSES
        .iter()
        .map(|w| w.label)
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"You are an expert at analyzing antique and vintage furniture/decorative object listings. Your task is to extract structured data from listing descriptions.

IMPORTANT: Only return values that you can confidently determine from the input. If you're unsure about a field, omit it entirely.

Available options for each field (you MUST match to these exact values when possible):

CATEGORIES: {category_list}

MATERIALS: {material_list}

STYLES: {style_list}

CONDITIONS: {condition_list}
Note: Condition cannot be "New" for antique/vintage items.

COUNTRIES/ORIGINS: {country_list}

KNOWN CREATORS/DESIGNERS: {creator_list}

PERIODS: {period_list}...

WEIGHT CATEGORIES: {weight_list}

For dimensions, extract width, depth, and height as numbers. Note the unit (inches or cm).

For date of manufacture:
- Use full year when known (e.g., "1965")
- Use "circa YEAR" if uncertain on exact year
- Use decade format like "1960s" if that's what's provided

For title generation:
- 50-70 characters
- Include: furniture type + material
- Also include if available: creator, style, period/year, origin
- Title Case
- Avoid abbreviations and generic adjectives

Return your response as valid JSON only, with no additional commentary."#
    )
}

/// Builds the user prompt wrapping the listing text.
pub fn build_user_prompt(listing_text: &str) -> String {
    format!(
        r#"Analyze this listing and extract structured data. Return a JSON object with these fields (omit any you can't determine):

{{
  "category": {{ "l1": "top-level category", "l2": "subcategory" }},
  "title": "generated title 50-70 chars",
  "dateOfManufacture": "year or circa year",
  "period": "decade range like 1960-1969",
  "materials": ["Material1", "Material2"],
  "condition": "condition name",
  "wear": "wear description if applicable",
  "restoration": ["restoration work done"],
  "dimensions": {{ "width": number, "depth": number, "height": number }},
  "dimensionUnit": "in" or "cm",
  "weight": "weight category",
  "creator": "creator/designer name",
  "style": "style name",
  "placeOfOrigin": "country name",
  "description": "2-3 paragraph description with condition, style, historical context"
}}

Listing text:
"""
{listing_text}
""""#
    )
}
