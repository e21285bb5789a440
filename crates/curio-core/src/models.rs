//! Core data models for listing extraction.

use serde::{Deserialize, Serialize};

/// How an extraction request should be serviced.
///
/// The mode is chosen per call. `External` is the default and degrades to
/// the deterministic extractor whenever the model service cannot be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtractionMode {
    /// Delegate to the external model service, with local fallback.
    #[default]
    External,
    /// Deterministic matchers only. Never touches the network.
    Local,
}

impl ExtractionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtractionMode::External => "external",
            ExtractionMode::Local => "local",
        }
    }
}

impl std::fmt::Display for ExtractionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A suggested category pair.
///
/// Usually names a row of the category catalog, but a keyword hit may
/// suggest a finer subcategory the live tree does not carry as its own row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryMatch {
    pub l1: String,
    pub l2: String,
}

impl CategoryMatch {
    pub fn new(l1: impl Into<String>, l2: impl Into<String>) -> Self {
        Self {
            l1: l1.into(),
            l2: l2.into(),
        }
    }
}

impl std::fmt::Display for CategoryMatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} > {}", self.l1, self.l2)
    }
}

/// Measurement unit for dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DimensionUnit {
    /// Inches.
    #[default]
    #[serde(rename = "in")]
    In,
    /// Centimeters.
    #[serde(rename = "cm")]
    Cm,
}

impl DimensionUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            DimensionUnit::In => "in",
            DimensionUnit::Cm => "cm",
        }
    }
}

impl std::fmt::Display for DimensionUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Width, depth, and height measurements.
///
/// Each axis is independently optional; the unit travels separately in
/// [`Suggestions::dimension_unit`] so partial measurements stay usable.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl Dimensions {
    /// True when no axis was measured.
    pub fn is_empty(&self) -> bool {
        self.width.is_none() && self.depth.is_none() && self.height.is_none()
    }
}

/// Field suggestions produced by one extraction pass.
///
/// Every field is independently optional. Absence means "could not be
/// determined", never a placeholder value. Enumerated fields (period,
/// materials, condition, wear, restoration, weight, creator, style,
/// place_of_origin) carry exact catalog values; title, date_of_manufacture,
/// and description are free text.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Suggestions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<CategoryMatch>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_manufacture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub materials: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wear: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restoration: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimension_unit: Option<DimensionUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_of_origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Suggestions {
    /// True when no field could be determined.
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
            && self.title.is_none()
            && self.date_of_manufacture.is_none()
            && self.period.is_none()
            && self.materials.is_none()
            && self.condition.is_none()
            && self.wear.is_none()
            && self.restoration.is_none()
            && self.dimensions.is_none()
            && self.dimension_unit.is_none()
            && self.weight.is_none()
            && self.creator.is_none()
            && self.style.is_none()
            && self.place_of_origin.is_none()
            && self.description.is_none()
    }
}

/// Outcome of one extraction call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    /// Field suggestions, possibly partial, never invalid.
    pub suggestions: Suggestions,
    /// Verbatim model response, kept for diagnostics. Present only when
    /// the external path received a response, whether or not it parsed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_model_response: Option<String>,
}
