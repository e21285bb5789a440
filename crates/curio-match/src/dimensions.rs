//! Structured dimension extraction from listing text.
//!
//! Two pattern families, tried in order: a combined "W x D x H" triple
//! with an optional trailing unit token, then independently matched
//! labelled axes ("W: 24", "height: 120cm"). A triple match wins
//! outright and the labelled patterns are never consulted.

use curio_core::DimensionUnit;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Dimensions pulled out of free text, together with the unit they were
/// expressed in. Inches are assumed when no unit token is present.
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionMatch {
    pub width: Option<f64>,
    pub depth: Option<f64>,
    pub height: Option<f64>,
    pub unit: DimensionUnit,
}

static TRIPLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?i)(\d+(?:\.\d+)?)\s*["']?\s*[x×]\s*(\d+(?:\.\d+)?)\s*["']?\s*[x×]\s*(\d+(?:\.\d+)?)\s*(in|inches?|"|cm|centimeters?)?"#,
    )
    .expect("valid regex")
});

static WIDTH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)(?:width|w)[:\s]*(\d+(?:\.\d+)?)\s*(in|inches?|"|cm)?"#)
        .expect("valid regex")
});

static DEPTH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)(?:depth|d)[:\s]*(\d+(?:\.\d+)?)\s*(in|inches?|"|cm)?"#)
        .expect("valid regex")
});

static HEIGHT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)(?:height|h)[:\s]*(\d+(?:\.\d+)?)\s*(in|inches?|"|cm)?"#)
        .expect("valid regex")
});

/// Extracts physical dimensions from `input`.
///
/// Returns `None` when neither pattern family finds a single axis. In
/// the labelled path the first unit token seen across the width, depth
/// and height matches decides the unit for all three.
pub fn extract_dimensions(input: &str) -> Option<DimensionMatch> {
    if let Some(caps) = TRIPLE_RE.captures(input) {
        let unit = caps
            .get(4)
            .map(|m| unit_from_token(m.as_str()))
            .unwrap_or_default();
        return Some(DimensionMatch {
            width: caps[1].parse().ok(),
            depth: caps[2].parse().ok(),
            height: caps[3].parse().ok(),
            unit,
        });
    }

    let width_caps = WIDTH_RE.captures(input);
    let depth_caps = DEPTH_RE.captures(input);
    let height_caps = HEIGHT_RE.captures(input);

    let width = axis_value(&width_caps);
    let depth = axis_value(&depth_caps);
    let height = axis_value(&height_caps);

    if width.is_none() && depth.is_none() && height.is_none() {
        return None;
    }

    let unit = [&width_caps, &depth_caps, &height_caps]
        .into_iter()
        .filter_map(|caps| caps.as_ref()?.get(2))
        .next()
        .map(|m| unit_from_token(m.as_str()))
        .unwrap_or_default();

    Some(DimensionMatch {
        width,
        depth,
        height,
        unit,
    })
}

fn axis_value(caps: &Option<Captures<'_>>) -> Option<f64> {
    caps.as_ref()?.get(1)?.as_str().parse().ok()
}

fn unit_from_token(token: &str) -> DimensionUnit {
    if token.to_lowercase().starts_with("cm") {
        DimensionUnit::Cm
    } else {
        DimensionUnit::In
    }
}
