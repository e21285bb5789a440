//! Weight bucket matching from listing text.
//!
//! Numeric weights win: pounds are preferred over kilograms (which are
//! converted), and the result is bucketed against the canonical weight
//! classes. Qualitative wording ("heavy", "light") is the last resort.

use curio_core::defaults::KG_TO_LBS;
use once_cell::sync::Lazy;
use regex::Regex;

static LBS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+)\s*(lbs?|pounds?)").expect("valid regex"));

static KG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+)\s*(kg|kilos?|kilograms?)").expect("valid regex"));

/// Maps `input` onto one of the canonical weight bucket values
/// ("less-40", "40-70", "70-200", "more-200").
pub fn find_matching_weight(input: &str) -> Option<String> {
    let input_lower = input.to_lowercase();

    let weight_lbs = if let Some(caps) = LBS_RE.captures(input) {
        caps[1].parse::<f64>().ok()
    } else if let Some(caps) = KG_RE.captures(input) {
        caps[1].parse::<f64>().ok().map(|kg| kg * KG_TO_LBS)
    } else {
        None
    };

    if let Some(lbs) = weight_lbs {
        let bucket = if lbs < 40.0 {
            "less-40"
        } else if lbs <= 70.0 {
            "40-70"
        } else if lbs <= 200.0 {
            "70-200"
        } else {
            "more-200"
        };
        return Some(bucket.to_string());
    }

    if input_lower.contains("heavy") || input_lower.contains("massive") {
        return Some("more-200".to_string());
    }
    if input_lower.contains("light") || input_lower.contains("lightweight") {
        return Some("less-40".to_string());
    }

    None
}
