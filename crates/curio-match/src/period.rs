//! Period matching and date-of-manufacture extraction.

use curio_core::catalog;
use curio_core::defaults::PERIOD_THRESHOLD;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::similarity::find_best_string_match;

// Years 1500-2029. Word boundaries keep "1960s" and part numbers out.
static YEAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(1[5-9]\d{2}|20[0-2]\d)\b").expect("valid regex"));

static CIRCA_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)circa\s*(\d{4})").expect("valid regex"));

static RANGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{4})\s*[-–]\s*(\d{4})").expect("valid regex"));

static DECADE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d{4})s").expect("valid regex"));

/// Find the catalog period suggested by `input`.
///
/// A year mention is bucketed into its decade (2020 and later collapse
/// into "2020-"). Years whose decade is not in the catalog fall through
/// to the century scan, and from there to fuzzy matching over the period
/// list itself.
pub fn find_matching_period(input: &str) -> Option<String> {
    if let Some(caps) = YEAR_RE.captures(input) {
        if let Ok(year) = caps[1].parse::<u32>() {
            if year >= 2020 {
                return Some("2020-".to_string());
            }

            let decade = year / 10 * 10;
            let bucket = format!("{}-{}", decade, decade + 9);

            if catalog::PERIODS.contains(&bucket.as_str()) {
                return Some(bucket);
            }
        }
    }

    let input_lower = input.to_lowercase();
    for century in ["21st", "20th", "19th", "18th"] {
        if input_lower.contains(&format!("{} century", century)) {
            return Some(format!("{} Century", century));
        }
    }

    find_best_string_match(input, catalog::PERIODS, PERIOD_THRESHOLD).map(str::to_string)
}

/// Extract a date-of-manufacture phrase from `input`.
///
/// Tried in priority order: "circa YYYY", a year range, a decade like
/// "1960s", then a bare year between 1500 and 2029. The returned string
/// is normalized free text, not a catalog value.
pub fn extract_date_of_manufacture(input: &str) -> Option<String> {
    if let Some(caps) = CIRCA_RE.captures(input) {
        return Some(format!("circa {}", &caps[1]));
    }

    if let Some(caps) = RANGE_RE.captures(input) {
        return Some(format!("{}-{}", &caps[1], &caps[2]));
    }

    if let Some(caps) = DECADE_RE.captures(input) {
        return Some(format!("{}s", &caps[1]));
    }

    YEAR_RE.captures(input).map(|caps| caps[1].to_string())
}
