//! Default configuration values for curio.
//!
//! Single source of truth for defaults used across crates. Runtime
//! configuration can override these through environment variables.

// ============================================================================
// Assist Backend Defaults
// ============================================================================

/// Default Anthropic API base URL.
pub const DEFAULT_ASSIST_URL: &str = "https://api.anthropic.com";

/// Default generation model for listing extraction.
pub const DEFAULT_ASSIST_MODEL: &str = "claude-sonnet-4-20250514";

/// Default token ceiling for one extraction response.
pub const DEFAULT_MAX_TOKENS: u32 = 2000;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Messages API version header value.
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

// ============================================================================
// Matcher Thresholds
// ============================================================================
//
// Minimum similarity scores for a candidate to count as a match. Looser
// catalogs (styles, wear levels) tolerate lower scores than free-text
// fields where a wrong pick is costly.

/// General-purpose string match threshold.
pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.6;

/// Fuzzy category match threshold (second tier, after keyword scan).
pub const CATEGORY_FUZZY_THRESHOLD: f64 = 0.5;

/// Style match threshold.
pub const STYLE_THRESHOLD: f64 = 0.5;

/// Country-of-origin match threshold.
pub const ORIGIN_THRESHOLD: f64 = 0.6;

/// Condition match threshold.
pub const CONDITION_THRESHOLD: f64 = 0.7;

/// Creator match threshold.
pub const CREATOR_THRESHOLD: f64 = 0.6;

/// Wear level match threshold.
pub const WEAR_THRESHOLD: f64 = 0.5;

/// Period fuzzy match threshold (after year and century extraction).
pub const PERIOD_THRESHOLD: f64 = 0.8;

// ============================================================================
// Extraction Limits
// ============================================================================

/// Maximum length of a suggested title, in characters.
pub const TITLE_MAX_CHARS: usize = 100;

/// Number of period entries embedded in the system prompt.
pub const PROMPT_PERIOD_COUNT: usize = 20;

// ============================================================================
// Unit Conversion
// ============================================================================

/// Kilograms to pounds conversion factor used for weight bucketing.
pub const KG_TO_LBS: f64 = 2.2;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assist_url_is_https() {
        assert!(DEFAULT_ASSIST_URL.starts_with("https://"));
        assert!(!DEFAULT_ASSIST_URL.ends_with('/'));
    }

    #[test]
    fn test_max_tokens_positive() {
        assert!(DEFAULT_MAX_TOKENS > 0);
    }

    #[test]
    fn test_thresholds_in_unit_range() {
        for threshold in [
            DEFAULT_MATCH_THRESHOLD,
            CATEGORY_FUZZY_THRESHOLD,
            STYLE_THRESHOLD,
            ORIGIN_THRESHOLD,
            CONDITION_THRESHOLD,
            CREATOR_THRESHOLD,
            WEAR_THRESHOLD,
            PERIOD_THRESHOLD,
        ] {
            assert!((0.0..=1.0).contains(&threshold));
        }
    }

    #[test]
    fn test_condition_stricter_than_style() {
        assert!(CONDITION_THRESHOLD > STYLE_THRESHOLD);
    }

    #[test]
    fn test_title_limit() {
        assert_eq!(TITLE_MAX_CHARS, 100);
    }

    #[test]
    fn test_kg_conversion_factor() {
        assert!((KG_TO_LBS - 2.2).abs() < f64::EPSILON);
    }
}
