//! Matchers for style, origin, condition, creator, wear, and restoration.

use curio_core::catalog;
use curio_core::defaults::{
    CONDITION_THRESHOLD, CREATOR_THRESHOLD, ORIGIN_THRESHOLD, STYLE_THRESHOLD, WEAR_THRESHOLD,
};

use crate::similarity::{find_best_labeled_match, find_best_string_match};

/// Shorthand style vocabulary, scanned in order before fuzzy matching.
const STYLE_ALIASES: &[(&str, &str)] = &[
    ("mid century", "mid-century-modern"),
    ("mid-century", "mid-century-modern"),
    ("mcm", "mid-century-modern"),
    ("danish", "danish-modern"),
    ("scandi", "scandinavian"),
    ("deco", "art-deco"),
    ("nouveau", "art-nouveau"),
];

/// Shorthand origin vocabulary, scanned in order before fuzzy matching.
const ORIGIN_ALIASES: &[(&str, &str)] = &[
    ("usa", "US"),
    ("u.s.", "US"),
    ("u.s.a.", "US"),
    ("america", "US"),
    ("american", "US"),
    ("uk", "GB"),
    ("britain", "GB"),
    ("british", "GB"),
    ("england", "GB"),
    ("english", "GB"),
];

/// Keyword sets per restoration kind, checked in catalog order. Stems
/// ("substitut", "modif") catch the common inflections.
const RESTORATION_KEYWORDS: &[(&str, &[&str])] = &[
    ("Repairs", &["repair", "fixed", "mended"]),
    ("Replacements", &["replace", "new parts", "substitut"]),
    ("Refinishing", &["refinish", "restain", "repaint", "relacquer"]),
    ("Reupholstery", &["reupholster", "new fabric", "new leather", "recovered"]),
    ("Reweaving", &["rewove", "rewoven", "reweav"]),
    ("Rewiring", &["rewir", "new wiring", "electrical"]),
    (
        "Additions or Alterations to Original",
        &["alter", "modif", "addition", "custom"],
    ),
];

/// Find the style suggested by `input`. Returns a style value.
pub fn find_matching_style(input: &str) -> Option<String> {
    let input_lower = input.to_lowercase();

    for (alias, value) in STYLE_ALIASES {
        if input_lower.contains(alias) {
            return Some((*value).to_string());
        }
    }

    find_best_labeled_match(input, catalog::STYLES, STYLE_THRESHOLD).map(str::to_string)
}

/// Find the country of origin suggested by `input`. Returns an ISO
/// alpha-2 code.
pub fn find_matching_origin(input: &str) -> Option<String> {
    let input_lower = input.to_lowercase();

    for (alias, value) in ORIGIN_ALIASES {
        if input_lower.contains(alias) {
            return Some((*value).to_string());
        }
    }

    find_best_labeled_match(input, catalog::COUNTRIES, ORIGIN_THRESHOLD).map(str::to_string)
}

/// Find the condition grade suggested by `input`.
///
/// "New" is never suggested: these are antique and vintage listings, so
/// the matcher only considers the used grades.
pub fn find_matching_condition(input: &str) -> Option<String> {
    let names: Vec<&str> = catalog::CONDITIONS
        .iter()
        .map(|c| c.name)
        .filter(|name| *name != "New")
        .collect();

    find_best_string_match(input, &names, CONDITION_THRESHOLD).map(str::to_string)
}

/// Find the creator suggested by `input`. Returns a creator value.
pub fn find_matching_creator(input: &str) -> Option<String> {
    find_best_labeled_match(input, catalog::CREATORS, CREATOR_THRESHOLD).map(str::to_string)
}

/// Find the wear level suggested by `input`. Returns a wear value.
pub fn find_matching_wear(input: &str) -> Option<String> {
    find_best_labeled_match(input, catalog::WEAR_LEVELS, WEAR_THRESHOLD).map(str::to_string)
}

/// Find every restoration kind whose keywords appear in `input`.
///
/// Results keep catalog order. One keyword per kind is enough; extra
/// mentions do not duplicate entries.
pub fn find_matching_restoration(input: &str) -> Vec<String> {
    let input_lower = input.to_lowercase();
    let mut matched = Vec::new();

    for (restoration, keywords) in RESTORATION_KEYWORDS {
        for keyword in *keywords {
            if input_lower.contains(keyword) {
                matched.push((*restoration).to_string());
                break;
            }
        }
    }

    matched
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Style Tests
    // ========================================================================

    #[test]
    fn test_style_alias_mid_century() {
        assert_eq!(
            find_matching_style("gorgeous mid century piece").as_deref(),
            Some("mid-century-modern")
        );
        assert_eq!(
            find_matching_style("MCM classic").as_deref(),
            Some("mid-century-modern")
        );
    }

    #[test]
    fn test_style_alias_deco_beats_fuzzy() {
        assert_eq!(
            find_matching_style("striking deco lines").as_deref(),
            Some("art-deco")
        );
    }

    #[test]
    fn test_style_fuzzy_label_match() {
        assert_eq!(
            find_matching_style("Hollywood Regency").as_deref(),
            Some("hollywood-regency")
        );
    }

    #[test]
    fn test_style_no_match() {
        assert_eq!(find_matching_style("zxqw"), None);
    }

    // ========================================================================
    // Origin Tests
    // ========================================================================

    #[test]
    fn test_origin_alias_american() {
        assert_eq!(
            find_matching_origin("american craftsmanship").as_deref(),
            Some("US")
        );
    }

    #[test]
    fn test_origin_alias_england() {
        assert_eq!(find_matching_origin("made in England").as_deref(), Some("GB"));
    }

    #[test]
    fn test_origin_alias_usa_matches_inside_words() {
        // Alias scan is plain substring search: "usa" occurs in "thousand"
        assert_eq!(
            find_matching_origin("one of a thousand made").as_deref(),
            Some("US")
        );
    }

    #[test]
    fn test_origin_label_match() {
        assert_eq!(find_matching_origin("Denmark").as_deref(), Some("DK"));
    }

    #[test]
    fn test_origin_no_match() {
        assert_eq!(find_matching_origin("zxqw"), None);
    }

    // ========================================================================
    // Condition Tests
    // ========================================================================

    #[test]
    fn test_condition_exact() {
        assert_eq!(find_matching_condition("excellent").as_deref(), Some("Excellent"));
    }

    #[test]
    fn test_condition_never_returns_new() {
        assert_eq!(find_matching_condition("New"), None);
        assert_eq!(find_matching_condition("brand new"), None);
    }

    #[test]
    fn test_condition_fuzzy() {
        assert_eq!(find_matching_condition("Excelent").as_deref(), Some("Excellent"));
    }

    // ========================================================================
    // Creator and Wear Tests
    // ========================================================================

    #[test]
    fn test_creator_label_match() {
        assert_eq!(
            find_matching_creator("Hans Wegner").as_deref(),
            Some("hans-wegner")
        );
    }

    #[test]
    fn test_creator_accented_label() {
        assert_eq!(
            find_matching_creator("Jean Prouvé").as_deref(),
            Some("jean-prouve")
        );
    }

    #[test]
    fn test_wear_label_match() {
        assert_eq!(
            find_matching_wear("Wear consistent with age and use").as_deref(),
            Some("consistent")
        );
    }

    // ========================================================================
    // Restoration Tests
    // ========================================================================

    #[test]
    fn test_restoration_single_kind() {
        assert_eq!(
            find_matching_restoration("legs were repaired last year"),
            vec!["Repairs"]
        );
    }

    #[test]
    fn test_restoration_stem_matching() {
        assert_eq!(
            find_matching_restoration("rewired for modern outlets"),
            vec!["Rewiring"]
        );
    }

    #[test]
    fn test_restoration_multiple_kinds_in_catalog_order() {
        let found = find_matching_restoration("refinished top, reupholstered in new fabric, repaired leg");
        assert_eq!(found, vec!["Repairs", "Refinishing", "Reupholstery"]);
    }

    #[test]
    fn test_restoration_no_duplicates() {
        assert_eq!(
            find_matching_restoration("repaired and repaired again, mended too"),
            vec!["Repairs"]
        );
    }

    #[test]
    fn test_restoration_none() {
        assert!(find_matching_restoration("pristine and untouched").is_empty());
    }
}
