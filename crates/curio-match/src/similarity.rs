//! String similarity scoring for option matching.
//!
//! All matchers share one scoring contract: case-insensitive equality
//! scores 1.0, substring containment in either direction scores 0.9, and
//! everything else falls back to edit distance normalized by the longer
//! input. Containment outranks edit distance, so a short option mentioned
//! anywhere inside a long description still scores 0.9.

use curio_core::catalog::LabeledOption;

/// Compute the Levenshtein edit distance between two strings.
///
/// Operates on Unicode scalar values, so an accented character counts as
/// a single edit.
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let mut matrix = vec![vec![0usize; a_chars.len() + 1]; b_chars.len() + 1];

    for (i, row) in matrix.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in matrix[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=b_chars.len() {
        for j in 1..=a_chars.len() {
            if b_chars[i - 1] == a_chars[j - 1] {
                matrix[i][j] = matrix[i - 1][j - 1];
            } else {
                matrix[i][j] = matrix[i - 1][j - 1]
                    .min(matrix[i][j - 1])
                    .min(matrix[i - 1][j])
                    + 1;
            }
        }
    }

    matrix[b_chars.len()][a_chars.len()]
}

/// Score the similarity of two strings in `[0, 1]`.
///
/// # Examples
///
/// ```
/// use curio_match::similarity::similarity;
///
/// assert_eq!(similarity("Walnut", "walnut"), 1.0);
/// assert_eq!(similarity("credenza", "teak credenza with sliding doors"), 0.9);
/// assert!(similarity("Excellent", "Excelent") > 0.8);
/// ```
pub fn similarity(a: &str, b: &str) -> f64 {
    let a_lower = a.to_lowercase();
    let b_lower = b.to_lowercase();

    // Exact match
    if a_lower == b_lower {
        return 1.0;
    }

    // One contains the other
    if a_lower.contains(&b_lower) || b_lower.contains(&a_lower) {
        return 0.9;
    }

    // Levenshtein-based similarity
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    let distance = levenshtein_distance(&a_lower, &b_lower);
    1.0 - distance as f64 / max_len as f64
}

/// Find the option scoring highest against `input`.
///
/// Ties keep the earliest option: a later candidate must strictly beat
/// the current best to replace it. Returns `None` when the input or the
/// option list is empty, or when no option reaches `threshold`.
pub fn find_best_string_match<'a>(
    input: &str,
    options: &[&'a str],
    threshold: f64,
) -> Option<&'a str> {
    if input.is_empty() || options.is_empty() {
        return None;
    }

    let mut best_match = None;
    let mut best_score = 0.0;

    for option in options {
        let score = similarity(input, option);
        if score > best_score && score >= threshold {
            best_score = score;
            best_match = Some(*option);
        }
    }

    best_match
}

/// Find the labeled option scoring highest against `input`.
///
/// Each option is scored as the better of its label score and its value
/// score, so "Mid-Century Modern" and "mid-century-modern" both land on
/// the same entry. Returns the winning option's value.
pub fn find_best_labeled_match(
    input: &str,
    options: &[LabeledOption],
    threshold: f64,
) -> Option<&'static str> {
    if input.is_empty() || options.is_empty() {
        return None;
    }

    let mut best_match = None;
    let mut best_score = 0.0;

    for option in options {
        let label_score = similarity(input, option.label);
        let value_score = similarity(input, option.value);
        let score = label_score.max(value_score);

        if score > best_score && score >= threshold {
            best_score = score;
            best_match = Some(option.value);
        }
    }

    best_match
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Similarity Scoring Tests
    // ========================================================================

    #[test]
    fn test_exact_match_ignores_case() {
        assert_eq!(similarity("Mahogany", "mahogany"), 1.0);
        assert_eq!(similarity("TEAK", "teak"), 1.0);
    }

    #[test]
    fn test_containment_scores_fixed() {
        assert_eq!(similarity("oak", "solid oak frame"), 0.9);
        assert_eq!(similarity("solid oak frame", "oak"), 0.9);
    }

    #[test]
    fn test_both_empty_scores_one() {
        assert_eq!(similarity("", ""), 1.0);
    }

    #[test]
    fn test_edit_distance_normalized_by_longer_input() {
        // kitten -> sitting: 3 edits over max length 7
        let score = similarity("kitten", "sitting");
        assert!((score - (1.0 - 3.0 / 7.0)).abs() < 1e-9);
    }

    #[test]
    fn test_unicode_counts_scalars_not_bytes() {
        // café vs cafe is one edit over four characters
        let score = similarity("café", "cafe");
        assert!((score - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_levenshtein_distance_basics() {
        assert_eq!(levenshtein_distance("", ""), 0);
        assert_eq!(levenshtein_distance("abc", ""), 3);
        assert_eq!(levenshtein_distance("", "abc"), 3);
        assert_eq!(levenshtein_distance("abc", "abc"), 0);
        assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
    }

    // ========================================================================
    // Best Match Selection Tests
    // ========================================================================

    #[test]
    fn test_empty_input_returns_none() {
        assert_eq!(find_best_string_match("", &["Good"], 0.1), None);
    }

    #[test]
    fn test_empty_options_returns_none() {
        assert_eq!(find_best_string_match("good", &[], 0.1), None);
    }

    #[test]
    fn test_below_threshold_returns_none() {
        assert_eq!(find_best_string_match("zzzz", &["Good", "Fair"], 0.6), None);
    }

    #[test]
    fn test_score_equal_to_threshold_matches() {
        // abcf vs abcd: one edit over four characters scores exactly 0.75
        assert_eq!(
            find_best_string_match("abcf", &["abcd"], 0.75),
            Some("abcd")
        );
    }

    #[test]
    fn test_tie_keeps_first_option() {
        // Both options are one edit away; the earlier one wins
        assert_eq!(
            find_best_string_match("goox", &["good", "goon"], 0.6),
            Some("good")
        );
    }

    #[test]
    fn test_higher_score_wins_regardless_of_order() {
        assert_eq!(
            find_best_string_match("excellent", &["Good", "Excellent"], 0.6),
            Some("Excellent")
        );
    }

    // ========================================================================
    // Labeled Match Tests
    // ========================================================================

    #[test]
    fn test_labeled_match_on_value() {
        let options = curio_core::catalog::WEAR_LEVELS;
        assert_eq!(
            find_best_labeled_match("minor-fading", options, 0.5),
            Some("minor-fading")
        );
    }

    #[test]
    fn test_labeled_match_on_label() {
        let options = curio_core::catalog::WEAR_LEVELS;
        assert_eq!(
            find_best_labeled_match("Minor Fading", options, 0.5),
            Some("minor-fading")
        );
    }

    #[test]
    fn test_labeled_match_returns_value_not_label() {
        let options = curio_core::catalog::STYLES;
        assert_eq!(
            find_best_labeled_match("Art Deco", options, 0.5),
            Some("art-deco")
        );
    }

    #[test]
    fn test_labeled_match_empty_input() {
        assert_eq!(
            find_best_labeled_match("", curio_core::catalog::STYLES, 0.5),
            None
        );
    }
}
