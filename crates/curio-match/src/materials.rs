//! Material detection in listing text.

use curio_core::catalog;
use regex::Regex;

/// Find every catalog material mentioned in `input`.
///
/// Each material is matched as a whole word, case-insensitively, so
/// "oak" hits "solid oak frame" but not "soaked". Results keep catalog
/// order and canonical casing regardless of how the text spells them.
pub fn find_matching_materials(input: &str) -> Vec<String> {
    let mut matched = Vec::new();

    for material in catalog::MATERIALS {
        let pattern = format!(r"(?i)\b{}\b", regex::escape(material));
        if let Ok(re) = Regex::new(&pattern) {
            if re.is_match(input) {
                matched.push((*material).to_string());
            }
        }
    }

    matched
}
