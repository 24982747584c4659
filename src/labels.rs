// SPDX-License-Identifier: PMPL-1.0-or-later
//! Label association heuristic shared by the two form-label rules.
//!
//! An input counts as labeled when its `id` is referenced by a
//! `<label for="...">` anywhere in the document, or when the input text
//! mentions `aria-labelledby` at all. Wrapping labels and `aria-label`
//! are not recognized.

use regex::Regex;
use std::sync::LazyLock;

static ID_ATTRIBUTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)id="([^"]+)""#).expect("valid regex"));

/// First `id="..."` value in an element snippet
pub fn element_id(element: &str) -> Option<&str> {
    ID_ATTRIBUTE
        .captures(element)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Whether `document` contains a `<label>` whose `for` equals `id` exactly.
/// Tag and attribute names match case-insensitively, the id does not.
pub fn has_label_for(document: &str, id: &str) -> bool {
    let pattern = format!(r#"(?i:<label[^>]*for="){}"[^>]*>"#, regex::escape(id));
    Regex::new(&pattern).is_ok_and(|re| re.is_match(document))
}

pub fn has_associated_label(input: &str, document: &str) -> bool {
    if element_id(input).is_some_and(|id| has_label_for(document, id)) {
        return true;
    }
    input.contains("aria-labelledby")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_for_matching_id() {
        let doc = r#"<label for="name">Name</label><input type="text" id="name" />"#;
        assert!(has_associated_label(r#"<input type="text" id="name" />"#, doc));
    }

    #[test]
    fn test_label_for_other_id() {
        let doc = r#"<label for="email">Email</label><input type="text" id="name" />"#;
        assert!(!has_associated_label(r#"<input type="text" id="name" />"#, doc));
    }

    #[test]
    fn test_id_match_is_exact() {
        let doc = r#"<label for="Name">Name</label>"#;
        assert!(!has_label_for(doc, "name"));
        assert!(!has_label_for(r#"<label for="name-full">"#, "name"));
    }

    #[test]
    fn test_label_tag_case_insensitive() {
        assert!(has_label_for(r#"<LABEL class="x" FOR="name">"#, "name"));
    }

    #[test]
    fn test_aria_labelledby_any_value() {
        let input = r#"<input type="text" aria-labelledby="">"#;
        assert!(has_associated_label(input, input));
    }

    #[test]
    fn test_wrapping_label_not_recognized() {
        let doc = r#"<label>Name <input type="text"></label>"#;
        assert!(!has_associated_label(r#"<input type="text">"#, doc));
    }

    #[test]
    fn test_aria_label_not_recognized() {
        let input = r#"<input type="search" aria-label="Search">"#;
        assert!(!has_associated_label(input, input));
    }

    #[test]
    fn test_id_with_regex_metacharacters() {
        let doc = r#"<label for="a.b(c)">X</label>"#;
        assert!(has_label_for(doc, "a.b(c)"));
        assert!(!has_label_for(r#"<label for="axb(c)">"#, "a.b(c)"));
    }
}
