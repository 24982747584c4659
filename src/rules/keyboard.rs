// SPDX-License-Identifier: PMPL-1.0-or-later
//! Keyboard focus rule - WCAG 2.1.1 Keyboard
//!
//! Links with an `href` and `<button>` elements must carry an explicit
//! `tabindex="..."`.

use crate::issues::{IssueCategory, IssueMap, IssueRecord};
use crate::locator::Document;
use crate::rules::Rule;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static INTERACTIVE_ELEMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<a[^>]*href="[^"]*"[^>]*>|<button[^>]*>.*?</button>"#).expect("valid regex")
});

pub struct MissingTabindexRule;

impl Rule for MissingTabindexRule {
    fn name(&self) -> &str {
        "Missing tabindex"
    }

    fn category(&self) -> IssueCategory {
        IssueCategory::MissingTabindex
    }

    fn deduction(&self) -> u32 {
        5
    }

    fn evaluate(&self, document: &Document<'_>, issues: &mut IssueMap) -> u32 {
        let mut deducted = 0;

        for element in INTERACTIVE_ELEMENT.find_iter(document.text).map(|m| m.as_str()) {
            if element.contains("tabindex=\"") {
                continue;
            }
            debug!(element, "interactive element without tabindex");
            issues.record(IssueRecord::new(
                self.category(),
                document.line_of(element),
                element,
            ));
            deducted += self.deduction();
        }

        deducted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(html: &str) -> (u32, IssueMap) {
        let mut issues = IssueMap::new();
        let deducted = MissingTabindexRule.evaluate(&Document::new(html), &mut issues);
        (deducted, issues)
    }

    #[test]
    fn test_button_without_tabindex() {
        let (deducted, issues) = run("<html><body><button>Click Me</button></body></html>");
        assert_eq!(deducted, 5);
        let group = issues.get(IssueCategory::MissingTabindex).unwrap();
        assert_eq!(group.len(), 1);
        assert_eq!(group.title(), "Missing tabindex for interactive elements");
        assert_eq!(group.records[0].faulted_html, "<button>Click Me</button>");
    }

    #[test]
    fn test_link_without_tabindex() {
        let (_, issues) = run(r#"<a href="/about">About</a>"#);
        assert_eq!(
            issues.get(IssueCategory::MissingTabindex).unwrap().records[0].faulted_html,
            r#"<a href="/about">"#
        );
    }

    #[test]
    fn test_tabindex_present() {
        let html = r#"<button tabindex="0">Go</button><a href="/x" tabindex="0">X</a>"#;
        assert_eq!(run(html).0, 0);
    }

    #[test]
    fn test_anchor_without_href_ignored() {
        assert_eq!(run(r#"<a name="top">Top</a>"#).0, 0);
    }

    #[test]
    fn test_button_spanning_lines_not_matched() {
        assert_eq!(run("<button>\nGo\n</button>").0, 0);
    }
}
