// SPDX-License-Identifier: PMPL-1.0-or-later
//! Placeholder link rule - WCAG 2.4.4 Link Purpose
//!
//! A link whose `href` is exactly `#` is treated as broken. No network
//! checks are made.

use crate::issues::{IssueCategory, IssueMap, IssueRecord};
use crate::locator::Document;
use crate::rules::Rule;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static ANCHOR_HREF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)<a href="([^"]+)""#).expect("valid regex"));

pub fn is_broken_link(href: &str) -> bool {
    href == "#"
}

pub struct BrokenLinksRule;

impl Rule for BrokenLinksRule {
    fn name(&self) -> &str {
        "Broken links"
    }

    fn category(&self) -> IssueCategory {
        IssueCategory::BrokenLinks
    }

    fn deduction(&self) -> u32 {
        5
    }

    fn evaluate(&self, document: &Document<'_>, issues: &mut IssueMap) -> u32 {
        let mut deducted = 0;

        for href in ANCHOR_HREF
            .captures_iter(document.text)
            .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
            .filter(|href| is_broken_link(href))
        {
            debug!(href, "placeholder link");
            issues.record(IssueRecord::new(
                self.category(),
                document.line_of(href),
                format!("<a href='{href}'>Broken Link</a>"),
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
        let deducted = BrokenLinksRule.evaluate(&Document::new(html), &mut issues);
        (deducted, issues)
    }

    #[test]
    fn test_broken_link() {
        let (deducted, issues) = run(r##"<html><body><a href="#">Broken Link</a></body></html>"##);
        assert_eq!(deducted, 5);
        let group = issues.get(IssueCategory::BrokenLinks).unwrap();
        assert_eq!(group.len(), 1);
        assert_eq!(group.title(), "Broken link or missing href attribute");
        assert_eq!(group.records[0].faulted_html, "<a href='#'>Broken Link</a>");
    }

    #[test]
    fn test_fragment_links_are_valid() {
        assert_eq!(run(r##"<a href="#section-2">Next</a><a href="/home">Home</a>"##).0, 0);
    }

    #[test]
    fn test_every_placeholder_counted() {
        let html = "<a href=\"#\">One</a>\n<a href=\"#\">Two</a>";
        let (deducted, issues) = run(html);
        assert_eq!(deducted, 10);
        // the bare `#` is first seen on line 1 for both records
        let group = issues.get(IssueCategory::BrokenLinks).unwrap();
        assert!(group.records.iter().all(|r| r.line == 1));
    }
}
