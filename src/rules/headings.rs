// SPDX-License-Identifier: PMPL-1.0-or-later
//! Heading hierarchy rule - WCAG 1.3.1 Info and Relationships
//!
//! Collects `<hN>...</hN>` pairs in document order and flags a heading
//! whose level is more than one deeper than the heading before it.
//! Only attribute-free opening tags count, and the closing tag must have
//! the same level and sit on the same line.

use crate::issues::{IssueCategory, IssueMap, IssueRecord};
use crate::locator::Document;
use crate::rules::Rule;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// `<hN>...</hN>` for every single-digit level. One alternative per level
/// stands in for a backreference, so the closing tag always matches the
/// opening level and `.` keeps the pair on one line.
static HEADING: LazyLock<Regex> = LazyLock::new(|| {
    let alternatives: Vec<String> = (0..=9).map(|n| format!("<h{n}>.*?</h{n}>")).collect();
    Regex::new(&format!("(?i){}", alternatives.join("|"))).expect("valid regex")
});

/// A matched heading element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heading<'a> {
    pub level: u32,
    pub element: &'a str,
}

/// Find heading elements in document order
pub fn find_headings(text: &str) -> Vec<Heading<'_>> {
    HEADING
        .find_iter(text)
        .filter_map(|m| {
            let element = m.as_str();
            // `<h` then the level digit
            let level = element.chars().nth(2)?.to_digit(10)?;
            Some(Heading { level, element })
        })
        .collect()
}

pub struct SkippedHeadingsRule;

impl Rule for SkippedHeadingsRule {
    fn name(&self) -> &str {
        "Skipped heading levels"
    }

    fn category(&self) -> IssueCategory {
        IssueCategory::SkippedHeadings
    }

    fn deduction(&self) -> u32 {
        10
    }

    fn evaluate(&self, document: &Document<'_>, issues: &mut IssueMap) -> u32 {
        let headings = find_headings(document.text);
        let mut deducted = 0;

        for pair in headings.windows(2) {
            let (previous, current) = (pair[0], pair[1]);
            if current.level > previous.level + 1 {
                debug!(
                    from = previous.level,
                    to = current.level,
                    "heading level skipped"
                );
                issues.record(IssueRecord::new(
                    self.category(),
                    document.line_of(current.element),
                    current.element,
                ));
                deducted += self.deduction();
            }
        }

        deducted
    }
}
