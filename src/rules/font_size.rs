// SPDX-License-Identifier: PMPL-1.0-or-later
//! Text size rule - WCAG 1.4.4 Resize Text
//!
//! Pixel font sizes below 16px are flagged. Other units are ignored.

use crate::issues::{IssueCategory, IssueMap, IssueRecord};
use crate::locator::Document;
use crate::rules::Rule;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Smallest accepted pixel size
pub const MIN_FONT_SIZE_PX: u64 = 16;

static FONT_SIZE_PX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)font-size:\s*([0-9]+)px").expect("valid regex"));

pub struct FontSizeTooSmallRule;

impl Rule for FontSizeTooSmallRule {
    fn name(&self) -> &str {
        "Font size too small"
    }

    fn category(&self) -> IssueCategory {
        IssueCategory::FontSizeTooSmall
    }

    fn deduction(&self) -> u32 {
        5
    }

    fn evaluate(&self, document: &Document<'_>, issues: &mut IssueMap) -> u32 {
        let mut deducted = 0;

        for size in FONT_SIZE_PX
            .captures_iter(document.text)
            .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        {
            // Oversized digit strings cannot be below the minimum
            let too_small = size.parse::<u64>().is_ok_and(|px| px < MIN_FONT_SIZE_PX);
            if !too_small {
                continue;
            }
            debug!(size, "font size below minimum");
            issues.record(IssueRecord::new(
                self.category(),
                document.line_of(&format!("font-size: {size}")),
                format!("<p style='font-size: {size}px;'>Small text</p>"),
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
        let deducted = FontSizeTooSmallRule.evaluate(&Document::new(html), &mut issues);
        (deducted, issues)
    }

    #[test]
    fn test_font_size_too_small() {
        let (deducted, issues) =
            run(r#"<html><body><p style="font-size: 12px;">Small text</p></body></html>"#);
        assert_eq!(deducted, 5);
        let group = issues.get(IssueCategory::FontSizeTooSmall).unwrap();
        assert_eq!(group.len(), 1);
        assert_eq!(group.title(), "Font size too small");
        assert_eq!(
            group.records[0].faulted_html,
            "<p style='font-size: 12px;'>Small text</p>"
        );
        assert_eq!(group.line, 1);
    }

    #[test]
    fn test_sixteen_and_above_pass() {
        assert_eq!(run("p { font-size: 16px; } h1 { font-size: 32px; }").0, 0);
    }

    #[test]
    fn test_other_units_ignored() {
        assert_eq!(run("p { font-size: 0.8em; } small { font-size: 10pt; }").0, 0);
    }

    #[test]
    fn test_unspaced_declaration_has_unresolved_line() {
        let (deducted, issues) = run("p{font-size:10px}");
        assert_eq!(deducted, 5);
        assert_eq!(issues.get(IssueCategory::FontSizeTooSmall).unwrap().line, 0);
    }
}
