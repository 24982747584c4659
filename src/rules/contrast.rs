// SPDX-License-Identifier: PMPL-1.0-or-later
//! Color contrast rule - WCAG 1.4.3 Contrast (Minimum)
//!
//! Every `color:` / `background-color:` value in the document goes into one
//! list. Value `i` is treated as text color and value `(i + 1) % n` as its
//! background, so the scan wraps around and a lone declaration is compared
//! with itself. Pairs containing an unparseable value are skipped.

use crate::color::{self, MIN_CONTRAST_RATIO};
use crate::issues::{IssueCategory, IssueMap, IssueRecord};
use crate::locator::Document;
use crate::rules::Rule;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static COLOR_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:color|background-color):\s*(#[a-f0-9]{6}|rgba?\([^)]+\))")
        .expect("valid regex")
});

/// Declared color values in document order
pub fn color_values(text: &str) -> Vec<&str> {
    COLOR_DECLARATION
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
        .collect()
}

pub struct LowColorContrastRule;

impl Rule for LowColorContrastRule {
    fn name(&self) -> &str {
        "Low color contrast"
    }

    fn category(&self) -> IssueCategory {
        IssueCategory::LowColorContrast
    }

    fn deduction(&self) -> u32 {
        5
    }

    fn evaluate(&self, document: &Document<'_>, issues: &mut IssueMap) -> u32 {
        let values = color_values(document.text);
        let mut deducted = 0;

        for (i, text_color) in values.iter().enumerate() {
            let background = values[(i + 1) % values.len()];

            let (Some(fg), Some(bg)) = (
                color::parse_color(text_color),
                color::parse_color(background),
            ) else {
                debug!(text_color, background, "skipping unparseable color pair");
                continue;
            };

            let ratio = color::contrast_ratio(fg, bg);
            if ratio < MIN_CONTRAST_RATIO {
                debug!(text_color, background, ratio, "low contrast pair");
                issues.record(IssueRecord::new(
                    self.category(),
                    document.line_of(text_color),
                    format!("Color: {text_color}, Background: {background}"),
                ));
                deducted += self.deduction();
            }
        }

        deducted
    }
}
