// SPDX-License-Identifier: PMPL-1.0-or-later
//! Image alt text rule - WCAG 1.1.1 Non-text Content
//!
//! Flags every `<img>` tag that has no `alt="` in it. An empty `alt=""`
//! marks a decorative image and is accepted.

use crate::issues::{IssueCategory, IssueMap, IssueRecord};
use crate::locator::Document;
use crate::rules::Rule;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

static IMG_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<img[^>]*>").expect("valid regex"));

pub struct MissingAltRule;

impl Rule for MissingAltRule {
    fn name(&self) -> &str {
        "Missing alt attribute"
    }

    fn category(&self) -> IssueCategory {
        IssueCategory::MissingAlt
    }

    fn deduction(&self) -> u32 {
        5
    }

    fn evaluate(&self, document: &Document<'_>, issues: &mut IssueMap) -> u32 {
        let mut deducted = 0;

        for img in IMG_TAG.find_iter(document.text).map(|m| m.as_str()) {
            if img.contains("alt=\"") {
                continue;
            }
            debug!(element = img, "image without alt attribute");
            issues.record(IssueRecord::new(self.category(), document.line_of(img), img));
            deducted += self.deduction();
        }

        deducted
    }
}
