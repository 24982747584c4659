// SPDX-License-Identifier: PMPL-1.0-or-later
//! Skip navigation rule - WCAG 2.4.1 Bypass Blocks
//!
//! Whole-document check for one exact skip-link anchor.

use crate::issues::{IssueCategory, IssueMap, IssueRecord};
use crate::locator::Document;
use crate::rules::Rule;

/// The anchor a page must contain verbatim
pub const SKIP_LINK_MARKUP: &str = r##"<a href="#maincontent" class="skip-link">Skip to Content</a>"##;

pub struct MissingSkipLinkRule;

impl Rule for MissingSkipLinkRule {
    fn name(&self) -> &str {
        "Missing skip link"
    }

    fn category(&self) -> IssueCategory {
        IssueCategory::MissingSkipLink
    }

    fn deduction(&self) -> u32 {
        5
    }

    fn evaluate(&self, document: &Document<'_>, issues: &mut IssueMap) -> u32 {
        if document.text.contains(SKIP_LINK_MARKUP) {
            return 0;
        }
        issues.record(IssueRecord::new(self.category(), 1, SKIP_LINK_MARKUP));
        self.deduction()
    }
}
