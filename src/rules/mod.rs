// SPDX-License-Identifier: PMPL-1.0-or-later
//! Accessibility rules.
//!
//! Each rule scans the raw document text for one element pattern, records
//! an [`IssueRecord`](crate::issues::IssueRecord) per violation into the
//! caller's [`IssueMap`] and returns the points it deducts. Rules never
//! read each other's output.

pub mod alt_text;
pub mod contrast;
pub mod font_size;
pub mod forms;
pub mod headings;
pub mod keyboard;
pub mod links;
pub mod skip_link;

use crate::issues::{IssueCategory, IssueMap};
use crate::locator::Document;

/// Trait implemented by all rules
pub trait Rule: Send + Sync {
    /// Human-readable name of this rule
    fn name(&self) -> &str;

    /// Category every record of this rule is filed under
    fn category(&self) -> IssueCategory;

    /// Points deducted per violation
    fn deduction(&self) -> u32;

    /// Scan the document, record violations and return the total deduction
    fn evaluate(&self, document: &Document<'_>, issues: &mut IssueMap) -> u32;
}

/// All rules in evaluation order
pub fn default_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(alt_text::MissingAltRule),
        Box::new(headings::SkippedHeadingsRule),
        Box::new(contrast::LowColorContrastRule),
        Box::new(keyboard::MissingTabindexRule),
        Box::new(forms::MissingLabelsRule),
        Box::new(skip_link::MissingSkipLinkRule),
        Box::new(font_size::FontSizeTooSmallRule),
        Box::new(links::BrokenLinksRule),
        Box::new(forms::MissingInputLabelsRule),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rule_order_matches_categories() {
        let categories: Vec<IssueCategory> =
            default_rules().iter().map(|r| r.category()).collect();
        assert_eq!(categories, IssueCategory::ALL.to_vec());
    }
}
