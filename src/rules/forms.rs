// SPDX-License-Identifier: PMPL-1.0-or-later
//! Form label rules - WCAG 3.3.2 Labels or Instructions
//!
//! Two rules scan the same `<input>` elements with the same heuristic
//! ([`has_associated_label`]) and differ only in weight and output shape:
//! `missing_labels` (5 points, flat list) and `missing_input_labels`
//! (10 points, grouped). Identical input tags are evaluated once per rule.

use crate::issues::{IssueCategory, IssueMap, IssueRecord};
use crate::labels::has_associated_label;
use crate::locator::Document;
use crate::rules::Rule;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::debug;

static INPUT_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<input[^>]*>").expect("valid regex"));

/// Input tags in document order, first occurrence of each literal only
pub fn unique_inputs(text: &str) -> Vec<&str> {
    let mut seen = HashSet::new();
    INPUT_TAG
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|input| seen.insert(*input))
        .collect()
}

fn record_unlabeled(
    document: &Document<'_>,
    issues: &mut IssueMap,
    category: IssueCategory,
    deduction: u32,
) -> u32 {
    let mut deducted = 0;

    for input in unique_inputs(document.text) {
        if has_associated_label(input, document.text) {
            continue;
        }
        debug!(element = input, %category, "input without label");
        issues.record(IssueRecord::new(category, document.line_of(input), input));
        deducted += deduction;
    }

    deducted
}

/// Unlabeled inputs, reported as a flat list
pub struct MissingLabelsRule;

impl Rule for MissingLabelsRule {
    fn name(&self) -> &str {
        "Missing form field labels"
    }

    fn category(&self) -> IssueCategory {
        IssueCategory::MissingLabels
    }

    fn deduction(&self) -> u32 {
        5
    }

    fn evaluate(&self, document: &Document<'_>, issues: &mut IssueMap) -> u32 {
        record_unlabeled(document, issues, self.category(), self.deduction())
    }
}

/// Unlabeled inputs, reported as a group
pub struct MissingInputLabelsRule;

impl Rule for MissingInputLabelsRule {
    fn name(&self) -> &str {
        "Missing input labels"
    }

    fn category(&self) -> IssueCategory {
        IssueCategory::MissingInputLabels
    }

    fn deduction(&self) -> u32 {
        10
    }

    fn evaluate(&self, document: &Document<'_>, issues: &mut IssueMap) -> u32 {
        record_unlabeled(document, issues, self.category(), self.deduction())
    }
}
