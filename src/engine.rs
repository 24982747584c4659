// SPDX-License-Identifier: PMPL-1.0-or-later
//! Rule engine: runs every rule in a fixed order over one document and
//! turns the deductions into a compliance score.

use crate::issues::{AnalysisResult, IssueMap};
use crate::locator::Document;
use crate::rules::{self, Rule};
use std::sync::LazyLock;
use tracing::debug;

/// Score of a document with no violations
pub const BASE_SCORE: i64 = 100;

static DEFAULT_ENGINE: LazyLock<RuleEngine> = LazyLock::new(RuleEngine::default);

/// Analyze a document with the default rule set
pub fn analyze(html: &str) -> AnalysisResult {
    DEFAULT_ENGINE.analyze(html)
}

/// Ordered rule set. Stateless between calls, so one engine can serve
/// any number of documents concurrently.
pub struct RuleEngine {
    rules: Vec<Box<dyn Rule>>,
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new(rules::default_rules())
    }
}

impl RuleEngine {
    /// Build an engine that evaluates `rules` in the given order
    pub fn new(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }

    /// Score a document.
    ///
    /// The score starts at [`BASE_SCORE`] and every rule's deduction is
    /// subtracted; there is no lower bound.
    pub fn analyze(&self, html: &str) -> AnalysisResult {
        let document = Document::new(html);
        let mut issues = IssueMap::new();
        let mut score = BASE_SCORE;

        for rule in &self.rules {
            let deducted = rule.evaluate(&document, &mut issues);
            debug!(rule = rule.name(), deducted, "rule evaluated");
            score -= i64::from(deducted);
        }

        AnalysisResult {
            compliance_score: score,
            issues,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issues::IssueCategory;
    use crate::rules::skip_link::SKIP_LINK_MARKUP;

    #[test]
    fn test_empty_document_only_misses_skip_link() {
        let result = analyze("");
        assert_eq!(result.compliance_score, 95);
        assert_eq!(result.issues.categories().collect::<Vec<_>>(), vec![IssueCategory::MissingSkipLink]);
    }

    #[test]
    fn test_clean_document_only_misses_tabindex() {
        let html = format!(
            "<html><body>{SKIP_LINK_MARKUP}<h1>Title</h1><h2>Sub</h2>\
             <img src=\"a.png\" alt=\"A\"><label for=\"q\">Q</label>\
             <input type=\"text\" id=\"q\"></body></html>"
        );
        let result = analyze(&html);
        // the skip link itself is an <a href> without tabindex
        assert_eq!(result.compliance_score, 95);
        assert_eq!(result.issues.categories().collect::<Vec<_>>(), vec![IssueCategory::MissingTabindex]);
    }

    #[test]
    fn test_unlabeled_input_hits_both_label_rules() {
        let result = analyze(r#"<input type="text" id="name" />"#);
        // 5 (missing_labels) + 5 (skip link) + 10 (missing_input_labels)
        assert_eq!(result.compliance_score, 80);
        let order: Vec<_> = result.issues.categories().collect();
        assert_eq!(
            order,
            vec![
                IssueCategory::MissingLabels,
                IssueCategory::MissingSkipLink,
                IssueCategory::MissingInputLabels,
            ]
        );
    }

    #[test]
    fn test_score_is_not_clamped() {
        let html = "<img src=\"x\">".repeat(30);
        // identical tags are still counted individually by the alt rule
        let result = analyze(&html);
        assert_eq!(result.compliance_score, 100 - 30 * 5 - 5);
        assert!(result.compliance_score < 0);
    }

    #[test]
    fn test_analysis_is_idempotent() {
        let html = r##"<h1>A</h1><h4>B</h4><a href="#">x</a><p style="font-size: 9px">y</p>"##;
        assert_eq!(analyze(html), analyze(html));
    }

    #[test]
    fn test_custom_rule_subset() {
        let engine = RuleEngine::new(vec![Box::new(crate::rules::links::BrokenLinksRule)]);
        let result = engine.analyze(r##"<a href="#">x</a>"##);
        assert_eq!(result.compliance_score, 95);
        assert_eq!(result.issues.len(), 1);
        assert_eq!(engine.rules().len(), 1);
    }
}
