// SPDX-License-Identifier: PMPL-1.0-or-later
//! a11y-audit - HTML Accessibility Compliance Scorer
//!
//! Scans a raw HTML document with a fixed set of pattern-based checks and
//! produces a compliance score (100 minus every deduction, never clamped)
//! together with a categorized map of the issues found.
//!
//! ## Rules
//!
//! Evaluated in this order:
//!
//! - **Missing alt** (`missing_alt`, -5): `<img>` without `alt="`
//! - **Skipped headings** (`skipped_headings`, -10): `<h1>` followed by `<h3>`
//! - **Low color contrast** (`low_color_contrast`, -5): consecutive color
//!   declarations below 4.5:1
//! - **Missing tabindex** (`missing_tabindex`, -5): links and buttons
//! - **Missing labels** (`missing_labels`, -5): unlabeled `<input>`
//! - **Missing skip link** (`missing_skip_link`, -5)
//! - **Font size too small** (`font_size_too_small`, -5): below 16px
//! - **Broken links** (`broken_links`, -5): `href="#"`
//! - **Missing input labels** (`missing_input_labels`, -10)
//!
//! ## Example
//!
//! ```
//! let result = a11y_audit::analyze(r#"<img src="image.jpg" />"#);
//! assert_eq!(result.compliance_score, 90);
//! assert!(result.issues.contains_key("missing_alt"));
//! ```

pub mod api;
pub mod catalog;
pub mod color;
pub mod config;
pub mod engine;
pub mod error;
pub mod issues;
pub mod labels;
pub mod locator;
pub mod report;
pub mod rules;
pub mod scanner;

pub use engine::{analyze, RuleEngine};
pub use error::{AuditError, Result};
pub use issues::{AnalysisResult, IssueCategory, IssueGroup, IssueMap, IssueRecord};
