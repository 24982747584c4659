// SPDX-License-Identifier: PMPL-1.0-or-later
//! Issue model: categories, records, per-category groups and the final
//! analysis result.
//!
//! The serialized form keeps the historical wire shape: every category is
//! an object `{issue, line, details: [...]}` except `missing_labels`, which
//! is a flat array of `{issue, line, details}` entries carrying the faulted
//! snippet directly.

use crate::catalog::{self, CatalogEntry};
use serde::ser::{SerializeMap, SerializeSeq, SerializeStruct};
use serde::{Serialize, Serializer};

/// Stable issue category keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IssueCategory {
    MissingAlt,
    SkippedHeadings,
    LowColorContrast,
    MissingTabindex,
    MissingLabels,
    MissingSkipLink,
    FontSizeTooSmall,
    BrokenLinks,
    MissingInputLabels,
}

/// How a category is rendered in the `issues` object
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupShape {
    /// `{issue, line, details: [{suggested_fix, faulted_html, sample_html}]}`
    Grouped,
    /// `[{issue, line, details: faulted_html}]`
    Flat,
}

impl IssueCategory {
    /// Every category, in rule evaluation order
    pub const ALL: [IssueCategory; 9] = [
        IssueCategory::MissingAlt,
        IssueCategory::SkippedHeadings,
        IssueCategory::LowColorContrast,
        IssueCategory::MissingTabindex,
        IssueCategory::MissingLabels,
        IssueCategory::MissingSkipLink,
        IssueCategory::FontSizeTooSmall,
        IssueCategory::BrokenLinks,
        IssueCategory::MissingInputLabels,
    ];

    /// Wire key, e.g. `missing_alt`
    pub fn key(self) -> &'static str {
        match self {
            IssueCategory::MissingAlt => "missing_alt",
            IssueCategory::SkippedHeadings => "skipped_headings",
            IssueCategory::LowColorContrast => "low_color_contrast",
            IssueCategory::MissingTabindex => "missing_tabindex",
            IssueCategory::MissingLabels => "missing_labels",
            IssueCategory::MissingSkipLink => "missing_skip_link",
            IssueCategory::FontSizeTooSmall => "font_size_too_small",
            IssueCategory::BrokenLinks => "broken_links",
            IssueCategory::MissingInputLabels => "missing_input_labels",
        }
    }

    /// Look up a category by its wire key
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }

    /// Static title/fix/sample text for this category
    pub fn entry(self) -> &'static CatalogEntry {
        catalog::entry(self)
    }

    pub fn title(self) -> &'static str {
        self.entry().title
    }

    pub fn shape(self) -> GroupShape {
        match self {
            IssueCategory::MissingLabels => GroupShape::Flat,
            _ => GroupShape::Grouped,
        }
    }
}

impl std::fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// One detected violation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueRecord {
    pub category: IssueCategory,
    /// 1-based line, 0 when the snippet could not be located
    pub line: usize,
    pub faulted_html: String,
    pub suggested_fix: &'static str,
    pub sample_html: &'static str,
}

impl IssueRecord {
    /// Create a record, filling fix and sample text from the catalog
    pub fn new(category: IssueCategory, line: usize, faulted_html: impl Into<String>) -> Self {
        let entry = category.entry();
        Self {
            category,
            line,
            faulted_html: faulted_html.into(),
            suggested_fix: entry.suggested_fix,
            sample_html: entry.sample_html,
        }
    }
}

/// All records of one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueGroup {
    pub category: IssueCategory,
    /// Line of the first record inserted into the group
    pub line: usize,
    pub records: Vec<IssueRecord>,
}

impl IssueGroup {
    fn new(first: IssueRecord) -> Self {
        Self {
            category: first.category,
            line: first.line,
            records: vec![first],
        }
    }

    pub fn title(&self) -> &'static str {
        self.category.title()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[derive(Serialize)]
struct GroupDetail<'a> {
    suggested_fix: &'a str,
    faulted_html: &'a str,
    sample_html: &'a str,
}

#[derive(Serialize)]
struct FlatEntry<'a> {
    issue: &'a str,
    line: usize,
    details: &'a str,
}

impl Serialize for IssueGroup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.category.shape() {
            GroupShape::Grouped => {
                let details: Vec<GroupDetail<'_>> = self
                    .records
                    .iter()
                    .map(|r| GroupDetail {
                        suggested_fix: r.suggested_fix,
                        faulted_html: &r.faulted_html,
                        sample_html: r.sample_html,
                    })
                    .collect();
                let mut state = serializer.serialize_struct("IssueGroup", 3)?;
                state.serialize_field("issue", self.title())?;
                state.serialize_field("line", &self.line)?;
                state.serialize_field("details", &details)?;
                state.end()
            }
            GroupShape::Flat => {
                let mut seq = serializer.serialize_seq(Some(self.records.len()))?;
                for record in &self.records {
                    seq.serialize_element(&FlatEntry {
                        issue: self.title(),
                        line: record.line,
                        details: &record.faulted_html,
                    })?;
                }
                seq.end()
            }
        }
    }
}

/// Issue accumulator keyed by category, kept in first-insertion order.
///
/// A category only appears once it holds at least one record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueMap {
    groups: Vec<IssueGroup>,
}

impl IssueMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to its category group, creating the group on first use
    pub fn record(&mut self, record: IssueRecord) {
        match self.groups.iter_mut().find(|g| g.category == record.category) {
            Some(group) => group.records.push(record),
            None => self.groups.push(IssueGroup::new(record)),
        }
    }

    pub fn get(&self, category: IssueCategory) -> Option<&IssueGroup> {
        self.groups.iter().find(|g| g.category == category)
    }

    pub fn contains(&self, category: IssueCategory) -> bool {
        self.get(category).is_some()
    }

    /// Look up by wire key (`"missing_alt"`)
    pub fn contains_key(&self, key: &str) -> bool {
        IssueCategory::from_key(key).is_some_and(|c| self.contains(c))
    }

    /// Categories in first-insertion order
    pub fn categories(&self) -> impl Iterator<Item = IssueCategory> + '_ {
        self.groups.iter().map(|g| g.category)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IssueGroup> {
        self.groups.iter()
    }

    /// Number of categories present
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of records across all categories
    pub fn total_records(&self) -> usize {
        self.groups.iter().map(IssueGroup::len).sum()
    }
}

impl<'a> IntoIterator for &'a IssueMap {
    type Item = &'a IssueGroup;
    type IntoIter = std::slice::Iter<'a, IssueGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

impl Serialize for IssueMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for group in &self.groups {
            map.serialize_entry(group.category.key(), group)?;
        }
        map.end()
    }
}

/// Score and issues for one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    pub compliance_score: i64,
    pub issues: IssueMap,
}

impl AnalysisResult {
    /// True when no rule recorded anything
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}
