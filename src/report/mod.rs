// SPDX-License-Identifier: PMPL-1.0-or-later
//! Report generation for scored documents.
//!
//! Supports multiple output formats:
//! - Text: score and issues per document, human readable
//! - JSON: `{generated_at, documents: [{path, compliance_score, issues}]}`
//! - SARIF: Static Analysis Results Interchange Format for IDE/CI integration

use crate::issues::IssueCategory;
use crate::scanner::ScannedDocument;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Structured JSON
    Json,
    /// SARIF for IDE/CI integration
    Sarif,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Sarif => write!(f, "sarif"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "sarif" => Ok(OutputFormat::Sarif),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

/// Generate a report for scored documents
pub fn generate_report(documents: &[ScannedDocument], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => generate_text_report(documents),
        OutputFormat::Json => generate_json_report(documents, Utc::now()),
        OutputFormat::Sarif => generate_sarif_report(documents),
    }
}

/// Generate human-readable text report
fn generate_text_report(documents: &[ScannedDocument]) -> String {
    let mut output = String::new();

    output.push_str("=== a11y-audit Accessibility Report ===\n\n");

    if documents.is_empty() {
        output.push_str("No HTML documents found.\n");
        return output;
    }

    for document in documents {
        let result = &document.result;
        output.push_str(&format!(
            "{}: compliance score {}\n",
            document.path.display(),
            result.compliance_score
        ));

        if result.is_clean() {
            output.push_str("  No accessibility issues found.\n\n");
            continue;
        }

        for group in &result.issues {
            output.push_str(&format!(
                "  [{}] {} ({} found, first at line {})\n",
                group.category,
                group.title(),
                group.len(),
                group.line
            ));
            for record in &group.records {
                output.push_str(&format!("    line {}: {}\n", record.line, record.faulted_html));
            }
            if let Some(first) = group.records.first() {
                output.push_str(&format!("    Fix: {}\n", first.suggested_fix));
                output.push_str(&format!("    Example: {}\n", first.sample_html));
            }
        }
        output.push('\n');
    }

    let lowest = documents
        .iter()
        .map(|d| d.result.compliance_score)
        .min()
        .unwrap_or_default();
    output.push_str(&format!(
        "{} document(s) scanned, lowest score {}\n",
        documents.len(),
        lowest
    ));

    output
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    generated_at: DateTime<Utc>,
    documents: &'a [ScannedDocument],
}

/// Generate JSON report
fn generate_json_report(documents: &[ScannedDocument], generated_at: DateTime<Utc>) -> String {
    let report = JsonReport {
        generated_at,
        documents,
    };
    serde_json::to_string_pretty(&report).unwrap_or_else(|e| {
        format!("{{\"error\": \"Failed to serialize report: {}\"}}", e)
    })
}

/// SARIF report structure (simplified)
#[derive(Debug, Serialize)]
struct SarifReport {
    #[serde(rename = "$schema")]
    schema: String,
    version: String,
    runs: Vec<SarifRun>,
}

#[derive(Debug, Serialize)]
struct SarifRun {
    tool: SarifTool,
    results: Vec<SarifResult>,
}

#[derive(Debug, Serialize)]
struct SarifTool {
    driver: SarifDriver,
}

#[derive(Debug, Serialize)]
struct SarifDriver {
    name: String,
    version: String,
    rules: Vec<SarifRule>,
}

#[derive(Debug, Serialize)]
struct SarifRule {
    id: String,
    #[serde(rename = "shortDescription")]
    short_description: SarifMessage,
    help: SarifMessage,
}

#[derive(Debug, Serialize)]
struct SarifResult {
    #[serde(rename = "ruleId")]
    rule_id: String,
    level: String,
    message: SarifMessage,
    locations: Vec<SarifLocation>,
}

#[derive(Debug, Serialize)]
struct SarifMessage {
    text: String,
}

#[derive(Debug, Serialize)]
struct SarifLocation {
    #[serde(rename = "physicalLocation")]
    physical_location: SarifPhysicalLocation,
}

#[derive(Debug, Serialize)]
struct SarifPhysicalLocation {
    #[serde(rename = "artifactLocation")]
    artifact_location: SarifArtifactLocation,
    #[serde(skip_serializing_if = "Option::is_none")]
    region: Option<SarifRegion>,
}

#[derive(Debug, Serialize)]
struct SarifArtifactLocation {
    uri: String,
}

#[derive(Debug, Serialize)]
struct SarifRegion {
    #[serde(rename = "startLine")]
    start_line: usize,
}

/// Heavier deductions are reported as errors
fn sarif_level(category: IssueCategory) -> &'static str {
    match category {
        IssueCategory::SkippedHeadings | IssueCategory::MissingInputLabels => "error",
        _ => "warning",
    }
}

/// Generate SARIF report
fn generate_sarif_report(documents: &[ScannedDocument]) -> String {
    let rules = IssueCategory::ALL
        .iter()
        .map(|c| SarifRule {
            id: c.key().to_string(),
            short_description: SarifMessage { text: c.title().to_string() },
            help: SarifMessage { text: c.entry().suggested_fix.to_string() },
        })
        .collect();

    let results = documents
        .iter()
        .flat_map(|document| {
            document.result.issues.iter().flat_map(move |group| {
                group.records.iter().map(move |record| SarifResult {
                    rule_id: group.category.key().to_string(),
                    level: sarif_level(group.category).to_string(),
                    message: SarifMessage {
                        text: format!("{}: {}", group.title(), record.faulted_html),
                    },
                    locations: vec![SarifLocation {
                        physical_location: SarifPhysicalLocation {
                            artifact_location: SarifArtifactLocation {
                                uri: document.path.display().to_string(),
                            },
                            // line 0 means the snippet was not located
                            region: (record.line > 0).then_some(SarifRegion {
                                start_line: record.line,
                            }),
                        },
                    }],
                })
            })
        })
        .collect();

    let report = SarifReport {
        schema: "https://json.schemastore.org/sarif-2.1.0.json".to_string(),
        version: "2.1.0".to_string(),
        runs: vec![SarifRun {
            tool: SarifTool {
                driver: SarifDriver {
                    name: "a11y-audit".to_string(),
                    version: env!("CARGO_PKG_VERSION").to_string(),
                    rules,
                },
            },
            results,
        }],
    };

    serde_json::to_string_pretty(&report).unwrap_or_else(|e| {
        format!("{{\"error\": \"Failed to serialize SARIF report: {}\"}}", e)
    })
}
