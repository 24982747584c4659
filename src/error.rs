// SPDX-License-Identifier: PMPL-1.0-or-later
//! Error types for a11y-audit

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AuditError>;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Document is empty: {0}")]
    EmptyDocument(PathBuf),
}
