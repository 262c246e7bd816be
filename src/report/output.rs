// SPDX-License-Identifier: PMPL-1.0-or-later

//! Serialization helpers for saved diagnosis reports.

use crate::store::DiagnosisRecord;
use anyhow::{Context, Result};
use clap::ValueEnum;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportOutputFormat {
    Json,
    Yaml,
}

impl ReportOutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "json" => Some(ReportOutputFormat::Json),
            "yaml" | "yml" => Some(ReportOutputFormat::Yaml),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ReportOutputFormat::Json => "json",
            ReportOutputFormat::Yaml => "yaml",
        }
    }

    pub fn serialize(&self, record: &DiagnosisRecord) -> Result<String> {
        match self {
            ReportOutputFormat::Json => {
                serde_json::to_string_pretty(record).context("serializing diagnosis report")
            }
            ReportOutputFormat::Yaml => {
                serde_yaml::to_string(record).context("serializing diagnosis report")
            }
        }
    }
}

/// Write a diagnosis record to `path` in the requested format.
pub fn save_record(
    record: &DiagnosisRecord,
    path: &Path,
    format: ReportOutputFormat,
) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("creating report parent directory {}", parent.display())
            })?;
        }
    }
    let content = format.serialize(record)?;
    fs::write(path, content).with_context(|| format!("writing report {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_aliases() {
        assert_eq!(
            ReportOutputFormat::parse("json"),
            Some(ReportOutputFormat::Json)
        );
        assert_eq!(
            ReportOutputFormat::parse("YML"),
            Some(ReportOutputFormat::Yaml)
        );
        assert_eq!(ReportOutputFormat::parse("toml"), None);
    }

    #[test]
    fn extensions_match_formats() {
        assert_eq!(ReportOutputFormat::Json.extension(), "json");
        assert_eq!(ReportOutputFormat::Yaml.extension(), "yaml");
    }
}
