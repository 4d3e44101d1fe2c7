//! File-backed data sources.
//!
//! JSON fixtures standing in for the chart and AI-diagnosis backends: the
//! chart file is an array of chart records, the diagnosis file is a
//! `{ "findings": [...] }` payload.

use std::path::{Path, PathBuf};

use dentarch_chart::{ChartSource, DiagnosisSource, SourceError};
use dentarch_ir::{ChartRecord, Diagnosis};

/// Reads chart records from a JSON file.
pub struct JsonFileChartSource {
    path: PathBuf,
}

impl JsonFileChartSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl ChartSource for JsonFileChartSource {
    async fn fetch_chart(&self, _patient_id: &str) -> Result<Vec<ChartRecord>, SourceError> {
        let text = tokio::fs::read_to_string(&self.path).await?;
        serde_json::from_str(&text).map_err(|e| SourceError::Decode(e.to_string()))
    }
}

/// Reads an AI diagnosis from a JSON file, or yields no findings when no
/// file was given.
pub struct JsonFileDiagnosisSource {
    path: Option<PathBuf>,
}

impl JsonFileDiagnosisSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: Some(path.as_ref().to_path_buf()),
        }
    }

    /// A source that always returns an empty diagnosis.
    pub fn empty() -> Self {
        Self { path: None }
    }
}

impl DiagnosisSource for JsonFileDiagnosisSource {
    async fn fetch_diagnosis(&self, _patient_id: &str) -> Result<Diagnosis, SourceError> {
        let Some(path) = &self.path else {
            return Ok(Diagnosis::default());
        };
        let text = tokio::fs::read_to_string(path).await?;
        serde_json::from_str(&text).map_err(|e| SourceError::Decode(e.to_string()))
    }
}
