//! AI-generated diagnostic findings.

use serde::{Deserialize, Serialize};

use crate::numbering::ToothNumber;

/// Severity of an AI finding, least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Monitor only.
    Low,
    /// Treatment advisable.
    Medium,
    /// Treatment needed.
    High,
    /// Immediate attention.
    Critical,
}

/// A machine-generated diagnostic observation attached to a specific tooth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiFinding {
    /// The tooth this finding refers to.
    pub tooth: ToothNumber,
    /// Finding category (e.g. "caries", "periapical_lesion").
    #[serde(rename = "type")]
    pub finding_type: String,
    /// Severity grade.
    pub severity: Severity,
    /// Model confidence in 0.0..=1.0.
    pub confidence: f64,
    /// Human-readable description.
    pub description: String,
    /// Suggested treatments, possibly empty.
    #[serde(default)]
    pub treatment_suggestions: Vec<String>,
}

/// The AI diagnosis payload for one patient.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Diagnosis {
    /// All findings, in source order.
    pub findings: Vec<AiFinding>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_orders_low_to_critical() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
        assert!(Severity::High < Severity::Critical);
    }

    #[test]
    fn finding_wire_shape() {
        let json = r#"{
            "tooth": "30",
            "type": "caries",
            "severity": "critical",
            "confidence": 0.91,
            "description": "Deep occlusal caries",
            "treatmentSuggestions": ["Root canal", "Crown"]
        }"#;
        let finding: AiFinding = serde_json::from_str(json).unwrap();
        assert_eq!(finding.tooth.get(), 30);
        assert_eq!(finding.severity, Severity::Critical);
        assert_eq!(finding.treatment_suggestions.len(), 2);
    }

    #[test]
    fn suggestions_default_empty() {
        let json = r#"{
            "tooth": "8",
            "type": "wear",
            "severity": "low",
            "confidence": 0.4,
            "description": "Incisal wear facet"
        }"#;
        let finding: AiFinding = serde_json::from_str(json).unwrap();
        assert!(finding.treatment_suggestions.is_empty());
    }
}
