//! Chart records and the pure assembly step.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::finding::AiFinding;
use crate::layout::LayoutTable;
use crate::numbering::ToothNumber;
use crate::status::{RestorationType, Surface, ToothStatus};
use crate::Vec3;

/// A restoration as recorded by the chart source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestorationRecord {
    /// The kind of work.
    pub restoration_type: RestorationType,
    /// Surfaces the work is localized to; empty means full coverage.
    #[serde(default)]
    pub surfaces: Vec<Surface>,
}

/// One tooth's entry as returned by the chart source.
///
/// Teeth without an entry are synthesized as present with no restoration;
/// the source only records departures from that default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartRecord {
    /// Wire label in the layout table's numbering scheme.
    pub tooth_number: String,
    /// Clinical status.
    #[serde(default)]
    pub status: ToothStatus,
    /// Current restoration, if any.
    #[serde(default)]
    pub current_restoration: Option<RestorationRecord>,
}

/// The fully merged per-tooth state the scene renders.
///
/// Always produced in complete sets of 32 by [`assemble_chart`]; never
/// mutated in place. `highlight` is derived: true iff `ai_findings` is
/// non-empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToothData {
    /// Canonical tooth number.
    pub number: ToothNumber,
    /// Clinical status.
    pub status: ToothStatus,
    /// Chart-space position from the layout table.
    pub position: Vec3,
    /// Current restoration, if any.
    pub restoration: Option<RestorationType>,
    /// Surfaces the restoration is localized to.
    pub surfaces: Vec<Surface>,
    /// Derived: whether any AI finding targets this tooth.
    pub highlight: bool,
    /// AI findings for this tooth, in source order.
    pub ai_findings: Vec<AiFinding>,
}

impl ToothData {
    /// The most severe finding on this tooth, if any.
    pub fn worst_finding(&self) -> Option<&AiFinding> {
        self.ai_findings.iter().max_by_key(|f| f.severity)
    }
}

/// Merge chart records and AI findings into the complete 32-entry array.
///
/// For every tooth number in the layout table, the matching chart record is
/// looked up (defaulting to present with no restoration when absent) and
/// every finding whose `tooth` matches is collected. Records whose label
/// does not parse in the table's scheme are skipped with a warning; when a
/// tooth appears twice the first record wins.
pub fn assemble_chart(
    layout: &LayoutTable,
    records: &[ChartRecord],
    findings: &[AiFinding],
) -> Vec<ToothData> {
    let mut by_number: HashMap<ToothNumber, &ChartRecord> = HashMap::new();
    for record in records {
        match layout.scheme().parse_label(&record.tooth_number) {
            Ok(n) => {
                by_number.entry(n).or_insert(record);
            }
            Err(err) => {
                tracing::warn!("skipping chart record: {err}");
            }
        }
    }

    ToothNumber::all()
        .map(|n| {
            let record = by_number.get(&n);
            let (restoration, surfaces) = record
                .and_then(|r| r.current_restoration.as_ref())
                .map(|r| (Some(r.restoration_type), r.surfaces.clone()))
                .unwrap_or((None, Vec::new()));
            let ai_findings: Vec<AiFinding> = findings
                .iter()
                .filter(|f| f.tooth == n)
                .cloned()
                .collect();
            ToothData {
                number: n,
                status: record.map(|r| r.status).unwrap_or_default(),
                position: layout.position(n),
                restoration,
                surfaces,
                highlight: !ai_findings.is_empty(),
                ai_findings,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finding::Severity;

    fn finding(tooth: u8, severity: Severity) -> AiFinding {
        AiFinding {
            tooth: ToothNumber::new(tooth).unwrap(),
            finding_type: "caries".to_string(),
            severity,
            confidence: 0.9,
            description: "test finding".to_string(),
            treatment_suggestions: Vec::new(),
        }
    }

    #[test]
    fn always_exactly_32_distinct_records() {
        let layout = LayoutTable::universal();
        let teeth = assemble_chart(&layout, &[], &[]);
        assert_eq!(teeth.len(), 32);
        let mut numbers: Vec<u8> = teeth.iter().map(|t| t.number.get()).collect();
        numbers.sort_unstable();
        numbers.dedup();
        assert_eq!(numbers.len(), 32);
    }

    #[test]
    fn missing_entry_defaults_to_present() {
        let layout = LayoutTable::universal();
        let records = vec![ChartRecord {
            tooth_number: "3".to_string(),
            status: ToothStatus::Impacted,
            current_restoration: None,
        }];
        let teeth = assemble_chart(&layout, &records, &[]);
        let t14 = teeth.iter().find(|t| t.number.get() == 14).unwrap();
        assert_eq!(t14.status, ToothStatus::Present);
        assert!(t14.restoration.is_none());
        assert!(t14.ai_findings.is_empty());
        assert!(!t14.highlight);
    }

    #[test]
    fn highlight_follows_findings_exactly() {
        let layout = LayoutTable::universal();
        let teeth = assemble_chart(&layout, &[], &[finding(30, Severity::Critical)]);
        for tooth in &teeth {
            if tooth.number.get() == 30 {
                assert!(tooth.highlight);
                assert_eq!(tooth.ai_findings.len(), 1);
            } else {
                assert!(!tooth.highlight);
                assert!(tooth.ai_findings.is_empty());
            }
        }
    }

    #[test]
    fn highlight_invariant_holds_for_every_record() {
        let layout = LayoutTable::universal();
        let findings = vec![
            finding(1, Severity::Low),
            finding(1, Severity::High),
            finding(25, Severity::Medium),
        ];
        for tooth in assemble_chart(&layout, &[], &findings) {
            assert_eq!(tooth.highlight, !tooth.ai_findings.is_empty());
        }
    }

    #[test]
    fn restoration_surfaces_carried_over() {
        let layout = LayoutTable::universal();
        let records = vec![ChartRecord {
            tooth_number: "19".to_string(),
            status: ToothStatus::Present,
            current_restoration: Some(RestorationRecord {
                restoration_type: RestorationType::Amalgam,
                surfaces: vec![Surface::Mesial, Surface::Occlusal],
            }),
        }];
        let teeth = assemble_chart(&layout, &records, &[]);
        let t19 = teeth.iter().find(|t| t.number.get() == 19).unwrap();
        assert_eq!(t19.restoration, Some(RestorationType::Amalgam));
        assert_eq!(t19.surfaces, vec![Surface::Mesial, Surface::Occlusal]);
    }

    #[test]
    fn malformed_labels_are_skipped() {
        let layout = LayoutTable::universal();
        let records = vec![
            ChartRecord {
                tooth_number: "not-a-tooth".to_string(),
                status: ToothStatus::Extracted,
                current_restoration: None,
            },
            ChartRecord {
                tooth_number: "8".to_string(),
                status: ToothStatus::Extracted,
                current_restoration: None,
            },
        ];
        let teeth = assemble_chart(&layout, &records, &[]);
        assert_eq!(teeth.len(), 32);
        let extracted: Vec<u8> = teeth
            .iter()
            .filter(|t| t.status == ToothStatus::Extracted)
            .map(|t| t.number.get())
            .collect();
        assert_eq!(extracted, vec![8]);
    }

    #[test]
    fn first_record_wins_on_duplicates() {
        let layout = LayoutTable::universal();
        let records = vec![
            ChartRecord {
                tooth_number: "5".to_string(),
                status: ToothStatus::Impacted,
                current_restoration: None,
            },
            ChartRecord {
                tooth_number: "5".to_string(),
                status: ToothStatus::Missing,
                current_restoration: None,
            },
        ];
        let teeth = assemble_chart(&layout, &records, &[]);
        let t5 = teeth.iter().find(|t| t.number.get() == 5).unwrap();
        assert_eq!(t5.status, ToothStatus::Impacted);
    }

    #[test]
    fn worst_finding_picks_highest_severity() {
        let layout = LayoutTable::universal();
        let findings = vec![
            finding(12, Severity::Low),
            finding(12, Severity::Critical),
            finding(12, Severity::Medium),
        ];
        let teeth = assemble_chart(&layout, &[], &findings);
        let t12 = teeth.iter().find(|t| t.number.get() == 12).unwrap();
        assert_eq!(t12.worst_finding().unwrap().severity, Severity::Critical);
    }
}
