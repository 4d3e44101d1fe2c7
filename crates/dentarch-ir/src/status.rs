//! Clinical status, restoration, and surface enums.

use serde::{Deserialize, Serialize};

/// Clinical presence/absence/planned-treatment state of a tooth.
///
/// Governs crown/root visibility and the base material of the rendered
/// tooth. Consumers match exhaustively, so extending the set is a
/// compile-time-checked change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ToothStatus {
    /// Tooth is present with no special state.
    #[default]
    Present,
    /// Tooth is congenitally missing.
    Missing,
    /// Tooth has been extracted.
    Extracted,
    /// Tooth is impacted.
    Impacted,
    /// Extraction is planned.
    PlannedExtraction,
    /// An implant is planned.
    PlannedImplant,
}

/// The kind of dental work applied to a tooth.
///
/// Governs the restoration overlay color and finish. Labels not in the
/// known set parse to [`RestorationType::Other`], which resolves to a
/// generic overlay material rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RestorationType {
    /// Metallic amalgam filling.
    Amalgam,
    /// Tooth-colored composite filling.
    Composite,
    /// Porcelain-fused-to-metal crown.
    CrownPfm,
    /// Zirconia crown.
    CrownZirconia,
    /// Lithium-disilicate (e.max) crown.
    CrownEmax,
    /// Porcelain veneer.
    Veneer,
    /// Implant-supported restoration.
    Implant,
    /// Unrecognized restoration label from the source record.
    Other,
}

impl RestorationType {
    /// Parse a source-record label, tolerating common aliases. Anything
    /// unrecognized becomes [`RestorationType::Other`].
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_uppercase().as_str() {
            "AMALGAM" => Self::Amalgam,
            "COMPOSITE" => Self::Composite,
            "CROWN_PFM" | "PFM" => Self::CrownPfm,
            "CROWN_ZIRCONIA" | "ZIRCONIA" => Self::CrownZirconia,
            "CROWN_EMAX" | "EMAX" | "E.MAX" => Self::CrownEmax,
            "VENEER" => Self::Veneer,
            "IMPLANT" => Self::Implant,
            _ => Self::Other,
        }
    }
}

impl<'de> Deserialize<'de> for RestorationType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let label = String::deserialize(deserializer)?;
        Ok(RestorationType::from_label(&label))
    }
}

/// A standard tooth-face code localizing a restoration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Surface {
    /// Toward the midline, along the arch.
    Mesial,
    /// The biting surface of posterior teeth.
    Occlusal,
    /// Away from the midline, along the arch.
    Distal,
    /// The cheek side.
    Buccal,
    /// The tongue side.
    Lingual,
    /// The outward face of anterior teeth.
    Facial,
    /// The biting edge of anterior teeth.
    Incisal,
}

impl Surface {
    /// Parse a single-letter clinical code (M, O, D, B, L, F, I).
    pub fn from_code(code: char) -> Option<Surface> {
        match code.to_ascii_uppercase() {
            'M' => Some(Surface::Mesial),
            'O' => Some(Surface::Occlusal),
            'D' => Some(Surface::Distal),
            'B' => Some(Surface::Buccal),
            'L' => Some(Surface::Lingual),
            'F' => Some(Surface::Facial),
            'I' => Some(Surface::Incisal),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_wire_labels() {
        let json = serde_json::to_string(&ToothStatus::PlannedExtraction).unwrap();
        assert_eq!(json, r#""PLANNED_EXTRACTION""#);
        let restored: ToothStatus = serde_json::from_str(r#""MISSING""#).unwrap();
        assert_eq!(restored, ToothStatus::Missing);
    }

    #[test]
    fn status_defaults_to_present() {
        assert_eq!(ToothStatus::default(), ToothStatus::Present);
    }

    #[test]
    fn unknown_restoration_degrades_to_other() {
        let restored: RestorationType = serde_json::from_str(r#""GOLD_INLAY""#).unwrap();
        assert_eq!(restored, RestorationType::Other);
        let known: RestorationType = serde_json::from_str(r#""CROWN_ZIRCONIA""#).unwrap();
        assert_eq!(known, RestorationType::CrownZirconia);
    }

    #[test]
    fn restoration_labels_tolerate_aliases() {
        assert_eq!(
            RestorationType::from_label("zirconia"),
            RestorationType::CrownZirconia
        );
        assert_eq!(RestorationType::from_label("e.max"), RestorationType::CrownEmax);
        assert_eq!(RestorationType::from_label(" amalgam "), RestorationType::Amalgam);
    }

    #[test]
    fn surface_codes() {
        assert_eq!(Surface::from_code('m'), Some(Surface::Mesial));
        assert_eq!(Surface::from_code('O'), Some(Surface::Occlusal));
        assert_eq!(Surface::from_code('x'), None);
    }
}
