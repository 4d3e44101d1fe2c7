#![warn(missing_docs)]

//! Material resolution for the dentarch 3D dental chart.
//!
//! Two independent pure passes: clinical status resolves to the tooth's base
//! material, and the restoration type resolves to an overlay material. Both
//! are deterministic tables (same inputs, same descriptors), so resolved
//! materials only need rebuilding when one of the two fields changes.

use dentarch_ir::{RestorationType, Severity, ToothStatus};
use serde::{Deserialize, Serialize};

/// PBR-style drawable material descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialDesc {
    /// Base color as `[r, g, b]` in 0.0..1.0.
    pub color: [f64; 3],
    /// Alpha in 0.0..1.0.
    pub opacity: f64,
    /// Metallic factor (0.0 = dielectric, 1.0 = metal).
    pub metallic: f64,
    /// Roughness factor (0.0 = mirror, 1.0 = diffuse).
    pub roughness: f64,
}

/// The fully resolved material state for one tooth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToothMaterial {
    /// Base material from the clinical status.
    pub base: MaterialDesc,
    /// Restoration overlay, when one should be drawn.
    pub overlay: Option<MaterialDesc>,
    /// Whether crown/root meshes are drawn at all. False for missing and
    /// extracted teeth, which are signaled by absence rather than fading.
    pub meshes_visible: bool,
}

/// Resolve a clinical status to the tooth's base material.
pub fn base_material(status: ToothStatus) -> MaterialDesc {
    match status {
        ToothStatus::Present => MaterialDesc {
            color: [0.98, 0.97, 0.94],
            opacity: 1.0,
            metallic: 0.0,
            roughness: 0.25,
        },
        ToothStatus::Missing | ToothStatus::Extracted => MaterialDesc {
            color: [0.82, 0.82, 0.82],
            opacity: 0.3,
            metallic: 0.0,
            roughness: 0.6,
        },
        ToothStatus::Impacted => MaterialDesc {
            color: [0.45, 0.45, 0.48],
            opacity: 0.5,
            metallic: 0.0,
            roughness: 0.6,
        },
        ToothStatus::PlannedExtraction => MaterialDesc {
            color: [0.86, 0.22, 0.18],
            opacity: 1.0,
            metallic: 0.0,
            roughness: 0.4,
        },
        ToothStatus::PlannedImplant => MaterialDesc {
            color: [0.22, 0.48, 0.85],
            opacity: 1.0,
            metallic: 0.0,
            roughness: 0.4,
        },
    }
}

/// Resolve a restoration type to its overlay material.
///
/// Amalgam carries the highest metalness in the table; the ceramic crowns
/// sit well below it. Unrecognized types resolve to a generic overlay so
/// rendering degrades gracefully.
pub fn overlay_material(restoration: RestorationType) -> MaterialDesc {
    let (color, metallic, roughness) = match restoration {
        RestorationType::Amalgam => ([0.62, 0.64, 0.67], 0.9, 0.35),
        RestorationType::Composite => ([0.93, 0.90, 0.84], 0.05, 0.5),
        RestorationType::CrownPfm => ([0.83, 0.69, 0.34], 0.75, 0.3),
        RestorationType::CrownZirconia => ([0.96, 0.95, 0.92], 0.15, 0.2),
        RestorationType::CrownEmax => ([0.95, 0.94, 0.90], 0.1, 0.15),
        RestorationType::Veneer => ([0.99, 0.99, 0.97], 0.0, 0.1),
        RestorationType::Implant => ([0.74, 0.76, 0.78], 0.85, 0.25),
        RestorationType::Other => ([0.85, 0.85, 0.85], 0.2, 0.4),
    };
    MaterialDesc {
        color,
        opacity: 1.0,
        metallic,
        roughness,
    }
}

/// Compose both passes for one tooth.
///
/// The overlay pass only runs for present teeth with a recorded
/// restoration; missing and extracted teeth additionally have their meshes
/// hidden entirely.
pub fn resolve(status: ToothStatus, restoration: Option<RestorationType>) -> ToothMaterial {
    let meshes_visible = !matches!(status, ToothStatus::Missing | ToothStatus::Extracted);
    let overlay = match status {
        ToothStatus::Present => restoration.map(overlay_material),
        _ => None,
    };
    ToothMaterial {
        base: base_material(status),
        overlay,
        meshes_visible,
    }
}

/// Badge color for a finding severity.
pub fn severity_color(severity: Severity) -> [f64; 3] {
    match severity {
        Severity::Low => [0.32, 0.65, 0.35],
        Severity::Medium => [0.92, 0.76, 0.2],
        Severity::High => [0.93, 0.5, 0.14],
        Severity::Critical => [0.85, 0.16, 0.12],
    }
}
