#![warn(missing_docs)]

//! Procedural tooth geometry for the dentarch 3D dental chart.
//!
//! Constructs declarative crown and root solids for each tooth by anatomical
//! class. Geometry is a pure function of the tooth number: same number, same
//! solids, always. Results memoize cleanly and never churn when clinical
//! status changes. No mesh data lives here; evaluation belongs to a
//! downstream renderer.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod factory;
pub mod solid;

pub use factory::{tooth_geometry, GeometryCache, ToothGeometry};
pub use solid::{PlacedSolid, Solid};

/// Errors from geometry construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// Tooth number outside the fixed 1–32 layout. Well-formed chart data
    /// never produces this; it signals a data-contract violation upstream.
    #[error("invalid tooth number for geometry: {0}")]
    InvalidToothNumber(u8),
}

/// Anatomical class of a tooth, derived from its Universal number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToothClass {
    /// Three-rooted grinding teeth, bulkiest crowns.
    Molar,
    /// Single-rooted transitional teeth.
    Premolar,
    /// Incisors and canines: tallest, thinnest crowns, longest roots.
    Anterior,
}

impl ToothClass {
    /// Classify a Universal tooth number. The ranges mirror left/right
    /// across both arches.
    pub fn of(number: u8) -> Result<ToothClass, GeometryError> {
        match number {
            1..=3 | 14..=16 | 17..=19 | 30..=32 => Ok(ToothClass::Molar),
            4..=5 | 12..=13 | 20..=21 | 28..=29 => Ok(ToothClass::Premolar),
            6..=11 | 22..=27 => Ok(ToothClass::Anterior),
            n => Err(GeometryError::InvalidToothNumber(n)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_ranges_cover_both_arches() {
        for n in [1, 2, 3, 14, 15, 16, 17, 18, 19, 30, 31, 32] {
            assert_eq!(ToothClass::of(n), Ok(ToothClass::Molar), "tooth {n}");
        }
        for n in [4, 5, 12, 13, 20, 21, 28, 29] {
            assert_eq!(ToothClass::of(n), Ok(ToothClass::Premolar), "tooth {n}");
        }
        for n in (6..=11).chain(22..=27) {
            assert_eq!(ToothClass::of(n), Ok(ToothClass::Anterior), "tooth {n}");
        }
    }

    #[test]
    fn out_of_range_is_an_error() {
        assert_eq!(
            ToothClass::of(0),
            Err(GeometryError::InvalidToothNumber(0))
        );
        assert_eq!(
            ToothClass::of(33),
            Err(GeometryError::InvalidToothNumber(33))
        );
    }
}
