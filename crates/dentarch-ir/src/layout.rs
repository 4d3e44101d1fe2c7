//! Anatomical layout tables.
//!
//! The position table maps every tooth number to a fixed chart-space
//! position. It is data, not code: the built-in Universal arrangement is
//! generated once from the arch parameters below, and a substituted table
//! (alternate scheme, alternate arch shape) can be loaded from TOML without
//! touching any rendering logic.

use std::collections::BTreeMap;

use serde::Deserialize;
use thiserror::Error;

use crate::numbering::{NumberingScheme, ToothNumber, ToothNumberError};
use crate::status::Surface;
use crate::Vec3;

/// Half-width of the dental arch.
const ARCH_HALF_WIDTH: f64 = 4.0;
/// Front-to-back depth of the dental arch.
const ARCH_DEPTH: f64 = 2.4;
/// Vertical gap between each arch and the occlusal plane.
const ARCH_GAP: f64 = 0.4;

/// Errors from layout table construction.
#[derive(Error, Debug)]
pub enum LayoutError {
    /// Table could not be parsed as TOML.
    #[error("layout parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// A position label is not a tooth number in the table's scheme.
    #[error(transparent)]
    Label(#[from] ToothNumberError),
    /// The same tooth appears more than once.
    #[error("duplicate layout entry for tooth {0}")]
    Duplicate(ToothNumber),
    /// A tooth number has no position entry.
    #[error("missing layout entry for tooth {0}")]
    Missing(ToothNumber),
}

/// The fixed 32-entry position table.
///
/// Invariant: exactly one entry exists per tooth number, enforced at
/// construction, so [`LayoutTable::position`] is total.
#[derive(Debug, Clone)]
pub struct LayoutTable {
    scheme: NumberingScheme,
    positions: BTreeMap<ToothNumber, Vec3>,
}

/// On-disk shape of a layout table.
#[derive(Deserialize)]
struct LayoutFile {
    #[serde(default)]
    scheme: NumberingScheme,
    positions: BTreeMap<String, [f64; 3]>,
}

impl LayoutTable {
    /// The built-in Universal arrangement: two opposing semi-elliptical
    /// arches in the XY plane, upper arch above the occlusal plane, lower
    /// below, teeth 1–16 sweeping the upper arch and 17–32 the lower.
    pub fn universal() -> Self {
        let mut positions = BTreeMap::new();
        for n in ToothNumber::all() {
            positions.insert(n, arch_position(n));
        }
        Self {
            scheme: NumberingScheme::Universal,
            positions,
        }
    }

    /// Load a substituted table from TOML.
    ///
    /// ```toml
    /// scheme = "fdi"
    ///
    /// [positions]
    /// "18" = [-4.0, 0.4, 0.0]
    /// # ... one entry per tooth
    /// ```
    pub fn from_toml(text: &str) -> Result<Self, LayoutError> {
        let file: LayoutFile = toml::from_str(text)?;
        let mut positions = BTreeMap::new();
        for (label, [x, y, z]) in &file.positions {
            let n = file.scheme.parse_label(label)?;
            if positions.insert(n, Vec3::new(*x, *y, *z)).is_some() {
                return Err(LayoutError::Duplicate(n));
            }
        }
        for n in ToothNumber::all() {
            if !positions.contains_key(&n) {
                return Err(LayoutError::Missing(n));
            }
        }
        Ok(Self {
            scheme: file.scheme,
            positions,
        })
    }

    /// The scheme wire labels are written in.
    pub fn scheme(&self) -> NumberingScheme {
        self.scheme
    }

    /// Position of a tooth. Total over all 32 numbers.
    pub fn position(&self, n: ToothNumber) -> Vec3 {
        // The constructor guarantees one entry per number.
        self.positions[&n]
    }

    /// All entries in Universal order.
    pub fn entries(&self) -> impl Iterator<Item = (ToothNumber, Vec3)> + '_ {
        self.positions.iter().map(|(n, p)| (*n, *p))
    }
}

impl Default for LayoutTable {
    fn default() -> Self {
        Self::universal()
    }
}

/// Position of one tooth on the built-in arches.
fn arch_position(n: ToothNumber) -> Vec3 {
    let num = n.get();
    // Sweep parameter 0..=1 along each arch of 16 teeth. The upper arch
    // runs tooth 1 (angle pi) to 16 (angle 0); the lower runs 17 (angle 0)
    // to 32 (angle pi) so numbering stays continuous at the crossover.
    let (t, upper) = if n.is_upper() {
        ((num - 1) as f64 / 15.0, true)
    } else {
        ((num - 17) as f64 / 15.0, false)
    };
    let angle = if upper {
        std::f64::consts::PI * (1.0 - t)
    } else {
        std::f64::consts::PI * t
    };
    let x = ARCH_HALF_WIDTH * angle.cos();
    let lift = ARCH_GAP + ARCH_DEPTH * angle.sin();
    let y = if upper { lift } else { -lift };
    Vec3::new(x, y, 0.0)
}

/// Fixed offset of each surface relative to the tooth center, used to place
/// surface-localized restoration overlays.
pub fn surface_offset(surface: Surface) -> Vec3 {
    match surface {
        Surface::Mesial => Vec3::new(0.3, 0.0, 0.0),
        Surface::Distal => Vec3::new(-0.3, 0.0, 0.0),
        Surface::Occlusal => Vec3::new(0.0, 0.35, 0.0),
        Surface::Incisal => Vec3::new(0.0, 0.4, 0.0),
        Surface::Buccal => Vec3::new(0.0, 0.0, 0.3),
        Surface::Facial => Vec3::new(0.0, 0.0, 0.35),
        Surface::Lingual => Vec3::new(0.0, 0.0, -0.3),
    }
}
