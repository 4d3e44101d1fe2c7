//! The tooth geometry factory.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use dentarch_ir::Vec3;
use serde::{Deserialize, Serialize};

use crate::solid::{PlacedSolid, Solid};
use crate::{GeometryError, ToothClass};

/// Accessory molar roots are this fraction of the primary root.
const MOLAR_ACCESSORY_SCALE: f64 = 0.8;
/// Lateral offset of the accessory molar roots from the primary.
const MOLAR_ACCESSORY_SPREAD: f64 = 0.26;

/// Crown and root solids for one tooth, in the tooth's local frame.
///
/// The crown is centered at the origin; roots carry their own offsets. Root
/// taper encodes direction: upper-arch roots narrow upward, lower-arch roots
/// narrow downward, both extending away from the occlusal plane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToothGeometry {
    /// Anatomical class the solids were derived from.
    pub class: ToothClass,
    /// The crown box.
    pub crown: Solid,
    /// One root for anteriors and premolars, three for molars.
    pub roots: Vec<PlacedSolid>,
}

/// Crown box dimensions per class.
fn crown_size(class: ToothClass) -> Vec3 {
    match class {
        ToothClass::Molar => Vec3::new(0.9, 0.7, 0.9),
        ToothClass::Premolar => Vec3::new(0.7, 0.8, 0.7),
        ToothClass::Anterior => Vec3::new(0.55, 0.95, 0.55),
    }
}

/// Root taper profile per class.
struct RootProfile {
    base_radius: f64,
    tip_radius: f64,
    length: f64,
}

fn root_profile(class: ToothClass) -> RootProfile {
    match class {
        ToothClass::Molar => RootProfile {
            base_radius: 0.17,
            tip_radius: 0.05,
            length: 0.85,
        },
        ToothClass::Premolar => RootProfile {
            base_radius: 0.14,
            tip_radius: 0.045,
            length: 1.0,
        },
        ToothClass::Anterior => RootProfile {
            base_radius: 0.11,
            tip_radius: 0.035,
            length: 1.25,
        },
    }
}

/// One root solid at a lateral offset, pointing away from the occlusal
/// plane (up for upper-arch teeth, down for lower).
fn place_root(profile: &RootProfile, crown_height: f64, lateral: f64, upper: bool) -> PlacedSolid {
    let (radius_bottom, radius_top) = if upper {
        (profile.base_radius, profile.tip_radius)
    } else {
        (profile.tip_radius, profile.base_radius)
    };
    let y = crown_height / 2.0 + profile.length / 2.0;
    let offset = Vec3::new(lateral, if upper { y } else { -y }, 0.0);
    PlacedSolid::new(
        Solid::TaperedCylinder {
            radius_bottom,
            radius_top,
            height: profile.length,
        },
        offset,
    )
}

/// Build the deterministic crown and root solids for a Universal tooth
/// number.
///
/// Same number, same geometry: no randomness, no time dependence, so the
/// result can be memoized keyed by number alone (see [`GeometryCache`]).
/// Numbers outside 1–32 are a caller error.
pub fn tooth_geometry(number: u8) -> Result<ToothGeometry, GeometryError> {
    let class = ToothClass::of(number)?;
    let upper = number <= 16;
    let size = crown_size(class);
    let profile = root_profile(class);

    let mut roots = vec![place_root(&profile, size.y, 0.0, upper)];
    if class == ToothClass::Molar {
        let accessory = RootProfile {
            base_radius: profile.base_radius * MOLAR_ACCESSORY_SCALE,
            tip_radius: profile.tip_radius * MOLAR_ACCESSORY_SCALE,
            length: profile.length * MOLAR_ACCESSORY_SCALE,
        };
        roots.push(place_root(&accessory, size.y, -MOLAR_ACCESSORY_SPREAD, upper));
        roots.push(place_root(&accessory, size.y, MOLAR_ACCESSORY_SPREAD, upper));
    }

    Ok(ToothGeometry {
        class,
        crown: Solid::Cuboid { size },
        roots,
    })
}

/// Memoized geometry keyed by tooth number.
///
/// Keyed by number only, never by clinical status, so status changes never
/// rebuild geometry.
#[derive(Debug, Default)]
pub struct GeometryCache {
    cache: HashMap<u8, ToothGeometry>,
}

impl GeometryCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Geometry for a tooth number, building it on first use.
    pub fn get(&mut self, number: u8) -> Result<&ToothGeometry, GeometryError> {
        match self.cache.entry(number) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => Ok(entry.insert(tooth_geometry(number)?)),
        }
    }

    /// Number of memoized entries.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// True when nothing has been memoized yet.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deterministic_across_repeated_calls() {
        for n in 1..=32 {
            let a = tooth_geometry(n).unwrap();
            let b = tooth_geometry(n).unwrap();
            assert_eq!(a, b, "tooth {n}");
        }
    }

    #[test]
    fn molars_get_three_roots() {
        let molar = tooth_geometry(30).unwrap();
        assert_eq!(molar.class, ToothClass::Molar);
        assert_eq!(molar.roots.len(), 3);
        // Primary root centered, accessories mirrored laterally.
        assert_eq!(molar.roots[0].offset.x, 0.0);
        assert_eq!(molar.roots[1].offset.x, -molar.roots[2].offset.x);
    }

    #[test]
    fn accessory_roots_are_scaled_down() {
        let molar = tooth_geometry(1).unwrap();
        let primary_height = match molar.roots[0].solid {
            Solid::TaperedCylinder { height, .. } => height,
            _ => panic!("roots must be tapered cylinders"),
        };
        let accessory_height = match molar.roots[1].solid {
            Solid::TaperedCylinder { height, .. } => height,
            _ => panic!("roots must be tapered cylinders"),
        };
        assert!((accessory_height - primary_height * MOLAR_ACCESSORY_SCALE).abs() < 1e-12);
    }

    #[test]
    fn single_root_for_premolars_and_anteriors() {
        assert_eq!(tooth_geometry(4).unwrap().roots.len(), 1);
        assert_eq!(tooth_geometry(8).unwrap().roots.len(), 1);
    }

    #[test]
    fn anterior_crowns_are_tallest_and_thinnest() {
        let molar = crown_size(ToothClass::Molar);
        let premolar = crown_size(ToothClass::Premolar);
        let anterior = crown_size(ToothClass::Anterior);
        assert!(anterior.y > premolar.y && premolar.y > molar.y);
        assert!(anterior.x < premolar.x && premolar.x < molar.x);
    }

    #[test]
    fn anterior_roots_are_longest_and_thinnest() {
        let molar = root_profile(ToothClass::Molar);
        let premolar = root_profile(ToothClass::Premolar);
        let anterior = root_profile(ToothClass::Anterior);
        assert!(anterior.length > premolar.length && premolar.length > molar.length);
        assert!(anterior.base_radius < premolar.base_radius);
        assert!(premolar.base_radius < molar.base_radius);
    }

    #[test]
    fn roots_extend_away_from_the_occlusal_plane() {
        let upper = tooth_geometry(8).unwrap();
        let lower = tooth_geometry(25).unwrap();
        assert!(upper.roots[0].offset.y > 0.0);
        assert!(lower.roots[0].offset.y < 0.0);
    }

    #[test]
    fn invalid_number_raises() {
        assert_eq!(
            tooth_geometry(0),
            Err(GeometryError::InvalidToothNumber(0))
        );
        assert_eq!(
            tooth_geometry(40),
            Err(GeometryError::InvalidToothNumber(40))
        );
    }

    #[test]
    fn cache_memoizes_by_number() {
        let mut cache = GeometryCache::new();
        let first = cache.get(14).unwrap().clone();
        let second = cache.get(14).unwrap().clone();
        assert_eq!(first, second);
        assert_eq!(cache.len(), 1);
        cache.get(15).unwrap();
        assert_eq!(cache.len(), 2);
        assert!(cache.get(99).is_err());
        assert_eq!(cache.len(), 2);
    }
}
