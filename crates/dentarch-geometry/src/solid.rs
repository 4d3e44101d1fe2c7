//! Declarative drawable solids.
//!
//! Each variant is a leaf primitive in its local frame; placement is a
//! separate offset so the same solid description can be reused at multiple
//! positions (molar root clusters, surface overlay cubes).

use dentarch_ir::Vec3;
use serde::{Deserialize, Serialize};

/// A primitive solid, centered at its local origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Solid {
    /// Axis-aligned box.
    Cuboid {
        /// Size along each axis.
        size: Vec3,
    },
    /// Frustum along the Y axis, radius interpolating bottom to top.
    TaperedCylinder {
        /// Radius at the bottom (-height/2).
        radius_bottom: f64,
        /// Radius at the top (+height/2).
        radius_top: f64,
        /// Extent along Y.
        height: f64,
    },
    /// Torus in the XY plane, centered at its local origin.
    Torus {
        /// Radius from the center to the tube center.
        major_radius: f64,
        /// Radius of the tube.
        minor_radius: f64,
    },
}

/// A solid placed at an offset from the owning tooth's center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedSolid {
    /// The primitive.
    pub solid: Solid,
    /// Offset from the tooth center, in the tooth's local frame.
    pub offset: Vec3,
}

impl PlacedSolid {
    /// Place a solid at the given offset.
    pub fn new(solid: Solid, offset: Vec3) -> Self {
        Self { solid, offset }
    }
}
