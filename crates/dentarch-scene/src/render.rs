//! Declarative per-frame render output.
//!
//! A [`RenderList`] is what the scene hands a renderer each frame: placed
//! solids with resolved materials, plus label and badge sprites. It is plain
//! data, serializable to JSON for snapshot export, and carries no GPU or
//! windowing types.

use dentarch_geometry::Solid;
use dentarch_ir::{Severity, Vec3};
use dentarch_materials::MaterialDesc;
use nalgebra::Matrix4;
use serde::{Deserialize, Serialize};

/// One placed, shaded solid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drawable {
    /// Stable name for the drawable (e.g. `tooth-14-crown`).
    pub name: String,
    /// The primitive to draw.
    pub solid: Solid,
    /// Resolved material.
    pub material: MaterialDesc,
    /// World-space translation.
    pub translation: Vec3,
    /// Uniform scale.
    pub scale: f64,
}

impl Drawable {
    /// Homogeneous model matrix: uniform scale followed by translation.
    pub fn model_matrix(&self) -> Matrix4<f64> {
        let mut m = Matrix4::identity();
        m[(0, 0)] = self.scale;
        m[(1, 1)] = self.scale;
        m[(2, 2)] = self.scale;
        m[(0, 3)] = self.translation.x;
        m[(1, 3)] = self.translation.y;
        m[(2, 3)] = self.translation.z;
        m
    }
}

/// A tooth-number label sprite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    /// Label text in the active numbering scheme.
    pub text: String,
    /// World-space position.
    pub position: Vec3,
    /// Recolored and bolded when the tooth is the active selection.
    pub emphasized: bool,
}

/// An AI-finding badge sprite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Badge {
    /// World-space position.
    pub position: Vec3,
    /// Severity of the worst finding on the tooth.
    pub severity: Severity,
    /// Badge color derived from that severity.
    pub color: [f64; 3],
    /// Number of findings on the tooth.
    pub count: usize,
}

/// Everything one frame draws.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RenderList {
    /// Placed solids, in draw order.
    pub drawables: Vec<Drawable>,
    /// Tooth-number labels.
    pub labels: Vec<Label>,
    /// Finding badges.
    pub badges: Vec<Badge>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_matrix_scales_then_translates() {
        let drawable = Drawable {
            name: "test".to_string(),
            solid: Solid::Cuboid {
                size: Vec3::new(1.0, 1.0, 1.0),
            },
            material: dentarch_materials::base_material(dentarch_ir::ToothStatus::Present),
            translation: Vec3::new(2.0, -1.0, 0.5),
            scale: 1.2,
        };
        let m = drawable.model_matrix();
        assert_eq!(m[(0, 0)], 1.2);
        assert_eq!(m[(1, 1)], 1.2);
        assert_eq!(m[(0, 3)], 2.0);
        assert_eq!(m[(1, 3)], -1.0);
        assert_eq!(m[(3, 3)], 1.0);
    }

    #[test]
    fn render_list_roundtrips_as_json() {
        let list = RenderList {
            drawables: vec![],
            labels: vec![Label {
                text: "8".to_string(),
                position: Vec3::new(0.0, -2.0, 0.0),
                emphasized: true,
            }],
            badges: vec![],
        };
        let json = serde_json::to_string(&list).unwrap();
        let restored: RenderList = serde_json::from_str(&json).unwrap();
        assert_eq!(list, restored);
    }
}
