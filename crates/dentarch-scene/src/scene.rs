//! The 32-tooth arch scene.

use dentarch_geometry::Solid;
use dentarch_ir::{ToothData, ToothNumber, Vec3};
use dentarch_materials::MaterialDesc;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::node::ToothNode;
use crate::render::{Drawable, RenderList};
use crate::SceneError;

/// Distance from the camera to the scene origin on mount.
pub const CAMERA_DISTANCE: f64 = 9.0;
/// Centerline radius of the torus arch guides.
const GUIDE_MAJOR_RADIUS: f64 = 3.3;
/// Tube radius of the arch guides.
const GUIDE_MINOR_RADIUS: f64 = 0.07;
/// Vertical placement of the upper/lower arch guides.
const GUIDE_LIFT: f64 = 1.5;

/// Fixed perspective camera state.
///
/// Orbit manipulation is delegated to an external orbit-control
/// collaborator; the scene only defines the mount pose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Eye position.
    pub eye: Vec3,
    /// Look-at target.
    pub target: Vec3,
    /// Up vector.
    pub up: Vec3,
}

impl Camera {
    /// Mount pose: a fixed distance along the view axis, looking at the
    /// origin.
    pub fn at_mount() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_DISTANCE),
            target: Vec3::zero(),
            up: Vec3::new(0.0, 1.0, 0.0),
        }
    }

    /// Unit view direction from eye to target.
    pub fn view_direction(&self) -> Vector3<f64> {
        Vector3::new(
            self.target.x - self.eye.x,
            self.target.y - self.eye.y,
            self.target.z - self.eye.z,
        )
        .normalize()
    }
}

/// Uniform fill light.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmbientLight {
    /// Light color.
    pub color: [f64; 3],
    /// Intensity multiplier.
    pub intensity: f64,
}

/// Positioned light for material differentiation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointLight {
    /// Light position.
    pub position: Vec3,
    /// Light color.
    pub color: [f64; 3],
    /// Intensity multiplier.
    pub intensity: f64,
}

/// An interaction event bubbled out of the scene.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneEvent {
    /// A tooth node was clicked.
    ToothClicked(ToothNumber),
}

/// The composed scene: 32 tooth nodes, camera, lights, and arch guides.
///
/// The scene owns node layout and the frame loop but no selection state;
/// clicks bubble upward as [`SceneEvent`]s for the controller to interpret.
#[derive(Debug)]
pub struct ArchScene {
    nodes: Vec<ToothNode>,
    camera: Camera,
    ambient: AmbientLight,
    point: PointLight,
    read_only: bool,
}

impl ArchScene {
    /// Build the scene from a complete 32-entry `ToothData` array.
    pub fn new(teeth: &[ToothData], read_only: bool) -> Result<Self, SceneError> {
        if teeth.len() != ToothNumber::COUNT {
            return Err(SceneError::WrongToothCount(teeth.len()));
        }
        let nodes = teeth
            .iter()
            .cloned()
            .map(ToothNode::new)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            nodes,
            camera: Camera::at_mount(),
            ambient: AmbientLight {
                color: [1.0, 1.0, 1.0],
                intensity: 0.6,
            },
            point: PointLight {
                position: Vec3::new(4.0, 6.0, 8.0),
                color: [1.0, 1.0, 1.0],
                intensity: 1.0,
            },
            read_only,
        })
    }

    /// The camera's mount pose.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// The ambient fill light.
    pub fn ambient_light(&self) -> &AmbientLight {
        &self.ambient
    }

    /// The point light.
    pub fn point_light(&self) -> &PointLight {
        &self.point
    }

    /// Whether click-to-select is disabled.
    pub fn read_only(&self) -> bool {
        self.read_only
    }

    /// Borrow the node for a tooth.
    pub fn node(&self, n: ToothNumber) -> Option<&ToothNode> {
        self.nodes.iter().find(|node| node.number() == n)
    }

    fn node_mut(&mut self, n: ToothNumber) -> Option<&mut ToothNode> {
        self.nodes.iter_mut().find(|node| node.number() == n)
    }

    /// Mark the given tooth (or none) as the active selection.
    pub fn set_active(&mut self, active: Option<ToothNumber>) {
        for node in &mut self.nodes {
            node.set_active(Some(node.number()) == active);
        }
    }

    /// Pointer entered a tooth node.
    pub fn pointer_enter(&mut self, n: ToothNumber) {
        if let Some(node) = self.node_mut(n) {
            node.pointer_enter();
        }
    }

    /// Pointer left a tooth node.
    pub fn pointer_leave(&mut self, n: ToothNumber) {
        if let Some(node) = self.node_mut(n) {
            node.pointer_leave();
        }
    }

    /// A click landed on a tooth node. Bubbles the tooth number upward
    /// unless the scene is read-only; nothing is mutated here.
    pub fn click(&self, n: ToothNumber) -> Option<SceneEvent> {
        if self.read_only {
            return None;
        }
        self.node(n).map(|node| SceneEvent::ToothClicked(node.number()))
    }

    /// Advance every node's animation by one frame. O(1) per node.
    pub fn step(&mut self, dt: f64) {
        for node in &mut self.nodes {
            node.advance(dt);
        }
    }

    /// Emit this frame's complete render list: arch guides first, then
    /// every tooth node's drawables, labels, and badges.
    pub fn render_list(&self) -> RenderList {
        let mut out = RenderList::default();
        out.drawables.extend(arch_guides());
        for node in &self.nodes {
            node.emit(&mut out);
        }
        out
    }
}

/// The two static semi-transparent torus arch guides. Purely a visual
/// reference, never interactive.
fn arch_guides() -> [Drawable; 2] {
    let material = MaterialDesc {
        color: [0.75, 0.78, 0.8],
        opacity: 0.25,
        metallic: 0.0,
        roughness: 0.5,
    };
    let solid = Solid::Torus {
        major_radius: GUIDE_MAJOR_RADIUS,
        minor_radius: GUIDE_MINOR_RADIUS,
    };
    [
        Drawable {
            name: "arch-guide-upper".to_string(),
            solid: solid.clone(),
            material,
            translation: Vec3::new(0.0, GUIDE_LIFT, 0.0),
            scale: 1.0,
        },
        Drawable {
            name: "arch-guide-lower".to_string(),
            solid,
            material,
            translation: Vec3::new(0.0, -GUIDE_LIFT, 0.0),
            scale: 1.0,
        },
    ]
}
