#![warn(missing_docs)]

//! Scene composition for the dentarch 3D dental chart.
//!
//! One [`ToothNode`] per tooth composes geometry, materials, restoration
//! overlays, a number label, and a finding badge, and owns its own animated
//! scale. The [`ArchScene`] lays out all 32 nodes from the position table,
//! owns camera and lighting, advances every node once per frame, and bubbles
//! clicks upward as [`SceneEvent`]s. Each frame the scene can emit a
//! declarative [`RenderList`] for a downstream renderer.

use thiserror::Error;

pub mod animation;
pub mod node;
pub mod render;
pub mod scene;

pub use animation::{pulse_offset, step_scale, ScaleAnimator};
pub use node::ToothNode;
pub use render::{Badge, Drawable, Label, RenderList};
pub use scene::{AmbientLight, ArchScene, Camera, PointLight, SceneEvent};

use dentarch_geometry::GeometryError;

/// Errors from scene construction.
#[derive(Error, Debug)]
pub enum SceneError {
    /// The chart data did not contain exactly 32 teeth.
    #[error("expected 32 teeth, got {0}")]
    WrongToothCount(usize),
    /// Geometry could not be derived for a tooth.
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}
