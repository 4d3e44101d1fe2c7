//! Per-tooth scene node.

use dentarch_geometry::{tooth_geometry, GeometryError, Solid, ToothGeometry};
use dentarch_ir::{surface_offset, ToothData, ToothNumber, Vec3};
use dentarch_materials::{resolve, severity_color, ToothMaterial};

use crate::animation::{ScaleAnimator, ACTIVE_SCALE, HOVER_SCALE, REST_SCALE};
use crate::render::{Badge, Drawable, Label, RenderList};

/// Full-coverage restoration overlays are drawn slightly larger than the
/// crown they wrap.
pub const FULL_COVERAGE_SCALE: f64 = 1.05;
/// Edge length of a surface-localized overlay cube.
pub const SURFACE_OVERLAY_SIZE: f64 = 0.22;
/// Fixed label offset below the tooth, clear of the longest roots.
pub const LABEL_OFFSET: Vec3 = Vec3 {
    x: 0.0,
    y: -2.0,
    z: 0.0,
};
/// Fixed badge offset above-right of the tooth.
pub const BADGE_OFFSET: Vec3 = Vec3 {
    x: 0.45,
    y: 0.75,
    z: 0.0,
};

/// One tooth in the scene: geometry, resolved materials, restoration
/// overlays, label, badge, and the node's own hover and scale state.
#[derive(Debug, Clone)]
pub struct ToothNode {
    data: ToothData,
    geometry: ToothGeometry,
    material: ToothMaterial,
    hovered: bool,
    active: bool,
    animator: ScaleAnimator,
}

impl ToothNode {
    /// Build a node from merged tooth data. Geometry and materials are both
    /// derived here, once; they only change when the data record changes.
    pub fn new(data: ToothData) -> Result<Self, GeometryError> {
        let geometry = tooth_geometry(data.number.get())?;
        let material = resolve(data.status, data.restoration);
        Ok(Self {
            data,
            geometry,
            material,
            hovered: false,
            active: false,
            animator: ScaleAnimator::new(),
        })
    }

    /// This node's tooth number.
    pub fn number(&self) -> ToothNumber {
        self.data.number
    }

    /// The merged record this node renders.
    pub fn data(&self) -> &ToothData {
        &self.data
    }

    /// Whether the pointer is over this node.
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Whether this node is the active selection.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The current smoothed scale.
    pub fn scale(&self) -> f64 {
        self.animator.scale()
    }

    /// Pointer entered the node.
    pub fn pointer_enter(&mut self) {
        self.hovered = true;
    }

    /// Pointer left the node.
    pub fn pointer_leave(&mut self) {
        self.hovered = false;
    }

    /// Mark or unmark this node as the active selection.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// This frame's selection-driven scale target.
    pub fn target_scale(&self) -> f64 {
        if self.active {
            ACTIVE_SCALE
        } else if self.hovered {
            HOVER_SCALE
        } else {
            REST_SCALE
        }
    }

    /// Advance the node's animation by one frame.
    pub fn advance(&mut self, dt: f64) {
        self.animator
            .advance(dt, self.target_scale(), self.data.highlight);
    }

    /// Append this node's drawables, label, and badge to a render list.
    pub fn emit(&self, out: &mut RenderList) {
        let scale = self.animator.scale();
        let position = self.data.position;
        let number = self.data.number;

        if self.material.meshes_visible {
            out.drawables.push(Drawable {
                name: format!("tooth-{number}-crown"),
                solid: self.geometry.crown.clone(),
                material: self.material.base,
                translation: position,
                scale,
            });
            for (i, root) in self.geometry.roots.iter().enumerate() {
                out.drawables.push(Drawable {
                    name: format!("tooth-{number}-root-{i}"),
                    solid: root.solid.clone(),
                    material: self.material.base,
                    translation: position + root.offset.scaled(scale),
                    scale,
                });
            }
            if let Some(overlay) = self.material.overlay {
                if self.data.surfaces.is_empty() {
                    // Full-coverage work (crowns, veneers, implants) wraps
                    // the whole crown.
                    out.drawables.push(Drawable {
                        name: format!("tooth-{number}-restoration"),
                        solid: self.geometry.crown.clone(),
                        material: overlay,
                        translation: position,
                        scale: scale * FULL_COVERAGE_SCALE,
                    });
                } else {
                    for surface in &self.data.surfaces {
                        out.drawables.push(Drawable {
                            name: format!("tooth-{number}-restoration-{surface:?}"),
                            solid: Solid::Cuboid {
                                size: Vec3::new(
                                    SURFACE_OVERLAY_SIZE,
                                    SURFACE_OVERLAY_SIZE,
                                    SURFACE_OVERLAY_SIZE,
                                ),
                            },
                            material: overlay,
                            translation: position + surface_offset(*surface).scaled(scale),
                            scale,
                        });
                    }
                }
            }
        }

        out.labels.push(Label {
            text: number.to_string(),
            position: position + LABEL_OFFSET,
            emphasized: self.active,
        });

        if let Some(worst) = self.data.worst_finding() {
            out.badges.push(Badge {
                position: position + BADGE_OFFSET,
                severity: worst.severity,
                color: severity_color(worst.severity),
                count: self.data.ai_findings.len(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dentarch_ir::{
        AiFinding, LayoutTable, RestorationType, Severity, Surface, ToothStatus,
    };

    fn tooth(number: u8, status: ToothStatus) -> ToothData {
        let layout = LayoutTable::universal();
        let n = ToothNumber::new(number).unwrap();
        ToothData {
            number: n,
            status,
            position: layout.position(n),
            restoration: None,
            surfaces: Vec::new(),
            highlight: false,
            ai_findings: Vec::new(),
        }
    }

    fn finding(number: u8, severity: Severity) -> AiFinding {
        AiFinding {
            tooth: ToothNumber::new(number).unwrap(),
            finding_type: "caries".to_string(),
            severity,
            confidence: 0.8,
            description: "test".to_string(),
            treatment_suggestions: Vec::new(),
        }
    }

    fn render(node: &ToothNode) -> RenderList {
        let mut out = RenderList::default();
        node.emit(&mut out);
        out
    }

    #[test]
    fn extracted_teeth_draw_only_the_label() {
        let node = ToothNode::new(tooth(8, ToothStatus::Extracted)).unwrap();
        let out = render(&node);
        assert!(out.drawables.is_empty());
        assert_eq!(out.labels.len(), 1);
        assert_eq!(out.labels[0].text, "8");
        assert!(out.badges.is_empty());
    }

    #[test]
    fn extracted_teeth_still_show_badges() {
        let mut data = tooth(8, ToothStatus::Extracted);
        data.ai_findings = vec![finding(8, Severity::High)];
        data.highlight = true;
        let node = ToothNode::new(data).unwrap();
        let out = render(&node);
        assert!(out.drawables.is_empty());
        assert_eq!(out.badges.len(), 1);
    }

    #[test]
    fn present_molar_draws_crown_and_three_roots() {
        let node = ToothNode::new(tooth(30, ToothStatus::Present)).unwrap();
        let out = render(&node);
        assert_eq!(out.drawables.len(), 4);
        assert!(out.drawables[0].name.ends_with("crown"));
    }

    #[test]
    fn surface_restorations_draw_one_overlay_per_surface() {
        let mut data = tooth(19, ToothStatus::Present);
        data.restoration = Some(RestorationType::Amalgam);
        data.surfaces = vec![Surface::Mesial, Surface::Occlusal, Surface::Distal];
        let node = ToothNode::new(data).unwrap();
        let out = render(&node);
        // Crown + 3 roots + 3 surface overlays.
        assert_eq!(out.drawables.len(), 7);
        let overlays: Vec<_> = out
            .drawables
            .iter()
            .filter(|d| d.name.contains("restoration"))
            .collect();
        assert_eq!(overlays.len(), 3);
        // Overlay cubes sit at distinct offsets from the crown.
        assert_ne!(overlays[0].translation, overlays[1].translation);
    }

    #[test]
    fn full_coverage_restoration_wraps_the_crown() {
        let mut data = tooth(9, ToothStatus::Present);
        data.restoration = Some(RestorationType::CrownZirconia);
        let node = ToothNode::new(data).unwrap();
        let out = render(&node);
        let overlay = out
            .drawables
            .iter()
            .find(|d| d.name.ends_with("restoration"))
            .unwrap();
        assert_eq!(overlay.solid, node.geometry.crown);
        assert!((overlay.scale - node.scale() * FULL_COVERAGE_SCALE).abs() < 1e-12);
    }

    #[test]
    fn label_emphasis_follows_selection() {
        let mut node = ToothNode::new(tooth(3, ToothStatus::Present)).unwrap();
        assert!(!render(&node).labels[0].emphasized);
        node.set_active(true);
        assert!(render(&node).labels[0].emphasized);
    }

    #[test]
    fn badge_reflects_the_worst_finding() {
        let mut data = tooth(30, ToothStatus::Present);
        data.ai_findings = vec![
            finding(30, Severity::Low),
            finding(30, Severity::Critical),
        ];
        data.highlight = true;
        let node = ToothNode::new(data).unwrap();
        let out = render(&node);
        assert_eq!(out.badges.len(), 1);
        assert_eq!(out.badges[0].severity, Severity::Critical);
        assert_eq!(out.badges[0].count, 2);
    }

    #[test]
    fn hover_and_active_drive_the_target() {
        let mut node = ToothNode::new(tooth(5, ToothStatus::Present)).unwrap();
        assert_eq!(node.target_scale(), REST_SCALE);
        node.pointer_enter();
        assert_eq!(node.target_scale(), HOVER_SCALE);
        node.set_active(true);
        // Active wins over hovered.
        assert_eq!(node.target_scale(), ACTIVE_SCALE);
        node.pointer_leave();
        assert_eq!(node.target_scale(), ACTIVE_SCALE);
    }

    #[test]
    fn activated_scale_converges_to_target() {
        let mut node = ToothNode::new(tooth(5, ToothStatus::Present)).unwrap();
        node.set_active(true);
        for _ in 0..120 {
            node.advance(1.0 / 60.0);
        }
        assert!((node.scale() - ACTIVE_SCALE).abs() < 1e-3);
    }
}
