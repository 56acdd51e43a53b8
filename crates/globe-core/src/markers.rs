//! Decorative icon markers pinned to the sphere surface.
//!
//! Markers ride the same rotation as the field and expose a hover amount the
//! renderers map to a scale/opacity transition. Hit-testing comes in two
//! flavors: ray-sphere picking for the 3D backend and a projected-disc test
//! for the 2D backend.

use crate::camera::ray_sphere;
use crate::constants::*;
use crate::viewport::Viewport;
use glam::Vec3;

#[derive(Clone, Debug)]
pub struct Marker {
    /// Unit direction from the sphere center; the world position is this
    /// anchor scaled by the field radius and rotated by the field angle.
    pub anchor: Vec3,
    pub label: &'static str,
    pub color: [f32; 3],
    hover: f32,
    hover_target: f32,
}

impl Marker {
    fn new(anchor: Vec3, label: &'static str, color: [f32; 3]) -> Self {
        Self {
            anchor: anchor.normalize(),
            label,
            color,
            hover: 0.0,
            hover_target: 0.0,
        }
    }

    /// Eased hover amount in [0, 1].
    pub fn hover(&self) -> f32 {
        self.hover
    }

    /// Render scale factor for the current hover amount.
    pub fn scale(&self) -> f32 {
        1.0 + HOVER_SCALE_SPAN * self.hover
    }
}

pub struct MarkerSet {
    markers: Vec<Marker>,
}

impl MarkerSet {
    pub fn new(markers: Vec<Marker>) -> Self {
        Self { markers }
    }

    /// The stock set of tech labels scattered over the sphere.
    pub fn default_set() -> Self {
        Self::new(vec![
            Marker::new(Vec3::new(0.0, 0.6, 0.8), "rust", [0.9, 0.4, 0.2]),
            Marker::new(Vec3::new(0.8, 0.2, 0.4), "wasm", [0.5, 0.3, 0.9]),
            Marker::new(Vec3::new(-0.7, -0.3, 0.5), "react", [0.3, 0.7, 0.9]),
            Marker::new(Vec3::new(-0.5, 0.7, -0.4), "ts", [0.2, 0.4, 0.8]),
            Marker::new(Vec3::new(0.6, -0.6, -0.3), "node", [0.3, 0.8, 0.4]),
            Marker::new(Vec3::new(0.1, -0.9, 0.4), "css", [0.9, 0.7, 0.3]),
        ])
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// World position of marker `index` for the given accumulated field
    /// angle, matching `ParticleField::rotate_y`.
    pub fn world(&self, index: usize, angle: f32, radius: f32) -> Vec3 {
        let p = self.markers[index].anchor * radius;
        let (sin_a, cos_a) = angle.sin_cos();
        Vec3::new(p.x * cos_a - p.z * sin_a, p.y, p.x * sin_a + p.z * cos_a)
    }

    /// Ray pick for the 3D backend: nearest marker whose pick sphere the ray
    /// hits.
    pub fn pick(
        &self,
        ray_origin: Vec3,
        ray_dir: Vec3,
        angle: f32,
        radius: f32,
    ) -> Option<usize> {
        let pick_radius = radius * MARKER_PICK_RADIUS_FRACTION;
        let mut best: Option<(usize, f32)> = None;
        for i in 0..self.markers.len() {
            let center = self.world(i, angle, radius);
            if let Some(t) = ray_sphere(ray_origin, ray_dir, center, pick_radius) {
                if best.map_or(true, |(_, bt)| t < bt) {
                    best = Some((i, t));
                }
            }
        }
        best.map(|(i, _)| i)
    }

    /// Screen-space pick for the 2D backend: nearest front-hemisphere marker
    /// within its projected pick disc.
    pub fn pick_projected(
        &self,
        viewport: &Viewport,
        angle: f32,
        radius: f32,
        px: f32,
        py: f32,
    ) -> Option<usize> {
        let pick_px = viewport.screen_radius() * MARKER_PICK_RADIUS_FRACTION;
        let mut best: Option<(usize, f32)> = None;
        for i in 0..self.markers.len() {
            let world = self.world(i, angle, radius);
            if world.z < 0.0 {
                continue; // far side, not hoverable
            }
            let (sx, sy) = viewport.project(world, radius);
            let d = ((px - sx) * (px - sx) + (py - sy) * (py - sy)).sqrt();
            if d < pick_px && best.map_or(true, |(_, bd)| d < bd) {
                best = Some((i, d));
            }
        }
        best.map(|(i, _)| i)
    }

    /// Mark one marker (or none) as hovered; targets ease over time.
    pub fn set_hovered(&mut self, index: Option<usize>) {
        for (i, m) in self.markers.iter_mut().enumerate() {
            m.hover_target = if Some(i) == index { 1.0 } else { 0.0 };
        }
    }

    /// Ease every hover amount toward its target with asymmetric rise/fall
    /// time constants.
    pub fn update_hover(&mut self, dt_sec: f32) {
        let alpha_up = 1.0 - (-dt_sec / HOVER_RISE_TAU_SEC).exp();
        let alpha_down = 1.0 - (-dt_sec / HOVER_FALL_TAU_SEC).exp();
        for m in &mut self.markers {
            let alpha = if m.hover_target > m.hover {
                alpha_up
            } else {
                alpha_down
            };
            m.hover = (m.hover + (m.hover_target - m.hover) * alpha).clamp(0.0, 1.0);
        }
    }
}
