use crate::constants::SCREEN_RADIUS_FRACTION;
use glam::Vec3;

/// 2D projection parameters derived from the host container's pixel size.
///
/// Resizing only recomputes the derived center/scale; it never touches the
/// field itself, so point positions survive any number of resizes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    width: f32,
    height: f32,
}

impl Viewport {
    /// Rejects zero-sized or non-finite rectangles.
    pub fn new(width: f32, height: f32) -> Option<Self> {
        (width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0)
            .then_some(Self { width, height })
    }

    /// Apply a resize notification. Zero-sized rects are ignored and the
    /// previous viewport is kept; returns whether anything changed.
    pub fn resize(&mut self, width: f32, height: f32) -> bool {
        match Self::new(width, height) {
            Some(next) if next != *self => {
                *self = next;
                true
            }
            _ => false,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn center(&self) -> (f32, f32) {
        (self.width * 0.5, self.height * 0.5)
    }

    /// On-screen globe radius: 40% of the smaller canvas dimension.
    pub fn screen_radius(&self) -> f32 {
        self.width.min(self.height) * SCREEN_RADIUS_FRACTION
    }

    /// Flatten a field position to screen pixels. `z` is left to drive
    /// opacity and paint order only.
    pub fn project(&self, position: Vec3, field_radius: f32) -> (f32, f32) {
        let s = self.screen_radius() / field_radius;
        let (cx, cy) = self.center();
        (cx + position.x * s, cy + position.y * s)
    }
}
