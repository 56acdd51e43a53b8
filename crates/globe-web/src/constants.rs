// Palette and drawing constants for the Canvas2D renderer.

pub const POINT_FILL: &str = "#9b8cff";
pub const EDGE_STROKE: &str = "#6f7fff";
pub const MARKER_FONT: &str = "12px ui-monospace, monospace";

pub const MARKER_BASE_RADIUS_PX: f32 = 6.0;

// Segments fainter than this are not worth a stroke call
pub const EDGE_MIN_ALPHA: f32 = 0.004;
