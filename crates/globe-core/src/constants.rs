// Field tuning constants shared by both frontends.

// Field shape
pub const POINT_COUNT: usize = 150;
pub const FIELD_RADIUS: f32 = 100.0;
pub const CONNECTION_THRESHOLD_FRACTION: f32 = 0.4; // fraction of the radius

// Rotation increment per 60 Hz frame (radians)
pub const ROTATION_STEP_RADIANS: f32 = 0.002;

// Per-point visual ranges
pub const POINT_SIZE_MIN: f32 = 1.0;
pub const POINT_SIZE_MAX: f32 = 3.0;
pub const POINT_ALPHA_MIN: f32 = 0.5;
pub const POINT_ALPHA_MAX: f32 = 1.0;

// Edge opacity: construction-time weight cap, and the per-frame cap once
// both endpoint depths are factored in
pub const EDGE_ALPHA_MAX: f32 = 0.5;
pub const EDGE_DEPTH_ALPHA_MAX: f32 = 0.3;

// 2D projection: globe radius as a fraction of min(width, height)
pub const SCREEN_RADIUS_FRACTION: f32 = 0.4;

// Markers
pub const MARKER_PICK_RADIUS_FRACTION: f32 = 0.12; // of the field radius
pub const HOVER_RISE_TAU_SEC: f32 = 0.08;
pub const HOVER_FALL_TAU_SEC: f32 = 0.25;
pub const HOVER_SCALE_SPAN: f32 = 0.5; // a full hover enlarges a marker by 50%

// Native scene scale: field positions are normalized to this world radius
pub const WORLD_RADIUS: f32 = 2.0;
