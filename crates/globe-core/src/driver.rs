use crate::field::ParticleField;

/// Owns the running animation state: the field, the accumulated rotation
/// angle, and the stopped flag. The frontends schedule frames; the driver
/// guarantees that nothing mutates after `stop()`.
pub struct FieldDriver {
    pub field: ParticleField,
    angle: f32,
    running: bool,
}

impl FieldDriver {
    pub fn new(field: ParticleField) -> Self {
        Self {
            field,
            angle: 0.0,
            running: true,
        }
    }

    /// Advance by exactly one fixed rotation step. No-op once stopped.
    pub fn tick(&mut self) {
        if !self.running {
            return;
        }
        let step = self.field.params.rotation_step_radians;
        self.apply(step);
    }

    /// Advance by wall-clock time, normalized so one 60 Hz frame equals one
    /// fixed step. Capped at a few frames of catch-up so a backgrounded tab
    /// does not snap the globe. No-op once stopped.
    pub fn advance(&mut self, dt_sec: f32) {
        if !self.running {
            return;
        }
        let frames = (dt_sec * 60.0).clamp(0.0, 4.0);
        let step = self.field.params.rotation_step_radians * frames;
        self.apply(step);
    }

    fn apply(&mut self, step: f32) {
        self.field.rotate_y(step);
        self.angle = (self.angle + step) % std::f32::consts::TAU;
    }

    /// Accumulated rotation angle, in [0, 2pi).
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Idempotent. After this, `tick`/`advance` leave the field untouched.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}
