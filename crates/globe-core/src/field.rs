use crate::constants::*;
use glam::Vec3;
use rand::prelude::*;
use smallvec::SmallVec;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum FieldError {
    #[error("point count must be non-zero")]
    NoPoints,
    #[error("point count {0} exceeds the u16 index space")]
    TooManyPoints(usize),
    #[error("radius must be positive and finite, got {0}")]
    BadRadius(f32),
}

/// A single particle pinned to the sphere surface.
///
/// `connections` holds the indices `j > i` recorded by the one-time proximity
/// pass; it is never mutated after construction.
#[derive(Clone, Debug)]
pub struct Point {
    pub position: Vec3,
    pub size: f32,
    pub base_alpha: f32,
    pub connections: SmallVec<[u16; 8]>,
}

/// Flattened undirected edge, `a < b`. `weight` is 1 at distance 0 and falls
/// linearly to 0 at the connection threshold.
#[derive(Clone, Copy, Debug)]
pub struct Edge {
    pub a: u16,
    pub b: u16,
    pub weight: f32,
}

#[derive(Clone, Debug)]
pub struct FieldParams {
    pub point_count: usize,
    pub radius: f32,
    pub connection_threshold_fraction: f32,
    pub rotation_step_radians: f32,
    pub size_range: (f32, f32),
    pub alpha_range: (f32, f32),
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            point_count: POINT_COUNT,
            radius: FIELD_RADIUS,
            connection_threshold_fraction: CONNECTION_THRESHOLD_FRACTION,
            rotation_step_radians: ROTATION_STEP_RADIANS,
            size_range: (POINT_SIZE_MIN, POINT_SIZE_MAX),
            alpha_range: (POINT_ALPHA_MIN, POINT_ALPHA_MAX),
        }
    }
}

impl FieldParams {
    pub fn connection_threshold(&self) -> f32 {
        self.radius * self.connection_threshold_fraction
    }

    fn validate(&self) -> Result<(), FieldError> {
        if self.point_count == 0 {
            return Err(FieldError::NoPoints);
        }
        if self.point_count > u16::MAX as usize {
            return Err(FieldError::TooManyPoints(self.point_count));
        }
        self.validate_radius()
    }

    fn validate_radius(&self) -> Result<(), FieldError> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(FieldError::BadRadius(self.radius));
        }
        Ok(())
    }
}

/// The particle field: points on a sphere about the origin plus the proximity
/// graph computed once at construction.
pub struct ParticleField {
    pub params: FieldParams,
    points: Vec<Point>,
    edges: Vec<Edge>,
}

impl ParticleField {
    /// Build a field of `params.point_count` points uniformly distributed on
    /// the sphere surface, then run the one-time connection pass.
    ///
    /// Sampling: azimuth uniform in [0, 2pi), polar angle acos(2u - 1) so the
    /// distribution is uniform over area rather than bunched at the poles.
    pub fn new(params: FieldParams, seed: u64) -> Result<Self, FieldError> {
        params.validate()?;
        let mut rng = StdRng::seed_from_u64(seed);
        let r = params.radius;
        let (s_min, s_max) = params.size_range;
        let (a_min, a_max) = params.alpha_range;
        let mut points = Vec::with_capacity(params.point_count);
        for _ in 0..params.point_count {
            let phi = rng.gen::<f32>() * std::f32::consts::TAU;
            let theta = (2.0 * rng.gen::<f32>() - 1.0).acos();
            let position = Vec3::new(
                r * theta.sin() * phi.cos(),
                r * theta.sin() * phi.sin(),
                r * theta.cos(),
            );
            points.push(Point {
                position,
                size: s_min + rng.gen::<f32>() * (s_max - s_min),
                base_alpha: a_min + rng.gen::<f32>() * (a_max - a_min),
                connections: SmallVec::new(),
            });
        }
        Ok(Self::connect(points, params))
    }

    /// Build a field from explicit positions, running the same connection
    /// pass. Sizes and alphas take the midpoint of the configured ranges.
    pub fn from_points(positions: &[Vec3], params: FieldParams) -> Result<Self, FieldError> {
        if positions.is_empty() {
            return Err(FieldError::NoPoints);
        }
        if positions.len() > u16::MAX as usize {
            return Err(FieldError::TooManyPoints(positions.len()));
        }
        params.validate_radius()?;
        let (s_min, s_max) = params.size_range;
        let (a_min, a_max) = params.alpha_range;
        let points = positions
            .iter()
            .map(|&position| Point {
                position,
                size: 0.5 * (s_min + s_max),
                base_alpha: 0.5 * (a_min + a_max),
                connections: SmallVec::new(),
            })
            .collect();
        Ok(Self::connect(points, params))
    }

    /// O(n^2) proximity pass over all unordered pairs. Runs once; the edge
    /// set is frozen afterwards (rigid rotation preserves pairwise
    /// distances). Strict `<` at the threshold.
    fn connect(mut points: Vec<Point>, params: FieldParams) -> Self {
        let threshold = params.connection_threshold();
        let mut edges = Vec::new();
        for i in 0..points.len() {
            for j in (i + 1)..points.len() {
                let dist = points[i].position.distance(points[j].position);
                if dist < threshold {
                    points[i].connections.push(j as u16);
                    edges.push(Edge {
                        a: i as u16,
                        b: j as u16,
                        weight: 1.0 - dist / threshold,
                    });
                }
            }
        }
        log::debug!(
            "field: {} points, {} edges (threshold {:.1})",
            points.len(),
            edges.len(),
            threshold
        );
        Self {
            params,
            points,
            edges,
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Rigid rotation of every point about the vertical axis. Applied
    /// uniformly, so relative distances and the frozen edge set stay valid.
    pub fn rotate_y(&mut self, delta: f32) {
        let (sin_d, cos_d) = delta.sin_cos();
        for p in &mut self.points {
            let x = p.position.x;
            let z = p.position.z;
            p.position.x = x * cos_d - z * sin_d;
            p.position.z = x * sin_d + z * cos_d;
        }
    }

    /// Depth-faded opacity: base alpha at the near pole (z = +r), zero at
    /// the far pole (z = -r).
    pub fn point_alpha(&self, index: usize) -> f32 {
        let p = &self.points[index];
        let r = self.params.radius;
        (p.base_alpha * (p.position.z + r) / (2.0 * r)).clamp(0.0, 1.0)
    }

    /// Per-frame edge opacity: distance weight from construction times both
    /// endpoints' depth factors, so an edge fades when either end nears the
    /// far side.
    pub fn edge_alpha(&self, edge: &Edge) -> f32 {
        let r = self.params.radius;
        let fa = (1.0 - self.points[edge.a as usize].position.z.abs() / r).max(0.0);
        let fb = (1.0 - self.points[edge.b as usize].position.z.abs() / r).max(0.0);
        (EDGE_DEPTH_ALPHA_MAX * edge.weight * fa * fb).clamp(0.0, 1.0)
    }

    /// Construction-time edge opacity, before any depth fading.
    pub fn edge_rest_alpha(&self, edge: &Edge) -> f32 {
        EDGE_ALPHA_MAX * edge.weight
    }

    /// Painter's order: far-to-near by depth, so nearer points draw last and
    /// visually occlude farther ones.
    pub fn draw_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.points.len()).collect();
        order.sort_unstable_by(|&i, &j| {
            self.points[i]
                .position
                .z
                .total_cmp(&self.points[j].position.z)
        });
        order
    }
}
