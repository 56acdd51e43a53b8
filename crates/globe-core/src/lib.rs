//! Simulation core for the tech-globe visualization.
//!
//! Everything here is platform-free and host-testable: the particle field and
//! its proximity graph, the rotation driver, the 2D projection math, the
//! decorative icon markers, and the camera/picking helpers used by the native
//! front-end. The web and native crates only schedule frames and draw.

pub mod camera;
pub mod constants;
pub mod driver;
pub mod field;
pub mod markers;
pub mod viewport;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use camera::*;
pub use constants::*;
pub use driver::*;
pub use field::*;
pub use markers::*;
pub use viewport::*;
