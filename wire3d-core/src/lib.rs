//! Wire3D core library - software wireframe rendering.
//!
//! The stateless rendering core: statically-sized vector/matrix algebra,
//! rotation composition, pinhole camera projection, and line
//! rasterization into a character framebuffer. Terminal concerns live in
//! the frontend crate.

pub mod camera;
pub mod geometry;
pub mod math;
pub mod schedule;
pub mod screen;
pub mod transform;

// Re-export commonly used types
pub use camera::{Camera, Projection};
pub use geometry::{Shape, Wireframe};
pub use math::{Matrix3, Vec2, Vec3, Vector};
pub use schedule::{Entry, RenderSchedule, ScheduleError};
pub use screen::Screen;
pub use transform::Orientation;
