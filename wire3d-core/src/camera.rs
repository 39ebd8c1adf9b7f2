//! Pinhole camera and 3D-to-2D projection.

use crate::math::{Vec2, Vec3};

/// Pinhole camera described by a field of view and an orthonormal
/// right/forward axis pair.
///
/// `forward` and `right` must be unit length and mutually orthogonal.
/// That is a caller contract — checked with debug assertions at
/// construction, never silently renormalized. The up axis is derived as
/// `cross(right, forward)`, so the two stored axes fully determine the
/// orientation.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    fov: f64,
    position: Vec3,
    forward: Vec3,
    right: Vec3,
}

/// Result of projecting a world-space point through a [`Camera`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Normalized view position: -1 is left/top, +1 is right/bottom.
    /// Not clamped — out-of-range values meaningfully indicate an
    /// off-screen point. Only defined when `depth` is positive.
    pub screen: Vec2,
    /// Distance along the camera's forward axis.
    pub depth: f64,
    /// Whether the point falls within the camera's view cone.
    pub in_view: bool,
}

impl Camera {
    /// Build a camera. `fov` is the full angular width of the view
    /// cone, in radians, and must lie in (0, π).
    ///
    /// # Panics
    ///
    /// Debug builds panic when `fov` is out of range or when the axis
    /// contract described on [`Camera`] is violated.
    pub fn new(fov: f64, position: Vec3, forward: Vec3, right: Vec3) -> Self {
        debug_assert!(
            fov > 0.0 && fov < std::f64::consts::PI,
            "fov out of range: {fov}"
        );
        debug_assert!((forward.length() - 1.0).abs() < 1e-9, "forward not unit");
        debug_assert!((right.length() - 1.0).abs() < 1e-9, "right not unit");
        debug_assert!(forward.dot(right).abs() < 1e-9, "axes not orthogonal");
        Self {
            fov,
            position,
            forward,
            right,
        }
    }

    pub fn fov(&self) -> f64 {
        self.fov
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Project a world-space point onto the normalized view plane.
    ///
    /// A point at or behind the camera plane (camera-space depth <= 0)
    /// has no representable projection; it is reported as not in view
    /// with zero screen coordinates, before any division happens.
    pub fn project(&self, point: Vec3) -> Projection {
        let rel = point - self.position;
        let depth = self.forward.dot(rel);
        if depth <= 0.0 {
            return Projection {
                screen: Vec2::ZERO,
                depth,
                in_view: false,
            };
        }

        let up = self.right.cross(self.forward);
        let scale = depth * (self.fov / 2.0).tan();
        let screen = Vec2::new(self.right.dot(rel) / scale, up.dot(rel) / scale);
        let in_view = screen.x().abs() <= 1.0 && screen.y().abs() <= 1.0;

        Projection {
            screen,
            depth,
            in_view,
        }
    }
}
