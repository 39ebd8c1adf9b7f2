//! Orientation state and rotation composition.

use crate::math::Matrix3;

/// Orientation around three axes (in radians).
///
/// Angles are unbounded; the composed rotation is periodic in 2π.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orientation {
    pub yaw: f64,
    pub pitch: f64,
    pub roll: f64,
}

impl Orientation {
    pub fn new(yaw: f64, pitch: f64, roll: f64) -> Self {
        Self { yaw, pitch, roll }
    }

    pub fn zero() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            roll: 0.0,
        }
    }

    /// Rotate by delta amounts (in radians)
    pub fn rotate(&mut self, dyaw: f64, dpitch: f64, droll: f64) {
        self.yaw += dyaw;
        self.pitch += dpitch;
        self.roll += droll;
    }

    /// Compose the three elementary rotations into one matrix.
    ///
    /// Yaw (about y) applies first, then pitch (about x), then roll
    /// (about z), under the composition convention documented on
    /// [`Matrix3`]'s `Mul` impl.
    pub fn matrix(&self) -> Matrix3 {
        Matrix3::rotation_z(self.roll) * Matrix3::rotation_x(self.pitch) * Matrix3::rotation_y(self.yaw)
    }
}

impl Default for Orientation {
    fn default() -> Self {
        Self::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vec3;

    #[test]
    fn test_orientation_accumulates() {
        let mut orientation = Orientation::zero();
        assert_eq!(orientation.yaw, 0.0);
        assert_eq!(orientation.pitch, 0.0);
        assert_eq!(orientation.roll, 0.0);

        orientation.rotate(0.1, 0.2, 0.3);
        assert!((orientation.yaw - 0.1).abs() < 1e-12);
        assert!((orientation.pitch - 0.2).abs() < 1e-12);
        assert!((orientation.roll - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_identity_rotation() {
        let matrix = Orientation::zero().matrix();
        let identity = Matrix3::IDENTITY;
        assert!((matrix.x_axis - identity.x_axis).length() < 1e-12);
        assert!((matrix.y_axis - identity.y_axis).length() < 1e-12);
        assert!((matrix.z_axis - identity.z_axis).length() < 1e-12);
    }

    #[test]
    fn test_rotation_preserves_length() {
        let v = Vec3::new(1.2, -3.4, 0.7);
        for &(yaw, pitch, roll) in &[
            (0.45, 2.6, 0.9),
            (-1.0, 0.0, 3.7),
            (6.9, -12.3, 0.001),
            (std::f64::consts::PI, std::f64::consts::FRAC_PI_2, -0.25),
        ] {
            let rotated = Orientation::new(yaw, pitch, roll).matrix().mul_vec3(v);
            assert!(
                (rotated.length() - v.length()).abs() < 1e-9,
                "length not preserved for ({yaw}, {pitch}, {roll})"
            );
        }
    }

    #[test]
    fn test_rotation_is_orthonormal() {
        let m = Orientation::new(0.45, 2.6, 0.9).matrix();
        for col in [m.x_axis, m.y_axis, m.z_axis] {
            assert!((col.length() - 1.0).abs() < 1e-9);
        }
        assert!(m.x_axis.dot(m.y_axis).abs() < 1e-9);
        assert!(m.y_axis.dot(m.z_axis).abs() < 1e-9);
        assert!(m.z_axis.dot(m.x_axis).abs() < 1e-9);
    }

    #[test]
    fn test_yaw_applies_first() {
        // Yaw by pi/2 sends +z to +x, which the subsequent pitch about x
        // leaves alone. Were pitch applied first, +z would leave the
        // x-z plane before the yaw and land elsewhere.
        let m = Orientation::new(std::f64::consts::FRAC_PI_2, 0.4, 0.0).matrix();
        let rotated = m.mul_vec3(Vec3::new(0.0, 0.0, 1.0));
        assert!((rotated - Vec3::new(1.0, 0.0, 0.0)).length() < 1e-9);
    }
}
