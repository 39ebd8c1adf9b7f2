//! Statically-sized vector and matrix algebra for the render pipeline.
//!
//! Dimensions are compile-time parameters, so mixed-dimension operations
//! are unrepresentable and nothing here touches the heap.

use std::ops::{Add, Index, Mul, Neg, Sub};

/// An `N`-dimensional vector of `f64` components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector<const N: usize>([f64; N]);

/// A 2D vector, used for normalized screen coordinates.
pub type Vec2 = Vector<2>;

/// A 3D vector, used for world- and camera-space positions.
pub type Vec3 = Vector<3>;

impl<const N: usize> Vector<N> {
    pub const ZERO: Self = Self([0.0; N]);

    pub const fn from_array(components: [f64; N]) -> Self {
        Self(components)
    }

    pub const fn to_array(self) -> [f64; N] {
        self.0
    }

    pub fn dot(self, other: Self) -> f64 {
        self.0.iter().zip(other.0).map(|(a, b)| a * b).sum()
    }

    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }
}

impl Vec2 {
    pub const fn new(x: f64, y: f64) -> Self {
        Self([x, y])
    }

    pub const fn x(self) -> f64 {
        self.0[0]
    }

    pub const fn y(self) -> f64 {
        self.0[1]
    }
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self([x, y, z])
    }

    pub const fn x(self) -> f64 {
        self.0[0]
    }

    pub const fn y(self) -> f64 {
        self.0[1]
    }

    pub const fn z(self) -> f64 {
        self.0[2]
    }

    /// Right-handed cross product.
    pub fn cross(self, other: Self) -> Self {
        Self([
            self.y() * other.z() - self.z() * other.y(),
            self.z() * other.x() - self.x() * other.z(),
            self.x() * other.y() - self.y() * other.x(),
        ])
    }
}

impl<const N: usize> Add for Vector<N> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        let mut out = self.0;
        for (o, b) in out.iter_mut().zip(other.0) {
            *o += b;
        }
        Self(out)
    }
}

impl<const N: usize> Sub for Vector<N> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        let mut out = self.0;
        for (o, b) in out.iter_mut().zip(other.0) {
            *o -= b;
        }
        Self(out)
    }
}

impl<const N: usize> Mul<f64> for Vector<N> {
    type Output = Self;

    fn mul(self, k: f64) -> Self {
        let mut out = self.0;
        for o in &mut out {
            *o *= k;
        }
        Self(out)
    }
}

impl<const N: usize> Neg for Vector<N> {
    type Output = Self;

    fn neg(self) -> Self {
        self * -1.0
    }
}

impl<const N: usize> Index<usize> for Vector<N> {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

/// A 3x3 matrix stored as three basis columns.
///
/// Applying the matrix to a vector takes the linear combination of the
/// columns: `x_axis * v.x + y_axis * v.y + z_axis * v.z`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3 {
    pub x_axis: Vec3,
    pub y_axis: Vec3,
    pub z_axis: Vec3,
}

impl Matrix3 {
    pub const IDENTITY: Self = Self::from_cols(
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(0.0, 0.0, 1.0),
    );

    pub const fn from_cols(x_axis: Vec3, y_axis: Vec3, z_axis: Vec3) -> Self {
        Self {
            x_axis,
            y_axis,
            z_axis,
        }
    }

    /// Apply the matrix to a vector.
    pub fn mul_vec3(self, v: Vec3) -> Vec3 {
        self.x_axis * v.x() + self.y_axis * v.y() + self.z_axis * v.z()
    }

    /// Rotation about the x axis.
    pub fn rotation_x(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_cols(
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, c, s),
            Vec3::new(0.0, -s, c),
        )
    }

    /// Rotation about the y axis.
    pub fn rotation_y(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_cols(
            Vec3::new(c, 0.0, -s),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(s, 0.0, c),
        )
    }

    /// Rotation about the z axis.
    pub fn rotation_z(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_cols(
            Vec3::new(c, s, 0.0),
            Vec3::new(-s, c, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
        )
    }
}

/// Matrix composition. The right-hand factor applies first:
/// `(a * b).mul_vec3(v) == a.mul_vec3(b.mul_vec3(v))`.
impl Mul for Matrix3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::from_cols(
            self.mul_vec3(rhs.x_axis),
            self.mul_vec3(rhs.y_axis),
            self.mul_vec3(rhs.z_axis),
        )
    }
}

impl Mul<Vec3> for Matrix3 {
    type Output = Vec3;

    fn mul(self, v: Vec3) -> Vec3 {
        self.mul_vec3(v)
    }
}
