//! Vector type for geometric operations
//!
//! Coordinates are `f64` triples. Exact `==` is kept for bit-identical
//! comparisons; geometric code uses [`Vector3::is_close`] and
//! [`Vector3::total_cmp`], which both work on a fixed absolute tolerance.

use crate::error::{DxfError, Result};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Absolute tolerance for point equality, sorting and parallel tests
pub const VECTOR_TOLERANCE: f64 = 1e-9;

/// Digits kept when ordering points, matches [`VECTOR_TOLERANCE`]
const ORDERING_DIGITS: i32 = 9;

/// 3D vector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    /// Create a new 3D vector
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3 { x, y, z }
    }

    /// Zero vector
    pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);

    /// Unit X vector
    pub const UNIT_X: Vector3 = Vector3::new(1.0, 0.0, 0.0);

    /// Unit Y vector
    pub const UNIT_Y: Vector3 = Vector3::new(0.0, 1.0, 0.0);

    /// Unit Z vector
    pub const UNIT_Z: Vector3 = Vector3::new(0.0, 0.0, 1.0);

    /// Vector in the xy-plane with the given angle (radians) and length
    pub fn from_angle(angle: f64, length: f64) -> Self {
        Vector3::new(angle.cos() * length, angle.sin() * length, 0.0)
    }

    /// Calculate the length (magnitude) of the vector
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Calculate the squared length (avoids sqrt for performance)
    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Check for a zero-length vector within [`VECTOR_TOLERANCE`]
    pub fn is_null(&self) -> bool {
        self.length() <= VECTOR_TOLERANCE
    }

    /// Normalize the vector (make it unit length)
    ///
    /// Returns the vector unchanged when it has zero length.
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len > 0.0 {
            Vector3::new(self.x / len, self.y / len, self.z / len)
        } else {
            *self
        }
    }

    /// Scale the vector to `length`
    ///
    /// The vector must not be degenerate: a zero-length input has no
    /// direction and yields [`DxfError::Geometry`].
    pub fn normalize_to(&self, length: f64) -> Result<Self> {
        let len = self.length();
        if len <= VECTOR_TOLERANCE {
            return Err(DxfError::Geometry(format!(
                "cannot normalize zero-length vector {}",
                self
            )));
        }
        Ok(*self * (length / len))
    }

    /// Counter-clockwise perpendicular in the xy-plane, z is kept
    pub fn orthogonal(&self) -> Self {
        Vector3::new(-self.y, self.x, self.z)
    }

    /// Linear interpolation, `factor = 0.5` gives the midpoint
    pub fn lerp(&self, other: &Vector3, factor: f64) -> Self {
        *self + (*other - *self) * factor
    }

    /// Angle of the xy-projection in radians
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Dot product
    pub fn dot(&self, other: &Vector3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product
    pub fn cross(&self, other: &Vector3) -> Vector3 {
        Vector3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Distance to another point
    pub fn distance(&self, other: &Vector3) -> f64 {
        (*self - *other).length()
    }

    /// Component-wise equality within [`VECTOR_TOLERANCE`]
    pub fn is_close(&self, other: &Vector3) -> bool {
        (self.x - other.x).abs() <= VECTOR_TOLERANCE
            && (self.y - other.y).abs() <= VECTOR_TOLERANCE
            && (self.z - other.z).abs() <= VECTOR_TOLERANCE
    }

    /// Total lexicographic order by x, then y, then z
    ///
    /// Components are rounded to the tolerance grid first, so points that
    /// differ only by floating point noise compare equal.
    pub fn total_cmp(&self, other: &Vector3) -> Ordering {
        let a = self.rounded();
        let b = other.rounded();
        a.x.total_cmp(&b.x)
            .then_with(|| a.y.total_cmp(&b.y))
            .then_with(|| a.z.total_cmp(&b.z))
    }

    fn rounded(&self) -> Vector3 {
        let factor = 10f64.powi(ORDERING_DIGITS);
        // adding 0.0 folds -0.0 into 0.0 for total_cmp
        let round = |v: f64| (v * factor).round() / factor + 0.0;
        Vector3::new(round(self.x), round(self.y), round(self.z))
    }
}

/// Sort points with [`Vector3::total_cmp`] and drop near-duplicates
pub fn sorted_unique(mut points: Vec<Vector3>) -> Vec<Vector3> {
    points.sort_by(|a, b| a.total_cmp(b));
    points.dedup_by(|a, b| a.is_close(b));
    points
}

impl Default for Vector3 {
    fn default() -> Self {
        Vector3::ZERO
    }
}

impl From<(f64, f64, f64)> for Vector3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Vector3::new(x, y, z)
    }
}

impl From<(f64, f64)> for Vector3 {
    fn from((x, y): (f64, f64)) -> Self {
        Vector3::new(x, y, 0.0)
    }
}

impl Add for Vector3 {
    type Output = Vector3;
    fn add(self, other: Vector3) -> Vector3 {
        Vector3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Vector3 {
    type Output = Vector3;
    fn sub(self, other: Vector3) -> Vector3 {
        Vector3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;
    fn mul(self, scalar: f64) -> Vector3 {
        Vector3::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl Div<f64> for Vector3 {
    type Output = Vector3;
    fn div(self, scalar: f64) -> Vector3 {
        Vector3::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

impl Neg for Vector3 {
    type Output = Vector3;
    fn neg(self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
