//! Coordinate systems used while rendering dimensions
//!
//! Dimension geometry is computed in a user coordinate system (UCS). Lines
//! and points are stored in world coordinates (WCS), planar entities such as
//! block references and R12 text in their object coordinate system (OCS),
//! which is derived from the extrusion vector by the arbitrary axis algorithm.

use crate::error::{DxfError, Result};
use crate::types::Vector3;
use std::ops::Mul;

/// 3x3 matrix for rotations and coordinate system changes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3 {
    /// Matrix elements stored in row-major order
    pub m: [[f64; 3]; 3],
}

impl Matrix3 {
    /// Create identity matrix
    pub fn identity() -> Self {
        Self {
            m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Create a matrix whose columns are the given axis vectors
    pub fn from_columns(ux: Vector3, uy: Vector3, uz: Vector3) -> Self {
        Self {
            m: [[ux.x, uy.x, uz.x], [ux.y, uy.y, uz.y], [ux.z, uy.z, uz.z]],
        }
    }

    /// Create rotation matrix around Z axis
    pub fn rotation_z(angle: f64) -> Self {
        let cos = angle.cos();
        let sin = angle.sin();
        Self {
            m: [[cos, -sin, 0.0], [sin, cos, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Create arbitrary axis matrix for OCS to WCS conversion
    ///
    /// Implements the AutoCAD arbitrary axis algorithm
    pub fn arbitrary_axis(normal: Vector3) -> Self {
        const ARBITRARY_AXIS_THRESHOLD: f64 = 1.0 / 64.0;

        let normal = normal.normalize();

        // Choose reference axis (Ax) based on normal direction
        let ax = if normal.x.abs() < ARBITRARY_AXIS_THRESHOLD
            && normal.y.abs() < ARBITRARY_AXIS_THRESHOLD
        {
            Vector3::UNIT_Y
        } else {
            Vector3::UNIT_Z
        };

        let x_dir = ax.cross(&normal).normalize();
        let y_dir = normal.cross(&x_dir).normalize();

        Self::from_columns(x_dir, y_dir, normal)
    }

    /// Column `index` as vector
    pub fn column(&self, index: usize) -> Vector3 {
        Vector3::new(self.m[0][index], self.m[1][index], self.m[2][index])
    }

    /// Transpose the matrix
    pub fn transpose(&self) -> Self {
        Self::from_columns(
            Vector3::new(self.m[0][0], self.m[0][1], self.m[0][2]),
            Vector3::new(self.m[1][0], self.m[1][1], self.m[1][2]),
            Vector3::new(self.m[2][0], self.m[2][1], self.m[2][2]),
        )
    }

    /// Calculate determinant
    pub fn determinant(&self) -> f64 {
        self.m[0][0] * (self.m[1][1] * self.m[2][2] - self.m[1][2] * self.m[2][1])
            - self.m[0][1] * (self.m[1][0] * self.m[2][2] - self.m[1][2] * self.m[2][0])
            + self.m[0][2] * (self.m[1][0] * self.m[2][1] - self.m[1][1] * self.m[2][0])
    }

    /// Transform a Vector3
    pub fn transform_point(&self, v: Vector3) -> Vector3 {
        Vector3::new(
            self.m[0][0] * v.x + self.m[0][1] * v.y + self.m[0][2] * v.z,
            self.m[1][0] * v.x + self.m[1][1] * v.y + self.m[1][2] * v.z,
            self.m[2][0] * v.x + self.m[2][1] * v.y + self.m[2][2] * v.z,
        )
    }
}

impl Mul<Vector3> for Matrix3 {
    type Output = Vector3;

    fn mul(self, v: Vector3) -> Self::Output {
        self.transform_point(v)
    }
}

impl Default for Matrix3 {
    fn default() -> Self {
        Self::identity()
    }
}

/// Object coordinate system of a planar entity
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ocs {
    extrusion: Vector3,
    matrix: Option<Matrix3>,
}

impl Ocs {
    /// OCS for the given extrusion vector, identity for +Z
    pub fn new(extrusion: Vector3) -> Self {
        let extrusion = extrusion.normalize();
        let matrix = if extrusion.is_close(&Vector3::UNIT_Z) {
            None
        } else {
            Some(Matrix3::arbitrary_axis(extrusion))
        };
        Ocs { extrusion, matrix }
    }

    /// Extrusion vector this OCS was built from
    pub fn extrusion(&self) -> Vector3 {
        self.extrusion
    }

    /// True if the OCS is the WCS
    pub fn is_identity(&self) -> bool {
        self.matrix.is_none()
    }

    /// Map a WCS point into this OCS
    pub fn from_wcs(&self, point: Vector3) -> Vector3 {
        match &self.matrix {
            Some(m) => m.transpose() * point,
            None => point,
        }
    }

    /// Map an OCS point into the WCS
    pub fn to_wcs(&self, point: Vector3) -> Vector3 {
        match &self.matrix {
            Some(m) => *m * point,
            None => point,
        }
    }
}

impl Default for Ocs {
    fn default() -> Self {
        Ocs::new(Vector3::UNIT_Z)
    }
}

/// User coordinate system: origin and three orthonormal axes in WCS
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ucs {
    pub origin: Vector3,
    pub ux: Vector3,
    pub uy: Vector3,
    pub uz: Vector3,
}

impl Ucs {
    /// Create a UCS from an origin and x- and y-axis
    ///
    /// The axes are normalized; `uz` is `ux × uy`. Parallel or zero-length
    /// axes do not span a plane and yield [`DxfError::Geometry`].
    pub fn new(origin: Vector3, ux: Vector3, uy: Vector3) -> Result<Self> {
        let uz = ux.cross(&uy);
        if ux.is_null() || uy.is_null() || uz.is_null() {
            return Err(DxfError::Geometry(format!(
                "UCS axes {} and {} do not span a plane",
                ux, uy
            )));
        }
        let ux = ux.normalize();
        let uz = uz.normalize();
        // re-orthogonalize y
        let uy = uz.cross(&ux).normalize();
        Ok(Ucs { origin, ux, uy, uz })
    }

    /// UCS whose xy-plane is the OCS plane of `extrusion`
    pub fn from_z_axis(origin: Vector3, extrusion: Vector3) -> Result<Self> {
        if extrusion.is_null() {
            return Err(DxfError::Geometry("zero-length extrusion vector".into()));
        }
        let m = Matrix3::arbitrary_axis(extrusion);
        Ok(Ucs {
            origin,
            ux: m.column(0),
            uy: m.column(1),
            uz: m.column(2),
        })
    }

    /// Map a UCS point into the WCS
    pub fn to_wcs(&self, point: Vector3) -> Vector3 {
        self.origin + self.ux * point.x + self.uy * point.y + self.uz * point.z
    }

    /// Map a WCS point into this UCS
    pub fn from_wcs(&self, point: Vector3) -> Vector3 {
        let p = point - self.origin;
        Vector3::new(p.dot(&self.ux), p.dot(&self.uy), p.dot(&self.uz))
    }

    /// Map a UCS point into the OCS defined by `uz`
    pub fn to_ocs(&self, point: Vector3) -> Vector3 {
        Ocs::new(self.uz).from_wcs(self.to_wcs(point))
    }
}

impl Default for Ucs {
    fn default() -> Self {
        Ucs {
            origin: Vector3::ZERO,
            ux: Vector3::UNIT_X,
            uy: Vector3::UNIT_Y,
            uz: Vector3::UNIT_Z,
        }
    }
}

/// Coordinate system a dimension is rendered in
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum CoordinateSystem {
    /// Dimension coordinates are already WCS
    #[default]
    PassThrough,
    /// Dimension coordinates are relative to a user coordinate system
    User(Ucs),
}

impl CoordinateSystem {
    /// Map a point of the working coordinate system into the WCS
    pub fn to_wcs(&self, point: Vector3) -> Vector3 {
        match self {
            CoordinateSystem::PassThrough => point,
            CoordinateSystem::User(ucs) => ucs.to_wcs(point),
        }
    }

    /// Map a point of the working coordinate system into the OCS of `uz`
    pub fn to_ocs(&self, point: Vector3) -> Vector3 {
        match self {
            CoordinateSystem::PassThrough => point,
            CoordinateSystem::User(ucs) => ucs.to_ocs(point),
        }
    }

    /// The drawing plane normal
    pub fn uz(&self) -> Vector3 {
        match self {
            CoordinateSystem::PassThrough => Vector3::UNIT_Z,
            CoordinateSystem::User(ucs) => ucs.uz,
        }
    }

    /// True if emitted planar entities need an explicit extrusion vector
    pub fn requires_extrusion(&self) -> bool {
        !self.uz().is_close(&Vector3::UNIT_Z)
    }
}

impl From<Ucs> for CoordinateSystem {
    fn from(ucs: Ucs) -> Self {
        CoordinateSystem::User(ucs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_matrix3_identity() {
        let m = Matrix3::identity();
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(m * v, v);
    }

    #[test]
    fn test_matrix3_rotation_z() {
        let m = Matrix3::rotation_z(PI / 2.0);
        let result = m * Vector3::UNIT_X;
        assert!(result.is_close(&Vector3::UNIT_Y));
    }

    #[test]
    fn test_arbitrary_axis() {
        let m = Matrix3::arbitrary_axis(Vector3::new(0.0, 0.0, 1.0));
        assert!((m.determinant() - 1.0).abs() < 1e-10);
        let m = Matrix3::arbitrary_axis(Vector3::new(1.0, 1.0, 1.0));
        assert!((m.determinant() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_ocs_roundtrip() {
        let ocs = Ocs::new(Vector3::new(1.0, 0.0, 0.0));
        assert!(!ocs.is_identity());
        let p = Vector3::new(3.0, -2.0, 7.0);
        assert!(ocs.to_wcs(ocs.from_wcs(p)).is_close(&p));
        assert!(Ocs::default().is_identity());
    }

    #[test]
    fn test_ucs_to_wcs() {
        let ucs = Ucs::new(
            Vector3::new(10.0, 0.0, 0.0),
            Vector3::UNIT_Y,
            -Vector3::UNIT_X,
        )
        .unwrap();
        let wcs = ucs.to_wcs(Vector3::new(1.0, 0.0, 0.0));
        assert!(wcs.is_close(&Vector3::new(10.0, 1.0, 0.0)));
        assert!(ucs.from_wcs(wcs).is_close(&Vector3::UNIT_X));
        assert!(!CoordinateSystem::User(ucs).requires_extrusion());
    }

    #[test]
    fn test_ucs_rejects_parallel_axes() {
        let err = Ucs::new(Vector3::ZERO, Vector3::UNIT_X, Vector3::UNIT_X * 2.0).unwrap_err();
        assert!(matches!(err, DxfError::Geometry(_)));
    }

    #[test]
    fn test_coordinate_system_extrusion() {
        let ucs = Ucs::from_z_axis(Vector3::ZERO, Vector3::new(0.0, 0.0, -1.0)).unwrap();
        let cs = CoordinateSystem::from(ucs);
        assert!(cs.requires_extrusion());
        // a UCS point maps to the OCS of its own z-axis without change of z
        let p = Vector3::new(2.0, 3.0, 0.0);
        assert!(cs.to_ocs(p).is_close(&p));
        assert!(!CoordinateSystem::PassThrough.requires_extrusion());
    }
}
