use glam::DMat3;

use crate::Vector3;

/// A 3×3 rotation matrix used to orient the camera.
///
/// Built from per-axis rotation angles in radians. Composition of two rotation
/// matrices stays a rotation matrix, up to floating-point drift.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RotationMatrix(DMat3);

impl RotationMatrix {
    pub const IDENTITY: RotationMatrix = RotationMatrix(DMat3::IDENTITY);

    /// Build a matrix from its three rows.
    pub fn from_rows(rows: [Vector3; 3]) -> Self {
        let [r0, r1, r2] = rows;
        Self(DMat3::from_cols(r0.into(), r1.into(), r2.into()).transpose())
    }

    /// Row `i`. Indices past the last row return the last row.
    pub fn row(&self, i: usize) -> Vector3 {
        self.0.row(i.min(2)).into()
    }

    /// Element at column `x`, row `y`.
    pub fn get(&self, x: usize, y: usize) -> f64 {
        self.row(y).to_array()[x.min(2)]
    }

    /// Elementary rotation about the X axis.
    pub fn rotate_x(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_rows([
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, c, -s),
            Vector3::new(0.0, s, c),
        ])
    }

    /// Elementary rotation about the Y axis.
    pub fn rotate_y(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_rows([
            Vector3::new(c, 0.0, s),
            Vector3::new(0.0, 1.0, 0.0),
            Vector3::new(-s, 0.0, c),
        ])
    }

    /// Elementary rotation about the Z axis.
    pub fn rotate_z(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_rows([
            Vector3::new(c, -s, 0.0),
            Vector3::new(s, c, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
        ])
    }

    /// Orientation from Euler angles, composed as `rotX · rotY · rotZ`.
    ///
    /// The order is fixed; changing it changes the resulting orientation.
    pub fn from_euler(angles: Vector3) -> Self {
        Self::rotate_x(angles.x())
            .multiply_matrix(&Self::rotate_y(angles.y()))
            .multiply_matrix(&Self::rotate_z(angles.z()))
    }

    /// Matrix product `self · other`.
    pub fn multiply_matrix(&self, other: &RotationMatrix) -> RotationMatrix {
        Self(self.0 * other.0)
    }

    /// Matrix-vector product `self · v`.
    pub fn multiply_vector(&self, v: Vector3) -> Vector3 {
        (self.0 * v.as_dvec3()).into()
    }

    /// True if every element is within `epsilon` of `other`.
    pub fn abs_diff_eq(&self, other: &RotationMatrix, epsilon: f64) -> bool {
        self.0.abs_diff_eq(other.0, epsilon)
    }
}

impl Default for RotationMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}
