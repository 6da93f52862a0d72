use crate::error::Error;
use nalgebra::{Matrix3, Vector3};

/// Rotation state of the target body.
pub trait Body {
    /// Returns the rotation taking inertial vectors into the body-fixed
    /// frame at an ephemeris time.
    ///
    /// The third row of the matrix is the body's north pole expressed in
    /// the inertial frame. Implementations holding the conventional
    /// row-major 9-element array convert with [`Matrix3::from_row_slice`].
    fn rotation(&mut self, time: f64) -> Result<Matrix3<f64>, Error>;

    /// Transforms `v` from the inertial frame into the body-fixed frame at
    /// the implementation's current time.
    fn fixed_vector(&mut self, v: &Vector3<f64>) -> Result<Vector3<f64>, Error>;
}
