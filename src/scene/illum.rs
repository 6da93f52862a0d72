use crate::error::Error;
use nalgebra::Vector3;

/// State vectors of the light source relative to the target body.
///
/// Both vectors are expressed in the body-fixed frame, metres and metres
/// per second. Fails with [`Error::NoEphemeris`] outside the loaded
/// coverage.
pub trait Illuminator {
    /// Returns the illuminator position at an ephemeris time.
    fn position(&mut self, time: f64) -> Result<Vector3<f64>, Error>;

    /// Returns the illuminator velocity at an ephemeris time.
    fn velocity(&mut self, time: f64) -> Result<Vector3<f64>, Error>;
}
