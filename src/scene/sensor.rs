use crate::error::Error;
use crate::geom::{GroundPoint3, ImagePoint};
use nalgebra::Vector3;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Everything the sensor knows about the observer for one image coordinate.
///
/// Positions are body-fixed metres and `time` is an ephemeris time in
/// seconds, passed through to the other capabilities without
/// interpretation. Look vectors carry direction only and need not be unit
/// length.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObserverState {
    /// Look direction in the body-fixed frame.
    pub look: Vector3<f64>,
    /// The same look direction in the inertial frame, for sky coordinates.
    pub look_j2000: Vector3<f64>,
    /// Sensor position in the body-fixed frame.
    pub position: Vector3<f64>,
    /// Ephemeris time of the observation.
    pub time: f64,
    /// The image coordinate this state answers for.
    pub image_point: ImagePoint,
}

/// Maps between image coordinates and observer state.
///
/// Implementations usually latch interpolated ephemerides and pointing
/// internally, so both directions take `&mut self`.
pub trait Sensor {
    /// Returns the observer state for an image coordinate.
    fn state_from_image(&mut self, image_point: &ImagePoint) -> Result<ObserverState, Error>;

    /// Returns the observer state at the image coordinate that views
    /// `ground_point`.
    ///
    /// Fails with [`Error::NotInImage`] when no image coordinate views the
    /// point.
    fn state_from_ground(&mut self, ground_point: &GroundPoint3) -> Result<ObserverState, Error>;
}
