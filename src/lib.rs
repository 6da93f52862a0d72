//! Viewing and illumination geometry for planetary image sensors.
//!
//! Callers describe an observation through four capabilities, a
//! [`scene::Sensor`], a [`scene::Shape`], a [`scene::Illuminator`], and a
//! [`scene::Body`], and the functions in [`observe`] compose them into the
//! classical observables: phase, emission, and incidence angles, slant and
//! illumination distances, sub-spacecraft and sub-solar points, local
//! radii, ground resolutions, right ascension and declination, local solar
//! time, and solar longitude.
//!
//! The crate owns no ephemerides and performs no I/O. Whether a kernel
//! pool or a test stub answers the capability calls, the observables only
//! ever see body-fixed vectors in metres and ephemeris times in seconds.

pub mod error;
pub mod geom;
pub mod observe;
pub mod scene;

pub use crate::error::Error;

/// The value types, capabilities, and observables in one import.
pub mod prelude {
    pub use crate::error::Error;
    pub use crate::geom::{GroundPoint2, GroundPoint3, ImagePoint, RaDec};
    pub use crate::observe::*;
    pub use crate::scene::{
        Body, Ellipsoid, Illuminator, Intersection, NormalMode, ObserverState, Sensor, Shape,
    };
}
