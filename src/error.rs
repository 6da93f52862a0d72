use nalgebra::Vector3;
use thiserror::Error;

/// Failure cases surfaced by the scene capabilities and the observables
/// built on top of them.
///
/// Zero-length vectors and other degenerate numerics are not failures; the
/// primitives in [`crate::geom`](crate::geom) resolve those to documented
/// values instead. Everything here is a collaborator that could not answer,
/// or an argument outside its stated range.
#[derive(Debug, Error)]
pub enum Error {
    /// The look ray never touches the target surface.
    #[error(
        "ray from ({}, {}, {}) along ({}, {}, {}) does not intersect the surface",
        .observer.x, .observer.y, .observer.z, .look.x, .look.y, .look.z
    )]
    NoIntersection {
        observer: Vector3<f64>,
        look: Vector3<f64>,
    },

    /// No image coordinate views the requested ground point.
    #[error("no image coordinate views lat {lat_deg} deg, lon {lon_deg} deg")]
    NotInImage { lat_deg: f64, lon_deg: f64 },

    /// A collaborator has no ephemeris coverage at the requested time.
    #[error("no ephemeris coverage at et {time}")]
    NoEphemeris { time: f64 },

    /// The shape reported an intersection without the surface normal the
    /// observable needs.
    #[error("intersection carries no surface normal")]
    MissingNormal,

    /// An argument fell outside its documented range.
    #[error("expected {quantity} to be {requirement} but got: {value}")]
    OutOfRange {
        quantity: &'static str,
        requirement: &'static str,
        value: f64,
    },

    /// Any other failure raised inside a collaborator.
    #[error("collaborator failed: {0}")]
    Collaborator(String),
}
