//! Coordinate value types and the vector algebra shared by every
//! observable.
//!
//! Rectangular vectors are plain [`nalgebra::Vector3<f64>`] with components
//! in metres; angles, lengths, and times at the public surface carry their
//! units through [`uom`].

pub mod point;
pub mod vector;

pub use point::{GroundPoint2, GroundPoint3, ImagePoint, RaDec};
pub use vector::{distance, magnitude, rect_to_spherical, sep_angle, spherical_to_rect};
