//! The four capabilities an observation is assembled from.
//!
//! A [`Sensor`] answers for the observer, a [`Shape`] for the target
//! surface, an [`Illuminator`] for the light source, and a [`Body`] for
//! the target's rotation. The observables in [`crate::observe`] borrow
//! whichever of these they need for the duration of one call and never
//! retain them.
//!
//! Every capability method takes `&mut self` because implementations
//! backed by kernel pools or interpolators latch state between calls.
//! Share a collaborator across threads only behind external
//! synchronization, or give each worker its own.

mod body;
mod illum;
mod sensor;
mod shape;

pub use body::Body;
pub use illum::Illuminator;
pub use sensor::{ObserverState, Sensor};
pub use shape::{Ellipsoid, Intersection, NormalMode, Shape};
