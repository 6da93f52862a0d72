//! The observables, composed from the scene capabilities.
//!
//! Every function here borrows its collaborators for the duration of one
//! call and passes their failures through unchanged. Angles come back in
//! 0 to 180 degrees unless documented otherwise, and nothing is cached
//! between calls.

mod angles;
mod distance;
mod point;
mod resolution;
mod sky;

pub use angles::{ellipsoid_emission_angle, emission_angle, incidence_angle, phase_angle};
pub use distance::{
    illumination_distance, slant_distance, spacecraft_altitude, target_center_distance,
};
pub use point::{
    local_radius, local_radius_at, sub_solar_point, sub_solar_surface, sub_spacecraft_point,
    sub_spacecraft_surface,
};
pub use resolution::{
    Pinhole, detector_resolution, line_resolution, pixel_resolution, sample_resolution,
};
pub use sky::{local_solar_time, right_ascension_declination, solar_longitude};
