use crate::error::Error;
use crate::geom::{
    GroundPoint2, GroundPoint3, ImagePoint, magnitude, rect_to_spherical, spherical_to_rect,
};
use crate::scene::{Illuminator, NormalMode, Sensor, Shape};
use nalgebra::Vector3;
use uom::ConstZero;
use uom::si::f64::Length;
use uom::si::length::meter;

/// Returns the latitude and longitude directly beneath the sensor.
///
/// This is the spherical image of the sensor position itself, so it needs
/// no surface model; pair it with [`sub_spacecraft_surface`] when the
/// surface point matters.
pub fn sub_spacecraft_point(
    image_point: &ImagePoint,
    sensor: &mut dyn Sensor,
) -> Result<GroundPoint2, Error> {
    let state = sensor.state_from_image(image_point)?;

    Ok(rect_to_spherical(&state.position).into())
}

/// Returns the surface point where the ray from the sensor to the body
/// centre crosses the surface.
pub fn sub_spacecraft_surface(
    image_point: &ImagePoint,
    sensor: &mut dyn Sensor,
    shape: &mut dyn Shape,
) -> Result<Vector3<f64>, Error> {
    let state = sensor.state_from_image(image_point)?;
    let ground = shape.intersect(&state.position, &-state.position, NormalMode::Ellipsoid)?;

    Ok(ground.ground_pt)
}

/// Returns the latitude and longitude directly beneath the illuminator at
/// the time of the observation.
pub fn sub_solar_point(
    image_point: &ImagePoint,
    sensor: &mut dyn Sensor,
    illuminator: &mut dyn Illuminator,
) -> Result<GroundPoint2, Error> {
    let state = sensor.state_from_image(image_point)?;
    let illum_position = illuminator.position(state.time)?;

    Ok(rect_to_spherical(&illum_position).into())
}

/// Returns the surface point where the ray from the illuminator to the
/// body centre crosses the surface.
pub fn sub_solar_surface(
    image_point: &ImagePoint,
    sensor: &mut dyn Sensor,
    shape: &mut dyn Shape,
    illuminator: &mut dyn Illuminator,
) -> Result<Vector3<f64>, Error> {
    let state = sensor.state_from_image(image_point)?;
    let illum_position = illuminator.position(state.time)?;
    let ground = shape.intersect(&illum_position, &-illum_position, NormalMode::Ellipsoid)?;

    Ok(ground.ground_pt)
}

/// Returns the distance from the body centre to the surface at the ground
/// point viewed at `image_point`.
pub fn local_radius(
    image_point: &ImagePoint,
    sensor: &mut dyn Sensor,
    shape: &mut dyn Shape,
) -> Result<Length, Error> {
    let state = sensor.state_from_image(image_point)?;
    let ground = shape.intersect(&state.position, &state.look, NormalMode::Ellipsoid)?;

    Ok(magnitude(&ground.ground_pt))
}

/// Returns the distance from the body centre to the surface at a given
/// latitude and longitude.
///
/// The surface is probed with a ray fired at the body centre from
/// `max_radius` above it, so `max_radius` must clear the surface
/// everywhere; anything comfortably above the highest terrain works.
/// Fails with [`Error::OutOfRange`] when `max_radius` is not positive.
pub fn local_radius_at(
    ground_point: &GroundPoint2,
    shape: &mut dyn Shape,
    max_radius: Length,
) -> Result<Length, Error> {
    if max_radius <= Length::ZERO {
        return Err(Error::OutOfRange {
            quantity: "max_radius",
            requirement: "positive",
            value: max_radius.get::<meter>(),
        });
    }

    // Expect is enforced by ground_point's own latitude bound and the
    // radius guard above.
    let probe = GroundPoint3::new(ground_point.lat(), ground_point.lon(), max_radius)
        .expect("latitude is within range -90 to 90 and radius is positive");
    let position = spherical_to_rect(&probe);
    let ground = shape.intersect(&position, &-position, NormalMode::Ellipsoid)?;

    Ok(magnitude(&ground.ground_pt))
}
