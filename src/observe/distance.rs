use crate::error::Error;
use crate::geom::{ImagePoint, distance, magnitude};
use crate::scene::{Body, Illuminator, NormalMode, Sensor, Shape};
use uom::si::f64::Length;

/// Returns the distance from the sensor to the ground point it views at
/// `image_point`.
pub fn slant_distance(
    image_point: &ImagePoint,
    sensor: &mut dyn Sensor,
    shape: &mut dyn Shape,
) -> Result<Length, Error> {
    let state = sensor.state_from_image(image_point)?;
    let ground = shape.intersect(&state.position, &state.look, NormalMode::Ellipsoid)?;

    Ok(distance(&state.position, &ground.ground_pt))
}

/// Returns the distance from the viewed ground point to the illuminator.
pub fn illumination_distance(
    image_point: &ImagePoint,
    sensor: &mut dyn Sensor,
    shape: &mut dyn Shape,
    illuminator: &mut dyn Illuminator,
) -> Result<Length, Error> {
    let state = sensor.state_from_image(image_point)?;
    let ground = shape.intersect(&state.position, &state.look, NormalMode::Ellipsoid)?;
    let illum_position = illuminator.position(state.time)?;

    Ok(distance(&ground.ground_pt, &illum_position))
}

/// Returns the distance from the sensor to the centre of the target body.
///
/// The sensor position passes through [`Body::fixed_vector`] first, which
/// lets sensors that report inertial positions share this observable with
/// body-fixed ones.
pub fn target_center_distance(
    image_point: &ImagePoint,
    sensor: &mut dyn Sensor,
    body: &mut dyn Body,
) -> Result<Length, Error> {
    let state = sensor.state_from_image(image_point)?;
    let fixed = body.fixed_vector(&state.position)?;

    Ok(magnitude(&fixed))
}

/// Returns the distance from the sensor straight down to the surface
/// beneath it.
pub fn spacecraft_altitude(
    image_point: &ImagePoint,
    sensor: &mut dyn Sensor,
    shape: &mut dyn Shape,
) -> Result<Length, Error> {
    let state = sensor.state_from_image(image_point)?;
    let ground = shape.intersect(&state.position, &-state.position, NormalMode::Ellipsoid)?;

    Ok(distance(&state.position, &ground.ground_pt))
}
