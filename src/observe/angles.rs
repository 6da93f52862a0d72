use crate::error::Error;
use crate::geom::{ImagePoint, sep_angle};
use crate::scene::{Illuminator, NormalMode, Sensor, Shape};
use uom::si::f64::Angle;

/// Returns the angle at the ground point between the direction back to the
/// sensor and the direction to the illuminator, in the range 0 to 180
/// degrees.
///
/// Zero means the illuminator sits directly behind the sensor and the
/// target is fully lit; 180 degrees means the sensor stares into the
/// illuminator past a dark target.
pub fn phase_angle(
    image_point: &ImagePoint,
    sensor: &mut dyn Sensor,
    shape: &mut dyn Shape,
    illuminator: &mut dyn Illuminator,
) -> Result<Angle, Error> {
    let state = sensor.state_from_image(image_point)?;
    let ground = shape.intersect(&state.position, &state.look, NormalMode::Ellipsoid)?;
    let illum_position = illuminator.position(state.time)?;

    Ok(sep_angle(
        &(state.position - ground.ground_pt),
        &(illum_position - ground.ground_pt),
    ))
}

/// Returns the angle at the ground point between the local surface normal
/// and the direction back to the sensor, in the range 0 to 180 degrees.
pub fn emission_angle(
    image_point: &ImagePoint,
    sensor: &mut dyn Sensor,
    shape: &mut dyn Shape,
) -> Result<Angle, Error> {
    emission(image_point, sensor, shape, NormalMode::Local)
}

/// [`emission_angle`] measured against the reference ellipsoid normal
/// instead of the local terrain.
pub fn ellipsoid_emission_angle(
    image_point: &ImagePoint,
    sensor: &mut dyn Sensor,
    shape: &mut dyn Shape,
) -> Result<Angle, Error> {
    emission(image_point, sensor, shape, NormalMode::Ellipsoid)
}

fn emission(
    image_point: &ImagePoint,
    sensor: &mut dyn Sensor,
    shape: &mut dyn Shape,
    normal_mode: NormalMode,
) -> Result<Angle, Error> {
    let state = sensor.state_from_image(image_point)?;
    let ground = shape.intersect(&state.position, &state.look, normal_mode)?;
    let normal = ground.normal.ok_or(Error::MissingNormal)?;

    Ok(sep_angle(&normal, &(state.position - ground.ground_pt)))
}

/// Returns the angle at the ground point between the local surface normal
/// and the direction to the illuminator, in the range 0 to 180 degrees.
///
/// Values past 90 degrees put the point in shadow.
pub fn incidence_angle(
    image_point: &ImagePoint,
    sensor: &mut dyn Sensor,
    shape: &mut dyn Shape,
    illuminator: &mut dyn Illuminator,
) -> Result<Angle, Error> {
    let state = sensor.state_from_image(image_point)?;
    let ground = shape.intersect(&state.position, &state.look, NormalMode::Local)?;
    let normal = ground.normal.ok_or(Error::MissingNormal)?;
    let illum_position = illuminator.position(state.time)?;

    Ok(sep_angle(&normal, &(illum_position - ground.ground_pt)))
}
