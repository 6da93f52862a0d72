use crate::error::Error;
use crate::geom::{ImagePoint, RaDec, rect_to_spherical};
use crate::scene::{Body, Illuminator, NormalMode, Sensor, Shape};
use nalgebra::Matrix3;
use uom::si::angle::degree;
use uom::si::f64::{Angle, Time};
use uom::si::time::hour;

/// Returns the right ascension and declination of the look direction at
/// `image_point`.
pub fn right_ascension_declination(
    image_point: &ImagePoint,
    sensor: &mut dyn Sensor,
) -> Result<RaDec, Error> {
    let state = sensor.state_from_image(image_point)?;
    let spherical = rect_to_spherical(&state.look_j2000);

    // Expect is enforced by the latitude range of rect_to_spherical.
    Ok(RaDec::new(spherical.lon(), spherical.lat())
        .expect("declination is within range -90 to 90"))
}

/// Returns the local solar time at the viewed ground point in the range
/// 0 to 24 hours.
///
/// Noon is the moment the ground longitude passes under the illuminator,
/// and each hour spans 15 degrees of longitude.
pub fn local_solar_time(
    image_point: &ImagePoint,
    sensor: &mut dyn Sensor,
    shape: &mut dyn Shape,
    illuminator: &mut dyn Illuminator,
) -> Result<Time, Error> {
    let state = sensor.state_from_image(image_point)?;
    let ground = shape.intersect(&state.position, &state.look, NormalMode::Ellipsoid)?;
    let illum_position = illuminator.position(state.time)?;

    let ground_lon = rect_to_spherical(&ground.ground_pt).lon();
    let solar_lon = rect_to_spherical(&illum_position).lon();

    let east_of_midnight = (ground_lon - solar_lon).get::<degree>() + 180.0;

    // rem_euclid rounds a vanishing negative up to the modulus itself.
    let mut hours = (east_of_midnight / 15.0).rem_euclid(24.0);
    if hours >= 24.0 {
        hours -= 24.0;
    }

    Ok(Time::new::<hour>(hours))
}

/// Returns the planetocentric solar longitude, L-sub-s, at the time of the
/// observation in the range 0 to 360 degrees.
///
/// The illuminator's instantaneous orbit normal and the body's north pole
/// frame an orbit-plane coordinate system; the longitude of the
/// illuminator in that system is the seasonal angle, with 0 at the
/// northern spring equinox.
pub fn solar_longitude(
    image_point: &ImagePoint,
    sensor: &mut dyn Sensor,
    illuminator: &mut dyn Illuminator,
    body: &mut dyn Body,
) -> Result<Angle, Error> {
    let state = sensor.state_from_image(image_point)?;
    let illum_position = illuminator.position(state.time)?;
    let illum_velocity = illuminator.velocity(state.time)?;
    let rotation = body.rotation(state.time)?;

    let orbit_normal = illum_position.cross(&illum_velocity);
    if orbit_normal.norm() == 0.0 {
        return Err(Error::Collaborator(
            "illuminator position and velocity are colinear, the orbit plane is undefined".into(),
        ));
    }

    let z = orbit_normal.normalize();
    let north_pole = rotation.row(2).transpose();
    let x = north_pole.cross(&z);
    if x.norm() == 0.0 {
        return Err(Error::Collaborator(
            "body north pole lies along the orbit normal, the equinox direction is undefined"
                .into(),
        ));
    }

    let x = x.normalize();
    let y = z.cross(&x).normalize();
    let to_orbit_plane = Matrix3::from_rows(&[x.transpose(), y.transpose(), z.transpose()]);

    let in_orbit_plane = to_orbit_plane * illum_position;
    let lon = rect_to_spherical(&in_orbit_plane).lon();

    // rem_euclid rounds a vanishing negative up to the modulus itself.
    let mut degrees = lon.get::<degree>().rem_euclid(360.0);
    if degrees >= 360.0 {
        degrees -= 360.0;
    }

    Ok(Angle::new::<degree>(degrees))
}
