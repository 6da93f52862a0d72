use crate::geom::point::GroundPoint3;
use nalgebra::Vector3;
use uom::ConstZero;
use uom::si::angle::radian;
use uom::si::f64::{Angle, Length};
use uom::si::length::meter;

/// Vectors shorter than this collapse to [`GroundPoint3::zero`] instead of
/// dividing by a vanishing radius.
const DEGENERATE_RADIUS: f64 = 1e-15;

/// Returns the Euclidean length of `v`, reading its components as metres.
pub fn magnitude(v: &Vector3<f64>) -> Length {
    Length::new::<meter>(v.norm())
}

/// Returns the Euclidean distance between `start` and `stop` in metres.
pub fn distance(start: &Vector3<f64>, stop: &Vector3<f64>) -> Length {
    Length::new::<meter>((stop - start).norm())
}

/// Returns the angular separation between `a` and `b` in the range 0 to
/// 180 degrees.
///
/// The cosine is clamped before the arccosine so that rounding on nearly
/// parallel vectors cannot push the result out of range. If either vector
/// has zero length the separation is zero.
pub fn sep_angle(a: &Vector3<f64>, b: &Vector3<f64>) -> Angle {
    let norms = a.norm() * b.norm();
    if norms == 0.0 {
        return Angle::ZERO;
    }

    let cos = (a.dot(b) / norms).clamp(-1.0, 1.0);
    Angle::new::<radian>(cos.acos())
}

/// Converts geocentric spherical coordinates to a rectangular vector with
/// components in metres.
pub fn spherical_to_rect(point: &GroundPoint3) -> Vector3<f64> {
    let lat = point.lat().get::<radian>();
    let lon = point.lon().get::<radian>();
    let radius = point.radius().get::<meter>();

    Vector3::new(
        radius * lat.cos() * lon.cos(),
        radius * lat.cos() * lon.sin(),
        radius * lat.sin(),
    )
}

/// Converts a rectangular vector with components in metres to geocentric
/// spherical coordinates.
///
/// The longitude follows `atan2` onto the range -180 to 180 degrees.
pub fn rect_to_spherical(v: &Vector3<f64>) -> GroundPoint3 {
    let radius = v.norm();
    if radius < DEGENERATE_RADIUS {
        return GroundPoint3::zero();
    }

    // Expect is enforced by asin's range and the radius guard above.
    GroundPoint3::new(
        Angle::new::<radian>((v.z / radius).asin()),
        Angle::new::<radian>(v.y.atan2(v.x)),
        Length::new::<meter>(radius),
    )
    .expect("latitude is within range -90 to 90 and radius is positive")
}
