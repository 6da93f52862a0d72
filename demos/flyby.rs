use nalgebra::{Matrix3, Vector3};
use subpoint::prelude::*;
use uom::si::angle::degree;
use uom::si::f64::Length;
use uom::si::length::kilometer;
use uom::si::time::hour;

/// A nadir-staring sensor riding a circular equatorial orbit.
///
/// Each image line is one exposure; the line number times the exposure
/// cadence gives the ephemeris time.
struct Orbiter {
    orbit_radius: f64,
    /// Radians of orbit per second.
    rate: f64,
    /// Seconds between successive lines.
    cadence: f64,
}

impl Sensor for Orbiter {
    fn state_from_image(&mut self, image_point: &ImagePoint) -> Result<ObserverState, Error> {
        let time = image_point.line() * self.cadence;
        let along = self.rate * time;
        let position = Vector3::new(along.cos(), along.sin(), 0.0) * self.orbit_radius;
        let look = -position.normalize();

        Ok(ObserverState {
            look,
            look_j2000: look,
            position,
            time,
            image_point: *image_point,
        })
    }

    fn state_from_ground(&mut self, ground_point: &GroundPoint3) -> Result<ObserverState, Error> {
        Err(Error::NotInImage {
            lat_deg: ground_point.lat().get::<degree>(),
            lon_deg: ground_point.lon().get::<degree>(),
        })
    }
}

/// A sun crawling along its apparent orbit at a fixed angular rate.
struct CrawlingSun {
    distance: f64,
    /// Radians of apparent orbit per second.
    rate: f64,
}

impl Illuminator for CrawlingSun {
    fn position(&mut self, time: f64) -> Result<Vector3<f64>, Error> {
        let along = self.rate * time;
        Ok(Vector3::new(along.cos(), along.sin(), 0.0) * self.distance)
    }

    fn velocity(&mut self, time: f64) -> Result<Vector3<f64>, Error> {
        let along = self.rate * time;
        Ok(Vector3::new(-along.sin(), along.cos(), 0.0) * self.distance * self.rate)
    }
}

/// A body whose pole leans a fixed obliquity toward +x.
struct TiltedBody {
    rotation: Matrix3<f64>,
}

impl TiltedBody {
    fn with_obliquity(obliquity_deg: f64) -> Self {
        let tilt = obliquity_deg.to_radians();
        Self {
            rotation: Matrix3::from_row_slice(&[
                tilt.cos(),
                0.0,
                -tilt.sin(),
                0.0,
                1.0,
                0.0,
                tilt.sin(),
                0.0,
                tilt.cos(),
            ]),
        }
    }
}

impl Body for TiltedBody {
    fn rotation(&mut self, _time: f64) -> Result<Matrix3<f64>, Error> {
        Ok(self.rotation)
    }

    fn fixed_vector(&mut self, v: &Vector3<f64>) -> Result<Vector3<f64>, Error> {
        Ok(self.rotation * v)
    }
}

fn main() {
    let mut shape = Ellipsoid::spheroid(
        Length::new::<kilometer>(3396.19),
        Length::new::<kilometer>(3376.2),
    )
    .expect("semi-axes are positive");
    let mut sensor = Orbiter {
        orbit_radius: 3_700_000.0,
        rate: 1.05e-3,
        cadence: 60.0,
    };
    let mut sun = CrawlingSun {
        distance: 2.28e11,
        rate: 1.06e-7,
    };
    let mut body = TiltedBody::with_obliquity(25.19);

    println!(
        "{:>6} {:>9} {:>9} {:>10} {:>8} {:>8} {:>7} {:>8}",
        "line", "lat(deg)", "lon(deg)", "slant(km)", "phase", "emission", "lst(h)", "ls(deg)"
    );

    for line in 0..30 {
        let image_point = ImagePoint::new(line as f64, 0.0);

        let point = match sub_spacecraft_point(&image_point, &mut sensor) {
            Ok(point) => point,
            Err(err) => {
                eprintln!("line {line}: {err}");
                continue;
            }
        };
        let slant = slant_distance(&image_point, &mut sensor, &mut shape);
        let phase = phase_angle(&image_point, &mut sensor, &mut shape, &mut sun);
        let emission = emission_angle(&image_point, &mut sensor, &mut shape);
        let lst = local_solar_time(&image_point, &mut sensor, &mut shape, &mut sun);
        let ls = solar_longitude(&image_point, &mut sensor, &mut sun, &mut body);

        match (slant, phase, emission, lst, ls) {
            (Ok(slant), Ok(phase), Ok(emission), Ok(lst), Ok(ls)) => println!(
                "{:>6} {:>9.3} {:>9.3} {:>10.1} {:>8.3} {:>8.3} {:>7.2} {:>8.3}",
                line,
                point.lat().get::<degree>(),
                point.lon().get::<degree>(),
                slant.get::<kilometer>(),
                phase.get::<degree>(),
                emission.get::<degree>(),
                lst.get::<hour>(),
                ls.get::<degree>(),
            ),
            _ => eprintln!("line {line}: no surface under the boresight"),
        }
    }
}
