use rayon::prelude::*;
use subpoint::prelude::*;
use uom::si::f64::Length;
use uom::si::length::{kilometer, meter, micron, millimeter};
use uom::si::{angle::degree, time::hour};

/// A forward-only pinhole sensor staring at the body centre from a fixed
/// body-fixed position.
#[derive(Clone, Copy)]
struct StaringSensor {
    position: nalgebra::Vector3<f64>,
    /// Radians of field per pixel.
    ifov: f64,
    center_line: f64,
    center_sample: f64,
    time: f64,
}

impl Sensor for StaringSensor {
    fn state_from_image(&mut self, image_point: &ImagePoint) -> Result<ObserverState, Error> {
        // Boresight down -x, +y to the right, lines growing toward -z.
        let look = nalgebra::Vector3::new(
            -1.0,
            (image_point.sample() - self.center_sample) * self.ifov,
            (self.center_line - image_point.line()) * self.ifov,
        )
        .normalize();

        Ok(ObserverState {
            look,
            look_j2000: look,
            position: self.position,
            time: self.time,
            image_point: *image_point,
        })
    }

    fn state_from_ground(&mut self, ground_point: &GroundPoint3) -> Result<ObserverState, Error> {
        // This demo only renders forward.
        Err(Error::NotInImage {
            lat_deg: ground_point.lat().get::<degree>(),
            lon_deg: ground_point.lon().get::<degree>(),
        })
    }
}

/// An illuminator pinned to one spot, close enough for a single exposure.
#[derive(Clone, Copy)]
struct FixedSun {
    position: nalgebra::Vector3<f64>,
}

impl Illuminator for FixedSun {
    fn position(&mut self, _time: f64) -> Result<nalgebra::Vector3<f64>, Error> {
        Ok(self.position)
    }

    fn velocity(&mut self, _time: f64) -> Result<nalgebra::Vector3<f64>, Error> {
        Ok(nalgebra::Vector3::zeros())
    }
}

fn main() {
    let image_rows = 512u32;
    let image_cols = 512u32;
    let focal_length = Length::new::<millimeter>(150.0);
    let pixel_pitch = Length::new::<micron>(50.0);

    // A Mars-like spheroid watched from a morning-terminator vantage.
    let shape = Ellipsoid::spheroid(
        Length::new::<kilometer>(3396.19),
        Length::new::<kilometer>(3376.2),
    )
    .expect("semi-axes are positive");
    let sensor = StaringSensor {
        position: nalgebra::Vector3::new(40_000_000.0, 0.0, 0.0),
        ifov: (pixel_pitch / focal_length).get::<uom::si::ratio::ratio>(),
        center_line: image_rows as f64 / 2.0,
        center_sample: image_cols as f64 / 2.0,
        time: 0.0,
    };
    let sun = FixedSun {
        position: nalgebra::Vector3::new(1.0e11, 2.0e11, 2.0e10),
    };

    let rgb: Vec<u8> = (0..image_rows)
        .into_par_iter()
        .flat_map_iter(|line| {
            // Per-row copies keep the capabilities free to latch state.
            let mut sensor = sensor;
            let mut shape = shape;
            let mut sun = sun;

            (0..image_cols)
                .map(move |sample| {
                    let image_point = ImagePoint::new(line as f64, sample as f64);
                    match phase_angle(&image_point, &mut sensor, &mut shape, &mut sun) {
                        Ok(phase) => to_rgb(phase.get::<degree>(), 0.0, 180.0),
                        // Rays past the limb fall into black space.
                        Err(_) => [0, 0, 0],
                    }
                })
                .flatten()
        })
        .collect();

    let _ = image::save_buffer(
        "phase.png",
        &rgb,
        image_cols,
        image_rows,
        image::ExtendedColorType::Rgb8,
    );

    // Summarize the boresight pixel on stdout.
    let center = ImagePoint::new(image_rows as f64 / 2.0, image_cols as f64 / 2.0);
    let mut sensor = sensor;
    let mut shape = shape;
    let mut sun = sun;
    let pinhole = Pinhole::new(focal_length, pixel_pitch).expect("lengths are positive");

    if let Ok(point) = sub_spacecraft_point(&center, &mut sensor) {
        println!(
            "sub-spacecraft point: lat {:.3} deg, lon {:.3} deg",
            point.lat().get::<degree>(),
            point.lon().get::<degree>()
        );
    }
    if let Ok(slant) = slant_distance(&center, &mut sensor, &mut shape) {
        println!("slant range: {:.1} km", slant.get::<kilometer>());
    }
    if let Ok(resolution) = pixel_resolution(&center, &mut sensor, &mut shape, &pinhole) {
        println!("pixel resolution: {:.1} m", resolution.get::<meter>());
    }
    if let Ok(lst) = local_solar_time(&center, &mut sensor, &mut shape, &mut sun) {
        println!("local solar time: {:.2} h", lst.get::<hour>());
    }
}

// Map an f64 on the interval [x_min, x_max] to a jet-like RGB colour.
fn to_rgb(x: f64, x_min: f64, x_max: f64) -> [u8; 3] {
    let t = ((x - x_min) / (x_max - x_min)).clamp(0.0, 1.0);
    let ramp = |v: f64| (v.clamp(0.0, 1.0) * 255.0) as u8;

    [
        ramp(1.5 - (4.0 * t - 3.0).abs()),
        ramp(1.5 - (4.0 * t - 2.0).abs()),
        ramp(1.5 - (4.0 * t - 1.0).abs()),
    ]
}
