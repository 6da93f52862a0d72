use crate::error::Error;
use crate::geom::ImagePoint;
use crate::observe::distance::slant_distance;
use crate::scene::{Sensor, Shape};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use uom::ConstZero;
use uom::si::f64::Length;
use uom::si::length::meter;
use uom::si::ratio::ratio;

/// The pinhole optics of the observing camera.
///
/// Focal length and pixel pitch are plain lengths, so a caller working in
/// millimetres and microns agrees with one working in metres by
/// construction. The scale factors describe on-chip summation; a summing
/// mode that bins two lines into one carries a line scale of two.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pinhole {
    focal_length: Length,
    pixel_pitch: Length,
    line_scale: f64,
    sample_scale: f64,
}

impl Pinhole {
    /// Creates a new `Pinhole` with unit scale factors.
    ///
    /// Fails with [`Error::OutOfRange`] unless both lengths are positive.
    pub fn new(focal_length: Length, pixel_pitch: Length) -> Result<Self, Error> {
        if focal_length <= Length::ZERO {
            return Err(Error::OutOfRange {
                quantity: "focal length",
                requirement: "positive",
                value: focal_length.get::<meter>(),
            });
        }

        if pixel_pitch <= Length::ZERO {
            return Err(Error::OutOfRange {
                quantity: "pixel pitch",
                requirement: "positive",
                value: pixel_pitch.get::<meter>(),
            });
        }

        Ok(Self {
            focal_length,
            pixel_pitch,
            line_scale: 1.0,
            sample_scale: 1.0,
        })
    }

    /// Sets the line summation scale factor.
    pub fn with_line_scale(mut self, scale: f64) -> Self {
        self.line_scale = scale;
        self
    }

    /// Sets the sample summation scale factor.
    pub fn with_sample_scale(mut self, scale: f64) -> Self {
        self.sample_scale = scale;
        self
    }

    /// How many detector elements one radian of the field spans.
    fn pixels_per_radian(&self) -> f64 {
        (self.focal_length / self.pixel_pitch).get::<ratio>()
    }
}

/// Returns the ground distance spanned by one unsummed detector element at
/// the viewed ground point.
pub fn detector_resolution(
    image_point: &ImagePoint,
    sensor: &mut dyn Sensor,
    shape: &mut dyn Shape,
    pinhole: &Pinhole,
) -> Result<Length, Error> {
    let slant = slant_distance(image_point, sensor, shape)?;

    Ok(slant / pinhole.pixels_per_radian())
}

/// Returns the ground distance spanned by one image line at the viewed
/// ground point.
pub fn line_resolution(
    image_point: &ImagePoint,
    sensor: &mut dyn Sensor,
    shape: &mut dyn Shape,
    pinhole: &Pinhole,
) -> Result<Length, Error> {
    Ok(detector_resolution(image_point, sensor, shape, pinhole)? * pinhole.line_scale)
}

/// Returns the ground distance spanned by one image sample at the viewed
/// ground point.
pub fn sample_resolution(
    image_point: &ImagePoint,
    sensor: &mut dyn Sensor,
    shape: &mut dyn Shape,
    pinhole: &Pinhole,
) -> Result<Length, Error> {
    Ok(detector_resolution(image_point, sensor, shape, pinhole)? * pinhole.sample_scale)
}

/// Returns the mean of the line and sample resolutions, or zero when a
/// negative scale factor makes either direction meaningless.
pub fn pixel_resolution(
    image_point: &ImagePoint,
    sensor: &mut dyn Sensor,
    shape: &mut dyn Shape,
    pinhole: &Pinhole,
) -> Result<Length, Error> {
    let line = line_resolution(image_point, sensor, shape, pinhole)?;
    let sample = sample_resolution(image_point, sensor, shape, pinhole)?;
    if line < Length::ZERO || sample < Length::ZERO {
        return Ok(Length::ZERO);
    }

    Ok((line + sample) / 2.0)
}
