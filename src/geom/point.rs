#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use uom::ConstZero;
use uom::si::f64::{Angle, Length};

/// A point on the target body as geocentric latitude and positive-east
/// longitude.
///
/// The latitude must be between -90 and 90 degrees. Longitude carries
/// whatever domain the producer used; consumers that need a particular wrap
/// apply it themselves.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GroundPoint2 {
    lat: Angle,
    lon: Angle,
}

impl GroundPoint2 {
    /// Creates a new `GroundPoint2` from `lat` and `lon`.
    ///
    /// Returns `None` if `lat` is not between -90 and 90 degrees.
    pub fn new(lat: Angle, lon: Angle) -> Option<Self> {
        if !lat_is_valid(lat) {
            return None;
        }

        Some(Self { lat, lon })
    }

    pub fn lat(&self) -> Angle {
        self.lat
    }

    pub fn lon(&self) -> Angle {
        self.lon
    }
}

/// A point on or above the target body as geocentric latitude,
/// positive-east longitude, and distance from the body centre.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GroundPoint3 {
    lat: Angle,
    lon: Angle,
    radius: Length,
}

impl GroundPoint3 {
    /// Creates a new `GroundPoint3` from `lat`, `lon`, and `radius`.
    ///
    /// Returns `None` if `lat` is not between -90 and 90 degrees or if
    /// `radius` is negative.
    pub fn new(lat: Angle, lon: Angle, radius: Length) -> Option<Self> {
        if !lat_is_valid(lat) || radius < Length::ZERO {
            return None;
        }

        Some(Self { lat, lon, radius })
    }

    /// The point at the body centre, used as the spherical image of a
    /// zero-length vector.
    pub fn zero() -> Self {
        Self {
            lat: Angle::ZERO,
            lon: Angle::ZERO,
            radius: Length::ZERO,
        }
    }

    pub fn lat(&self) -> Angle {
        self.lat
    }

    pub fn lon(&self) -> Angle {
        self.lon
    }

    pub fn radius(&self) -> Length {
        self.radius
    }
}

impl From<GroundPoint3> for GroundPoint2 {
    /// Drops the radius.
    fn from(point: GroundPoint3) -> Self {
        Self {
            lat: point.lat,
            lon: point.lon,
        }
    }
}

/// Returns `true` if `lat` is between -90 and 90 degrees, `false` otherwise.
fn lat_is_valid(lat: Angle) -> bool {
    lat.abs() <= Angle::HALF_TURN / 2.
}

/// A continuous image coordinate.
///
/// `line` counts down rows and `sample` counts across columns, both from
/// the image origin. Fractional values address positions between detector
/// elements.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ImagePoint {
    line: f64,
    sample: f64,
    band: f64,
}

impl ImagePoint {
    /// Creates a new `ImagePoint` on the first band.
    pub fn new(line: f64, sample: f64) -> Self {
        Self {
            line,
            sample,
            band: 0.0,
        }
    }

    /// Creates a new `ImagePoint` on a specific band.
    pub fn with_band(line: f64, sample: f64, band: f64) -> Self {
        Self { line, sample, band }
    }

    pub fn line(&self) -> f64 {
        self.line
    }

    pub fn sample(&self) -> f64 {
        self.sample
    }

    pub fn band(&self) -> f64 {
        self.band
    }
}

/// A direction on the sky as right ascension and declination.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RaDec {
    ra: Angle,
    dec: Angle,
}

impl RaDec {
    /// Creates a new `RaDec` from `ra` and `dec`, wrapping `ra` into the
    /// range 0 to 360 degrees.
    ///
    /// Returns `None` if `dec` is not between -90 and 90 degrees.
    pub fn new(ra: Angle, dec: Angle) -> Option<Self> {
        if !lat_is_valid(dec) {
            return None;
        }

        let mut ra = ra;
        while ra < Angle::ZERO {
            ra += Angle::FULL_TURN;
        }

        while ra >= Angle::FULL_TURN {
            ra -= Angle::FULL_TURN;
        }

        Some(Self { ra, dec })
    }

    pub fn ra(&self) -> Angle {
        self.ra
    }

    pub fn dec(&self) -> Angle {
        self.dec
    }
}
