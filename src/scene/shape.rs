use crate::error::Error;
use nalgebra::Vector3;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use uom::si::f64::Length;
use uom::si::length::meter;

/// Selects which surface normal an intersection should carry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NormalMode {
    /// The analytic normal of the reference ellipsoid.
    Ellipsoid,
    /// The normal of the local terrain around the intersection, when the
    /// shape models one.
    Local,
}

/// A ray-surface intersection in the body-fixed frame.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Intersection {
    /// The surface point in metres.
    pub ground_pt: Vector3<f64>,
    /// Outward unit surface normal, when the shape computed one.
    pub normal: Option<Vector3<f64>>,
}

/// A ray-intersectable model of the target surface.
pub trait Shape {
    /// Returns the first crossing of the ray `observer + t * look`, t > 0,
    /// with the surface.
    ///
    /// `look` carries direction only and need not be unit length. Fails
    /// with [`Error::NoIntersection`] when the ray misses.
    fn intersect(
        &mut self,
        observer: &Vector3<f64>,
        look: &Vector3<f64>,
        normal_mode: NormalMode,
    ) -> Result<Intersection, Error>;
}

/// A triaxial ellipsoid centred on the body origin with axes along the
/// body-fixed axes.
///
/// This is the shape the system falls back on when no terrain model is
/// loaded. The ellipsoid is its own local terrain, so both normal modes
/// return the gradient normal.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ellipsoid {
    radii: Vector3<f64>,
}

impl Ellipsoid {
    /// Creates a new `Ellipsoid` from its three semi-axes.
    ///
    /// Fails with [`Error::OutOfRange`] unless every semi-axis is positive.
    pub fn new(a: Length, b: Length, c: Length) -> Result<Self, Error> {
        let radii = Vector3::new(a.get::<meter>(), b.get::<meter>(), c.get::<meter>());
        for radius in radii.iter() {
            if *radius <= 0.0 || radius.is_nan() {
                return Err(Error::OutOfRange {
                    quantity: "ellipsoid semi-axis",
                    requirement: "positive",
                    value: *radius,
                });
            }
        }

        Ok(Self { radii })
    }

    /// Creates a spheroid from its equatorial and polar radii.
    pub fn spheroid(equatorial: Length, polar: Length) -> Result<Self, Error> {
        Self::new(equatorial, equatorial, polar)
    }

    /// Creates a sphere.
    pub fn sphere(radius: Length) -> Result<Self, Error> {
        Self::new(radius, radius, radius)
    }

    /// Outward unit normal at a point on the surface, from the gradient of
    /// the implicit ellipsoid equation.
    fn normal_at(&self, point: &Vector3<f64>) -> Vector3<f64> {
        Vector3::new(
            point.x / (self.radii.x * self.radii.x),
            point.y / (self.radii.y * self.radii.y),
            point.z / (self.radii.z * self.radii.z),
        )
        .normalize()
    }
}

impl Shape for Ellipsoid {
    fn intersect(
        &mut self,
        observer: &Vector3<f64>,
        look: &Vector3<f64>,
        _normal_mode: NormalMode,
    ) -> Result<Intersection, Error> {
        let miss = || Error::NoIntersection {
            observer: *observer,
            look: *look,
        };

        // Scaling onto the unit sphere keeps the quadratic conditioned for
        // strongly unequal axes.
        let origin = observer.component_div(&self.radii);
        let direction = look.component_div(&self.radii);

        let a = direction.dot(&direction);
        if a == 0.0 {
            return Err(miss());
        }

        let b = 2.0 * origin.dot(&direction);
        let c = origin.dot(&origin) - 1.0;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return Err(miss());
        }

        // The smaller positive root is the first crossing; the larger one
        // covers an observer inside or on the surface.
        let sqrt_discriminant = discriminant.sqrt();
        let near = (-b - sqrt_discriminant) / (2.0 * a);
        let far = (-b + sqrt_discriminant) / (2.0 * a);
        let t = match (near > 0.0, far > 0.0) {
            (true, _) => near,
            (false, true) => far,
            (false, false) => return Err(miss()),
        };

        let ground_pt = observer + look * t;
        Ok(Intersection {
            ground_pt,
            normal: Some(self.normal_at(&ground_pt)),
        })
    }
}
