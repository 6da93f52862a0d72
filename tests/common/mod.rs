//! Recording stubs for the four scene capabilities.
//!
//! Each stub hands back fixed values and logs the arguments it received,
//! so scenarios can assert both the observable's value and the exact rays
//! and times it asked its collaborators for.

// Not every test binary exercises every stub.
#![allow(dead_code)]

use nalgebra::{Matrix3, Vector3};
use subpoint::error::Error;
use subpoint::geom::{GroundPoint3, ImagePoint};
use subpoint::scene::{Body, Illuminator, Intersection, NormalMode, ObserverState, Sensor, Shape};

pub struct StubSensor {
    pub state: ObserverState,
    pub image_requests: Vec<ImagePoint>,
    pub ground_requests: Vec<GroundPoint3>,
}

impl StubSensor {
    pub fn new(state: ObserverState) -> Self {
        Self {
            state,
            image_requests: Vec::new(),
            ground_requests: Vec::new(),
        }
    }
}

impl Sensor for StubSensor {
    fn state_from_image(&mut self, image_point: &ImagePoint) -> Result<ObserverState, Error> {
        self.image_requests.push(*image_point);
        Ok(ObserverState {
            image_point: *image_point,
            ..self.state
        })
    }

    fn state_from_ground(&mut self, ground_point: &GroundPoint3) -> Result<ObserverState, Error> {
        self.ground_requests.push(*ground_point);
        Ok(self.state)
    }
}

pub struct StubShape {
    pub intersection: Intersection,
    pub rays: Vec<(Vector3<f64>, Vector3<f64>, NormalMode)>,
}

impl StubShape {
    /// A stub whose intersections carry no normal.
    pub fn at(ground_pt: Vector3<f64>) -> Self {
        Self {
            intersection: Intersection {
                ground_pt,
                normal: None,
            },
            rays: Vec::new(),
        }
    }

    pub fn with_normal(ground_pt: Vector3<f64>, normal: Vector3<f64>) -> Self {
        Self {
            intersection: Intersection {
                ground_pt,
                normal: Some(normal),
            },
            rays: Vec::new(),
        }
    }
}

impl Shape for StubShape {
    fn intersect(
        &mut self,
        observer: &Vector3<f64>,
        look: &Vector3<f64>,
        normal_mode: NormalMode,
    ) -> Result<Intersection, Error> {
        self.rays.push((*observer, *look, normal_mode));
        Ok(self.intersection)
    }
}

pub struct StubIlluminator {
    pub position: Vector3<f64>,
    pub velocity: Vector3<f64>,
    pub queried_times: Vec<f64>,
}

impl StubIlluminator {
    pub fn at(position: Vector3<f64>) -> Self {
        Self {
            position,
            velocity: Vector3::zeros(),
            queried_times: Vec::new(),
        }
    }

    pub fn with_velocity(position: Vector3<f64>, velocity: Vector3<f64>) -> Self {
        Self {
            position,
            velocity,
            queried_times: Vec::new(),
        }
    }
}

impl Illuminator for StubIlluminator {
    fn position(&mut self, time: f64) -> Result<Vector3<f64>, Error> {
        self.queried_times.push(time);
        Ok(self.position)
    }

    fn velocity(&mut self, time: f64) -> Result<Vector3<f64>, Error> {
        self.queried_times.push(time);
        Ok(self.velocity)
    }
}

pub struct StubBody {
    pub rotation: Matrix3<f64>,
    pub fixed_requests: Vec<Vector3<f64>>,
}

impl StubBody {
    pub fn identity() -> Self {
        Self::with_rotation(Matrix3::identity())
    }

    pub fn with_rotation(rotation: Matrix3<f64>) -> Self {
        Self {
            rotation,
            fixed_requests: Vec::new(),
        }
    }
}

impl Body for StubBody {
    fn rotation(&mut self, _time: f64) -> Result<Matrix3<f64>, Error> {
        Ok(self.rotation)
    }

    fn fixed_vector(&mut self, v: &Vector3<f64>) -> Result<Vector3<f64>, Error> {
        self.fixed_requests.push(*v);
        Ok(self.rotation * v)
    }
}

/// A collaborator that always reports missing ephemeris coverage, for
/// checking that failures pass through observables untouched.
pub struct NoCoverage;

impl Illuminator for NoCoverage {
    fn position(&mut self, time: f64) -> Result<Vector3<f64>, Error> {
        Err(Error::NoEphemeris { time })
    }

    fn velocity(&mut self, time: f64) -> Result<Vector3<f64>, Error> {
        Err(Error::NoEphemeris { time })
    }
}

/// Shorthand for an observer state with matching body-fixed and inertial
/// look vectors at ephemeris time zero.
pub fn state_at(position: Vector3<f64>, look: Vector3<f64>) -> ObserverState {
    ObserverState {
        look,
        look_j2000: look,
        position,
        time: 0.0,
        image_point: ImagePoint::new(0.0, 0.0),
    }
}
