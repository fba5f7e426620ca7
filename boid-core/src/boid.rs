#[cfg(feature = "std")]
use rand::Rng;

use crate::behavior;
use crate::canvas::Canvas;
use crate::{CenterZone, FlockConfig, SteeringWeights, Vector2D};

/// Stroke weight used to draw a boid as a point.
pub const BOID_STROKE_WEIGHT: f32 = 8.0;

/// A single boid entity
#[derive(Debug, Clone, PartialEq)]
pub struct Boid {
    pub position: Vector2D,
    pub velocity: Vector2D,
    pub acceleration: Vector2D,
}

impl Boid {
    pub fn new(position: Vector2D, velocity: Vector2D) -> Self {
        Self {
            position,
            velocity,
            acceleration: Vector2D::zero(),
        }
    }

    /// Uniform position over the canvas, uniform heading, speed in
    /// `[2.5, 7.5)`.
    #[cfg(feature = "std")]
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f32, height: f32) -> Self {
        let position = Vector2D::new(rng.gen_range(0.0..width), rng.gen_range(0.0..height));
        let heading = Vector2D::from_angle(rng.gen_range(0.0..core::f32::consts::TAU));
        let speed = (rng.gen::<f32>() + 0.5) * 5.0;
        Self::new(position, heading * speed)
    }

    /// Weighted sum of the three steering rules against `flock`.
    pub fn steering<'a, I>(
        &'a self,
        flock: I,
        config: &FlockConfig,
        weights: &SteeringWeights,
    ) -> Vector2D
    where
        I: Iterator<Item = &'a Boid> + Clone + 'a,
    {
        let alignment = behavior::alignment(self, flock.clone(), config) * weights.alignment;
        let cohesion = behavior::cohesion(self, flock.clone(), config) * weights.cohesion;
        let separation = behavior::separation(self, flock, config) * weights.separation;

        alignment + cohesion + separation
    }

    /// Axis-aligned heading while inside the centre zone.
    ///
    /// Both branches take the y component of the velocity.
    pub fn zone_heading(&self, zone: &CenterZone) -> Option<Vector2D> {
        if !zone.contains(&self.position) {
            return None;
        }
        if self.velocity.x > self.velocity.y {
            Some(Vector2D::new(0.0, self.velocity.y))
        } else {
            Some(Vector2D::new(self.velocity.y, 0.0))
        }
    }

    /// Moves by the current velocity, then applies the acceleration and caps
    /// the speed. Acceleration is left in place until the next steering pass.
    pub fn update(&mut self, config: &FlockConfig) {
        // FIXME: the zone heading is computed but never drives the motion.
        // Kept inert until it is decided whether it should replace the
        // velocity for this frame.
        let _zone_heading = self.zone_heading(&config.zone);

        self.position += self.velocity;
        self.velocity += self.acceleration;
        self.velocity = self.velocity.limit(config.max_speed);
    }

    /// Torus wrap into `[0, width) x [0, height)`.
    pub fn wrap_edges(&mut self, width: f32, height: f32) {
        self.position.x = wrap_coordinate(self.position.x, width);
        self.position.y = wrap_coordinate(self.position.y, height);
    }

    pub fn show<C: Canvas>(&self, canvas: &mut C) -> Result<(), C::Error> {
        canvas.stroke_weight(BOID_STROKE_WEIGHT)?;
        canvas.stroke(255)?;
        canvas.point(self.position.x, self.position.y)
    }
}

/// Resets a coordinate that left `[0, extent)` to the opposite edge: past
/// the far edge it becomes 0, below zero it becomes the last value before
/// `extent`.
pub fn wrap_coordinate(value: f32, extent: f32) -> f32 {
    if (0.0..extent).contains(&value) {
        value
    } else if value < 0.0 && extent > 0.0 {
        libm::nextafterf(extent, 0.0)
    } else {
        0.0
    }
}
