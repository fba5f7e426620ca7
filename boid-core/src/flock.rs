#[cfg(feature = "std")]
use rand::Rng;

use crate::canvas::Canvas;
use crate::{Boid, FlockConfig, SteeringWeights, UpdateOrder, Vector2D, FLOCK_SIZE};

/// A fixed-capacity collection of boids on a torus-shaped canvas.
pub struct Flock<const N: usize = FLOCK_SIZE> {
    pub boids: heapless::Vec<Boid, N>,
    pub config: FlockConfig,
    pub width: f32,
    pub height: f32,
}

impl<const N: usize> Flock<N> {
    pub fn new(width: f32, height: f32, config: FlockConfig) -> Self {
        Self {
            boids: heapless::Vec::new(),
            config,
            width,
            height,
        }
    }

    /// Fills the flock to capacity with randomly placed boids.
    #[cfg(feature = "std")]
    pub fn random<R: Rng + ?Sized>(
        rng: &mut R,
        width: f32,
        height: f32,
        config: FlockConfig,
    ) -> Self {
        let mut flock = Self::new(width, height, config);
        while !flock.boids.is_full() {
            let _ = flock.boids.push(Boid::random(rng, width, height));
        }
        log::debug!("Spawned {} boids on a {}x{} canvas", N, width, height);
        flock
    }

    pub fn add_boid(&mut self, boid: Boid) -> Result<(), Boid> {
        self.boids.push(boid)
    }

    pub fn len(&self) -> usize {
        self.boids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boids.is_empty()
    }

    /// Advances every boid by one frame.
    pub fn update(&mut self, weights: &SteeringWeights) {
        match self.config.update_order {
            UpdateOrder::Sequential => self.update_sequential(weights),
            UpdateOrder::Snapshot => self.update_snapshot(weights),
        }
    }

    fn update_sequential(&mut self, weights: &SteeringWeights) {
        for i in 0..self.boids.len() {
            let steering = self.boids[i].steering(self.boids.iter(), &self.config, weights);

            let boid = &mut self.boids[i];
            boid.acceleration = steering;
            boid.update(&self.config);
            boid.wrap_edges(self.width, self.height);
        }
    }

    fn update_snapshot(&mut self, weights: &SteeringWeights) {
        // Calculate forces for all boids
        let mut forces = heapless::Vec::<Vector2D, N>::new();

        for boid in self.boids.iter() {
            let _ = forces.push(boid.steering(self.boids.iter(), &self.config, weights));
        }

        // Apply forces and update boids
        for (boid, force) in self.boids.iter_mut().zip(forces.iter()) {
            boid.acceleration = *force;
            boid.update(&self.config);
            boid.wrap_edges(self.width, self.height);
        }
    }

    pub fn draw<C: Canvas>(&self, canvas: &mut C) -> Result<(), C::Error> {
        for boid in self.boids.iter() {
            boid.show(canvas)?;
        }
        Ok(())
    }

    /// Changes the canvas extent and pulls every boid back inside it.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        for boid in self.boids.iter_mut() {
            boid.wrap_edges(width, height);
        }
    }
}
