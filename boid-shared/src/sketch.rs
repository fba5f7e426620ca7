use boid_core::{Canvas, Flock, WeightSliders, FLOCK_SIZE};

use crate::{hud, BoidSnapshot, SliderLayout, StatusResponse, WeightSettings};

/// The live flocking sketch: one call to [`LiveSketch::step`] per frame.
pub struct LiveSketch<const N: usize = FLOCK_SIZE> {
    pub flock: Flock<N>,
    pub sliders: WeightSliders,
    pub layout: SliderLayout,
    frame: u64,
    points_drawn: u64,
}

impl<const N: usize> LiveSketch<N> {
    pub fn new(flock: Flock<N>) -> Self {
        Self {
            flock,
            sliders: WeightSliders::default(),
            layout: SliderLayout::default(),
            frame: 0,
            points_drawn: 0,
        }
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Clears the canvas, draws the overlay, advances every boid once
    /// and draws it at its new position.
    pub fn step<C: Canvas>(&mut self, canvas: &mut C) -> Result<(), C::Error> {
        let weights = self.sliders.weights();
        hud::draw_hud(
            canvas,
            &self.layout,
            self.flock.height,
            &weights,
            self.flock.boids.first(),
        )?;

        self.flock.update(&weights);
        self.flock.draw(canvas)?;

        self.frame += 1;
        self.points_drawn += self.flock.len() as u64;
        Ok(())
    }

    pub fn status(&self) -> StatusResponse {
        StatusResponse {
            frame: self.frame,
            boid_count: self.flock.len(),
            weights: WeightSettings::from(self.sliders.weights()),
            points_drawn: self.points_drawn,
            frames_dropped: 0,
            lead_boid: self.flock.boids.first().map(BoidSnapshot::from),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boid_core::{Boid, FlockConfig, RecordingCanvas, Vector2D};

    #[test]
    fn test_step_draws_overlay_then_flock() {
        let mut flock: Flock<2> = Flock::new(1200.0, 600.0, FlockConfig::default());
        flock
            .add_boid(Boid::new(Vector2D::new(10.0, 10.0), Vector2D::new(3.0, 0.0)))
            .unwrap();
        flock
            .add_boid(Boid::new(Vector2D::new(500.0, 300.0), Vector2D::new(0.0, 2.0)))
            .unwrap();
        let mut sketch = LiveSketch::new(flock);
        let mut canvas = RecordingCanvas::new();

        sketch.step(&mut canvas).unwrap();

        assert_eq!(canvas.texts().len(), 4);
        assert_eq!(canvas.points(), vec![(13.0, 10.0), (500.0, 302.0)]);
        assert_eq!(sketch.frame(), 1);

        let status = sketch.status();
        assert_eq!(status.points_drawn, 2);
        assert_eq!(status.boid_count, 2);
        assert_eq!(status.frames_dropped, 0);
        assert_eq!(
            status.lead_boid.map(|b| b.position),
            Some(crate::Position::new(13.0, 10.0))
        );
    }

    #[test]
    fn test_slider_changes_apply_next_frame() {
        let flock: Flock<0> = Flock::new(1200.0, 600.0, FlockConfig::default());
        let mut sketch = LiveSketch::new(flock);
        sketch.sliders.cohesion.set_value(2.34);

        let mut canvas = RecordingCanvas::new();
        sketch.step(&mut canvas).unwrap();

        assert!(canvas.texts().contains(&"Cohesion: 2.3"));
        assert_eq!(sketch.status().weights.cohesion, sketch.sliders.cohesion.value());
        assert!(canvas.texts().contains(&"BOID: none"));
    }
}
