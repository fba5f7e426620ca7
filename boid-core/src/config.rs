use crate::Vector2D;

/// Default canvas extent.
pub const CANVAS_WIDTH: f32 = 1200.0;
pub const CANVAS_HEIGHT: f32 = 600.0;

/// Population of the live flock.
pub const FLOCK_SIZE: usize = 30;

/// Neighbors closer than this are ignored by separation so that coincident
/// boids never divide by a zero distance.
pub const MIN_SEPARATION_DISTANCE: f32 = 1e-4;

/// Order in which boids within a single frame see each other's state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateOrder {
    /// Each boid steers, integrates and wraps before the next one steers, so
    /// later boids see already-moved neighbors.
    #[default]
    Sequential,
    /// All steering is computed from the frame-start state, then applied.
    Snapshot,
}

/// Disc around which a boid computes an axis-aligned heading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenterZone {
    pub center: Vector2D,
    pub radius: f32,
}

impl Default for CenterZone {
    fn default() -> Self {
        Self {
            center: Vector2D::new(600.0, 400.0),
            radius: 200.0,
        }
    }
}

impl CenterZone {
    pub fn contains(&self, point: &Vector2D) -> bool {
        point.distance(&self.center) < self.radius
    }
}

/// Configuration for the boid simulation
#[derive(Debug, Clone, Copy)]
pub struct FlockConfig {
    pub max_speed: f32,
    pub max_force: f32,
    pub perception_radius: f32,
    pub min_separation_distance: f32,
    pub zone: CenterZone,
    pub update_order: UpdateOrder,
}

impl Default for FlockConfig {
    fn default() -> Self {
        Self {
            max_speed: 4.0,
            max_force: 0.2,
            perception_radius: 50.0,
            min_separation_distance: MIN_SEPARATION_DISTANCE,
            zone: CenterZone::default(),
            update_order: UpdateOrder::default(),
        }
    }
}

/// Relative weights of the three steering behaviors for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SteeringWeights {
    pub separation: f32,
    pub cohesion: f32,
    pub alignment: f32,
}

impl SteeringWeights {
    pub fn new(separation: f32, cohesion: f32, alignment: f32) -> Self {
        Self {
            separation,
            cohesion,
            alignment,
        }
    }

    pub fn uniform(weight: f32) -> Self {
        Self::new(weight, weight, weight)
    }
}

/// A range input with a fixed step, as exposed by the UI toolkit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slider {
    min: f32,
    max: f32,
    step: f32,
    value: f32,
}

impl Slider {
    pub fn new(min: f32, max: f32, initial: f32, step: f32) -> Self {
        let mut slider = Self {
            min,
            max,
            step,
            value: min,
        };
        slider.set_value(initial);
        slider
    }

    /// Slider used for every steering weight: `[0, 5]` in steps of 0.1,
    /// starting at zero.
    pub fn weight() -> Self {
        Self::new(0.0, 5.0, 0.0, 0.1)
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Clamps into range and snaps to the nearest step.
    pub fn set_value(&mut self, value: f32) {
        if value.is_nan() {
            return;
        }
        let clamped = value.clamp(self.min, self.max);
        let steps = round((clamped - self.min) / self.step);
        self.value = (self.min + steps * self.step).min(self.max);
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn step(&self) -> f32 {
        self.step
    }
}

#[cfg(feature = "std")]
fn round(v: f32) -> f32 {
    v.round()
}

#[cfg(not(feature = "std"))]
fn round(v: f32) -> f32 {
    libm::roundf(v)
}

/// The three weight sliders. Values are read fresh every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightSliders {
    pub separation: Slider,
    pub cohesion: Slider,
    pub alignment: Slider,
}

impl Default for WeightSliders {
    fn default() -> Self {
        Self {
            separation: Slider::weight(),
            cohesion: Slider::weight(),
            alignment: Slider::weight(),
        }
    }
}

impl WeightSliders {
    pub fn weights(&self) -> SteeringWeights {
        SteeringWeights::new(
            self.separation.value(),
            self.cohesion.value(),
            self.alignment.value(),
        )
    }

    pub fn set_weights(&mut self, weights: SteeringWeights) {
        self.separation.set_value(weights.separation);
        self.cohesion.set_value(weights.cohesion);
        self.alignment.set_value(weights.alignment);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_canvas_demo() {
        let config = FlockConfig::default();
        assert_eq!(config.max_speed, 4.0);
        assert_eq!(config.max_force, 0.2);
        assert_eq!(config.perception_radius, 50.0);
        assert_eq!(config.update_order, UpdateOrder::Sequential);
        assert_eq!(config.zone.center, Vector2D::new(600.0, 400.0));
    }

    #[test]
    fn test_zone_contains() {
        let zone = CenterZone::default();
        assert!(zone.contains(&Vector2D::new(650.0, 420.0)));
        assert!(!zone.contains(&Vector2D::new(600.0, 600.0)));
        assert!(!zone.contains(&Vector2D::new(10.0, 10.0)));
    }

    #[test]
    fn test_slider_clamps_and_snaps() {
        let mut slider = Slider::weight();
        assert_eq!(slider.value(), 0.0);

        slider.set_value(7.0);
        assert_eq!(slider.value(), 5.0);

        slider.set_value(-1.0);
        assert_eq!(slider.value(), 0.0);

        slider.set_value(1.26);
        assert!((slider.value() - 1.3).abs() < 1e-5);

        slider.set_value(f32::NAN);
        assert!((slider.value() - 1.3).abs() < 1e-5);
    }

    #[test]
    fn test_sliders_feed_weights() {
        let mut sliders = WeightSliders::default();
        assert_eq!(sliders.weights(), SteeringWeights::default());

        sliders.set_weights(SteeringWeights::new(1.5, 2.0, 0.5));
        let weights = sliders.weights();
        assert!((weights.separation - 1.5).abs() < 1e-5);
        assert!((weights.cohesion - 2.0).abs() < 1e-5);
        assert!((weights.alignment - 0.5).abs() < 1e-5);
    }
}
