#![cfg_attr(not(feature = "std"), no_std)]

use boid_core::{Boid, SteeringWeights, Vector2D};
use serde::{Deserialize, Serialize};

#[cfg(feature = "std")]
pub mod frame;
#[cfg(feature = "std")]
pub mod hud;
#[cfg(feature = "std")]
pub mod sketch;

#[cfg(feature = "std")]
pub use frame::{parse_position, split_batch, FrameError};
#[cfg(feature = "std")]
pub use hud::{draw_hud, status_line, SliderLayout};
#[cfg(feature = "std")]
pub use sketch::LiveSketch;

/// Represents a 2D position in canvas coordinates
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Calculate distance to another position
    pub fn distance_to(&self, other: &Position) -> f32 {
        Vector2D::from(*self).distance(&Vector2D::from(*other))
    }
}

impl From<Vector2D> for Position {
    fn from(v: Vector2D) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Position> for Vector2D {
    fn from(p: Position) -> Self {
        Vector2D::new(p.x, p.y)
    }
}

/// Position and velocity of one boid, as shown in the status line
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BoidSnapshot {
    pub position: Position,
    pub velocity: Position,
}

impl From<&Boid> for BoidSnapshot {
    fn from(boid: &Boid) -> Self {
        Self {
            position: boid.position.into(),
            velocity: boid.velocity.into(),
        }
    }
}

/// Steering weights as exchanged with a UI
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct WeightSettings {
    pub separation: f32,
    pub cohesion: f32,
    pub alignment: f32,
}

impl From<SteeringWeights> for WeightSettings {
    fn from(weights: SteeringWeights) -> Self {
        Self {
            separation: weights.separation,
            cohesion: weights.cohesion,
            alignment: weights.alignment,
        }
    }
}

impl From<WeightSettings> for SteeringWeights {
    fn from(settings: WeightSettings) -> Self {
        SteeringWeights::new(settings.separation, settings.cohesion, settings.alignment)
    }
}

/// Summary of a running simulation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatusResponse {
    pub frame: u64,
    pub boid_count: usize,
    pub weights: WeightSettings,
    pub points_drawn: u64,
    pub frames_dropped: u64,
    pub lead_boid: Option<BoidSnapshot>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_distance() {
        let p1 = Position::new(0.0, 0.0);
        let p2 = Position::new(3.0, 4.0);
        assert_eq!(p1.distance_to(&p2), 5.0);
    }

    #[test]
    fn test_snapshot_from_boid() {
        let boid = Boid::new(Vector2D::new(1.5, 2.0), Vector2D::new(-3.0, 0.25));
        let snapshot = BoidSnapshot::from(&boid);
        assert_eq!(snapshot.position, Position::new(1.5, 2.0));
        assert_eq!(snapshot.velocity, Position::new(-3.0, 0.25));

        let json = serde_json::to_string(&snapshot).unwrap();
        assert_eq!(
            json,
            r#"{"position":{"x":1.5,"y":2.0},"velocity":{"x":-3.0,"y":0.25}}"#
        );
    }

    #[test]
    fn test_weight_settings_round_trip_through_core() {
        let weights = SteeringWeights::new(1.0, 2.5, 0.5);
        let settings = WeightSettings::from(weights);
        assert_eq!(SteeringWeights::from(settings), weights);

        let parsed: WeightSettings =
            serde_json::from_str(r#"{"separation":1.0,"cohesion":2.5,"alignment":0.5}"#).unwrap();
        assert_eq!(parsed, settings);
    }
}
