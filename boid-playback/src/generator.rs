use std::f64::consts::TAU;

use boid_shared::Position;

/// Produces frames tracing a circle, one lap every `frames_per_lap` frames.
///
/// Coordinates are rounded to `digits` decimal places before they are
/// serialized.
#[derive(Debug, Clone)]
pub struct FrameGenerator {
    pub center: Position,
    pub radius: f64,
    pub frames_per_lap: u32,
    pub digits: i32,
    frame: u64,
}

impl Default for FrameGenerator {
    fn default() -> Self {
        Self {
            center: Position::new(200.0, 200.0),
            radius: 100.0,
            frames_per_lap: 60,
            digits: 2,
            frame: 0,
        }
    }
}

impl FrameGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the next frame to be produced.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn next_frame(&mut self) -> Position {
        let t = self.frame as f64 / self.frames_per_lap as f64;
        self.frame += 1;

        let angle = TAU * t;
        Position::new(
            self.round(self.radius * angle.cos() + self.center.x as f64),
            self.round(self.radius * angle.sin() + self.center.y as f64),
        )
    }

    pub fn batch(&mut self, len: usize) -> Vec<Position> {
        (0..len).map(|_| self.next_frame()).collect()
    }

    /// Serializes the next `len` frames as a batch of single-point frames.
    pub fn batch_json(&mut self, len: usize) -> Result<String, serde_json::Error> {
        let frames: Vec<[Position; 1]> = self.batch(len).into_iter().map(|p| [p]).collect();
        serde_json::to_string(&frames)
    }

    fn round(&self, value: f64) -> f32 {
        let scale = 10f64.powi(self.digits);
        ((value * scale).round() / scale) as f32
    }
}
