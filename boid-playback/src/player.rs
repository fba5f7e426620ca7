use std::sync::Arc;

use boid_core::boid::BOID_STROKE_WEIGHT;
use boid_core::Canvas;
use boid_shared::{parse_position, Position};

use crate::FrameQueue;

/// What one playback tick did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tick {
    /// The queue was empty.
    Idle,
    /// A frame was drawn at this position.
    Drawn(Position),
    /// The oldest entry was malformed and discarded.
    Dropped,
}

/// Drains a [`FrameQueue`] at the frame clock, one entry per tick.
pub struct Playback {
    queue: Arc<FrameQueue>,
    drawn: u64,
    dropped: u64,
}

impl Playback {
    pub fn new(queue: Arc<FrameQueue>) -> Self {
        Self {
            queue,
            drawn: 0,
            dropped: 0,
        }
    }

    pub fn queue(&self) -> &Arc<FrameQueue> {
        &self.queue
    }

    pub fn drawn(&self) -> u64 {
        self.drawn
    }

    pub fn dropped(&self) -> u64 {
        self.dropped
    }

    pub fn tick<C: Canvas>(&mut self, canvas: &mut C) -> Result<Tick, C::Error> {
        let Some(entry) = self.queue.pop() else {
            return Ok(Tick::Idle);
        };

        match parse_position(&entry) {
            Ok(position) => {
                canvas.stroke_weight(BOID_STROKE_WEIGHT)?;
                canvas.stroke(255)?;
                canvas.point(position.x, position.y)?;
                self.drawn += 1;
                Ok(Tick::Drawn(position))
            }
            Err(err) => {
                log::trace!("Skipping frame {:?}: {}", entry, err);
                self.dropped += 1;
                Ok(Tick::Dropped)
            }
        }
    }
}
