//! Replays buffered position frames, one per rendered frame.

pub mod generator;
pub mod player;
pub mod queue;

pub use generator::FrameGenerator;
pub use player::{Playback, Tick};
pub use queue::FrameQueue;
