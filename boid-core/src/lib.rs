#![cfg_attr(not(feature = "std"), no_std)]

//! Boid flocking: steering rules, per-boid integration and a fixed-size
//! flock that advances once per rendered frame.

pub mod behavior;
pub mod boid;
pub mod canvas;
pub mod config;
pub mod flock;
pub mod vector;

pub use boid::{wrap_coordinate, Boid};
pub use canvas::Canvas;
#[cfg(feature = "std")]
pub use canvas::{DrawCommand, RecordingCanvas};
pub use config::{
    CenterZone, FlockConfig, Slider, SteeringWeights, UpdateOrder, WeightSliders, CANVAS_HEIGHT,
    CANVAS_WIDTH, FLOCK_SIZE, MIN_SEPARATION_DISTANCE,
};
pub use flock::Flock;
pub use vector::Vector2D;
