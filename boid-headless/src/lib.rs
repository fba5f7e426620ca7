//! Native runner for the flocking sketch and the frame playback loop.
//!
//! Both variants draw onto a [`RecordingCanvas`] at a fixed frame rate and
//! report a [`StatusResponse`] when done.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, ensure, Context, Result};
use boid_core::{
    Boid, Canvas, Flock, FlockConfig, RecordingCanvas, SteeringWeights, UpdateOrder,
    CANVAS_HEIGHT, CANVAS_WIDTH, FLOCK_SIZE,
};
use boid_playback::{FrameGenerator, FrameQueue, Playback, Tick};
use boid_shared::{status_line, LiveSketch, StatusResponse, WeightSettings};
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::mpsc;
use tokio::time::{interval, Interval, MissedTickBehavior};

/// Frames requested from the producer at a time.
pub const BATCH_SIZE: usize = 60;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Simulate the flock
    Live,
    /// Replay frames from the circle producer
    Playback,
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Headless boid flocking runner", long_about = None)]
pub struct Args {
    /// Which variant to run
    #[arg(short, long, value_enum, default_value_t = Mode::Live)]
    pub mode: Mode,

    /// Number of frames to run
    #[arg(short, long, default_value_t = 600)]
    pub frames: u64,

    /// Frame rate, 0 runs unpaced
    #[arg(long, default_value_t = 60)]
    pub fps: u32,

    #[arg(long, default_value_t = CANVAS_WIDTH)]
    pub width: f32,

    #[arg(long, default_value_t = CANVAS_HEIGHT)]
    pub height: f32,

    /// Number of boids in the live flock
    #[arg(short, long, default_value_t = FLOCK_SIZE)]
    pub boids: usize,

    /// Separation weight, clamped to the slider range [0, 5]
    #[arg(long, default_value_t = 0.0)]
    pub separation: f32,

    /// Cohesion weight, clamped to the slider range [0, 5]
    #[arg(long, default_value_t = 0.0)]
    pub cohesion: f32,

    /// Alignment weight, clamped to the slider range [0, 5]
    #[arg(long, default_value_t = 0.0)]
    pub alignment: f32,

    /// Seed for the initial flock
    #[arg(long)]
    pub seed: Option<u64>,

    /// Compute all steering from the previous frame's state
    #[arg(long)]
    pub snapshot_order: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.width > 0.0 && self.height > 0.0,
            "canvas must have a positive size, got {}x{}",
            self.width,
            self.height
        );
        ensure!(
            self.boids <= FLOCK_SIZE,
            "at most {} boids are supported, got {}",
            FLOCK_SIZE,
            self.boids
        );
        Ok(())
    }

    pub fn flock_config(&self) -> FlockConfig {
        FlockConfig {
            update_order: if self.snapshot_order {
                UpdateOrder::Snapshot
            } else {
                UpdateOrder::Sequential
            },
            ..FlockConfig::default()
        }
    }

    pub fn weights(&self) -> SteeringWeights {
        SteeringWeights::new(self.separation, self.cohesion, self.alignment)
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Paces the frame loop. Without a rate it only yields to other tasks.
struct FrameClock(Option<Interval>);

impl FrameClock {
    fn new(fps: u32) -> Self {
        if fps == 0 {
            return Self(None);
        }
        let mut ticks = interval(Duration::from_secs_f64(1.0 / fps as f64));
        ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self(Some(ticks))
    }

    async fn tick(&mut self) {
        match &mut self.0 {
            Some(ticks) => {
                ticks.tick().await;
            }
            None => tokio::task::yield_now().await,
        }
    }
}

pub async fn run(args: &Args) -> Result<StatusResponse> {
    args.validate()?;
    match args.mode {
        Mode::Live => run_live(args).await,
        Mode::Playback => run_playback(args).await,
    }
}

pub async fn run_live(args: &Args) -> Result<StatusResponse> {
    let mut rng = args.rng();
    let mut flock: Flock<FLOCK_SIZE> = Flock::new(args.width, args.height, args.flock_config());
    for _ in 0..args.boids {
        flock
            .add_boid(Boid::random(&mut rng, args.width, args.height))
            .map_err(|_| anyhow!("flock is full"))?;
    }

    let mut sketch = LiveSketch::new(flock);
    sketch.sliders.set_weights(args.weights());
    log::info!(
        "Running {} boids for {} frames with weights {:?}",
        sketch.flock.len(),
        args.frames,
        WeightSettings::from(sketch.sliders.weights())
    );

    let mut canvas = RecordingCanvas::new();
    let mut clock = FrameClock::new(args.fps);
    for _ in 0..args.frames {
        clock.tick().await;
        canvas.clear();
        sketch.step(&mut canvas).unwrap_or_else(|never| match never {});

        if sketch.frame() % BATCH_SIZE as u64 == 0 {
            log::debug!(
                "frame {}: {}",
                sketch.frame(),
                status_line(sketch.flock.boids.first())
            );
        }
    }

    Ok(sketch.status())
}

pub async fn run_playback(args: &Args) -> Result<StatusResponse> {
    let queue = Arc::new(FrameQueue::new());
    let (request_tx, mut request_rx) = mpsc::channel::<usize>(4);

    let producer = tokio::spawn({
        let queue = Arc::clone(&queue);
        async move {
            let mut generator = FrameGenerator::new();
            while let Some(len) = request_rx.recv().await {
                let batch = generator.batch_json(len)?;
                let pushed = queue.push_batch(&batch)?;
                log::debug!("Produced {} frames", pushed);
            }
            Ok::<u64, anyhow::Error>(generator.frame())
        }
    });

    let mut playback = Playback::new(Arc::clone(&queue));
    let mut canvas = RecordingCanvas::new();
    canvas.background(0).unwrap_or_else(|never| match never {});

    let mut requested = 0u64;
    let mut idle = 0u64;
    let mut clock = FrameClock::new(args.fps);
    for _ in 0..args.frames {
        let consumed = playback.drawn() + playback.dropped();
        if requested - consumed < BATCH_SIZE as u64 {
            request_tx
                .send(BATCH_SIZE)
                .await
                .context("frame producer stopped")?;
            requested += BATCH_SIZE as u64;
        }

        clock.tick().await;
        canvas.clear();
        match playback.tick(&mut canvas).unwrap_or_else(|never| match never {}) {
            Tick::Idle => idle += 1,
            Tick::Drawn(_) | Tick::Dropped => {}
        }
    }

    drop(request_tx);
    let produced = producer.await.context("frame producer panicked")??;
    log::info!(
        "Played {} of {} produced frames ({} idle ticks, {} dropped)",
        playback.drawn(),
        produced,
        idle,
        playback.dropped()
    );

    Ok(StatusResponse {
        frame: args.frames,
        boid_count: 0,
        weights: WeightSettings::default(),
        points_drawn: playback.drawn(),
        frames_dropped: playback.dropped(),
        lead_boid: None,
    })
}
