mod canvas;

pub use canvas::ContextCanvas;

use std::sync::Arc;

use boid_core::{Canvas, Flock, FlockConfig, UpdateOrder, CANVAS_HEIGHT, CANVAS_WIDTH};
use boid_playback::{FrameQueue, Playback, Tick};
use boid_shared::LiveSketch;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => (log(&format_args!($($t)*).to_string()))
}

fn open_canvas(
    canvas_id: &str,
    width: u32,
    height: u32,
) -> Result<(HtmlCanvasElement, ContextCanvas), JsValue> {
    let window = web_sys::window().ok_or("no global window")?;
    let document = window.document().ok_or("no document")?;
    let element = document
        .get_element_by_id(canvas_id)
        .ok_or("canvas not found")?
        .dyn_into::<HtmlCanvasElement>()?;

    element.set_width(width);
    element.set_height(height);

    let context = element
        .get_context("2d")?
        .ok_or("no 2d context")?
        .dyn_into::<CanvasRenderingContext2d>()?;

    Ok((element, ContextCanvas::new(context, width, height)))
}

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Live flocking sketch drawn onto a `<canvas>`. Call [`BoidSimulation::frame`]
/// from `requestAnimationFrame`.
#[wasm_bindgen]
pub struct BoidSimulation {
    sketch: LiveSketch,
    element: HtmlCanvasElement,
    canvas: ContextCanvas,
}

#[wasm_bindgen]
impl BoidSimulation {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, seed: Option<u32>) -> Result<BoidSimulation, JsValue> {
        let (element, mut canvas) =
            open_canvas(canvas_id, CANVAS_WIDTH as u32, CANVAS_HEIGHT as u32)?;
        canvas.background(0)?;

        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed as u64),
            None => StdRng::from_entropy(),
        };
        let flock = Flock::random(&mut rng, CANVAS_WIDTH, CANVAS_HEIGHT, FlockConfig::default());
        console_log!("Initializing boid simulation with {} boids", flock.len());

        Ok(BoidSimulation {
            sketch: LiveSketch::new(flock),
            element,
            canvas,
        })
    }

    pub fn frame(&mut self) -> Result<(), JsValue> {
        self.sketch.step(&mut self.canvas)
    }

    pub fn frame_count(&self) -> u64 {
        self.sketch.frame()
    }

    pub fn boid_count(&self) -> usize {
        self.sketch.flock.len()
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.element.set_width(width);
        self.element.set_height(height);
        self.canvas.resize(width, height);
        self.sketch.flock.resize(width as f32, height as f32);
        console_log!("Resized to {}x{}", width, height);
    }

    pub fn separation_weight(&self) -> f32 {
        self.sketch.sliders.separation.value()
    }

    pub fn cohesion_weight(&self) -> f32 {
        self.sketch.sliders.cohesion.value()
    }

    pub fn alignment_weight(&self) -> f32 {
        self.sketch.sliders.alignment.value()
    }

    pub fn set_separation_weight(&mut self, weight: f32) {
        self.sketch.sliders.separation.set_value(weight);
    }

    pub fn set_cohesion_weight(&mut self, weight: f32) {
        self.sketch.sliders.cohesion.set_value(weight);
    }

    pub fn set_alignment_weight(&mut self, weight: f32) {
        self.sketch.sliders.alignment.set_value(weight);
    }

    /// Switches between in-place and snapshot neighbor reads.
    pub fn set_snapshot_order(&mut self, snapshot: bool) {
        self.sketch.flock.config.update_order = if snapshot {
            UpdateOrder::Snapshot
        } else {
            UpdateOrder::Sequential
        };
    }

    pub fn status_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.sketch.status()).map_err(to_js)
    }
}

/// Replays externally produced frames, one per animation frame.
///
/// Feed it from a websocket `onmessage` handler with
/// [`PlaybackSimulation::push_batch`] or [`PlaybackSimulation::push_frame`].
#[wasm_bindgen]
pub struct PlaybackSimulation {
    playback: Playback,
    canvas: ContextCanvas,
}

#[wasm_bindgen]
impl PlaybackSimulation {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<PlaybackSimulation, JsValue> {
        let (_, mut canvas) =
            open_canvas(canvas_id, CANVAS_WIDTH as u32, CANVAS_HEIGHT as u32)?;
        canvas.background(0)?;
        console_log!("Initializing frame playback");

        Ok(PlaybackSimulation {
            playback: Playback::new(Arc::new(FrameQueue::new())),
            canvas,
        })
    }

    pub fn push_frame(&self, text: &str) {
        self.playback.queue().push(text);
    }

    /// Queues every frame of a batch message and returns how many were added.
    pub fn push_batch(&self, text: &str) -> Result<usize, JsValue> {
        self.playback.queue().push_batch(text).map_err(to_js)
    }

    /// Draws the oldest queued frame. Returns false when nothing was drawn.
    pub fn tick(&mut self) -> Result<bool, JsValue> {
        Ok(matches!(self.playback.tick(&mut self.canvas)?, Tick::Drawn(_)))
    }

    pub fn pending(&self) -> usize {
        self.playback.queue().len()
    }

    pub fn drawn(&self) -> u64 {
        self.playback.drawn()
    }

    pub fn dropped(&self) -> u64 {
        self.playback.dropped()
    }
}

