//! Per-frame overlay: slider captions and the lead boid's state.

use boid_core::{Boid, Canvas, SteeringWeights};

use crate::BoidSnapshot;

pub const TEXT_SIZE: f32 = 14.0;
pub const TEXT_STROKE_WEIGHT: f32 = 3.0;
pub const STATUS_Y: f32 = 50.0;

/// Where the three weight sliders sit on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderLayout {
    pub row_offset: f32,
    pub margin: f32,
    pub spacing: f32,
    pub slider_width: f32,
}

impl Default for SliderLayout {
    fn default() -> Self {
        Self {
            row_offset: 40.0,
            margin: 40.0,
            spacing: 40.0,
            slider_width: 130.0,
        }
    }
}

impl SliderLayout {
    /// Top-left corners of the separation, cohesion and alignment sliders.
    pub fn positions(&self, canvas_height: f32) -> [(f32, f32); 3] {
        let y = canvas_height - self.row_offset;
        let stride = self.slider_width + self.spacing;
        [
            (self.margin, y),
            (self.margin + stride, y),
            (self.margin + 2.0 * stride, y),
        ]
    }
}

/// Slider value as shown in a caption: one decimal, trailing `.0` dropped.
fn caption_value(value: f32) -> f32 {
    (value * 10.0).round() / 10.0
}

pub fn status_line(lead: Option<&Boid>) -> String {
    match lead.map(BoidSnapshot::from) {
        Some(snapshot) => match serde_json::to_string(&snapshot) {
            Ok(json) => format!("BOID: {json}"),
            Err(_) => String::from("BOID: ?"),
        },
        None => String::from("BOID: none"),
    }
}

/// Clears the canvas and draws the captions above each slider.
pub fn draw_hud<C: Canvas>(
    canvas: &mut C,
    layout: &SliderLayout,
    canvas_height: f32,
    weights: &SteeringWeights,
    lead: Option<&Boid>,
) -> Result<(), C::Error> {
    canvas.background(0)?;
    canvas.stroke_weight(TEXT_STROKE_WEIGHT)?;
    canvas.text_size(TEXT_SIZE)?;

    let [separation, cohesion, alignment] = layout.positions(canvas_height);
    let captions = [
        (format!("Separation: {}", caption_value(weights.separation)), separation),
        (format!("Cohesion: {}", caption_value(weights.cohesion)), cohesion),
        (format!("Align: {}", caption_value(weights.alignment)), alignment),
    ];
    for (caption, (x, y)) in captions {
        canvas.text(&caption, x + 20.0, y - 10.0)?;
    }

    canvas.text(&status_line(lead), 0.0, STATUS_Y)
}
