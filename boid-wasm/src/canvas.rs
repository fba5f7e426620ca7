use std::f64::consts::TAU;

use boid_core::Canvas;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

/// CSS color for a greyscale level.
pub fn gray_style(gray: u8) -> String {
    format!("rgb({gray}, {gray}, {gray})")
}

pub fn font(size: f32) -> String {
    format!("{size}px sans-serif")
}

/// [`Canvas`] backed by a browser 2D context.
///
/// Points are filled discs in the stroke color with the stroke weight as
/// diameter, text is filled white.
pub struct ContextCanvas {
    context: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    stroke: String,
    stroke_weight: f64,
}

impl ContextCanvas {
    pub fn new(context: CanvasRenderingContext2d, width: u32, height: u32) -> Self {
        Self {
            context,
            width: width as f64,
            height: height as f64,
            stroke: gray_style(255),
            stroke_weight: 1.0,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width as f64;
        self.height = height as f64;
    }
}

impl Canvas for ContextCanvas {
    type Error = JsValue;

    fn background(&mut self, gray: u8) -> Result<(), JsValue> {
        self.context.set_fill_style_str(&gray_style(gray));
        self.context.fill_rect(0.0, 0.0, self.width, self.height);
        Ok(())
    }

    fn stroke(&mut self, gray: u8) -> Result<(), JsValue> {
        self.stroke = gray_style(gray);
        self.context.set_stroke_style_str(&self.stroke);
        Ok(())
    }

    fn stroke_weight(&mut self, weight: f32) -> Result<(), JsValue> {
        self.stroke_weight = weight as f64;
        self.context.set_line_width(self.stroke_weight);
        Ok(())
    }

    fn point(&mut self, x: f32, y: f32) -> Result<(), JsValue> {
        self.context.begin_path();
        self.context
            .arc(x as f64, y as f64, self.stroke_weight / 2.0, 0.0, TAU)?;
        self.context.set_fill_style_str(&self.stroke);
        self.context.fill();
        Ok(())
    }

    fn text_size(&mut self, size: f32) -> Result<(), JsValue> {
        self.context.set_font(&font(size));
        Ok(())
    }

    fn text(&mut self, text: &str, x: f32, y: f32) -> Result<(), JsValue> {
        self.context.set_fill_style_str(&gray_style(255));
        self.context.fill_text(text, x as f64, y as f64)
    }
}
