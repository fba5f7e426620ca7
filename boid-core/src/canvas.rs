//! Drawing surface the simulation renders onto.
//!
//! Front-ends implement [`Canvas`] for whatever they draw with: a browser
//! 2D context, or [`RecordingCanvas`] for headless runs and tests.

/// Immediate-mode drawing primitives.
///
/// Colors are greyscale (0 = black, 255 = white); stroke state set by
/// [`Canvas::stroke`] and [`Canvas::stroke_weight`] applies to following
/// points.
pub trait Canvas {
    type Error;

    fn background(&mut self, gray: u8) -> Result<(), Self::Error>;
    fn stroke(&mut self, gray: u8) -> Result<(), Self::Error>;
    fn stroke_weight(&mut self, weight: f32) -> Result<(), Self::Error>;
    fn point(&mut self, x: f32, y: f32) -> Result<(), Self::Error>;
    fn text_size(&mut self, size: f32) -> Result<(), Self::Error>;
    fn text(&mut self, text: &str, x: f32, y: f32) -> Result<(), Self::Error>;
}

#[cfg(feature = "std")]
pub use recording::{DrawCommand, RecordingCanvas};

#[cfg(feature = "std")]
mod recording {
    use super::Canvas;
    use core::convert::Infallible;

    #[derive(Debug, Clone, PartialEq)]
    pub enum DrawCommand {
        Background(u8),
        Stroke(u8),
        StrokeWeight(f32),
        Point { x: f32, y: f32 },
        TextSize(f32),
        Text { text: String, x: f32, y: f32 },
    }

    /// Canvas that keeps every command issued since the last `clear`.
    #[derive(Debug, Default, Clone)]
    pub struct RecordingCanvas {
        pub commands: Vec<DrawCommand>,
    }

    impl RecordingCanvas {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn clear(&mut self) {
            self.commands.clear();
        }

        pub fn points(&self) -> Vec<(f32, f32)> {
            self.commands
                .iter()
                .filter_map(|command| match command {
                    DrawCommand::Point { x, y } => Some((*x, *y)),
                    _ => None,
                })
                .collect()
        }

        pub fn texts(&self) -> Vec<&str> {
            self.commands
                .iter()
                .filter_map(|command| match command {
                    DrawCommand::Text { text, .. } => Some(text.as_str()),
                    _ => None,
                })
                .collect()
        }
    }

    impl Canvas for RecordingCanvas {
        type Error = Infallible;

        fn background(&mut self, gray: u8) -> Result<(), Infallible> {
            self.commands.push(DrawCommand::Background(gray));
            Ok(())
        }

        fn stroke(&mut self, gray: u8) -> Result<(), Infallible> {
            self.commands.push(DrawCommand::Stroke(gray));
            Ok(())
        }

        fn stroke_weight(&mut self, weight: f32) -> Result<(), Infallible> {
            self.commands.push(DrawCommand::StrokeWeight(weight));
            Ok(())
        }

        fn point(&mut self, x: f32, y: f32) -> Result<(), Infallible> {
            self.commands.push(DrawCommand::Point { x, y });
            Ok(())
        }

        fn text_size(&mut self, size: f32) -> Result<(), Infallible> {
            self.commands.push(DrawCommand::TextSize(size));
            Ok(())
        }

        fn text(&mut self, text: &str, x: f32, y: f32) -> Result<(), Infallible> {
            self.commands.push(DrawCommand::Text {
                text: text.to_string(),
                x,
                y,
            });
            Ok(())
        }
    }

}
