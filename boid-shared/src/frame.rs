//! Text format of buffered playback frames.
//!
//! A frame is a JSON object with numeric `x` and `y`; extra fields are
//! ignored. Producers send frames in batches: a JSON array whose items are
//! either frame objects or arrays of frame objects.

use serde_json::Value;
use thiserror::Error;

use crate::Position;

#[derive(Debug, Error)]
pub enum FrameError {
    #[error("no JSON object in frame text")]
    MissingObject,

    #[error("malformed frame: {0}")]
    Json(#[from] serde_json::Error),

    #[error("frame batch is not a JSON array")]
    NotABatch,
}

/// Parses the object embedded in `text` into a position.
pub fn parse_position(text: &str) -> Result<Position, FrameError> {
    let start = text.find('{').ok_or(FrameError::MissingObject)?;
    let end = text.rfind('}').ok_or(FrameError::MissingObject)?;
    if end < start {
        return Err(FrameError::MissingObject);
    }
    Ok(serde_json::from_str(&text[start..=end])?)
}

/// Splits a batch into one text entry per frame, in order.
pub fn split_batch(text: &str) -> Result<Vec<String>, FrameError> {
    let Value::Array(items) = serde_json::from_str::<Value>(text)? else {
        return Err(FrameError::NotABatch);
    };

    let mut entries = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Value::Array(coords) => entries.extend(coords.iter().map(Value::to_string)),
            other => entries.push(other.to_string()),
        }
    }
    Ok(entries)
}
