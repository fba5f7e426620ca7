use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use boid_shared::{split_batch, FrameError};

/// FIFO of serialized frames.
///
/// Producers may push from any thread; the render loop pops one entry per
/// frame.
#[derive(Debug, Default)]
pub struct FrameQueue {
    entries: Mutex<VecDeque<String>>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn push(&self, entry: impl Into<String>) {
        self.lock().push_back(entry.into());
    }

    /// Appends every frame of a batch. Nothing is queued if the batch itself
    /// is unreadable.
    pub fn push_batch(&self, batch: &str) -> Result<usize, FrameError> {
        let entries = split_batch(batch)?;
        let count = entries.len();
        self.lock().extend(entries);
        Ok(count)
    }

    pub fn pop(&self) -> Option<String> {
        self.lock().pop_front()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl<S: Into<String>> FromIterator<S> for FrameQueue {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            entries: Mutex::new(iter.into_iter().map(Into::into).collect()),
        }
    }
}
