//! Bounded tail reads of session logs.
//!
//! Session logs grow without limit, so only the last `retain` lines are
//! kept while streaming through the file.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::trace;

use crate::models::SessionMessage;

/// Fixed-capacity ring that keeps the most recently pushed items.
#[derive(Debug)]
pub struct TailBuffer<T> {
    slots: Vec<Option<T>>,
    seen: usize,
}

impl<T> TailBuffer<T> {
    /// Create a ring holding at most `capacity` items.
    pub fn new(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self { slots, seen: 0 }
    }

    /// Maximum number of retained items.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Total number of items pushed so far.
    pub const fn seen(&self) -> usize {
        self.seen
    }

    /// Push an item, overwriting the oldest once full.
    pub fn push(&mut self, item: T) {
        let capacity = self.capacity();
        if capacity == 0 {
            self.seen += 1;
            return;
        }
        self.slots[self.seen % capacity] = Some(item);
        self.seen += 1;
    }

    /// Retained items, oldest first.
    pub fn into_vec(mut self) -> Vec<T> {
        let capacity = self.capacity();
        if capacity == 0 {
            return Vec::new();
        }
        let count = self.seen.min(capacity);
        let start = if self.seen > capacity {
            self.seen % capacity
        } else {
            0
        };

        (0..count)
            .filter_map(|i| self.slots[(start + i) % capacity].take())
            .collect()
    }
}

/// Read the last `retain` raw lines of a file in a single pass.
pub fn tail_lines(path: &Path, retain: usize) -> std::io::Result<Vec<Vec<u8>>> {
    if retain == 0 {
        return Ok(Vec::new());
    }

    let file = File::open(path)?;
    let mut ring = TailBuffer::new(retain);
    for line in BufReader::new(file).split(b'\n') {
        ring.push(line?);
    }
    trace!(path = %path.display(), seen = ring.seen(), retained = retain.min(ring.seen()), "tail read");
    Ok(ring.into_vec())
}

/// Read the last `retain` messages of a session log, oldest first.
///
/// Malformed lines inside the retained window are dropped, so fewer than
/// `retain` messages may come back.
pub fn read_session_messages(path: &Path, retain: usize) -> std::io::Result<Vec<SessionMessage>> {
    let messages = tail_lines(path, retain)?
        .iter()
        .filter_map(|line| serde_json::from_slice::<SessionMessage>(line).ok())
        .collect();
    Ok(messages)
}
