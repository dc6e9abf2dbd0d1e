//! Geometry cache invalidation.
//!
//! Changing a stroke's fill UV state invalidates derived fill geometry held
//! by the host. The kernel only signals; recomputation is the host's job.

use std::sync::Mutex;

use crate::stroke::StrokeKey;

/// Receiver of geometry invalidation signals.
///
/// Strokes may be processed on several threads at once, so implementations
/// must be `Sync` and use interior mutability for any bookkeeping.
pub trait GeometryCache: Sync {
    /// The fill UV state of the stroke at `key` changed.
    fn stroke_fill_changed(&self, key: StrokeKey);
}

/// Discards every signal.
impl GeometryCache for () {
    #[inline]
    fn stroke_fill_changed(&self, _key: StrokeKey) {}
}

/// Records every invalidated stroke.
#[derive(Debug, Default)]
pub struct InvalidationLog {
    keys: Mutex<Vec<StrokeKey>>,
}

impl InvalidationLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded signals.
    pub fn len(&self) -> usize {
        self.keys.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// Check if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drain the recorded keys in sorted order.
    pub fn take(&self) -> Vec<StrokeKey> {
        let mut keys = std::mem::take(&mut *self.keys.lock().unwrap_or_else(|e| e.into_inner()));
        keys.sort_unstable();
        keys
    }
}

impl GeometryCache for InvalidationLog {
    fn stroke_fill_changed(&self, key: StrokeKey) {
        self.keys
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(key);
    }
}
