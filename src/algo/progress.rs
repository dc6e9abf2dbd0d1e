//! Progress reporting for bakes.
//!
//! Baking a long animation touches every keyframe of every layer. Callers can
//! pass a [`Progress`] to observe it frame by frame.
//!
//! # Example
//!
//! ```
//! use nib::algo::Progress;
//!
//! let progress = Progress::new(|current, total, message| {
//!     println!("[{}/{}] {}", current, total, message);
//! });
//! progress.report(1, 10, "Baking frame 1");
//! ```

/// A progress callback that receives updates during long-running operations.
///
/// The callback receives:
/// - `current`: Number of completed steps
/// - `total`: Total number of steps
/// - `message`: Description of the current step
///
/// Callbacks may be invoked from worker threads when a bake runs in parallel.
pub struct Progress {
    callback: Box<dyn Fn(usize, usize, &str) + Send + Sync>,
}

impl Progress {
    /// Create a new progress reporter with the given callback.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(usize, usize, &str) + Send + Sync + 'static,
    {
        Self {
            callback: Box::new(callback),
        }
    }

    /// Report progress.
    #[inline]
    pub fn report(&self, current: usize, total: usize, message: &str) {
        (self.callback)(current, total, message);
    }

    /// Create a reporter that discards all updates.
    pub fn none() -> Self {
        Self::new(|_, _, _| {})
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::none()
    }
}

impl std::fmt::Debug for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Progress").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_report_invokes_callback() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let progress = Progress::new(move |current, total, _| {
            assert!(current <= total);
            seen.fetch_add(1, Ordering::Relaxed);
        });

        progress.report(0, 2, "start");
        progress.report(2, 2, "done");
        assert_eq!(calls.load(Ordering::Relaxed), 2);
    }

    #[test]
    fn test_none_is_silent() {
        Progress::default().report(1, 1, "ignored");
    }
}
