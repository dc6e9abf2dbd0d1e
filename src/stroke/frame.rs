//! Layers and their keyframes.

use serde::{Deserialize, Serialize};

use super::index::FrameId;
use super::stroke::Stroke;

/// A keyframe: the strokes drawn on a layer at one frame number.
///
/// Stroke order is significant. A stroke's position in [`Frame::strokes`] is
/// its jitter key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Scene frame number at which this keyframe starts.
    pub frame_number: i32,
    /// Strokes in drawing order.
    #[serde(default)]
    pub strokes: Vec<Stroke>,
}

impl Frame {
    /// Create a keyframe with strokes.
    pub fn new(frame_number: i32, strokes: Vec<Stroke>) -> Self {
        Self {
            frame_number,
            strokes,
        }
    }

    /// Number of strokes.
    #[inline]
    pub fn num_strokes(&self) -> usize {
        self.strokes.len()
    }
}

/// A named drawing layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    /// Layer name, matched by the layer filter.
    pub name: String,
    /// Layer pass index, matched by the layer pass filter.
    #[serde(default)]
    pub pass_index: u32,
    /// Keyframes sorted by frame number.
    #[serde(default)]
    pub frames: Vec<Frame>,
}

impl Layer {
    /// Create an empty layer.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pass_index: 0,
            frames: Vec::new(),
        }
    }

    /// Set the layer pass index.
    pub fn with_pass_index(mut self, pass_index: u32) -> Self {
        self.pass_index = pass_index;
        self
    }

    /// Append a keyframe.
    pub fn with_frame(mut self, frame: Frame) -> Self {
        self.frames.push(frame);
        self
    }

    /// The keyframe visible at `frame_number`: the last keyframe starting at
    /// or before it.
    pub fn active_frame(&self, frame_number: i32) -> Option<FrameId> {
        self.frames
            .iter()
            .rposition(|f| f.frame_number <= frame_number)
            .map(FrameId::new)
    }

    /// Check that keyframes are strictly increasing in frame number.
    pub fn frames_sorted(&self) -> bool {
        self.frames
            .windows(2)
            .all(|w| w[0].frame_number < w[1].frame_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer_with_frames(numbers: &[i32]) -> Layer {
        numbers
            .iter()
            .fold(Layer::new("Lines"), |layer, &n| layer.with_frame(Frame::new(n, Vec::new())))
    }

    #[test]
    fn test_active_frame() {
        let layer = layer_with_frames(&[1, 10, 20]);

        assert!(layer.active_frame(0).is_none());
        assert_eq!(layer.active_frame(10), Some(FrameId::new(1)));
        assert_eq!(layer.active_frame(15), Some(FrameId::new(1)));
        assert_eq!(layer.active_frame(100), Some(FrameId::new(2)));
    }

    #[test]
    fn test_frames_sorted() {
        assert!(layer_with_frames(&[1, 2, 3]).frames_sorted());
        assert!(!layer_with_frames(&[1, 3, 2]).frames_sorted());
        assert!(!layer_with_frames(&[4, 4]).frames_sorted());
    }
}
