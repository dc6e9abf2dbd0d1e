//! Read-only views of a stroke's surroundings.
//!
//! The kernel mutates one stroke at a time. These views carry the parts of
//! the owning object and layer it needs to read, so the stroke itself can be
//! borrowed mutably while its siblings are processed elsewhere.

use crate::stroke::{FrameId, LayerId, Material, StrokeId, StrokeKey};

/// The owning object as seen by the kernel.
#[derive(Debug, Clone, Copy)]
pub struct ObjectInfo<'a> {
    /// Object name, used for jitter seeding.
    pub name: &'a str,
    /// Material slots, used by the material and pass filters.
    pub materials: &'a [Material],
    /// Vertex group names, used to resolve the configured group.
    pub vertex_groups: &'a [String],
}

/// The owning layer as seen by the kernel.
#[derive(Debug, Clone, Copy)]
pub struct LayerInfo<'a> {
    /// Layer name.
    pub name: &'a str,
    /// Layer pass index.
    pub pass_index: u32,
}

/// Everything shared by the strokes of one frame.
#[derive(Debug, Clone, Copy)]
pub struct FrameContext<'a> {
    /// Owning object.
    pub object: ObjectInfo<'a>,
    /// Owning layer.
    pub layer: LayerInfo<'a>,
    /// Position of the layer in the object.
    pub layer_id: LayerId,
    /// Position of the frame in the layer.
    pub frame_id: FrameId,
}

impl<'a> FrameContext<'a> {
    /// Context for the stroke at `index` within this frame.
    #[inline]
    pub fn stroke(&self, index: usize) -> StrokeContext<'a> {
        StrokeContext {
            object: self.object,
            layer: self.layer,
            key: StrokeKey {
                layer: self.layer_id,
                frame: self.frame_id,
                stroke: StrokeId::new(index),
            },
        }
    }
}

/// Everything the kernel reads besides the stroke itself.
#[derive(Debug, Clone, Copy)]
pub struct StrokeContext<'a> {
    /// Owning object.
    pub object: ObjectInfo<'a>,
    /// Owning layer.
    pub layer: LayerInfo<'a>,
    /// Address of the stroke. `key.stroke` is the jitter index.
    pub key: StrokeKey,
}
