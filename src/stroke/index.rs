//! Positional ids for stroke document elements.
//!
//! Every id is the position of an element inside its owner (a layer inside
//! the object, a frame inside its layer, and so on), stored as `u32`.

use std::fmt;

macro_rules! position_id {
    ($(#[$meta:meta])* $name:ident, $tag:literal) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Id of the element at `position`.
            #[inline]
            pub fn new(position: usize) -> Self {
                debug_assert!(position <= u32::MAX as usize, "position {position} overflows u32");
                Self(position as u32)
            }

            /// Position of the element inside its owner.
            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", $tag, self.0)
            }
        }
    };
}

position_id!(
    /// Layer position within the object.
    LayerId,
    "L"
);
position_id!(
    /// Frame position within a layer. This is not the frame number.
    FrameId,
    "FR"
);
position_id!(
    /// Stroke position within a frame.
    ///
    /// Doubles as the jitter key, so reordering strokes changes their jitter.
    StrokeId,
    "S"
);
position_id!(
    /// Vertex group position within the object's group names.
    VertexGroupId,
    "VG"
);

/// Address of a stroke inside a document, used to key geometry caches.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct StrokeKey {
    /// Layer holding the stroke.
    pub layer: LayerId,
    /// Frame (position within the layer) holding the stroke.
    pub frame: FrameId,
    /// Stroke position within the frame.
    pub stroke: StrokeId,
}

impl StrokeKey {
    /// Key for the stroke at the given positions.
    pub fn new(layer: usize, frame: usize, stroke: usize) -> Self {
        Self {
            layer: LayerId::new(layer),
            frame: FrameId::new(frame),
            stroke: StrokeId::new(stroke),
        }
    }
}
