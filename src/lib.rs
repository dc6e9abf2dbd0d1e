//! # Nib
//!
//! Procedural texture mapping for freehand ink strokes.
//!
//! Nib rewrites the texture coordinates of strokes: each point's UV factor
//! and UV rotation, and each stroke's fill UV rotation, translation, and
//! scale. Results are deterministic. Per-stroke random variation is derived
//! from a Halton sequence indexed by the stroke's position in its frame and
//! seeded from the object name, the modifier name, and a user seed, so an
//! interactive evaluation and a bake of the same document always agree.
//!
//! ## Features
//!
//! - **Layer, material, and pass filters** with per-filter inversion
//! - **Vertex-group weighting** of per-point jitter
//! - **Stroke-length fitting** of UV factors
//! - **Parallel evaluation and baking** with rayon
//! - **JSON documents** for the `nib` command-line tool
//!
//! ## Quick Start
//!
//! ```
//! use nib::prelude::*;
//! use nib::algo::texture::{deform_stroke, FitMethod, FrameContext, LayerInfo, ObjectInfo,
//!     TextureModifier, TextureOptions};
//! use nalgebra::{Point3, Vector2};
//!
//! let mut stroke = Stroke::new(vec![
//!     Point::new(Point3::new(0.0, 0.0, 0.0)).with_uv_factor(Vector2::new(0.0, 0.0)),
//!     Point::new(Point3::new(1.0, 0.0, 0.0)).with_uv_factor(Vector2::new(1.0, 0.0)),
//!     Point::new(Point3::new(1.0, 1.0, 0.0)).with_uv_factor(Vector2::new(2.0, 0.0)),
//! ]);
//!
//! let materials = [Material::new("Ink")];
//! let ctx = FrameContext {
//!     object: ObjectInfo { name: "Drawing", materials: &materials, vertex_groups: &[] },
//!     layer: LayerInfo { name: "Lines", pass_index: 0 },
//!     layer_id: LayerId::new(0),
//!     frame_id: FrameId::new(0),
//! };
//!
//! let modifier = TextureModifier::new(
//!     "Texture",
//!     TextureOptions::default().with_fit_method(FitMethod::FitStroke),
//! );
//! deform_stroke(&mut stroke, &ctx.stroke(0), &modifier, &());
//!
//! // Arc length is 2, so the last factor is halved.
//! assert!((stroke.points[2].uv_factor.x - 1.0).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod error;
pub mod io;
pub mod stroke;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types:
///
/// ```
/// use nib::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{NibError, Result};
    pub use crate::stroke::{
        DeformWeights, FillUv, Frame, FrameId, GreasePencil, Layer, LayerId, Material, Point,
        Stroke, StrokeId, StrokeKey, VertexGroupId,
    };
}

// Re-export nalgebra types for convenience
pub use nalgebra;
