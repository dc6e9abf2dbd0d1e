//! Stroke document data structures.
//!
//! A [`GreasePencil`] object owns [`Layer`]s, each layer owns keyframes
//! ([`Frame`]), and each frame owns an ordered list of [`Stroke`]s. Strokes own
//! their [`Point`]s exclusively, so a stroke can be borrowed mutably while the
//! rest of the document is processed elsewhere.
//!
//! # Construction
//!
//! ```
//! use nib::stroke::{Frame, GreasePencil, Layer, Point, Stroke};
//! use nalgebra::Point3;
//!
//! let stroke = Stroke::new(vec![
//!     Point::new(Point3::new(0.0, 0.0, 0.0)),
//!     Point::new(Point3::new(1.0, 0.0, 0.0)),
//! ]);
//! let gp = GreasePencil::new("Drawing")
//!     .with_layer(Layer::new("Lines").with_frame(Frame::new(1, vec![stroke])));
//!
//! assert_eq!(gp.num_points(), 2);
//! ```

mod frame;
mod index;
mod object;
mod point;
#[allow(clippy::module_inception)]
mod stroke;

pub use frame::{Frame, Layer};
pub use index::{FrameId, LayerId, StrokeId, StrokeKey, VertexGroupId};
pub use object::{GreasePencil, Material};
pub use point::{DeformWeight, DeformWeights, Point};
pub use stroke::{FillUv, Stroke};
