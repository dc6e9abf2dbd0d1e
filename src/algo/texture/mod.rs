//! Procedural texture mapping for ink strokes.
//!
//! The texture modifier rewrites two kinds of texture state:
//!
//! - **Stroke space**: each point's UV factor and UV rotation. Factors are
//!   optionally jittered per stroke, normalized by the stroke's length, then
//!   scaled and offset.
//! - **Fill space**: the stroke's single fill rotation, translation, and
//!   scale.
//!
//! # Pipeline
//!
//! For each stroke:
//!
//! 1. [`is_stroke_affected`] rejects strokes outside the layer, material, and
//!    pass filters. Rejected strokes are left untouched.
//! 2. [`apply_fill`] runs once if the mode includes fill.
//! 3. If the mode includes stroke, [`normalization_length`] and the stroke's
//!    [`StrokeJitter`] are computed once, then every point with a
//!    non-negative [`point_weight`] goes through [`composite_point`].
//!
//! Strokes are independent of each other, so frames and strokes can be
//! processed in parallel. Within a stroke the two per-stroke scalars are
//! computed before any point is touched.
//!
//! # Example
//!
//! ```
//! use nib::prelude::*;
//! use nib::algo::texture::{evaluate, EvaluateOptions, TextureModifier, TextureOptions};
//! use nalgebra::{Point3, Vector2};
//!
//! let stroke = Stroke::new(vec![
//!     Point::new(Point3::new(0.0, 0.0, 0.0)).with_uv_factor(Vector2::new(0.1, 0.2)),
//! ]);
//! let mut gp = GreasePencil::new("Drawing")
//!     .with_layer(Layer::new("Lines").with_frame(Frame::new(1, vec![stroke])));
//!
//! let modifier = TextureModifier::new(
//!     "Texture",
//!     TextureOptions::default()
//!         .with_uv_scale(2.0)
//!         .with_uv_offset(Vector2::new(0.5, 0.5)),
//! );
//! let report = evaluate(&mut gp, &modifier, &EvaluateOptions::at_frame(1), &());
//!
//! let uv = gp.layers[0].frames[0].strokes[0].points[0].uv_factor;
//! assert!((uv.x - 0.7).abs() < 1e-12);
//! assert!((uv.y - 0.9).abs() < 1e-12);
//! assert_eq!(report.points_changed, 1);
//! ```

mod bake;
mod cache;
mod context;
mod evaluate;
mod fill;
mod filter;
mod jitter;
mod normalize;
mod options;
mod report;

use log::trace;
use nalgebra::Vector2;
use rayon::prelude::*;

use crate::stroke::{Frame, Point, Stroke};

pub use bake::{bake, bake_with_progress, BakeOptions};
pub use cache::{GeometryCache, InvalidationLog};
pub use context::{FrameContext, LayerInfo, ObjectInfo, StrokeContext};
pub use evaluate::{evaluate, EvaluateOptions};
pub use fill::apply_fill;
pub use filter::{is_stroke_affected, point_weight, resolve_vertex_group};
pub use jitter::{combined_seed, JitterSource, StrokeJitter};
pub use normalize::{normalization_length, stroke_length};
pub use options::{FitMethod, InfluenceFilter, TextureMode, TextureModifier, TextureOptions};
pub use report::{ModifierReport, StrokeReport};

/// Rewrite the UV factor and rotation of one point.
///
/// `weight` must be non-negative. `jitter` is `None` when the modifier has
/// no randomness, which leaves the factor unjittered.
///
/// The random offset grows with the square of the weighted jitter value:
/// `loc = (offset * weight)^2 * random_offset`.
pub fn composite_point(
    point: &mut Point,
    weight: f64,
    jitter: Option<StrokeJitter>,
    totlen: f64,
    options: &TextureOptions,
) {
    if let Some(jitter) = jitter {
        let mut loc = jitter.offset * weight;
        loc *= options.random_offset * loc;
        let scale = 1.0 + options.random_scale * (jitter.scale * weight);

        point.uv_factor = point.uv_factor * scale + Vector2::repeat(loc);
    }

    point.uv_factor /= totlen;
    point.uv_factor = point.uv_factor * options.uv_scale + options.uv_offset;
    point.uv_rotation += options.alignment_rotation;
}

/// Apply a texture modifier to one stroke in place.
///
/// This is the single-stroke entry point. `ctx.key.stroke` must be the
/// stroke's position within its frame, since it selects the jitter.
pub fn deform_stroke(
    stroke: &mut Stroke,
    ctx: &StrokeContext<'_>,
    modifier: &TextureModifier,
    cache: &dyn GeometryCache,
) -> StrokeReport {
    let options = &modifier.options;

    if !is_stroke_affected(ctx, stroke, &options.filter) {
        trace!("{:?}: filtered out by '{}'", ctx.key, modifier.name);
        return StrokeReport::unaffected();
    }

    let mut report = StrokeReport {
        affected: true,
        ..StrokeReport::default()
    };

    if options.mode.affects_fill() {
        apply_fill(&mut stroke.fill, options);
        cache.stroke_fill_changed(ctx.key);
        report.fill_changed = true;
    }

    if options.mode.affects_stroke() {
        let totlen = normalization_length(&stroke.points, options.fit_method);
        let jitter = JitterSource::for_options(options, ctx.object.name, &modifier.name)
            .map(|source| source.sample(ctx.key.stroke));
        let group = resolve_vertex_group(&options.filter, ctx.object.vertex_groups);
        let invert = options.filter.invert_vertex_group;

        trace!("{:?}: totlen={} jitter={:?}", ctx.key, totlen, jitter);

        for point in &mut stroke.points {
            let weight = point_weight(point, group, invert);
            if weight < 0.0 {
                report.points_skipped += 1;
                continue;
            }
            composite_point(point, weight, jitter, totlen, options);
            report.points_changed += 1;
        }
    }

    report
}

/// Apply a texture modifier to every stroke of a frame.
///
/// Stroke indices are taken from the frame order. With `parallel`, strokes
/// are processed on the rayon thread pool.
pub fn deform_frame(
    frame: &mut Frame,
    ctx: &FrameContext<'_>,
    modifier: &TextureModifier,
    parallel: bool,
    cache: &dyn GeometryCache,
) -> ModifierReport {
    let reports: Vec<StrokeReport> = if parallel {
        frame
            .strokes
            .par_iter_mut()
            .enumerate()
            .map(|(i, stroke)| deform_stroke(stroke, &ctx.stroke(i), modifier, cache))
            .collect()
    } else {
        frame
            .strokes
            .iter_mut()
            .enumerate()
            .map(|(i, stroke)| deform_stroke(stroke, &ctx.stroke(i), modifier, cache))
            .collect()
    };

    let mut report: ModifierReport = reports.into_iter().collect();
    report.frames = 1;
    report
}
