//! Baking a modifier into every keyframe.

use std::sync::atomic::{AtomicUsize, Ordering};

use log::info;
use rayon::prelude::*;

use crate::algo::Progress;
use crate::stroke::{Frame, FrameId, GreasePencil, LayerId};

use super::cache::GeometryCache;
use super::context::{FrameContext, LayerInfo, ObjectInfo};
use super::options::TextureModifier;
use super::report::ModifierReport;
use super::deform_frame;

/// Options for baking.
#[derive(Debug, Clone)]
pub struct BakeOptions {
    /// Whether to process keyframes in parallel (default: true).
    pub parallel: bool,
}

impl Default for BakeOptions {
    fn default() -> Self {
        Self { parallel: true }
    }
}

impl BakeOptions {
    /// Set whether to use parallel execution.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Create options for single-threaded execution.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

/// Apply a texture modifier to every keyframe of every layer.
///
/// Equivalent to evaluating at each keyframe in turn. Keyframes are
/// independent, so the result does not depend on `options.parallel`.
///
/// # Example
///
/// ```
/// use nib::prelude::*;
/// use nib::algo::texture::{bake, BakeOptions, TextureModifier, TextureOptions};
/// use nalgebra::Point3;
///
/// let stroke = || Stroke::new(vec![Point::new(Point3::origin())]);
/// let mut gp = GreasePencil::new("Drawing").with_layer(
///     Layer::new("Lines")
///         .with_frame(Frame::new(1, vec![stroke()]))
///         .with_frame(Frame::new(5, vec![stroke()])),
/// );
///
/// let modifier = TextureModifier::new("Texture", TextureOptions::default().with_seed(3));
/// let report = bake(&mut gp, &modifier, &BakeOptions::default(), &());
/// assert_eq!(report.frames, 2);
/// ```
pub fn bake(
    gp: &mut GreasePencil,
    modifier: &TextureModifier,
    options: &BakeOptions,
    cache: &dyn GeometryCache,
) -> ModifierReport {
    bake_with_progress(gp, modifier, options, cache, &Progress::none())
}

/// Bake with progress reporting, one step per keyframe.
pub fn bake_with_progress(
    gp: &mut GreasePencil,
    modifier: &TextureModifier,
    options: &BakeOptions,
    cache: &dyn GeometryCache,
    progress: &Progress,
) -> ModifierReport {
    let GreasePencil {
        name,
        layers,
        materials,
        vertex_groups,
    } = gp;
    let object = ObjectInfo {
        name: name.as_str(),
        materials: materials.as_slice(),
        vertex_groups: vertex_groups.as_slice(),
    };

    let mut jobs: Vec<(FrameContext<'_>, &mut Frame)> = Vec::new();
    for (li, layer) in layers.iter_mut().enumerate() {
        let info = LayerInfo {
            name: &layer.name,
            pass_index: layer.pass_index,
        };
        for (fi, frame) in layer.frames.iter_mut().enumerate() {
            let ctx = FrameContext {
                object,
                layer: info,
                layer_id: LayerId::new(li),
                frame_id: FrameId::new(fi),
            };
            jobs.push((ctx, frame));
        }
    }

    let total = jobs.len();
    let done = AtomicUsize::new(0);
    progress.report(0, total, "Baking texture mapping");

    let run = |(ctx, frame): (FrameContext, &mut Frame)| {
        let report = deform_frame(frame, &ctx, modifier, false, cache);
        let current = done.fetch_add(1, Ordering::Relaxed) + 1;
        progress.report(current, total, "Baking texture mapping");
        report
    };

    let report: ModifierReport = if options.parallel {
        jobs.into_par_iter().map(run).sum()
    } else {
        jobs.into_iter().map(run).sum()
    };

    info!(
        "baked '{}' on '{}': {} frames, {} strokes ({} filtered), {} points",
        modifier.name,
        object.name,
        report.frames,
        report.strokes_affected,
        report.strokes_skipped,
        report.points_changed
    );

    report
}
