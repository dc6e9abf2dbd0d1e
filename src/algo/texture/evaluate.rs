//! Interactive evaluation at a single scene frame.

use log::debug;

use crate::stroke::{GreasePencil, LayerId};

use super::cache::GeometryCache;
use super::context::{FrameContext, LayerInfo, ObjectInfo};
use super::options::TextureModifier;
use super::report::ModifierReport;
use super::deform_frame;

/// Options for evaluating a modifier at one scene frame.
#[derive(Debug, Clone)]
pub struct EvaluateOptions {
    /// Scene frame number. Each layer's active keyframe at this frame is
    /// processed.
    pub frame: i32,

    /// Whether to process strokes in parallel (default: true).
    pub parallel: bool,
}

impl Default for EvaluateOptions {
    fn default() -> Self {
        Self {
            frame: 1,
            parallel: true,
        }
    }
}

impl EvaluateOptions {
    /// Create options for a scene frame.
    pub fn at_frame(frame: i32) -> Self {
        Self {
            frame,
            ..Self::default()
        }
    }

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

/// Apply a texture modifier to the active keyframe of every layer.
///
/// Layers with no keyframe at or before `options.frame` are skipped.
pub fn evaluate(
    gp: &mut GreasePencil,
    modifier: &TextureModifier,
    options: &EvaluateOptions,
    cache: &dyn GeometryCache,
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

    let mut report = ModifierReport::default();

    for (li, layer) in layers.iter_mut().enumerate() {
        let Some(frame_id) = layer.active_frame(options.frame) else {
            debug!("layer '{}' has no keyframe at {}", layer.name, options.frame);
            continue;
        };

        let ctx = FrameContext {
            object,
            layer: LayerInfo {
                name: &layer.name,
                pass_index: layer.pass_index,
            },
            layer_id: LayerId::new(li),
            frame_id,
        };
        let frame = &mut layer.frames[frame_id.index()];

        report = report + deform_frame(frame, &ctx, modifier, options.parallel, cache);
    }

    debug!(
        "'{}' on '{}' at frame {}: {} strokes, {} points",
        modifier.name, object.name, options.frame, report.strokes_affected, report.points_changed
    );

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::texture::{InvalidationLog, TextureMode, TextureOptions};
    use crate::stroke::{Frame, Layer, Point, Stroke, StrokeKey};
    use nalgebra::{Point3, Vector2};

    fn stroke(u: f64) -> Stroke {
        Stroke::new(vec![
            Point::new(Point3::new(0.0, 0.0, 0.0)).with_uv_factor(Vector2::new(u, u)),
            Point::new(Point3::new(1.0, 0.0, 0.0)).with_uv_factor(Vector2::new(u, u)),
        ])
    }

    fn drawing() -> GreasePencil {
        GreasePencil::new("Drawing")
            .with_layer(
                Layer::new("Lines")
                    .with_frame(Frame::new(1, vec![stroke(1.0)]))
                    .with_frame(Frame::new(10, vec![stroke(1.0), stroke(1.0)])),
            )
            .with_layer(Layer::new("Late").with_frame(Frame::new(20, vec![stroke(1.0)])))
    }

    #[test]
    fn test_only_active_frame_changes() {
        let mut gp = drawing();
        let m = TextureModifier::new("Texture", TextureOptions::default().with_uv_scale(3.0));

        let report = evaluate(&mut gp, &m, &EvaluateOptions::at_frame(12), &());

        assert_eq!(report.frames, 1);
        assert_eq!(report.strokes_affected, 2);
        assert_eq!(gp.layers[0].frames[0].strokes[0].points[0].uv_factor, Vector2::new(1.0, 1.0));
        assert_eq!(gp.layers[0].frames[1].strokes[1].points[1].uv_factor, Vector2::new(3.0, 3.0));
        assert_eq!(gp.layers[1].frames[0].strokes[0].points[0].uv_factor, Vector2::new(1.0, 1.0));
    }

    #[test]
    fn test_fill_invalidation_keys() {
        let mut gp = drawing();
        let m = TextureModifier::new("Texture", TextureOptions::default().with_mode(TextureMode::Fill));
        let log = InvalidationLog::new();

        evaluate(&mut gp, &m, &EvaluateOptions::at_frame(25).sequential(), &log);

        assert_eq!(
            log.take(),
            vec![
                StrokeKey::new(0, 1, 0),
                StrokeKey::new(0, 1, 1),
                StrokeKey::new(1, 0, 0),
            ]
        );
    }

    #[test]
    fn test_before_first_keyframe_is_noop() {
        let mut gp = drawing();
        let before = gp.clone();
        let m = TextureModifier::new("Texture", TextureOptions::default().with_uv_scale(3.0));

        let report = evaluate(&mut gp, &m, &EvaluateOptions::at_frame(0), &());

        assert_eq!(report, ModifierReport::default());
        assert_eq!(gp, before);
    }
}
