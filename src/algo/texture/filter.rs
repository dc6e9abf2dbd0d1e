//! Stroke eligibility and per-point vertex-group weights.

use crate::stroke::{Point, Stroke, VertexGroupId};

use super::context::StrokeContext;
use super::options::InfluenceFilter;

/// Strokes with fewer points are never affected.
const MIN_POINTS: usize = 1;

/// Whether a stroke passes every stroke-level filter.
///
/// Layer name, material, material pass, and layer pass predicates are ANDed.
/// An unset name or a pass index of 0 disables that predicate.
pub fn is_stroke_affected(ctx: &StrokeContext<'_>, stroke: &Stroke, filter: &InfluenceFilter) -> bool {
    if let Some(layer) = filter.layer.as_deref().filter(|l| !l.is_empty()) {
        if (ctx.layer.name == layer) == filter.invert_layer {
            return false;
        }
    }

    let material = ctx.object.materials.get(stroke.material_index);

    if let Some(wanted) = filter.material.as_deref().filter(|m| !m.is_empty()) {
        let matches = material.is_some_and(|m| m.name == wanted);
        if matches == filter.invert_material {
            return false;
        }
    }

    if filter.layer_pass > 0 && (ctx.layer.pass_index == filter.layer_pass) == filter.invert_layer_pass {
        return false;
    }

    if filter.pass_index > 0 {
        let pass = material.map_or(0, |m| m.pass_index);
        if (pass == filter.pass_index) == filter.invert_pass {
            return false;
        }
    }

    stroke.points.len() >= MIN_POINTS
}

/// Resolve the configured vertex group against the object's group names.
///
/// Returns `None` when no group is configured or the name does not exist,
/// in which case every point gets full weight.
pub fn resolve_vertex_group(
    filter: &InfluenceFilter,
    vertex_groups: &[String],
) -> Option<VertexGroupId> {
    let name = filter.vertex_group.as_deref()?;
    vertex_groups
        .iter()
        .position(|g| g == name)
        .map(VertexGroupId::new)
}

/// Weight of a point for the resolved vertex group.
///
/// A negative result means the point is excluded and must be left untouched.
/// Points without weight data are included with full weight. Stored weights
/// are clamped to `[0, 1]` so a member is never mistaken for a non-member.
pub fn point_weight(point: &Point, group: Option<VertexGroupId>, invert: bool) -> f64 {
    let (Some(group), Some(weights)) = (group, point.weights.as_ref()) else {
        return 1.0;
    };

    match weights.get(group).map(|w| w.clamp(0.0, 1.0)) {
        Some(w) if invert => 1.0 - w,
        Some(w) => w,
        None if invert => 1.0,
        None => -1.0,
    }
}
