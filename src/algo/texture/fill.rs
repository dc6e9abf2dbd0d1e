//! Fill-space texture transform.

use crate::stroke::FillUv;

use super::options::TextureOptions;

/// Apply the fill rotation, offset, and scale to a stroke's fill UV state.
///
/// Rotation and translation accumulate; scale multiplies.
pub fn apply_fill(fill: &mut FillUv, options: &TextureOptions) {
    fill.rotation += options.fill_rotation;
    fill.translation += options.fill_offset;
    fill.scale *= options.fill_scale;
}
