//! The stroke object: layers, material slots, and vertex group names.

use serde::{Deserialize, Serialize};

use crate::error::{NibError, Result};

use super::frame::Layer;

/// A material slot as seen by the influence filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
    /// Material name, matched by the material filter.
    pub name: String,
    /// Material pass index, matched by the pass filter.
    #[serde(default)]
    pub pass_index: u32,
}

impl Material {
    /// Create a material with pass index 0.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pass_index: 0,
        }
    }

    /// Set the material pass index.
    pub fn with_pass_index(mut self, pass_index: u32) -> Self {
        self.pass_index = pass_index;
        self
    }
}

/// A stroke object.
///
/// The object name is its identity for jitter seeding: two objects with
/// different names get different jitter from the same modifier settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GreasePencil {
    /// Object name.
    pub name: String,
    /// Drawing layers, bottom to top.
    #[serde(default)]
    pub layers: Vec<Layer>,
    /// Material slots referenced by `Stroke::material_index`.
    #[serde(default)]
    pub materials: Vec<Material>,
    /// Vertex group names referenced by point weights.
    #[serde(default)]
    pub vertex_groups: Vec<String>,
}

impl GreasePencil {
    /// Create an empty object.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Append a layer.
    pub fn with_layer(mut self, layer: Layer) -> Self {
        self.layers.push(layer);
        self
    }

    /// Append a material slot.
    pub fn with_material(mut self, material: Material) -> Self {
        self.materials.push(material);
        self
    }

    /// Append a vertex group name.
    pub fn with_vertex_group(mut self, name: impl Into<String>) -> Self {
        self.vertex_groups.push(name.into());
        self
    }

    /// Total number of keyframes over all layers.
    pub fn num_frames(&self) -> usize {
        self.layers.iter().map(|l| l.frames.len()).sum()
    }

    /// Total number of strokes over all layers and frames.
    pub fn num_strokes(&self) -> usize {
        self.layers
            .iter()
            .flat_map(|l| &l.frames)
            .map(|f| f.strokes.len())
            .sum()
    }

    /// Total number of points over all strokes.
    pub fn num_points(&self) -> usize {
        self.layers
            .iter()
            .flat_map(|l| &l.frames)
            .flat_map(|f| &f.strokes)
            .map(|s| s.points.len())
            .sum()
    }

    /// Check structural consistency.
    ///
    /// Keyframes must be sorted per layer and stroke material slots must
    /// exist. Point weights must reference existing vertex groups and lie in
    /// `[0, 1]`, since a negative resolved weight marks a point as excluded.
    pub fn validate(&self) -> Result<()> {
        for layer in &self.layers {
            if !layer.frames_sorted() {
                return Err(NibError::InvalidDocument(format!(
                    "layer '{}' has unsorted or duplicate keyframes",
                    layer.name
                )));
            }

            for frame in &layer.frames {
                for (si, stroke) in frame.strokes.iter().enumerate() {
                    if !self.materials.is_empty() && stroke.material_index >= self.materials.len() {
                        return Err(NibError::InvalidDocument(format!(
                            "stroke {} on layer '{}' frame {} uses missing material slot {}",
                            si, layer.name, frame.frame_number, stroke.material_index
                        )));
                    }

                    let bad_group = stroke
                        .points
                        .iter()
                        .filter_map(|p| p.weights.as_ref())
                        .flat_map(|w| w.iter())
                        .find(|dw| dw.group >= self.vertex_groups.len());
                    if let Some(dw) = bad_group {
                        return Err(NibError::InvalidDocument(format!(
                            "stroke {} on layer '{}' frame {} references missing vertex group {}",
                            si, layer.name, frame.frame_number, dw.group
                        )));
                    }

                    let bad_weight = stroke
                        .points
                        .iter()
                        .filter_map(|p| p.weights.as_ref())
                        .flat_map(|w| w.iter())
                        .find(|dw| !(0.0..=1.0).contains(&dw.weight));
                    if let Some(dw) = bad_weight {
                        return Err(NibError::InvalidDocument(format!(
                            "stroke {} on layer '{}' frame {} has weight {} for vertex group {}, expected [0, 1]",
                            si, layer.name, frame.frame_number, dw.weight, dw.group
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}
