//! Stroke points and their per-point vertex-group weights.

use nalgebra::{Point3, Vector2};
use serde::{Deserialize, Serialize};

use super::index::VertexGroupId;

/// A single vertex-group membership of a point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeformWeight {
    /// Index into the owning object's vertex group list.
    pub group: usize,
    /// Membership weight in `[0, 1]`.
    pub weight: f64,
}

/// Sparse vertex-group weights for one point.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeformWeights {
    entries: Vec<DeformWeight>,
}

impl DeformWeights {
    /// Create an empty weight set (a point that belongs to no group).
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the weight for a group, if the point is a member.
    pub fn get(&self, group: VertexGroupId) -> Option<f64> {
        self.entries
            .iter()
            .find(|dw| dw.group == group.index())
            .map(|dw| dw.weight)
    }

    /// Assign a weight for a group, replacing any previous value.
    pub fn set(&mut self, group: VertexGroupId, weight: f64) {
        match self.entries.iter_mut().find(|dw| dw.group == group.index()) {
            Some(dw) => dw.weight = weight,
            None => self.entries.push(DeformWeight {
                group: group.index(),
                weight,
            }),
        }
    }

    /// Number of groups this point belongs to.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the point belongs to no group.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the stored memberships.
    pub fn iter(&self) -> impl Iterator<Item = &DeformWeight> + '_ {
        self.entries.iter()
    }
}

fn zero_uv() -> Vector2<f64> {
    Vector2::zeros()
}

/// A point of an ink stroke.
///
/// Only `uv_factor` and `uv_rotation` are rewritten by texture mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Position in object space.
    pub position: Point3<f64>,
    /// Texture coordinate factor along the stroke.
    #[serde(default = "zero_uv")]
    pub uv_factor: Vector2<f64>,
    /// Texture rotation at this point, in radians.
    #[serde(default)]
    pub uv_rotation: f64,
    /// Vertex-group weights. `None` means the point is unweighted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weights: Option<DeformWeights>,
}

impl Point {
    /// Create a point at a position with zeroed UV attributes.
    pub fn new(position: Point3<f64>) -> Self {
        Self {
            position,
            uv_factor: Vector2::zeros(),
            uv_rotation: 0.0,
            weights: None,
        }
    }

    /// Set the UV factor.
    pub fn with_uv_factor(mut self, uv_factor: Vector2<f64>) -> Self {
        self.uv_factor = uv_factor;
        self
    }

    /// Set the UV rotation.
    pub fn with_uv_rotation(mut self, uv_rotation: f64) -> Self {
        self.uv_rotation = uv_rotation;
        self
    }

    /// Attach a vertex-group weight, creating weight data if needed.
    pub fn with_weight(mut self, group: VertexGroupId, weight: f64) -> Self {
        self.weights
            .get_or_insert_with(DeformWeights::new)
            .set(group, weight);
        self
    }
}
