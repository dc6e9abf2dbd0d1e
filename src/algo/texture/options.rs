//! Texture mapping settings.

use nalgebra::Vector2;

use crate::error::{NibError, Result};

/// Which texture spaces a modifier rewrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextureMode {
    /// Per-point stroke UVs only.
    #[default]
    Stroke,
    /// The stroke's fill UV state only.
    Fill,
    /// Both, fill first.
    StrokeAndFill,
}

impl TextureMode {
    /// Whether the fill UV state is transformed.
    #[inline]
    pub fn affects_fill(self) -> bool {
        matches!(self, TextureMode::Fill | TextureMode::StrokeAndFill)
    }

    /// Whether per-point UVs are transformed.
    #[inline]
    pub fn affects_stroke(self) -> bool {
        matches!(self, TextureMode::Stroke | TextureMode::StrokeAndFill)
    }
}

/// How per-point UV factors are normalized along a stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FitMethod {
    /// Divide by 1: texture size is independent of stroke length.
    #[default]
    ConstantLength,
    /// Divide by the stroke's arc length: the texture fits the stroke once.
    FitStroke,
}

/// Stroke and point selection for a modifier.
///
/// Layer and material filters are disabled when unset. Pass filters are
/// disabled when 0.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InfluenceFilter {
    /// Only affect strokes on this layer.
    pub layer: Option<String>,
    /// Affect every layer except `layer`.
    pub invert_layer: bool,
    /// Only affect strokes using this material.
    pub material: Option<String>,
    /// Affect every material except `material`.
    pub invert_material: bool,
    /// Only affect strokes whose material has this pass index (0 = any).
    pub pass_index: u32,
    /// Affect every material pass except `pass_index`.
    pub invert_pass: bool,
    /// Only affect strokes on layers with this pass index (0 = any).
    pub layer_pass: u32,
    /// Affect every layer pass except `layer_pass`.
    pub invert_layer_pass: bool,
    /// Weight points by this vertex group.
    pub vertex_group: Option<String>,
    /// Use `1 - weight` and include non-members.
    pub invert_vertex_group: bool,
}

impl InfluenceFilter {
    /// Filter by layer name.
    pub fn with_layer(mut self, name: impl Into<String>, invert: bool) -> Self {
        self.layer = Some(name.into());
        self.invert_layer = invert;
        self
    }

    /// Filter by material name.
    pub fn with_material(mut self, name: impl Into<String>, invert: bool) -> Self {
        self.material = Some(name.into());
        self.invert_material = invert;
        self
    }

    /// Filter by material pass index.
    pub fn with_pass_index(mut self, pass_index: u32, invert: bool) -> Self {
        self.pass_index = pass_index;
        self.invert_pass = invert;
        self
    }

    /// Filter by layer pass index.
    pub fn with_layer_pass(mut self, layer_pass: u32, invert: bool) -> Self {
        self.layer_pass = layer_pass;
        self.invert_layer_pass = invert;
        self
    }

    /// Weight points by a vertex group.
    pub fn with_vertex_group(mut self, name: impl Into<String>, invert: bool) -> Self {
        self.vertex_group = Some(name.into());
        self.invert_vertex_group = invert;
        self
    }
}

/// Options for stroke texture mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureOptions {
    /// Texture spaces to rewrite.
    pub mode: TextureMode,

    /// Normalization of per-point UV factors.
    pub fit_method: FitMethod,

    /// Scale applied to UV factors after normalization.
    pub uv_scale: f64,

    /// Offset added to UV factors after scaling.
    pub uv_offset: Vector2<f64>,

    /// Rotation added to every point's UV rotation, in radians.
    pub alignment_rotation: f64,

    /// Rotation added to the fill UV rotation, in radians.
    pub fill_rotation: f64,

    /// Offset added to the fill UV translation.
    pub fill_offset: Vector2<f64>,

    /// Factor multiplied into the fill UV scale.
    pub fill_scale: f64,

    /// Strength of per-stroke random UV offset.
    pub random_offset: f64,

    /// Strength of per-stroke random UV scale.
    pub random_scale: f64,

    /// User seed for the random offset and scale.
    pub seed: i32,

    /// Stroke and point selection.
    pub filter: InfluenceFilter,
}

impl Default for TextureOptions {
    fn default() -> Self {
        Self {
            mode: TextureMode::Stroke,
            fit_method: FitMethod::ConstantLength,
            uv_scale: 1.0,
            uv_offset: Vector2::zeros(),
            alignment_rotation: 0.0,
            fill_rotation: 0.0,
            fill_offset: Vector2::zeros(),
            fill_scale: 1.0,
            random_offset: 0.0,
            random_scale: 0.0,
            seed: 0,
            filter: InfluenceFilter::default(),
        }
    }
}

impl TextureOptions {
    /// Set the texture mode.
    pub fn with_mode(mut self, mode: TextureMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the fit method.
    pub fn with_fit_method(mut self, fit_method: FitMethod) -> Self {
        self.fit_method = fit_method;
        self
    }

    /// Set the stroke UV scale.
    pub fn with_uv_scale(mut self, uv_scale: f64) -> Self {
        self.uv_scale = uv_scale;
        self
    }

    /// Set the stroke UV offset.
    pub fn with_uv_offset(mut self, uv_offset: Vector2<f64>) -> Self {
        self.uv_offset = uv_offset;
        self
    }

    /// Set the per-point rotation increment.
    pub fn with_alignment_rotation(mut self, rotation: f64) -> Self {
        self.alignment_rotation = rotation;
        self
    }

    /// Set the fill rotation, offset, and scale together.
    pub fn with_fill(mut self, rotation: f64, offset: Vector2<f64>, scale: f64) -> Self {
        self.fill_rotation = rotation;
        self.fill_offset = offset;
        self.fill_scale = scale;
        self
    }

    /// Set the random offset and scale strengths.
    pub fn with_randomness(mut self, offset: f64, scale: f64) -> Self {
        self.random_offset = offset;
        self.random_scale = scale;
        self
    }

    /// Set the user seed.
    pub fn with_seed(mut self, seed: i32) -> Self {
        self.seed = seed;
        self
    }

    /// Set the influence filter.
    pub fn with_filter(mut self, filter: InfluenceFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Whether per-stroke jitter needs to be generated.
    #[inline]
    pub fn is_randomized(&self) -> bool {
        self.random_offset != 0.0 || self.random_scale != 0.0
    }

    /// Check that every numeric setting is finite.
    pub fn validate(&self) -> Result<()> {
        let scalars = [
            ("uv_scale", self.uv_scale),
            ("uv_offset.x", self.uv_offset.x),
            ("uv_offset.y", self.uv_offset.y),
            ("alignment_rotation", self.alignment_rotation),
            ("fill_rotation", self.fill_rotation),
            ("fill_offset.x", self.fill_offset.x),
            ("fill_offset.y", self.fill_offset.y),
            ("fill_scale", self.fill_scale),
            ("random_offset", self.random_offset),
            ("random_scale", self.random_scale),
        ];

        for (name, value) in scalars {
            if !value.is_finite() {
                return Err(NibError::invalid_param(name, value, "must be finite"));
            }
        }
        Ok(())
    }
}

/// A named texture mapping modifier.
///
/// The name is the modifier's identity for jitter seeding: two modifiers with
/// identical settings but different names produce different jitter.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureModifier {
    /// Modifier name.
    pub name: String,
    /// Modifier settings.
    pub options: TextureOptions,
}

impl TextureModifier {
    /// Create a modifier.
    pub fn new(name: impl Into<String>, options: TextureOptions) -> Self {
        Self {
            name: name.into(),
            options,
        }
    }
}

impl Default for TextureModifier {
    fn default() -> Self {
        Self::new("TextureMapping", TextureOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_flags() {
        assert!(TextureMode::Stroke.affects_stroke());
        assert!(!TextureMode::Stroke.affects_fill());
        assert!(TextureMode::Fill.affects_fill());
        assert!(!TextureMode::Fill.affects_stroke());
        assert!(TextureMode::StrokeAndFill.affects_fill());
        assert!(TextureMode::StrokeAndFill.affects_stroke());
    }

    #[test]
    fn test_defaults_are_identity() {
        let opts = TextureOptions::default();
        assert_eq!(opts.mode, TextureMode::Stroke);
        assert_eq!(opts.fit_method, FitMethod::ConstantLength);
        assert_eq!(opts.uv_scale, 1.0);
        assert_eq!(opts.fill_scale, 1.0);
        assert!(!opts.is_randomized());
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn test_randomized() {
        assert!(TextureOptions::default().with_randomness(0.5, 0.0).is_randomized());
        assert!(TextureOptions::default().with_randomness(0.0, -0.2).is_randomized());
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let opts = TextureOptions::default().with_uv_scale(f64::INFINITY);
        match opts.validate() {
            Err(NibError::InvalidParameter { name, .. }) => assert_eq!(name, "uv_scale"),
            other => panic!("expected invalid parameter, got {:?}", other),
        }

        let opts = TextureOptions::default().with_fill(0.0, Vector2::new(f64::NAN, 0.0), 1.0);
        assert!(opts.validate().is_err());
    }

    #[test]
    fn test_filter_builder() {
        let filter = InfluenceFilter::default()
            .with_layer("Ink", true)
            .with_pass_index(2, false)
            .with_vertex_group("Tips", true);
        assert_eq!(filter.layer.as_deref(), Some("Ink"));
        assert!(filter.invert_layer);
        assert_eq!(filter.pass_index, 2);
        assert!(filter.invert_vertex_group);
        assert!(filter.material.is_none());
    }
}
