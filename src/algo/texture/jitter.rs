//! Deterministic per-stroke jitter.
//!
//! Each stroke gets two values in `(-1, 1)`: one driving a random UV offset
//! and one driving a random UV scale. They are derived from
//!
//! 1. a seed combining the user seed with hashes of the object and modifier
//!    names, hashed down to a phase in `[0, 1)`, and
//! 2. the Halton (2, 3) sample at the stroke's index within its frame,
//!
//! then scrambled through `fract(sin(x * 12.9898 + phase) * 43758.5453)`.
//! Nothing here holds state, so the same stroke in the same document always
//! receives the same jitter.

use crate::algo::halton::Halton2;
use crate::algo::hash::{hash_int_01, hash_string};
use crate::stroke::StrokeId;

use super::options::TextureOptions;

const SCRAMBLE_FREQUENCY: f64 = 12.9898;
const SCRAMBLE_AMPLITUDE: f64 = 43758.5453;
const SCALE_STREAM_PHASE: f64 = 78.233;

const HALTON: Halton2 = Halton2::new([2, 3], [0.0, 0.0]);

/// Jitter values of one stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeJitter {
    /// Drives the random UV offset.
    pub offset: f64,
    /// Drives the random UV scale.
    pub scale: f64,
}

/// Truncating remainder by 1: keeps the sign, result in `(-1, 1)`.
#[inline]
fn fold(x: f64) -> f64 {
    x % 1.0
}

#[inline]
fn scramble(x: f64, phase: f64) -> f64 {
    fold((x * SCRAMBLE_FREQUENCY + phase).sin() * SCRAMBLE_AMPLITUDE)
}

/// Combine the user seed with the object and modifier identities.
///
/// Wrapping 32-bit arithmetic.
pub fn combined_seed(seed: i32, object_name: &str, modifier_name: &str) -> i32 {
    seed.wrapping_add(hash_string(object_name) as i32)
        .wrapping_add(hash_string(modifier_name) as i32)
}

/// Per-modifier jitter source.
///
/// Built once per stroke evaluation from the identities, then sampled by
/// stroke index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JitterSource {
    phase: f64,
}

impl JitterSource {
    /// Create a source for a seed and pair of identities.
    pub fn new(seed: i32, object_name: &str, modifier_name: &str) -> Self {
        let combined = combined_seed(seed, object_name, modifier_name);
        Self {
            phase: hash_int_01(combined as u32),
        }
    }

    /// Create a source only if the options ask for randomness.
    pub fn for_options(options: &TextureOptions, object_name: &str, modifier_name: &str) -> Option<Self> {
        options
            .is_randomized()
            .then(|| Self::new(options.seed, object_name, modifier_name))
    }

    /// The seed-derived phase in `[0, 1)`.
    #[inline]
    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Jitter for the stroke at `stroke` within its frame.
    pub fn sample(&self, stroke: StrokeId) -> StrokeJitter {
        let [r0, r1] = HALTON.sample(stroke.index() as u64);

        let offset = fold(r0 * 2.0 - 1.0 + self.phase);
        let scale = fold(r1 * 2.0 - 1.0 + self.phase);

        StrokeJitter {
            offset: scramble(offset, 0.0),
            scale: scramble(scale, SCALE_STREAM_PHASE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sid(i: usize) -> StrokeId {
        StrokeId::new(i)
    }

    #[test]
    fn test_combined_seed_order() {
        let expected = 7i32
            .wrapping_add(hash_string("Drawing") as i32)
            .wrapping_add(hash_string("Texture") as i32);
        assert_eq!(combined_seed(7, "Drawing", "Texture"), expected);
    }

    #[test]
    fn test_combined_seed_wraps() {
        // Must not panic on overflow in debug builds.
        let _ = combined_seed(i32::MAX, "Drawing", "Texture");
        let _ = combined_seed(i32::MIN, "Drawing", "Texture");
    }

    #[test]
    fn test_deterministic() {
        let a = JitterSource::new(3, "Drawing", "Texture");
        let b = JitterSource::new(3, "Drawing", "Texture");
        for i in 0..32 {
            let ja = a.sample(sid(i));
            let jb = b.sample(sid(i));
            assert_eq!(ja.offset.to_bits(), jb.offset.to_bits());
            assert_eq!(ja.scale.to_bits(), jb.scale.to_bits());
        }
    }

    #[test]
    fn test_values_in_range() {
        for seed in 0..20 {
            let src = JitterSource::new(seed, "Drawing", "Texture");
            assert!((0.0..1.0).contains(&src.phase()));
            for i in 0..50 {
                let j = src.sample(sid(i));
                assert!(j.offset > -1.0 && j.offset < 1.0, "offset {}", j.offset);
                assert!(j.scale > -1.0 && j.scale < 1.0, "scale {}", j.scale);
            }
        }
    }

    #[test]
    fn test_identities_decorrelate() {
        // Different modifier names with the same seed should disagree on
        // nearly every (seed, stroke) pair.
        let mut differing = 0;
        let mut total = 0;
        for seed in 0..100 {
            let a = JitterSource::new(seed, "Drawing", "Texture");
            let b = JitterSource::new(seed, "Drawing", "Texture.001");
            let c = JitterSource::new(seed, "Drawing.001", "Texture");
            for i in 0..4 {
                total += 2;
                if a.sample(sid(i)) != b.sample(sid(i)) {
                    differing += 1;
                }
                if a.sample(sid(i)) != c.sample(sid(i)) {
                    differing += 1;
                }
            }
        }
        assert!(differing as f64 / total as f64 > 0.95, "{} of {}", differing, total);
    }

    #[test]
    fn test_strokes_decorrelate() {
        // Offsets alone may repeat where Halton x-coordinates differ by 1/2,
        // but base-3 coordinates never do, so the pairs stay distinct.
        let src = JitterSource::new(0, "Drawing", "Texture");
        let values: Vec<StrokeJitter> = (0..16).map(|i| src.sample(sid(i))).collect();
        for i in 0..values.len() {
            for j in (i + 1)..values.len() {
                assert_ne!(values[i], values[j], "strokes {} and {} collide", i, j);
            }
        }
    }

    #[test]
    fn test_streams_differ() {
        let src = JitterSource::new(11, "Drawing", "Texture");
        let j = src.sample(sid(5));
        assert_ne!(j.offset, j.scale);
    }

    #[test]
    fn test_for_options_gated_on_randomness() {
        let plain = TextureOptions::default();
        assert!(JitterSource::for_options(&plain, "Drawing", "Texture").is_none());

        let random = TextureOptions::default().with_randomness(0.0, 0.5);
        assert!(JitterSource::for_options(&random, "Drawing", "Texture").is_some());
    }

    #[test]
    fn test_sample_matches_formula() {
        let src = JitterSource::new(1, "Drawing", "Texture");
        let phase = src.phase();
        // Stroke 1 samples Halton (1/2, 1/3).
        let v = ((0.5 * 2.0 - 1.0 + phase) % 1.0 * 12.9898).sin() * 43758.5453 % 1.0;
        let s = (((1.0 / 3.0) * 2.0 - 1.0 + phase) % 1.0 * 12.9898 + 78.233).sin() * 43758.5453 % 1.0;
        let j = src.sample(sid(1));
        assert!((j.offset - v).abs() < 1e-9);
        assert!((j.scale - s).abs() < 1e-9);
    }
}
