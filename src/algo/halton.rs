//! Halton low-discrepancy sequences.
//!
//! Coordinate `d` of the `n`-th Halton sample is the radical inverse of `n`
//! in base `bases[d]`: the base-`b` digits of `n` mirrored around the radix
//! point. Coprime bases give well-spread 2D samples without any RNG state.
//!
//! # Example
//!
//! ```
//! use nib::algo::halton::Halton2;
//!
//! let halton = Halton2::default();
//! assert_eq!(halton.sample(1), [0.5, 1.0 / 3.0]);
//! ```

/// Radical inverse of `index` in `base`.
///
/// Returns a value in `[0, 1)`. Index 0 maps to 0.
pub fn radical_inverse(mut index: u64, base: u32) -> f64 {
    debug_assert!(base >= 2, "radical inverse base must be at least 2");
    let base = base as u64;
    let inv_base = 1.0 / base as f64;
    let mut digit_weight = inv_base;
    let mut result = 0.0;

    while index > 0 {
        result += (index % base) as f64 * digit_weight;
        index /= base;
        digit_weight *= inv_base;
    }

    result
}

/// A two-dimensional Halton sequence with a fractional starting offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Halton2 {
    /// Radix of each dimension. Should be coprime.
    pub bases: [u32; 2],
    /// Offset added to each coordinate, wrapped into `[0, 1)`.
    pub offset: [f64; 2],
}

impl Default for Halton2 {
    /// Bases 2 and 3 with no offset.
    fn default() -> Self {
        Self::new([2, 3], [0.0, 0.0])
    }
}

impl Halton2 {
    /// Create a sequence with the given bases and offset.
    pub const fn new(bases: [u32; 2], offset: [f64; 2]) -> Self {
        Self { bases, offset }
    }

    /// Sample `index` of the sequence. Both coordinates lie in `[0, 1)`.
    pub fn sample(&self, index: u64) -> [f64; 2] {
        let mut r = [0.0; 2];
        for (d, coord) in r.iter_mut().enumerate() {
            *coord = (radical_inverse(index, self.bases[d]) + self.offset[d]).rem_euclid(1.0);
        }
        r
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radical_inverse_base2() {
        assert_eq!(radical_inverse(0, 2), 0.0);
        assert_eq!(radical_inverse(1, 2), 0.5);
        assert_eq!(radical_inverse(2, 2), 0.25);
        assert_eq!(radical_inverse(3, 2), 0.75);
        assert_eq!(radical_inverse(4, 2), 0.125);
    }

    #[test]
    fn test_first_samples() {
        let h = Halton2::default();
        let expected = [
            [0.0, 0.0],
            [0.5, 1.0 / 3.0],
            [0.25, 2.0 / 3.0],
            [0.75, 1.0 / 9.0],
        ];
        for (i, e) in expected.iter().enumerate() {
            let s = h.sample(i as u64);
            assert!((s[0] - e[0]).abs() < 1e-12, "sample {} x: {}", i, s[0]);
            assert!((s[1] - e[1]).abs() < 1e-12, "sample {} y: {}", i, s[1]);
        }
    }

    #[test]
    fn test_offset_wraps() {
        let h = Halton2::new([2, 3], [0.75, -0.5]);
        let s = h.sample(1);
        assert!((s[0] - 0.25).abs() < 1e-12);
        assert!((s[1] - (1.0 / 3.0 + 0.5)).abs() < 1e-12);
    }

    #[test]
    fn test_samples_in_unit_square() {
        let h = Halton2::default();
        for i in 0..1000 {
            let [x, y] = h.sample(i);
            assert!((0.0..1.0).contains(&x));
            assert!((0.0..1.0).contains(&y));
        }
    }

    #[test]
    fn test_low_discrepancy_coverage() {
        // Every cell of a 4x3 grid receives a sample within the first 12 points.
        let h = Halton2::default();
        let mut hit = [[false; 3]; 4];
        for i in 0..12 {
            let [x, y] = h.sample(i);
            hit[(x * 4.0) as usize][(y * 3.0) as usize] = true;
        }
        assert!(hit.iter().flatten().all(|&c| c));
    }
}
