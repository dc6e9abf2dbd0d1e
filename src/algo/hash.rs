//! Stable integer and string hashes used for jitter seeding.
//!
//! These functions are bit-exact across platforms and runs: the same input
//! always produces the same output, so jitter is reproducible between
//! interactive evaluation and bakes.

/// Hash a string with the DJB2 scheme (`h * 33 + c`, starting at 5381).
///
/// Bytes are treated as signed, so non-ASCII names hash the same way as
/// they would through a signed `char` loop.
///
/// ```
/// use nib::algo::hash::hash_string;
///
/// assert_eq!(hash_string(""), 5381);
/// assert_eq!(hash_string("a"), 5381 * 33 + 97);
/// ```
pub fn hash_string(s: &str) -> u32 {
    s.bytes().fold(5381u32, |h, b| {
        (h << 5).wrapping_add(h).wrapping_add(b as i8 as i32 as u32)
    })
}

/// Jenkins lookup3 final mix of two integers.
pub fn hash_int_2d(kx: u32, ky: u32) -> u32 {
    let mut a = 0xdead_beef_u32.wrapping_add((2 << 2) + 13);
    let mut b = a;
    let mut c = a;

    a = a.wrapping_add(kx);
    b = b.wrapping_add(ky);

    c ^= b;
    c = c.wrapping_sub(b.rotate_left(14));
    a ^= c;
    a = a.wrapping_sub(c.rotate_left(11));
    b ^= a;
    b = b.wrapping_sub(a.rotate_left(25));
    c ^= b;
    c = c.wrapping_sub(b.rotate_left(16));
    a ^= c;
    a = a.wrapping_sub(c.rotate_left(4));
    b ^= a;
    b = b.wrapping_sub(a.rotate_left(14));
    c ^= b;
    c = c.wrapping_sub(b.rotate_left(24));

    c
}

/// Hash a single integer.
#[inline]
pub fn hash_int(k: u32) -> u32 {
    hash_int_2d(k, 0)
}

/// Hash an integer to a uniform value in `[0, 1)`.
#[inline]
pub fn hash_int_01(k: u32) -> f64 {
    hash_int(k) as f64 / 4_294_967_296.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_string_known_values() {
        assert_eq!(hash_string(""), 5381);
        assert_eq!(hash_string("a"), 177_670);
        assert_eq!(hash_string("ab"), 177_670u32.wrapping_mul(33) + 98);
    }

    #[test]
    fn test_hash_string_signed_bytes() {
        // 'é' is 0xC3 0xA9 in UTF-8; both bytes are negative as i8.
        let expected = [0xC3u8, 0xA9u8].iter().fold(5381u32, |h, &b| {
            h.wrapping_mul(33).wrapping_add((b as i8) as i32 as u32)
        });
        assert_eq!(hash_string("é"), expected);
    }

    #[test]
    fn test_hash_string_distinguishes_names() {
        assert_ne!(hash_string("Texture"), hash_string("Texture.001"));
        assert_ne!(hash_string("Stroke"), hash_string("Stroke.001"));
    }

    #[test]
    fn test_hash_int_deterministic() {
        for k in [0u32, 1, 42, 0xFFFF_FFFF] {
            assert_eq!(hash_int(k), hash_int(k));
        }
        assert_ne!(hash_int(1), hash_int(2));
        assert_ne!(hash_int_2d(1, 0), hash_int_2d(0, 1));
    }

    #[test]
    fn test_hash_int_01_range() {
        for k in 0..10_000u32 {
            let v = hash_int_01(k.wrapping_mul(2_654_435_761));
            assert!((0.0..1.0).contains(&v), "hash_int_01 out of range: {}", v);
        }
    }

    #[test]
    fn test_hash_int_01_spread() {
        let n = 10_000u32;
        let mean: f64 = (0..n).map(hash_int_01).sum::<f64>() / n as f64;
        assert!((mean - 0.5).abs() < 0.02, "mean too far from 0.5: {}", mean);
    }
}
