//! RNG module - the session's single pseudo-random source
//!
//! A small LCG is enough for room placement and keeps generation reproducible:
//! the same seed always produces the same map. The session seeds it once and
//! threads it through generation; it is never reseeded per room.

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Returns 0 for `max == 0` instead of taking a zero modulus.
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        // The high bits of an LCG are far better distributed than the low ones.
        (self.next_u32() >> 8) % max
    }

    /// Generate random value in the inclusive range [lo, hi]
    ///
    /// A reversed range collapses to `lo`.
    pub fn next_between(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        let span = (hi - lo) as u32 + 1;
        lo + self.next_range(span) as i32
    }

    /// Pick one element uniformly
    pub fn choose<T: Copy>(&mut self, items: &[T]) -> Option<T> {
        if items.is_empty() {
            return None;
        }
        let idx = self.next_range(items.len() as u32) as usize;
        Some(items[idx])
    }

    /// Current internal state (for replaying a session)
    pub fn state(&self) -> u32 {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        let v1 = rng1.next_u32();
        let v2 = rng2.next_u32();
        assert_ne!(v1, v2);
    }

    #[test]
    fn test_zero_seed_is_usable() {
        let mut rng = SimpleRng::new(0);
        assert_eq!(rng.state(), 1);
        assert_ne!(rng.next_u32(), rng.next_u32());
    }

    #[test]
    fn test_next_range_zero_max() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..10 {
            assert_eq!(rng.next_range(0), 0);
        }
    }

    #[test]
    fn test_next_between_stays_inclusive() {
        let mut rng = SimpleRng::new(99);
        let mut seen = [false; 4];
        for _ in 0..500 {
            let v = rng.next_between(3, 6);
            assert!((3..=6).contains(&v));
            seen[(v - 3) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "every value should appear");
    }

    #[test]
    fn test_next_between_reversed_range() {
        let mut rng = SimpleRng::new(5);
        assert_eq!(rng.next_between(3, 3), 3);
        assert_eq!(rng.next_between(3, -4), 3);
    }

    #[test]
    fn test_choose() {
        let mut rng = SimpleRng::new(11);
        let empty: [u8; 0] = [];
        assert_eq!(rng.choose(&empty), None);
        for _ in 0..20 {
            let v = rng.choose(&[1, 2, 3]).unwrap();
            assert!((1..=3).contains(&v));
        }
    }
}
