//! RNG module - injectable randomness for obstacle spawning
//!
//! The engine never touches process-wide random state. It owns a
//! [`RandomSource`] handed in at construction:
//!
//! - [`SimpleRng`]: seeded LCG for real games and reproducible runs
//! - [`SequenceRng`]: replays a fixed script of values for scenario tests

/// Source of randomness owned by the engine.
pub trait RandomSource {
    /// Generate next random u32
    fn next_u32(&mut self) -> u32;

    /// Generate a value in `[0, bound)`.
    ///
    /// Uses the high bits of [`next_u32`](Self::next_u32) (multiply-shift), which
    /// matters for LCGs whose low bits cycle quickly. `bound` must be non-zero.
    fn next_below(&mut self, bound: u32) -> u32 {
        debug_assert!(bound > 0);
        ((self.next_u32() as u64 * bound as u64) >> 32) as u32
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn next_below(&mut self, bound: u32) -> u32 {
        (**self).next_below(bound)
    }
}

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

    /// Current internal state (for restarting with the same sequence)
    pub fn seed(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Replays a fixed list of values, wrapping around at the end.
///
/// `next_below(bound)` yields `value % bound`, so a script reads directly as the
/// rolls the engine will see: `[0, 3]` means "spawn, at the 4th playable column".
#[derive(Debug, Clone)]
pub struct SequenceRng {
    values: Vec<u32>,
    pos: usize,
}

impl SequenceRng {
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        let mut values = values.into();
        if values.is_empty() {
            values.push(0);
        }
        Self { values, pos: 0 }
    }

    /// A source that never rolls a spawn (every roll is 1).
    pub fn never_spawn() -> Self {
        Self::new([1])
    }

    /// Number of values consumed so far.
    pub fn consumed(&self) -> usize {
        self.pos
    }
}

impl RandomSource for SequenceRng {
    fn next_u32(&mut self) -> u32 {
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v
    }

    fn next_below(&mut self, bound: u32) -> u32 {
        self.next_u32() % bound
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
        assert_eq!(rng.seed(), 1);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn test_next_below_in_range() {
        let mut rng = SimpleRng::new(7);
        for bound in [1u32, 2, 3, 9, 10] {
            for _ in 0..500 {
                assert!(rng.next_below(bound) < bound);
            }
        }
    }

    #[test]
    fn test_next_below_roughly_uniform() {
        let mut rng = SimpleRng::new(2024);
        let mut hits = [0u32; 10];
        let draws = 100_000;
        for _ in 0..draws {
            hits[rng.next_below(10) as usize] += 1;
        }
        // Every bucket within 10% of the expected 10_000.
        for (i, &h) in hits.iter().enumerate() {
            assert!((9_000..=11_000).contains(&h), "bucket {} got {}", i, h);
        }
    }

    #[test]
    fn test_sequence_replays_and_wraps() {
        let mut rng = SequenceRng::new(vec![0, 3, 12]);
        assert_eq!(rng.next_below(10), 0);
        assert_eq!(rng.next_below(10), 3);
        assert_eq!(rng.next_below(10), 2);
        assert_eq!(rng.next_below(10), 0);
        assert_eq!(rng.consumed(), 4);
    }

    #[test]
    fn test_never_spawn_never_rolls_zero() {
        let mut rng = SequenceRng::never_spawn();
        for bound in 3..=10 {
            assert_ne!(rng.next_below(bound), 0);
        }
    }

    #[test]
    fn test_mut_ref_forwards() {
        fn roll<R: RandomSource>(mut rng: R) -> u32 {
            rng.next_below(10)
        }

        let mut inner = SequenceRng::new(vec![4]);
        assert_eq!(roll(&mut inner), 4);
        assert_eq!(inner.consumed(), 1);
    }
}
