//! RNG module - deterministic pseudo-random piece spawning
//!
//! A simple LCG is all the engine needs: spawns draw a kind and a color
//! uniformly, and carrying the generator inside the engine state keeps whole
//! games reproducible from a single seed.

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone, PartialEq, Eq)]
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
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        // Take the upper half of the word before reducing; an LCG's low bits
        // cycle with tiny periods and would bias small ranges.
        (self.next_u32() >> 16) % max
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
