//! RNG module - deterministic shape kind selection
//!
//! The engine owns an explicit, injectable pseudo-random source instead of
//! a global one: a fixed seed reproduces an exact kind sequence, which the
//! tests rely on. Kind indices come from the generator's high bits, giving
//! an evenly distributed, non-repeating draw over all 8 catalog entries.

use crate::types::ShapeKind;

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
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Derived from the high bits via a widening multiply: the low bits
    /// of an LCG cycle with tiny periods (bit k repeats every 2^(k+1)
    /// steps), so `next_u32() % max` would degenerate into a short fixed
    /// cycle for small `max`.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Current internal state (usable as a seed to continue the stream)
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Shape kind source backed by [`SimpleRng`], evenly distributed over the
/// catalog
#[derive(Debug, Clone)]
pub struct KindSource {
    rng: SimpleRng,
}

impl KindSource {
    /// Create a kind source with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw the next shape kind
    pub fn draw(&mut self) -> ShapeKind {
        let idx = self.rng.next_range(ShapeKind::ALL.len() as u32) as usize;
        ShapeKind::ALL[idx]
    }

    /// Current RNG state (for restarting with a continued sequence)
    pub fn state(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for KindSource {
    fn default() -> Self {
        Self::new(1)
    }
}
