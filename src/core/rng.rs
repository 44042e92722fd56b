//! Seedable LCG used for piece and color selection.
//!
//! A small deterministic generator keeps the core free of external
//! dependencies and makes game sequences reproducible in tests.

/// Simple LCG (Linear Congruential Generator) using Numerical Recipes
/// constants: `state = state * 1664525 + 1013904223 (mod 2^32)`.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG. A zero seed is remapped to 1 to avoid a degenerate
    /// all-zero stream.
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Random value in `[0, max)`.
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}
