//! RNG module - deterministic shape selection
//!
//! A simple LCG keeps games reproducible from a seed, which the driver can
//! surface for restarts. Shape selection is a uniform draw from the catalog.

use blockfall_types::ShapeKind;

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
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Uniform random shape source for piece spawning
#[derive(Debug, Clone)]
pub struct ShapePicker {
    rng: SimpleRng,
}

impl ShapePicker {
    /// Create a new picker with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw the next shape, chosen uniformly from the catalog
    pub fn draw(&mut self) -> ShapeKind {
        let index = self.rng.next_range(ShapeKind::ALL.len() as u32);
        ShapeKind::ALL[index as usize]
    }

    /// Get the current RNG state (for restarting a game with the same sequence)
    pub fn seed(&self) -> u32 {
        self.rng.state
    }
}

impl Default for ShapePicker {
    fn default() -> Self {
        Self::new(1)
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
    fn test_rng_range_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(4) < 4);
        }
    }

    #[test]
    fn test_picker_deterministic() {
        let mut picker1 = ShapePicker::new(99);
        let mut picker2 = ShapePicker::new(99);

        for _ in 0..50 {
            assert_eq!(picker1.draw(), picker2.draw());
        }
    }

    #[test]
    fn test_picker_covers_catalog() {
        let mut picker = ShapePicker::new(1);

        let mut drawn = Vec::new();
        for _ in 0..200 {
            let kind = picker.draw();
            if !drawn.contains(&kind) {
                drawn.push(kind);
            }
        }

        for kind in ShapeKind::ALL {
            assert!(drawn.contains(&kind), "missing shape: {:?}", kind);
        }
    }
}
