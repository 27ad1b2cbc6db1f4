//! Uniform random sources for response selection.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// Source of uniform draws in `[0, 1)`.
pub trait UniformSource {
    fn draw(&mut self) -> f64;
}

/// Thread-local system generator.
#[derive(Debug, Clone, Default)]
pub struct SystemRandom {
    rng: ThreadRng,
}

impl SystemRandom {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl UniformSource for SystemRandom {
    fn draw(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Reproducible generator seeded from a number.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl UniformSource for SeededRandom {
    fn draw(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Always returns the same value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedDraw(pub f64);

impl UniformSource for FixedDraw {
    fn draw(&mut self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draws_in_unit_interval() {
        let mut system = SystemRandom::new();
        let mut seeded = SeededRandom::new(42);
        for _ in 0..100 {
            let a = system.draw();
            let b = seeded.draw();
            assert!((0.0..1.0).contains(&a));
            assert!((0.0..1.0).contains(&b));
        }
    }

    #[test]
    fn test_fixed_draw() {
        let mut fixed = FixedDraw(0.3);
        assert_eq!(fixed.draw(), 0.3);
        assert_eq!(fixed.draw(), 0.3);
    }
}
