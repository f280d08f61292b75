//! Random number sources.
//!
//! Every probabilistic decision in the game (terrain, toughness, brawls,
//! breakage, digging) draws from a [`Dice`]. Live sessions use a seeded
//! [`StdRng`]; tests script exact rolls with [`FixedDice`].

use std::collections::VecDeque;

use rand::Rng;
use rand::rngs::StdRng;

/// A source of uniform random draws.
pub trait Dice {
    /// Uniform draw in `[0, 1)`.
    fn chance(&mut self) -> f64;

    /// Uniform draw in `0..n`. Consumes exactly one [`chance`](Self::chance).
    fn below(&mut self, n: u32) -> u32 {
        let n = n.max(1);
        let scaled = (self.chance() * f64::from(n)) as u32;
        scaled.min(n - 1)
    }
}

impl Dice for StdRng {
    fn chance(&mut self) -> f64 {
        self.random::<f64>()
    }
}

impl<D: Dice + ?Sized> Dice for &mut D {
    fn chance(&mut self) -> f64 {
        (**self).chance()
    }
}

/// Scripted dice that replay a fixed sequence of draws, cycling when exhausted.
///
/// An empty script always rolls `0.0`.
#[derive(Debug, Clone, Default)]
pub struct FixedDice {
    rolls: VecDeque<f64>,
}

impl FixedDice {
    /// Create dice that replay `rolls` in order. Values are clamped to `[0, 1)`.
    pub fn new(rolls: impl IntoIterator<Item = f64>) -> Self {
        Self {
            rolls: rolls
                .into_iter()
                .map(|r| r.clamp(0.0, 1.0 - f64::EPSILON))
                .collect(),
        }
    }

    /// Number of draws in one cycle of the script.
    pub fn len(&self) -> usize {
        self.rolls.len()
    }

    /// Returns true if the script has no draws.
    pub fn is_empty(&self) -> bool {
        self.rolls.is_empty()
    }
}

impl Dice for FixedDice {
    fn chance(&mut self) -> f64 {
        match self.rolls.pop_front() {
            Some(roll) => {
                self.rolls.push_back(roll);
                roll
            }
            None => 0.0,
        }
    }
}
