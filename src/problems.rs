//! The problem-source collaborator boundary
//!
//! The simulation never generates arithmetic itself; it asks a
//! [`ProblemSource`] for a problem at a difficulty tier. Tiers are totally
//! ordered, enumerable, and requests above the maximum clamp to it.
//! [`ArithmeticSource`] is a small built-in source used by the demo binary
//! and tests; a real deployment can plug in any generator behind the trait.

use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// An operation-category filter for generated problems
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

/// A single arithmetic problem. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    /// Display text, e.g. `"7 x 8"`
    pub text: String,
    /// The numeric answer a player must type
    pub answer: f64,
}

/// Whether a submitted value solves a problem with the given answer.
///
/// The epsilon tolerates decimal input round-trips without ever conflating
/// adjacent integer answers.
#[inline]
pub fn answers_match(answer: f64, submitted: f64) -> bool {
    (answer - submitted).abs() < 1e-9
}

/// A generator of arithmetic problems, ordered by difficulty tier.
pub trait ProblemSource {
    /// Highest valid tier index (tiers run `0..=max_tier()`, easiest first)
    fn max_tier(&self) -> usize;

    /// Produce a problem at the given tier, optionally restricted to one
    /// operation category. Implementations clamp `tier` to `max_tier()`.
    fn problem(&mut self, tier: usize, category: Option<Category>) -> Problem;
}

/// Built-in seeded problem generator.
///
/// Operand ranges grow with the tier; division problems are constructed
/// backwards from a product so answers stay whole.
pub struct ArithmeticSource {
    rng: Pcg32,
}

/// Tiers exposed by [`ArithmeticSource`] (0..=5, modeled on school years)
const ARITHMETIC_TIERS: usize = 6;

impl ArithmeticSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Largest operand used at a tier
    fn operand_limit(tier: usize) -> i64 {
        match tier {
            0 => 10,
            1 => 20,
            2 => 50,
            3 => 100,
            4 => 500,
            _ => 1000,
        }
    }
}

impl ProblemSource for ArithmeticSource {
    fn max_tier(&self) -> usize {
        ARITHMETIC_TIERS - 1
    }

    fn problem(&mut self, tier: usize, category: Option<Category>) -> Problem {
        let tier = tier.min(self.max_tier());
        let limit = Self::operand_limit(tier);
        let category = category.unwrap_or_else(|| match self.rng.random_range(0..4) {
            0 => Category::Addition,
            1 => Category::Subtraction,
            2 => Category::Multiplication,
            _ => Category::Division,
        });

        match category {
            Category::Addition => {
                let a = self.rng.random_range(1..=limit);
                let b = self.rng.random_range(1..=limit);
                Problem {
                    text: format!("{a} + {b}"),
                    answer: (a + b) as f64,
                }
            }
            Category::Subtraction => {
                let a = self.rng.random_range(1..=limit);
                let b = self.rng.random_range(1..=limit);
                // Keep answers non-negative
                let (hi, lo) = if a >= b { (a, b) } else { (b, a) };
                Problem {
                    text: format!("{hi} - {lo}"),
                    answer: (hi - lo) as f64,
                }
            }
            Category::Multiplication => {
                let cap = (limit / 4).max(2);
                let a = self.rng.random_range(2..=cap.min(12).max(2));
                let b = self.rng.random_range(2..=cap);
                Problem {
                    text: format!("{a} x {b}"),
                    answer: (a * b) as f64,
                }
            }
            Category::Division => {
                let cap = (limit / 4).max(2);
                let divisor = self.rng.random_range(2..=cap.min(12).max(2));
                let quotient = self.rng.random_range(1..=cap);
                let dividend = divisor * quotient;
                Problem {
                    text: format!("{dividend} / {divisor}"),
                    answer: quotient as f64,
                }
            }
        }
    }
}
