//! Typed-answer dispatch
//!
//! One entry point for the input boundary: a parsed numeric value arrives
//! and is matched against the gun problem and every live enemy in the same
//! call. Matches are cumulative, never mutually exclusive; only a value
//! matching nothing at all draws the penalty.

use super::state::{GUN_TIER_OFFSET, Simulation};
use crate::problems::answers_match;

impl Simulation {
    /// Dispatch a submitted answer. No-op when the run is over or the value
    /// is not a finite number.
    ///
    /// The gun check and the enemy scan are independent: a correct gun
    /// answer does not preclude solving enemies, and every enemy whose
    /// answer matches is solved in this one call. The matching set is
    /// snapshotted before any effect runs, so destruction (and the entity
    /// churn it causes) cannot skip or double-visit candidates.
    pub fn submit_answer(&mut self, value: f64) {
        if self.run.game_over || !value.is_finite() {
            return;
        }

        let gun_correct = answers_match(self.gun_problem.answer, value);
        if gun_correct {
            self.fire_gun();
            self.gun_problem = self.problem_at_offset(GUN_TIER_OFFSET);
        }

        let matched: Vec<_> = self
            .enemies
            .iter()
            .filter(|e| e.alive && answers_match(e.problem.answer, value))
            .map(|e| (e.id, e.effect))
            .collect();
        let solved = matched.len();
        for (id, effect) in matched {
            effect.execute(self, id);
        }

        if !gun_correct && solved == 0 {
            self.apply_incorrect_answer_penalty();
        }
        log::debug!("answer {value}: gun {gun_correct}, enemies {solved}");

        self.prune_and_backfill();
    }
}
