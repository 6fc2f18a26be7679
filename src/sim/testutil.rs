//! Shared fixtures for simulation tests

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;

use super::effects::EffectKind;
use super::state::{Enemy, Simulation};
use crate::consts::{ENEMY_HEIGHT, ENEMY_WIDTH};
use crate::problems::{Category, Problem, ProblemSource};
use crate::settings::Settings;
use crate::tuning::Tuning;

/// Every (tier, category) request made of the scripted source, in order
pub(crate) type RequestLog = Rc<RefCell<Vec<(usize, Option<Category>)>>>;

/// A deterministic stand-in for the external generator: answers are unique
/// values from 10 001 upward, so scripted problems never collide with the
/// small answers tests submit by hand.
pub(crate) struct ScriptedSource {
    requests: RequestLog,
    counter: u32,
}

impl ProblemSource for ScriptedSource {
    fn max_tier(&self) -> usize {
        5
    }

    fn problem(&mut self, tier: usize, category: Option<Category>) -> Problem {
        let tier = tier.min(self.max_tier());
        self.requests.borrow_mut().push((tier, category));
        self.counter += 1;
        Problem {
            text: format!("#{}", self.counter),
            answer: 10_000.0 + self.counter as f64,
        }
    }
}

pub(crate) struct Fixture {
    pub sim: Simulation,
    pub requests: RequestLog,
}

pub(crate) fn fixture() -> Fixture {
    fixture_with(Tuning::default())
}

pub(crate) fn fixture_with(tuning: Tuning) -> Fixture {
    fixture_full(tuning, Settings::default())
}

pub(crate) fn fixture_at_tier(tier: usize) -> Fixture {
    fixture_full(
        Tuning::default(),
        Settings {
            difficulty_tier: tier,
            category: None,
        },
    )
}

fn fixture_full(tuning: Tuning, settings: Settings) -> Fixture {
    let requests: RequestLog = Rc::new(RefCell::new(Vec::new()));
    let source = ScriptedSource {
        requests: Rc::clone(&requests),
        counter: 0,
    };
    let sim = Simulation::new(42, tuning, &settings, Box::new(source));
    Fixture { sim, requests }
}

/// Insert an enemy with a known answer directly, bypassing the spawner
pub(crate) fn push_enemy(
    sim: &mut Simulation,
    answer: f64,
    effect: EffectKind,
    is_threat: bool,
    pos: Vec2,
) -> u32 {
    let id = sim.next_entity_id();
    let vel = if is_threat {
        Vec2::new(0.0, sim.difficulty.enemy_speed)
    } else {
        Vec2::new(50.0, 0.0)
    };
    sim.enemies.push(Enemy {
        id,
        pos,
        vel,
        half: Vec2::new(ENEMY_WIDTH / 2.0, ENEMY_HEIGHT / 2.0),
        problem: Problem {
            text: format!("= {answer}"),
            answer,
        },
        effect,
        is_threat,
        color: 0x00ff00,
        alive: true,
    });
    id
}
