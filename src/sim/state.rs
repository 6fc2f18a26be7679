//! Game state and core simulation types
//!
//! The [`Simulation`] owns every entity collection, the run/difficulty state
//! pair, the standing gun problem, and the logical spawn clocks. All mutation
//! happens through `tick` and `submit_answer`; collaborators observe the run
//! through drained [`GameEvent`]s.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::effects::EffectKind;
use crate::consts::*;
use crate::problems::{Category, Problem, ProblemSource};
use crate::settings::Settings;
use crate::tuning::Tuning;

/// The gun problem is always drawn one tier above the base tier
pub(crate) const GUN_TIER_OFFSET: usize = 1;

/// Retaliation bullet directions: NE, SE, SW, NW in screen coordinates
const RETALIATION_DIRS: [(f32, f32); 4] = [(1.0, -1.0), (1.0, 1.0), (-1.0, 1.0), (-1.0, -1.0)];

/// Discrete notifications for the (external) render/UI layer.
///
/// The core emits these with their payloads and draws nothing itself.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    ScoreChanged { score: u32 },
    LivesChanged { lives: u32 },
    LevelChanged { level: u32 },
    LevelUpFlash { level: u32 },
    IncorrectAnswerFlash,
    Explosion { pos: Vec2 },
    GunFired { pos: Vec2 },
    GameOver { score: u32 },
}

/// A descending or traversing target carrying a problem
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Half-extents of the bounding box
    pub half: Vec2,
    pub problem: Problem,
    pub effect: EffectKind,
    /// Whether reaching the bottom edge costs a life
    pub is_threat: bool,
    /// Archetype tint, for the render layer
    pub color: u32,
    pub alive: bool,
}

/// A projectile fired from the turret fan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shot {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub alive: bool,
}

/// A retaliation or spray projectile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyBullet {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Bouncing bullets reflect off struck enemies instead of dying
    pub bounces: bool,
    pub alive: bool,
}

/// Score, lives, and the terminal game-over flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunState {
    pub score: u32,
    pub lives: u32,
    pub game_over: bool,
}

impl RunState {
    fn new(lives: u32) -> Self {
        Self {
            score: 0,
            lives,
            game_over: false,
        }
    }
}

/// Escalation state, recomputed after every score change.
///
/// `enemy_speed` is derived: `base + (level-1) * per_level + penalty_speed`.
/// The penalty accumulates in its own field so it survives level-ups.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyState {
    pub level: u32,
    pub enemy_speed: f32,
    pub spawn_interval_ms: f32,
    pub penalty_speed: f32,
}

impl DifficultyState {
    fn new(tuning: &Tuning) -> Self {
        Self {
            level: 1,
            enemy_speed: tuning.base_enemy_speed,
            spawn_interval_ms: tuning.base_spawn_interval_ms,
            penalty_speed: 0.0,
        }
    }
}

/// The orchestrator: owns all entities and advances the run
pub struct Simulation {
    pub tuning: Tuning,
    pub run: RunState,
    pub difficulty: DifficultyState,
    pub enemies: Vec<Enemy>,
    pub shots: Vec<Shot>,
    pub bullets: Vec<EnemyBullet>,
    /// The single standing gun problem, replaced atomically on solve
    pub gun_problem: Problem,
    pub(crate) base_tier: usize,
    pub(crate) category: Option<Category>,
    pub(crate) rng: Pcg32,
    pub(crate) source: Box<dyn ProblemSource>,
    pub(crate) ms_since_spawn: f32,
    pub(crate) ms_since_sprayer: f32,
    pub(crate) events: Vec<GameEvent>,
    next_id: u32,
}

impl Simulation {
    /// Create a simulation and start its first run
    pub fn new(
        seed: u64,
        tuning: Tuning,
        settings: &Settings,
        source: Box<dyn ProblemSource>,
    ) -> Self {
        let lives = tuning.starting_lives;
        let mut sim = Self {
            run: RunState::new(lives),
            difficulty: DifficultyState::new(&tuning),
            enemies: Vec::new(),
            shots: Vec::new(),
            bullets: Vec::new(),
            gun_problem: Problem {
                text: String::new(),
                answer: f64::NAN,
            },
            base_tier: settings.difficulty_tier,
            category: settings.category,
            rng: Pcg32::seed_from_u64(seed),
            source,
            ms_since_spawn: 0.0,
            ms_since_sprayer: 0.0,
            events: Vec::new(),
            tuning,
            next_id: 1,
        };
        sim.start_game();
        sim
    }

    /// Reset to a fresh run: clears entities, timers, and pending events
    /// atomically, then re-arms the gun problem and populates the field.
    pub fn start_game(&mut self) {
        self.run = RunState::new(self.tuning.starting_lives);
        self.difficulty = DifficultyState::new(&self.tuning);
        self.enemies.clear();
        self.shots.clear();
        self.bullets.clear();
        self.events.clear();
        self.ms_since_spawn = 0.0;
        self.ms_since_sprayer = 0.0;

        self.events.push(GameEvent::ScoreChanged { score: 0 });
        self.events.push(GameEvent::LivesChanged {
            lives: self.run.lives,
        });
        self.events.push(GameEvent::LevelChanged { level: 1 });

        self.gun_problem = self.problem_at_offset(GUN_TIER_OFFSET);
        self.spawn_standard();
        log::info!(
            "run started: tier {} category {:?}",
            self.base_tier,
            self.category
        );
    }

    /// Adopt new persisted settings; any change restarts the run.
    pub fn apply_settings(&mut self, settings: &Settings) {
        self.base_tier = settings.difficulty_tier;
        self.category = settings.category;
        self.start_game();
    }

    /// Hand pending events to the caller, leaving the queue empty
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Request a problem at `base_tier + offset`, clamped to the source's
    /// top tier. The category filter only applies at the base tier; harder
    /// requests draw from every category.
    pub(crate) fn problem_at_offset(&mut self, offset: usize) -> Problem {
        let tier = (self.base_tier + offset).min(self.source.max_tier());
        let category = if offset == 0 { self.category } else { None };
        self.source.problem(tier, category)
    }

    /// Effective descent speed for threat enemies at the current state
    fn current_enemy_speed(&self) -> f32 {
        self.tuning.base_enemy_speed
            + (self.difficulty.level - 1) as f32 * self.tuning.speed_per_level
            + self.difficulty.penalty_speed
    }

    fn reapply_threat_speeds(&mut self) {
        let speed = self.difficulty.enemy_speed;
        for enemy in &mut self.enemies {
            if enemy.alive && enemy.is_threat {
                enemy.vel.y = speed;
            }
        }
    }

    /// Award points and re-evaluate the difficulty state machine
    pub(crate) fn add_score(&mut self, points: u32) {
        self.run.score += points;
        self.events.push(GameEvent::ScoreChanged {
            score: self.run.score,
        });
        self.update_difficulty();
    }

    fn update_difficulty(&mut self) {
        let new_level = self.run.score / self.tuning.points_per_level + 1;
        if new_level <= self.difficulty.level {
            return;
        }
        self.difficulty.level = new_level;
        self.difficulty.enemy_speed = self.current_enemy_speed();
        self.difficulty.spawn_interval_ms = (self.tuning.base_spawn_interval_ms
            - (new_level - 1) as f32 * self.tuning.spawn_decrement_per_level_ms)
            .max(self.tuning.min_spawn_interval_ms);
        self.reapply_threat_speeds();
        self.events.push(GameEvent::LevelChanged { level: new_level });
        self.events.push(GameEvent::LevelUpFlash { level: new_level });
        log::info!(
            "level {}: speed {} interval {}ms",
            new_level,
            self.difficulty.enemy_speed,
            self.difficulty.spawn_interval_ms
        );
    }

    /// Permanent speed penalty for an unmatched submission
    pub(crate) fn apply_incorrect_answer_penalty(&mut self) {
        self.difficulty.penalty_speed += self.tuning.penalty_increment;
        self.difficulty.enemy_speed = self.current_enemy_speed();
        self.reapply_threat_speeds();
        self.events.push(GameEvent::IncorrectAnswerFlash);
    }

    pub(crate) fn lose_life(&mut self) {
        if self.run.game_over {
            return;
        }
        self.run.lives = self.run.lives.saturating_sub(1);
        self.events.push(GameEvent::LivesChanged {
            lives: self.run.lives,
        });
        if self.run.lives == 0 {
            self.run.game_over = true;
            self.events.push(GameEvent::GameOver {
                score: self.run.score,
            });
            log::info!("game over at score {}", self.run.score);
        }
    }

    /// Flag an enemy dead, award points, and emit the explosion.
    ///
    /// Idempotent: a dead enemy struck again before pruning is a no-op, so
    /// score and effects can never double-trigger in one tick.
    pub(crate) fn destroy_enemy(&mut self, id: u32) -> bool {
        let Some(enemy) = self.enemies.iter_mut().find(|e| e.id == id) else {
            return false;
        };
        if !enemy.alive {
            return false;
        }
        enemy.alive = false;
        let pos = enemy.pos;
        self.events.push(GameEvent::Explosion { pos });
        let points = self.tuning.score_per_enemy;
        self.add_score(points);
        true
    }

    /// Fire the fixed fan of turret shots
    pub(crate) fn fire_gun(&mut self) {
        let origin = Vec2::new(GUN_X, GUN_Y - SHOT_SPAWN_OFFSET);
        let speed = self.tuning.shot_speed;
        for (dx, dy) in GUN_FAN {
            let id = self.next_entity_id();
            self.shots.push(Shot {
                id,
                pos: origin,
                vel: Vec2::new(dx, dy).normalize() * speed,
                radius: SHOT_RADIUS,
                alive: true,
            });
        }
        self.events.push(GameEvent::GunFired {
            pos: Vec2::new(GUN_X, GUN_Y),
        });
    }

    /// Four diagonal bouncing bullets from a retaliating enemy
    pub(crate) fn spawn_retaliation_bullets(&mut self, pos: Vec2) {
        let speed = self.tuning.retaliation_bullet_speed;
        for (dx, dy) in RETALIATION_DIRS {
            let id = self.next_entity_id();
            self.bullets.push(EnemyBullet {
                id,
                pos,
                vel: Vec2::new(dx, dy).normalize() * speed,
                radius: BULLET_RADIUS,
                bounces: true,
                alive: true,
            });
        }
    }

    /// A full 360-degree radial spray of bouncing bullets
    pub(crate) fn spawn_spray_bullets(&mut self, pos: Vec2) {
        let count = self.tuning.spray_bullet_count;
        let speed = self.tuning.spray_bullet_speed;
        for i in 0..count {
            let angle = std::f32::consts::TAU * i as f32 / count as f32;
            let id = self.next_entity_id();
            self.bullets.push(EnemyBullet {
                id,
                pos,
                vel: Vec2::new(angle.cos(), angle.sin()) * speed,
                radius: BULLET_RADIUS,
                bounces: true,
                alive: true,
            });
        }
    }

    /// Drop dead entities, then keep the field populated: if every enemy is
    /// gone and the run is still live, exactly one standard enemy spawns.
    pub(crate) fn prune_and_backfill(&mut self) {
        self.enemies.retain(|e| e.alive);
        self.shots.retain(|s| s.alive);
        self.bullets.retain(|b| b.alive);
        if self.enemies.is_empty() && !self.run.game_over {
            self.spawn_standard();
        }
    }
}
