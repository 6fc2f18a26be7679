//! Data-driven game balance
//!
//! Every escalation constant lives here rather than in the simulation:
//! speed/interval formulas, the incorrect-answer penalty, projectile
//! speeds, and the archetype tables. Defaults give the shipped balance;
//! a JSON file with any subset of fields overrides them.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::sim::effects::EffectKind;
use crate::sim::spawn::Archetype;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Descent speed of threat enemies at level 1, units/second
    pub base_enemy_speed: f32,
    /// Additive speed gain per level past the first
    pub speed_per_level: f32,
    /// Standard spawn cadence at level 1
    pub base_spawn_interval_ms: f32,
    /// Cadence tightens by this much per level past the first
    pub spawn_decrement_per_level_ms: f32,
    /// Cadence floor
    pub min_spawn_interval_ms: f32,
    /// Permanent speed addition per unmatched answer
    pub penalty_increment: f32,
    /// Turret shot speed
    pub shot_speed: f32,
    /// Retaliation burst bullet speed
    pub retaliation_bullet_speed: f32,
    /// Radial spray bullet speed and count
    pub spray_bullet_speed: f32,
    pub spray_bullet_count: u32,
    /// Period of the independent sprayer spawn clock
    pub sprayer_interval_ms: f32,
    /// Fixed horizontal speed of the sprayer, unaffected by difficulty
    pub sprayer_speed: f32,
    /// Points per destroyed enemy
    pub score_per_enemy: u32,
    /// Score span of one level
    pub points_per_level: u32,
    pub starting_lives: u32,
    /// Weighted pool for the standard spawn clock
    pub standard_pool: Vec<Archetype>,
    /// The independent-clock traversing archetype
    pub sprayer: Archetype,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            base_enemy_speed: 30.0,
            speed_per_level: 3.0,
            base_spawn_interval_ms: 4000.0,
            spawn_decrement_per_level_ms: 500.0,
            min_spawn_interval_ms: 500.0,
            penalty_increment: 5.0,
            shot_speed: 400.0,
            retaliation_bullet_speed: 150.0,
            spray_bullet_speed: 300.0,
            spray_bullet_count: 12,
            sprayer_interval_ms: 30_000.0,
            sprayer_speed: 50.0,
            score_per_enemy: 10,
            points_per_level: 100,
            starting_lives: 3,
            standard_pool: vec![
                Archetype {
                    name: "green".into(),
                    color: 0x00ff00,
                    spawn_weight: 3.0,
                    tier_offset: 0,
                    effect: EffectKind::Destroy,
                },
                Archetype {
                    name: "red".into(),
                    color: 0xff0000,
                    spawn_weight: 1.0,
                    tier_offset: 1,
                    effect: EffectKind::ShootAndDestroy,
                },
            ],
            sprayer: Archetype {
                name: "sprayer".into(),
                color: 0x9932cc,
                spawn_weight: 0.0,
                tier_offset: 2,
                effect: EffectKind::SprayAndDestroy,
            },
        }
    }
}

impl Tuning {
    /// Load balance overrides from a JSON file, falling back to defaults
    /// when the file is absent or malformed.
    pub fn load_or_default(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("loaded tuning overrides from {}", path.display());
                    tuning
                }
                Err(err) => {
                    log::warn!("ignoring malformed tuning file {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}
