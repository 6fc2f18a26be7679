//! Numfall - an arithmetic-practice arcade core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, difficulty, answer dispatch)
//! - `problems`: The problem-source collaborator boundary and a built-in generator
//! - `tuning`: Data-driven game balance
//! - `settings`: Persisted run configuration

pub mod problems;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use problems::{ArithmeticSource, Category, Problem, ProblemSource};
pub use settings::Settings;
pub use tuning::Tuning;

/// Fixed playfield geometry
pub mod consts {
    /// Playfield dimensions (y grows downward, enemies descend toward y = FIELD_HEIGHT)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Enemy bounding box
    pub const ENEMY_WIDTH: f32 = 100.0;
    pub const ENEMY_HEIGHT: f32 = 50.0;

    /// The turret sits near the bottom edge
    pub const GUN_X: f32 = 400.0;
    pub const GUN_Y: f32 = 550.0;
    pub const GUN_SIZE: f32 = 80.0;
    /// Shots leave from just above the turret body
    pub const SHOT_SPAWN_OFFSET: f32 = 40.0;

    /// Projectile radii
    pub const SHOT_RADIUS: f32 = 8.0;
    pub const BULLET_RADIUS: f32 = 5.0;

    /// The fixed fan of turret shot directions (normalized at fire time)
    pub const GUN_FAN: [(f32, f32); 6] = [
        (-1.0, -1.0),
        (1.0, -1.0),
        (-0.5, -1.0),
        (0.5, -1.0),
        (-1.0, 0.0),
        (1.0, 0.0),
    ];

    /// Horizontal spawn height for traversing archetypes
    pub const TRAVERSER_Y: f32 = 75.0;
}
