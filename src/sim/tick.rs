//! Frame-stepped simulation advance
//!
//! One `tick` per animation frame. Spawn cadence is an explicit logical
//! clock checked at the start of the tick; velocities are units/second and
//! displacement scales with the elapsed time since the previous tick.

use super::collision::{nearest_face_normal, outside_field, point_in_rect, reflect_velocity};
use super::state::Simulation;
use crate::consts::*;
use glam::Vec2;

impl Simulation {
    /// Advance the run by `elapsed_ms`. No-op once the run is over.
    ///
    /// Side-effect order per tick: spawn clocks, position advance, boundary
    /// checks, collision resolution, prune. The order is load-bearing for
    /// deterministic score/collision outcomes.
    pub fn tick(&mut self, elapsed_ms: f32) {
        if self.run.game_over {
            return;
        }
        let dt = elapsed_ms / 1000.0;

        // 1. Spawn clocks. The sprayer runs on its own longer fixed-period
        //    clock, independent of the escalating standard cadence.
        self.ms_since_spawn += elapsed_ms;
        if self.ms_since_spawn >= self.difficulty.spawn_interval_ms {
            self.ms_since_spawn = 0.0;
            self.spawn_standard();
        }
        self.ms_since_sprayer += elapsed_ms;
        if self.ms_since_sprayer >= self.tuning.sprayer_interval_ms {
            self.ms_since_sprayer = 0.0;
            self.spawn_sprayer();
        }

        // 2. Advance positions
        for enemy in &mut self.enemies {
            enemy.pos += enemy.vel * dt;
        }
        for shot in &mut self.shots {
            shot.pos += shot.vel * dt;
        }
        for bullet in &mut self.bullets {
            bullet.pos += bullet.vel * dt;
        }

        // 3. Boundary checks
        self.apply_boundaries();

        // 4. Collision resolution
        self.resolve_collisions();

        // 5. Prune dead entities, backfilling an empty field
        self.prune_and_backfill();
    }

    /// Threat enemies crossing the bottom edge cost a life; everything else
    /// leaving the playfield is removed without side effect.
    fn apply_boundaries(&mut self) {
        let mut breaches = 0u32;
        for enemy in &mut self.enemies {
            if !enemy.alive {
                continue;
            }
            if enemy.is_threat {
                if enemy.pos.y > FIELD_HEIGHT {
                    enemy.alive = false;
                    breaches += 1;
                }
            } else if outside_field(enemy.pos, enemy.half.x.max(enemy.half.y)) {
                enemy.alive = false;
            }
        }
        for _ in 0..breaches {
            self.lose_life();
        }

        for shot in &mut self.shots {
            if shot.alive && outside_field(shot.pos, shot.radius) {
                shot.alive = false;
            }
        }
        for bullet in &mut self.bullets {
            if bullet.alive && outside_field(bullet.pos, bullet.radius) {
                bullet.alive = false;
            }
        }
    }

    /// Point-in-rect containment passes.
    ///
    /// For each projectile the first enemy in iteration order whose box
    /// contains its center wins; remaining candidates are unaffected by that
    /// projectile. A hit on an already-dead enemy still consumes the
    /// projectile but triggers nothing (destruction is idempotent).
    fn resolve_collisions(&mut self) {
        // Turret shots vs enemies
        for si in 0..self.shots.len() {
            if !self.shots[si].alive {
                continue;
            }
            let center = self.shots[si].pos;
            let Some(ei) = self
                .enemies
                .iter()
                .position(|e| point_in_rect(center, e.pos, e.half))
            else {
                continue;
            };
            self.shots[si].alive = false;
            let id = self.enemies[ei].id;
            let effect = self.enemies[ei].effect;
            effect.execute(self, id);
        }

        // Enemy bullets vs the gun, then vs enemies. Bullets spawned by
        // effects during this pass wait until the next tick.
        let gun_pos = Vec2::new(GUN_X, GUN_Y);
        let gun_half = Vec2::splat(GUN_SIZE / 2.0);
        let live_bullets = self.bullets.len();
        for bi in 0..live_bullets {
            if !self.bullets[bi].alive {
                continue;
            }
            let center = self.bullets[bi].pos;

            if point_in_rect(center, gun_pos, gun_half) {
                self.bullets[bi].alive = false;
                self.lose_life();
                continue;
            }

            let Some(ei) = self
                .enemies
                .iter()
                .position(|e| point_in_rect(center, e.pos, e.half))
            else {
                continue;
            };
            let id = self.enemies[ei].id;
            let effect = self.enemies[ei].effect;
            if self.bullets[bi].bounces {
                let normal = nearest_face_normal(center, self.enemies[ei].pos, self.enemies[ei].half);
                self.bullets[bi].vel = reflect_velocity(self.bullets[bi].vel, normal);
            } else {
                self.bullets[bi].alive = false;
            }
            effect.execute(self, id);
        }
    }
}
