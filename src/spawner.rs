use log::debug;
use rand::Rng;

use crate::constants::*;
use crate::entities::{Enemy, Group, PowerUp};
use crate::types::Vector2D;

/// What a single spawn pass produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SpawnReport {
    pub enemies: usize,
    pub powerups: usize,
}

/// Spawn point above the visible area: centre x anywhere across the
/// playfield, centre y in `[SPAWN_MIN_Y, SPAWN_MAX_Y]`.
fn spawn_point(rng: &mut impl Rng) -> Vector2D {
    let x = rng.gen_range(0..=SCREEN_WIDTH as i64);
    let y = rng.gen_range(SPAWN_MIN_Y..=SPAWN_MAX_Y);
    Vector2D::new(x as f64, y as f64)
}

pub fn enemy_roll_hits(roll: u32, level: u32) -> bool {
    roll < ENEMY_SPAWN_BASE_ODDS + level
}

pub fn powerup_roll_hits(roll: u32) -> bool {
    roll < POWERUP_SPAWN_ODDS
}

/// One enemy spawn check. The speed is drawn once here and never changes.
pub fn roll_enemy(level: u32, rng: &mut impl Rng) -> Option<Enemy> {
    let roll = rng.gen_range(1..=ENEMY_SPAWN_ROLL);
    if !enemy_roll_hits(roll, level) {
        return None;
    }
    let level = level as i64;
    let speed = rng.gen_range(ENEMY_MIN_SPEED + level..=ENEMY_MAX_SPEED + level);
    Some(Enemy::new(spawn_point(rng), speed as f64))
}

/// One power-up spawn check, independent of the enemy roll.
pub fn roll_powerup(rng: &mut impl Rng) -> Option<PowerUp> {
    let roll = rng.gen_range(1..=POWERUP_SPAWN_ROLL);
    if !powerup_roll_hits(roll) {
        return None;
    }
    Some(PowerUp::new(spawn_point(rng)))
}

/// Runs both spawn checks for this tick and appends what they produce.
/// Rolls always happen; a hit is dropped while its collection is full.
pub fn spawn(
    level: u32,
    rng: &mut impl Rng,
    enemies: &mut Group<Enemy>,
    powerups: &mut Group<PowerUp>,
) -> SpawnReport {
    let mut report = SpawnReport::default();

    if let Some(enemy) = roll_enemy(level, rng) {
        if enemies.len() < MAX_ENEMIES {
            debug!("Spawned enemy at ({}, {}) speed {}", enemy.position.x, enemy.position.y, enemy.speed);
            enemies.push(enemy);
            report.enemies += 1;
        }
    }

    if let Some(powerup) = roll_powerup(rng) {
        if powerups.len() < MAX_POWERUPS {
            debug!("Spawned power-up at ({}, {})", powerup.position.x, powerup.position.y);
            powerups.push(powerup);
            report.powerups += 1;
        }
    }

    report
}
