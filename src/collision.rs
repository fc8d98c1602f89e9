use log::debug;

use crate::entities::{Bullet, Enemy, Entity, Group, Player, PowerUp};

/// Side effects the frame driver turns into sound cues.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Shoot,
    Explosion,
    PowerUpCollected,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CollisionReport {
    pub powerups_collected: u32,
    pub enemies_shot: u32,
    pub enemies_absorbed: u32,
    pub player_destroyed: bool,
    pub events: Vec<GameEvent>,
}

/// Resolves this tick's overlaps in a fixed order: power-ups, then bullets
/// against enemies, then the player against enemies.
pub fn resolve(
    player: &mut Player,
    enemies: &mut Group<Enemy>,
    bullets: &mut Group<Bullet>,
    powerups: &mut Group<PowerUp>,
    now_ms: u64,
) -> CollisionReport {
    let mut report = CollisionReport::default();

    collect_powerups(player, powerups, now_ms, &mut report);
    shoot_enemies(bullets, enemies, &mut report);
    ram_enemies(player, enemies, &mut report);

    report
}

fn collect_powerups(player: &mut Player, powerups: &mut Group<PowerUp>, now_ms: u64, report: &mut CollisionReport) {
    let ship = player.bounds();
    for powerup in powerups.iter_mut().filter(|p| p.is_alive()) {
        if ship.intersects(&powerup.bounds()) {
            powerup.collect();
            player.activate_shield(now_ms);
            report.powerups_collected += 1;
            report.events.push(GameEvent::PowerUpCollected);
        }
    }
    powerups.prune();
}

// A bullet destroys every live enemy it overlaps. Killed enemies drop out for
// later bullets, so an enemy hit by several bullets is only scored once.
fn shoot_enemies(bullets: &mut Group<Bullet>, enemies: &mut Group<Enemy>, report: &mut CollisionReport) {
    for bullet in bullets.iter_mut().filter(|b| b.is_alive()) {
        let shot = bullet.bounds();
        let mut hits = 0;
        for enemy in enemies.iter_mut().filter(|e| e.is_alive() && shot.intersects(&e.bounds())) {
            enemy.kill();
            hits += 1;
            report.events.push(GameEvent::Explosion);
        }
        if hits > 0 {
            bullet.kill();
            report.enemies_shot += hits;
        }
    }
    bullets.prune();
    enemies.prune();
}

fn ram_enemies(player: &mut Player, enemies: &mut Group<Enemy>, report: &mut CollisionReport) {
    let ship = player.bounds();
    if !player.shield {
        if enemies.iter().any(|e| ship.intersects(&e.bounds())) {
            player.destroy();
            report.player_destroyed = true;
        }
        return;
    }

    for enemy in enemies.iter_mut().filter(|e| ship.intersects(&e.bounds())) {
        enemy.kill();
        report.enemies_absorbed += 1;
    }
    if report.enemies_absorbed > 0 {
        debug!("Shield absorbed {} enemies", report.enemies_absorbed);
    }
    enemies.prune();
}
