use space_shooter::collision::*;
use space_shooter::entities::*;
use space_shooter::types::Vector2D;

struct World {
    player: Player,
    enemies: Group<Enemy>,
    bullets: Group<Bullet>,
    powerups: Group<PowerUp>,
}

impl World {
    fn new() -> Self {
        World { player: Player::new(), enemies: Group::new(), bullets: Group::new(), powerups: Group::new() }
    }

    fn player_center(&self) -> Vector2D {
        let r = self.player.bounds();
        Vector2D::new(r.center_x(), r.top() + r.height / 2.0)
    }

    fn resolve(&mut self, now_ms: u64) -> CollisionReport {
        resolve(&mut self.player, &mut self.enemies, &mut self.bullets, &mut self.powerups, now_ms)
    }
}

// ── Player × PowerUp ──────────────────────────────────────────────────────────

#[test]
fn touching_powerup_grants_shield() {
    let mut w = World::new();
    w.powerups.push(PowerUp::new(w.player_center()));
    w.powerups.push(PowerUp::new(Vector2D::new(50.0, 50.0)));

    let report = w.resolve(1_234);

    assert!(w.player.shield);
    assert_eq!(w.player.shield_started_at, 1_234);
    assert_eq!(report.powerups_collected, 1);
    assert_eq!(report.events, vec![GameEvent::PowerUpCollected]);
    assert_eq!(w.powerups.len(), 1);
}

#[test]
fn each_collected_powerup_emits_an_event() {
    let mut w = World::new();
    let c = w.player_center();
    w.powerups.push(PowerUp::new(c));
    w.powerups.push(PowerUp::new(Vector2D::new(c.x + 10.0, c.y)));

    let report = w.resolve(0);

    assert_eq!(report.powerups_collected, 2);
    assert_eq!(report.events, vec![GameEvent::PowerUpCollected, GameEvent::PowerUpCollected]);
    assert!(w.powerups.is_empty());
}

// ── Bullet × Enemy ────────────────────────────────────────────────────────────

#[test]
fn bullet_and_enemy_destroy_each_other() {
    let mut w = World::new();
    w.enemies.push(Enemy::new(Vector2D::new(100.0, 100.0), 2.0));
    w.bullets.push(Bullet::new(Vector2D::new(100.0, 100.0)));

    let report = w.resolve(0);

    assert_eq!(report.enemies_shot, 1);
    assert_eq!(report.events, vec![GameEvent::Explosion]);
    assert!(w.enemies.is_empty());
    assert!(w.bullets.is_empty());
}

#[test]
fn enemy_hit_by_two_bullets_counts_once() {
    let mut w = World::new();
    w.enemies.push(Enemy::new(Vector2D::new(100.0, 100.0), 2.0));
    w.bullets.push(Bullet::new(Vector2D::new(95.0, 100.0)));
    w.bullets.push(Bullet::new(Vector2D::new(105.0, 100.0)));

    let report = w.resolve(0);

    assert_eq!(report.enemies_shot, 1);
    assert_eq!(report.events.len(), 1);
    assert!(w.enemies.is_empty());
    assert_eq!(w.bullets.len(), 1, "second bullet flies on");
}

#[test]
fn bullet_overlapping_two_enemies_destroys_both() {
    let mut w = World::new();
    w.enemies.push(Enemy::new(Vector2D::new(100.0, 100.0), 2.0));
    w.enemies.push(Enemy::new(Vector2D::new(110.0, 100.0), 2.0));
    w.bullets.push(Bullet::new(Vector2D::new(105.0, 100.0)));

    let report = w.resolve(0);

    assert_eq!(report.enemies_shot, 2);
    assert!(w.enemies.is_empty());
    assert!(w.bullets.is_empty());
    assert_eq!(report.events, vec![GameEvent::Explosion, GameEvent::Explosion]);
}

#[test]
fn missing_bullets_change_nothing() {
    let mut w = World::new();
    w.enemies.push(Enemy::new(Vector2D::new(100.0, 100.0), 2.0));
    w.bullets.push(Bullet::new(Vector2D::new(300.0, 100.0)));

    let report = w.resolve(0);

    assert_eq!(report, CollisionReport::default());
    assert_eq!(w.enemies.len(), 1);
    assert_eq!(w.bullets.len(), 1);
}

// ── Player × Enemy ────────────────────────────────────────────────────────────

#[test]
fn unshielded_player_is_destroyed() {
    let mut w = World::new();
    w.enemies.push(Enemy::new(w.player_center(), 3.0));

    let report = w.resolve(0);

    assert!(report.player_destroyed);
    assert!(!w.player.is_alive());
}

#[test]
fn shield_absorbs_every_touching_enemy() {
    let mut w = World::new();
    let c = w.player_center();
    w.player.activate_shield(0);
    w.enemies.push(Enemy::new(Vector2D::new(c.x - 15.0, c.y), 3.0));
    w.enemies.push(Enemy::new(Vector2D::new(c.x + 15.0, c.y), 3.0));
    w.enemies.push(Enemy::new(Vector2D::new(100.0, 100.0), 3.0));

    let report = w.resolve(100);

    assert!(!report.player_destroyed);
    assert!(w.player.is_alive());
    assert_eq!(report.enemies_absorbed, 2);
    assert_eq!(report.enemies_shot, 0, "absorbed enemies score nothing");
    assert!(report.events.is_empty());
    assert_eq!(w.enemies.len(), 1);
}

#[test]
fn powerup_collected_in_same_tick_protects_the_player() {
    let mut w = World::new();
    let c = w.player_center();
    w.powerups.push(PowerUp::new(c));
    w.enemies.push(Enemy::new(c, 3.0));

    let report = w.resolve(0);

    assert!(!report.player_destroyed);
    assert_eq!(report.enemies_absorbed, 1);
}

#[test]
fn shot_enemy_cannot_also_kill_the_player() {
    let mut w = World::new();
    let c = w.player_center();
    w.enemies.push(Enemy::new(c, 3.0));
    w.bullets.push(Bullet::new(c));

    let report = w.resolve(0);

    assert_eq!(report.enemies_shot, 1);
    assert!(!report.player_destroyed);
}
