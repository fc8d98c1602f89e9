use crate::constants::*;
use crate::types::{clamp_span, Rect, Vector2D};

/// Arrow keys currently held down.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeldKeys {
    pub left: bool,
    pub right: bool,
}

/// Everything an entity may look at while it updates.
#[derive(Clone, Copy, Debug, Default)]
pub struct TickContext {
    pub held: HeldKeys,
    pub now_ms: u64,
}

/// Image handle an entity asks the renderer to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpriteId {
    Player,
    ShieldedPlayer,
    Enemy,
    Bullet,
    PowerUp,
    Background,
}

/// Capability shared by every moving body on the playfield.
pub trait Entity {
    fn update(&mut self, ctx: &TickContext);
    fn bounds(&self) -> Rect;
    fn is_alive(&self) -> bool;
    fn sprite(&self) -> SpriteId;
}

// --- Player ---
#[derive(Clone, Debug)]
pub struct Player {
    pub position: Vector2D, // Top-left corner
    pub speed: f64,
    pub shield: bool,
    pub shield_started_at: u64,
    alive: bool,
}

impl Player {
    pub fn new() -> Self {
        let center = Vector2D::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT - PLAYER_BOTTOM_OFFSET);
        let rect = Rect::centered(center, PLAYER_WIDTH, PLAYER_HEIGHT);
        Player {
            position: Vector2D::new(rect.x, rect.y),
            speed: PLAYER_SPEED,
            shield: false,
            shield_started_at: 0,
            alive: true,
        }
    }

    pub fn activate_shield(&mut self, now_ms: u64) {
        self.shield = true;
        self.shield_started_at = now_ms;
    }

    /// Top-centre of the ship, where bullets leave from.
    pub fn muzzle(&self) -> Vector2D {
        let rect = self.bounds();
        Vector2D::new(rect.center_x(), rect.top())
    }

    pub fn destroy(&mut self) {
        self.alive = false;
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for Player {
    fn update(&mut self, ctx: &TickContext) {
        if self.shield && ctx.now_ms.saturating_sub(self.shield_started_at) > SHIELD_DURATION_MS {
            self.shield = false;
        }

        if ctx.held.left {
            self.position.x -= self.speed;
        }
        if ctx.held.right {
            self.position.x += self.speed;
        }

        self.position.x = clamp_span(self.position.x, PLAYER_WIDTH, SCREEN_WIDTH);
    }

    fn bounds(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, PLAYER_WIDTH, PLAYER_HEIGHT)
    }

    fn is_alive(&self) -> bool {
        self.alive
    }

    fn sprite(&self) -> SpriteId {
        if self.shield {
            SpriteId::ShieldedPlayer
        } else {
            SpriteId::Player
        }
    }
}

// --- Enemy ---
#[derive(Clone, Debug)]
pub struct Enemy {
    pub position: Vector2D,
    pub speed: f64, // Fixed at spawn
    alive: bool,
}

impl Enemy {
    pub fn new(center: Vector2D, speed: f64) -> Self {
        let rect = Rect::centered(center, ENEMY_WIDTH, ENEMY_HEIGHT);
        Enemy { position: Vector2D::new(rect.x, rect.y), speed, alive: true }
    }

    pub fn kill(&mut self) {
        self.alive = false;
    }
}

impl Entity for Enemy {
    fn update(&mut self, _ctx: &TickContext) {
        self.position = self.position.add(Vector2D::new(0.0, self.speed));
        if self.position.y > SCREEN_HEIGHT {
            self.alive = false;
        }
    }

    fn bounds(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, ENEMY_WIDTH, ENEMY_HEIGHT)
    }

    fn is_alive(&self) -> bool {
        self.alive
    }

    fn sprite(&self) -> SpriteId {
        SpriteId::Enemy
    }
}

// --- Bullet ---
#[derive(Clone, Debug)]
pub struct Bullet {
    pub position: Vector2D,
    alive: bool,
}

impl Bullet {
    pub fn new(center: Vector2D) -> Self {
        let rect = Rect::centered(center, BULLET_WIDTH, BULLET_HEIGHT);
        Bullet { position: Vector2D::new(rect.x, rect.y), alive: true }
    }

    pub fn kill(&mut self) {
        self.alive = false;
    }
}

impl Entity for Bullet {
    fn update(&mut self, _ctx: &TickContext) {
        self.position = self.position.add(Vector2D::new(0.0, -BULLET_SPEED));
        if self.bounds().bottom() < 0.0 {
            self.alive = false;
        }
    }

    fn bounds(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, BULLET_WIDTH, BULLET_HEIGHT)
    }

    fn is_alive(&self) -> bool {
        self.alive
    }

    fn sprite(&self) -> SpriteId {
        SpriteId::Bullet
    }
}

// --- PowerUp ---
#[derive(Clone, Debug)]
pub struct PowerUp {
    pub position: Vector2D,
    alive: bool,
}

impl PowerUp {
    pub fn new(center: Vector2D) -> Self {
        let rect = Rect::centered(center, POWERUP_WIDTH, POWERUP_HEIGHT);
        PowerUp { position: Vector2D::new(rect.x, rect.y), alive: true }
    }

    pub fn collect(&mut self) {
        self.alive = false;
    }
}

impl Entity for PowerUp {
    fn update(&mut self, _ctx: &TickContext) {
        self.position = self.position.add(Vector2D::new(0.0, POWERUP_SPEED));
        if self.position.y > SCREEN_HEIGHT {
            self.alive = false;
        }
    }

    fn bounds(&self) -> Rect {
        Rect::new(self.position.x, self.position.y, POWERUP_WIDTH, POWERUP_HEIGHT)
    }

    fn is_alive(&self) -> bool {
        self.alive
    }

    fn sprite(&self) -> SpriteId {
        SpriteId::PowerUp
    }
}

/// Owned collection of one entity kind. Dead members are dropped by `prune`
/// and are never updated again.
#[derive(Clone, Debug)]
pub struct Group<T> {
    members: Vec<T>,
}

impl<T: Entity> Group<T> {
    pub fn new() -> Self {
        Group { members: Vec::new() }
    }

    pub fn push(&mut self, member: T) {
        self.members.push(member);
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn clear(&mut self) {
        self.members.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.members.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.members.iter_mut()
    }

    /// Moves every live member one tick, then drops the ones that left the
    /// playfield. Returns how many were dropped.
    pub fn update(&mut self, ctx: &TickContext) -> usize {
        for member in self.members.iter_mut().filter(|m| m.is_alive()) {
            member.update(ctx);
        }
        self.prune()
    }

    pub fn prune(&mut self) -> usize {
        let before = self.members.len();
        self.members.retain(|m| m.is_alive());
        before - self.members.len()
    }

    pub fn sprites(&self) -> impl Iterator<Item = (SpriteId, Rect)> + '_ {
        self.members.iter().map(|m| (m.sprite(), m.bounds()))
    }
}

impl<T: Entity> Default for Group<T> {
    fn default() -> Self {
        Self::new()
    }
}
