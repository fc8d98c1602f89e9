use log::{debug, info};
use rand::Rng;

use crate::collision::{self, GameEvent};
use crate::difficulty::Difficulty;
use crate::entities::{Bullet, Enemy, Entity, Group, HeldKeys, Player, PowerUp, SpriteId, TickContext};
use crate::spawner;
use crate::state::LoopResult;
use crate::terminal_io::InputEvent;
use crate::types::Rect;

/// What one tick produced for the frame driver.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// `Some` when the session's frame loop must stop.
    pub result: Option<LoopResult>,
    pub events: Vec<GameEvent>,
}

/// All state of one play-through. Owned by the frame driver; nothing in here
/// reads a clock, touches the terminal or makes a sound.
#[derive(Clone, Debug)]
pub struct Session {
    pub player: Player,
    pub enemies: Group<Enemy>,
    pub bullets: Group<Bullet>,
    pub powerups: Group<PowerUp>,
    pub difficulty: Difficulty,
}

impl Session {
    pub fn new() -> Self {
        Session {
            player: Player::new(),
            enemies: Group::new(),
            bullets: Group::new(),
            powerups: Group::new(),
            difficulty: Difficulty::new(),
        }
    }

    /// Fresh player, empty collections, initial score/level/threshold.
    pub fn restart(&mut self) {
        self.player = Player::new();
        self.enemies.clear();
        self.bullets.clear();
        self.powerups.clear();
        self.difficulty.reset();
        info!("Session restarted");
    }

    pub fn score(&self) -> u32 {
        self.difficulty.score()
    }

    pub fn level(&self) -> u32 {
        self.difficulty.level()
    }

    pub fn fire(&mut self) {
        self.bullets.push(Bullet::new(self.player.muzzle()));
    }

    /// Advances the session by one tick: input, player, level-up check,
    /// spawns, movement, then collisions.
    pub fn tick(&mut self, input: &[InputEvent], held: HeldKeys, now_ms: u64, rng: &mut impl Rng) -> TickOutcome {
        let mut outcome = TickOutcome::default();

        for event in input {
            match event {
                InputEvent::Quit => {
                    outcome.result = Some(LoopResult::Quit);
                    return outcome;
                }
                InputEvent::Fire => {
                    self.fire();
                    outcome.events.push(GameEvent::Shoot);
                }
                InputEvent::Restart => {}
            }
        }

        let ctx = TickContext { held, now_ms };
        self.player.update(&ctx);

        self.difficulty.check_level_up();

        spawner::spawn(self.difficulty.level(), rng, &mut self.enemies, &mut self.powerups);

        self.enemies.update(&ctx);
        self.bullets.update(&ctx);
        self.powerups.update(&ctx);

        let report = collision::resolve(
            &mut self.player,
            &mut self.enemies,
            &mut self.bullets,
            &mut self.powerups,
            now_ms,
        );
        self.difficulty.enemies_destroyed(report.enemies_shot);
        outcome.events.extend(report.events);

        if report.player_destroyed {
            info!("Player destroyed. Final score {} at level {}", self.score(), self.level());
            outcome.result = Some(LoopResult::GameOver);
        } else if report.enemies_shot > 0 {
            debug!("Score {} after {} hits", self.score(), report.enemies_shot);
        }

        outcome
    }

    /// Draw list for the renderer: the background is implied; this yields the
    /// live entities in draw order.
    pub fn sprites(&self) -> Vec<(SpriteId, Rect)> {
        let mut sprites = Vec::with_capacity(1 + self.enemies.len() + self.bullets.len() + self.powerups.len());
        if self.player.is_alive() {
            sprites.push((self.player.sprite(), self.player.bounds()));
        }
        sprites.extend(self.enemies.sprites());
        sprites.extend(self.bullets.sprites());
        sprites.extend(self.powerups.sprites());
        sprites
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
