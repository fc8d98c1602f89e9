// --- Playfield ---
pub const SCREEN_WIDTH: f64 = 800.0;
pub const SCREEN_HEIGHT: f64 = 600.0;

pub const TICKS_PER_SECOND: u64 = 60;

// --- Player ---
pub const PLAYER_WIDTH: f64 = 50.0;
pub const PLAYER_HEIGHT: f64 = 40.0;
pub const PLAYER_SPEED: f64 = 5.0;
pub const PLAYER_BOTTOM_OFFSET: f64 = 50.0; // Distance from the bottom edge to the ship's centre
pub const SHIELD_DURATION_MS: u64 = 5000;

// --- Enemy ---
pub const ENEMY_WIDTH: f64 = 30.0;
pub const ENEMY_HEIGHT: f64 = 30.0;
pub const ENEMY_MIN_SPEED: i64 = 1; // Added to level
pub const ENEMY_MAX_SPEED: i64 = 3; // Added to level

// --- Bullet ---
pub const BULLET_WIDTH: f64 = 5.0;
pub const BULLET_HEIGHT: f64 = 10.0;
pub const BULLET_SPEED: f64 = 10.0;

// --- Power-up ---
pub const POWERUP_WIDTH: f64 = 20.0;
pub const POWERUP_HEIGHT: f64 = 20.0;
pub const POWERUP_SPEED: f64 = 2.0;

// --- Spawning ---
pub const SPAWN_MIN_Y: i64 = -100;
pub const SPAWN_MAX_Y: i64 = -40;
pub const ENEMY_SPAWN_ROLL: u32 = 100;
pub const ENEMY_SPAWN_BASE_ODDS: u32 = 5; // Spawn when roll < base + level
pub const POWERUP_SPAWN_ROLL: u32 = 1000;
pub const POWERUP_SPAWN_ODDS: u32 = 2;
pub const MAX_ENEMIES: usize = 64;
pub const MAX_POWERUPS: usize = 8;

// --- Scoring ---
pub const SCORE_PER_ENEMY: u32 = 10;
pub const INITIAL_LEVEL: u32 = 1;
pub const INITIAL_LEVEL_UP_SCORE: u32 = 50;

// --- Overlay ---
pub const SCORE_TEXT_X: f64 = 10.0;
pub const SCORE_TEXT_Y: f64 = 10.0;

// --- Input ---
pub const HOLD_WINDOW_FRAMES: u64 = 4; // Arrow key counts as held this many frames after its last press
