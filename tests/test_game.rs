use rand::rngs::StdRng;
use rand::SeedableRng;

use space_shooter::assets::AssetBundle;
use space_shooter::audio::AudioSink;
use space_shooter::collision::GameEvent;
use space_shooter::constants::*;
use space_shooter::entities::{Enemy, Entity};
use space_shooter::game::{Clock, Game};
use space_shooter::rendering::{OutputTarget, ScreenBuffer, TerminalCanvas};
use space_shooter::state::SessionState;
use space_shooter::terminal_io::{InputEvent, SimulatedInput};
use space_shooter::types::Vector2D;

#[derive(Default)]
struct RecordingAudio {
    played: Vec<GameEvent>,
}

impl AudioSink for RecordingAudio {
    fn play(&mut self, cue: GameEvent) {
        self.played.push(cue);
    }
}

type TestGame = Game<SimulatedInput, TerminalCanvas, RecordingAudio>;

fn make_game(input: SimulatedInput, max_frames: Option<u64>) -> TestGame {
    let canvas = TerminalCanvas::new(80, 24, OutputTarget::ScreenBuffer(ScreenBuffer::new(80, 24)));
    Game::new(
        input,
        canvas,
        RecordingAudio::default(),
        AssetBundle::placeholders(),
        StdRng::seed_from_u64(99),
        Clock::frames(),
        max_frames,
    )
}

fn park_enemy_on_player(game: &mut TestGame) {
    let ship = game.session().player.bounds();
    let center = Vector2D::new(ship.center_x(), ship.top() + ship.height / 2.0);
    game.session_mut().enemies.push(Enemy::new(center, 0.0));
}

fn screen(game: &TestGame) -> &ScreenBuffer {
    game.canvas().screen().expect("debug canvas")
}

#[test]
fn quit_key_ends_the_run() {
    let input = SimulatedInput::new().press(2, InputEvent::Fire).press(5, InputEvent::Quit);
    let mut game = make_game(input, None);

    assert_eq!(game.run().unwrap(), SessionState::Quit);
    assert_eq!(game.frame(), 6);
    assert_eq!(game.audio().played, vec![GameEvent::Shoot]);
    assert!(screen(&game).row(0).contains("Score: 0"));
    assert!(screen(&game).row(1).contains("Level: 1"));
}

#[test]
fn collision_shows_game_over_screen() {
    let input = SimulatedInput::new().press(3, InputEvent::Quit);
    let mut game = make_game(input, None);
    park_enemy_on_player(&mut game);

    assert_eq!(game.run().unwrap(), SessionState::Quit);
    assert!(!game.session().player.is_alive());
    assert!(screen(&game).contains("Game Over"));
    assert!(screen(&game).contains("Score: 0"));
    assert!(screen(&game).contains("Press 'r' to restart or 'q' to quit"));
}

#[test]
fn fire_is_ignored_on_game_over_screen() {
    let input = SimulatedInput::new().press(2, InputEvent::Fire).press(4, InputEvent::Quit);
    let mut game = make_game(input, None);
    park_enemy_on_player(&mut game);

    game.run().unwrap();
    assert!(game.audio().played.is_empty());
    assert!(game.session().bullets.is_empty());
}

#[test]
fn restart_starts_a_fresh_session() {
    let input = SimulatedInput::new().press(3, InputEvent::Restart).press(8, InputEvent::Quit);
    let mut game = make_game(input, None);
    park_enemy_on_player(&mut game);

    assert_eq!(game.run().unwrap(), SessionState::Quit);

    let session = game.session();
    assert!(session.player.is_alive());
    assert_eq!(session.score(), 0);
    assert_eq!(session.level(), 1);
    assert!(session.enemies.iter().all(|e| e.speed > 0.0), "parked enemy was cleared");
    assert!(!screen(&game).contains("Game Over"));
}

#[test]
fn frame_limit_stops_the_run() {
    let input = SimulatedInput::new().hold_left(0..1_000);
    let mut game = make_game(input, Some(30));
    let start_x = game.session().player.position.x;

    assert_eq!(game.run().unwrap(), SessionState::Quit);
    assert_eq!(game.frame(), 30);
    assert_eq!(game.session().player.position.x, start_x - 30.0 * PLAYER_SPEED);
}

fn shielded_run(max_frames: u64) -> TestGame {
    let input = SimulatedInput::new().hold_left(0..1000);
    let mut game = make_game(input, Some(max_frames));
    game.session_mut().powerups.clear();
    game.session_mut().player.activate_shield(0);
    assert_eq!(game.run().unwrap(), SessionState::Quit);
    game
}

#[test]
fn frame_clock_drives_shield_expiry() {
    // Frame 300 is 5000 ms in: the shield is still up on that tick and drops on the next.
    let boundary = SHIELD_DURATION_MS * TICKS_PER_SECOND / 1000;

    let game = shielded_run(boundary + 1);
    let player = &game.session().player;
    assert_eq!(player.shield_started_at, 0);
    assert!(player.shield);

    let game = shielded_run(boundary + 2);
    let player = &game.session().player;
    assert_eq!(player.shield_started_at, 0);
    assert!(!player.shield);
}
