use std::io;
use std::time::{Duration, Instant};

use log::info;
use rand::rngs::StdRng;

use crate::assets::AssetBundle;
use crate::audio::AudioSink;
use crate::constants::*;
use crate::entities::SpriteId;
use crate::rendering::Canvas;
use crate::session::Session;
use crate::state::{GameOverChoice, LoopResult, SessionState, Transition};
use crate::terminal_io::{InputEvent, InputSource};

const TICK: Duration = Duration::from_micros(1_000_000 / TICKS_PER_SECOND);

/// Milliseconds since the current session started.
pub enum Clock {
    /// Real time; the frame driver also throttles to the tick rate.
    Wall { started: Instant },
    /// Derived from the frame counter so scripted runs are reproducible.
    Frames { started: u64 },
}

impl Clock {
    pub fn wall() -> Self {
        Clock::Wall { started: Instant::now() }
    }

    pub fn frames() -> Self {
        Clock::Frames { started: 0 }
    }

    pub fn restart(&mut self, frame: u64) {
        match self {
            Clock::Wall { started } => *started = Instant::now(),
            Clock::Frames { started } => *started = frame,
        }
    }

    pub fn now_ms(&self, frame: u64) -> u64 {
        match self {
            Clock::Wall { started } => started.elapsed().as_millis() as u64,
            Clock::Frames { started } => frame.saturating_sub(*started) * 1000 / TICKS_PER_SECOND,
        }
    }

    fn throttles(&self) -> bool {
        matches!(self, Clock::Wall { .. })
    }
}

/// The frame driver: owns the session and every collaborator, and runs the
/// RUNNING / GAME_OVER / QUIT state machine.
pub struct Game<I, C, A> {
    input: I,
    canvas: C,
    audio: A,
    assets: AssetBundle,
    rng: StdRng,
    clock: Clock,
    max_frames: Option<u64>,
    session: Session,
    frame: u64,
}

impl<I: InputSource, C: Canvas, A: AudioSink> Game<I, C, A> {
    pub fn new(
        input: I,
        canvas: C,
        audio: A,
        assets: AssetBundle,
        rng: StdRng,
        clock: Clock,
        max_frames: Option<u64>,
    ) -> Self {
        Game {
            input,
            canvas,
            audio,
            assets,
            rng,
            clock,
            max_frames,
            session: Session::new(),
            frame: 0,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Runs sessions until the player quits. Returns the final state.
    pub fn run(&mut self) -> io::Result<SessionState> {
        let mut state = SessionState::Running;
        info!("Starting session");

        while !state.is_terminal() {
            let transition = match state {
                SessionState::Running => Transition::Loop(self.run_session()?),
                SessionState::GameOver => Transition::Choice(self.game_over_screen()?),
                SessionState::Quit => break,
            };
            let next = state.next(transition);
            info!("State {:?} -> {:?}", state, next);
            if state == SessionState::GameOver && next == SessionState::Running {
                self.session.restart();
            }
            state = next;
        }

        info!("Quitting after {} frames with score {}", self.frame, self.session.score());
        Ok(state)
    }

    fn frame_limit_reached(&self) -> bool {
        self.max_frames.is_some_and(|max| self.frame >= max)
    }

    fn out_of_input(&self) -> bool {
        if self.frame_limit_reached() {
            info!("Frame limit reached");
            return true;
        }
        if self.input.is_finished(self.frame) {
            info!("Input script finished");
            return true;
        }
        false
    }

    /// One session's frame loop.
    pub fn run_session(&mut self) -> io::Result<LoopResult> {
        self.clock.restart(self.frame);

        loop {
            let tick_start = Instant::now();
            if self.out_of_input() {
                return Ok(LoopResult::Quit);
            }

            let events = self.input.poll(self.frame)?;
            let held = self.input.held(self.frame);
            let now_ms = self.clock.now_ms(self.frame);
            let outcome = self.session.tick(&events, held, now_ms, &mut self.rng);
            self.frame += 1;

            for cue in outcome.events {
                self.audio.play(cue);
            }
            if let Some(result) = outcome.result {
                return Ok(result);
            }

            self.draw_frame()?;
            self.throttle(tick_start);
        }
    }

    fn draw_frame(&mut self) -> io::Result<()> {
        let background = self.assets.sprite(SpriteId::Background);
        self.canvas.draw_background(&background);

        for (id, rect) in self.session.sprites() {
            let sprite = self.assets.sprite(id);
            self.canvas.blit(&sprite, rect);
        }

        let score = format!("Score: {}", self.session.score());
        self.canvas.draw_text(&score, SCORE_TEXT_X, SCORE_TEXT_Y);
        let level = format!("Level: {}", self.session.level());
        self.canvas.draw_text(&level, SCORE_TEXT_X, SCORE_TEXT_Y + 30.0);

        self.canvas.present()
    }

    fn draw_game_over(&mut self) -> io::Result<()> {
        let background = self.assets.sprite(SpriteId::Background);
        self.canvas.draw_background(&background);

        let middle = SCREEN_HEIGHT / 2.0;
        self.canvas.draw_centered_text("Game Over", middle - 50.0);
        self.canvas.draw_centered_text(&format!("Score: {}", self.session.score()), middle);
        self.canvas.draw_centered_text("Press 'r' to restart or 'q' to quit", middle + 50.0);

        self.canvas.present()
    }

    /// Waits for restart or quit.
    pub fn game_over_screen(&mut self) -> io::Result<GameOverChoice> {
        self.draw_game_over()?;

        loop {
            let tick_start = Instant::now();
            if self.out_of_input() {
                return Ok(GameOverChoice::Quit);
            }

            let events = self.input.poll(self.frame)?;
            self.frame += 1;
            for event in events {
                match event {
                    InputEvent::Restart => return Ok(GameOverChoice::Restart),
                    InputEvent::Quit => return Ok(GameOverChoice::Quit),
                    InputEvent::Fire => {}
                }
            }

            self.throttle(tick_start);
        }
    }

    fn throttle(&self, tick_start: Instant) {
        if !self.clock.throttles() {
            return;
        }
        let elapsed = tick_start.elapsed();
        if elapsed < TICK {
            std::thread::sleep(TICK - elapsed);
        }
    }
}
