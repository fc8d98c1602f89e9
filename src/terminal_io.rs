use std::collections::HashMap;
use std::io;
use std::ops::Range;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use log::error;

use crate::constants::HOLD_WINDOW_FRAMES;
use crate::entities::HeldKeys;

/// Discrete key-down actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    Fire,
    Restart,
    Quit,
}

/// Maps a key press to its discrete action. Esc and Ctrl-C stand in for
/// closing the window.
pub fn map_key(code: KeyCode, modifiers: KeyModifiers) -> Option<InputEvent> {
    match code {
        KeyCode::Char(' ') => Some(InputEvent::Fire),
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Some(InputEvent::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(InputEvent::Restart),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(InputEvent::Quit),
        _ => None,
    }
}

pub trait InputSource {
    /// Drains every event that arrived since the previous call.
    fn poll(&mut self, frame: u64) -> io::Result<Vec<InputEvent>>;

    /// Arrow keys held on `frame`.
    fn held(&self, frame: u64) -> HeldKeys;

    /// True once a scripted source has nothing left to say.
    fn is_finished(&self, _frame: u64) -> bool {
        false
    }
}

// --- Real terminal input ---
/// Terminals cannot be asked which keys are down, so each arrow key counts as
/// held for `HOLD_WINDOW_FRAMES` after its last press or repeat, or until a
/// release event arrives on terminals that report them.
#[derive(Default)]
pub struct TerminalInput {
    key_frame: HashMap<KeyCode, u64>,
}

impl TerminalInput {
    pub fn new() -> Self {
        TerminalInput { key_frame: HashMap::new() }
    }

    fn is_held(&self, key: KeyCode, frame: u64) -> bool {
        self.key_frame
            .get(&key)
            .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW_FRAMES)
            .unwrap_or(false)
    }
}

impl InputSource for TerminalInput {
    fn poll(&mut self, frame: u64) -> io::Result<Vec<InputEvent>> {
        let mut events = Vec::new();
        while event::poll(Duration::ZERO).map_err(|e| { error!("Failed to poll event: {}", e); e })? {
            let Event::Key(key) = event::read().map_err(|e| { error!("Failed to read event: {}", e); e })? else {
                continue;
            };
            match key.kind {
                KeyEventKind::Press => {
                    self.key_frame.insert(key.code, frame);
                    if let Some(action) = map_key(key.code, key.modifiers) {
                        events.push(action);
                    }
                }
                KeyEventKind::Repeat => {
                    self.key_frame.insert(key.code, frame);
                }
                KeyEventKind::Release => {
                    self.key_frame.remove(&key.code);
                }
            }
        }
        Ok(events)
    }

    fn held(&self, frame: u64) -> HeldKeys {
        HeldKeys {
            left: self.is_held(KeyCode::Left, frame),
            right: self.is_held(KeyCode::Right, frame),
        }
    }
}

// --- SimulatedInput for debugging ---
#[derive(Default)]
pub struct SimulatedInput {
    events: HashMap<u64, Vec<InputEvent>>,
    left: Vec<Range<u64>>,
    right: Vec<Range<u64>>,
}

impl SimulatedInput {
    pub fn new() -> Self {
        SimulatedInput::default()
    }

    pub fn press(mut self, frame: u64, event: InputEvent) -> Self {
        self.events.entry(frame).or_default().push(event);
        self
    }

    pub fn hold_left(mut self, frames: Range<u64>) -> Self {
        self.left.push(frames);
        self
    }

    pub fn hold_right(mut self, frames: Range<u64>) -> Self {
        self.right.push(frames);
        self
    }

    /// Script used by `--debug`: strafe, shoot a few volleys, then quit.
    pub fn demo() -> Self {
        let mut input = SimulatedInput::new()
            .hold_left(10..70)
            .hold_right(120..240)
            .press(900, InputEvent::Quit);
        for frame in (20..880).step_by(15) {
            input = input.press(frame, InputEvent::Fire);
        }
        input
    }

    fn last_frame(&self) -> u64 {
        let ranges = self.left.iter().chain(self.right.iter()).map(|r| r.end);
        self.events.keys().copied().chain(ranges).max().unwrap_or(0)
    }
}

impl InputSource for SimulatedInput {
    fn poll(&mut self, frame: u64) -> io::Result<Vec<InputEvent>> {
        Ok(self.events.remove(&frame).unwrap_or_default())
    }

    fn held(&self, frame: u64) -> HeldKeys {
        HeldKeys {
            left: self.left.iter().any(|r| r.contains(&frame)),
            right: self.right.iter().any(|r| r.contains(&frame)),
        }
    }

    fn is_finished(&self, frame: u64) -> bool {
        self.events.is_empty() && frame >= self.last_frame()
    }
}
