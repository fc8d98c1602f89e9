use std::io::{self, Write};

use log::debug;

use crate::assets::{Sound, SoundBank};
use crate::collision::GameEvent;

/// Fire-and-forget sound output.
pub trait AudioSink {
    fn play(&mut self, cue: GameEvent);
}

/// Plays cues as the terminal bell. In debug mode the bell is replaced by a
/// log line so the in-memory screen stays clean.
pub struct TerminalAudio {
    bank: SoundBank,
    bell: bool,
}

impl TerminalAudio {
    pub fn new(bank: SoundBank, bell: bool) -> Self {
        TerminalAudio { bank, bell }
    }

    fn sound_for(&self, cue: GameEvent) -> Sound {
        match cue {
            GameEvent::Shoot => self.bank.shoot,
            GameEvent::Explosion => self.bank.explosion,
            GameEvent::PowerUpCollected => self.bank.powerup,
        }
    }
}

impl AudioSink for TerminalAudio {
    fn play(&mut self, cue: GameEvent) {
        if self.sound_for(cue) == Sound::Silent {
            return;
        }
        if !self.bell {
            debug!("Sound cue: {:?}", cue);
            return;
        }
        let mut stdout = io::stdout();
        if let Err(e) = stdout.write_all(b"\x07").and_then(|_| stdout.flush()) {
            debug!("Failed to play {:?}: {}", cue, e);
        }
    }
}
