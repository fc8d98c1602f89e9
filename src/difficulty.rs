use log::info;

use crate::constants::{INITIAL_LEVEL, INITIAL_LEVEL_UP_SCORE, SCORE_PER_ENEMY};

/// Score, level and the next level-up threshold for one session.
///
/// Score only grows, and the threshold only doubles; both go back to their
/// starting values through `reset`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Difficulty {
    score: u32,
    level: u32,
    level_up_threshold: u32,
}

impl Difficulty {
    pub fn new() -> Self {
        Difficulty {
            score: 0,
            level: INITIAL_LEVEL,
            level_up_threshold: INITIAL_LEVEL_UP_SCORE,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn level_up_threshold(&self) -> u32 {
        self.level_up_threshold
    }

    pub fn enemies_destroyed(&mut self, count: u32) {
        self.score = self.score.saturating_add(count.saturating_mul(SCORE_PER_ENEMY));
    }

    /// Applies every threshold crossing the current score allows and returns
    /// how many levels were gained.
    pub fn check_level_up(&mut self) -> u32 {
        let mut gained = 0;
        while self.score >= self.level_up_threshold {
            let next = self.level_up_threshold.saturating_mul(2);
            if next == self.level_up_threshold {
                break;
            }
            self.level += 1;
            self.level_up_threshold = next;
            gained += 1;
            info!("Level up: level {} (next at {})", self.level, self.level_up_threshold);
        }
        gained
    }

    pub fn reset(&mut self) {
        *self = Difficulty::new();
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::new()
    }
}
