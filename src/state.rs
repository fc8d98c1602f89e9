/// Where the program is between sessions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    Running,
    GameOver,
    Quit,
}

/// How a running session's frame loop ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopResult {
    Quit,
    GameOver,
}

/// What the player picked on the game-over screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOverChoice {
    Restart,
    Quit,
}

/// Outcome that moves the state machine forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Loop(LoopResult),
    Choice(GameOverChoice),
}

impl SessionState {
    pub fn is_terminal(self) -> bool {
        self == SessionState::Quit
    }

    /// Returns the next state, or `self` when the outcome does not apply to
    /// the current state.
    pub fn next(self, transition: Transition) -> SessionState {
        match (self, transition) {
            (SessionState::Running, Transition::Loop(LoopResult::GameOver)) => SessionState::GameOver,
            (SessionState::Running, Transition::Loop(LoopResult::Quit)) => SessionState::Quit,
            (SessionState::GameOver, Transition::Choice(GameOverChoice::Restart)) => SessionState::Running,
            (SessionState::GameOver, Transition::Choice(GameOverChoice::Quit)) => SessionState::Quit,
            (SessionState::Running, Transition::Choice(_))
            | (SessionState::GameOver, Transition::Loop(_))
            | (SessionState::Quit, _) => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn running_ends_in_game_over_or_quit() {
        assert_eq!(SessionState::Running.next(Transition::Loop(LoopResult::GameOver)), SessionState::GameOver);
        assert_eq!(SessionState::Running.next(Transition::Loop(LoopResult::Quit)), SessionState::Quit);
    }

    #[test]
    fn game_over_restarts_or_quits() {
        assert_eq!(SessionState::GameOver.next(Transition::Choice(GameOverChoice::Restart)), SessionState::Running);
        assert_eq!(SessionState::GameOver.next(Transition::Choice(GameOverChoice::Quit)), SessionState::Quit);
    }

    #[test]
    fn quit_is_terminal() {
        let state = SessionState::Quit;
        assert!(state.is_terminal());
        assert_eq!(state.next(Transition::Choice(GameOverChoice::Restart)), SessionState::Quit);
        assert_eq!(state.next(Transition::Loop(LoopResult::GameOver)), SessionState::Quit);
    }

    #[test]
    fn mismatched_outcomes_are_ignored() {
        assert_eq!(SessionState::Running.next(Transition::Choice(GameOverChoice::Quit)), SessionState::Running);
        assert_eq!(SessionState::GameOver.next(Transition::Loop(LoopResult::Quit)), SessionState::GameOver);
    }
}
