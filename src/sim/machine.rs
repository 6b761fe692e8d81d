//! Status transitions driven by player commands
//!
//! The tick only moves `Running` into `Ready`, `GameOver`, `LevelComplete` or
//! `GameWon`. Everything else happens here, between ticks.

use serde::{Deserialize, Serialize};

use super::geometry::Field;
use super::level::build_level;
use super::state::{GameState, GameStatus};
use crate::config::GameConfig;

/// Discrete input from the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Start,
    Pause,
    Resume,
    /// Move on from `LevelComplete` or `GameWon`
    Continue,
    /// New run after `GameOver`
    Restart,
    /// Leave the game from `GameOver`
    Exit,
    /// Debug: treat the current level as cleared
    SkipLevel,
}

impl Command {
    /// What a plain tap means in each status
    ///
    /// Pausing and resuming need the dedicated pause control, so `Running` and
    /// `Paused` have no tap command.
    pub fn primary_for(status: GameStatus) -> Option<Command> {
        match status {
            GameStatus::Ready => Some(Command::Start),
            GameStatus::LevelComplete | GameStatus::GameWon => Some(Command::Continue),
            GameStatus::GameOver => Some(Command::Restart),
            GameStatus::Running | GameStatus::Paused => None,
        }
    }
}

/// Result of applying a command
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// The command means nothing in the current status
    Ignored,
    Next(GameState),
    /// The player asked to quit
    Exit,
}

/// Apply a command to the current state
pub fn apply(state: &GameState, command: Command, field: Field, config: &GameConfig) -> Transition {
    if !state.initialized {
        return Transition::Ignored;
    }

    let with_status = |status: GameStatus| {
        Transition::Next(GameState {
            status,
            ..state.clone()
        })
    };

    let transition = match (state.status, command) {
        (GameStatus::Ready, Command::Start) => with_status(GameStatus::Running),
        (GameStatus::Running, Command::Pause) => with_status(GameStatus::Paused),
        (GameStatus::Paused, Command::Resume) => with_status(GameStatus::Running),
        (GameStatus::Running, Command::SkipLevel) => {
            let status = if config.levels.has_level(state.level + 1) {
                GameStatus::LevelComplete
            } else {
                GameStatus::GameWon
            };
            Transition::Next(GameState {
                status,
                balls: Vec::new(),
                ..state.clone()
            })
        }
        (GameStatus::LevelComplete, Command::Continue) => {
            let next_level = state.level + 1;
            if config.levels.has_level(next_level) {
                let fresh = build_level(field, next_level, config);
                Transition::Next(GameState {
                    score: state.score,
                    lives: state.lives,
                    ..fresh
                })
            } else {
                with_status(GameStatus::GameWon)
            }
        }
        (GameStatus::GameWon, Command::Continue) | (GameStatus::GameOver, Command::Restart) => {
            Transition::Next(build_level(field, 1, config))
        }
        (GameStatus::GameOver, Command::Exit) => Transition::Exit,
        (status, command) => {
            log::debug!("Ignoring {:?} while {:?}", command, status);
            Transition::Ignored
        }
    };

    if let Transition::Next(next) = &transition {
        log::info!(
            "{:?}: {:?} -> {:?} (level {})",
            command,
            state.status,
            next.status,
            next.level
        );
    }
    transition
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> Field {
        Field::new(1000.0, 2000.0)
    }

    fn state_with(status: GameStatus, level: u32) -> GameState {
        let config = GameConfig::default();
        GameState {
            status,
            score: 4_200,
            lives: 2,
            ..build_level(field(), level, &config)
        }
    }

    fn next(state: &GameState, command: Command) -> GameState {
        match apply(state, command, field(), &GameConfig::default()) {
            Transition::Next(next) => next,
            other => panic!("expected a new state, got {other:?}"),
        }
    }

    #[test]
    fn test_start_pause_resume() {
        let ready = state_with(GameStatus::Ready, 1);
        let running = next(&ready, Command::Start);
        assert_eq!(running.status, GameStatus::Running);

        let paused = next(&running, Command::Pause);
        assert_eq!(paused.status, GameStatus::Paused);
        assert_eq!(paused.balls, running.balls);

        let resumed = next(&paused, Command::Resume);
        assert_eq!(resumed.status, GameStatus::Running);
    }

    #[test]
    fn test_continue_carries_score_and_lives() {
        let mut done = state_with(GameStatus::LevelComplete, 3);
        done.balls.clear();
        let level_four = next(&done, Command::Continue);
        assert_eq!(level_four.status, GameStatus::Ready);
        assert_eq!(level_four.level, 4);
        assert_eq!(level_four.score, 4_200);
        assert_eq!(level_four.lives, 2);
        assert_eq!(level_four.balls.len(), 1);
    }

    #[test]
    fn test_won_and_game_over_start_fresh_runs() {
        let won = state_with(GameStatus::GameWon, 10);
        let fresh = next(&won, Command::Continue);
        assert_eq!(fresh.level, 1);
        assert_eq!(fresh.score, 0);
        assert_eq!(fresh.lives, 3);
        assert_eq!(fresh.status, GameStatus::Ready);

        let over = state_with(GameStatus::GameOver, 6);
        let fresh = next(&over, Command::Restart);
        assert_eq!(fresh.level, 1);
        assert_eq!(fresh.score, 0);
        assert_eq!(fresh.lives, 3);
    }

    #[test]
    fn test_exit_only_from_game_over() {
        let config = GameConfig::default();
        let over = state_with(GameStatus::GameOver, 1);
        assert_eq!(apply(&over, Command::Exit, field(), &config), Transition::Exit);

        let running = state_with(GameStatus::Running, 1);
        assert_eq!(
            apply(&running, Command::Exit, field(), &config),
            Transition::Ignored
        );
    }

    #[test]
    fn test_skip_level() {
        let running = state_with(GameStatus::Running, 2);
        let skipped = next(&running, Command::SkipLevel);
        assert_eq!(skipped.status, GameStatus::LevelComplete);
        assert!(skipped.balls.is_empty());

        let last = state_with(GameStatus::Running, 10);
        assert_eq!(next(&last, Command::SkipLevel).status, GameStatus::GameWon);
    }

    #[test]
    fn test_invalid_commands_are_ignored() {
        let config = GameConfig::default();
        let cases = [
            (GameStatus::Ready, Command::Pause),
            (GameStatus::Ready, Command::Continue),
            (GameStatus::Running, Command::Start),
            (GameStatus::Paused, Command::Pause),
            (GameStatus::Paused, Command::SkipLevel),
            (GameStatus::LevelComplete, Command::Restart),
            (GameStatus::GameOver, Command::Continue),
        ];
        for (status, command) in cases {
            let state = state_with(status, 1);
            assert_eq!(
                apply(&state, command, field(), &config),
                Transition::Ignored,
                "{command:?} while {status:?}"
            );
        }
    }

    #[test]
    fn test_uninitialized_ignores_everything() {
        let config = GameConfig::default();
        let placeholder = GameState::uninitialized(3);
        assert_eq!(
            apply(&placeholder, Command::Start, field(), &config),
            Transition::Ignored
        );
    }

    #[test]
    fn test_primary_tap_commands() {
        assert_eq!(Command::primary_for(GameStatus::Ready), Some(Command::Start));
        assert_eq!(
            Command::primary_for(GameStatus::LevelComplete),
            Some(Command::Continue)
        );
        assert_eq!(Command::primary_for(GameStatus::GameWon), Some(Command::Continue));
        assert_eq!(Command::primary_for(GameStatus::GameOver), Some(Command::Restart));
        assert_eq!(Command::primary_for(GameStatus::Running), None);
        assert_eq!(Command::primary_for(GameStatus::Paused), None);
    }
}
