use crate::game::board::{is_on_board, Spot, GO, JAIL};
use crate::{MonopolyError, Result};
use serde::{Deserialize, Serialize};

/// Where a game starts and what the player holds at that point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartConditions {
    /// Ignored when `jailed` is set, the game then starts on the jail spot.
    pub position: Spot,
    pub release_token: bool,
    pub jailed: bool,
}

impl Default for StartConditions {
    fn default() -> Self {
        Self {
            position: GO,
            release_token: false,
            jailed: false,
        }
    }
}

impl StartConditions {
    pub fn validate(&self) -> Result<()> {
        if !self.jailed && !is_on_board(self.position) {
            return Err(MonopolyError::InvalidSpot(self.position));
        }
        Ok(())
    }
}

/// Mutable state of a single play-through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
///
/// Only built through [`GameState::from_start`], so the position is always on the board.
pub struct GameState {
    pub(crate) position: Spot,
    pub(crate) release_token: bool,
    pub(crate) jailed: bool,
}

impl GameState {
    pub fn from_start(start: &StartConditions) -> Result<GameState> {
        start.validate()?;
        Ok(GameState::from_validated(start))
    }

    /// `start` must already have passed [`StartConditions::validate`].
    pub(crate) fn from_validated(start: &StartConditions) -> GameState {
        let position = if start.jailed { JAIL } else { start.position };
        GameState {
            position,
            release_token: start.release_token,
            jailed: start.jailed,
        }
    }

    pub fn position(&self) -> Spot {
        self.position
    }

    pub fn release_token(&self) -> bool {
        self.release_token
    }

    pub fn jailed(&self) -> bool {
        self.jailed
    }
}
