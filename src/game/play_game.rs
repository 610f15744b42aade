use crate::game::board::{offset_spot, Spot, SpotKind, BOARD_SIZE, JAIL};
use crate::game::card::Card;
use crate::game::closest::closest;
use crate::game::create_deck::{CHANCE, COMMUNITY_CHEST};
use crate::game::dice::{dice_roll, roll_pair};
use crate::game::game_state::{GameState, StartConditions};
use crate::Result;
use rand::Rng;

/// One play-through of a fixed number of turns.
#[derive(Debug, Clone)]
pub struct Game {
    turns: usize,
    state: GameState,
}

impl Game {
    pub fn new(turns: usize, start: StartConditions) -> Result<Game> {
        Ok(Game {
            turns,
            state: GameState::from_start(&start)?,
        })
    }

    pub(crate) fn from_state(turns: usize, state: GameState) -> Game {
        Game { turns, state }
    }

    pub fn position(&self) -> Spot {
        self.state.position
    }

    pub fn is_jailed(&self) -> bool {
        self.state.jailed
    }

    pub fn has_release_token(&self) -> bool {
        self.state.release_token
    }

    /// Plays every turn and returns the spot occupied at the end of each one.
    pub fn play<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<Spot> {
        let mut visited = Vec::with_capacity(self.turns);
        for _ in 0..self.turns {
            self.take_turn(rng);
            visited.push(self.state.position);
        }
        visited
    }

    pub fn take_turn<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.state.jailed {
            self.serve_jail_turn(rng);
        } else {
            let roll = dice_roll(rng);
            self.advance(roll as usize, rng);
        }
    }

    /// Moves forward `steps` spots and resolves the spot landed on.
    ///
    /// `steps` is a single die value, so a single wrap is enough.
    pub(crate) fn advance<R: Rng + ?Sized>(&mut self, steps: usize, rng: &mut R) {
        debug_assert!(steps <= BOARD_SIZE);
        self.state.position += steps;
        if self.state.position >= BOARD_SIZE {
            self.state.position -= BOARD_SIZE;
        }

        match SpotKind::of(self.state.position) {
            SpotKind::GoToJail => self.send_to_jail(),
            SpotKind::CommunityChest => self.apply_card(COMMUNITY_CHEST.draw(rng)),
            SpotKind::Chance => self.apply_card(CHANCE.draw(rng)),
            _ => {}
        }
    }

    pub(crate) fn send_to_jail(&mut self) {
        log::trace!("Sent to jail from spot {}", self.state.position);
        self.state.position = JAIL;
        self.state.jailed = true;
    }

    fn serve_jail_turn<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.state.release_token {
            self.state.jailed = false;
            return;
        }
        let (first, second) = roll_pair(rng);
        self.try_doubles(first, second);
    }

    /// Leaves jail on a double, moving by the die value. No card is drawn for
    /// the spot reached this way.
    pub(crate) fn try_doubles(&mut self, first: u8, second: u8) -> bool {
        if first != second {
            return false;
        }
        self.state.jailed = false;
        self.state.position += first as usize;
        true
    }

    /// Applies a drawn card to the player. Targets past the last spot wrap
    /// around the board and an empty nearest-of list has no effect.
    pub fn apply_card(&mut self, card: Card) {
        match card {
            Card::ReleaseToken => self.state.release_token = true,
            Card::AdvanceTo(spot) => self.state.position = spot % BOARD_SIZE,
            Card::AdvanceBy(offset) => {
                self.state.position = offset_spot(self.state.position, offset)
            }
            Card::AdvanceToNearest([]) => {}
            Card::AdvanceToNearest(spots) => {
                self.state.position = closest(spots, self.state.position) % BOARD_SIZE
            }
            Card::NoOp => {}
        }
    }
}
