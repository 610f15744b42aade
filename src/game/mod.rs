pub mod board;
pub mod card;
pub mod closest;
pub mod create_deck;
pub mod deck;
pub mod dice;
pub mod game_state;
pub mod play_game;
