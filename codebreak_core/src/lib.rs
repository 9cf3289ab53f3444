//! Rule engine for a two-player deduction card game: each player holds a
//! secret hand of numbered tiles, the players alternately ask scripted
//! questions about the opponent's hand, answer in free text and finally
//! attempt to guess the opponent's exact hand. The engine owns one
//! [`GameState`] per session, validates every command against it and
//! projects a fog-of-war [`view::PlayerView`] per player. Transport, rooms
//! and rendering belong to the hosting environment.

pub mod card;
pub mod chat;
pub mod error;
mod game_logic;
pub mod game_state;
pub mod play;
pub mod player;
pub mod question;
pub mod view;

pub use game_state::GameState;
