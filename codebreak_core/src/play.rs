use serde::{Deserialize, Serialize};

use crate::{card::NumberCard, player::PlayerId};

/// Payload for picking one of the open questions. `extra_text` carries the
/// freeform bound number for questions that declare one; it is logged
/// verbatim and never validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionPick {
    pub card_id: u8,
    pub extra_text: Option<String>,
}

/// Payload for guessing the exact hand of `target_player`. The card order
/// counts, see [`crate::game_state::GameState::guess`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guess {
    pub target_player: PlayerId,
    pub cards: Vec<NumberCard>,
}
