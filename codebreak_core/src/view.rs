use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::{
    card::NumberCard, chat::ChatEntry, game_state::GameState, player::PlayerId,
    question::QuestionCard,
};

/// What any player may know about a seat: who sits there and how many
/// cards they hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub id: PlayerId,
    pub card_count: usize,
}

/// One player's fog-of-war view of the shared state. Recomputed on
/// demand, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub hand: Vec<NumberCard>,
    pub players: Vec<PlayerSummary>,
    /// `None` until the game has started.
    pub turn_player: Option<PlayerId>,
    pub question_pile: Vec<QuestionCard>,
    pub chat_log: VecDeque<ChatEntry>,
    pub winner: Option<PlayerId>,
}

impl GameState {
    /// Projects the shared state for one viewer: the viewer's own cards
    /// stay visible, every other hand is reduced to a card count.
    pub fn player_view(&self, viewer_id: &str) -> PlayerView {
        PlayerView {
            hand: self
                .hands
                .iter()
                .find(|hand| hand.player_id == viewer_id)
                .map(|hand| hand.cards.clone())
                .unwrap_or_default(),
            players: self
                .hands
                .iter()
                .map(|hand| PlayerSummary {
                    id: hand.player_id.clone(),
                    card_count: hand.cards.len(),
                })
                .collect(),
            turn_player: if self.current_questions.is_some() {
                self.turn_player().cloned()
            } else {
                None
            },
            question_pile: self.current_questions.clone().unwrap_or_default(),
            chat_log: self.chat_log.clone(),
            winner: self.winner.clone(),
        }
    }
}
