use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::{
    card::NumberCard,
    chat::{ChatEntry, Timestamp},
    player::{PlayerHand, PlayerId},
    question::QuestionCard,
};

/// Cards dealt to each player at the start of the game.
pub const HAND_SIZE: usize = 5;
/// Face-up questions selectable once the game has started.
pub const OPEN_QUESTIONS: usize = 6;

static RULES_LINK: &str = "Rules: https://boardgame.bg/break%20the%20code%20rules.pdf";

/// The authoritative shared state. Exclusively owned by the hosting
/// session and mutated in place by one command at a time; players only
/// ever see the projection from
/// [`player_view`](GameState::player_view).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub question_deck: Vec<QuestionCard>,
    pub number_deck: Vec<NumberCard>,
    pub hands: Vec<PlayerHand>,
    pub turn_idx: usize,
    /// `None` until the game has started.
    pub current_questions: Option<Vec<QuestionCard>>,
    /// Most-recent-first.
    pub chat_log: VecDeque<ChatEntry>,
    pub winner: Option<PlayerId>,
    pub guess_only: bool,
    pub starting_player: Option<PlayerId>,
}

impl GameState {
    /// Builds both decks in deterministic order and seeds the chat with
    /// the rules banner. Shuffling happens in
    /// [`start_game`](GameState::start_game).
    pub fn new(time: Timestamp) -> Self {
        let mut state = GameState {
            question_deck: QuestionCard::deck(),
            number_deck: NumberCard::deck(),
            hands: vec![],
            turn_idx: 0,
            current_questions: None,
            chat_log: VecDeque::new(),
            winner: None,
            guess_only: false,
            starting_player: None,
        };
        state.log(RULES_LINK.to_string(), time);
        state
    }

    pub(crate) fn log(&mut self, text: String, time: Timestamp) {
        self.chat_log.push_front(ChatEntry { text, sent_at: time });
    }

    /// Id of the player holding the turn, if any player does.
    pub fn turn_player(&self) -> Option<&PlayerId> {
        self.hands.get(self.turn_idx).map(|hand| &hand.player_id)
    }
}

#[cfg(test)]
mod tests {
    use crate::game_state::{GameState, RULES_LINK};

    #[test]
    fn new_should_seed_the_chat_with_the_rules_banner() {
        let state = GameState::new(42);

        assert_eq!(state.chat_log.len(), 1);
        assert_eq!(state.chat_log[0].text, RULES_LINK);
        assert_eq!(state.chat_log[0].sent_at, 42);
    }

    #[test]
    fn new_should_start_with_full_decks_and_no_players() {
        let state = GameState::new(0);

        assert_eq!(state.number_deck.len(), 20);
        assert_eq!(state.question_deck.len(), 21);
        assert!(state.hands.is_empty());
        assert!(state.current_questions.is_none());
        assert!(!state.guess_only);
        assert!(state.winner.is_none());
        assert!(state.starting_player.is_none());
        assert!(state.turn_player().is_none());
    }
}
