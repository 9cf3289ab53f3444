use serde::{Deserialize, Serialize};

use crate::card::NumberCard;

/// Host-assigned user id.
pub type PlayerId = String;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerHand {
    pub player_id: PlayerId,
    pub cards: Vec<NumberCard>,
}

impl PlayerHand {
    pub fn new(player_id: PlayerId) -> Self {
        PlayerHand {
            player_id,
            cards: vec![],
        }
    }

    /// Canonical display order: ascending by value, ties broken by the
    /// lexical order of the color name. Guess matching runs against this
    /// order.
    pub fn sort_cards(&mut self) {
        self.cards.sort_by(|a, b| {
            a.value
                .cmp(&b.value)
                .then_with(|| a.color.as_ref().cmp(b.color.as_ref()))
        });
    }
}
