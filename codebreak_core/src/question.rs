use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// One of the 21 scripted questions a player may ask about the opponent's
/// hand. Identity is the catalog id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionCard {
    pub id: u8,
    pub text: String,
}

const CATALOG: [(u8, &str); 21] = [
    (1, "How many odd tiles do you have?"),
    (2, "Which neighboring tiles have consecutive numbers?"),
    (3, "How many of your tiles have the same number?"),
    (4, "What is the sum of your three left-most tiles?"),
    (5, "What is the sum of your three right-most tiles?"),
    (
        6,
        "Where are your #8 or #9 tiles? You must choose one number before asking that question.",
    ),
    (7, "Is your C tile greater than 4?"),
    (8, "How many of your tiles have a black number?"),
    (9, "How many of your tiles have a white number?"),
    (10, "What is the sum of your central tiles (b, c and d)?"),
    (11, "What is the sum of your tiles?"),
    (
        12,
        "How many even tiles do you have? 0 is considered an even number",
    ),
    (13, "Where are your #5 tiles?"),
    (14, "What is the difference between your highest and lowest number?"),
    (15, "Which neighboring tiles have the same color?"),
    (
        16,
        "Where are your #3 or #4 tiles? You must choose one number before asking that question.",
    ),
    (17, "What is the sum of your black numbers?"),
    (
        18,
        "Where are your #6 or #7 tiles? You must choose one number before asking that question.",
    ),
    (
        19,
        "Where are your #1 or #2 tiles? You must choose one number before asking that question.",
    ),
    (20, "Where are your #0 tiles?"),
    (21, "What is the sum of your white numbers?"),
];

impl QuestionCard {
    /// The full catalog in id order.
    pub fn deck() -> Vec<QuestionCard> {
        CATALOG
            .iter()
            .map(|&(id, text)| QuestionCard {
                id,
                text: text.to_string(),
            })
            .collect()
    }

    /// Whether the asker has to bind a number before asking (ids 6, 16,
    /// 18 and 19). The engine does not enforce this, clients should.
    pub fn needs_number(&self) -> bool {
        matches!(self.id, 6 | 16 | 18 | 19)
    }

    pub fn rules() -> String {
        Self::deck()
            .iter()
            .map(|q| format!("[{}] {}", q.id, q.text))
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use crate::question::QuestionCard;

    #[test]
    fn deck_should_hold_twenty_one_questions_in_id_order() {
        let deck = QuestionCard::deck();

        assert_eq!(deck.len(), 21);
        let ids: Vec<u8> = deck.iter().map(|q| q.id).collect();
        assert_eq!(ids, (1..=21).collect::<Vec<u8>>());
    }

    #[test]
    fn needs_number_should_mark_the_bound_number_questions() {
        let expected: Vec<u8> = QuestionCard::deck()
            .iter()
            .filter(|q| q.needs_number())
            .map(|q| q.id)
            .collect();

        assert_eq!(expected, vec![6, 16, 18, 19]);
    }

    #[test]
    fn rules_should_list_every_question() {
        assert_eq!(QuestionCard::rules().lines().count(), 21);
    }
}
