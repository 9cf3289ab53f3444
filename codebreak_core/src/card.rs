use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter};

#[derive(
    Debug, PartialEq, Eq, Copy, Clone, Hash, Serialize, Deserialize, Display, AsRefStr, EnumIter,
)]
pub enum Color {
    Green,
    Black,
    White,
}

/// A numbered tile. Equality is by (value, color).
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash, Serialize, Deserialize)]
pub struct NumberCard {
    pub value: u8,
    pub color: Color,
}

impl NumberCard {
    /// The full 20-card deck in deterministic order: every value 0..=9
    /// twice, once black and once white, except the two green 5s.
    pub fn deck() -> Vec<NumberCard> {
        let mut cards = Vec::with_capacity(20);
        for value in 0..=9 {
            let colors = if value == 5 {
                (Color::Green, Color::Green)
            } else {
                (Color::Black, Color::White)
            };
            cards.push(NumberCard {
                value,
                color: colors.0,
            });
            cards.push(NumberCard {
                value,
                color: colors.1,
            });
        }
        cards
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use crate::card::{Color, NumberCard};

    #[test]
    fn deck_should_hold_twenty_cards() {
        assert_eq!(NumberCard::deck().len(), 20);
    }

    #[test]
    fn deck_should_hold_every_value_twice() {
        let deck = NumberCard::deck();

        for value in 0..=9 {
            assert_eq!(deck.iter().filter(|c| c.value == value).count(), 2);
        }
    }

    #[test]
    fn only_the_fives_should_be_green() {
        let deck = NumberCard::deck();

        assert!(deck
            .iter()
            .filter(|c| c.value == 5)
            .all(|c| c.color == Color::Green));
        for value in (0..=9).filter(|&v| v != 5) {
            assert!(deck.contains(&NumberCard {
                value,
                color: Color::Black
            }));
            assert!(deck.contains(&NumberCard {
                value,
                color: Color::White
            }));
        }
    }

    #[test]
    fn color_names_should_order_black_green_white() {
        let mut names: Vec<String> = Color::iter().map(|c| c.to_string()).collect();
        names.sort();

        assert_eq!(names, vec!["Black", "Green", "White"]);
    }
}
