use thiserror::Error;

/// Command rejections. All are non-fatal: the shared state stays valid and
/// the caller may retry with a corrected command. The display strings are
/// surfaced verbatim to players.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("You must guess to have a chance at winning!")]
    GuessOnlyPhase,

    #[error("Invalid question Card index")]
    InvalidQuestionCard,

    #[error("Not your turn")]
    NotYourTurn,

    #[error("Must pick 5 cards")]
    InvalidGuessSize,

    #[error("Please enter valid userId")]
    InvalidTargetPlayer,
}

pub type CommandResult = Result<(), GameError>;
