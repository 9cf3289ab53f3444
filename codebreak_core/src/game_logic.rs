use rand::{seq::SliceRandom, Rng};

use crate::{
    chat::Timestamp,
    error::{CommandResult, GameError},
    game_state::{GameState, HAND_SIZE, OPEN_QUESTIONS},
    play::{Guess, QuestionPick},
    player::{PlayerHand, PlayerId},
};

impl GameState {
    /// Adds a player with an empty hand. There is no capacity check
    /// against the two-player design, the host decides who may join.
    pub fn join_game(&mut self, player_id: PlayerId) -> CommandResult {
        self.hands.insert(0, PlayerHand::new(player_id));
        Ok(())
    }

    /// Shuffles the seating order and both decks, deals every hand,
    /// sorts it canonically and opens the first six questions. Calling
    /// this twice re-shuffles and re-deals from scratch.
    pub fn start_game<R: Rng>(
        &mut self,
        player_id: PlayerId,
        _time: Timestamp,
        rng: &mut R,
    ) -> CommandResult {
        self.hands.shuffle(rng);
        self.question_deck.shuffle(rng);
        self.number_deck.shuffle(rng);

        for hand in &mut self.hands {
            for _ in 0..HAND_SIZE {
                if let Some(card) = self.number_deck.pop() {
                    hand.cards.push(card);
                }
            }
            hand.sort_cards();
        }

        let mut open = Vec::with_capacity(OPEN_QUESTIONS);
        for _ in 0..OPEN_QUESTIONS {
            if let Some(card) = self.question_deck.pop() {
                open.push(card);
            }
        }
        self.current_questions = Some(open);

        // the starting player determines the win/tie asymmetry in guess
        self.starting_player = Some(player_id);
        Ok(())
    }

    /// Asks one of the open questions. The chosen card leaves the pile and
    /// a replacement is drawn; once the question deck runs dry the game
    /// permanently switches to the guess-only phase.
    pub fn pick_question(
        &mut self,
        player_id: &str,
        time: Timestamp,
        pick: &QuestionPick,
    ) -> CommandResult {
        if self.guess_only {
            return Err(GameError::GuessOnlyPhase);
        }
        let open = self.current_questions.as_deref().unwrap_or_default();
        let question = open
            .iter()
            .find(|card| card.id == pick.card_id)
            .map(|card| card.text.clone())
            .ok_or(GameError::InvalidQuestionCard)?;
        if self.turn_player().map_or(true, |turn| turn != player_id) {
            return Err(GameError::NotYourTurn);
        }

        let extra = pick
            .extra_text
            .as_deref()
            .filter(|text| !text.is_empty())
            .map(|text| format!(" ({text})"))
            .unwrap_or_default();
        self.log(format!("{player_id} asked: {question}{extra}"), time);

        if let Some(open) = self.current_questions.as_mut() {
            if let Some(idx) = open.iter().position(|card| card.id == pick.card_id) {
                open.remove(idx);
            }
        }
        match self.question_deck.pop() {
            Some(card) => {
                if let Some(open) = self.current_questions.as_mut() {
                    open.push(card);
                }
            }
            None => {
                self.log("Out of questions, both players must guess".to_string(), time);
                self.guess_only = true;
            }
        }

        self.advance_turn();
        Ok(())
    }

    /// Logs a free-text answer. There is no turn check and no linkage to a
    /// pending question, clients keep that discipline.
    pub fn answer(&mut self, player_id: &str, time: Timestamp, answer: &str) -> CommandResult {
        self.log(format!("{player_id} answered: {answer}"), time);
        Ok(())
    }

    /// Attempts to guess the exact hand of `target_player`. A guess is
    /// correct iff it reproduces the target's hand card for card in the
    /// order established at deal time. A correct guess wins outright
    /// unless the caller started the game, in which case the opponent
    /// first gets a chance to force a tie; an incorrect guess in the
    /// guess-only phase loses. The turn passes on regardless of the
    /// outcome.
    pub fn guess(&mut self, player_id: &str, time: Timestamp, guess: &Guess) -> CommandResult {
        if guess.cards.len() != HAND_SIZE {
            return Err(GameError::InvalidGuessSize);
        }
        if self.turn_player().map_or(true, |turn| turn != player_id) {
            return Err(GameError::NotYourTurn);
        }
        let correct = match self
            .hands
            .iter()
            .find(|hand| hand.player_id == guess.target_player)
        {
            // exact sequence equality, a reordered multiset match fails
            Some(target) => target.cards == guess.cards,
            None => return Err(GameError::InvalidTargetPlayer),
        };

        let target = guess.target_player.clone();
        if correct {
            if self.starting_player.as_deref() == Some(player_id) {
                if self.guess_only {
                    self.log(format!("{player_id} guessed correctly and game is tied."), time);
                } else {
                    self.log(
                        format!("{player_id} guessed correctly and now {target} must guess to tie."),
                        time,
                    );
                    self.guess_only = true;
                }
            } else {
                self.log(format!("{player_id} guessed correctly and won!"), time);
                self.winner = Some(player_id.to_string());
            }
        } else if self.guess_only {
            self.log(format!("{player_id} guessed incorrectly and {target} won!"), time);
            self.winner = Some(target);
        } else {
            self.log(format!("{player_id} guessed incorrectly ;("), time);
        }

        self.advance_turn();
        Ok(())
    }

    fn advance_turn(&mut self) {
        self.turn_idx = (self.turn_idx + 1) % self.hands.len();
    }
}
