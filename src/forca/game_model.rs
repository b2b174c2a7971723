use super::input::GameInput;

pub mod word_list;

pub const MAX_WRONG_GUESSES: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Won,
    Lost,
}

/// One round of the game. Replaced wholesale on reset, never reused.
#[derive(Debug, Clone)]
pub struct GameModel {
    secret_word: String,
    guessed_letters: Vec<char>,
    wrong_guesses: usize,
    state: GameState,
}

impl AsRef<GameModel> for GameModel {
    fn as_ref(&self) -> &GameModel {
        self
    }
}

impl GameModel {
    pub fn new(secret_word: &str) -> Self {
        Self {
            secret_word: secret_word.to_string(),
            guessed_letters: Vec::new(),
            wrong_guesses: 0,
            state: GameState::Playing,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn has_round_ended(&self) -> bool {
        self.state != GameState::Playing
    }

    /// Guessed letters in the order they were entered.
    pub fn guessed_letters(&self) -> &[char] {
        &self.guessed_letters
    }

    pub fn wrong_guesses(&self) -> usize {
        self.wrong_guesses
    }

    pub fn remaining_attempts(&self) -> usize {
        MAX_WRONG_GUESSES - self.wrong_guesses
    }

    pub fn correct_letters(&self) -> Vec<char> {
        self.guessed_letters
            .iter()
            .copied()
            .filter(|letter| self.secret_word.contains(*letter))
            .collect()
    }

    pub fn wrong_letters(&self) -> Vec<char> {
        self.guessed_letters
            .iter()
            .copied()
            .filter(|letter| !self.secret_word.contains(*letter))
            .collect()
    }

    pub fn is_revealed(&self, letter: char) -> bool {
        self.guessed_letters.contains(&letter.to_ascii_uppercase())
    }

    /// Per-position display of the secret word: guessed letters shown,
    /// everything else masked.
    pub fn masked_word(&self) -> String {
        self.secret_word
            .chars()
            .map(|letter| {
                if self.guessed_letters.contains(&letter) {
                    letter
                } else {
                    '_'
                }
            })
            .collect()
    }

    /// The secret word, only once the round has ended.
    pub fn revealed_word(&self) -> Option<&str> {
        if self.has_round_ended() {
            Some(&self.secret_word)
        } else {
            None
        }
    }

    pub fn handle_input(&mut self, user_input: GameInput) {
        if let GameInput::Guess(letter) = user_input {
            self.guess(letter);
        }
    }

    /// Records a guess. Non-letter input, repeat guesses and guesses after
    /// the round has ended are silent no-ops.
    pub fn guess(&mut self, letter: char) {
        if self.state != GameState::Playing {
            return;
        }
        let letter = letter.to_ascii_uppercase();
        if !letter.is_ascii_uppercase() {
            return;
        }
        if self.guessed_letters.contains(&letter) {
            return;
        }
        self.guessed_letters.push(letter);
        if !self.secret_word.contains(letter) {
            self.wrong_guesses += 1;
        }
        self.update_state();
    }

    // The win check runs before the loss check so completing the word on the
    // last allowed guess still wins.
    fn update_state(&mut self) {
        if self
            .secret_word
            .chars()
            .all(|letter| self.guessed_letters.contains(&letter))
        {
            self.state = GameState::Won;
        } else if self.wrong_guesses >= MAX_WRONG_GUESSES {
            self.state = GameState::Lost;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guessing_every_letter_wins() {
        let mut model = GameModel::new("CAT");
        model.guess('C');
        model.guess('A');
        assert_eq!(model.state(), GameState::Playing);
        model.guess('T');
        assert_eq!(model.state(), GameState::Won);
        assert_eq!(model.wrong_guesses(), 0);
    }

    #[test]
    fn test_guess_order_does_not_matter() {
        let mut model = GameModel::new("CAT");
        model.guess('T');
        model.guess('C');
        model.guess('A');
        assert_eq!(model.state(), GameState::Won);
    }

    #[test]
    fn test_six_wrong_guesses_lose() {
        let mut model = GameModel::new("CAT");
        for letter in ['X', 'Y', 'Z', 'Q', 'W'] {
            model.guess(letter);
            assert_eq!(model.state(), GameState::Playing);
        }
        model.guess('E');
        assert_eq!(model.state(), GameState::Lost);
        assert_eq!(model.wrong_guesses(), MAX_WRONG_GUESSES);
        assert_eq!(model.remaining_attempts(), 0);
    }

    #[test]
    fn test_wrong_count_matches_wrong_letters() {
        let mut model = GameModel::new("CAT");
        for letter in ['C', 'X', 'A', 'Y'] {
            model.guess(letter);
        }
        assert_eq!(model.wrong_guesses(), model.wrong_letters().len());
        assert_eq!(model.wrong_letters(), vec!['X', 'Y']);
        assert_eq!(model.correct_letters(), vec!['C', 'A']);
    }

    #[test]
    fn test_repeat_guess_is_a_noop() {
        let mut model = GameModel::new("CAT");
        model.guess('X');
        model.guess('X');
        model.guess('X');
        assert_eq!(model.wrong_guesses(), 1);
        assert_eq!(model.guessed_letters(), &['X']);
    }

    #[test]
    fn test_non_letter_input_is_rejected() {
        let mut model = GameModel::new("CAT");
        model.guess('3');
        model.guess(' ');
        model.guess('!');
        model.guess('ç');
        assert!(model.guessed_letters().is_empty());
        assert_eq!(model.wrong_guesses(), 0);
    }

    #[test]
    fn test_lowercase_input_is_normalized() {
        let mut model = GameModel::new("CAT");
        model.guess('c');
        model.guess('C');
        assert_eq!(model.guessed_letters(), &['C']);
        assert!(model.is_revealed('c'));
    }

    #[test]
    fn test_no_mutation_after_round_end() {
        let mut model = GameModel::new("CAT");
        for letter in ['X', 'Y', 'Z', 'Q', 'W', 'E'] {
            model.guess(letter);
        }
        assert_eq!(model.state(), GameState::Lost);
        let frozen = model.clone();
        model.guess('C');
        model.guess('V');
        assert_eq!(model.guessed_letters(), frozen.guessed_letters());
        assert_eq!(model.wrong_guesses(), frozen.wrong_guesses());
        assert_eq!(model.state(), frozen.state());
    }

    #[test]
    fn test_win_check_precedes_loss_check() {
        // Five wrong guesses spent, then the word completed: the round is
        // won even though a sixth miss would have ended it.
        let mut model = GameModel::new("CAT");
        for letter in ['X', 'Y', 'Z', 'Q', 'W'] {
            model.guess(letter);
        }
        assert_eq!(model.remaining_attempts(), 1);
        model.guess('C');
        model.guess('A');
        model.guess('T');
        assert_eq!(model.state(), GameState::Won);
    }

    #[test]
    fn test_secret_word_hidden_until_round_ends() {
        let mut model = GameModel::new("CAT");
        assert_eq!(model.revealed_word(), None);
        model.guess('C');
        model.guess('A');
        model.guess('T');
        assert_eq!(model.revealed_word(), Some("CAT"));
    }

    #[test]
    fn test_masked_word_reveals_guessed_positions() {
        let mut model = GameModel::new("CAT");
        assert_eq!(model.masked_word(), "___");
        model.guess('A');
        assert_eq!(model.masked_word(), "_A_");
        model.guess('X');
        assert_eq!(model.masked_word(), "_A_");
        model.guess('C');
        model.guess('T');
        assert_eq!(model.masked_word(), "CAT");
    }

    #[test]
    fn test_repeated_letters_in_word_need_one_guess() {
        let mut model = GameModel::new("ARRAY");
        model.guess('A');
        model.guess('R');
        model.guess('Y');
        assert_eq!(model.state(), GameState::Won);
    }
}
