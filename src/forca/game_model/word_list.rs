use std::fs;
use std::io;
use std::path::Path;

use rand::prelude::*;
use thiserror::Error;

// The embedded word pool. Uppercase A-Z only, checked again in new().
const BUILTIN_WORDS: [&str; 40] = [
    "REACT",
    "JAVASCRIPT",
    "PROGRAMACAO",
    "COMPUTADOR",
    "TECNOLOGIA",
    "ALGORITMO",
    "DESENVOLVIMENTO",
    "INTERFACE",
    "RESPONSIVO",
    "FRAMEWORK",
    "COMPONENTE",
    "FUNCAO",
    "VARIAVEL",
    "ARRAY",
    "OBJETO",
    "CLASSE",
    "METODO",
    "PROPRIEDADE",
    "EVENTO",
    "CALLBACK",
    "PROMISE",
    "ASYNC",
    "AWAIT",
    "FETCH",
    "API",
    "JSON",
    "HTML",
    "CSS",
    "NODEJS",
    "TYPESCRIPT",
    "WEBPACK",
    "BABEL",
    "REDUX",
    "HOOKS",
    "STATE",
    "PROPS",
    "CONTEXT",
    "EFFECT",
    "MEMO",
    "LAZY",
];

#[derive(Debug, Error)]
pub enum WordListError {
    #[error("word list is empty")]
    Empty,
    #[error("word {0:?} contains characters outside A-Z")]
    InvalidWord(String),
    #[error("could not read word list: {0}")]
    Io(#[from] io::Error),
}

impl From<WordListError> for io::Error {
    fn from(value: WordListError) -> Self {
        match value {
            WordListError::Io(e) => e,
            other => io::Error::new(io::ErrorKind::InvalidData, other.to_string()),
        }
    }
}

/// The candidate pool for secret words. Validated on construction and
/// immutable afterwards, so selection can assume a non-empty A-Z-only list.
#[derive(Debug, Clone)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    pub fn new(words: Vec<String>) -> Result<Self, WordListError> {
        if words.is_empty() {
            return Err(WordListError::Empty);
        }
        let mut normalized = Vec::with_capacity(words.len());
        for word in words {
            let word = word.to_ascii_uppercase();
            if word.is_empty() || !word.chars().all(|c| c.is_ascii_uppercase()) {
                return Err(WordListError::InvalidWord(word));
            }
            normalized.push(word);
        }
        Ok(Self { words: normalized })
    }

    pub fn builtin() -> Self {
        Self {
            words: BUILTIN_WORDS.iter().map(|word| word.to_string()).collect(),
        }
    }

    /// Loads a list from a file, one word per line.
    pub fn load(path: &Path) -> Result<Self, WordListError> {
        let contents = fs::read_to_string(path)?;
        Self::new(contents.lines().map(|line| line.trim().to_string()).collect())
    }

    pub fn choose<R: Rng>(&self, rng: &mut R) -> &str {
        // unwrap because the list is never empty after construction
        self.words.choose(rng).unwrap()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;

    #[test]
    fn test_builtin_is_valid() {
        let list = WordList::builtin();
        assert_eq!(list.words.len(), 40);
        for word in &list.words {
            assert!(word.chars().all(|c| c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_empty_list_is_rejected() {
        assert!(matches!(WordList::new(vec![]), Err(WordListError::Empty)));
    }

    #[test]
    fn test_invalid_word_is_rejected() {
        let result = WordList::new(vec!["CAT".to_string(), "DOG HOUSE".to_string()]);
        assert!(matches!(result, Err(WordListError::InvalidWord(_))));
    }

    #[test]
    fn test_blank_line_is_rejected() {
        let result = WordList::new(vec!["CAT".to_string(), String::new()]);
        assert!(matches!(result, Err(WordListError::InvalidWord(_))));
    }

    #[test]
    fn test_lowercase_words_are_normalized() {
        let list = WordList::new(vec!["gato".to_string()]).unwrap();
        assert!(list.contains("GATO"));
    }

    #[test]
    fn test_choose_draws_from_the_list() {
        let list = WordList::builtin();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let word = list.choose(&mut rng).to_string();
            assert!(list.contains(&word));
        }
    }

    #[test]
    fn test_choose_is_deterministic_with_a_seed() {
        let list = WordList::builtin();
        let first = list.choose(&mut StdRng::seed_from_u64(7)).to_string();
        let second = list.choose(&mut StdRng::seed_from_u64(7)).to_string();
        assert_eq!(first, second);
    }
}
