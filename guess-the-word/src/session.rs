//! Round lifecycle: load a word with its clue data, reveal it letter by letter,
//! check guesses against it.

use std::fmt;

use dictionary::{Dictionary, DictionaryError, WordInfo};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Stands in for letters that are not revealed yet.
pub const HINT_MASK: char = '*';

/// Where new words come from.
#[allow(async_fn_in_trait)]
pub trait WordSource {
    async fn random_word(&self) -> Result<String, DictionaryError>;
}

/// Where the clue data for a word comes from. `None` means nothing usable was found.
#[allow(async_fn_in_trait)]
pub trait WordLookup {
    async fn word_info(&self, word: &str) -> Option<WordInfo>;
}

impl WordSource for Dictionary {
    async fn random_word(&self) -> Result<String, DictionaryError> {
        Dictionary::random_word(self).await
    }
}

impl WordLookup for Dictionary {
    async fn word_info(&self, word: &str) -> Option<WordInfo> {
        Dictionary::word_info(self, word).await
    }
}

impl<T: WordSource> WordSource for &T {
    async fn random_word(&self) -> Result<String, DictionaryError> {
        (**self).random_word().await
    }
}

impl<T: WordLookup> WordLookup for &T {
    async fn word_info(&self, word: &str) -> Option<WordInfo> {
        (**self).word_info(word).await
    }
}

#[derive(Debug, Error)]
pub enum GameError {
    #[error("Could not load word: {0}")]
    SourceUnavailable(#[source] DictionaryError),
    #[error("Enter a guess first!")]
    EmptyGuess,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintOutcome {
    /// No round has been started yet
    NoActiveWord,
    /// Every letter is already shown; nothing changed
    Exhausted,
    /// The word with the revealed prefix shown and the rest masked
    Revealed(String),
}

impl fmt::Display for HintOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HintOutcome::NoActiveWord => write!(f, "Load a word first!"),
            HintOutcome::Exhausted => write!(f, "All letters have been revealed!"),
            HintOutcome::Revealed(hint) => write!(f, "Hint: {hint}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    Correct(Solution),
    /// Deliberately carries nothing, the word stays hidden.
    Incorrect,
}

/// Everything shown once the word has been guessed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub word: String,
    pub definition: String,
    /// Comma separated, `None` when there are none
    pub synonyms: String,
    pub antonyms: String,
}

impl Solution {
    fn new(round: &Round) -> Self {
        Self {
            word: round.word.clone(),
            definition: round.info.definition.clone(),
            synonyms: join_or_none(&round.info.synonyms),
            antonyms: join_or_none(&round.info.antonyms),
        }
    }
}

fn join_or_none(words: &[String]) -> String {
    if words.is_empty() {
        "None".to_owned()
    } else {
        words.join(", ")
    }
}

/// The active round. The word and its info only ever change together.
#[derive(Debug)]
struct Round {
    word: String,
    info: WordInfo,
    /// Letters shown so far, never more than the word's length
    revealed: usize,
}

impl Round {
    fn new(word: String, info: WordInfo) -> Self {
        Self {
            word,
            info,
            revealed: 0,
        }
    }

    fn len(&self) -> usize {
        self.word.chars().count()
    }

    fn hint(&self) -> String {
        self.word
            .chars()
            .enumerate()
            .map(|(index, letter)| if index < self.revealed { letter } else { HINT_MASK })
            .collect()
    }
}

pub struct Session<S, L> {
    source: S,
    lookup: L,
    round: Option<Round>,
}

impl<S: WordSource, L: WordLookup> Session<S, L> {
    pub fn new(source: S, lookup: L) -> Self {
        Self {
            source,
            lookup,
            round: None,
        }
    }

    /// Replaces the current round with a fresh word.
    ///
    /// If no word can be fetched the previous round is left untouched. A failed
    /// lookup still starts the round, with [`WordInfo::default`] as its clue data.
    pub async fn start_new_round(&mut self) -> Result<&WordInfo, GameError> {
        let word = self.source.random_word().await.map_err(|error| {
            warn!(%error, "could not load a new word");
            GameError::SourceUnavailable(error)
        })?;
        let info = match self.lookup.word_info(&word).await {
            Some(info) => info,
            None => {
                debug!(%word, "no clue data, falling back to an empty record");
                WordInfo::default()
            }
        };
        info!(letters = word.chars().count(), "new round started");
        Ok(&self.round.insert(Round::new(word, info)).info)
    }

    pub fn reveal_hint(&mut self) -> HintOutcome {
        let Some(round) = self.round.as_mut() else {
            return HintOutcome::NoActiveWord;
        };
        if round.revealed >= round.len() {
            return HintOutcome::Exhausted;
        }
        round.revealed += 1;
        HintOutcome::Revealed(round.hint())
    }

    /// Compares `raw` to the current word, ignoring case and surrounding whitespace.
    pub fn check_guess(&self, raw: &str) -> Result<GuessOutcome, GameError> {
        let guess = raw.trim().to_lowercase();
        if guess.is_empty() {
            return Err(GameError::EmptyGuess);
        }
        match &self.round {
            Some(round) if round.word == guess => Ok(GuessOutcome::Correct(Solution::new(round))),
            _ => Ok(GuessOutcome::Incorrect),
        }
    }

    pub fn current_word(&self) -> Option<&str> {
        self.round.as_ref().map(|round| &round.word[..])
    }

    pub fn info(&self) -> Option<&WordInfo> {
        self.round.as_ref().map(|round| &round.info)
    }

    pub fn hint_index(&self) -> usize {
        self.round.as_ref().map_or(0, |round| round.revealed)
    }
}
