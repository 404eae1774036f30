use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

mod dictionary;
mod dictionary_api;
mod random_word_api;
mod word_info;

pub use dictionary::{Word, WordDefinition, WordMeaning};
pub use reqwest::Url;
pub use word_info::{WordInfo, MAX_RELATED_WORDS, NO_DEFINITION};

pub const DEFAULT_RANDOM_WORD_URL: &str = "https://random-word-api.herokuapp.com/word";
pub const DEFAULT_DEFINITION_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to build the http client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request failed: {0}")]
    Fetch(#[source] reqwest::Error),
    #[error("failed to decode the response: {0}")]
    Deserialize(#[source] reqwest::Error),
    #[error("unexpected response shape: {0}")]
    Malformed(String),
    #[error("{0}")]
    NotFound(NotFoundError),
}

/// The object the lexical service answers with when it knows nothing about a word.
#[derive(Debug, Default, Deserialize)]
pub struct NotFoundError {
    pub title: Option<String>,
    pub message: Option<String>,
}

impl std::fmt::Display for NotFoundError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.title, &self.message) {
            (Some(title), Some(message)) => write!(f, "{title}: {message}"),
            (Some(text), None) | (None, Some(text)) => write!(f, "{text}"),
            (None, None) => write!(f, "no definitions found"),
        }
    }
}

/// Endpoints and timeout shared by both services.
#[derive(Debug, Clone)]
pub struct DictionaryConfig {
    pub random_word_url: Url,
    pub definition_url: Url,
    pub timeout: Duration,
}

pub struct Dictionary {
    client: reqwest::Client,
    config: DictionaryConfig,
}

impl Dictionary {
    pub fn new(config: DictionaryConfig) -> Result<Self, DictionaryError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(DictionaryError::Client)?;
        Ok(Self { client, config })
    }

    /// Fetches one random word, lower-cased. A single attempt is made.
    pub async fn random_word(&self) -> Result<String, DictionaryError> {
        random_word_api::get_random_word(&self.client, &self.config.random_word_url).await
    }

    pub async fn get_definition(&self, word: &str) -> Result<Word, DictionaryError> {
        dictionary_api::get_definition(&self.client, &self.config.definition_url, word).await
    }

    /// Looks up the clue data for `word`.
    ///
    /// Never fails: every lookup problem is logged and reported as `None`.
    pub async fn word_info(&self, word: &str) -> Option<WordInfo> {
        match self.get_definition(word).await {
            Ok(entry) => {
                let info = WordInfo::from_entry(&entry);
                if info.is_none() {
                    warn!(word, "dictionary entry has no definitions");
                }
                info
            }
            Err(DictionaryError::NotFound(not_found)) => {
                debug!(word, %not_found, "no dictionary entry");
                None
            }
            Err(error) => {
                warn!(word, %error, "dictionary lookup failed");
                None
            }
        }
    }
}
