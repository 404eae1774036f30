use std::time::Duration;

use clap::Parser;
use dictionary::{DictionaryConfig, Url, DEFAULT_DEFINITION_URL, DEFAULT_RANDOM_WORD_URL, DEFAULT_TIMEOUT};
use dotenvy::dotenv;
use tracing::info;

#[derive(Debug, Parser)]
#[command(
    name = "guess-the-word",
    about = "Guess a random word from its definition, synonyms and antonyms",
    version
)]
pub struct Config {
    /// Endpoint answering with a JSON array holding one random word
    #[arg(long, env = "GUESS_WORD_URL", default_value = DEFAULT_RANDOM_WORD_URL)]
    pub word_url: Url,

    /// Base url of the dictionary service, the word is appended as the last path segment
    #[arg(long, env = "GUESS_DICTIONARY_URL", default_value = DEFAULT_DEFINITION_URL)]
    pub dictionary_url: Url,

    /// Timeout for each request, in seconds
    #[arg(
        long,
        env = "GUESS_TIMEOUT_SECS",
        default_value_t = DEFAULT_TIMEOUT.as_secs(),
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_secs: u64,
}

impl Config {
    pub fn dictionary_config(&self) -> DictionaryConfig {
        DictionaryConfig {
            random_word_url: self.word_url.clone(),
            definition_url: self.dictionary_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
        }
    }
}

/// Reads the command line, falling back to the environment and an optional `.env` file.
pub fn load_config() -> Config {
    dotenv().ok();
    let config = Config::parse();
    info!(
        word_url = %config.word_url,
        dictionary_url = %config.dictionary_url,
        timeout_secs = config.timeout_secs,
        "configuration loaded"
    );
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_public_services() {
        let config = Config::try_parse_from(["guess-the-word"]).unwrap();
        let dictionary = config.dictionary_config();
        assert_eq!(dictionary.random_word_url.as_str(), DEFAULT_RANDOM_WORD_URL);
        assert_eq!(dictionary.definition_url.as_str(), DEFAULT_DEFINITION_URL);
        assert_eq!(dictionary.timeout, Duration::from_secs(5));
    }

    #[test]
    fn overrides_from_arguments() {
        let config = Config::try_parse_from([
            "guess-the-word",
            "--word-url",
            "http://localhost:8080/word",
            "--timeout-secs",
            "2",
        ])
        .unwrap();
        assert_eq!(config.word_url.as_str(), "http://localhost:8080/word");
        assert_eq!(config.dictionary_config().timeout, Duration::from_secs(2));
    }

    #[test]
    fn rejects_zero_timeout_and_bad_urls() {
        assert!(Config::try_parse_from(["guess-the-word", "--timeout-secs", "0"]).is_err());
        assert!(Config::try_parse_from(["guess-the-word", "--word-url", "not a url"]).is_err());
    }
}
