// https://random-word-api.herokuapp.com/word - one word per request, no parameters
// https://random-word-api.vercel.app/api?words=1 - same response shape, usable through --word-url

use tracing::debug;

use crate::DictionaryError;

pub(crate) async fn get_random_word(
    client: &reqwest::Client,
    url: &reqwest::Url,
) -> Result<String, DictionaryError> {
    debug!(%url, "requesting a random word");
    let res: reqwest::Response = client
        .get(url.clone())
        .send()
        .await
        .and_then(reqwest::Response::error_for_status)
        .map_err(DictionaryError::Fetch)?;
    let words = res
        .json::<Vec<String>>()
        .await
        .map_err(DictionaryError::Deserialize)?;
    first_word(words)
}

/// Picks the word out of the service response, lower-cased.
pub(crate) fn first_word(words: Vec<String>) -> Result<String, DictionaryError> {
    let word = words
        .into_iter()
        .next()
        .ok_or_else(|| DictionaryError::Malformed("the random word list was empty".to_owned()))?;
    let word = word.trim().to_lowercase();
    if word.is_empty() {
        return Err(DictionaryError::Malformed(
            "the random word service returned a blank word".to_owned(),
        ));
    }
    Ok(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_the_first_word() {
        let word = first_word(vec!["Apple".to_owned()]).unwrap();
        assert_eq!(word, "apple");
    }

    #[test]
    fn empty_or_blank_responses_are_malformed() {
        assert!(matches!(first_word(vec![]), Err(DictionaryError::Malformed(_))));
        assert!(matches!(
            first_word(vec!["  ".to_owned()]),
            Err(DictionaryError::Malformed(_))
        ));
    }

    #[test]
    fn non_string_payload_fails_to_decode() {
        assert!(serde_json::from_str::<Vec<String>>(r#"[42]"#).is_err());
        assert!(serde_json::from_str::<Vec<String>>(r#"{"word": "apple"}"#).is_err());
    }
}
