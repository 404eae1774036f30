use serde_json::Value;
use tracing::{debug, warn};

use crate::{DictionaryError, NotFoundError, Word};

pub(crate) const NOT_FOUND_TITLE: &str = "No Definitions Found";

pub(crate) async fn get_definition(
    client: &reqwest::Client,
    base_url: &reqwest::Url,
    word: &str,
) -> Result<Word, DictionaryError> {
    let mut url = base_url.clone();
    url.path_segments_mut()
        .map_err(|_| DictionaryError::Malformed(format!("{base_url} cannot be used as a base url")))?
        .pop_if_empty()
        .push(word);
    debug!(%url, "looking up definition");
    // The service answers unknown words with a 404 carrying a JSON body, so the status is not checked.
    let res: reqwest::Response = client.get(url).send().await.map_err(DictionaryError::Fetch)?;
    let body = res.json::<Value>().await.map_err(DictionaryError::Deserialize)?;
    parse_lookup(body)
}

/// Decodes the lexical service body into its first entry.
pub(crate) fn parse_lookup(body: Value) -> Result<Word, DictionaryError> {
    match body {
        body @ Value::Object(_) => {
            let not_found = serde_json::from_value::<NotFoundError>(body).unwrap_or_default();
            if not_found.title.as_deref() != Some(NOT_FOUND_TITLE) {
                warn!(title = ?not_found.title, "unexpected object response from the lexical service");
            }
            Err(DictionaryError::NotFound(not_found))
        }
        body => {
            let entries = serde_json::from_value::<Vec<Word>>(body)
                .map_err(|error| DictionaryError::Malformed(error.to_string()))?;
            entries
                .into_iter()
                .next()
                .ok_or_else(|| DictionaryError::Malformed("the entry list was empty".to_owned()))
        }
    }
}
