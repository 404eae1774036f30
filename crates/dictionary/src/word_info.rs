use std::collections::HashSet;

use crate::Word;

pub const NO_DEFINITION: &str = "No definition available.";
pub const MAX_RELATED_WORDS: usize = 8;

/// The clue data attached to a round: a definition plus a few related words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordInfo {
    pub definition: String,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}

impl Default for WordInfo {
    fn default() -> Self {
        Self {
            definition: NO_DEFINITION.to_owned(),
            synonyms: Vec::new(),
            antonyms: Vec::new(),
        }
    }
}

impl WordInfo {
    /// Builds the clue record from a decoded entry.
    ///
    /// Returns `None` when the entry has no first definition to show.
    /// Related words are collected from every meaning and every definition,
    /// deduplicated and capped at [`MAX_RELATED_WORDS`]. Which words survive the cap
    /// is unspecified.
    pub fn from_entry(word: &Word) -> Option<Self> {
        let definition = word
            .first_definition()?
            .definition
            .clone()
            .unwrap_or_else(|| NO_DEFINITION.to_owned());
        Some(Self {
            definition,
            synonyms: unique_capped(word.all_synonyms()),
            antonyms: unique_capped(word.all_antonyms()),
        })
    }

    pub fn first_synonym(&self) -> Option<&str> {
        self.synonyms.first().map(|synonym| &synonym[..])
    }

    pub fn first_antonym(&self) -> Option<&str> {
        self.antonyms.first().map(|antonym| &antonym[..])
    }
}

fn unique_capped<'a>(words: impl Iterator<Item = &'a str>) -> Vec<String> {
    words
        .collect::<HashSet<&str>>()
        .into_iter()
        .take(MAX_RELATED_WORDS)
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(json: &str) -> Word {
        serde_json::from_str(json).unwrap()
    }

    fn assert_unique(words: &[String]) {
        let set = words.iter().collect::<HashSet<_>>();
        assert_eq!(set.len(), words.len(), "duplicates in {words:?}");
    }

    #[test]
    fn takes_first_definition_of_first_meaning() {
        let word = entry(
            r#"{
                "word": "apple",
                "meanings": [
                    {"definitions": [{"definition": "a round fruit"}, {"definition": "a tree"}]},
                    {"definitions": [{"definition": "something else"}]}
                ]
            }"#,
        );
        let info = WordInfo::from_entry(&word).unwrap();
        assert_eq!(info.definition, "a round fruit");
        assert!(info.synonyms.is_empty());
        assert!(info.antonyms.is_empty());
    }

    #[test]
    fn missing_definition_text_uses_placeholder() {
        let word = entry(r#"{"word": "apple", "meanings": [{"definitions": [{}]}]}"#);
        let info = WordInfo::from_entry(&word).unwrap();
        assert_eq!(info.definition, NO_DEFINITION);
    }

    #[test]
    fn no_meanings_is_absent() {
        let word = entry(r#"{"word": "apple", "meanings": []}"#);
        assert_eq!(WordInfo::from_entry(&word), None);
        let word = entry(r#"{"word": "apple", "meanings": [{"definitions": []}]}"#);
        assert_eq!(WordInfo::from_entry(&word), None);
    }

    #[test]
    fn related_words_are_merged_across_meanings_and_deduplicated() {
        let word = entry(
            r#"{
                "word": "quick",
                "meanings": [
                    {
                        "synonyms": ["fast", "rapid"],
                        "antonyms": ["slow"],
                        "definitions": [{"definition": "moving fast", "synonyms": ["fast", "swift"]}]
                    },
                    {
                        "synonyms": ["rapid"],
                        "definitions": [{"definition": "alive", "antonyms": ["slow", "dead"]}]
                    }
                ]
            }"#,
        );
        let info = WordInfo::from_entry(&word).unwrap();
        let mut synonyms = info.synonyms.clone();
        synonyms.sort();
        assert_eq!(synonyms, ["fast", "rapid", "swift"]);
        let mut antonyms = info.antonyms.clone();
        antonyms.sort();
        assert_eq!(antonyms, ["dead", "slow"]);
    }

    #[test]
    fn related_words_are_capped() {
        let synonyms = (0..12)
            .map(|i| format!("\"syn{i}\""))
            .collect::<Vec<_>>()
            .join(",");
        let json = format!(
            r#"{{
                "word": "big",
                "meanings": [
                    {{"synonyms": [{synonyms}], "definitions": [{{"definition": "large", "synonyms": [{synonyms}]}}]}},
                    {{"synonyms": [{synonyms}], "definitions": [{{"definition": "great"}}]}}
                ]
            }}"#
        );
        let info = WordInfo::from_entry(&entry(&json)).unwrap();
        assert_eq!(info.synonyms.len(), MAX_RELATED_WORDS);
        assert_unique(&info.synonyms);
    }

    #[test]
    fn fallback_record() {
        let info = WordInfo::default();
        assert_eq!(info.definition, "No definition available.");
        assert_eq!(info.first_synonym(), None);
        assert_eq!(info.first_antonym(), None);
    }
}
