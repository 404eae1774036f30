use serde::Deserialize;

/// One entry returned by the lexical service for a word.
#[derive(Debug, Deserialize)]
pub struct Word {
    #[serde(default)]
    pub word: String,
    pub phonetic: Option<String>,
    pub origin: Option<String>,
    pub meanings: Vec<WordMeaning>,
}



#[derive(Debug, Deserialize)]
pub struct WordMeaning {
    pub definitions: Vec<WordDefinition>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}


#[derive(Debug, Deserialize)]
pub struct WordDefinition {
    #[serde(default)]
    pub definition: Option<String>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

impl Word {
    pub fn all_synonyms(&self) -> impl Iterator<Item = &str> {
        self.meanings.iter().flat_map(|meaning| {
            meaning.synonyms.iter().chain(
                meaning
                    .definitions
                    .iter()
                    .flat_map(|definition| definition.synonyms.iter()),
            )
        }).map(|synonym| &synonym[..])
    }

    pub fn all_antonyms(&self) -> impl Iterator<Item = &str> {
        self.meanings.iter().flat_map(|meaning| {
            meaning.antonyms.iter().chain(
                meaning
                    .definitions
                    .iter()
                    .flat_map(|definition| definition.antonyms.iter()),
            )
        }).map(|antonym| &antonym[..])
    }

    /// The first definition of the first meaning, `None` when the entry has no meanings
    /// or the first meaning has no definitions.
    pub fn first_definition(&self) -> Option<&WordDefinition> {
        self.meanings.first()?.definitions.first()
    }
}
