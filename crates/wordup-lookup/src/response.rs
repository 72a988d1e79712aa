use serde::Deserialize;
use wordup_types::WordResult;

use crate::LookupError;

pub const NO_DEFINITION: &str = "No definition available";

/// Wire shape of the lookup endpoint
#[derive(Debug, Deserialize)]
pub struct LookupResponse {
    /// Absent or null keeps the result but leaves the word panel empty
    #[serde(default)]
    pub word: Option<String>,
    pub results: Vec<RawSense>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSense {
    pub part_of_speech: Option<String>,
    pub definition: Option<String>,
    pub examples: Option<Vec<String>>,
    pub synonyms: Option<Vec<String>>,
}

impl LookupResponse {
    /// Only the first sense is kept
    pub fn into_word_result(self) -> Result<WordResult, LookupError> {
        let sense = self
            .results
            .into_iter()
            .next()
            .ok_or(LookupError::NoResults)?;

        Ok(WordResult {
            word: self.word.unwrap_or_default(),
            part_of_speech: sense.part_of_speech.unwrap_or_default(),
            definition: sense
                .definition
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| NO_DEFINITION.to_string()),
            examples: sense.examples.unwrap_or_default(),
            synonyms: sense.synonyms.unwrap_or_default(),
        })
    }
}
