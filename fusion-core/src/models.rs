use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Lower bound for the requested blog length, in words
pub const MIN_WORD_COUNT: u32 = 200;

/// Upper bound for the requested blog length, in words
pub const MAX_WORD_COUNT: u32 = 2000;

/// Word count used when the user doesn't move the slider
pub const DEFAULT_WORD_COUNT: u32 = 800;

/// Languages the blog can be written in
///
/// The list is fixed; prompts interpolate the English name of the language,
/// which Gemini understands regardless of the target language itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    Hindi,
    Telugu,
    Spanish,
    French,
}

impl Language {
    /// All supported languages, in UI display order
    pub const ALL: [Language; 5] = [
        Language::English,
        Language::Hindi,
        Language::Telugu,
        Language::Spanish,
        Language::French,
    ];

    /// English name of the language, as interpolated into prompts
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "Hindi",
            Language::Telugu => "Telugu",
            Language::Spanish => "Spanish",
            Language::French => "French",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .iter()
            .copied()
            .find(|lang| lang.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RequestError::UnknownLanguage(s.to_string()))
    }
}

/// Validation failures for a submitted recipe request
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum RequestError {
    #[error("please enter a topic")]
    MissingTopic,
    #[error("word count {0} is outside the supported range {MIN_WORD_COUNT}-{MAX_WORD_COUNT}")]
    WordCountOutOfRange(u32),
    #[error("unsupported language: {0}")]
    UnknownLanguage(String),
}

/// One user submission: what to write about, how long, in which language
///
/// Built fresh per submission and immutable afterwards. [`RecipeRequest::new`]
/// is the only constructor, so a value of this type is always valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeRequest {
    pub topic: String,
    pub word_count: u32,
    pub language: Language,
}

impl RecipeRequest {
    /// Validate user inputs and build a request
    ///
    /// The topic is trimmed; a topic that is empty after trimming is rejected
    /// with [`RequestError::MissingTopic`] and no generation call happens
    /// downstream. The word count must lie in
    /// [`MIN_WORD_COUNT`]..=[`MAX_WORD_COUNT`].
    pub fn new(
        topic: impl Into<String>,
        word_count: u32,
        language: Language,
    ) -> Result<Self, RequestError> {
        let topic = topic.into().trim().to_string();
        if topic.is_empty() {
            return Err(RequestError::MissingTopic);
        }
        if !(MIN_WORD_COUNT..=MAX_WORD_COUNT).contains(&word_count) {
            return Err(RequestError::WordCountOutOfRange(word_count));
        }
        Ok(Self {
            topic,
            word_count,
            language,
        })
    }
}

/// Nutrition half of a generation cycle
///
/// The nutrition call runs after the recipe call succeeded, so its failure is
/// not fatal: the recipe is still shown, together with the failure notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NutritionSummary {
    Ready(String),
    Failed(String),
}

impl NutritionSummary {
    /// Summary text, if the nutrition call succeeded
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            NutritionSummary::Ready(text) => Some(text),
            NutritionSummary::Failed(_) => None,
        }
    }
}

/// Result of one full generation cycle, owned by the UI for one render
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPost {
    /// Programmer joke shown while the result is presented
    pub joke: String,
    /// The recipe blog text, verbatim from the model
    pub recipe_text: String,
    pub nutrition: NutritionSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_roundtrip() {
        for lang in Language::ALL {
            assert_eq!(lang.name().parse::<Language>().unwrap(), lang);
        }
    }

    #[test]
    fn test_language_parse_case_insensitive() {
        assert_eq!("telugu".parse::<Language>().unwrap(), Language::Telugu);
        assert_eq!("  FRENCH ".parse::<Language>().unwrap(), Language::French);
    }

    #[test]
    fn test_language_parse_unknown() {
        assert!(matches!(
            "Klingon".parse::<Language>(),
            Err(RequestError::UnknownLanguage(_))
        ));
    }

    #[test]
    fn test_default_language_is_first_entry() {
        assert_eq!(Language::default(), Language::ALL[0]);
    }

    #[test]
    fn test_request_rejects_empty_topic() {
        assert_eq!(
            RecipeRequest::new("", DEFAULT_WORD_COUNT, Language::English),
            Err(RequestError::MissingTopic)
        );
        // Whitespace-only counts as empty
        assert_eq!(
            RecipeRequest::new("   \t", DEFAULT_WORD_COUNT, Language::English),
            Err(RequestError::MissingTopic)
        );
    }

    #[test]
    fn test_request_word_count_bounds() {
        let req = |words| RecipeRequest::new("garlic bread", words, Language::English);

        assert!(req(MIN_WORD_COUNT).is_ok());
        assert!(req(MAX_WORD_COUNT).is_ok());
        assert_eq!(
            req(MIN_WORD_COUNT - 1),
            Err(RequestError::WordCountOutOfRange(MIN_WORD_COUNT - 1))
        );
        assert_eq!(
            req(MAX_WORD_COUNT + 1),
            Err(RequestError::WordCountOutOfRange(MAX_WORD_COUNT + 1))
        );
    }

    #[test]
    fn test_request_trims_topic() {
        let req = RecipeRequest::new("  garlic bread  ", 800, Language::English).unwrap();
        assert_eq!(req.topic, "garlic bread");
    }
}
