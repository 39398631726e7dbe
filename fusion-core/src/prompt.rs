//! Prompt construction
//!
//! Both prompts are plain deterministic string templates: same inputs, same
//! prompt, byte for byte. The nutrition prompt deliberately depends only on
//! the topic, so word count and language never change it.

use crate::models::RecipeRequest;

/// Build the recipe blog prompt from a validated request
///
/// Interpolates the literal language name, topic, and word count, and asks
/// for the fixed section structure of the blog.
#[must_use]
pub fn recipe_prompt(request: &RecipeRequest) -> String {
    format!(
        "Write a detailed and engaging recipe blog in {language} about {topic}.\n\
         Length: {words} words.\n\
         \n\
         Include:\n\
         Introduction, ingredients, steps, tips, and a conclusion.",
        language = request.language.name(),
        topic = request.topic,
        words = request.word_count,
    )
}

/// Build the nutrition summary prompt for a topic
#[must_use]
pub fn nutrition_prompt(topic: &str) -> String {
    format!("Give a short nutrition summary for {topic}")
}
