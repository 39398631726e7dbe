//! The generation pipeline
//!
//! Two sequential calls against the text-generation service: one for the
//! recipe blog, one for the nutrition summary. The calls are independent;
//! the second prompt never depends on the first call's output.

use crate::error::GenerateError;
use crate::jokes;
use crate::models::{GeneratedPost, NutritionSummary, RecipeRequest};
use crate::prompt;
use async_trait::async_trait;
use tracing::{info, warn};

/// The text-generation seam
///
/// [`crate::GeminiClient`] is the production implementation; tests substitute
/// a counting mock to assert how often the service is hit.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError>;
}

/// Run one full generation cycle for a validated request
///
/// If the recipe call fails the error propagates and the nutrition call is
/// never attempted. If only the nutrition call fails, the recipe text is
/// still returned together with a failure notice, so the user keeps the
/// half that worked.
pub async fn generate_post(
    generator: &dyn TextGenerator,
    request: &RecipeRequest,
) -> Result<GeneratedPost, GenerateError> {
    let joke = jokes::random_joke();

    info!(
        topic = %request.topic,
        words = request.word_count,
        language = %request.language,
        "Generating recipe blog"
    );
    let recipe_text = generator.generate(&prompt::recipe_prompt(request)).await?;

    info!(topic = %request.topic, "Generating nutrition summary");
    let nutrition = match generator
        .generate(&prompt::nutrition_prompt(&request.topic))
        .await
    {
        Ok(text) => NutritionSummary::Ready(text),
        Err(e) => {
            warn!(topic = %request.topic, error = %e, "Nutrition summary failed");
            NutritionSummary::Failed(format!("Nutrition summary unavailable: {e}"))
        }
    };

    Ok(GeneratedPost {
        joke: joke.to_string(),
        recipe_text,
        nutrition,
    })
}
