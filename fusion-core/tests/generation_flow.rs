//! Integration tests for the generation pipeline
//!
//! Uses a counting mock for the text-generation service, so the tests can
//! assert exactly how many calls each scenario performs.

use async_trait::async_trait;
use fusion_core::error::GenerateError;
use fusion_core::generator::{TextGenerator, generate_post};
use fusion_core::jokes::JOKES;
use fusion_core::models::{Language, NutritionSummary, RecipeRequest, RequestError};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Mock generator: scripted per-call outcomes, counts every call
struct MockGenerator {
    calls: AtomicUsize,
    /// Outcome per call index; calls past the end fail
    script: Vec<Result<&'static str, ()>>,
}

impl MockGenerator {
    fn new(script: Vec<Result<&'static str, ()>>) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            script,
        }
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, GenerateError> {
        let idx = self.calls.fetch_add(1, Ordering::SeqCst);
        match self.script.get(idx) {
            Some(Ok(text)) => Ok((*text).to_string()),
            _ => Err(GenerateError::EmptyResponse),
        }
    }
}

fn garlic_bread() -> RecipeRequest {
    RecipeRequest::new("garlic bread", 800, Language::English).unwrap()
}

#[test]
fn empty_topic_never_reaches_the_generator() {
    let generator = MockGenerator::new(vec![Ok("unused")]);

    // Validation fails at construction, so there is no request to run
    let result = RecipeRequest::new("", 800, Language::English);

    assert_eq!(result, Err(RequestError::MissingTopic));
    assert_eq!(generator.call_count(), 0);
}

#[tokio::test]
async fn successful_cycle_makes_exactly_two_calls() {
    let generator = MockGenerator::new(vec![Ok("A lovely recipe blog."), Ok("Mostly carbs.")]);

    let post = generate_post(&generator, &garlic_bread()).await.unwrap();

    assert_eq!(generator.call_count(), 2);
    assert_eq!(post.recipe_text, "A lovely recipe blog.");
    assert_eq!(
        post.nutrition,
        NutritionSummary::Ready("Mostly carbs.".to_string())
    );
    assert!(JOKES.contains(&post.joke.as_str()));
}

#[tokio::test]
async fn recipe_failure_short_circuits_before_nutrition() {
    let generator = MockGenerator::new(vec![Err(()), Ok("never requested")]);

    let result = generate_post(&generator, &garlic_bread()).await;

    assert!(result.is_err());
    assert_eq!(generator.call_count(), 1);
}

#[tokio::test]
async fn nutrition_failure_keeps_the_recipe() {
    let generator = MockGenerator::new(vec![Ok("A lovely recipe blog."), Err(())]);

    let post = generate_post(&generator, &garlic_bread()).await.unwrap();

    assert_eq!(generator.call_count(), 2);
    assert_eq!(post.recipe_text, "A lovely recipe blog.");
    match post.nutrition {
        NutritionSummary::Failed(notice) => {
            assert!(notice.contains("Nutrition summary unavailable"));
        }
        NutritionSummary::Ready(_) => panic!("nutrition should have failed"),
    }
}

#[tokio::test]
async fn recipe_text_passes_through_verbatim() {
    // The download artifact is byte-identical to the model output, so the
    // pipeline must never touch the text
    let raw = "Line one.\n\n  Indented line.\nLine three with trailing space. ";
    let generator = MockGenerator::new(vec![Ok(raw), Ok("fine")]);

    let post = generate_post(&generator, &garlic_bread()).await.unwrap();

    assert_eq!(post.recipe_text, raw);
}
