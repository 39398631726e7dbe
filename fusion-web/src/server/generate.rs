use anyhow::Result;
use fusion_core::models::{GeneratedPost, RecipeRequest};
use fusion_core::{GeminiClient, generate_post};
use std::sync::OnceLock;

/// Process-wide Gemini client, constructed once and read-only afterwards
static CLIENT: OnceLock<GeminiClient> = OnceLock::new();

/// Get or initialize the shared client
pub fn client() -> Result<&'static GeminiClient> {
    if let Some(client) = CLIENT.get() {
        return Ok(client);
    }

    let config = super::config::get()?;
    let _ = CLIENT.set(GeminiClient::new(config));
    CLIENT
        .get()
        .ok_or_else(|| anyhow::anyhow!("Failed to initialize Gemini client"))
}

/// Run one generation cycle for the web layer
pub async fn generate(request: &RecipeRequest) -> Result<GeneratedPost> {
    let client = client()?;
    Ok(generate_post(client, request).await?)
}
