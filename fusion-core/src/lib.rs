// Models are always available
pub mod models;

// Server-only modules
#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod error;
#[cfg(feature = "server")]
pub mod gemini;
#[cfg(feature = "server")]
pub mod generator;
#[cfg(feature = "server")]
pub mod http;
#[cfg(feature = "server")]
pub mod jokes;
#[cfg(feature = "server")]
pub mod prompt;

// Re-export commonly used types
pub use models::{
    DEFAULT_WORD_COUNT, GeneratedPost, Language, MAX_WORD_COUNT, MIN_WORD_COUNT, NutritionSummary,
    RecipeRequest, RequestError,
};

#[cfg(feature = "server")]
pub use config::Config;
#[cfg(feature = "server")]
pub use error::GenerateError;
#[cfg(feature = "server")]
pub use gemini::GeminiClient;
#[cfg(feature = "server")]
pub use generator::{TextGenerator, generate_post};
