use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fusion_core::models::{DEFAULT_WORD_COUNT, Language, NutritionSummary, RecipeRequest};
use fusion_core::{Config, GeminiClient, generate_post, jokes, prompt};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "fusion")]
#[command(about = "AI-driven recipe blog generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a recipe blog and nutrition summary
    Generate {
        /// Recipe topic
        #[arg(short, long)]
        topic: String,

        /// Approximate blog length in words
        #[arg(short, long, default_value_t = DEFAULT_WORD_COUNT)]
        words: u32,

        /// Blog language
        #[arg(short, long, default_value = "English")]
        language: String,

        /// Write the recipe text verbatim to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the prompts for a request without calling the API
    Prompt {
        /// Recipe topic
        #[arg(short, long)]
        topic: String,

        /// Approximate blog length in words
        #[arg(short, long, default_value_t = DEFAULT_WORD_COUNT)]
        words: u32,

        /// Blog language
        #[arg(short, long, default_value = "English")]
        language: String,
    },

    /// Print a random programmer joke
    Joke,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    // Load .env
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            topic,
            words,
            language,
            output,
        } => {
            generate_command(topic, words, language, output).await?;
        }
        Commands::Prompt {
            topic,
            words,
            language,
        } => {
            prompt_command(topic, words, language)?;
        }
        Commands::Joke => {
            println!("{}", jokes::random_joke());
        }
    }

    Ok(())
}

fn build_request(topic: String, words: u32, language: String) -> Result<RecipeRequest> {
    let language: Language = language
        .parse()
        .with_context(|| format!("'{language}' is not a supported language"))?;
    Ok(RecipeRequest::new(topic, words, language)?)
}

async fn generate_command(
    topic: String,
    words: u32,
    language: String,
    output: Option<PathBuf>,
) -> Result<()> {
    let request = build_request(topic, words, language)?;

    let config = Config::from_env()?;
    let client = GeminiClient::new(&config);

    info!(
        "Generating a ~{} word {} blog about \"{}\"",
        request.word_count, request.language, request.topic
    );

    let post = generate_post(&client, &request).await?;

    println!("{}\n", post.joke);

    println!("=== Recipe Blog ===\n");
    println!("{}\n", post.recipe_text);

    println!("=== Nutrition Summary ===\n");
    match &post.nutrition {
        NutritionSummary::Ready(text) => println!("{text}"),
        NutritionSummary::Failed(notice) => println!("(!) {notice}"),
    }

    if let Some(path) = output {
        std::fs::write(&path, &post.recipe_text)
            .with_context(|| format!("Failed to write recipe to {}", path.display()))?;
        info!("Recipe saved to {}", path.display());
    }

    Ok(())
}

fn prompt_command(topic: String, words: u32, language: String) -> Result<()> {
    let request = build_request(topic, words, language)?;

    println!("=== Recipe prompt ===\n");
    println!("{}\n", prompt::recipe_prompt(&request));

    println!("=== Nutrition prompt ===\n");
    println!("{}", prompt::nutrition_prompt(&request.topic));

    Ok(())
}
