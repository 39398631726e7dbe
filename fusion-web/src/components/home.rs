use crate::components::hero::Hero;
use crate::utils::download_text_file;
use fusion_core::models::{
    DEFAULT_WORD_COUNT, GeneratedPost, Language, MAX_WORD_COUNT, MIN_WORD_COUNT, NutritionSummary,
};
use leptos::prelude::*;

#[server]
pub async fn generate_recipe_post(
    topic: String,
    word_count: u32,
    language: Language,
) -> Result<GeneratedPost, ServerFnError> {
    use crate::server::generate;
    use fusion_core::models::RecipeRequest;
    use std::time::Instant;

    let request = RecipeRequest::new(topic, word_count, language)
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let start = Instant::now();
    let result = generate::generate(&request).await;
    let duration_ms = start.elapsed().as_millis();

    match &result {
        Ok(post) => {
            tracing::info!(
                topic = %request.topic,
                words = request.word_count,
                language = %request.language,
                recipe_chars = post.recipe_text.len(),
                duration_ms = %duration_ms,
                "Generation completed"
            );
        }
        Err(e) => {
            tracing::error!(
                topic = %request.topic,
                error = %e,
                duration_ms = %duration_ms,
                "Generation failed"
            );
        }
    }

    result.map_err(|e| ServerFnError::new(e.to_string()))
}

#[component]
pub fn Home() -> impl IntoView {
    let (topic, set_topic) = signal(String::new());
    let (word_count, set_word_count) = signal(DEFAULT_WORD_COUNT);
    let (language, set_language) = signal(Language::default());
    let (post, set_post) = signal(Option::<GeneratedPost>::None);
    // Idle vs Generating; the form is locked while a cycle is in flight
    let (loading, set_loading) = signal(false);
    let (warning, set_warning) = signal(Option::<String>::None);
    let (error, set_error) = signal(Option::<String>::None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        if loading.get() {
            return;
        }
        if topic.get().trim().is_empty() {
            // Recovered locally, no server call happens
            set_warning.set(Some("Please enter a topic.".to_string()));
            return;
        }

        set_warning.set(None);
        set_error.set(None);
        set_loading.set(true);

        let request_topic = topic.get();
        let words = word_count.get();
        let lang = language.get();

        leptos::task::spawn_local(async move {
            match generate_recipe_post(request_topic, words, lang).await {
                Ok(generated) => {
                    set_post.set(Some(generated));
                    set_error.set(None);
                }
                Err(e) => {
                    set_error.set(Some(format!("Generation failed: {e}")));
                    leptos::logging::error!("API Error: {}", e);
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="page">
            <Hero/>

            <p class="intro">"Create stunning AI-powered recipe blogs with animations."</p>

            <form class="generator-form" on:submit=on_submit>
                <label class="field">
                    <span class="field-label">"Enter your recipe topic"</span>
                    <input
                        type="text"
                        class="topic-input"
                        placeholder="e.g. garlic bread"
                        prop:value=topic
                        on:input=move |ev| set_topic.set(event_target_value(&ev))
                        prop:disabled=loading
                    />
                </label>

                <label class="field">
                    <span class="field-label">
                        {move || format!("Word count: {}", word_count.get())}
                    </span>
                    <input
                        type="range"
                        class="word-count-slider"
                        min=MIN_WORD_COUNT
                        max=MAX_WORD_COUNT
                        prop:value=move || word_count.get().to_string()
                        on:input=move |ev| {
                            if let Ok(value) = event_target_value(&ev).parse::<u32>() {
                                set_word_count.set(value.clamp(MIN_WORD_COUNT, MAX_WORD_COUNT));
                            }
                        }
                        prop:disabled=loading
                    />
                </label>

                <label class="field">
                    <span class="field-label">"Language"</span>
                    <select
                        class="language-select"
                        on:change=move |ev| {
                            if let Ok(lang) = event_target_value(&ev).parse::<Language>() {
                                set_language.set(lang);
                            }
                        }
                        prop:disabled=loading
                    >
                        {Language::ALL
                            .iter()
                            .map(|lang| {
                                let lang = *lang;
                                view! {
                                    <option
                                        value=lang.name()
                                        selected=move || language.get() == lang
                                    >
                                        {lang.name()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>

                <button type="submit" class="generate-button" prop:disabled=loading>
                    {move || if loading.get() {
                        "🍳 Cooking your recipe..."
                    } else {
                        "✨ Generate Recipe"
                    }}
                </button>
            </form>

            {move || warning.get().map(|msg| view! {
                <div class="warning-message">
                    <span class="icon">"⚠️"</span>
                    <span>{msg}</span>
                </div>
            })}

            {move || error.get().map(|err| view! {
                <div class="error-message">
                    <span class="icon">"❌"</span>
                    <span>{err}</span>
                </div>
            })}

            {move || post.get().map(|generated| view! { <PostView post=generated/> })}
        </div>
    }
}

#[component]
fn PostView(post: GeneratedPost) -> impl IntoView {
    let joke = post.joke.clone();
    let recipe_text = post.recipe_text.clone();
    let download_text = post.recipe_text.clone();
    let nutrition = post.nutrition.clone();

    view! {
        <section class="results">
            <div class="joke-banner">
                <span class="icon">"😄"</span>
                <span>{joke}</span>
            </div>

            <div class="result-block">
                <h2>"📖 Recipe Blog"</h2>
                <p class="generated-text">{recipe_text}</p>
            </div>

            <div class="result-block">
                <h2>"🥗 Nutrition Summary"</h2>
                {match nutrition {
                    NutritionSummary::Ready(text) => view! {
                        <p class="generated-text">{text}</p>
                    }.into_any(),
                    NutritionSummary::Failed(notice) => view! {
                        <p class="nutrition-failed">
                            <span class="icon">"⚠️"</span>
                            {notice}
                        </p>
                    }.into_any(),
                }}
            </div>

            <button
                class="download-button"
                on:click=move |_| download_text_file("recipe.txt", &download_text)
            >
                "⬇ Download"
            </button>
        </section>
    }
}
