#[cfg(feature = "ssr")]
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
#[cfg(feature = "ssr")]
pub const GIT_HASH: &str = env!("GIT_HASH");
#[cfg(feature = "ssr")]
pub const BUILD_TIME: &str = env!("BUILD_TIME");

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use axum::response::Json;
    use axum::{Router, routing::get};
    use fusion_web::app::App;
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use serde_json::json;
    use tower_http::cors::{AllowOrigin, CorsLayer};
    use tower_http::services::ServeDir;

    // Load .env
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    tracing::info!(
        "Starting Flavour Fusion v{}-{} (built {})",
        VERSION,
        GIT_HASH,
        BUILD_TIME
    );

    // A missing GEMINI_API_KEY must fail here with a clear message, not on
    // the first submission
    let config = fusion_web::server::config::get()
        .map_err(|e| format!("Configuration error: {e:#}"))?;
    tracing::info!("Generation model: {}", config.model);

    // Leptos configuration
    let conf = get_configuration(None).expect("Failed to load Leptos configuration");
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(App);

    // Version endpoint handler
    async fn version_handler() -> Json<serde_json::Value> {
        Json(json!({
            "version": VERSION,
            "git_hash": GIT_HASH,
            "build_time": BUILD_TIME
        }))
    }

    // Build Axum router
    let app = Router::new()
        .route("/api/version", get(version_handler))
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || {
                use leptos::prelude::*;
                use leptos_meta::MetaTags;

                view! {
                    <!DOCTYPE html>
                    <html lang="en">
                        <head>
                            <meta charset="utf-8" />
                            <meta name="viewport" content="width=device-width, initial-scale=1" />
                            <AutoReload options=leptos_options.clone() />
                            <HydrationScripts options=leptos_options.clone() />
                            <MetaTags />
                            <link rel="stylesheet" href="/pkg/fusion-web.css" />
                        </head>
                        <body>
                            <App />
                        </body>
                    </html>
                }
            }
        })
        .fallback_service(ServeDir::new(leptos_options.site_root.as_ref()))
        .layer(
            tower::ServiceBuilder::new().layer(
                CorsLayer::new()
                    .allow_origin(AllowOrigin::list([
                        "http://localhost:3000".parse().unwrap(),
                        "http://127.0.0.1:3000".parse().unwrap(),
                    ]))
                    .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
                    .allow_headers([axum::http::header::CONTENT_TYPE]),
            ),
        )
        .with_state(leptos_options);

    // Start server
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| format!("Failed to bind to {}: {}", addr, e))?;

    tracing::info!("Server running at http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| format!("Server error: {}", e))?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // Client-side main is empty - everything is managed via wasm
}
