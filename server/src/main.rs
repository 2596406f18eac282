mod redirect;
mod security;

use app::{
    component, shell,
    theme::{THEME_FILE_ENV, ThemeTokens},
    types::AppState,
};
use axum::{Router, http::StatusCode, response::Json, routing::get};
use dotenvy::dotenv;
use leptos::logging;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes as _, generate_route_list};
use leptos_config::get_configuration;
use redirect::redirect_www;
use security::security_headers;
use serde_json::json;
use std::{path::PathBuf, sync::Arc};

use tower_http::compression::predicate::SizeAbove;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

const SERVICE_NAME: &str = "popmate";

// Health check handler
async fn health_handler() -> Result<Json<serde_json::Value>, StatusCode> {
    Ok(Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION")
    })))
}

fn tracing_level() -> tracing::Level {
    if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    }
}

/// Reads the theme once; `POPMATE_THEME_FILE` overrides the built-in palette.
fn load_theme() -> Result<Arc<ThemeTokens>, app::theme::ThemeError> {
    let path = std::env::var_os(THEME_FILE_ENV).map(PathBuf::from);
    if let Some(path) = &path {
        tracing::info!(path = %path.display(), "loading theme override");
    }
    ThemeTokens::load(path.as_deref()).map(Arc::new)
}

/// Builds the full router. The fallback is registered before the layers so
/// error pages and static files get the same middleware as routed pages.
fn build_router(app_state: AppState) -> Router {
    let leptos_options = app_state.leptos_options.clone();
    let pkg_dir = PathBuf::from(leptos_options.site_root.as_ref())
        .join(leptos_options.site_pkg_dir.as_ref());
    let routes = generate_route_list(component);
    let fallback_theme = Arc::clone(&app_state.theme);

    Router::new()
        .leptos_routes_with_context(
            &app_state,
            routes,
            {
                let app_state = app_state.clone();
                move || {
                    provide_context(app_state.clone());
                    provide_context(Arc::clone(&app_state.theme));
                }
            },
            move || shell(leptos_options.clone()),
        )
        .route("/health", get(health_handler))
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .fallback(leptos_axum::file_and_error_handler_with_context::<AppState, _>(
            move || provide_context(Arc::clone(&fallback_theme)),
            shell,
        ))
        .layer(
            tower::ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum::middleware::from_fn(redirect_www))
                .layer(axum::middleware::from_fn(security_headers)),
        )
        .layer(CompressionLayer::new().compress_when(SizeAbove::new(1024)))
        .with_state(app_state)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_file(true)
        .with_line_number(true)
        .with_max_level(tracing_level())
        .init();

    let env_result = dotenv();
    if env_result.is_err() {
        logging::warn!("There is no corresponding .env file");
    }

    let Ok(conf) = get_configuration(Some("Cargo.toml")) else {
        logging::error!("Failed to get configuration");
        return;
    };

    let theme = match load_theme() {
        Ok(theme) => theme,
        Err(err) => {
            logging::error!("Failed to load theme: {}", err);
            return;
        }
    };

    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let app = build_router(AppState {
        leptos_options,
        theme,
    });

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(list) => list,
        Err(err) => {
            logging::error!("Failed to bind tcp listener to {}: {}", &addr, err);
            return;
        }
    };
    logging::log!("Listening on http://{}", &addr);

    let serve_result = axum::serve(listener, app.into_make_service()).await;
    match serve_result {
        Ok(()) => {
            logging::log!("Server shutdown gracefully");
        }
        Err(err) => {
            logging::error!("Failed to serve app: {}", err);
            logging::error!("Error details: {:?}", err);
        }
    }
}
