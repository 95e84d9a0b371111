//! HTTP surface of the prepzone backend.
//!
//! Thin axum routing over the service crates: question lookup via the
//! intent resolver, one-off and session-scoped generative chat, and quiz
//! generation. All domain logic lives in the service crates; handlers here
//! only translate between JSON bodies and service calls.

use std::{env, sync::Arc};

mod core;
mod error_handler;
mod routes;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::signal;
use tracing::info;

use crate::core::app_state::AppState;
use crate::error_handler::AppError;
use crate::routes::{
    api_chat_route::api_chat, chat::chat_route::chat,
    generate_questions::generate_questions_route::generate_questions, home_route::home,
    interactive_chat::interactive_chat_route::interactive_chat,
    reset_session_route::reset_session,
};

/// Builds the application state from the environment and serves the API
/// until Ctrl+C.
pub async fn start() -> Result<(), AppError> {
    let state = Arc::new(AppState::from_env()?);

    let app = Router::new()
        .route("/", get(home))
        .route("/chat", post(chat))
        .route("/api_chat", post(api_chat))
        .route("/interactive-chat", post(interactive_chat))
        .route("/reset-session", post(reset_session))
        .route("/generate-questions", post(generate_questions))
        .with_state(state);

    let host_url = env::var("API_ADDRESS").unwrap_or_else(|_| "0.0.0.0:5000".into());

    let listener = tokio::net::TcpListener::bind(&host_url)
        .await
        .map_err(AppError::Bind)?;
    info!(address = %host_url, "prepzone backend listening");

    // Serve with graceful shutdown on Ctrl+C.
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    Ok(())
}

/// Returns a future that resolves when Ctrl+C is pressed.
async fn shutdown_signal() {
    signal::ctrl_c()
        .await
        .expect("Failed to listen for shutdown signal");
}
