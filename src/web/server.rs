//! Axum HTTP server for the quiz and tarot-card API.
//!
//! Handles the JSON API routes and, when configured, serves the built web
//! client from a static directory.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderName, Method, header},
    routing::{get, post},
};
use tokio::sync::{RwLock, oneshot};
use tokio::task::JoinHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::{Config, ServerConfig};
use crate::error::{CatalogError, ServerError};
use crate::imagegen::{GeminiImages, ImageGenError, ImageProvider, OpenAiImages, ProviderKind};
use crate::prompts::PromptSource;
use crate::quiz::QuizEngine;
use crate::web::handlers::images::{
    generate_image_gemini_handler, generate_image_handler, tarot_card_handler,
};
use crate::web::handlers::quiz::{
    personalities_list_handler, personality_detail_handler, prompts_handler, questions_handler,
    score_handler,
};
use crate::web::handlers::{health_handler, method_not_allowed_handler};

/// Shared state for all handlers.
pub struct AppState {
    pub engine: QuizEngine,
    /// Source of the tarot prompt document, read per request.
    pub prompts: Arc<dyn PromptSource>,
    /// OpenAI image provider, absent when no API key is configured.
    pub openai: Option<Arc<dyn ImageProvider>>,
    /// Gemini image provider, absent when no API key is configured.
    pub gemini: Option<Arc<dyn ImageProvider>>,
    /// Shutdown signal sender.
    pub shutdown_tx: RwLock<Option<oneshot::Sender<()>>>,
}

impl AppState {
    pub fn new(engine: QuizEngine, prompts: Arc<dyn PromptSource>) -> Self {
        Self {
            engine,
            prompts,
            openai: None,
            gemini: None,
            shutdown_tx: RwLock::new(None),
        }
    }

    pub fn with_openai(mut self, provider: Arc<dyn ImageProvider>) -> Self {
        self.openai = Some(provider);
        self
    }

    pub fn with_gemini(mut self, provider: Arc<dyn ImageProvider>) -> Self {
        self.gemini = Some(provider);
        self
    }

    /// Built-in catalogs plus whatever the configuration enables.
    pub fn from_config(config: &Config) -> Result<Self, CatalogError> {
        let timeout = config.images.request_timeout;
        let mut state = Self::new(QuizEngine::builtin()?, config.prompts.source(timeout));

        match OpenAiImages::from_config(&config.images.openai, timeout) {
            Some(provider) => state = state.with_openai(Arc::new(provider)),
            None => tracing::warn!("OPENAI_API_KEY not set; /api/generate-image is disabled"),
        }
        match GeminiImages::from_config(&config.images.gemini, timeout) {
            Some(provider) => state = state.with_gemini(Arc::new(provider)),
            None => {
                tracing::warn!("GOOGLE_API_KEY not set; /api/generate-image-gemini is disabled")
            }
        }

        Ok(state)
    }

    /// The provider for `kind`, or `NotConfigured`.
    pub fn provider(&self, kind: ProviderKind) -> Result<Arc<dyn ImageProvider>, ImageGenError> {
        let provider = match kind {
            ProviderKind::OpenAi => self.openai.as_ref(),
            ProviderKind::Gemini => self.gemini.as_ref(),
        };
        provider.cloned().ok_or_else(|| {
            tracing::error!(provider = kind.as_str(), "Image provider API key not configured");
            ImageGenError::NotConfigured { provider: kind }
        })
    }

    /// Signal the server to stop accepting connections.
    pub async fn shutdown(&self) {
        if let Some(tx) = self.shutdown_tx.write().await.take() {
            let _ = tx.send(());
        }
    }
}

/// Build the application router.
pub fn router(config: &ServerConfig, state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/questions", get(questions_handler))
        .route("/api/quiz/score", post(score_handler))
        .route("/api/personalities", get(personalities_list_handler))
        .route("/api/personalities/{code}", get(personality_detail_handler))
        .route("/api/prompts", get(prompts_handler))
        .route("/api/generate-image", post(generate_image_handler))
        .route(
            "/api/generate-image-gemini",
            post(generate_image_gemini_handler),
        )
        .route("/api/tarot-card", post(tarot_card_handler))
        .method_not_allowed_fallback(method_not_allowed_handler);

    let app = match &config.static_dir {
        Some(dir) => api.fallback_service(
            ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html"))),
        ),
        None => api,
    };

    // The web client may be served from another origin during development.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::ORIGIN,
            HeaderName::from_static("x-requested-with"),
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::AUTHORIZATION,
        ]);

    app.layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(cors)
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            header::HeaderValue::from_static("nosniff"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve in the background.
///
/// Returns the bound address (useful with port 0) and the server task, which
/// completes after [`AppState::shutdown`] once in-flight requests drain.
pub async fn start_server(
    config: &ServerConfig,
    state: Arc<AppState>,
) -> Result<(SocketAddr, JoinHandle<()>), ServerError> {
    let addr = config
        .socket_addr()
        .map_err(|e| ServerError::StartupFailed {
            reason: e.to_string(),
        })?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::StartupFailed {
            reason: format!("Failed to bind to {}: {}", addr, e),
        })?;
    let bound_addr = listener
        .local_addr()
        .map_err(|e| ServerError::StartupFailed {
            reason: format!("Failed to get local addr: {}", e),
        })?;

    let app = router(config, state.clone());

    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    *state.shutdown_tx.write().await = Some(shutdown_tx);

    let handle = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
                tracing::info!("HTTP server shutting down");
            })
            .await
        {
            tracing::error!("HTTP server error: {}", e);
        }
    });

    tracing::info!(addr = %bound_addr, "HTTP server listening");

    Ok((bound_addr, handle))
}

/// Build state from `config` and start serving it.
///
/// The returned state is the handle for [`AppState::shutdown`].
pub async fn serve(
    config: &Config,
) -> crate::Result<(Arc<AppState>, SocketAddr, JoinHandle<()>)> {
    let state = Arc::new(AppState::from_config(config)?);
    let (addr, handle) = start_server(&config.server, state.clone()).await?;
    Ok((state, addr, handle))
}
