//! HTTP API Layer
//!
//! REST surface for the quote forms using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: product catalogue, question configuration, policy records
//! - **DTOs**: request and response bodies not owned by a domain crate
//! - **Error Handling**: consistent error bodies; field errors are listed in
//!   `details`
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let app = create_router(AppState::from_config(config));
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod dto;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_policy::{InMemoryPolicyRepository, PolicyPort};
use domain_questions::{
    EmbeddedQuestionSource, FileQuestionSource, QuestionConfigLoader, QuestionSource,
};

use crate::config::{ApiConfig, QuestionSourceKind};
use crate::handlers::{health, policies, products};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub policies: Arc<dyn PolicyPort>,
    pub questions: Arc<QuestionConfigLoader>,
    pub config: ApiConfig,
}

impl AppState {
    pub fn new(
        policies: Arc<dyn PolicyPort>,
        questions: Arc<QuestionConfigLoader>,
        config: ApiConfig,
    ) -> Self {
        Self {
            policies,
            questions,
            config,
        }
    }

    /// Empty in-memory repository and the configured question source
    pub fn from_config(config: ApiConfig) -> Self {
        let source = question_source(&config);
        Self::new(
            Arc::new(InMemoryPolicyRepository::new()),
            Arc::new(QuestionConfigLoader::new(source)),
            config,
        )
    }
}

/// Builds the question source selected by the configuration
pub fn question_source(config: &ApiConfig) -> Arc<dyn QuestionSource> {
    match config.question_source {
        QuestionSourceKind::Embedded => Arc::new(EmbeddedQuestionSource::new()),
        QuestionSourceKind::File => Arc::new(FileQuestionSource::new(config.questions_dir.clone())),
    }
}

/// Creates the main API router
pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    let product_routes = Router::new()
        .route("/", get(products::list_products))
        .route("/:product_type/questions", get(products::get_questions))
        .route("/:product_type/answers/validate", post(products::validate_answers));

    let policy_routes = Router::new()
        .route("/", post(policies::create_policy).get(policies::list_policies))
        .route("/:id", get(policies::get_policy).delete(policies::delete_policy));

    let api_routes = Router::new()
        .nest("/products", product_routes)
        .nest("/policies", policy_routes);

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
