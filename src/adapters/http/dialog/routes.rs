//! HTTP routes for dialog endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{chat, health, interactions, recommendations, DialogHandlers};

/// Creates the dialog router with all endpoints.
pub fn dialog_routes(handlers: DialogHandlers) -> Router {
    Router::new()
        .route("/api/chat", post(chat))
        .route("/api/recommendations", post(recommendations))
        .route("/api/interactions", post(interactions))
        .route("/health", get(health))
        .with_state(handlers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::domain::catalog::Catalog;
    use crate::domain::dialog::DialogEngine;

    fn app() -> Router {
        let engine = Arc::new(DialogEngine::new(Arc::new(Catalog::default())));
        dialog_routes(DialogHandlers::from_engine(engine))
    }

    #[tokio::test]
    async fn health_endpoint_responds() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn chat_rejects_non_json() {
        let response = app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/chat")
                    .header("content-type", "application/json")
                    .body(Body::from("not json"))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert!(response.status().is_client_error());
    }
}
