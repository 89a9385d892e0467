//! Fast Translate REST API
//!
//! HTTP API layer for Fast Translate, built with Axum.
//!
//! # Endpoints
//!
//! ## Translation
//! - `POST /translate` - Translate text (JSON body)
//!
//! ## Dictionaries
//! - `GET /dictionaries` - All four dictionaries
//! - `POST /update_dictionary` - Insert or replace an entry (form)
//! - `DELETE /delete_dictionary_entry` - Remove an entry (form)
//! - `POST /toggle_dictionary_entry` - Enable or disable an entry (form)
//!
//! ## Prompt and settings
//! - `GET /get_general_prompt`, `POST /update_general_prompt`
//! - `GET /get_ai_mode_status`, `POST /toggle_ai_mode`
//! - `POST /save_settings`, `GET /load_settings`
//!
//! ## Health
//! - `GET /health` - Service status
//! - `GET /ping` - Probe
//!
//! Everything else falls through to the UI bundle when a static directory
//! is configured.
//!
//! # Example
//!
//! ```rust,ignore
//! use fast_translate::api::{serve, ApiConfig, AppState};
//! use fast_translate::dictionary::DictionaryStore;
//! use fast_translate::translation::{GeminiClient, GeminiConfig, TranslationEngine};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(DictionaryStore::new(None));
//!     let gemini = Arc::new(GeminiClient::new(GeminiConfig::default())?);
//!     let engine = Arc::new(TranslationEngine::new(gemini, None));
//!     let config = ApiConfig::default();
//!
//!     let state = AppState::new(store, engine, config.clone());
//!     serve(state, &config).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod form;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use form::FormFields;
pub use state::{ApiConfig, AppState};

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();
    let max_body_size = state.config.max_body_size;

    let router = Router::new()
        // Translation
        .route("/translate", post(routes::translate::translate))
        // Dictionaries
        .route("/dictionaries", get(routes::dictionaries::list_dictionaries))
        .route("/update_dictionary", post(routes::dictionaries::update_dictionary))
        .route(
            "/delete_dictionary_entry",
            delete(routes::dictionaries::delete_dictionary_entry),
        )
        .route(
            "/toggle_dictionary_entry",
            post(routes::dictionaries::toggle_dictionary_entry),
        )
        // Prompt and settings
        .route("/get_general_prompt", get(routes::settings::get_general_prompt))
        .route("/update_general_prompt", post(routes::settings::update_general_prompt))
        .route("/get_ai_mode_status", get(routes::settings::get_ai_mode_status))
        .route("/toggle_ai_mode", post(routes::settings::toggle_ai_mode))
        .route("/save_settings", post(routes::settings::save_settings))
        .route("/load_settings", get(routes::settings::load_settings))
        // Health
        .route("/health", get(routes::health::health))
        .route("/ping", get(routes::health::ping));

    let router = match static_dir {
        Some(dir) => {
            tracing::info!("Serving UI from {:?}", dir);
            router.fallback_service(ServeDir::new(dir).append_index_html_on_directories(true))
        }
        None => router,
    };

    router
        .layer(DefaultBodyLimit::max(max_body_size))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(state))
}

/// Start the API server
pub async fn serve(state: AppState, config: &ApiConfig) -> Result<(), ApiError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Fast Translate API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Fast Translate API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::DictionaryStore;
    use crate::translation::{
        GenerationRequest, MachineTranslator, ProviderError, TextGenerator, TranslationEngine,
    };
    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use tower::util::ServiceExt;

    struct EchoGenerator;

    #[async_trait]
    impl TextGenerator for EchoGenerator {
        async fn generate(&self, request: GenerationRequest<'_>) -> Result<String, ProviderError> {
            Ok(request.content.to_string())
        }
    }

    struct EchoTranslator;

    #[async_trait]
    impl MachineTranslator for EchoTranslator {
        async fn translate(&self, text: &str) -> Result<String, ProviderError> {
            Ok(text.to_string())
        }
    }

    fn create_test_app(api_key: Option<&str>) -> (Router, Arc<DictionaryStore>) {
        let store = Arc::new(DictionaryStore::new(api_key.map(str::to_string)));
        let engine = Arc::new(TranslationEngine::new(
            Arc::new(EchoGenerator),
            Some(Arc::new(EchoTranslator)),
        ));
        let state = AppState::new(Arc::clone(&store), engine, ApiConfig::default());
        (build_router(state), store)
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn form_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn multipart_request(method: &str, uri: &str, fields: &[(&str, &str)]) -> Request<Body> {
        let boundary = "XBOUNDARYX";
        let mut body = String::new();
        for (name, value) in fields {
            body.push_str(&format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            ));
        }
        body.push_str(&format!("--{boundary}--\r\n"));

        Request::builder()
            .method(method)
            .uri(uri)
            .header(
                "Content-Type",
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_and_ping() {
        let (app, _) = create_test_app(None);

        let response = app.clone().oneshot(get_request("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["machine_translation"], true);

        let response = app.oneshot(get_request("/ping")).await.unwrap();
        assert_eq!(json_body(response).await["message"], "pong");
    }

    #[tokio::test]
    async fn test_dictionaries_start_empty() {
        let (app, _) = create_test_app(None);

        let response = app.oneshot(get_request("/dictionaries")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        for category in [
            "word_replacement",
            "keyword_based",
            "single_word",
            "gemini_keyword_prompts",
        ] {
            assert_eq!(body[category], serde_json::json!({}));
        }
    }

    #[tokio::test]
    async fn test_update_dictionary_multipart() {
        let (app, store) = create_test_app(None);

        let response = app
            .oneshot(multipart_request(
                "POST",
                "/update_dictionary",
                &[
                    ("dict_type", "keyword_based"),
                    ("key", "court"),
                    ("value", r#"{"original":"case","replacement":"মামলা"}"#),
                ],
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["status"], "success");

        let dictionaries = store.dictionaries().await;
        let entry = &dictionaries.keyword_based["court"];
        assert_eq!(entry.replacement, "মামলা");
        assert!(entry.enabled);
    }

    #[tokio::test]
    async fn test_update_dictionary_rejects_bad_input() {
        let (app, _) = create_test_app(None);

        let response = app
            .clone()
            .oneshot(form_request(
                "POST",
                "/update_dictionary",
                "dict_type=gemini_keyword_prompts&key=law&value=not-json",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = app
            .clone()
            .oneshot(form_request(
                "POST",
                "/update_dictionary",
                "dict_type=phrasebook&key=a&value=b",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = app
            .oneshot(form_request(
                "POST",
                "/update_dictionary",
                "dict_type=single_word&key=&value=b",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_toggle_and_delete_entry() {
        let (app, store) = create_test_app(None);
        store
            .upsert(crate::dictionary::DictionaryCategory::SingleWord, "cat", "বিড়াল")
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(form_request(
                "POST",
                "/toggle_dictionary_entry",
                "dict_type=single_word&key=cat&enabled=false",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(!store.dictionaries().await.single_word["cat"].enabled);

        let response = app
            .clone()
            .oneshot(multipart_request(
                "DELETE",
                "/delete_dictionary_entry",
                &[("dict_type", "single_word"), ("key", "cat")],
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(store.dictionaries().await.is_empty());

        let response = app
            .oneshot(multipart_request(
                "DELETE",
                "/delete_dictionary_entry",
                &[("dict_type", "single_word"), ("key", "cat")],
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(response).await["detail"], "Key not found");
    }

    #[tokio::test]
    async fn test_translate_requires_api_key() {
        let (app, _) = create_test_app(None);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/translate")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"text": "hello"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await["detail"],
            "No Gemini API key configured."
        );
    }

    #[tokio::test]
    async fn test_translate_applies_dictionaries() {
        let (app, store) = create_test_app(Some("test-key"));
        store
            .upsert(
                crate::dictionary::DictionaryCategory::WordReplacement,
                "hello",
                "হ্যালো",
            )
            .await
            .unwrap();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/translate")
                    .header("Content-Type", "application/json")
                    .body(Body::from(r#"{"text": "hello world"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(
            body["translation"],
            r#"<span style="color:red">হ্যালো</span> world"#
        );
        assert_eq!(body["used_dictionaries"][0]["type"], "word_replacement/single_word");
        assert_eq!(body["used_dictionaries"][0]["key"], "hello");
    }

    #[tokio::test]
    async fn test_translate_rejects_invalid_json() {
        let (app, _) = create_test_app(Some("test-key"));

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/translate")
                    .header("Content-Type", "application/json")
                    .body(Body::from("not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_prompt_and_ai_mode_round_trip() {
        let (app, _) = create_test_app(None);

        let response = app
            .clone()
            .oneshot(form_request(
                "POST",
                "/update_general_prompt",
                "prompt=Be+formal.",
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .clone()
            .oneshot(get_request("/get_general_prompt"))
            .await
            .unwrap();
        assert_eq!(json_body(response).await["prompt"], "Be formal.");

        let response = app
            .clone()
            .oneshot(form_request("POST", "/toggle_ai_mode", "enabled=true"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .clone()
            .oneshot(get_request("/get_ai_mode_status"))
            .await
            .unwrap();
        assert_eq!(json_body(response).await["ai_mode_enabled"], true);

        let response = app
            .oneshot(form_request("POST", "/toggle_ai_mode", "enabled=sometimes"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_save_and_load_settings() {
        let (app, _) = create_test_app(None);

        let response = app
            .clone()
            .oneshot(multipart_request(
                "POST",
                "/save_settings",
                &[("api_key", "key-1"), ("model_name", "")],
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app.oneshot(get_request("/load_settings")).await.unwrap();
        let body = json_body(response).await;
        assert_eq!(body["current_api_key"], "key-1");
        assert_eq!(body["api_keys"], serde_json::json!(["key-1"]));
        assert_eq!(body["current_model_name"], crate::dictionary::DEFAULT_MODEL_NAME);
    }
}
