//! HTTP API Client
//!
//! [`Backend`] implementation over `gloo-net`. Form endpoints receive
//! `FormData` (multipart); AI mode is posted urlencoded and translation as
//! JSON.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use web_sys::FormData;

use crate::controller::Backend;
use crate::model::{DictionaryCategory, DictionaryCollection, Settings, TranslationResult};

/// Same origin as the page
pub const DEFAULT_API_BASE: &str = "";

const API_URL_KEY: &str = "fast_translate_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(API_URL_KEY, url);
        }
    }
}

fn url(path: &str) -> String {
    format!("{}{}", get_api_base(), path)
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
struct PromptResponse {
    prompt: String,
}

#[derive(Debug, serde::Deserialize)]
struct AiModeResponse {
    ai_mode_enabled: bool,
}

#[derive(Debug, serde::Deserialize)]
struct ApiError {
    #[serde(default)]
    detail: Option<String>,
}

/// Server-supplied detail, or a generic message when absent or empty
fn translate_error(body: Option<ApiError>) -> String {
    body.and_then(|e| e.detail)
        .filter(|detail| !detail.is_empty())
        .unwrap_or_else(|| "Translation failed".to_string())
}

#[derive(serde::Serialize)]
struct TranslateRequest<'a> {
    text: &'a str,
    original_english_text: &'a str,
}

// ============ Helpers ============

fn form(fields: &[(&str, &str)]) -> Result<FormData, String> {
    let data = FormData::new().map_err(|_| "Failed to create form data".to_string())?;
    for (name, value) in fields {
        data.append_with_str(name, value)
            .map_err(|_| format!("Failed to set form field '{}'", name))?;
    }
    Ok(data)
}

/// Non-2xx responses are reported by status only
fn ensure_ok(response: Response) -> Result<Response, String> {
    if response.ok() {
        Ok(response)
    } else {
        Err(format!("Request failed with status {}", response.status()))
    }
}

async fn send(request: Request) -> Result<Response, String> {
    let response = request
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;
    ensure_ok(response)
}

async fn get_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = send(
        Request::get(&url(path))
            .build()
            .map_err(|e| format!("Request build error: {}", e))?,
    )
    .await?;

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

async fn post_form(path: &str, fields: &[(&str, &str)]) -> Result<(), String> {
    let request = Request::post(&url(path))
        .body(form(fields)?)
        .map_err(|e| format!("Request build error: {}", e))?;
    send(request).await.map(|_| ())
}

// ============ Backend ============

/// Backend talking to the Fast Translate server
#[derive(Clone, Copy, Default)]
pub struct HttpBackend;

#[async_trait(?Send)]
impl Backend for HttpBackend {
    async fn fetch_dictionaries(&self) -> Result<DictionaryCollection, String> {
        get_json("/dictionaries").await
    }

    async fn fetch_general_prompt(&self) -> Result<String, String> {
        let result: PromptResponse = get_json("/get_general_prompt").await?;
        Ok(result.prompt)
    }

    async fn fetch_ai_mode(&self) -> Result<bool, String> {
        let result: AiModeResponse = get_json("/get_ai_mode_status").await?;
        Ok(result.ai_mode_enabled)
    }

    async fn translate(&self, text: &str) -> Result<TranslationResult, String> {
        let response = Request::post(&url("/translate"))
            .json(&TranslateRequest {
                text,
                original_english_text: text,
            })
            .map_err(|e| format!("Request build error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(translate_error(response.json().await.ok()));
        }

        response
            .json()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    async fn update_entry(
        &self,
        category: DictionaryCategory,
        key: &str,
        value: &str,
    ) -> Result<(), String> {
        post_form(
            "/update_dictionary",
            &[("dict_type", category.as_str()), ("key", key), ("value", value)],
        )
        .await
    }

    async fn delete_entry(&self, category: DictionaryCategory, key: &str) -> Result<(), String> {
        let request = Request::delete(&url("/delete_dictionary_entry"))
            .body(form(&[("dict_type", category.as_str()), ("key", key)])?)
            .map_err(|e| format!("Request build error: {}", e))?;
        send(request).await.map(|_| ())
    }

    async fn toggle_entry(
        &self,
        category: DictionaryCategory,
        key: &str,
        enabled: bool,
    ) -> Result<(), String> {
        let enabled = if enabled { "true" } else { "false" };
        post_form(
            "/toggle_dictionary_entry",
            &[("dict_type", category.as_str()), ("key", key), ("enabled", enabled)],
        )
        .await
    }

    async fn set_ai_mode(&self, enabled: bool) -> Result<(), String> {
        let request = Request::post(&url("/toggle_ai_mode"))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(format!("enabled={}", enabled))
            .map_err(|e| format!("Request build error: {}", e))?;
        send(request).await.map(|_| ())
    }

    async fn save_settings(
        &self,
        api_key: Option<&str>,
        model_name: Option<&str>,
    ) -> Result<(), String> {
        let mut fields = Vec::new();
        if let Some(key) = api_key {
            fields.push(("api_key", key));
        }
        if let Some(model) = model_name {
            fields.push(("model_name", model));
        }
        post_form("/save_settings", &fields).await
    }

    async fn load_settings(&self) -> Result<Settings, String> {
        get_json("/load_settings").await
    }

    async fn save_general_prompt(&self, prompt: &str) -> Result<(), String> {
        post_form("/update_general_prompt", &[("prompt", prompt)]).await
    }
}

/// Probe the configured server
pub async fn ping() -> Result<(), String> {
    #[derive(serde::Deserialize)]
    struct PingResponse {
        message: String,
    }

    let response: PingResponse = get_json("/ping").await?;
    if response.message == "pong" {
        Ok(())
    } else {
        Err(format!("Unexpected reply: {}", response.message))
    }
}
