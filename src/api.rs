//! Wire client for the remote translation service.
//!
//! One endpoint: `POST /translate`. The caller decides what a failure means;
//! this module only converts transport and protocol problems into errors
//! with enough context to log.

use std::collections::BTreeMap;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Request body for `POST /translate`.
#[derive(Debug, Serialize)]
pub struct TranslateRequest<'a> {
    pub text: &'a str,
    pub target_langs: &'a [String],
}

/// Response body from `POST /translate`.
///
/// `translations` maps target-language codes to translated text. The service
/// runs its own detector and reports the source language it settled on;
/// that value is authoritative over the client's local best-effort guess.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TranslateResponse {
    #[serde(default)]
    pub translations: BTreeMap<String, String>,
    #[serde(default)]
    pub detected_lang: Option<String>,
}

/// HTTP client for the translation service.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client for the service at `base_url`, with every request
    /// bounded by `timeout`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Issue one translate call. Non-2xx statuses and malformed bodies are
    /// errors; the caller maps any error to the failed lifecycle state.
    pub async fn translate(&self, text: &str, target_langs: &[String]) -> Result<TranslateResponse> {
        let request = TranslateRequest { text, target_langs };

        let response = self
            .client
            .post(format!("{}/translate", self.base_url))
            .json(&request)
            .send()
            .await
            .context("Failed to send translate request")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
            anyhow::bail!("Translation service error ({}): {}", status, body);
        }

        response
            .json()
            .await
            .context("Failed to parse translate response")
    }
}
