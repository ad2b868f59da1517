// Translator backed by a LibreTranslate-compatible HTTP API.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::modules::reviews::adapters::outbound::translation::{
    TranslationError, TranslationService,
};

#[derive(Clone)]
pub struct HttpTranslator {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

#[derive(Serialize)]
struct TranslateRequest<'a> {
    q: &'a str,
    source: &'a str,
    target: &'a str,
    format: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslateResponse {
    translated_text: String,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: String,
}

impl HttpTranslator {
    pub fn new(base_url: &str, api_key: Option<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl TranslationService for HttpTranslator {
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, TranslationError> {
        if source_language.eq_ignore_ascii_case(target_language) {
            return Ok(text.to_string());
        }

        let request = TranslateRequest {
            q: text,
            source: source_language,
            target: target_language,
            format: "text",
            api_key: self.api_key.as_deref(),
        };

        let response = self
            .client
            .post(format!("{}/translate", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| TranslationError::Upstream(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorResponse>()
                .await
                .map(|body| body.error)
                .unwrap_or_else(|_| status.to_string());
            return Err(classify_failure(status, message, target_language));
        }

        let body: TranslateResponse = response
            .json()
            .await
            .map_err(|e| TranslationError::Upstream(format!("invalid response: {e}")))?;
        Ok(body.translated_text)
    }
}

fn classify_failure(status: StatusCode, message: String, target: &str) -> TranslationError {
    if status == StatusCode::BAD_REQUEST && message.to_lowercase().contains("language") {
        TranslationError::UnsupportedLanguage(target.to_string())
    } else {
        TranslationError::Upstream(format!("{status}: {message}"))
    }
}
