use log::debug;
use serde::Serialize;

use super::models::ErrorBody;
use crate::config::FolioConfig;
use crate::error::FolioError;

const USER_AGENT: &str = "folio-core/0.1";
const ACCEPT: &str = "application/json";

#[derive(Debug)]
pub struct FirestoreClient {
    client: reqwest::Client,
    config: FolioConfig,
}

impl FirestoreClient {
    pub fn new(config: FolioConfig) -> Result<Self, FolioError> {
        config.validate()?;

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_static(USER_AGENT),
        );
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static(ACCEPT),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(FirestoreClient { client, config })
    }

    pub fn config(&self) -> &FolioConfig {
        &self.config
    }

    fn with_key(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.config.api_key {
            Some(key) => request.query(&[("key", key.as_str())]),
            None => request,
        }
    }

    /// GET a resource; `Ok(None)` when Firestore answers 404
    pub async fn get(&self, url: &str) -> Result<Option<reqwest::Response>, FolioError> {
        debug!("GET firestore: {}", url);
        let response = self.with_key(self.client.get(url)).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            debug!("firestore resource not found: {}", url);
            return Ok(None);
        }
        check_status(response).await.map(Some)
    }

    pub async fn post_json<B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<reqwest::Response, FolioError> {
        debug!("POST firestore: {}", url);
        let response = self.with_key(self.client.post(url)).json(body).send().await?;
        check_status(response).await
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, FolioError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(error_from_body(status.as_u16(), &body))
}

/// Prefer Firestore's own error message, fall back to the raw body
pub(crate) fn error_from_body(status: u16, body: &str) -> FolioError {
    let message = match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => match parsed.error.status {
            Some(code) if !parsed.error.message.is_empty() => {
                format!("{} ({})", parsed.error.message, code)
            }
            Some(code) => code,
            None => parsed.error.message,
        },
        Err(_) if body.trim().is_empty() => "empty response body".to_string(),
        Err(_) => body.trim().to_string(),
    };
    FolioError::Firestore { status, message }
}
