use gloo_net::http::{Request, Response};
use leptos::logging::{error, log};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::review::{ReviewDecision, ReviewPage};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server responded with status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("response carried no data")]
    MissingData,
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(err) => ApiError::Decode(err.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

/// Wrapper every backend response comes in.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Envelope<T> {
    pub code: u16,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub msg: String,
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            code: 200,
            reason: "base.success".to_string(),
            msg: "Success.".to_string(),
            data: Some(data),
        }
    }

    pub fn without_data(code: u16, reason: &str, msg: impl Into<String>) -> Self {
        Self {
            code,
            reason: reason.to_string(),
            msg: msg.into(),
            data: None,
        }
    }

    pub fn into_data(self) -> Result<T, ApiError> {
        self.data.ok_or(ApiError::MissingData)
    }
}

/// The two calls the review queue makes against the moderation backend.
#[allow(async_fn_in_trait)]
pub trait ReviewBackend {
    async fn fetch_pending_page(&self, page: u32) -> Result<ReviewPage, ApiError>;

    async fn submit_decision(&self, decision: &ReviewDecision) -> Result<(), ApiError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReviewBackend {
    base: String,
}

impl HttpReviewBackend {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn pending_page_url(&self) -> String {
        format!("{}/review/pending/post/page", self.base)
    }

    pub fn decision_url(&self) -> String {
        format!("{}/review/pending/post", self.base)
    }
}

impl ReviewBackend for HttpReviewBackend {
    async fn fetch_pending_page(&self, page: u32) -> Result<ReviewPage, ApiError> {
        let url = self.pending_page_url();
        log!("[API] Fetching pending review page {}", page);
        let response = Request::get(&url)
            .query([("page", page.to_string())])
            .send()
            .await?;
        let page_data: ReviewPage = read_envelope(response).await?.into_data()?;
        log!(
            "[API] Page {} returned {} item(s) of {} pending",
            page,
            page_data.list.len(),
            page_data.count
        );
        Ok(page_data)
    }

    async fn submit_decision(&self, decision: &ReviewDecision) -> Result<(), ApiError> {
        log!(
            "[API] Submitting {} for review {}",
            decision.status.as_str(),
            decision.review_id
        );
        let response = Request::put(&self.decision_url())
            .json(decision)?
            .send()
            .await?;
        if !response.ok() {
            return Err(status_error(response).await);
        }
        Ok(())
    }
}

async fn read_envelope<T: DeserializeOwned>(response: Response) -> Result<Envelope<T>, ApiError> {
    if !response.ok() {
        return Err(status_error(response).await);
    }
    response.json::<Envelope<T>>().await.map_err(|err| {
        error!("[API] Could not decode response body: {:?}", err);
        ApiError::Decode(err.to_string())
    })
}

async fn status_error(response: Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = error_message(&body);
    error!("[API] Request failed with status {}: {}", status, message);
    ApiError::Status { status, message }
}

/// Prefers the envelope's `msg`, falling back to the raw body.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<Envelope<serde_json::Value>>(body) {
        Ok(envelope) if !envelope.msg.is_empty() => envelope.msg,
        _ => body.trim().to_string(),
    }
}
