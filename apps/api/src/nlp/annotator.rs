//! Linguistic annotator client, the single point of entry for token and
//! noun-phrase annotation. Production backend is a spaCy sidecar over HTTP;
//! tests substitute a fake through the `Annotate` trait.
//!
//! The annotator is a hard startup dependency: keyword extraction cannot run
//! without it, so a failed health probe aborts service startup.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

const CONNECT_TIMEOUT_SECS: u64 = 30;

/// A single annotated token. `pos` carries Universal POS tags as emitted by
/// the sidecar ("PROPN", "NOUN", "VERB", ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub pos: String,
    pub is_stop: bool,
}

/// Full annotation of one text: tokens plus noun-phrase spans.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Annotation {
    pub tokens: Vec<Token>,
    pub noun_phrases: Vec<String>,
}

/// The annotator seam. Each analyzed document makes exactly one call.
///
/// Carried in `AppState` as `Arc<dyn Annotate>`.
#[async_trait]
pub trait Annotate: Send + Sync {
    async fn annotate(&self, text: &str) -> Result<Annotation, AppError>;
}

#[derive(Debug, Serialize)]
struct AnnotateRequest<'a> {
    text: &'a str,
}

/// HTTP client for the annotation sidecar.
#[derive(Clone)]
pub struct HttpAnnotator {
    client: Client,
    base_url: String,
}

impl HttpAnnotator {
    /// Builds the client and probes `GET {base}/health`. A failed probe is
    /// fatal for the caller: the service must not start without annotation.
    pub async fn connect(base_url: &str) -> anyhow::Result<Self> {
        use anyhow::Context;

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .context("Failed to build HTTP client")?;

        let base_url = base_url.trim_end_matches('/').to_string();
        let probe = client
            .get(format!("{base_url}/health"))
            .send()
            .await
            .with_context(|| format!("Annotator at {base_url} is unreachable"))?;
        probe
            .error_for_status()
            .with_context(|| format!("Annotator at {base_url} failed its health probe"))?;

        Ok(Self { client, base_url })
    }
}

#[async_trait]
impl Annotate for HttpAnnotator {
    async fn annotate(&self, text: &str) -> Result<Annotation, AppError> {
        let response = self
            .client
            .post(format!("{}/annotate", self.base_url))
            .json(&AnnotateRequest { text })
            .send()
            .await
            .map_err(|e| AppError::Annotator(format!("annotate request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Annotator(format!(
                "annotate returned {status}: {body}"
            )));
        }

        response
            .json::<Annotation>()
            .await
            .map_err(|e| AppError::Annotator(format!("malformed annotate response: {e}")))
    }
}
