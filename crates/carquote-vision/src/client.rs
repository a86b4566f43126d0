//! HTTP client for the Custom Vision prediction endpoint.

use carquote_core::{ClassificationResult, ImagePayload};
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::{Selection, VisionConfig};
use crate::error::VisionError;

const PREDICTION_KEY_HEADER: &str = "Prediction-Key";
const OCTET_STREAM: &str = "application/octet-stream";

/// Sends one image per call to the prediction endpoint and returns the best
/// guess. Calls share nothing but the connection pool.
#[derive(Clone)]
pub struct VisionClient {
    client: reqwest::Client,
    config: VisionConfig,
}

impl VisionClient {
    pub fn new(config: VisionConfig) -> Self {
        Self::with_http_client(reqwest::Client::new(), config)
    }

    pub fn with_http_client(client: reqwest::Client, config: VisionConfig) -> Self {
        Self { client, config }
    }

    /// Classify a vehicle image.
    ///
    /// Input and configuration are checked before any network I/O. A
    /// configured timeout bounds the whole round trip. There are no retries.
    pub async fn classify(
        &self,
        image: &ImagePayload,
    ) -> Result<ClassificationResult, VisionError> {
        if image.is_empty() {
            return Err(VisionError::Input(
                "No file provided for classification.".to_string(),
            ));
        }
        let endpoint = self.config.endpoint()?;
        let key = self.config.key()?;

        match self.config.timeout {
            Some(limit) => tokio::time::timeout(limit, self.request(endpoint, key, image))
                .await
                .map_err(|_| {
                    warn!(url = %endpoint, ?limit, "prediction request timed out");
                    VisionError::Timeout(limit)
                })?,
            None => self.request(endpoint, key, image).await,
        }
    }

    async fn request(
        &self,
        endpoint: &str,
        key: &str,
        image: &ImagePayload,
    ) -> Result<ClassificationResult, VisionError> {
        info!(url = %endpoint, bytes = image.len(), mime = %image.mime(), "requesting prediction");
        debug!(
            project_id = ?self.config.project_id,
            published_name = ?self.config.published_name,
            "prediction target"
        );

        let resp = self
            .client
            .post(endpoint)
            .header(CONTENT_TYPE, OCTET_STREAM)
            .header(PREDICTION_KEY_HEADER, key)
            .body(image.bytes().to_vec())
            .send()
            .await
            .map_err(|e| {
                warn!(url = %endpoint, error = %e, "prediction request did not complete");
                VisionError::Transport(e)
            })?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "prediction request rejected");
            return Err(VisionError::status(status.as_u16(), body));
        }

        let bytes = resp.bytes().await.map_err(|e| {
            warn!(url = %endpoint, error = %e, "failed to read prediction response");
            VisionError::Transport(e)
        })?;
        let raw: Value = serde_json::from_slice(&bytes).map_err(|e| {
            VisionError::ResponseShape(format!("Prediction response is not valid JSON: {e}"))
        })?;

        let result = select_prediction(raw, self.config.selection)?;
        info!(label = %result.label, score = result.score, "prediction received");
        Ok(result)
    }
}

/// Reduce a decoded prediction response to its best entry.
///
/// The response must hold a non-empty `predictions` array whose chosen entry
/// has a string `tagName`. A missing, non-numeric or out-of-range
/// `probability` becomes NaN.
pub fn select_prediction(
    raw: Value,
    selection: Selection,
) -> Result<ClassificationResult, VisionError> {
    let entries = raw
        .get("predictions")
        .and_then(Value::as_array)
        .filter(|entries| !entries.is_empty())
        .ok_or_else(|| {
            VisionError::ResponseShape("No predictions returned from service.".to_string())
        })?;

    let top = match selection {
        Selection::First => &entries[0],
        Selection::HighestProbability => highest(entries),
    };
    debug!(?selection, candidates = entries.len(), "selected prediction");

    let label = top
        .get("tagName")
        .and_then(Value::as_str)
        .ok_or_else(|| {
            VisionError::ResponseShape("Top prediction has no tagName.".to_string())
        })?
        .to_string();
    let score = probability(top);

    Ok(ClassificationResult::new(label, score, raw))
}

/// First entry with the greatest known probability; ties keep the earlier one.
fn highest(entries: &[Value]) -> &Value {
    let mut best = &entries[0];
    let mut best_p = rank(best);
    for entry in &entries[1..] {
        let p = rank(entry);
        if p > best_p {
            best = entry;
            best_p = p;
        }
    }
    best
}

fn rank(entry: &Value) -> f64 {
    let p = probability(entry);
    if p.is_nan() { f64::NEG_INFINITY } else { p }
}

fn probability(entry: &Value) -> f64 {
    entry
        .get("probability")
        .and_then(Value::as_f64)
        .filter(|p| (0.0..=1.0).contains(p))
        .unwrap_or(f64::NAN)
}
