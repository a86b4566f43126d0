//! Caller-side quote state: the selected image, the chosen coverage, and the
//! outcome of the last classification.

use carquote_core::{
    ClassificationResult, Coverage, ImagePayload, PremiumTable, PreviewHandle, PreviewRegistry,
    format_confidence, format_premium,
};
use serde::Serialize;
use tracing::{debug, warn};

use crate::client::VisionClient;
use crate::error::VisionError;

/// Shown when an error carries no message of its own.
pub const FALLBACK_ERROR: &str = "Classification failed.";

/// The message to show a user for a failed classification.
pub fn user_message(err: &VisionError) -> String {
    let message = err.to_string();
    if message.trim().is_empty() {
        FALLBACK_ERROR.to_string()
    } else {
        message
    }
}

/// A classification turned into a displayable quote.
#[derive(Debug, Clone, Serialize)]
pub struct Quote {
    pub label: String,
    pub score: f64,
    pub confidence: String,
    pub premium: Option<u32>,
    pub premium_display: Option<String>,
    pub coverage: Coverage,
    pub coverage_title: &'static str,
    pub coverage_description: &'static str,
}

impl Quote {
    pub fn new(result: &ClassificationResult, coverage: Coverage, table: &PremiumTable) -> Self {
        let premium = table.estimate(Some(&result.label));
        Self {
            label: result.label.clone(),
            score: result.score,
            confidence: format_confidence(result.score),
            premium,
            premium_display: premium.map(format_premium),
            coverage,
            coverage_title: coverage.title(),
            coverage_description: coverage.description(),
        }
    }
}

/// Holds one user's in-progress quote.
///
/// Selecting a new image releases the previous preview; so do [`reset`] and
/// dropping the session. [`classify`] takes `&mut self`, so a session can
/// only have one classification in flight.
///
/// [`reset`]: QuoteSession::reset
/// [`classify`]: QuoteSession::classify
pub struct QuoteSession {
    client: VisionClient,
    previews: PreviewRegistry,
    table: PremiumTable,
    preview: Option<PreviewHandle>,
    coverage: Coverage,
    result: Option<ClassificationResult>,
    error: Option<String>,
}

impl QuoteSession {
    pub fn new(client: VisionClient) -> Self {
        Self::with_registry(client, PreviewRegistry::new())
    }

    pub fn with_registry(client: VisionClient, previews: PreviewRegistry) -> Self {
        Self {
            client,
            previews,
            table: PremiumTable::STANDARD,
            preview: None,
            coverage: Coverage::default(),
            result: None,
            error: None,
        }
    }

    pub fn with_table(mut self, table: PremiumTable) -> Self {
        self.table = table;
        self
    }

    /// Select a new image, replacing any previous one. Returns the preview id.
    pub fn select_image(&mut self, image: ImagePayload) -> u64 {
        if let Some(old) = self.preview.take() {
            old.release();
        }
        self.result = None;
        self.error = None;
        let handle = self.previews.acquire(image);
        let id = handle.id();
        self.preview = Some(handle);
        id
    }

    pub fn preview(&self) -> Option<&PreviewHandle> {
        self.preview.as_ref()
    }

    pub fn coverage(&self) -> Coverage {
        self.coverage
    }

    pub fn set_coverage(&mut self, coverage: Coverage) {
        self.coverage = coverage;
    }

    pub fn result(&self) -> Option<&ClassificationResult> {
        self.result.as_ref()
    }

    /// Message from the last failed classification.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Classify the selected image.
    ///
    /// The previous result is cleared before the call whatever its outcome.
    /// On failure the error message is kept for display and the preview is
    /// left in place.
    pub async fn classify(&mut self) -> Result<&ClassificationResult, VisionError> {
        self.result = None;
        self.error = None;

        let outcome = match &self.preview {
            Some(preview) => self.client.classify(preview.image()).await,
            None => Err(VisionError::Input(
                "No file provided for classification.".to_string(),
            )),
        };

        match outcome {
            Ok(result) => {
                debug!(label = %result.label, "session classified image");
                Ok(&*self.result.insert(result))
            }
            Err(err) => {
                let message = user_message(&err);
                warn!(error = %message, "classification failed");
                self.error = Some(message);
                Err(err)
            }
        }
    }

    /// Release the preview and forget any result or error.
    pub fn reset(&mut self) {
        if let Some(preview) = self.preview.take() {
            preview.release();
        }
        self.result = None;
        self.error = None;
    }

    /// Quote for the current result, if there is one.
    pub fn quote(&self) -> Option<Quote> {
        self.result
            .as_ref()
            .map(|result| Quote::new(result, self.coverage, &self.table))
    }
}
