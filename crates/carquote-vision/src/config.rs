use std::fmt;
use std::time::Duration;

use crate::error::VisionError;

/// How the best prediction is picked from the service's list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Take the first entry, trusting the service to sort by probability.
    #[default]
    First,
    /// Take the entry with the highest probability. Entries without a
    /// usable probability never win over ones that have it.
    HighestProbability,
}

/// Connection settings for the prediction endpoint.
///
/// URL and key are checked when a classification is attempted, not here, so
/// a client can be built from incomplete settings.
#[derive(Clone, Default)]
pub struct VisionConfig {
    pub prediction_url: Option<String>,
    /// Carried for diagnostics; the prediction URL already addresses the project.
    pub project_id: Option<String>,
    /// Carried for diagnostics; the prediction URL already names the iteration.
    pub published_name: Option<String>,
    pub prediction_key: Option<String>,
    /// Upper bound on one round trip. `None` leaves it to the transport.
    pub timeout: Option<Duration>,
    pub selection: Selection,
}

impl VisionConfig {
    pub fn new(prediction_url: impl Into<String>, prediction_key: impl Into<String>) -> Self {
        Self {
            prediction_url: Some(prediction_url.into()),
            prediction_key: Some(prediction_key.into()),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Trimmed prediction URL, or a configuration error if unset or blank.
    pub fn endpoint(&self) -> Result<&str, VisionError> {
        non_blank(self.prediction_url.as_deref()).ok_or_else(|| {
            VisionError::Configuration(
                "Missing CV_PREDICTION_URL. Set it to your Custom Vision prediction endpoint."
                    .to_string(),
            )
        })
    }

    /// Trimmed prediction key, or a configuration error if unset or blank.
    pub fn key(&self) -> Result<&str, VisionError> {
        non_blank(self.prediction_key.as_deref())
            .ok_or_else(|| VisionError::Configuration("Missing CV_PREDICTION_KEY.".to_string()))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

impl fmt::Debug for VisionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VisionConfig")
            .field("prediction_url", &self.prediction_url)
            .field("project_id", &self.project_id)
            .field("published_name", &self.published_name)
            .field(
                "prediction_key",
                &self.prediction_key.as_ref().map(|_| "<redacted>"),
            )
            .field("timeout", &self.timeout)
            .field("selection", &self.selection)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn trims_url_and_key() {
        let config = VisionConfig::new("  https://cv.example/predict \n", " secret ");
        assert_eq!(config.endpoint().unwrap(), "https://cv.example/predict");
        assert_eq!(config.key().unwrap(), "secret");
    }

    #[test]
    fn blank_values_are_missing() {
        let config = VisionConfig::new("   ", "");
        assert_eq!(
            config.endpoint().unwrap_err().kind(),
            ErrorKind::Configuration
        );
        assert_eq!(config.key().unwrap_err().kind(), ErrorKind::Configuration);
    }

    #[test]
    fn unset_values_are_missing() {
        let config = VisionConfig::default();
        let err = config.endpoint().unwrap_err();
        assert!(err.to_string().contains("CV_PREDICTION_URL"));
        let err = config.key().unwrap_err();
        assert!(err.to_string().contains("CV_PREDICTION_KEY"));
    }

    #[test]
    fn debug_redacts_key() {
        let config = VisionConfig::new("https://cv.example/predict", "top-secret");
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("top-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
