//! Best-guess vehicle classification returned by the prediction service.

use serde::Serialize;

/// The single top prediction for one image.
///
/// `score` is the service's probability in `[0, 1]`, or NaN when the service
/// omitted or malformed it. NaN means the confidence is unknown, not zero.
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationResult {
    pub label: String,
    pub score: f64,
    /// Full decoded response body, kept for diagnostics.
    pub raw: serde_json::Value,
}

impl ClassificationResult {
    pub fn new(label: impl Into<String>, score: f64, raw: serde_json::Value) -> Self {
        Self {
            label: label.into(),
            score,
            raw,
        }
    }

    /// Whether the service reported a usable probability.
    pub fn has_confidence(&self) -> bool {
        !self.score.is_nan()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn nan_score_means_unknown_confidence() {
        let result = ClassificationResult::new("SUV", f64::NAN, json!({}));
        assert!(!result.has_confidence());
    }

    #[test]
    fn zero_score_is_still_known() {
        let result = ClassificationResult::new("SUV", 0.0, json!({}));
        assert!(result.has_confidence());
    }

    #[test]
    fn unknown_score_serializes_as_null() {
        let result = ClassificationResult::new("Sedan", f64::NAN, json!({"predictions": []}));
        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["label"], "Sedan");
        assert!(value["score"].is_null());
    }
}
