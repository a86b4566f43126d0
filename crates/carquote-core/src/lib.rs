//! Core types for carquote: image payloads, classification results, coverage
//! options, the premium table, and preview handles.

pub mod classification;
pub mod coverage;
pub mod payload;
pub mod premium;
pub mod preview;

pub use classification::ClassificationResult;
pub use coverage::{Coverage, CoverageParseError};
pub use payload::{ImageMime, ImagePayload, PayloadError};
pub use premium::{PremiumTable, estimate_premium, format_confidence, format_premium};
pub use preview::{PreviewHandle, PreviewRegistry};
