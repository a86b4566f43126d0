//! Vehicle classification against a Custom Vision prediction endpoint, and
//! the quote session that turns a selected image into a premium estimate.

mod client;
mod config;
mod error;
mod session;

#[cfg(test)]
mod mock;

pub use client::{VisionClient, select_prediction};
pub use config::{Selection, VisionConfig};
pub use error::{ErrorKind, VisionError};
pub use session::{FALLBACK_ERROR, Quote, QuoteSession, user_message};
