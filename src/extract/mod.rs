//! Page extraction
//!
//! Turns raw HTML into an [`ExtractionResult`]: the page title plus every
//! heading, button, visible input, carousel and select list, in document
//! order. Pure; no I/O happens here.

mod model;
mod processor;

pub use model::*;
pub use processor::ContentProcessor;

/// Extract the UI elements of `html` with a freshly built processor.
pub fn extract(html: &str) -> ExtractionResult {
    ContentProcessor::new().extract(html)
}
