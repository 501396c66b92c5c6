//! pagejson
//!
//! Fetches one web page, extracts its title, headings, buttons, visible
//! inputs, carousels and select lists, and writes them out as JSON.

pub mod app;
pub mod config;
pub mod error;
pub mod extract;
pub mod output;
pub mod page;

pub use app::{App, RunOutcome};
pub use config::Config;
pub use error::{Error, Result};
pub use extract::{extract, ExtractionResult};
