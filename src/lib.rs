//! Generates batches of uniquely named files filled with random alphanumeric
//! content.

pub mod cli;
mod error;
pub mod file_handler;
pub mod settings;

pub use error::{Error, Result};
pub use file_handler::{BatchSummary, FileHandler, GeneratedFile};
pub use settings::Settings;

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Completed(BatchSummary),
    Cancelled,
}

/// Runs one batch. `confirm` is only consulted for high file counts; when it
/// declines, nothing touches the filesystem.
pub fn run<F>(settings: Settings, confirm: F) -> Result<Outcome>
where
    F: FnOnce(&Settings) -> bool,
{
    if settings.is_high_file_count() && !confirm(&settings) {
        tracing::debug!(count = settings.file_count(), "batch cancelled");
        return Ok(Outcome::Cancelled);
    }
    FileHandler::new(settings)
        .save_files()
        .map(Outcome::Completed)
}
