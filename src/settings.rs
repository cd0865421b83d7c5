use std::path::{Path, PathBuf};

use crate::{cli::Args, Error, Result};

/// Requests above this many files ask for confirmation before anything is written.
pub const HIGH_FILE_COUNT_THRESHOLD: u64 = 50_000;
pub const DEFAULT_OUTPUT_FOLDER: &str = "output";
pub const DEFAULT_TOKEN_LENGTH: usize = 10;

/// Validated configuration for one batch. Never mutated after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    file_count: u64,
    prefix: String,
    extension: Option<String>,
    output_folder: PathBuf,
    file_size: Option<u64>,
    token_length: usize,
}

impl Settings {
    pub fn file_count(&self) -> u64 {
        self.file_count
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn extension(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    pub fn output_folder(&self) -> &Path {
        &self.output_folder
    }

    /// `None` means each file holds its own name token.
    pub fn file_size(&self) -> Option<u64> {
        self.file_size
    }

    pub fn token_length(&self) -> usize {
        self.token_length
    }

    pub fn is_high_file_count(&self) -> bool {
        self.file_count > HIGH_FILE_COUNT_THRESHOLD
    }

    /// Moves the batch under `root`. Relative folders are resolved against it.
    pub fn with_root(mut self, root: impl AsRef<Path>) -> Self {
        self.output_folder = root.as_ref().join(&self.output_folder);
        self
    }
}

impl TryFrom<Args> for Settings {
    type Error = Error;

    fn try_from(args: Args) -> Result<Self> {
        let file_count = match args.file_count {
            None => {
                return Err(Error::InvalidArgument(
                    "the number of files is required".into(),
                ))
            }
            Some(n) if n <= 0 => {
                return Err(Error::InvalidArgument(format!(
                    "the number of files must be positive, got {n}"
                )))
            }
            Some(n) => n as u64,
        };
        if args.token_length == 0 {
            return Err(Error::InvalidArgument(
                "the token length must be at least 1".into(),
            ));
        }

        let output = args.output.join(" ");
        let output = output.trim();
        let output_folder = PathBuf::from(if output.is_empty() {
            DEFAULT_OUTPUT_FOLDER
        } else {
            output
        });

        Ok(Self {
            file_count,
            prefix: normalize_prefix(args.prefix.unwrap_or_default()),
            extension: args
                .extension
                .map(|ext| ext.trim_start_matches('.').to_owned())
                .filter(|ext| !ext.is_empty()),
            output_folder,
            file_size: args.size,
            token_length: args.token_length,
        })
    }
}

fn normalize_prefix(mut prefix: String) -> String {
    if prefix.ends_with(char::is_alphanumeric) {
        prefix.push(' ');
    }
    prefix
}
