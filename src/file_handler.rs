use std::{
    collections::HashSet,
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use rand::{
    distributions::{Alphanumeric, DistString},
    rngs::SmallRng,
    Rng, SeedableRng,
};
use tracing::{debug, trace};

use crate::{Error, Result, Settings};

/// Collisions tolerated for a single name before the batch gives up.
pub const MAX_NAME_ATTEMPTS: usize = 10_000;

const ALPHABET_LEN: u128 = 62;

/// One file of the batch, held only until it is written.
#[derive(Debug)]
pub struct GeneratedFile {
    pub name: String,
    pub content: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchSummary {
    pub output_folder: PathBuf,
    pub files_written: u64,
    pub bytes_written: u64,
}

pub struct FileHandler<R = SmallRng> {
    settings: Settings,
    rng: R,
    used_names: HashSet<String>,
}

impl FileHandler {
    pub fn new(settings: Settings) -> Self {
        Self::with_rng(settings, SmallRng::from_entropy())
    }
}

impl<R: Rng> FileHandler<R> {
    pub fn with_rng(settings: Settings, rng: R) -> Self {
        Self {
            settings,
            rng,
            used_names: HashSet::new(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Writes the whole batch. The first I/O error aborts it; files already
    /// written stay on disk.
    pub fn save_files(&mut self) -> Result<BatchSummary> {
        let requested = self.settings.file_count();
        let capacity = token_capacity(self.settings.token_length());
        if u128::from(requested) > capacity {
            return Err(Error::TokenSpaceTooSmall {
                requested,
                capacity,
            });
        }

        let folder = self.settings.output_folder().to_path_buf();
        fs::create_dir_all(&folder).map_err(Error::fs(&folder))?;
        debug!(count = requested, folder = %folder.display(), "generating files");

        let mut bytes_written = 0;
        for _ in 0..requested {
            let file = self.next_file()?;
            let path = folder.join(&file.name);
            write_new(&path, &file.content)?;
            debug!(name = %file.name, size = file.content.len(), "wrote file");
            bytes_written += file.content.len() as u64;
        }

        debug!(count = requested, bytes = bytes_written, "batch complete");
        Ok(BatchSummary {
            output_folder: folder,
            files_written: requested,
            bytes_written,
        })
    }

    /// Produces the next file with a name not yet used in this batch nor
    /// present in the output folder.
    pub fn next_file(&mut self) -> Result<GeneratedFile> {
        let (name, token) = self.unique_name()?;
        let content = match self.settings.file_size() {
            Some(size) => {
                let size = usize::try_from(size).map_err(|_| {
                    Error::InvalidArgument(format!("file size {size} does not fit in memory"))
                })?;
                random_alphanumeric(&mut self.rng, size)
            }
            None => token.into_bytes(),
        };
        Ok(GeneratedFile { name, content })
    }

    fn unique_name(&mut self) -> Result<(String, String)> {
        for _ in 0..MAX_NAME_ATTEMPTS {
            let token = Alphanumeric.sample_string(&mut self.rng, self.settings.token_length());
            let name = self.file_name(&token);
            if self.used_names.contains(&name)
                || self.settings.output_folder().join(&name).exists()
            {
                trace!(%name, "name collision");
                continue;
            }
            self.used_names.insert(name.clone());
            return Ok((name, token));
        }
        Err(Error::NameCapacityExhausted {
            attempts: MAX_NAME_ATTEMPTS,
            used: self.used_names.len(),
        })
    }

    fn file_name(&self, token: &str) -> String {
        match self.settings.extension() {
            Some(ext) => format!("{}{token}.{ext}", self.settings.prefix()),
            None => format!("{}{token}", self.settings.prefix()),
        }
    }
}

/// `len` bytes drawn uniformly from `[A-Za-z0-9]`.
pub fn random_alphanumeric<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<u8> {
    rng.sample_iter(&Alphanumeric).take(len).collect()
}

/// Number of distinct tokens of the given length.
pub fn token_capacity(token_length: usize) -> u128 {
    u32::try_from(token_length)
        .ok()
        .and_then(|exp| ALPHABET_LEN.checked_pow(exp))
        .unwrap_or(u128::MAX)
}

fn write_new(path: &Path, content: &[u8]) -> Result<()> {
    let mut fout = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(Error::fs(path))?;
    fout.write_all(content).map_err(Error::fs(path))
}
