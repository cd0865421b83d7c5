use std::{io, path::PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("could not find an unused file name after {attempts} attempts ({used} names already taken)")]
    NameCapacityExhausted { attempts: usize, used: usize },
    #[error("{requested} files requested but only {capacity} distinct tokens exist")]
    TokenSpaceTooSmall { requested: u64, capacity: u128 },
    #[error("I/O error at {}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn fs(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| Self::Filesystem { path, source }
    }
}
