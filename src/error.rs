use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failures surfaced by the statistics store.
///
/// Malformed store lines are deliberately not represented here: the recorder
/// passes them through unchanged and the summaries skip them, so corruption
/// only ever affects the malformed entry itself.
#[derive(Debug, Error)]
pub enum StatsError {
    #[error("stats file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("csv export: {0}")]
    Csv(#[from] csv::Error),
}

impl StatsError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, StatsError>;
