/// Error types for file inspection and report export
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FileError {
    #[error("failed to inspect {}: {source}", path.display())]
    Inspect { path: PathBuf, source: io::Error },

    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to copy {} to {}: {source}", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },

    #[error("failed to write report {}: {source}", path.display())]
    Export {
        path: PathBuf,
        source: rust_xlsxwriter::XlsxError,
    },
}
