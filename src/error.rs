//! Error taxonomy for annotation rendering and include emission.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// An externsync value that is neither "true" nor a dereference path.
    /// Recovered locally by the extractor.
    #[error("malformed externsync annotation '{value}'")]
    MalformedAnnotation { value: String },

    /// The output directory or an include file could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
