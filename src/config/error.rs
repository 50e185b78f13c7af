//! Configuration errors

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building [`SwapOptions`](super::SwapOptions)
///
/// These are the only fatal errors of the component: they surface before any
/// file is touched.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Options were not given as a key-value object
    #[error("options can be given only as a plain key-value object, found {found}")]
    NotPlainObject {
        /// Kind of value that was supplied instead
        found: &'static str,
    },

    /// Options could not be deserialized
    #[error("failed to parse {origin}: {message}")]
    Parse {
        /// File path or `<options>` for in-memory values
        origin: String,
        /// Deserializer message
        message: String,
    },

    /// Config file could not be read
    #[error("failed to read {}", .path.display())]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}
