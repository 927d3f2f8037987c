//! Error handling for the imgrab library.
//!
//! This module provides centralized error handling for the raw HTTP client
//! and the download orchestration. The variants mirror the failure taxonomy
//! of the wire protocol: socket-level transport failures, protocol parse
//! failures, unsuccessful page statuses, and local I/O errors.

use std::io;
use thiserror::Error;

/// Errors that can happen when using imgrab.
#[derive(Error, Debug)]
pub enum Error {
    /// A URL could not be parsed or is not usable for a plain HTTP request.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Socket-level failure: connection refused, host unreachable, DNS
    /// failure, or a read/write error on the TCP stream.
    ///
    /// Fatal for the single request in progress. The orchestrator treats it
    /// as fatal for the run when the page fetch produced it, and as
    /// "resource unavailable, skip" when a resource fetch produced it.
    #[error("Transport error: {source}")]
    Transport { source: io::Error },

    /// The response did not match the expected HTTP/1.1 shape: a status
    /// line that does not parse, or a successful binary response without a
    /// usable `Content-Length`.
    ///
    /// Always fatal for the whole run, since it indicates the transport
    /// assumption is broken rather than one bad resource.
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// The page fetch completed but returned a non-2xx status, so there is
    /// no HTML to extract links from.
    #[error("Cannot retrieve the page: server returned status {0}")]
    PageUnavailable(u16),

    /// Local I/O error while preparing the download folder or writing a
    /// downloaded file.
    #[error("I/O error")]
    Io {
        #[from]
        source: io::Error,
    },
}

impl Error {
    /// Wrap a socket-level error.
    pub(crate) fn transport(source: io::Error) -> Self {
        Error::Transport { source }
    }
}

/// Result type alias for operations that can fail with an imgrab error.
pub type Result<T> = std::result::Result<T, Error>;
