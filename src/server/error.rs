//! Error types for the control channel and the data transfer endpoint.
//!
//! Follows the same struct-wraps-kind split the rest of this codebase's error
//! types use: a `thiserror`-derived outer error carrying an optional source,
//! and a `derive_more::Display` kind enum where the distinction matters to
//! callers.

use derive_more::Display;
use std::io;

/// A failure on the control channel severe enough to end the session.
#[derive(Debug, thiserror::Error)]
#[error("control channel error: {kind}")]
pub struct ControlChanError {
    /// What kind of failure this was.
    pub kind: ControlChanErrorKind,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

/// The kind of [`ControlChanError`].
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum ControlChanErrorKind {
    /// Reading or writing the control socket failed.
    #[display("I/O error")]
    IoError,
}

impl From<io::Error> for ControlChanError {
    fn from(e: io::Error) -> Self {
        ControlChanError {
            kind: ControlChanErrorKind::IoError,
            source: Some(Box::new(e)),
        }
    }
}

/// Failure to establish or use a DTP endpoint.
#[derive(Debug, thiserror::Error)]
pub enum DtpError {
    /// No candidate passive port could be bound.
    #[error("no available passive port")]
    NoAvailablePassivePort,
    /// The active dial failed.
    #[error("active dial failed: {0}")]
    DialFailed(#[source] io::Error),
    /// The accept task failed or timed out; first observed by the next
    /// Read/Write/Close call on the endpoint.
    #[error("accept failed: {0}")]
    AcceptFailed(io::Error),
    /// Close (or any operation) was attempted on an endpoint that was never
    /// accepted and never will be.
    #[error("nil conn")]
    NilConn,
    /// The operation was attempted after the endpoint was already closed.
    #[error("endpoint closed")]
    Closed,
}

impl From<DtpError> for io::Error {
    fn from(e: DtpError) -> Self {
        match e {
            DtpError::DialFailed(inner) | DtpError::AcceptFailed(inner) => inner,
            other => io::Error::other(other.to_string()),
        }
    }
}
