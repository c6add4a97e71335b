//! Per-control-connection state: everything a command task can read or
//! mutate, consolidated into one owned struct passed by exclusive reference.

use crate::config::Config;
use crate::server::dtp::DtpEndpoint;
use crate::storage::FileManager;
use std::net::SocketAddr;
use std::sync::Arc;

/// Representation type negotiated by `TYPE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeCode {
    /// ASCII (`A`). Accepted for conformance; no EOL translation is performed.
    Ascii,
    /// Image / binary (`I`), the default.
    Image,
}

/// All state for one control connection.
pub struct Session {
    /// Set by `USER`; cleared only when the session ends.
    pub requester: Option<String>,
    /// True once `USER`+`PASS` matched the configured credential. Never
    /// demoted within a session.
    pub logged_in: bool,
    /// Current working directory, always absolute.
    pub directory: String,
    /// Representation type, initially [`TypeCode::Image`].
    pub type_code: TypeCode,
    /// Observed local address of the control socket.
    pub peer_addr: SocketAddr,
    /// At most one pending/established data channel.
    pub dtp: Option<DtpEndpoint>,
    /// Path recorded by `RNFR`, consumed by the next `RNTO`.
    pub rnfr: Option<String>,
    /// Shared configuration (credential, root, passive port candidates).
    pub config: Arc<Config>,
    /// Shared File Manager handle.
    pub file_manager: Arc<dyn FileManager>,
}

impl Session {
    /// Builds a fresh, unauthenticated session rooted at `config.root`.
    pub fn new(peer_addr: SocketAddr, config: Arc<Config>, file_manager: Arc<dyn FileManager>) -> Self {
        let directory = config.root.display().to_string();
        Session {
            requester: None,
            logged_in: false,
            directory,
            type_code: TypeCode::Image,
            peer_addr,
            dtp: None,
            rnfr: None,
            config,
            file_manager,
        }
    }
}
