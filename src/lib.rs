#![deny(clippy::all)]
#![deny(unsafe_code)]

//! A single-user FTP server: the protocol interpreter (PI) state machine plus
//! data transfer protocol (DTP) endpoint management, implementing a pragmatic
//! subset of RFC 959 plus the RFC 2428 extensions (EPSV/EPRT) and an
//! RFC 3659 MLSx-style fact listing for LIST.
//!
//! The server speaks one credential pair, one filesystem root, and supports
//! active and passive data connections. For each control connection the
//! [`server::acceptor`] spawns one [`server::session`] that owns its own
//! command lexer, reply encoder, path resolver, and data endpoint.
//!
//! # Quick start
//!
//! ```no_run
//! #[tokio::main]
//! pub async fn main() {
//!     let config = unftpd::config::Config::from_env().expect("configuration");
//!     let file_manager = std::sync::Arc::new(unftpd::storage::filesystem::FilesystemManager);
//!     unftpd::server::acceptor::run(config, file_manager).await.expect("server");
//! }
//! ```

pub mod config;
pub mod facts;
pub mod server;
pub mod storage;
