//! Server configuration.
//!
//! Sourcing configuration from a particular file format, watching for SIGHUP,
//! and process entry in general are external concerns (see the crate's own
//! design notes); this module only defines the shape of the configuration the
//! core consumes, plus one minimal environment-variable loader so the crate is
//! runnable on its own.

use std::path::PathBuf;

/// The five values the protocol interpreter and acceptor need to start.
#[derive(Debug, Clone)]
pub struct Config {
    /// The single account's user name.
    pub user_name: String,
    /// The single account's password.
    pub user_password: String,
    /// Initial session directory, and the advisory (non-confining) base for
    /// all resolved paths.
    pub root: PathBuf,
    /// TCP port the control channel listens on.
    pub pi_port: u16,
    /// Ordered candidate ports tried in order for PASV/EPSV.
    pub passive_ports: Vec<u16>,
}

/// Failure to load a [`Config`] from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required environment variable was not set.
    #[error("missing environment variable {0}")]
    Missing(&'static str),
    /// A variable was set but couldn't be parsed into its expected type.
    #[error("invalid value for environment variable {0}: {1}")]
    Invalid(&'static str, String),
}

impl Config {
    /// Loads configuration from `UNFTPD_USER`, `UNFTPD_PASSWORD`,
    /// `UNFTPD_ROOT`, `UNFTPD_PI_PORT` and `UNFTPD_PASSIVE_PORTS` (a
    /// comma-separated list of ports).
    pub fn from_env() -> Result<Self, ConfigError> {
        let user_name = env_var("UNFTPD_USER")?;
        let user_password = env_var("UNFTPD_PASSWORD")?;
        let root = PathBuf::from(env_var("UNFTPD_ROOT")?);
        let pi_port = env_var("UNFTPD_PI_PORT")?
            .parse()
            .map_err(|_| ConfigError::Invalid("UNFTPD_PI_PORT", "not a u16".into()))?;
        let passive_ports = env_var("UNFTPD_PASSIVE_PORTS")?
            .split(',')
            .map(|s| s.trim().parse::<u16>())
            .collect::<Result<Vec<u16>, _>>()
            .map_err(|_| ConfigError::Invalid("UNFTPD_PASSIVE_PORTS", "not a comma-separated list of u16".into()))?;
        Ok(Config {
            user_name,
            user_password,
            root,
            pi_port,
            passive_ports,
        })
    }
}

fn env_var(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::Missing(name))
}
