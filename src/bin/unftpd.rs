//! Binary entry point: loads configuration from the environment, builds the
//! local-filesystem File Manager, and runs the Acceptor. No signal handling,
//! no config file loading, no tracing subscriber installation — all left to
//! the embedding process.

use std::process::ExitCode;
use std::sync::Arc;
use unftpd::config::Config;
use unftpd::storage::filesystem::FilesystemManager;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let file_manager: Arc<dyn unftpd::storage::FileManager> = Arc::new(FilesystemManager);

    if let Err(e) = unftpd::server::acceptor::run(config, file_manager).await {
        eprintln!("server error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
