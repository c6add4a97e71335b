//! Session (PI) loop: greets the client, then reads one command line at a
//! time and runs it through the four-operation dispatch gate.

use crate::config::Config;
use crate::server::codec::FtpCodec;
use crate::server::commands::{self, ControlSink};
use crate::server::error::ControlChanError;
use crate::server::reply::{Reply, ReplyCode};
use crate::server::session::Session;
use crate::storage::FileManager;
use futures::{SinkExt, StreamExt};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpStream;
use tokio_util::codec::Framed;

/// Runs one control connection to completion: greeting, dispatch loop,
/// cleanup of any still-open data endpoint on exit.
pub async fn run(stream: TcpStream, peer_addr: SocketAddr, config: Arc<Config>, file_manager: Arc<dyn FileManager>) {
    let span = tracing::info_span!("session", peer = %peer_addr);
    let _guard = span.enter();

    let mut control: ControlSink = Framed::new(stream, FtpCodec::new());
    if let Err(e) = control.send(Reply::new(ReplyCode::ServiceReady, "Service ready for new user.")).await {
        tracing::error!(error = %e, "failed to write greeting");
        return;
    }

    let mut session = Session::new(peer_addr, config, file_manager);

    loop {
        let line = match control.next().await {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                tracing::error!(error = %e, "control channel read failed");
                break;
            }
            None => break,
        };

        tracing::debug!(verb = %line.verb, "dispatching command");
        let reply = match dispatch(&line.verb, &line.param, &mut session, &mut control).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::error!(error = %e, "control channel error during execute");
                break;
            }
        };

        if let Err(e) = control.send(reply).await {
            tracing::error!(error = %e, "control channel write failed");
            break;
        }
    }

    if let Some(dtp) = session.dtp.take() {
        let _ = dtp.close().await;
    }
}

async fn dispatch(verb: &str, param: &str, session: &mut Session, control: &mut ControlSink) -> Result<Reply, ControlChanError> {
    let Some(mut handler) = commands::lookup(verb) else {
        return Ok(Reply::new(ReplyCode::CommandSyntaxError, "Unknown command"));
    };

    if !handler.supported() {
        return Ok(Reply::new(ReplyCode::CommandNotImplemented, "Command not implemented"));
    }

    if handler.requires_auth() && !session.logged_in {
        tracing::warn!(verb, "command rejected: not logged in");
        return Ok(Reply::new(ReplyCode::NotLoggedIn, "Not permission to this command."));
    }

    if handler.parse(param).is_err() {
        return Ok(Reply::new(ReplyCode::ParameterSyntaxError, "Syntax error in parameters or arguments"));
    }

    handler.execute(session, control).await
}
