//! `RETR` — sends a file's contents over the data connection.

use super::{CommandHandler, ControlSink};
use crate::server::error::ControlChanError;
use crate::server::path;
use crate::server::reply::{Reply, ReplyCode};
use crate::server::session::Session;
use async_trait::async_trait;
use futures::SinkExt;

#[derive(Default)]
pub(super) struct Retr {
    param: String,
}

#[async_trait]
impl CommandHandler for Retr {
    fn parse(&mut self, param: &str) -> Result<(), ()> {
        if param.is_empty() {
            return Err(());
        }
        self.param = param.to_string();
        Ok(())
    }

    #[tracing_attributes::instrument(skip(self, session, control))]
    async fn execute(&mut self, session: &mut Session, control: &mut ControlSink) -> Result<Reply, ControlChanError> {
        let Some(dtp) = session.dtp.take() else {
            return Ok(Reply::new(ReplyCode::CantOpenDataConnection, "Use PORT or PASV first"));
        };

        let target = path::resolve(&session.directory, &self.param);
        let mut reader = match session.file_manager.get(&target).await {
            Ok(reader) => reader,
            Err(_) => return Ok(Reply::new(ReplyCode::FileUnavailable, "Failed to open file")),
        };

        control.send(Reply::new(ReplyCode::FileStatusOkay, "Opening data connection for file transfer")).await?;
        let result = dtp.send(&mut *reader).await;
        let _ = dtp.close().await;
        match result {
            Ok(_) => Ok(Reply::new(ReplyCode::ClosingDataConnection, "Transfer complete")),
            Err(_) => Ok(Reply::new(ReplyCode::CantOpenDataConnection, "Failed to send file")),
        }
    }
}
