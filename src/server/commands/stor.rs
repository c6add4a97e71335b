//! `STOR` — receives a file's contents over the data connection and writes
//! it to storage.

use super::{CommandHandler, ControlSink};
use crate::server::error::ControlChanError;
use crate::server::path;
use crate::server::reply::{Reply, ReplyCode};
use crate::server::session::Session;
use async_trait::async_trait;
use futures::SinkExt;

#[derive(Default)]
pub(super) struct Stor {
    param: String,
}

#[async_trait]
impl CommandHandler for Stor {
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
        control.send(Reply::new(ReplyCode::FileStatusOkay, "Opening data connection for file transfer")).await?;

        let put_result = match dtp.reader().await {
            Ok(mut reader) => session.file_manager.put(&target, &mut reader).await.map(|_| ()).map_err(|_| ()),
            Err(_) => Err(()),
        };
        let _ = dtp.close().await;

        match put_result {
            Ok(()) => Ok(Reply::new(ReplyCode::ClosingDataConnection, "Transfer complete")),
            Err(()) => Ok(Reply::new(ReplyCode::FileUnavailable, "Failed to store file")),
        }
    }
}
