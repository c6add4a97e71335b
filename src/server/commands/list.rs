//! `LIST` — sends the fact-formatted directory listing over the data
//! connection.

use super::{CommandHandler, ControlSink};
use crate::facts::format_fact;
use crate::server::error::ControlChanError;
use crate::server::path;
use crate::server::reply::{Reply, ReplyCode};
use crate::server::session::Session;
use async_trait::async_trait;
use futures::SinkExt;

#[derive(Default)]
pub(super) struct List {
    param: String,
}

#[async_trait]
impl CommandHandler for List {
    fn parse(&mut self, param: &str) -> Result<(), ()> {
        self.param = param.to_string();
        Ok(())
    }

    #[tracing_attributes::instrument(skip(self, session, control))]
    async fn execute(&mut self, session: &mut Session, control: &mut ControlSink) -> Result<Reply, ControlChanError> {
        let Some(dtp) = session.dtp.take() else {
            return Ok(Reply::new(ReplyCode::CantOpenDataConnection, "Use PORT or PASV first"));
        };

        let target = path::resolve(&session.directory, &self.param);
        let stat = match session.file_manager.stat(&target).await {
            Ok(stat) => stat,
            Err(_) => return Ok(Reply::new(ReplyCode::FileUnavailable, "Failed to list directory")),
        };

        let mut listing = String::new();
        if stat.is_dir {
            let entries = match session.file_manager.list(&target).await {
                Ok(entries) => entries,
                Err(_) => return Ok(Reply::new(ReplyCode::FileUnavailable, "Failed to list directory")),
            };
            for entry in &entries {
                listing.push_str(&format_fact(&entry.name, &entry.stat));
            }
        } else {
            let name = target.rsplit('/').next().unwrap_or(&target);
            listing.push_str(&format_fact(name, &stat));
        }

        control.send(Reply::new(ReplyCode::FileStatusOkay, "Here comes the directory listing")).await?;
        let mut body = listing.as_bytes();
        let result = dtp.send(&mut body).await;
        let _ = dtp.close().await;
        match result {
            Ok(_) => Ok(Reply::new(ReplyCode::ClosingDataConnection, "Directory send OK")),
            Err(_) => Ok(Reply::new(ReplyCode::CantOpenDataConnection, "Failed to send directory listing")),
        }
    }
}
