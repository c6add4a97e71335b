//! `RMD` — removes an empty directory.

use super::{CommandHandler, ControlSink};
use crate::server::error::ControlChanError;
use crate::server::path;
use crate::server::reply::{Reply, ReplyCode};
use crate::server::session::Session;
use async_trait::async_trait;

#[derive(Default)]
pub(super) struct Rmd {
    param: String,
}

#[async_trait]
impl CommandHandler for Rmd {
    fn parse(&mut self, param: &str) -> Result<(), ()> {
        if param.is_empty() {
            return Err(());
        }
        self.param = param.to_string();
        Ok(())
    }

    #[tracing_attributes::instrument(skip(self, session, _control))]
    async fn execute(&mut self, session: &mut Session, _control: &mut ControlSink) -> Result<Reply, ControlChanError> {
        let target = path::resolve(&session.directory, &self.param);
        match session.file_manager.stat(&target).await {
            Ok(stat) if !stat.is_dir => return Ok(Reply::new(ReplyCode::FileUnavailable, "Not a directory")),
            Ok(_) => {}
            Err(_) => return Ok(Reply::new(ReplyCode::FileUnavailable, "Failed to remove directory")),
        }
        match session.file_manager.remove_dir(&target).await {
            Ok(()) => Ok(Reply::new(ReplyCode::RequestedFileActionOkay, "Directory successfully removed")),
            Err(_) => Ok(Reply::new(ReplyCode::FileUnavailable, "Failed to remove directory")),
        }
    }
}
