//! `SIZE` — reports a file's byte size.

use super::{CommandHandler, ControlSink};
use crate::server::error::ControlChanError;
use crate::server::path;
use crate::server::reply::{Reply, ReplyCode};
use crate::server::session::Session;
use async_trait::async_trait;

#[derive(Default)]
pub(super) struct Size {
    param: String,
}

#[async_trait]
impl CommandHandler for Size {
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
            Ok(stat) if !stat.is_dir => Ok(Reply::new(ReplyCode::FileStatus, stat.size.to_string())),
            Ok(_) => Ok(Reply::new(ReplyCode::FileUnavailable, "Not a plain file")),
            Err(_) => Ok(Reply::new(ReplyCode::FileUnavailable, "Could not get file size")),
        }
    }
}
