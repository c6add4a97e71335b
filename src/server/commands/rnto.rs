//! `RNTO` — completes a rename started by `RNFR`.
//!
//! Clears `session.rnfr` unconditionally before attempting the rename, so a
//! failed or out-of-order `RNTO` never leaves a stale source behind for the
//! next one to reuse.

use super::{CommandHandler, ControlSink};
use crate::server::error::ControlChanError;
use crate::server::path;
use crate::server::reply::{Reply, ReplyCode};
use crate::server::session::Session;
use async_trait::async_trait;

#[derive(Default)]
pub(super) struct Rnto {
    param: String,
}

#[async_trait]
impl CommandHandler for Rnto {
    fn parse(&mut self, param: &str) -> Result<(), ()> {
        if param.is_empty() {
            return Err(());
        }
        self.param = param.to_string();
        Ok(())
    }

    #[tracing_attributes::instrument(skip(self, session, _control))]
    async fn execute(&mut self, session: &mut Session, _control: &mut ControlSink) -> Result<Reply, ControlChanError> {
        let Some(from) = session.rnfr.take() else {
            return Ok(Reply::new(ReplyCode::FileUnavailable, "RNFR required first"));
        };
        let to = path::resolve(&session.directory, &self.param);
        match session.file_manager.rename(&from, &to).await {
            Ok(()) => Ok(Reply::new(ReplyCode::RequestedFileActionOkay, "Rename successful")),
            Err(_) => Ok(Reply::new(ReplyCode::FileUnavailable, "Rename failed")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_nonempty_param() {
        let mut rnto = Rnto::default();
        assert_eq!(rnto.parse(""), Err(()));
    }
}
