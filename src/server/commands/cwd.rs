//! `CWD` — changes the session's current directory. No `Stat` check is
//! performed against the resolved path; an intervening `LIST`/`RETR` against
//! a bogus directory surfaces its own 550 instead.

use super::{CommandHandler, ControlSink};
use crate::server::error::ControlChanError;
use crate::server::path;
use crate::server::reply::{Reply, ReplyCode};
use crate::server::session::Session;
use async_trait::async_trait;

#[derive(Default)]
pub(super) struct Cwd {
    param: String,
}

#[async_trait]
impl CommandHandler for Cwd {
    fn parse(&mut self, param: &str) -> Result<(), ()> {
        if param.is_empty() {
            return Err(());
        }
        self.param = param.to_string();
        Ok(())
    }

    #[tracing_attributes::instrument(skip(self, session, _control))]
    async fn execute(&mut self, session: &mut Session, _control: &mut ControlSink) -> Result<Reply, ControlChanError> {
        session.directory = path::resolve(&session.directory, &self.param);
        Ok(Reply::new(ReplyCode::RequestedFileActionOkay, "Directory successfully changed"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_param() {
        let mut cwd = Cwd::default();
        assert_eq!(cwd.parse(""), Err(()));
    }
}
