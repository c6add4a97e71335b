//! `PWD` — reports the current working directory, quoted.

use super::{CommandHandler, ControlSink};
use crate::server::error::ControlChanError;
use crate::server::reply::{Reply, ReplyCode};
use crate::server::session::Session;
use async_trait::async_trait;

pub(super) struct Pwd;

#[async_trait]
impl CommandHandler for Pwd {
    fn requires_auth(&self) -> bool {
        false
    }

    fn parse(&mut self, _param: &str) -> Result<(), ()> {
        Ok(())
    }

    #[tracing_attributes::instrument(skip(self, session, _control))]
    async fn execute(&mut self, session: &mut Session, _control: &mut ControlSink) -> Result<Reply, ControlChanError> {
        Ok(Reply::new(ReplyCode::PathnameCreated, format!("\"{}\" is the current directory", session.directory)))
    }
}
