//! `FEAT` — advertises `UTF8` only.

use super::{CommandHandler, ControlSink};
use crate::server::error::ControlChanError;
use crate::server::reply::{Reply, ReplyCode};
use crate::server::session::Session;
use async_trait::async_trait;

pub(super) struct Feat;

#[async_trait]
impl CommandHandler for Feat {
    fn requires_auth(&self) -> bool {
        false
    }

    fn parse(&mut self, _param: &str) -> Result<(), ()> {
        Ok(())
    }

    #[tracing_attributes::instrument(skip(self, _session, _control))]
    async fn execute(&mut self, _session: &mut Session, _control: &mut ControlSink) -> Result<Reply, ControlChanError> {
        Ok(Reply::multiline(ReplyCode::SystemStatus, vec!["Extensions supported:".to_string(), " UTF8".to_string()]))
    }
}
