//! `RNFR` — records the rename source, to be consumed by the next `RNTO`.

use super::{CommandHandler, ControlSink};
use crate::server::error::ControlChanError;
use crate::server::path;
use crate::server::reply::{Reply, ReplyCode};
use crate::server::session::Session;
use async_trait::async_trait;

#[derive(Default)]
pub(super) struct Rnfr {
    param: String,
}

#[async_trait]
impl CommandHandler for Rnfr {
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
        session.rnfr = Some(target);
        Ok(Reply::new(ReplyCode::ActionPending, "Ready for RNTO"))
    }
}
