//! `AUTH` — reserved for TLS negotiation, not offered by this server.

use super::{CommandHandler, ControlSink};
use crate::server::error::ControlChanError;
use crate::server::reply::Reply;
use crate::server::session::Session;
use async_trait::async_trait;

pub(super) struct Auth;

#[async_trait]
impl CommandHandler for Auth {
    fn supported(&self) -> bool {
        false
    }

    fn requires_auth(&self) -> bool {
        false
    }

    fn parse(&mut self, _param: &str) -> Result<(), ()> {
        Ok(())
    }

    #[tracing_attributes::instrument(skip(self, _session, _control))]
    async fn execute(&mut self, _session: &mut Session, _control: &mut ControlSink) -> Result<Reply, ControlChanError> {
        unreachable!("dispatch answers 504 before execute is ever called for an unsupported verb")
    }
}
