//! `EPSV` — as `PASV`, but reports the port alone in RFC 2428's delimited
//! form, usable for either IPv4 or IPv6 control connections.

use super::{CommandHandler, ControlSink};
use crate::server::dtp::DtpEndpoint;
use crate::server::error::ControlChanError;
use crate::server::reply::{Reply, ReplyCode};
use crate::server::session::Session;
use async_trait::async_trait;

pub(super) struct Epsv;

#[async_trait]
impl CommandHandler for Epsv {
    fn parse(&mut self, _param: &str) -> Result<(), ()> {
        Ok(())
    }

    #[tracing_attributes::instrument(skip(self, session, _control))]
    async fn execute(&mut self, session: &mut Session, _control: &mut ControlSink) -> Result<Reply, ControlChanError> {
        match DtpEndpoint::new_passive(session.peer_addr.ip(), &session.config.passive_ports).await {
            Ok(endpoint) => {
                let port = endpoint.port;
                session.dtp = Some(endpoint);
                Ok(Reply::new(ReplyCode::EnteringExtendedPassiveMode, format!("Entering Extended Passive Mode (|||{}|)", port)))
            }
            Err(_) => Ok(Reply::new(ReplyCode::CantOpenDataConnection, "Can't open data connection")),
        }
    }
}
