//! `PASV` — opens a passive data endpoint over the configured candidate
//! ports and reports it as an RFC 959 six-tuple.

use super::{CommandHandler, ControlSink};
use crate::server::dtp::DtpEndpoint;
use crate::server::error::ControlChanError;
use crate::server::reply::{Reply, ReplyCode};
use crate::server::session::Session;
use async_trait::async_trait;
use std::net::IpAddr;

pub(super) struct Pasv;

#[async_trait]
impl CommandHandler for Pasv {
    fn parse(&mut self, _param: &str) -> Result<(), ()> {
        Ok(())
    }

    #[tracing_attributes::instrument(skip(self, session, _control))]
    async fn execute(&mut self, session: &mut Session, _control: &mut ControlSink) -> Result<Reply, ControlChanError> {
        let octets = match session.peer_addr.ip() {
            IpAddr::V4(v4) => v4.octets(),
            IpAddr::V6(v6) => match v6.to_ipv4() {
                Some(v4) => v4.octets(),
                None => return Ok(Reply::new(ReplyCode::CantOpenDataConnection, "Can't open data connection")),
            },
        };

        match DtpEndpoint::new_passive(session.peer_addr.ip(), &session.config.passive_ports).await {
            Ok(endpoint) => {
                let port = endpoint.port;
                session.dtp = Some(endpoint);
                let p1 = port / 256;
                let p2 = port % 256;
                Ok(Reply::new(
                    ReplyCode::EnteringPassiveMode,
                    format!("Entering Passive Mode ({},{},{},{},{},{}).", octets[0], octets[1], octets[2], octets[3], p1, p2),
                ))
            }
            Err(_) => Ok(Reply::new(ReplyCode::CantOpenDataConnection, "Can't open data connection")),
        }
    }
}
