//! `EPRT` — RFC 2428's delimited active-open form: `|family|host|port|`.

use super::{CommandHandler, ControlSink};
use crate::server::dtp::DtpEndpoint;
use crate::server::error::ControlChanError;
use crate::server::reply::{Reply, ReplyCode};
use crate::server::session::Session;
use async_trait::async_trait;
use std::net::SocketAddr;

#[derive(Default)]
pub(super) struct Eprt {
    family: u8,
    addr: Option<SocketAddr>,
}

#[async_trait]
impl CommandHandler for Eprt {
    fn parse(&mut self, param: &str) -> Result<(), ()> {
        let tokens: Vec<&str> = param.split('|').collect();
        // "|1|127.0.0.1|2020|" splits into ["", "1", "127.0.0.1", "2020", ""].
        if tokens.len() != 5 {
            return Err(());
        }
        let family: u8 = tokens[1].parse().map_err(|_| ())?;
        let host = tokens[2];
        let port: u16 = tokens[3].parse().map_err(|_| ())?;
        self.family = family;
        if family == 1 || family == 2 {
            let ip: std::net::IpAddr = host.parse().map_err(|_| ())?;
            self.addr = Some(SocketAddr::new(ip, port));
        }
        Ok(())
    }

    #[tracing_attributes::instrument(skip(self, session, _control))]
    async fn execute(&mut self, session: &mut Session, _control: &mut ControlSink) -> Result<Reply, ControlChanError> {
        if self.family != 1 && self.family != 2 {
            return Ok(Reply::new(ReplyCode::ProtocolNotSupported, "Network protocol not supported, use (1,2)"));
        }
        let addr = self.addr.expect("parse populates addr for family 1/2 before execute runs");
        match DtpEndpoint::new_active(addr).await {
            Ok(endpoint) => {
                session.dtp = Some(endpoint);
                Ok(Reply::new(ReplyCode::CommandOkay, "EPRT command successful"))
            }
            Err(_) => Ok(Reply::new(ReplyCode::CantOpenDataConnection, "Can't open data connection")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_family_still_parses_but_execute_rejects_it() {
        let mut eprt = Eprt::default();
        eprt.parse("|3|127.0.0.1|2020|").unwrap();
        assert_eq!(eprt.family, 3);
    }

    #[test]
    fn wrong_token_count_is_a_parse_error() {
        let mut eprt = Eprt::default();
        assert_eq!(eprt.parse("|1|127.0.0.1|"), Err(()));
    }
}
