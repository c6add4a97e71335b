//! `PORT` — dials the client's advertised address for an active data
//! connection.

use super::{CommandHandler, ControlSink};
use crate::server::dtp::DtpEndpoint;
use crate::server::error::ControlChanError;
use crate::server::reply::{Reply, ReplyCode};
use crate::server::session::Session;
use async_trait::async_trait;
use std::net::{Ipv4Addr, SocketAddr};

#[derive(Default)]
pub(super) struct Port {
    addr: Option<SocketAddr>,
}

#[async_trait]
impl CommandHandler for Port {
    fn parse(&mut self, param: &str) -> Result<(), ()> {
        let tokens: Vec<&str> = param.split(',').collect();
        if tokens.len() != 6 {
            return Err(());
        }
        let mut nums = [0u8; 6];
        for (slot, token) in nums.iter_mut().zip(tokens.iter()) {
            *slot = token.trim().parse().map_err(|_| ())?;
        }
        let ip = Ipv4Addr::new(nums[0], nums[1], nums[2], nums[3]);
        let port = u16::from(nums[4]) * 256 + u16::from(nums[5]);
        self.addr = Some(SocketAddr::new(ip.into(), port));
        Ok(())
    }

    #[tracing_attributes::instrument(skip(self, session, _control))]
    async fn execute(&mut self, session: &mut Session, _control: &mut ControlSink) -> Result<Reply, ControlChanError> {
        let addr = self.addr.expect("parse populates addr before execute runs");
        match DtpEndpoint::new_active(addr).await {
            Ok(endpoint) => {
                session.dtp = Some(endpoint);
                Ok(Reply::new(ReplyCode::CommandOkay, "PORT command successful"))
            }
            Err(_) => Ok(Reply::new(ReplyCode::CantOpenDataConnection, "Can't open data connection")),
        }
    }
}
