//! `PASS` — matches the prior `USER` plus this password against the single
//! configured credential. No lockout, no throttling: a failed attempt leaves
//! `requester` set, so the client may retry `PASS` without reissuing `USER`
//! (an intentionally preserved source behavior, see the design ledger).

use super::{CommandHandler, ControlSink};
use crate::server::error::ControlChanError;
use crate::server::reply::{Reply, ReplyCode};
use crate::server::session::Session;
use async_trait::async_trait;

#[derive(Default)]
pub(super) struct Pass {
    password: String,
}

#[async_trait]
impl CommandHandler for Pass {
    fn requires_auth(&self) -> bool {
        false
    }

    fn parse(&mut self, param: &str) -> Result<(), ()> {
        if param.is_empty() {
            return Err(());
        }
        self.password = param.to_string();
        Ok(())
    }

    #[tracing_attributes::instrument(skip(self, session, _control))]
    async fn execute(&mut self, session: &mut Session, _control: &mut ControlSink) -> Result<Reply, ControlChanError> {
        let matches = session.requester.as_deref() == Some(session.config.user_name.as_str()) && self.password == session.config.user_password;
        if matches {
            session.logged_in = true;
            Ok(Reply::new(ReplyCode::UserLoggedIn, "User logged in, proceed."))
        } else {
            Ok(Reply::new(ReplyCode::NotLoggedIn, "Not logged in"))
        }
    }
}
