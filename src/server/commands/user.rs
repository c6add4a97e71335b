//! `USER` — records the requested identity; does not itself authenticate.

use super::{CommandHandler, ControlSink};
use crate::server::error::ControlChanError;
use crate::server::reply::{Reply, ReplyCode};
use crate::server::session::Session;
use async_trait::async_trait;

#[derive(Default)]
pub(super) struct User {
    username: String,
}

#[async_trait]
impl CommandHandler for User {
    fn requires_auth(&self) -> bool {
        false
    }

    fn parse(&mut self, param: &str) -> Result<(), ()> {
        if param.is_empty() {
            return Err(());
        }
        self.username = param.to_string();
        Ok(())
    }

    #[tracing_attributes::instrument(skip(self, session, _control))]
    async fn execute(&mut self, session: &mut Session, _control: &mut ControlSink) -> Result<Reply, ControlChanError> {
        session.requester = Some(self.username.clone());
        Ok(Reply::new(ReplyCode::NeedPassword, "User name okay, need password."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_username() {
        let mut user = User::default();
        assert_eq!(user.parse(""), Err(()));
    }
}
