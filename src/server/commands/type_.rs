//! `TYPE` — representation type. Requires a logged-in session; see the
//! design ledger for the reasoning. Parsing accepts all four RFC 959
//! codes; only `A` and `I` are actually supported on execute.

use super::{CommandHandler, ControlSink};
use crate::server::error::ControlChanError;
use crate::server::reply::{Reply, ReplyCode};
use crate::server::session::{Session, TypeCode};
use async_trait::async_trait;

#[derive(Default)]
pub(super) struct Type {
    code: char,
}

#[async_trait]
impl CommandHandler for Type {
    fn parse(&mut self, param: &str) -> Result<(), ()> {
        let first = param.chars().next().ok_or(())?.to_ascii_uppercase();
        if !matches!(first, 'A' | 'E' | 'I' | 'L') {
            return Err(());
        }
        self.code = first;
        Ok(())
    }

    #[tracing_attributes::instrument(skip(self, session, _control))]
    async fn execute(&mut self, session: &mut Session, _control: &mut ControlSink) -> Result<Reply, ControlChanError> {
        match self.code {
            'A' => {
                session.type_code = TypeCode::Ascii;
                Ok(Reply::new(ReplyCode::CommandOkay, "Always in ASCII mode"))
            }
            'I' => {
                session.type_code = TypeCode::Image;
                Ok(Reply::new(ReplyCode::CommandOkay, "Always in binary mode"))
            }
            _ => Ok(Reply::new(ReplyCode::CommandNotImplementedForParameter, "Type not implemented")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unknown_codes() {
        let mut type_ = Type::default();
        assert_eq!(type_.parse("X"), Err(()));
    }

    #[test]
    fn accepts_all_four_rfc_codes_at_parse_time() {
        for code in ["A", "E", "I", "L"] {
            assert_eq!(Type::default().parse(code), Ok(()));
        }
    }
}
