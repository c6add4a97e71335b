//! Command Task Set: one handler per verb, each exposing the same
//! four-operation contract (`supported`, `requires_auth`, `parse`,
//! `execute`). Verb polymorphism is realized as a registry mapping the verb
//! string to a freshly constructed handler, rather than a tagged-enum
//! dispatch function — both are offered as equivalent re-architecture
//! choices; this crate picks the registry because each verb's parsed state
//! differs enough in shape that per-verb structs read more naturally than
//! enum variants carrying the same fields.

mod auth;
mod cwd;
mod dele;
mod epsv;
mod eprt;
mod feat;
mod list;
mod pass;
mod pasv;
mod port;
mod pwd;
mod retr;
mod rmd;
mod rnfr;
mod rnto;
mod size;
mod stor;
mod type_;
mod user;

use crate::server::error::ControlChanError;
use crate::server::reply::Reply;
use crate::server::session::Session;
use async_trait::async_trait;
use tokio_util::codec::Framed;

/// The sink half a command writes intermediate replies to (e.g. the `150`
/// that precedes a transfer's data phase). The final reply is always the
/// `execute` return value, written by the caller.
pub type ControlSink = Framed<tokio::net::TcpStream, crate::server::codec::FtpCodec>;

/// The four-operation contract every verb implements.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// False disables the verb entirely; dispatch answers 504 without
    /// calling `parse` or `execute`.
    fn supported(&self) -> bool {
        true
    }

    /// True gates the verb behind `session.logged_in`; dispatch answers 530
    /// without calling `parse` or `execute`.
    fn requires_auth(&self) -> bool {
        true
    }

    /// Populates this handler's parsed state from the command's parameter.
    /// An error here is mapped to 501 by the caller.
    fn parse(&mut self, param: &str) -> Result<(), ()>;

    /// Performs the verb's action and returns its final reply. May write
    /// intermediate replies (e.g. 150) to `control` before returning.
    async fn execute(&mut self, session: &mut Session, control: &mut ControlSink) -> Result<Reply, ControlChanError>;
}

/// Looks up the handler for `verb`, returning a freshly constructed (not yet
/// parsed) instance, or `None` for an unrecognized verb.
pub fn lookup(verb: &str) -> Option<Box<dyn CommandHandler>> {
    Some(match verb {
        "AUTH" => Box::new(auth::Auth),
        "USER" => Box::new(user::User::default()),
        "PASS" => Box::new(pass::Pass::default()),
        "FEAT" => Box::new(feat::Feat),
        "PWD" => Box::new(pwd::Pwd),
        "TYPE" => Box::new(type_::Type::default()),
        "PASV" => Box::new(pasv::Pasv),
        "PORT" => Box::new(port::Port::default()),
        "EPSV" => Box::new(epsv::Epsv),
        "EPRT" => Box::new(eprt::Eprt::default()),
        "LIST" => Box::new(list::List::default()),
        "CWD" => Box::new(cwd::Cwd::default()),
        "RETR" => Box::new(retr::Retr::default()),
        "STOR" => Box::new(stor::Stor::default()),
        "DELE" => Box::new(dele::Dele::default()),
        "RMD" => Box::new(rmd::Rmd::default()),
        "RNFR" => Box::new(rnfr::Rnfr::default()),
        "RNTO" => Box::new(rnto::Rnto::default()),
        "SIZE" => Box::new(size::Size::default()),
        _ => return None,
    })
}
