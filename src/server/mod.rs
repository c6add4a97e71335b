//! The protocol interpreter (PI) and data transfer protocol (DTP) endpoint
//! core: one [`acceptor`] listens on the control port and spawns one
//! [`session`] per accepted connection; each session owns a [`command`]
//! lexer, a [`reply`] encoder, a [`path`] resolver, and at most one
//! [`dtp`] endpoint at a time, and dispatches through the [`commands`]
//! registry.

pub mod acceptor;
pub mod codec;
pub mod command;
pub mod commands;
pub mod dtp;
pub mod error;
pub mod path;
pub mod reply;
pub mod session;

mod control_loop;
