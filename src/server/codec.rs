//! Control-channel framing: splits the incoming byte stream on `\n` and lexes
//! each line into a [`CommandLine`]; encodes outgoing [`Reply`] values.

use crate::server::command::CommandLine;
use crate::server::reply::Reply;
use bytes::BytesMut;
use std::io;
use tokio_util::codec::{Decoder, Encoder};

/// `tokio_util` codec for the control channel.
pub struct FtpCodec {
    next_index: usize,
}

impl FtpCodec {
    /// Builds a fresh codec with no buffered partial line.
    pub fn new() -> Self {
        FtpCodec { next_index: 0 }
    }
}

impl Default for FtpCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder for FtpCodec {
    type Item = CommandLine;
    type Error = io::Error;

    fn decode(&mut self, buf: &mut BytesMut) -> Result<Option<CommandLine>, Self::Error> {
        if let Some(newline_offset) = buf[self.next_index..].iter().position(|b| *b == b'\n') {
            let newline_index = newline_offset + self.next_index;
            let line = buf.split_to(newline_index + 1);
            self.next_index = 0;
            let line = std::str::from_utf8(&line).unwrap_or_default();
            Ok(Some(CommandLine::parse(line)))
        } else {
            self.next_index = buf.len();
            Ok(None)
        }
    }
}

impl Encoder<Reply> for FtpCodec {
    type Error = io::Error;

    fn encode(&mut self, reply: Reply, buf: &mut BytesMut) -> Result<(), Self::Error> {
        buf.extend_from_slice(reply.to_string().as_bytes());
        Ok(())
    }
}
