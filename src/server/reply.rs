//! Reply Encoder: numeric status codes and single-/multi-line message
//! framing per RFC 959, using an explicit `<code> END\r\n` sentinel line to
//! close a multi-line reply rather than RFC 959's repeated-code last-line
//! form.

use std::fmt;

/// A reply code recognized by this server, with the exact RFC 959/2428/3659
/// numeric value as its discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyCode {
    /// 150: File status okay; about to open a data connection.
    FileStatusOkay = 150,
    /// 200: Command okay.
    CommandOkay = 200,
    /// 211: System status (used here only for the multiline FEAT reply).
    SystemStatus = 211,
    /// 213: File status (SIZE).
    FileStatus = 213,
    /// 220: Service ready.
    ServiceReady = 220,
    /// 226: Closing data connection.
    ClosingDataConnection = 226,
    /// 227: Entering Passive Mode.
    EnteringPassiveMode = 227,
    /// 229: Entering Extended Passive Mode.
    EnteringExtendedPassiveMode = 229,
    /// 230: User logged in.
    UserLoggedIn = 230,
    /// 250: Requested file action okay, completed.
    RequestedFileActionOkay = 250,
    /// 257: Pathname created / reported.
    PathnameCreated = 257,
    /// 331: User name okay, need password.
    NeedPassword = 331,
    /// 350: Requested file action pending further information.
    ActionPending = 350,
    /// 425: Can't open data connection.
    CantOpenDataConnection = 425,
    /// 500: Syntax error, command unrecognized.
    CommandSyntaxError = 500,
    /// 501: Syntax error in parameters or arguments.
    ParameterSyntaxError = 501,
    /// 502: Command not implemented for that parameter.
    CommandNotImplementedForParameter = 502,
    /// 504: Command not implemented for that parameter / not supported.
    CommandNotImplemented = 504,
    /// 522: Network protocol not supported (EPRT/EPSV family).
    ProtocolNotSupported = 522,
    /// 530: Not logged in.
    NotLoggedIn = 530,
    /// 550: Requested action not taken; file unavailable.
    FileUnavailable = 550,
}

impl fmt::Display for ReplyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", *self as u32)
    }
}

/// A reply to be written to the control channel.
#[derive(Debug, Clone)]
pub enum Reply {
    /// `"<code> <message>\r\n"`.
    Single { code: ReplyCode, message: String },
    /// `"<code>-<first line>\r\n<subsequent>\r\n<code> END\r\n"`.
    Multiline { code: ReplyCode, lines: Vec<String> },
}

impl Reply {
    /// Builds a single-line reply.
    pub fn new(code: ReplyCode, message: impl Into<String>) -> Self {
        Reply::Single { code, message: message.into() }
    }

    /// Builds a multi-line reply. `lines` must be non-empty.
    pub fn multiline(code: ReplyCode, lines: Vec<String>) -> Self {
        Reply::Multiline { code, lines }
    }

    /// The reply's status code, regardless of framing.
    pub fn code(&self) -> ReplyCode {
        match self {
            Reply::Single { code, .. } => *code,
            Reply::Multiline { code, .. } => *code,
        }
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::Single { code, message } => write!(f, "{} {}\r\n", code, message),
            Reply::Multiline { code, lines } => {
                write!(f, "{}-{}\r\n", code, lines.first().map(String::as_str).unwrap_or(""))?;
                for line in &lines[1..] {
                    write!(f, "{}\r\n", line)?;
                }
                write!(f, "{} END\r\n", code)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_line_framing() {
        let reply = Reply::new(ReplyCode::UserLoggedIn, "User logged in, proceed");
        assert_eq!(reply.to_string(), "230 User logged in, proceed\r\n");
    }

    #[test]
    fn multiline_framing_uses_end_sentinel() {
        let reply = Reply::multiline(ReplyCode::SystemStatus, vec!["Extensions supported:".to_string(), " UTF8".to_string()]);
        assert_eq!(reply.to_string(), "211-Extensions supported:\r\n UTF8\r\n211 END\r\n");
    }
}
