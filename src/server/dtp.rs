//! DTP Endpoint: owns one pending (or already-established) data connection,
//! active or passive.
//!
//! A passive accept happens in the background so the control connection can
//! reply with the negotiated port before the client connects; the first
//! Read/Write/Close call on the endpoint blocks until that task's accept
//! resolves. This is realized with a [`tokio::sync::oneshot`] channel
//! carrying the accept's outcome, observed at most once behind a
//! [`tokio::sync::Mutex`]-guarded state machine; every later call on the same
//! endpoint sees the cached outcome instead of re-awaiting anything.

use crate::server::error::DtpError;
use std::net::{IpAddr, SocketAddr};
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncWrite, ReadBuf};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::{oneshot, Mutex, MutexGuard};

const ACCEPT_DEADLINE: Duration = Duration::from_secs(30);

/// Which side opened the data connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// The server dialed the client's advertised address (PORT/EPRT).
    Active,
    /// The server listens and the client connects (PASV/EPSV).
    Passive,
}

enum State {
    /// Already connected (the active-open case, or a passive endpoint whose
    /// accept has already resolved).
    Connected(TcpStream),
    /// A passive endpoint whose background accept task hasn't resolved yet.
    Pending(oneshot::Receiver<Result<TcpStream, DtpError>>),
    /// The accept (or an earlier operation) failed; cached so every later
    /// caller observes the same error without re-awaiting anything.
    Failed(String),
    /// Closed, or never accepted and now being asked for its connection.
    Closed,
}

/// A handle to exactly one data-channel socket over its lifetime.
pub struct DtpEndpoint {
    /// Active or Passive.
    pub mode: Mode,
    /// Peer port (Active) or local listening port (Passive).
    pub port: u16,
    state: Mutex<State>,
}

impl DtpEndpoint {
    /// Synchronously dials `addr`; returns a ready endpoint on success.
    pub async fn new_active(addr: SocketAddr) -> Result<Self, DtpError> {
        let stream = TcpStream::connect(addr).await.map_err(DtpError::DialFailed)?;
        Ok(DtpEndpoint {
            mode: Mode::Active,
            port: addr.port(),
            state: Mutex::new(State::Connected(stream)),
        })
    }

    /// Tries each port in `candidate_ports`, in order, binding on
    /// `0.0.0.0`/`::` as appropriate for `bind_ip`'s family. The first
    /// successful bind is armed with a 30-second accept deadline and handed
    /// to a background task; the endpoint is returned immediately so the
    /// caller can reply with the negotiated port before the client connects.
    pub async fn new_passive(bind_ip: IpAddr, candidate_ports: &[u16]) -> Result<Self, DtpError> {
        let unspecified = if bind_ip.is_ipv4() {
            IpAddr::V4(std::net::Ipv4Addr::UNSPECIFIED)
        } else {
            IpAddr::V6(std::net::Ipv6Addr::UNSPECIFIED)
        };
        for &port in candidate_ports {
            let bind_addr = SocketAddr::new(unspecified, port);
            match TcpListener::bind(bind_addr).await {
                Ok(listener) => {
                    let (tx, rx) = oneshot::channel();
                    tokio::spawn(async move {
                        let outcome = match tokio::time::timeout(ACCEPT_DEADLINE, listener.accept()).await {
                            Ok(Ok((stream, _peer))) => Ok(stream),
                            Ok(Err(e)) => Err(DtpError::AcceptFailed(e)),
                            Err(_elapsed) => Err(DtpError::AcceptFailed(std::io::Error::new(std::io::ErrorKind::TimedOut, "passive accept timed out"))),
                        };
                        let _ = tx.send(outcome);
                    });
                    return Ok(DtpEndpoint {
                        mode: Mode::Passive,
                        port,
                        state: Mutex::new(State::Pending(rx)),
                    });
                }
                Err(e) if e.kind() == std::io::ErrorKind::AddrInUse => continue,
                Err(_) => continue,
            }
        }
        Err(DtpError::NoAvailablePassivePort)
    }

    async fn resolve(state: &mut State) -> Result<&mut TcpStream, DtpError> {
        loop {
            match state {
                State::Connected(stream) => return Ok(stream),
                State::Failed(msg) => return Err(DtpError::AcceptFailed(std::io::Error::other(msg.clone()))),
                State::Closed => return Err(DtpError::NilConn),
                State::Pending(_) => {
                    let State::Pending(rx) = std::mem::replace(state, State::Closed) else {
                        unreachable!()
                    };
                    match rx.await {
                        Ok(Ok(stream)) => *state = State::Connected(stream),
                        Ok(Err(e)) => *state = State::Failed(e.to_string()),
                        Err(_recv_error) => *state = State::Failed("accept task dropped".to_string()),
                    }
                }
            }
        }
    }

    /// Copies all bytes from `reader` into the data connection (used by
    /// RETR/LIST to send data to the client).
    pub async fn send(&self, reader: &mut (dyn AsyncRead + Send + Unpin)) -> Result<u64, DtpError> {
        let mut guard = self.state.lock().await;
        let stream = Self::resolve(&mut guard).await?;
        tokio::io::copy(reader, stream).await.map_err(DtpError::AcceptFailed)
    }

    /// Copies all bytes from the data connection into `writer` (used by STOR
    /// to receive data from the client).
    pub async fn receive(&self, writer: &mut (dyn AsyncWrite + Send + Unpin)) -> Result<u64, DtpError> {
        let mut guard = self.state.lock().await;
        let stream = Self::resolve(&mut guard).await?;
        tokio::io::copy(stream, writer).await.map_err(DtpError::AcceptFailed)
    }

    /// Borrows the data connection as an `AsyncRead`, for callers (STOR) that
    /// need to stream it directly into another sink rather than copying it
    /// into an intermediate buffer first.
    pub async fn reader(&self) -> Result<DtpReader<'_>, DtpError> {
        let mut guard = self.state.lock().await;
        Self::resolve(&mut guard).await?;
        Ok(DtpReader { guard })
    }

    /// Closes the data connection. Returns [`DtpError::NilConn`] if the
    /// endpoint was never accepted, matching the original behavior.
    pub async fn close(&self) -> Result<(), DtpError> {
        let mut guard = self.state.lock().await;
        if matches!(&*guard, State::Closed) {
            return Err(DtpError::NilConn);
        }
        let stream = Self::resolve(&mut guard).await?;
        use tokio::io::AsyncWriteExt;
        let _ = stream.shutdown().await;
        *guard = State::Closed;
        Ok(())
    }
}

/// A held lock over an already-resolved data connection, readable directly.
/// Returned by [`DtpEndpoint::reader`].
pub struct DtpReader<'a> {
    guard: MutexGuard<'a, State>,
}

impl AsyncRead for DtpReader<'_> {
    fn poll_read(mut self: Pin<&mut Self>, cx: &mut Context<'_>, buf: &mut ReadBuf<'_>) -> Poll<std::io::Result<()>> {
        match &mut *self.guard {
            State::Connected(stream) => Pin::new(stream).poll_read(cx, buf),
            _ => Poll::Ready(Err(std::io::Error::other("data connection not established"))),
        }
    }
}
