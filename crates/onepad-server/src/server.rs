//! TCP listener and per-connection protocol state machine.
//!
//! The listener stays single-threaded and spawns one task per accepted
//! connection. Each task owns its socket exclusively and runs
//! handshake -> text -> key -> transform -> result, then closes. A task
//! failure is logged and never touches the listener or other tasks.

use std::io;
use std::net::SocketAddr;
use std::time::Duration;

use onepad_protocol::framing::FrameStream;
use onepad_protocol::{cipher, tag, Direction, ProtocolError, ServiceTag};
use tokio::net::{TcpListener, TcpStream};

use crate::config::ServerConfig;
use crate::ServerError;

/// A bound listener for one service (encrypt or decrypt).
pub struct PadServer {
    listener: TcpListener,
    service: ServiceTag,
    io_timeout: Option<Duration>,
}

impl PadServer {
    /// Bind the listener. A bind failure is fatal to startup.
    pub async fn bind(
        service: ServiceTag,
        config: &ServerConfig,
        port: u16,
    ) -> Result<Self, ServerError> {
        let addr = format!("{}:{}", config.server.bind_host, port);
        let listener = TcpListener::bind(&addr).await?;
        tracing::info!(addr = %listener.local_addr()?, tag = %service, "listening");

        Ok(Self {
            listener,
            service,
            io_timeout: config.io_timeout(),
        })
    }

    /// Local address the listener is bound to (port 0 resolves here).
    pub fn local_addr(&self) -> Result<SocketAddr, ServerError> {
        Ok(self.listener.local_addr()?)
    }

    /// Run the accept loop -- spawns a task per inbound connection.
    ///
    /// An accept failure is logged and the loop continues; only bind
    /// failure stops the service.
    pub async fn serve(self) {
        loop {
            match self.listener.accept().await {
                Ok((socket, remote)) => {
                    let service = self.service;
                    let io_timeout = self.io_timeout;
                    tokio::spawn(async move {
                        tracing::debug!(%remote, "accepted connection");
                        if let Err(e) = handle_connection(socket, service, io_timeout).await {
                            tracing::warn!(%remote, "connection failed: {e}");
                        }
                    });
                }
                Err(e) => {
                    tracing::warn!("accept failed: {e}");
                }
            }
        }
    }
}

/// Run one connection to completion, under the configured deadline if any.
async fn handle_connection(
    mut socket: TcpStream,
    service: ServiceTag,
    io_timeout: Option<Duration>,
) -> Result<(), ProtocolError> {
    match io_timeout {
        Some(limit) => match tokio::time::timeout(limit, run_protocol(&mut socket, service)).await {
            Ok(result) => result,
            Err(_) => Err(ProtocolError::Io(io::Error::new(
                io::ErrorKind::TimedOut,
                "connection deadline exceeded",
            ))),
        },
        None => run_protocol(&mut socket, service).await,
    }
}

/// The per-connection state machine. The socket closes on drop, on every
/// exit path.
async fn run_protocol(socket: &mut TcpStream, service: ServiceTag) -> Result<(), ProtocolError> {
    tag::server_handshake(socket, service).await?;

    let mut framed = FrameStream::new(socket);
    let text = framed.recv().await?;
    let key = framed.recv().await?;

    let direction = match service {
        ServiceTag::Encrypt => Direction::Encrypt,
        ServiceTag::Decrypt => Direction::Decrypt,
    };
    let result = cipher::transform(&text, &key, direction)?;

    framed.send(&result).await?;
    tracing::debug!(len = text.len(), tag = %service, "transform served");
    Ok(())
}
