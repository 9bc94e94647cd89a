//! One-shot request against a running service.

use onepad_protocol::framing::FrameStream;
use onepad_protocol::{tag, ProtocolError, ServiceTag};
use tokio::net::TcpStream;

use crate::ClientError;

/// Connect, handshake, send text and key, return the transformed result.
///
/// The key-coverage check runs before any network I/O. The connection
/// carries exactly one exchange and closes on return; there is no retry.
pub async fn request(
    host: &str,
    port: u16,
    service: ServiceTag,
    text: &[u8],
    key: &[u8],
) -> Result<Vec<u8>, ClientError> {
    if key.len() < text.len() {
        return Err(ProtocolError::KeyTooShort {
            text: text.len(),
            key: key.len(),
        }
        .into());
    }

    let addr = format!("{host}:{port}");
    let mut socket = TcpStream::connect(&addr)
        .await
        .map_err(|source| ClientError::Connect {
            addr: addr.clone(),
            source,
        })?;
    tracing::debug!(%addr, tag = %service, "connected");

    tag::client_handshake(&mut socket, service).await?;

    let mut framed = FrameStream::new(&mut socket);
    framed.send(text).await?;
    framed.send(key).await?;
    let result = framed.recv().await?;

    Ok(result.to_vec())
}
