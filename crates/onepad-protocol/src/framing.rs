//! Framed send/receive over an established stream.
//!
//! Socket writes are bounded by the chunk window; reads accumulate
//! partial delivery until the codec yields a complete frame. Bytes read
//! past a frame boundary are kept for the next receive, so back-to-back
//! frames (text then key) survive arbitrary segmentation.

use bytes::{Bytes, BytesMut};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio_util::codec::{Decoder, Encoder};

use crate::codec::FrameCodec;
use crate::{ProtocolError, CHUNK_SIZE};

/// Framed view over a connected stream.
///
/// Owns the read buffer for the connection's lifetime; one `FrameStream`
/// per connection, used after the raw tag exchange.
pub struct FrameStream<S> {
    stream: S,
    codec: FrameCodec,
    readbuf: BytesMut,
}

impl<S> FrameStream<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S) -> Self {
        Self {
            stream,
            codec: FrameCodec,
            readbuf: BytesMut::with_capacity(CHUNK_SIZE),
        }
    }

    /// Write one length-prefixed frame, chunk by chunk.
    ///
    /// A short write is not a protocol error; `write_all` keeps going
    /// until the chunk is down or the transport fails.
    pub async fn send(&mut self, payload: &[u8]) -> Result<(), ProtocolError> {
        let mut buf = BytesMut::new();
        self.codec.encode(payload, &mut buf)?;

        for chunk in buf.chunks(CHUNK_SIZE) {
            self.stream.write_all(chunk).await?;
        }
        self.stream.flush().await?;
        Ok(())
    }

    /// Read one length-prefixed frame.
    ///
    /// A clean close before the frame completes (prefix included) is a
    /// truncated-frame error, never an empty result.
    pub async fn recv(&mut self) -> Result<Bytes, ProtocolError> {
        loop {
            if let Some(frame) = self.codec.decode(&mut self.readbuf)? {
                tracing::trace!(len = frame.len(), "frame received");
                return Ok(frame);
            }

            let mut window = [0u8; CHUNK_SIZE - 1];
            let n = self.stream.read(&mut window).await?;
            if n == 0 {
                return Err(ProtocolError::TruncatedFrame {
                    got: self.readbuf.len(),
                });
            }
            self.readbuf.extend_from_slice(&window[..n]);
        }
    }
}
