//! Service-tag handshake.
//!
//! A 3-byte tag, NUL-padded to 4 on the wire, exchanged exactly once per
//! connection before any frame. Raw fixed-size reads and writes, never
//! length-prefixed. Matching tags confirm both peers implement the same
//! service; a mismatch ends the connection with no further I/O.

use std::fmt;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::{ProtocolError, TAG_WIRE_SIZE};

/// Which service a peer implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceTag {
    Encrypt,
    Decrypt,
}

impl ServiceTag {
    /// Wire form: 3 ASCII chars + NUL.
    pub const fn wire(self) -> [u8; TAG_WIRE_SIZE] {
        match self {
            ServiceTag::Encrypt => *b"enc\0",
            ServiceTag::Decrypt => *b"dec\0",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ServiceTag::Encrypt => "enc",
            ServiceTag::Decrypt => "dec",
        }
    }
}

impl fmt::Display for ServiceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Server side: read the peer's tag, answer with ours unconditionally,
/// then compare. The unconditional reply lets the client run the same
/// comparison independently.
pub async fn server_handshake<S>(stream: &mut S, ours: ServiceTag) -> Result<(), ProtocolError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let mut theirs = [0u8; TAG_WIRE_SIZE];
    stream.read_exact(&mut theirs).await?;
    stream.write_all(&ours.wire()).await?;
    stream.flush().await?;
    check(ours, theirs)
}

/// Client side: send our tag first, then read and compare the peer's.
pub async fn client_handshake<S>(stream: &mut S, ours: ServiceTag) -> Result<(), ProtocolError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    stream.write_all(&ours.wire()).await?;
    stream.flush().await?;
    let mut theirs = [0u8; TAG_WIRE_SIZE];
    stream.read_exact(&mut theirs).await?;
    check(ours, theirs)
}

fn check(ours: ServiceTag, theirs: [u8; TAG_WIRE_SIZE]) -> Result<(), ProtocolError> {
    if theirs == ours.wire() {
        return Ok(());
    }

    let printable: Vec<u8> = theirs.iter().copied().take_while(|&b| b != 0).collect();
    Err(ProtocolError::TagMismatch {
        ours,
        theirs: String::from_utf8_lossy(&printable).into_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_matching_tags_proceed() {
        let (mut client, mut server) = tokio::io::duplex(64);

        let server_side =
            tokio::spawn(async move { server_handshake(&mut server, ServiceTag::Encrypt).await });

        client_handshake(&mut client, ServiceTag::Encrypt)
            .await
            .unwrap();
        server_side.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn test_mismatched_tags_fail_both_sides() {
        let (mut client, mut server) = tokio::io::duplex(64);

        let server_side =
            tokio::spawn(async move { server_handshake(&mut server, ServiceTag::Encrypt).await });

        let client_err = client_handshake(&mut client, ServiceTag::Decrypt)
            .await
            .unwrap_err();
        let server_err = server_side.await.unwrap().unwrap_err();

        match client_err {
            ProtocolError::TagMismatch { ours, theirs } => {
                assert_eq!(ours, ServiceTag::Decrypt);
                assert_eq!(theirs, "enc");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(server_err.exit_code(), crate::EXIT_TAG_MISMATCH);
    }

    #[test]
    fn test_wire_form_is_nul_padded() {
        assert_eq!(&ServiceTag::Encrypt.wire(), b"enc\0");
        assert_eq!(&ServiceTag::Decrypt.wire(), b"dec\0");
    }
}
