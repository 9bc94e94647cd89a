//! Pad-file reading and validation.
//!
//! Text and key files are alphabet-only with an optional trailing newline.
//! Validation happens here, before any socket is opened; the error names
//! the path, the offending byte, and its code.

use std::path::Path;

use onepad_protocol::alphabet;

use crate::ClientError;

/// Read a text or key file: strip one trailing newline, require every
/// remaining byte to be in the alphabet.
pub fn read_pad_file(path: &Path) -> Result<Vec<u8>, ClientError> {
    let mut data = std::fs::read(path).map_err(|source| ClientError::FileRead {
        path: path.display().to_string(),
        source,
    })?;

    if data.last() == Some(&b'\n') {
        data.pop();
    }

    match alphabet::validate(&data) {
        Ok(()) => Ok(data),
        Err(source) => Err(ClientError::InvalidContent {
            path: path.display().to_string(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(content: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_strips_one_trailing_newline() {
        let file = write_temp(b"HELLO WORLD\n");
        assert_eq!(read_pad_file(file.path()).unwrap(), b"HELLO WORLD");
    }

    #[test]
    fn test_accepts_file_without_newline() {
        let file = write_temp(b"HELLO");
        assert_eq!(read_pad_file(file.path()).unwrap(), b"HELLO");
    }

    #[test]
    fn test_rejects_non_alphabet_byte_with_code() {
        let file = write_temp(b"HEL,O\n");
        let err = read_pad_file(file.path()).unwrap_err();
        let message = err.to_string();
        assert!(message.contains(&file.path().display().to_string()));
        assert!(message.contains("','"));
        assert!(message.contains("44"));
    }

    #[test]
    fn test_interior_newline_is_invalid() {
        let file = write_temp(b"HEL\nLO\n");
        assert!(read_pad_file(file.path()).is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = read_pad_file(Path::new("/nonexistent/pad.txt")).unwrap_err();
        assert!(matches!(err, ClientError::FileRead { .. }));
    }
}
