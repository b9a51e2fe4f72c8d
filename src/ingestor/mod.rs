use std::path::Path;
use tracing::info;

use crate::errors::{AppError, AppResult};

pub mod m3u_parser;

pub use m3u_parser::{ParsedPlaylist, parse_playlist};

/// Read a playlist file as text
///
/// Invalid UTF-8 is replaced rather than rejected; only an unreadable file is an error.
pub fn read_playlist<P: AsRef<Path>>(path: P) -> AppResult<String> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| AppError::io(path, e))?;
    info!("Read {} bytes from {}", bytes.len(), path.display());
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_playlist_replaces_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("input.m3u");
        std::fs::write(&path, b"#EXTM3U\n#EXTINF:-1,Caf\xe9\nhttp://x/1\n").unwrap();

        let content = read_playlist(&path).unwrap();
        let parsed = parse_playlist(&content);
        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.records[0].display_name, "Caf\u{fffd}");
    }

    #[test]
    fn test_read_missing_playlist_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_playlist(temp_dir.path().join("absent.m3u")).unwrap_err();
        assert!(matches!(err, AppError::Io { .. }));
    }
}
