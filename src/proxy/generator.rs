use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

use crate::errors::{AppError, AppResult};
use crate::ingestor::m3u_parser::EXTM3U_MARKER;
use crate::models::OutputEntry;

/// Render entries as playlist text: the start marker, then header and address per entry
///
/// Lines are joined with `\n`; an empty address still takes its own line.
pub fn render_playlist(entries: &[OutputEntry]) -> String {
    let capacity = EXTM3U_MARKER.len()
        + entries
            .iter()
            .map(|entry| entry.header.len() + entry.address.len() + 2)
            .sum::<usize>();

    let mut m3u = String::with_capacity(capacity);
    m3u.push_str(EXTM3U_MARKER);
    for entry in entries {
        m3u.push('\n');
        m3u.push_str(&entry.header);
        m3u.push('\n');
        m3u.push_str(&entry.address);
    }
    m3u
}

/// Write the rendered playlist to `path`, creating missing parent directories
pub fn write_playlist(path: &Path, entries: &[OutputEntry]) -> AppResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            debug!("Creating output directory {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| AppError::io(parent, e))?;
        }
    }

    let content = render_playlist(entries);
    std::fs::write(path, &content).map_err(|e| AppError::io(path, e))?;
    info!(
        "Wrote {} entries ({} bytes) to {}",
        entries.len(),
        content.len(),
        path.display()
    );
    Ok(())
}

/// Write the rendered playlist to any writer, e.g. stdout
pub fn write_playlist_to<W: Write>(writer: &mut W, entries: &[OutputEntry]) -> AppResult<()> {
    let content = render_playlist(entries);
    writer
        .write_all(content.as_bytes())
        .and_then(|_| writer.write_all(b"\n"))
        .and_then(|_| writer.flush())
        .map_err(|e| AppError::io("<stdout>", e))
}
