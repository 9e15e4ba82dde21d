// src/io/files.rs

//! Whole-file reads and writes. A file is opened, fully read or written, and closed.

use crate::io::error::{DiagramIoError, IoResult};
use bevy::log::info;
use std::fs;
use std::path::Path;

pub fn read_text(path: &Path) -> IoResult<String> {
    fs::read_to_string(path).map_err(|source| DiagramIoError::Io {
        action: "read",
        path: path.to_path_buf(),
        source,
    })
}

pub fn write_text(path: &Path, content: &str) -> IoResult<()> {
    fs::write(path, content).map_err(|source| DiagramIoError::Io {
        action: "write",
        path: path.to_path_buf(),
        source,
    })?;
    info!("Wrote '{}' ({} bytes)", path.display(), content.len());
    Ok(())
}

pub fn create_dir_all(path: &Path) -> IoResult<()> {
    fs::create_dir_all(path).map_err(|source| DiagramIoError::Io {
        action: "create directory",
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_reports_path() {
        let path = Path::new("/nonexistent/trisite/diagram.txt");
        let err = read_text(path).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Failed to read"));
        assert!(message.contains("/nonexistent/trisite/diagram.txt"));
    }

    #[test]
    fn test_write_then_read() {
        let dir = std::env::temp_dir().join(format!("trisite_files_{}", std::process::id()));
        create_dir_all(&dir).unwrap();
        let path = dir.join("record.txt");
        write_text(&path, "P 1 2\n").unwrap();
        assert_eq!(read_text(&path).unwrap(), "P 1 2\n");
        fs::remove_dir_all(&dir).unwrap();
    }
}
