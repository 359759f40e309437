use crate::diff::Side;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("I/O error reading {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{0:?} is not valid UTF-8 text")]
    NotUtf8(PathBuf),
}

/// A text file read into one of the two buffers
#[derive(Debug)]
pub struct FileData {
    pub side: Side,
    pub path: PathBuf,
    pub content: String,
}

/// Read `path` as UTF-8 text
pub fn load_text(path: &Path) -> Result<String, LoadError> {
    let bytes = fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let content = String::from_utf8(bytes).map_err(|_| LoadError::NotUtf8(path.to_path_buf()))?;
    info!("Loaded {} chars from {:?}", content.chars().count(), path);
    Ok(content)
}

/// Read `path` for the buffer of `side`
pub fn load_into(side: Side, path: PathBuf) -> Result<FileData, LoadError> {
    let content = load_text(&path)?;
    Ok(FileData {
        side,
        path,
        content,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn setup_test_dir() -> PathBuf {
        let test_dir = std::env::temp_dir().join(format!("test_load_{}", Uuid::new_v4()));
        fs::create_dir_all(&test_dir).unwrap();
        test_dir
    }

    fn cleanup_test_dir(test_dir: &Path) {
        let _ = fs::remove_dir_all(test_dir);
    }

    #[test]
    fn test_load_text() {
        let test_dir = setup_test_dir();
        let path = test_dir.join("a.txt");
        fs::write(&path, "first\nsecond\n").unwrap();

        let data = load_into(Side::A, path.clone()).unwrap();
        assert_eq!(data.side, Side::A);
        assert_eq!(data.path, path);
        assert_eq!(data.content, "first\nsecond\n");

        cleanup_test_dir(&test_dir);
    }

    #[test]
    fn test_missing_file() {
        let test_dir = setup_test_dir();
        let result = load_text(&test_dir.join("missing.txt"));
        assert!(matches!(result, Err(LoadError::Io { .. })));

        cleanup_test_dir(&test_dir);
    }

    #[test]
    fn test_binary_file() {
        let test_dir = setup_test_dir();
        let path = test_dir.join("blob.bin");
        fs::write(&path, [0xff, 0xfe, 0x00, 0x80]).unwrap();

        let result = load_text(&path);
        assert!(matches!(result, Err(LoadError::NotUtf8(_))));

        cleanup_test_dir(&test_dir);
    }
}
