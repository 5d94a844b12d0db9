// Chunk: docs/chunks/file_save - Document read and write

//! File system collaborator for document content.

use std::fs;
use std::io;
use std::path::Path;

/// Reads and writes document content.
pub trait FileStore {
    fn exists(&self, path: &Path) -> bool;

    /// Reads the whole file as text.
    fn read(&self, path: &Path) -> io::Result<String>;

    /// Overwrites the file with `content`.
    fn write(&self, path: &Path, content: &str) -> io::Result<()>;
}

/// [`FileStore`] backed by `std::fs`.
///
/// Reading is UTF-8 lossy; writing is a plain overwrite with no backup.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsFileStore;

impl FileStore for FsFileStore {
    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read(&self, path: &Path) -> io::Result<String> {
        let bytes = fs::read(path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        fs::write(path, content.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_then_read_verbatim() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("note.txt");
        let store = FsFileStore;

        store.write(&path, "line one\r\nline two\r\n").unwrap();
        assert!(store.exists(&path));
        assert_eq!(store.read(&path).unwrap(), "line one\r\nline two\r\n");
    }

    #[test]
    fn test_read_invalid_utf8_is_lossy() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bin.txt");
        fs::write(&path, [b'a', 0xff, b'b']).unwrap();

        assert_eq!(FsFileStore.read(&path).unwrap(), "a\u{fffd}b");
    }

    #[test]
    fn test_directory_does_not_exist_as_file() {
        let temp = TempDir::new().unwrap();
        assert!(!FsFileStore.exists(temp.path()));
    }
}
