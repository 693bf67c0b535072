/// Whole-file reads with a typed failure for every cause
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::error::LoadError;

/// Read a whole text file, however large
pub fn read_all(path: impl AsRef<Path>) -> Result<String, LoadError> {
    read_text(path.as_ref(), None)
}

/// Read a whole text file, refusing content longer than `max_len` bytes
pub fn read_bounded(path: impl AsRef<Path>, max_len: usize) -> Result<String, LoadError> {
    read_text(path.as_ref(), Some(max_len))
}

fn read_text(path: &Path, limit: Option<usize>) -> Result<String, LoadError> {
    let bytes = read_bytes(path, limit)?;
    String::from_utf8(bytes).map_err(|e| LoadError::ReadFailure {
        path: path.to_path_buf(),
        source: io::Error::new(io::ErrorKind::InvalidData, e),
    })
}

fn read_bytes(path: &Path, limit: Option<usize>) -> Result<Vec<u8>, LoadError> {
    let mut file = File::open(path).map_err(|source| LoadError::OpenFailure {
        path: path.to_path_buf(),
        source,
    })?;

    // Size hint only; the file may change between stat and read
    let expected = file.metadata().map(|m| m.len()).unwrap_or(0);
    if let Some(max) = limit {
        if expected > max as u64 {
            return Err(LoadError::TruncatedInput {
                path: path.to_path_buf(),
                len: expected,
                max,
            });
        }
    }

    let capacity = usize::try_from(expected)
        .map_err(|_| LoadError::AllocationFailure { requested: usize::MAX })?;
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(capacity)
        .map_err(|_| LoadError::AllocationFailure { requested: capacity })?;

    let read = match limit {
        Some(max) => file.by_ref().take(max as u64 + 1).read_to_end(&mut buffer),
        None => file.read_to_end(&mut buffer),
    };
    read.map_err(|source| LoadError::ReadFailure {
        path: path.to_path_buf(),
        source,
    })?;

    if let Some(max) = limit {
        if buffer.len() > max {
            return Err(LoadError::TruncatedInput {
                path: path.to_path_buf(),
                len: buffer.len() as u64,
                max,
            });
        }
    }

    if buffer.is_empty() {
        return Err(LoadError::EmptyInput {
            path: path.to_path_buf(),
        });
    }

    log::debug!("read {} bytes from {}", buffer.len(), path.display());
    Ok(buffer)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::ops::Deref;
    use std::path::PathBuf;

    /// Temp file removed again when dropped
    pub(crate) struct Fixture(PathBuf);

    impl Deref for Fixture {
        type Target = Path;

        fn deref(&self) -> &Path {
            &self.0
        }
    }

    impl AsRef<Path> for Fixture {
        fn as_ref(&self) -> &Path {
            &self.0
        }
    }

    impl Drop for Fixture {
        fn drop(&mut self) {
            let _ = std::fs::remove_file(&self.0);
        }
    }

    /// Write `contents` to a fresh file under the system temp dir
    pub(crate) fn fixture(name: &str, contents: &[u8]) -> Fixture {
        let path = std::env::temp_dir().join(format!("tiro-{}-{}", std::process::id(), name));
        std::fs::write(&path, contents).unwrap();
        Fixture(path)
    }

    #[test]
    fn test_fixture_is_removed_on_drop() {
        let fixture = fixture("dropped.txt", b"x");
        let path = fixture.to_path_buf();
        assert!(path.exists());
        drop(fixture);
        assert!(!path.exists());
    }

    #[test]
    fn test_read_all() {
        let path = fixture("read_all.txt", b"hello\nworld\n");
        assert_eq!(read_all(&path).unwrap(), "hello\nworld\n");
    }

    #[test]
    fn test_missing_file_is_open_failure() {
        let path = std::env::temp_dir().join("tiro-definitely-not-here.obj");
        assert!(matches!(read_all(&path), Err(LoadError::OpenFailure { .. })));
    }

    #[test]
    fn test_directory_is_read_failure() {
        assert!(matches!(read_all(std::env::temp_dir()), Err(LoadError::ReadFailure { .. })));
    }

    #[test]
    fn test_empty_file() {
        let path = fixture("empty.txt", b"");
        assert!(matches!(read_all(&path), Err(LoadError::EmptyInput { .. })));
        assert!(matches!(read_bounded(&path, 16), Err(LoadError::EmptyInput { .. })));
    }

    #[test]
    fn test_invalid_utf8_is_read_failure() {
        let path = fixture("binary.txt", &[0x76, 0x20, 0xff, 0xfe]);
        assert!(matches!(read_all(&path), Err(LoadError::ReadFailure { .. })));
    }

    #[test]
    fn test_bounded_read_reports_truncation() {
        let path = fixture("bounded.txt", b"0123456789");
        assert_eq!(read_bounded(&path, 10).unwrap(), "0123456789");

        match read_bounded(&path, 4) {
            Err(LoadError::TruncatedInput { len, max, .. }) => {
                assert_eq!(len, 10);
                assert_eq!(max, 4);
            }
            other => panic!("expected truncation, got {:?}", other),
        }
    }
}
