//! File handles the document session reads from and writes to

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// A location in a file store that a document can be loaded from or saved to
///
/// Each call opens and closes its own stream, so no handle outlives the
/// operation that needed it.
pub trait FileReference {
    /// Read the whole file
    fn read(&self) -> io::Result<Vec<u8>>;

    /// Replace the file contents with `data`
    fn write(&self, data: &[u8]) -> io::Result<()>;

    /// Short name for titles and notifications
    fn display_name(&self) -> String;

    /// Full location of the file
    fn path(&self) -> &Path;
}

/// A file on the local filesystem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalFile {
    path: PathBuf,
}

impl LocalFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl From<PathBuf> for LocalFile {
    fn from(path: PathBuf) -> Self {
        Self::new(path)
    }
}

impl FileReference for LocalFile {
    fn read(&self) -> io::Result<Vec<u8>> {
        fs::read(&self.path)
    }

    fn write(&self, data: &[u8]) -> io::Result<()> {
        let mut file = fs::File::create(&self.path)?;
        file.write_all(data)?;
        file.flush()
    }

    fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.to_string_lossy().to_string())
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
pub(crate) mod memory {
    //! In-memory file store for exercising the session without touching disk

    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::io;
    use std::path::{Path, PathBuf};
    use std::rc::Rc;

    use super::FileReference;

    #[derive(Debug, Default)]
    struct Inner {
        files: HashMap<PathBuf, Vec<u8>>,
        writes: usize,
    }

    /// Shared backing store for `MemoryFile` handles
    #[derive(Debug, Clone, Default)]
    pub struct MemoryStore {
        inner: Rc<RefCell<Inner>>,
    }

    impl MemoryStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn file(&self, path: &str) -> MemoryFile {
            MemoryFile {
                path: PathBuf::from(path),
                store: self.clone(),
                fail_reads: false,
                fail_writes: false,
            }
        }

        pub fn insert(&self, path: &str, data: impl Into<Vec<u8>>) {
            self.inner
                .borrow_mut()
                .files
                .insert(PathBuf::from(path), data.into());
        }

        pub fn contents(&self, path: &str) -> Option<Vec<u8>> {
            self.inner.borrow().files.get(Path::new(path)).cloned()
        }

        pub fn writes(&self) -> usize {
            self.inner.borrow().writes
        }
    }

    /// Handle into a `MemoryStore`, optionally failing every read or write
    #[derive(Debug, Clone)]
    pub struct MemoryFile {
        path: PathBuf,
        store: MemoryStore,
        fail_reads: bool,
        fail_writes: bool,
    }

    impl MemoryFile {
        pub fn failing_reads(mut self) -> Self {
            self.fail_reads = true;
            self
        }

        pub fn failing_writes(mut self) -> Self {
            self.fail_writes = true;
            self
        }
    }

    impl PartialEq for MemoryFile {
        fn eq(&self, other: &Self) -> bool {
            self.path == other.path
        }
    }

    impl FileReference for MemoryFile {
        fn read(&self) -> io::Result<Vec<u8>> {
            if self.fail_reads {
                return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read denied"));
            }
            self.store
                .inner
                .borrow()
                .files
                .get(&self.path)
                .cloned()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such file"))
        }

        fn write(&self, data: &[u8]) -> io::Result<()> {
            if self.fail_writes {
                return Err(io::Error::new(io::ErrorKind::PermissionDenied, "write denied"));
            }
            let mut inner = self.store.inner.borrow_mut();
            inner.files.insert(self.path.clone(), data.to_vec());
            inner.writes += 1;
            Ok(())
        }

        fn display_name(&self) -> String {
            self.path
                .file_name()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_default()
        }

        fn path(&self) -> &Path {
            &self.path
        }
    }
}
