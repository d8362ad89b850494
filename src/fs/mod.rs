//! The filesystem capability that every I/O operation goes through.
//!
//! Nothing in folio touches the disk directly. Listing, reading and writing
//! all ask a [`Permission`] for its [`Filesystem`], so a pipeline can run
//! against the real OS or against a [`MemoryFilesystem`] without changing a
//! line of pipeline code.

pub mod memory;
pub mod os;

pub use memory::MemoryFilesystem;
pub use os::OsFilesystem;

use async_trait::async_trait;
use std::fmt;
use std::io::Result;
use std::path::Path;
use std::sync::Arc;

/// What kind of thing a directory entry is.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EntityKind {
    File,
    Directory,
    /// Symlinks, sockets, devices, and so on.
    Other,
}

/// One item from a directory listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub kind: EntityKind,
}

impl Entry {
    pub fn new(name: impl Into<String>, kind: EntityKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }
}

/// The primitives a pipeline needs from a filesystem.
///
/// Directory listings come back in whatever order the implementation
/// produces; folio keeps that order rather than sorting.
#[async_trait]
pub trait Filesystem: Send + Sync {
    async fn list_directory(&self, path: &Path) -> Result<Vec<Entry>>;
    async fn read_file(&self, path: &Path) -> Result<Vec<u8>>;
    async fn write_file(&self, path: &Path, bytes: &[u8]) -> Result<()>;

    /// Create a directory and all of its parents. Succeeds if it exists.
    async fn create_directory_all(&self, path: &Path) -> Result<()>;
}

/// An opaque handle granting access to a filesystem.
///
/// Cloning is cheap, and clones share the same underlying filesystem.
#[derive(Clone)]
pub struct Permission(Arc<dyn Filesystem>);

impl Permission {
    pub fn new(fs: impl Filesystem + 'static) -> Self {
        Self(Arc::new(fs))
    }

    /// Access to the real operating system.
    pub fn os() -> Self {
        Self::new(OsFilesystem)
    }

    pub fn memory(fs: MemoryFilesystem) -> Self {
        Self::new(fs)
    }

    pub(crate) fn filesystem(&self) -> &dyn Filesystem {
        self.0.as_ref()
    }
}

impl fmt::Debug for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Permission(..)")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn hidden_entries() {
        assert!(Entry::new(".hidden", EntityKind::File).is_hidden());
        assert!(Entry::new(".git", EntityKind::Directory).is_hidden());
        assert!(!Entry::new("visible.txt", EntityKind::File).is_hidden());
        assert!(!Entry::new("a.b", EntityKind::File).is_hidden());
    }

    #[tokio::test]
    async fn clones_share_filesystem() -> Result<()> {
        let fs = MemoryFilesystem::new();
        let permission = Permission::memory(fs.clone());
        let copy = permission.clone();
        copy.filesystem()
            .write_file(Path::new("/hello.txt"), b"hi")
            .await?;
        assert_eq!(
            permission
                .filesystem()
                .read_file(Path::new("/hello.txt"))
                .await?,
            b"hi".to_vec()
        );
        assert_eq!(fs.file("/hello.txt"), Some(b"hi".to_vec()));
        Ok(())
    }
}
