//! A filesystem that lives entirely in memory.
//!
//! Useful for tests and dry runs. Listings are sorted by name, which makes
//! their order deterministic in a way the real OS doesn't promise.
//!
//! ```
//! use folio::fs::MemoryFilesystem;
//!
//! let fs = MemoryFilesystem::new().with_file("/site/index.html", "<h1>Hi</h1>");
//! assert_eq!(fs.file("/site/index.html"), Some(b"<h1>Hi</h1>".to_vec()));
//! assert!(fs.is_dir("/site"));
//! ```

use super::{EntityKind, Entry, Filesystem};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::io::{Error, ErrorKind, Result};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq)]
enum Node {
    Dir,
    File(Vec<u8>),
    Other,
}

/// Clones share state, so a test can hand one clone to a `Permission` and
/// inspect the other afterwards.
#[derive(Clone, Debug)]
pub struct MemoryFilesystem {
    nodes: Arc<Mutex<BTreeMap<PathBuf, Node>>>,
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found(path: &Path) -> Error {
    Error::new(ErrorKind::NotFound, format!("No such entry: {}", path.display()))
}

impl MemoryFilesystem {
    /// An empty filesystem containing only `/`.
    pub fn new() -> Self {
        let mut nodes = BTreeMap::new();
        nodes.insert(PathBuf::from("/"), Node::Dir);
        Self {
            nodes: Arc::new(Mutex::new(nodes)),
        }
    }

    /// Add a file, creating any missing parent directories.
    pub fn with_file(self, path: impl AsRef<Path>, contents: impl Into<Vec<u8>>) -> Self {
        let path = path.as_ref();
        {
            let mut nodes = self.nodes.lock();
            if let Some(parent) = path.parent() {
                insert_dirs(&mut nodes, parent);
            }
            nodes.insert(path.to_path_buf(), Node::File(contents.into()));
        }
        self
    }

    /// Add an entry that is neither a file nor a directory, like a symlink.
    pub fn with_other(self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        {
            let mut nodes = self.nodes.lock();
            if let Some(parent) = path.parent() {
                insert_dirs(&mut nodes, parent);
            }
            nodes.insert(path.to_path_buf(), Node::Other);
        }
        self
    }

    pub fn file(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        match self.nodes.lock().get(path.as_ref()) {
            Some(Node::File(bytes)) => Some(bytes.clone()),
            _ => None,
        }
    }

    pub fn is_dir(&self, path: impl AsRef<Path>) -> bool {
        matches!(self.nodes.lock().get(path.as_ref()), Some(Node::Dir))
    }

    /// Every file path, sorted.
    pub fn files(&self) -> Vec<PathBuf> {
        self.nodes
            .lock()
            .iter()
            .filter(|(_, node)| matches!(node, Node::File(_)))
            .map(|(path, _)| path.clone())
            .collect()
    }
}

fn insert_dirs(nodes: &mut BTreeMap<PathBuf, Node>, path: &Path) {
    for ancestor in path.ancestors() {
        if ancestor.as_os_str().is_empty() {
            continue;
        }
        nodes.entry(ancestor.to_path_buf()).or_insert(Node::Dir);
    }
}

#[async_trait]
impl Filesystem for MemoryFilesystem {
    async fn list_directory(&self, path: &Path) -> Result<Vec<Entry>> {
        let nodes = self.nodes.lock();
        match nodes.get(path) {
            Some(Node::Dir) => (),
            Some(_) => {
                return Err(Error::other(format!(
                    "Not a directory: {}",
                    path.display()
                )))
            }
            None => return Err(not_found(path)),
        }

        let entries = nodes
            .iter()
            .filter(|(p, _)| p.parent() == Some(path))
            .filter_map(|(p, node)| {
                let name = p.file_name()?.to_str()?;
                let kind = match node {
                    Node::Dir => EntityKind::Directory,
                    Node::File(_) => EntityKind::File,
                    Node::Other => EntityKind::Other,
                };
                Some(Entry::new(name, kind))
            })
            .collect();
        Ok(entries)
    }

    async fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        self.file(path).ok_or_else(|| not_found(path))
    }

    async fn write_file(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        let mut nodes = self.nodes.lock();
        let parent = path.parent().ok_or_else(|| not_found(path))?;
        if nodes.get(parent) != Some(&Node::Dir) {
            return Err(not_found(parent));
        }
        if nodes.get(path) == Some(&Node::Dir) {
            return Err(Error::other(format!(
                "Is a directory: {}",
                path.display()
            )));
        }
        nodes.insert(path.to_path_buf(), Node::File(bytes.to_vec()));
        Ok(())
    }

    async fn create_directory_all(&self, path: &Path) -> Result<()> {
        let mut nodes = self.nodes.lock();
        for ancestor in path.ancestors() {
            match nodes.get(ancestor) {
                Some(Node::File(_)) | Some(Node::Other) => {
                    return Err(Error::new(
                        ErrorKind::AlreadyExists,
                        format!("Not a directory: {}", ancestor.display()),
                    ))
                }
                _ => (),
            }
        }
        insert_dirs(&mut nodes, path);
        Ok(())
    }
}
