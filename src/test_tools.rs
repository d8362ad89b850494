use crate::bundle::{bundle, Bundle};
use crate::definition::{Definition, Metadata};
use crate::fs::{MemoryFilesystem, Permission};
use std::io::Result;
use std::path::Path;
use tempfile::TempDir;

/// A synthetic bundle of empty definitions at the given paths.
pub fn bundle_of(paths: &[&str]) -> Bundle {
    let permission = Permission::memory(MemoryFilesystem::new());
    bundle(&permission, paths.iter().map(|p| Definition::create(*p)))
}

/// Metadata from a `json!` object literal.
pub fn meta(value: serde_json::Value) -> Metadata {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("Expected a JSON object, got {}", other),
    }
}

/// Lay out files on real disk, creating parent directories as needed.
pub fn disk_tree(files: &[(&str, &str)]) -> Result<TempDir> {
    let dir = tempfile::tempdir()?;
    for (path, contents) in files {
        let path = dir.path().join(path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, contents)?;
    }
    Ok(dir)
}

/// Same layout as `disk_tree`, but in memory under `root`.
pub fn memory_tree(root: impl AsRef<Path>, files: &[(&str, &str)]) -> MemoryFilesystem {
    files
        .iter()
        .fold(MemoryFilesystem::new(), |fs, (path, contents)| {
            fs.with_file(root.as_ref().join(path), *contents)
        })
}

/// Paths in a bundle, sorted, for comparing against unordered OS listings.
pub fn sorted_paths(b: &Bundle) -> Vec<String> {
    let mut paths: Vec<String> = b.paths().into_iter().map(String::from).collect();
    paths.sort();
    paths
}
