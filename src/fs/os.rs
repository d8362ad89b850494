//! The real filesystem, via `tokio::fs`.

use super::{EntityKind, Entry, Filesystem};
use async_trait::async_trait;
use std::io::{Error, ErrorKind, Result};
use std::path::Path;

#[derive(Copy, Clone, Debug, Default)]
pub struct OsFilesystem;

#[async_trait]
impl Filesystem for OsFilesystem {
    async fn list_directory(&self, path: &Path) -> Result<Vec<Entry>> {
        let mut read_dir = tokio::fs::read_dir(path).await?;
        let mut entries = vec![];
        while let Some(dir) = read_dir.next_entry().await? {
            let name = dir.file_name().into_string().map_err(|name| {
                Error::new(
                    ErrorKind::InvalidData,
                    format!("File name is not valid UTF-8: {:?}", name),
                )
            })?;

            // Does not follow symlinks, so those come back as Other.
            let file_type = dir.file_type().await?;
            let kind = if file_type.is_dir() {
                EntityKind::Directory
            } else if file_type.is_file() {
                EntityKind::File
            } else {
                EntityKind::Other
            };
            entries.push(Entry::new(name, kind));
        }
        Ok(entries)
    }

    async fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        tokio::fs::read(path).await
    }

    async fn write_file(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        tokio::fs::write(path, bytes).await
    }

    async fn create_directory_all(&self, path: &Path) -> Result<()> {
        tokio::fs::create_dir_all(path).await
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn list_directory() -> Result<()> {
        let dir = tempfile::tempdir()?;
        std::fs::create_dir(dir.path().join("sub"))?;
        std::fs::write(dir.path().join("file.txt"), "contents")?;

        let mut entries = OsFilesystem.list_directory(dir.path()).await?;
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        assert_eq!(
            entries,
            vec![
                Entry::new("file.txt", EntityKind::File),
                Entry::new("sub", EntityKind::Directory),
            ]
        );
        Ok(())
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn symlinks_are_other() -> Result<()> {
        let dir = tempfile::tempdir()?;
        std::fs::write(dir.path().join("real.txt"), "contents")?;
        std::os::unix::fs::symlink(dir.path().join("real.txt"), dir.path().join("link.txt"))?;

        let entries = OsFilesystem.list_directory(dir.path()).await?;
        let link = entries.iter().find(|e| e.name == "link.txt");
        assert_eq!(link.map(|e| e.kind), Some(EntityKind::Other));
        Ok(())
    }

    #[tokio::test]
    async fn missing_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let res = OsFilesystem
            .list_directory(&dir.path().join("does/not/exist"))
            .await;
        assert_eq!(res.map_err(|e| e.kind()), Err(ErrorKind::NotFound));
    }

    #[tokio::test]
    async fn write_read_and_create() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let nested = dir.path().join("a/b/c");
        OsFilesystem.create_directory_all(&nested).await?;
        OsFilesystem.create_directory_all(&nested).await?; // Already there: fine

        let file = nested.join("hello.txt");
        OsFilesystem.write_file(&file, b"Some text").await?;
        assert_eq!(OsFilesystem.read_file(&file).await?, b"Some text".to_vec());
        Ok(())
    }
}
