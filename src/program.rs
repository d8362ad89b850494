//! Running programs: a root to list, and what to do with the result.

use crate::bundle::Bundle;
use crate::debug::describe;
use crate::engine::list;
use crate::error::{Error, Result};
use crate::fs::Permission;
use crate::logger::Logger;
use crate::op::Op;
use futures::future::{BoxFuture, FutureExt};
use std::future::Future;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

pub type Transform = Box<dyn FnOnce(Bundle) -> BoxFuture<'static, Result<Bundle>> + Send>;

pub struct Program {
    pub root: PathBuf,
    pub transform: Transform,
}

impl Program {
    pub fn new<F, Fut>(root: impl Into<PathBuf>, transform: F) -> Self
    where
        F: FnOnce(Bundle) -> Fut + Send + 'static,
        Fut: Future<Output = Result<Bundle>> + Send + 'static,
    {
        Self {
            root: root.into(),
            transform: Box::new(move |bundle| transform(bundle).boxed()),
        }
    }

    /// A program applying ops one after another.
    pub fn from_ops(root: impl Into<PathBuf>, ops: Vec<Op>) -> Self {
        Self::new(root, move |bundle| async move {
            let mut bundle = bundle;
            for op in ops {
                bundle = op.apply(bundle).await?;
            }
            Ok(bundle)
        })
    }

    /// List the root, then transform.
    pub async fn execute(self, permission: &Permission) -> Result<Bundle> {
        let bundle = list(permission, &self.root).await?;
        (self.transform)(bundle).await
    }
}

impl std::fmt::Debug for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Program")
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

/// Run programs in order, one at a time.
///
/// Stops at the first failure, which is reported through the logger and
/// returned. Later programs never start.
pub async fn run(
    permission: &Permission,
    programs: impl IntoIterator<Item = Program>,
    log: &mut Logger,
) -> Result<()> {
    for program in programs {
        let root = program.root.display().to_string();
        writeln!(log.opheader(), "--- {} ---", root).map_err(log_error)?;
        info!(root = %root, "running program");

        match program.execute(permission).await {
            Ok(bundle) => write!(log.summary(), "{}", describe(&bundle)).map_err(log_error)?,
            Err(e) => {
                writeln!(log.failure(), "Failed: {}", e).map_err(log_error)?;
                return Err(e);
            }
        }
    }
    Ok(())
}

fn log_error(e: std::io::Error) -> Error {
    Error::message(format!("Could not write to log: {}", e))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::engine::{read, write};
    use crate::fs::MemoryFilesystem;
    use crate::test_tools::*;
    use indoc::indoc;
    use std::path::PathBuf;

    #[tokio::test]
    async fn list_rename_write() -> Result<()> {
        let fs = MemoryFilesystem::new()
            .with_file("/a/b/example.html", "")
            .with_file("/a/.hidden", "secret");
        let permission = Permission::memory(fs.clone());

        let listed = list(&permission, "/a").await?;
        assert_eq!(listed.paths(), vec!["b/example.html"]);

        let renamed = listed.rename("b/example.html", "example/index.html");
        assert_eq!(renamed.paths(), vec!["example/index.html"]);

        write("/D", renamed).await?;
        let written: Vec<_> = fs
            .files()
            .into_iter()
            .filter(|p| p.starts_with("/D"))
            .collect();
        assert_eq!(written, vec![PathBuf::from("/D/example/index.html")]);
        Ok(())
    }

    #[tokio::test]
    async fn run_reports() -> Result<()> {
        let fs = memory_tree("/site", &[("post.md", "# Hi"), ("about.md", "")]);
        let permission = Permission::memory(fs.clone());
        let mut log = Logger::new_vec();

        let programs = vec![Program::from_ops(
            "/site",
            vec![
                Op::Read,
                Op::RenameExtension("md".into(), "html".into()),
                Op::Permalink("index".into()),
                Op::Write("/public".into()),
            ],
        )];
        run(&permission, programs, &mut log).await?;

        assert_eq!(
            log.recorded(),
            (
                indoc! {"
                --- /site ---
                FILE about/index.html
                  Length: 0
                FILE post/index.html
                  Length: 4
                "}
                .to_owned(),
                "".to_owned()
            )
        );
        assert_eq!(fs.file("/public/post/index.html"), Some(b"# Hi".to_vec()));
        Ok(())
    }

    #[tokio::test]
    async fn run_stops_at_first_failure() {
        let fs = memory_tree("/one", &[("a.txt", "A")]).with_file("/three/c.txt", "C");
        let permission = Permission::memory(fs.clone());
        let mut log = Logger::new_vec();
        log.pol.summary = crate::logger::Policy::Silent;

        let programs = vec![
            Program::from_ops("/one", vec![]),
            Program::from_ops("/two", vec![]),
            Program::from_ops("/three", vec![Op::Write("/out".into())]),
        ];
        let result = run(&permission, programs, &mut log).await;

        match result {
            Err(Error::Platform { path, .. }) => assert_eq!(path, PathBuf::from("/two")),
            other => panic!("Expected a platform error, got {:?}", other),
        }
        let (stdout, stderr) = log.recorded();
        assert_eq!(stdout, "--- /one ---\n--- /two ---\n");
        assert!(stderr.starts_with("Failed: /two: "), "Got: {:?}", stderr);
        assert_eq!(fs.file("/out/c.txt"), None);
    }

    #[tokio::test]
    async fn custom_transform() -> Result<()> {
        let fs = memory_tree("/in", &[("a.txt", "A"), ("b.txt", "B")]);
        let permission = Permission::memory(fs);
        let program = Program::new("/in", |b| async move {
            let b = read(b).await?;
            Ok(b.exclude("a.txt").insert_metadata(&meta(serde_json::json!({ "seen": true }))))
        });
        let b = program.execute(&permission).await?;
        assert_eq!(b.paths(), vec!["b.txt"]);
        assert_eq!(b.compendium[0].metadata, meta(serde_json::json!({ "seen": true })));
        Ok(())
    }
}
