//! Ordered, pure transformations over file trees.
//!
//! A [`Bundle`] is a listing of files (a compendium of [`Definition`]s) plus
//! the permission to touch the filesystem they came from. [`list`], [`read`]
//! and [`write`] are the only things that do I/O. Everything in between is a
//! plain `Bundle -> Bundle` combinator from [`contrib`].
//!
//! ```
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> folio::Result<()> {
//! use folio::fs::{MemoryFilesystem, Permission};
//! use folio::{list, read, write};
//!
//! let fs = MemoryFilesystem::new().with_file("/content/about.md", "# About");
//! let permission = Permission::memory(fs.clone());
//!
//! let site = read(list(&permission, "/content").await?)
//!     .await?
//!     .rename_extension("md", "html")
//!     .permalink("index");
//! write("/public", site).await?;
//!
//! assert_eq!(fs.file("/public/about/index.html"), Some(b"# About".to_vec()));
//! # Ok(())
//! # }
//! ```

pub mod bundle;
pub mod cli;
pub mod contrib;
pub mod debug;
pub mod definition;
pub mod doc;
pub mod engine;
pub mod error;
pub mod fs;
pub mod logger;
pub mod op;
pub mod program;

#[cfg(test)]
mod test_tools;

pub use bundle::{bundle, Bundle};
pub use definition::{Definition, Metadata};
pub use engine::{list, read, write};
pub use error::{Error, Result};
pub use fs::Permission;
pub use ipr::IPR;
pub use program::{run, Program};
