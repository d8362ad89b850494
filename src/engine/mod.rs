//! Moving definitions between a filesystem and memory.
//!
//! ```no_run
//! use folio::{list, read, write, Permission};
//!
//! # async fn demo() -> folio::Result<()> {
//! let permission = Permission::os();
//! let site = list(&permission, "/home/me/site").await?;
//! let site = read(site).await?.rename_extension("md", "html");
//! write("/home/me/public", site).await?;
//! # Ok(())
//! # }
//! ```
//!
//! Reads and writes go out as one batch, so the filesystem is free to do them
//! concurrently, but results are always put back in compendium order. The
//! first failure ends the batch, and no partial bundle comes back.

pub mod list;
pub mod read;
pub mod write;

pub use list::list;
pub use read::read;
pub use write::write;
