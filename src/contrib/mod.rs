//! Pure combinators over a [`crate::Bundle`].
//!
//! Each one consumes a bundle and returns a new one, so they chain:
//!
//! ```
//! use folio::{bundle, Definition, Permission};
//!
//! let b = bundle(&Permission::os(), [
//!     Definition::create("posts/hello.md"),
//!     Definition::create("style.css"),
//! ])
//! .with_extension("md")
//! .rename_extension("md", "html")
//! .permalink("index");
//!
//! assert_eq!(b.paths(), vec!["posts/hello/index.html"]);
//! ```
//!
//! None of them do I/O, and none of them look at the bundle's permission or
//! reading directory. None of them can fail either: a rename that matches
//! nothing simply does nothing.
//!
//! They're grouped by what they touch:
//!
//!  - filter: exclude, with_base_name, with_directory, with_extension,
//!    with_metadata, matching
//!  - rename: rename, rename_extension, permalink, enclose
//!  - clone: clone_path
//!  - metadata: clear_metadata, insert_metadata, replace_metadata,
//!    copy_props_to_metadata
//!  - content: set_content, render_content

pub mod clone;
pub mod content;
pub mod filter;
pub mod metadata;
pub mod rename;
