//! One entry in a file tree.
//!
//! ```
//! use folio::Definition;
//!
//! let def = Definition::create("posts/hello.md");
//! assert_eq!(def.content, None);
//! assert!(def.metadata.is_empty());
//!
//! let copy = def.fork("posts/hello/index.md");
//! assert_eq!(copy.path, "posts/hello/index.md");
//! assert_eq!(def.path, "posts/hello.md");
//! ```

use ipr::IPR;
use serde::{Deserialize, Serialize};

/// Arbitrary JSON data attached to a definition.
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// A file: where it lives, what's in it, and what we know about it.
///
/// `content` is `None` until something reads or sets it. Writing a definition
/// without content produces an empty file.
///
/// Definitions are values. Combinators never poke at a definition in place;
/// they build a new one and swap it in.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Definition {
    pub path: IPR,
    pub content: Option<Vec<u8>>,
    pub metadata: Metadata,
}

impl Definition {
    /// A definition with no content and no metadata.
    pub fn create(path: impl Into<IPR>) -> Self {
        Self {
            path: path.into(),
            content: None,
            metadata: Metadata::new(),
        }
    }

    /// Same content and metadata, different path.
    pub fn fork(&self, new_path: impl Into<IPR>) -> Self {
        Self {
            path: new_path.into(),
            ..self.clone()
        }
    }

    /// Relative prefix leading from this file's directory back to the root.
    ///
    /// ```
    /// use folio::Definition;
    /// assert_eq!(Definition::create("index.html").path_to_root(), "");
    /// assert_eq!(Definition::create("a/b/index.html").path_to_root(), "../../");
    /// ```
    pub fn path_to_root(&self) -> String {
        "../".repeat(self.path.depth())
    }
}
