//! The unit of work that flows through a pipeline.

use crate::definition::Definition;
use crate::fs::Permission;
use std::path::PathBuf;

/// A compendium of definitions, plus what's needed to do I/O on them.
///
/// The order of `compendium` is significant: it's the listing order (or
/// whatever order the definitions were handed over in), and every combinator
/// keeps it, except where it explicitly inserts or removes entries.
///
/// `reading_directory` is the root the compendium was listed from. It's what
/// [`crate::read`] resolves paths against, and combinators never change it.
#[derive(Clone, Debug)]
pub struct Bundle {
    pub compendium: Vec<Definition>,
    pub permission: Permission,
    pub reading_directory: Option<PathBuf>,
}

/// Wrap hand-made definitions into a bundle.
///
/// There's no reading directory, so [`crate::read`] leaves these alone.
///
/// ```
/// use folio::{bundle, Definition, Permission};
///
/// let b = bundle(&Permission::os(), [Definition::create("a.txt")]);
/// assert_eq!(b.len(), 1);
/// assert_eq!(b.reading_directory, None);
/// ```
pub fn bundle(
    permission: &Permission,
    definitions: impl IntoIterator<Item = Definition>,
) -> Bundle {
    Bundle {
        compendium: definitions.into_iter().collect(),
        permission: permission.clone(),
        reading_directory: None,
    }
}

impl Bundle {
    pub fn len(&self) -> usize {
        self.compendium.len()
    }

    pub fn is_empty(&self) -> bool {
        self.compendium.is_empty()
    }

    /// Every path, in compendium order.
    pub fn paths(&self) -> Vec<&str> {
        self.compendium.iter().map(|def| def.path.as_str()).collect()
    }

    /// Swap out the compendium, keeping the I/O context.
    pub(crate) fn with_compendium(self, compendium: Vec<Definition>) -> Self {
        Self { compendium, ..self }
    }

    /// Replace every definition with `f(definition)`.
    pub(crate) fn map_definitions(self, f: impl FnMut(Definition) -> Definition) -> Self {
        let compendium = self.compendium.into_iter().map(f).collect();
        Self { compendium, ..self }
    }

    /// Keep the definitions where `f` is true, in order.
    pub(crate) fn keep(self, mut f: impl FnMut(&Definition) -> bool) -> Self {
        let compendium = self.compendium.into_iter().filter(|d| f(d)).collect();
        Self { compendium, ..self }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn helpers_preserve_context() {
        let dir = PathBuf::from("/srv/site");
        let b = Bundle {
            reading_directory: Some(dir.clone()),
            ..bundle(
                &Permission::os(),
                [Definition::create("a.txt"), Definition::create("b.md")],
            )
        };

        let b = b.keep(|d| d.path.extension() == "md");
        assert_eq!(b.paths(), vec!["b.md"]);
        assert_eq!(b.reading_directory, Some(dir.clone()));

        let b = b.map_definitions(|d| d.fork("c.md"));
        assert_eq!(b.paths(), vec!["c.md"]);
        assert_eq!(b.reading_directory, Some(dir.clone()));

        let b = b.with_compendium(vec![]);
        assert!(b.is_empty());
        assert_eq!(b.reading_directory, Some(dir));
    }
}
