use crate::bundle::Bundle;
use ipr::IPR;

impl Bundle {
    /// Copy every definition at `existing` to `new`.
    ///
    /// Each copy goes right after its source, and carries the source's
    /// content and metadata as they are right now. Named `clone_path` so it
    /// doesn't get mixed up with `Clone::clone`.
    ///
    /// ```
    /// use folio::{bundle, Definition, Permission};
    ///
    /// let b = bundle(&Permission::os(), [
    ///     Definition::create("index.html"),
    ///     Definition::create("about.html"),
    /// ])
    /// .clone_path("index.html", "404.html");
    ///
    /// assert_eq!(b.paths(), vec!["index.html", "404.html", "about.html"]);
    /// ```
    pub fn clone_path(self, existing: impl Into<IPR>, new: impl Into<IPR>) -> Self {
        let (existing, new) = (existing.into(), new.into());
        let mut compendium = Vec::with_capacity(self.compendium.len());
        for def in &self.compendium {
            compendium.push(def.clone());
            if def.path == existing {
                compendium.push(def.fork(&new));
            }
        }
        self.with_compendium(compendium)
    }
}
