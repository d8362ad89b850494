//! Move definitions around without touching their content.

use crate::bundle::Bundle;
use crate::definition::Definition;
use ipr::IPR;

impl Bundle {
    /// Fork every definition at exactly `old` over to `new`.
    pub fn rename(self, old: impl Into<IPR>, new: impl Into<IPR>) -> Self {
        let (old, new) = (old.into(), new.into());
        self.map_definitions(|def| match def.path == old {
            true => def.fork(&new),
            false => def,
        })
    }

    /// Swap the extension, only on definitions where it's exactly `old`.
    ///
    /// An empty `new` drops the extension (and its dot) entirely.
    pub fn rename_extension(self, old: &str, new: &str) -> Self {
        self.map_definitions(|def| {
            if def.path.extension() != old {
                return def;
            }
            let path = def.path.with_extension(new);
            Definition { path, ..def }
        })
    }

    /// Nest each file into a directory named after it, for clean URLs.
    ///
    /// `blog/hello.html` becomes `blog/hello/index.html` with
    /// `permalink("index")`. Files already named `index` are left alone, which
    /// makes this idempotent.
    pub fn permalink(self, new_base_name: &str) -> Self {
        self.map_definitions(|def| {
            if def.path.base_name() == new_base_name {
                return def;
            }
            let directory = def.path.directory().join(def.path.base_name());
            let path = IPR::from_parts(&directory, new_base_name, def.path.extension());
            Definition { path, ..def }
        })
    }

    /// Add a directory right above every file.
    ///
    /// `a/b.html` enclosed in `x` becomes `a/x/b.html`. The file name itself
    /// is untouched.
    pub fn enclose(self, directory: impl Into<IPR>) -> Self {
        let addition = directory.into();
        self.map_definitions(|def| {
            let path = def.path.with_directory(def.path.directory().join(&addition));
            Definition { path, ..def }
        })
    }
}

#[cfg(test)]
mod test {
    use crate::test_tools::*;
    use crate::Definition;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn rename() {
        let b = bundle_of(&["b/example.html", "b/other.html"])
            .rename("b/example.html", "example/index.html");
        assert_eq!(b.paths(), vec!["example/index.html", "b/other.html"]);

        // Exact matches only
        let b = bundle_of(&["b/example.html"]).rename("b", "c");
        assert_eq!(b.paths(), vec!["b/example.html"]);
    }

    #[test]
    fn rename_keeps_content_and_metadata() {
        let b = bundle_of(&["a.md"])
            .set_content("# Hi")
            .insert_metadata(&meta(json!({ "title": "Hi" })))
            .rename("a.md", "b.md");
        assert_eq!(
            b.compendium,
            vec![Definition {
                path: "b.md".into(),
                content: Some(b"# Hi".to_vec()),
                metadata: meta(json!({ "title": "Hi" })),
            }]
        );
    }

    #[test]
    fn rename_extension() {
        let before = bundle_of(&["a.md", "b.markdown", "c.html", "d", "e.md.txt"]);
        let after = before.clone().rename_extension("md", "html");
        assert_eq!(
            after.paths(),
            vec!["a.html", "b.markdown", "c.html", "d", "e.md.txt"]
        );

        // Everything that didn't match is untouched
        for (b, a) in before.compendium.iter().zip(&after.compendium).skip(1) {
            assert_eq!(b, a);
        }
    }

    #[test]
    fn rename_extension_to_and_from_empty() {
        let b = bundle_of(&["notes.txt", "LICENSE"]).rename_extension("txt", "");
        assert_eq!(b.paths(), vec!["notes", "LICENSE"]);

        let b = b.rename_extension("", "md");
        assert_eq!(b.paths(), vec!["notes.md", "LICENSE.md"]);
    }

    #[test]
    fn permalink() {
        let b = bundle_of(&[
            "about.html",
            "blog/hello.html",
            "blog/index.html",
            "README",
        ])
        .permalink("index");
        assert_eq!(
            b.paths(),
            vec![
                "about/index.html",
                "blog/hello/index.html",
                "blog/index.html",
                "README/index",
            ]
        );
    }

    #[test]
    fn enclose() {
        let b = bundle_of(&["index.html", "a/b.html"]).enclose("x");
        assert_eq!(b.paths(), vec!["x/index.html", "a/x/b.html"]);

        let b = bundle_of(&["a/b.html"]).enclose("x/y");
        assert_eq!(b.paths(), vec!["a/x/y/b.html"]);
    }

    proptest! {
        #[test]
        fn permalink_is_idempotent(
            paths in prop::collection::vec("([a-c]{1,3}/){0,2}[a-c.]{1,4}", 0..10)
        ) {
            let refs: Vec<&str> = paths.iter().map(|s| s.as_str()).collect();
            let once = bundle_of(&refs).permalink("index");
            let twice = once.clone().permalink("index");
            prop_assert_eq!(once.compendium, twice.compendium);
        }
    }
}
