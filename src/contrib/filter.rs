//! Keep or drop definitions by some property.
//!
//! All of these are order-preserving keep-if passes.

use crate::bundle::Bundle;
use ipr::IPR;
use regex::Regex;
use serde_json::Value;

impl Bundle {
    /// Drop every definition at exactly `path`.
    pub fn exclude(self, path: impl Into<IPR>) -> Self {
        let path = path.into();
        self.keep(|def| def.path != path)
    }

    pub fn with_base_name(self, base_name: &str) -> Self {
        self.keep(|def| def.path.base_name() == base_name)
    }

    /// Keep definitions sitting directly in `directory`.
    pub fn with_directory(self, directory: impl Into<IPR>) -> Self {
        let directory = directory.into();
        self.keep(|def| def.path.directory() == directory)
    }

    pub fn with_extension(self, extension: &str) -> Self {
        self.keep(|def| def.path.extension() == extension)
    }

    /// Keep definitions that have `key` in their metadata, set to `value`.
    pub fn with_metadata(self, key: &str, value: &Value) -> Self {
        self.keep(|def| def.metadata.get(key) == Some(value))
    }

    /// Keep definitions whose path matches the pattern anywhere.
    pub fn matching(self, pattern: &Regex) -> Self {
        self.keep(|def| pattern.is_match(def.path.as_str()))
    }
}

#[cfg(test)]
mod test {
    use crate::test_tools::*;
    use proptest::prelude::*;
    use regex::Regex;
    use serde_json::json;

    fn fixture() -> crate::Bundle {
        bundle_of(&[
            "index.html",
            "posts/hello.md",
            "posts/.draft.md",
            "posts/deep/nested.md",
            "style.css",
            "posts/index.html",
        ])
    }

    #[test]
    fn exclude() {
        let b = fixture().exclude("posts/hello.md");
        assert_eq!(
            b.paths(),
            vec![
                "index.html",
                "posts/.draft.md",
                "posts/deep/nested.md",
                "style.css",
                "posts/index.html",
            ]
        );

        // No match, no change
        assert_eq!(fixture().exclude("nope.txt").paths(), fixture().paths());
    }

    #[test]
    fn exclude_drops_duplicates() {
        let b = bundle_of(&["a.txt", "b.txt", "a.txt"]).exclude("a.txt");
        assert_eq!(b.paths(), vec!["b.txt"]);
    }

    #[test]
    fn with_base_name() {
        let b = fixture().with_base_name("index");
        assert_eq!(b.paths(), vec!["index.html", "posts/index.html"]);
        let b = fixture().with_base_name(".draft");
        assert_eq!(b.paths(), vec!["posts/.draft.md"]);
    }

    #[test]
    fn with_directory() {
        let b = fixture().with_directory("posts");
        assert_eq!(
            b.paths(),
            vec!["posts/hello.md", "posts/.draft.md", "posts/index.html"]
        );

        // The empty path is the root directory
        let b = fixture().with_directory("");
        assert_eq!(b.paths(), vec!["index.html", "style.css"]);
    }

    #[test]
    fn with_extension() {
        let b = fixture().with_extension("md");
        assert_eq!(
            b.paths(),
            vec!["posts/hello.md", "posts/.draft.md", "posts/deep/nested.md"]
        );
        assert!(fixture().with_extension("").is_empty());
    }

    #[test]
    fn with_metadata() {
        let b = fixture()
            .map_definitions(|def| {
                let draft = def.path.base_name().starts_with('.');
                crate::Definition {
                    metadata: meta(json!({ "draft": draft })),
                    ..def
                }
            })
            .exclude("style.css");

        let drafts = b.clone().with_metadata("draft", &json!(true));
        assert_eq!(drafts.paths(), vec!["posts/.draft.md"]);

        // Value must be equal, not just present
        let b2 = b.clone().with_metadata("draft", &json!("true"));
        assert!(b2.is_empty());

        // Missing key never matches, even against null
        let b3 = b.with_metadata("title", &json!(null));
        assert!(b3.is_empty());
    }

    #[test]
    fn matching() {
        let re = Regex::new(r"^posts/.*\.md$").expect("valid regex");
        let b = fixture().matching(&re);
        assert_eq!(
            b.paths(),
            vec!["posts/hello.md", "posts/.draft.md", "posts/deep/nested.md"]
        );
    }

    proptest! {
        #[test]
        fn filters_preserve_order(
            paths in prop::collection::vec("[ab]{1,2}(/[ab]{1,2}){0,2}\\.(md|html|txt)", 0..12)
        ) {
            let refs: Vec<&str> = paths.iter().map(|s| s.as_str()).collect();
            let b = bundle_of(&refs).with_extension("md");
            let expected: Vec<&str> = refs.iter().copied().filter(|p| p.ends_with(".md")).collect();
            prop_assert_eq!(b.paths(), expected);
        }
    }
}
