//! Edit the metadata attached to each definition.

use crate::bundle::Bundle;
use crate::definition::{Definition, Metadata};
use serde_json::Value;

impl Bundle {
    pub fn clear_metadata(self) -> Self {
        self.replace_metadata(&Metadata::new())
    }

    /// Merge `extra` into every definition's metadata. `extra` wins on
    /// conflicting keys.
    pub fn insert_metadata(self, extra: &Metadata) -> Self {
        self.map_definitions(|def| {
            let mut metadata = def.metadata;
            metadata.extend(extra.clone());
            Definition { metadata, ..def }
        })
    }

    /// Throw away every definition's metadata in favor of `metadata`.
    pub fn replace_metadata(self, metadata: &Metadata) -> Self {
        self.map_definitions(|def| Definition {
            metadata: metadata.clone(),
            ..def
        })
    }

    /// Record each definition's path properties in its own metadata.
    ///
    /// Handy for templates, which usually only get to see metadata. Sets
    /// `basename`, `dirname`, `extname`, `path` and `pathToRoot`, overwriting
    /// any existing values under those keys.
    pub fn copy_props_to_metadata(self) -> Self {
        self.map_definitions(|def| {
            let props = [
                ("basename", def.path.base_name().to_owned()),
                ("dirname", def.path.directory().to_string()),
                ("extname", def.path.extension().to_owned()),
                ("path", def.path.to_string()),
                ("pathToRoot", def.path_to_root()),
            ];
            let mut metadata = def.metadata;
            for (key, value) in props {
                metadata.insert(key.to_owned(), Value::String(value));
            }
            Definition { metadata, ..def }
        })
    }
}

#[cfg(test)]
mod test {
    use crate::test_tools::*;
    use crate::Metadata;
    use serde_json::json;

    #[test]
    fn insert_is_right_biased() {
        let b = bundle_of(&["a.md"])
            .insert_metadata(&meta(json!({ "k": "v1", "keep": 1 })))
            .insert_metadata(&meta(json!({ "k": "v2" })));
        assert_eq!(
            b.compendium[0].metadata,
            meta(json!({ "k": "v2", "keep": 1 }))
        );
    }

    #[test]
    fn replace_and_clear() {
        let b = bundle_of(&["a.md", "b.md"])
            .insert_metadata(&meta(json!({ "old": true })))
            .replace_metadata(&meta(json!({ "new": true })));
        for def in &b.compendium {
            assert_eq!(def.metadata, meta(json!({ "new": true })));
        }

        let b = b.clear_metadata();
        for def in &b.compendium {
            assert_eq!(def.metadata, Metadata::new());
        }
    }

    #[test]
    fn copy_props_to_metadata() {
        let b = bundle_of(&["blog/2024/hello.md", "index.html"])
            .insert_metadata(&meta(json!({ "title": "Hello", "path": "stale" })))
            .copy_props_to_metadata();

        assert_eq!(
            b.compendium[0].metadata,
            meta(json!({
                "title": "Hello",
                "basename": "hello",
                "dirname": "blog/2024",
                "extname": "md",
                "path": "blog/2024/hello.md",
                "pathToRoot": "../../",
            }))
        );
        assert_eq!(b.compendium[1].metadata["dirname"], json!(""));
        assert_eq!(b.compendium[1].metadata["pathToRoot"], json!(""));
    }
}
