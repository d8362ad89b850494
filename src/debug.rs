//! Plain-text rendering of a bundle, for diagnostic purposes.
//!
//! ```
//! use folio::{bundle, Definition, Permission};
//! use folio::debug::describe;
//! use indoc::indoc;
//!
//! let b = bundle(&Permission::os(), [
//!     Definition::create("some/dir/hello.txt"),
//!     Definition::create("a/file.md"),
//! ])
//! .exclude("a/file.md")
//! .set_content("The file contents");
//!
//! assert_eq!(describe(&b), indoc! {"
//!   FILE some/dir/hello.txt
//!     Length: 17
//! "});
//! ```

use crate::bundle::Bundle;
use crate::definition::Definition;

/// One `FILE` block per definition, in compendium order.
///
/// Content length is only shown once content is present. Metadata follows,
/// one key per line, values as JSON.
pub fn describe(bundle: &Bundle) -> String {
    let mut s = String::new();
    for def in &bundle.compendium {
        write_definition(&mut s, def);
    }
    s
}

fn write_definition(s: &mut String, def: &Definition) {
    s.push_str(&format!("FILE {}\n", def.path));
    if let Some(content) = &def.content {
        s.push_str(&format!("  Length: {}\n", content.len()));
    }
    for (key, value) in &def.metadata {
        s.push_str(&format!("  {}: {}\n", key, value));
    }
}
