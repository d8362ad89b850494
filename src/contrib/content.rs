//! Give definitions new content.
//!
//! These are the only combinators that care about content at all.

use crate::bundle::Bundle;
use crate::definition::Definition;

impl Bundle {
    /// Same bytes for everyone.
    pub fn set_content(self, bytes: impl Into<Vec<u8>>) -> Self {
        let bytes = bytes.into();
        self.map_definitions(|def| Definition {
            content: Some(bytes.clone()),
            ..def
        })
    }

    /// Run a renderer over every definition, replacing its content with the
    /// result. Returning `None` leaves the definition without content.
    ///
    /// ```
    /// use folio::{bundle, Definition, Permission};
    ///
    /// let b = bundle(&Permission::os(), [Definition::create("a.txt")])
    ///     .set_content("shout")
    ///     .render_content(|def| {
    ///         def.content.as_ref().map(|c| c.to_ascii_uppercase())
    ///     });
    /// assert_eq!(b.compendium[0].content, Some(b"SHOUT".to_vec()));
    /// ```
    pub fn render_content<F>(self, mut renderer: F) -> Self
    where
        F: FnMut(&Definition) -> Option<Vec<u8>>,
    {
        self.map_definitions(|def| Definition {
            content: renderer(&def),
            ..def
        })
    }
}
