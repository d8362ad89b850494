use crate::bundle::Bundle;
use crate::definition::Definition;
use crate::error::{Error, Result};
use futures::future::try_join_all;
use std::iter::zip;
use tracing::debug;

/// Fetch file contents from disk into memory.
///
/// Paths are resolved against the bundle's reading directory. A bundle
/// without one (made with [`crate::bundle()`]) comes back untouched.
///
/// Be warned that this reads everything at once, which may be a very bad
/// idea if the tree is larger than you have RAM for.
pub async fn read(bundle: Bundle) -> Result<Bundle> {
    let dir = match &bundle.reading_directory {
        Some(dir) => dir.clone(),
        None => return Ok(bundle),
    };
    debug!(dir = %dir.display(), files = bundle.len(), "reading");

    let fs = bundle.permission.filesystem();
    let reads = bundle.compendium.iter().map(|def| {
        let real_path = def.path.under(&dir);
        async move {
            fs.read_file(&real_path)
                .await
                .map_err(|e| Error::platform(&real_path, e))
        }
    });
    let contents = try_join_all(reads).await?;

    let Bundle {
        compendium,
        permission,
        reading_directory,
    } = bundle;
    let compendium = zip(compendium, contents)
        .map(|(def, content)| Definition {
            content: Some(content),
            ..def
        })
        .collect();
    Ok(Bundle {
        compendium,
        permission,
        reading_directory,
    })
}
