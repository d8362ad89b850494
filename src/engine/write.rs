use crate::bundle::Bundle;
use crate::definition::Definition;
use crate::error::{Error, Result};
use crate::fs::Filesystem;
use futures::future::try_join_all;
use ipr::IPR;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Write every definition under `destination`.
///
/// Parent directories are created as needed. Definitions without content
/// become empty files. `destination` has to be absolute; nothing here guesses
/// at a working directory.
///
/// When several definitions share a path, the last one in compendium order
/// is the one that ends up on disk.
///
/// Hands back the bundle it was given, unchanged, so a pipeline can carry on
/// transforming after a write.
pub async fn write(destination: impl AsRef<Path>, bundle: Bundle) -> Result<Bundle> {
    let destination = destination.as_ref();
    if !destination.is_absolute() {
        return Err(Error::message(format!(
            "Write destination must be an absolute path, got {:?}",
            destination
        )));
    }
    debug!(destination = %destination.display(), files = bundle.len(), "writing");

    let fs = bundle.permission.filesystem();
    let writes = last_per_path(&bundle.compendium)
        .into_iter()
        .map(|def| write_one(fs, destination, def));
    try_join_all(writes).await?;
    Ok(bundle)
}

/// Definitions in compendium order, minus any shadowed by a later one at the
/// same path.
fn last_per_path(compendium: &[Definition]) -> Vec<&Definition> {
    let last: HashMap<&IPR, usize> = compendium
        .iter()
        .enumerate()
        .map(|(i, def)| (&def.path, i))
        .collect();
    compendium
        .iter()
        .enumerate()
        .filter(|(i, def)| last.get(&def.path) == Some(i))
        .map(|(_, def)| def)
        .collect()
}

async fn write_one(fs: &dyn Filesystem, destination: &Path, def: &Definition) -> Result<()> {
    let real_path = def.path.under(destination);
    if let Some(parent) = real_path.parent() {
        fs.create_directory_all(parent)
            .await
            .map_err(|e| Error::platform(&real_path, e))?;
    }
    let bytes: &[u8] = def.content.as_deref().unwrap_or_default();
    fs.write_file(&real_path, bytes)
        .await
        .map_err(|e| Error::platform(&real_path, e))
}
