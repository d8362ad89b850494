use crate::bundle::Bundle;
use crate::definition::Definition;
use crate::error::{Error, Result};
use crate::fs::{EntityKind, Filesystem, Permission};
use futures::future::{BoxFuture, FutureExt};
use ipr::IPR;
use std::path::Path;
use tracing::debug;

/// Recursively list every file under `root`.
///
/// Hidden files (names starting with `.`) are skipped, as is anything that's
/// neither a file nor a directory. Files come back in the order the
/// filesystem listed them, with each directory's contents spliced in where
/// the directory itself appeared.
///
/// Definitions have paths relative to `root`, no content, and no metadata.
pub async fn list(permission: &Permission, root: impl AsRef<Path>) -> Result<Bundle> {
    let root = root.as_ref();
    let compendium = visit(permission.filesystem(), root, IPR::empty()).await?;
    debug!(root = %root.display(), files = compendium.len(), "listed");
    Ok(Bundle {
        compendium,
        permission: permission.clone(),
        reading_directory: Some(root.to_path_buf()),
    })
}

fn visit<'a>(
    fs: &'a dyn Filesystem,
    root: &'a Path,
    rel: IPR,
) -> BoxFuture<'a, Result<Vec<Definition>>> {
    async move {
        let real_path = rel.under(root);
        let entries = fs
            .list_directory(&real_path)
            .await
            .map_err(|e| Error::platform(&real_path, e))?;

        let mut output = vec![];
        for entry in entries {
            let virt_path = rel.join(entry.name.as_str());
            match entry.kind {
                EntityKind::Directory => output.extend(visit(fs, root, virt_path).await?),
                EntityKind::File if entry.is_hidden() => (),
                EntityKind::File => output.push(Definition::create(virt_path)),
                EntityKind::Other => (),
            }
        }
        Ok(output)
    }
    .boxed()
}
