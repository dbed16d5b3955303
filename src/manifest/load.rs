use super::types::ScaffoldManifest;
use anyhow::Context;
use std::path::Path;

/// Load a scaffold manifest from a YAML file.
///
/// # Errors
///
/// Returns an error when the file cannot be read, the document does not
/// deserialize into a [`ScaffoldManifest`], or required fields are blank.
pub fn load_manifest(path: &Path) -> anyhow::Result<ScaffoldManifest> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read scaffold manifest {path:?}"))?;
    let manifest: ScaffoldManifest = serde_yaml::from_str(&content)
        .with_context(|| format!("failed to parse scaffold manifest {path:?}"))?;

    if manifest.controller.trim().is_empty() {
        anyhow::bail!("scaffold manifest {path:?} has an empty controller name");
    }
    if manifest.module.name.trim().is_empty() {
        anyhow::bail!("scaffold manifest {path:?} has an empty module name");
    }

    tracing::debug!(
        manifest = %path.display(),
        controller = %manifest.controller,
        actions = manifest.actions.len(),
        "loaded scaffold manifest"
    );
    Ok(manifest)
}
