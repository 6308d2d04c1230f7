//! Schema discovery and output directory mirroring.

use crate::error::BuildError;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Schema files found in one directory of the schema tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildUnit {
    /// Directory relative to the schema root; empty for the root itself.
    pub relative_dir: PathBuf,
    /// Full paths of the schema files, sorted.
    pub schemas: Vec<PathBuf>,
}

impl BuildUnit {
    /// Returns the mirrored directory under an output root.
    #[must_use]
    pub fn output_dir(&self, output_root: &Path) -> PathBuf {
        output_root.join(&self.relative_dir)
    }
}

/// Walks the schema root and groups schema files by directory.
///
/// Units and the files in them come back sorted, so repeated runs see the
/// same order.
///
/// # Errors
/// Returns `BuildError::SchemaRootNotFound` if the root is not a directory,
/// `BuildError::Walk` if traversal fails, and `BuildError::NothingToBuild`
/// if no file carries the extension.
pub fn discover(root: &Path, extension: &str) -> Result<Vec<BuildUnit>, BuildError> {
    if !root.is_dir() {
        return Err(BuildError::SchemaRootNotFound {
            root: root.to_path_buf(),
        });
    }

    let mut grouped: BTreeMap<PathBuf, Vec<PathBuf>> = BTreeMap::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|source| BuildError::Walk {
            root: root.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_file() || !has_extension(entry.path(), extension) {
            continue;
        }

        let relative_dir = entry
            .path()
            .parent()
            .and_then(|parent| parent.strip_prefix(root).ok())
            .map(Path::to_path_buf)
            .unwrap_or_default();
        grouped
            .entry(relative_dir)
            .or_default()
            .push(entry.path().to_path_buf());
    }

    if grouped.is_empty() {
        return Err(BuildError::NothingToBuild {
            root: root.to_path_buf(),
            extension: extension.to_string(),
        });
    }

    Ok(grouped
        .into_iter()
        .map(|(relative_dir, schemas)| BuildUnit {
            relative_dir,
            schemas,
        })
        .collect())
}

/// Creates the output directory of every unit.
///
/// Directories that already exist are left alone.
///
/// # Errors
/// Returns `BuildError::CreateDir` with the underlying cause for any other
/// failure, such as a file in the way.
pub fn mirror_directories(
    units: &[BuildUnit],
    output_root: &Path,
) -> Result<Vec<PathBuf>, BuildError> {
    let mut created = Vec::with_capacity(units.len());
    for unit in units {
        let dir = unit.output_dir(output_root);
        fs::create_dir_all(&dir).map_err(|e| BuildError::create_dir(&dir, e))?;
        tracing::debug!("Output directory ready: {}", dir.display());
        created.push(dir);
    }
    Ok(created)
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(extension)
}
