//! Artifact and output locations.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants;

/// Where gate artifacts are read from and where outputs land.
/// Relative paths are resolved against the working root.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory holding the gate JSON artifacts. Default: `artifacts`.
    pub artifacts_dir: Option<PathBuf>,
    /// Score artifact, overwritten each run. Default: `artifacts/shipscores/score.json`.
    pub scores_path: Option<PathBuf>,
    /// Append-only decision record directory. Default: `cdrs`.
    pub records_dir: Option<PathBuf>,
    /// Remediation proposal directory. Default: `proposals`.
    pub proposals_dir: Option<PathBuf>,
}

impl PathsConfig {
    pub fn effective_artifacts_dir(&self, root: &Path) -> PathBuf {
        resolve(root, self.artifacts_dir.as_deref(), constants::DEFAULT_ARTIFACTS_DIR)
    }

    pub fn effective_scores_path(&self, root: &Path) -> PathBuf {
        resolve(root, self.scores_path.as_deref(), constants::DEFAULT_SCORES_PATH)
    }

    pub fn effective_records_dir(&self, root: &Path) -> PathBuf {
        resolve(root, self.records_dir.as_deref(), constants::DEFAULT_RECORDS_DIR)
    }

    pub fn effective_proposals_dir(&self, root: &Path) -> PathBuf {
        resolve(root, self.proposals_dir.as_deref(), constants::DEFAULT_PROPOSALS_DIR)
    }
}

fn resolve(root: &Path, configured: Option<&Path>, default: &str) -> PathBuf {
    let path = configured.unwrap_or_else(|| Path::new(default));
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_resolve_under_root() {
        let paths = PathsConfig::default();
        let root = Path::new("/work");
        assert_eq!(paths.effective_artifacts_dir(root), Path::new("/work/artifacts"));
        assert_eq!(
            paths.effective_scores_path(root),
            Path::new("/work/artifacts/shipscores/score.json")
        );
        assert_eq!(paths.effective_records_dir(root), Path::new("/work/cdrs"));
        assert_eq!(paths.effective_proposals_dir(root), Path::new("/work/proposals"));
    }

    #[test]
    fn absolute_paths_are_kept() {
        let paths = PathsConfig {
            records_dir: Some(PathBuf::from("/var/cdrs")),
            ..Default::default()
        };
        assert_eq!(
            paths.effective_records_dir(Path::new("/work")),
            Path::new("/var/cdrs")
        );
    }
}
