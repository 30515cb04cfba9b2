//! Fail-open artifact reader.
//!
//! A missing or unparsable gate artifact never blocks scoring: the reader
//! substitutes the artifact's documented default and records why in the
//! snapshot provenance.

use std::io::ErrorKind;
use std::path::PathBuf;

use serde::de::DeserializeOwned;

use shipscore_core::errors::{ArtifactError, ShipscoreErrorCode};
use shipscore_core::tracing::fields::{self, spans};

use super::types::*;

/// A parsed artifact together with where its values came from.
#[derive(Debug, Clone, PartialEq)]
pub struct RawArtifact<T> {
    pub value: T,
    pub source: ArtifactSource,
}

/// Reads gate artifacts from a directory using conventional file names.
#[derive(Debug, Clone)]
pub struct ArtifactReader {
    dir: PathBuf,
}

impl ArtifactReader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the artifact for `kind`.
    pub fn path_for(&self, kind: ArtifactKind) -> PathBuf {
        self.dir.join(kind.file_name())
    }

    /// Read one artifact. Never fails: any error yields `T::default()`.
    ///
    /// Fields absent from an otherwise valid document take the per-field
    /// default; unknown fields are ignored.
    pub fn read<T>(&self, kind: ArtifactKind) -> RawArtifact<T>
    where
        T: DeserializeOwned + Default,
    {
        match self.try_read(kind) {
            Ok(value) => RawArtifact {
                value,
                source: ArtifactSource::Loaded,
            },
            Err(error) => {
                tracing::debug!(
                    { fields::ARTIFACT } = %kind,
                    { fields::ERROR_CODE } = error.error_code(),
                    { fields::REASON } = %error,
                    "substituting artifact default"
                );
                RawArtifact {
                    value: T::default(),
                    source: ArtifactSource::Defaulted(error),
                }
            }
        }
    }

    fn try_read<T: DeserializeOwned>(&self, kind: ArtifactKind) -> Result<T, ArtifactError> {
        let path = self.path_for(kind);
        let content = std::fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ArtifactError::NotFound {
                path: path.display().to_string(),
            },
            _ => ArtifactError::Unreadable {
                path: path.display().to_string(),
                message: e.to_string(),
            },
        })?;
        serde_json::from_str(&content).map_err(|e| ArtifactError::Malformed {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Read all five gates into one snapshot.
    pub fn snapshot(&self) -> ArtifactSnapshot {
        let _span = tracing::debug_span!(spans::SNAPSHOT).entered();
        let vulnerabilities = self.read::<VulnerabilityCounts>(ArtifactKind::Vulnerabilities);
        let iac_findings = self.read::<IacFindings>(ArtifactKind::IacFindings);
        let policy_denials = self.read::<PolicyDenials>(ArtifactKind::PolicyDenials);
        let load_test = self.read::<LoadTestResult>(ArtifactKind::LoadTest);
        let cost_signal = self.read::<CostSignal>(ArtifactKind::CostSignal);

        let provenance = vec![
            ArtifactProvenance {
                kind: ArtifactKind::Vulnerabilities,
                source: vulnerabilities.source,
            },
            ArtifactProvenance {
                kind: ArtifactKind::IacFindings,
                source: iac_findings.source,
            },
            ArtifactProvenance {
                kind: ArtifactKind::PolicyDenials,
                source: policy_denials.source,
            },
            ArtifactProvenance {
                kind: ArtifactKind::LoadTest,
                source: load_test.source,
            },
            ArtifactProvenance {
                kind: ArtifactKind::CostSignal,
                source: cost_signal.source,
            },
        ];

        let snapshot = ArtifactSnapshot {
            vulnerabilities: vulnerabilities.value,
            iac_findings: iac_findings.value,
            policy_denials: policy_denials.value,
            load_test: load_test.value,
            cost_signal: cost_signal.value,
            provenance,
        };

        let defaulted = snapshot.defaulted_artifacts();
        if !defaulted.is_empty() {
            let names: Vec<&str> = defaulted.iter().map(|k| k.name()).collect();
            tracing::info!(
                { fields::ARTIFACTS_DIR } = %self.dir.display(),
                { fields::DEFAULTED } = %names.join(","),
                "gate artifacts unavailable, using defaults"
            );
        }

        snapshot
    }
}
