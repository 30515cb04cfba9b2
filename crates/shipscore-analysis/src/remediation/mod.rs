//! Auto-remediation proposals: ready-to-review infrastructure changes for
//! known violation kinds.
//!
//! Only one kind is supported. Any policy-engine denial maps to the public
//! S3 lockdown, whichever policy actually denied; the emitted text is fixed
//! and does not vary with the denial count.

use std::fmt;

use serde::Serialize;

use shipscore_core::tracing::fields;

use crate::artifacts::ArtifactSnapshot;
use crate::record::RecordTimestamp;

/// Violation classes that have a remediation template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// A policy gate denied the deployment (assumed: public S3 access).
    PublicS3Policy,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PublicS3Policy => f.write_str("public_s3_policy"),
        }
    }
}

/// Fixed proposal text for one violation kind.
#[derive(Debug, Clone, Copy)]
pub struct RemediationTemplate {
    pub kind: ViolationKind,
    /// Appended to the timestamp to form the proposal file name.
    pub file_suffix: &'static str,
    pub body: &'static str,
}

const S3_BLOCK_PUBLIC_ACCESS: &str = r#"# Auto-proposal: enforce S3 block public access
# Review & edit before apply.
resource "aws_s3_bucket_public_access_block" "default" {
  bucket = aws_s3_bucket.app.id
  block_public_acls       = true
  block_public_policy     = true
  restrict_public_buckets = true
  ignore_public_acls      = true
}
"#;

pub static TEMPLATES: [RemediationTemplate; 1] = [RemediationTemplate {
    kind: ViolationKind::PublicS3Policy,
    file_suffix: "_s3_block_public_access.tf",
    body: S3_BLOCK_PUBLIC_ACCESS,
}];

/// Look up the template for a violation kind.
pub fn template_for(kind: ViolationKind) -> Option<&'static RemediationTemplate> {
    TEMPLATES.iter().find(|t| t.kind == kind)
}

/// Violation kinds present in a snapshot. Reads only the denial count.
pub fn detect_violations(snapshot: &ArtifactSnapshot) -> Vec<ViolationKind> {
    let mut out = Vec::new();
    if snapshot.policy_denials.deny > 0 {
        out.push(ViolationKind::PublicS3Policy);
    }
    out
}

/// A proposal ready to be written to the proposals directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemediationProposal {
    pub kind: ViolationKind,
    pub file_name: String,
    pub body: &'static str,
}

/// Draft a proposal when the snapshot has a remediable violation.
pub fn propose(snapshot: &ArtifactSnapshot, timestamp: &RecordTimestamp) -> Option<RemediationProposal> {
    let kind = detect_violations(snapshot).into_iter().next()?;
    let template = template_for(kind)?;
    tracing::debug!(
        { fields::VIOLATION } = %kind,
        { fields::DENY_COUNT } = snapshot.policy_denials.deny,
        "remediation proposed"
    );
    Some(RemediationProposal {
        kind,
        file_name: format!("{}{}", timestamp.stamp(), template.file_suffix),
        body: template.body,
    })
}
