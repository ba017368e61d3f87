#![forbid(unsafe_code)]

//! JSON snapshots of form state (requires `state-persistence`).
//!
//! Snapshots carry everything a form needs to resume: field text, the
//! layout dirty flag, and the remembered matting and glass values of the
//! photo frame page. They are plain strings; storing them is up to the host.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::gridfinity::GridfinityTrayForm;
use crate::photo_frame::PhotoFrameForm;
use crate::target::LayoutTarget;
use crate::tray::TrayLayoutForm;

/// Snapshot format version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Errors from saving or restoring a snapshot.
#[derive(Debug)]
pub enum SnapshotError {
    /// Serialization or deserialization error.
    Serialization(String),
    /// Snapshot written by an incompatible version.
    Version { found: u32, expected: u32 },
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Serialization(msg) => write!(f, "serialization error: {msg}"),
            Self::Version { found, expected } => {
                write!(f, "snapshot version {found} (expected {expected})")
            }
        }
    }
}

impl std::error::Error for SnapshotError {}

impl From<serde_json::Error> for SnapshotError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}

#[derive(Serialize, Deserialize)]
struct Envelope<T> {
    version: u32,
    state: T,
}

/// Form state that can be saved to and restored from JSON.
pub trait Snapshot: Serialize + DeserializeOwned {
    /// Serialize to a JSON string.
    fn snapshot(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(&Envelope {
            version: SNAPSHOT_VERSION,
            state: self,
        })?)
    }

    /// Restore from a JSON string produced by [`Snapshot::snapshot`].
    fn restore(json: &str) -> Result<Self, SnapshotError> {
        let envelope: Envelope<Self> = serde_json::from_str(json).inspect_err(|e| {
            warn!(error = %e, "snapshot rejected");
        })?;
        if envelope.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::Version {
                found: envelope.version,
                expected: SNAPSHOT_VERSION,
            });
        }
        Ok(envelope.state)
    }
}

impl Snapshot for LayoutTarget {}
impl Snapshot for TrayLayoutForm {}
impl Snapshot for GridfinityTrayForm {}
impl Snapshot for PhotoFrameForm {}
