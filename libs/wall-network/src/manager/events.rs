//! Change notifications for the view layer.

use crate::ids::PathId;
use serde::{Deserialize, Serialize};

/// Something happened to a wall path.
///
/// Serialized adjacently tagged, e.g. `{"type":"Created","path":3}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "path")]
pub enum PathEvent {
    /// Path registered and its segments generated.
    Created(PathId),
    /// Path points moved or one of its edges was removed.
    Updated(PathId),
    /// Path segments hidden.
    Disabled(PathId),
    /// Path segments shown again.
    Enabled(PathId),
    /// Path lost its last edge and was dropped.
    Removed(PathId),
}

impl PathEvent {
    /// The path this event refers to.
    pub fn path(&self) -> PathId {
        match *self {
            Self::Created(id) | Self::Updated(id) | Self::Disabled(id) | Self::Enabled(id) | Self::Removed(id) => id,
        }
    }
}
