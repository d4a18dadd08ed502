use std::fmt;

use uuid::Uuid;

/// Namespace for name-derived container ids. Fixed so the same DOM id or
/// selector always maps to the same key across sessions.
const CONTAINER_NAMESPACE: Uuid =
    Uuid::from_u128(0x5c1d_e0c4_a7f2_4b8e_9d3a_61f0_2e7b_c845);

/// Identity of a slider container in the host's element tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ContainerId(Uuid);

impl ContainerId {
    /// Fresh random id for containers without a stable name.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Deterministic id derived from a host-side name (element id, selector).
    pub fn from_name(name: &str) -> Self {
        Self(Uuid::new_v5(&CONTAINER_NAMESPACE, name.as_bytes()))
    }

    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ContainerId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for ContainerId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
