//! Resolver output contract

use serde::{Deserialize, Serialize};
#[cfg(feature = "ts-gen")]
use ts_rs::TS;

use super::CollectionId;

/// Collections to render right now, one per slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "ts-gen", derive(TS))]
#[cfg_attr(feature = "ts-gen", ts(export))]
pub struct ResolvedCollections {
    pub primary: Option<CollectionId>,
    pub overlay: Option<CollectionId>,
}

impl ResolvedCollections {
    /// Nothing to show in either slot.
    pub const fn none() -> Self {
        Self { primary: None, overlay: None }
    }

    pub const fn is_empty(&self) -> bool {
        self.primary.is_none() && self.overlay.is_none()
    }
}
