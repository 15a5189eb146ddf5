//! Messages crossing the asset-loader boundary.
//!
//! The engine fires one request per entity at session start and applies
//! completions at frame boundaries. There is no cancellation, timeout, or
//! retry: a request either completes or the entity never animates.

use serde::{Deserialize, Serialize};

use crate::types::{EntityKind, NodeId};

/// Fire-and-forget request for one entity's visual node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadRequest {
    pub node: NodeId,
    pub kind: EntityKind,
    /// Model asset path, resolved by the loader against its template cache.
    pub path: String,
}

/// How a load request ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum LoadOutcome {
    Loaded,
    Failed { reason: String },
}

/// Loader's answer to a [`LoadRequest`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadCompletion {
    pub node: NodeId,
    pub outcome: LoadOutcome,
}
