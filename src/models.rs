//! Frontend Models
//!
//! Data structures matching the backend's JSON payloads.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Activity details as served by `GET /activities` (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl Activity {
    /// Remaining capacity. Saturates at zero if the backend ever
    /// reports more participants than the maximum.
    pub fn spots_left(&self) -> u32 {
        self.max_participants
            .saturating_sub(self.participants.len() as u32)
    }
}

/// Activities keyed by name. The backend sends a JSON object and does
/// not promise an ordering, so render order is the sorted key order.
pub type ActivityMap = BTreeMap<String, Activity>;

/// Success body of the mutating endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

/// Error body of the mutating endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct DetailBody {
    pub detail: String,
}
