//! Serializable view of the clock.
//!
//! A [`ClockSnapshot`] copies the contents of all four containers in their
//! current order. Its JSON form is the rendering contract shared with the
//! command line tool: an object with exactly the fields `Min`, `FiveMin`,
//! `Hour` and `Main` (the queue), in that order.

use crate::id::BallId;
use serde::{Deserialize, Serialize};

/// Errors that can occur while rendering or parsing a snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("JSON encoding failed: {0}")]
    Encode(String),
    #[error("JSON decoding failed: {0}")]
    Decode(String),
}

/// Contents of every container, in container order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClockSnapshot {
    #[serde(rename = "Min")]
    pub min: Vec<BallId>,
    #[serde(rename = "FiveMin")]
    pub five_min: Vec<BallId>,
    #[serde(rename = "Hour")]
    pub hour: Vec<BallId>,
    /// The waiting queue, front first.
    #[serde(rename = "Main")]
    pub main: Vec<BallId>,
}

impl ClockSnapshot {
    /// Total number of balls across all containers.
    pub fn ball_count(&self) -> usize {
        self.min.len() + self.five_min.len() + self.hour.len() + self.main.len()
    }

    /// Compact single-line JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(|e| SnapshotError::Encode(e.to_string()))
    }

    /// Indented JSON for human reading.
    pub fn to_json_pretty(&self) -> Result<String, SnapshotError> {
        serde_json::to_string_pretty(self).map_err(|e| SnapshotError::Encode(e.to_string()))
    }

    /// Parse the JSON form produced by [`ClockSnapshot::to_json`].
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        serde_json::from_str(json).map_err(|e| SnapshotError::Decode(e.to_string()))
    }
}
