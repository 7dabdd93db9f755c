//! Board lanes and their wire representation.

use super::ParseLaneError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three fixed buckets that partition tasks by status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Lane {
    /// Work not yet started. New tasks land here.
    #[default]
    Todo,
    /// Work in progress.
    Doing,
    /// Finished work. Tasks in this lane are always completed.
    Done,
}

impl Lane {
    /// All lanes in display order.
    pub const ALL: [Self; 3] = [Self::Todo, Self::Doing, Self::Done];

    /// Returns the canonical storage and droppable representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "TODO",
            Self::Doing => "DOING",
            Self::Done => "DONE",
        }
    }

    /// Returns the heading shown above the lane.
    #[must_use]
    pub const fn title(self) -> &'static str {
        self.as_str()
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Lane {
    type Error = ParseLaneError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_uppercase();
        match normalized.as_str() {
            "TODO" => Ok(Self::Todo),
            "DOING" => Ok(Self::Doing),
            "DONE" => Ok(Self::Done),
            _ => Err(ParseLaneError(value.to_owned())),
        }
    }
}
