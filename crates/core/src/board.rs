//! Board view helpers: per-status counts and the status filter tabs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::lifecycle::{IdeaStatus, UnknownStatus};

/// Which ideas the board shows. Defaults to all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StatusFilter {
    #[default]
    All,
    Only(IdeaStatus),
}

impl StatusFilter {
    pub fn matches(self, status: IdeaStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => wanted == status,
        }
    }

    /// Tab label shown above the board.
    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "All",
            StatusFilter::Only(IdeaStatus::Killed) => "Graveyard",
            StatusFilter::Only(status) => status.label(),
        }
    }

    /// Keep only the items whose status matches, preserving order.
    pub fn apply<T>(self, items: Vec<T>, status_of: impl Fn(&T) -> IdeaStatus) -> Vec<T> {
        match self {
            StatusFilter::All => items,
            StatusFilter::Only(_) => items
                .into_iter()
                .filter(|item| self.matches(status_of(item)))
                .collect(),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::All => f.write_str("all"),
            StatusFilter::Only(status) => f.write_str(status.as_str()),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" | "" => Ok(StatusFilter::All),
            other => other.parse().map(StatusFilter::Only),
        }
    }
}

impl TryFrom<String> for StatusFilter {
    type Error = UnknownStatus;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<StatusFilter> for String {
    fn from(value: StatusFilter) -> Self {
        value.to_string()
    }
}

/// Number of ideas per status, plus the total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct IdeaCounts {
    pub all: usize,
    pub parked: usize,
    pub building: usize,
    pub snoozed: usize,
    pub killed: usize,
}

impl IdeaCounts {
    pub fn from_statuses(statuses: impl IntoIterator<Item = IdeaStatus>) -> Self {
        let mut counts = Self::default();
        for status in statuses {
            counts.all += 1;
            match status {
                IdeaStatus::Parked => counts.parked += 1,
                IdeaStatus::Building => counts.building += 1,
                IdeaStatus::Snoozed => counts.snoozed += 1,
                IdeaStatus::Killed => counts.killed += 1,
            }
        }
        counts
    }
}
