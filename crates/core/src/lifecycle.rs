//! Idea status lifecycle.
//!
//! An idea moves between four statuses in response to four user actions.
//! [`compute_transition`] is the single place that decides which lifecycle
//! fields change for an action; callers decide whether the action is offered
//! for the current status via [`IdeaStatus::available_actions`] /
//! [`ensure_action_offered`].
//!
//! | action | offered from        | status   | remind_at  | resolved_at | snooze_count |
//! |--------|---------------------|----------|------------|-------------|--------------|
//! | build  | parked, snoozed     | building | unchanged  | now         | unchanged    |
//! | snooze | parked, snoozed     | snoozed  | now + 90d  | unchanged   | +1           |
//! | kill   | parked, snoozed, building | killed | unchanged | now     | unchanged    |
//! | park   | building, killed    | parked   | now + 90d  | cleared     | unchanged    |

use std::fmt;
use std::str::FromStr;

use chrono::Duration;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Length of the reminder horizon, in days.
pub const REMIND_AFTER_DAYS: i64 = 90;

/// Compute the reminder horizon for an idea parked or snoozed at `now`.
pub fn remind_at_from(now: Timestamp) -> Timestamp {
    now + Duration::days(REMIND_AFTER_DAYS)
}

// ---------------------------------------------------------------------------
// Status
// ---------------------------------------------------------------------------

/// Where an idea currently sits in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum IdeaStatus {
    Parked,
    Building,
    Snoozed,
    Killed,
}

impl IdeaStatus {
    /// All statuses, in board tab order.
    pub const ALL: [IdeaStatus; 4] = [
        IdeaStatus::Parked,
        IdeaStatus::Building,
        IdeaStatus::Snoozed,
        IdeaStatus::Killed,
    ];

    /// The value stored in the `ideas.status` column.
    pub fn as_str(self) -> &'static str {
        match self {
            IdeaStatus::Parked => "parked",
            IdeaStatus::Building => "building",
            IdeaStatus::Snoozed => "snoozed",
            IdeaStatus::Killed => "killed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            IdeaStatus::Parked => "Parked",
            IdeaStatus::Building => "Building",
            IdeaStatus::Snoozed => "Snoozed",
            IdeaStatus::Killed => "Killed",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            IdeaStatus::Parked => "🅿️",
            IdeaStatus::Building => "🚀",
            IdeaStatus::Snoozed => "😴",
            IdeaStatus::Killed => "💀",
        }
    }

    /// Whether an idea in this status carries a `resolved_at` timestamp.
    pub fn is_resolved(self) -> bool {
        matches!(self, IdeaStatus::Building | IdeaStatus::Killed)
    }

    /// Whether `remind_at` is meaningful (and displayed) for this status.
    pub fn shows_reminder(self) -> bool {
        matches!(self, IdeaStatus::Parked | IdeaStatus::Snoozed)
    }

    /// The actions a visitor may take on an idea in this status.
    pub fn available_actions(self) -> &'static [IdeaAction] {
        match self {
            IdeaStatus::Parked | IdeaStatus::Snoozed => {
                &[IdeaAction::Build, IdeaAction::Snooze, IdeaAction::Kill]
            }
            IdeaStatus::Building => &[IdeaAction::Park, IdeaAction::Kill],
            IdeaStatus::Killed => &[IdeaAction::Park],
        }
    }

    pub fn offers(self, action: IdeaAction) -> bool {
        self.available_actions().contains(&action)
    }
}

impl fmt::Display for IdeaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a known status.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown idea status '{0}'")]
pub struct UnknownStatus(pub String);

impl FromStr for IdeaStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "parked" => Ok(IdeaStatus::Parked),
            "building" => Ok(IdeaStatus::Building),
            "snoozed" => Ok(IdeaStatus::Snoozed),
            "killed" => Ok(IdeaStatus::Killed),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

impl TryFrom<String> for IdeaStatus {
    type Error = UnknownStatus;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ---------------------------------------------------------------------------
// Actions
// ---------------------------------------------------------------------------

/// A user-triggered lifecycle action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum IdeaAction {
    Build,
    Snooze,
    Kill,
    /// Re-park a building idea or revive a killed one.
    Park,
}

impl IdeaAction {
    pub fn as_str(self) -> &'static str {
        match self {
            IdeaAction::Build => "build",
            IdeaAction::Snooze => "snooze",
            IdeaAction::Kill => "kill",
            IdeaAction::Park => "park",
        }
    }

    /// The status an idea ends up in after this action.
    pub fn target_status(self) -> IdeaStatus {
        match self {
            IdeaAction::Build => IdeaStatus::Building,
            IdeaAction::Snooze => IdeaStatus::Snoozed,
            IdeaAction::Kill => IdeaStatus::Killed,
            IdeaAction::Park => IdeaStatus::Parked,
        }
    }
}

impl fmt::Display for IdeaAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a known action.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown idea action '{0}'")]
pub struct UnknownAction(pub String);

impl FromStr for IdeaAction {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "build" => Ok(IdeaAction::Build),
            "snooze" => Ok(IdeaAction::Snooze),
            "kill" => Ok(IdeaAction::Kill),
            "park" | "revive" => Ok(IdeaAction::Park),
            other => Err(UnknownAction(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Transitions
// ---------------------------------------------------------------------------

/// The lifecycle fields of an idea, as read from the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifecycleState {
    pub status: IdeaStatus,
    pub remind_at: Timestamp,
    pub resolved_at: Option<Timestamp>,
    pub snooze_count: i32,
}

/// The lifecycle fields to persist after a transition.
///
/// Every field carries its resulting value; fields the action leaves alone
/// are copied from the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifecycleUpdate {
    pub status: IdeaStatus,
    pub remind_at: Timestamp,
    pub resolved_at: Option<Timestamp>,
    pub snooze_count: i32,
    pub updated_at: Timestamp,
}

/// Lifecycle fields for an idea parked at `now`.
pub fn new_idea_lifecycle(now: Timestamp) -> LifecycleState {
    LifecycleState {
        status: IdeaStatus::Parked,
        remind_at: remind_at_from(now),
        resolved_at: None,
        snooze_count: 0,
    }
}

/// Compute the field updates for applying `action` at `now`.
///
/// Does not check whether the action is offered for `current.status`.
pub fn compute_transition(
    current: &LifecycleState,
    action: IdeaAction,
    now: Timestamp,
) -> LifecycleUpdate {
    let mut update = LifecycleUpdate {
        status: action.target_status(),
        remind_at: current.remind_at,
        resolved_at: current.resolved_at,
        snooze_count: current.snooze_count,
        updated_at: now,
    };

    match action {
        IdeaAction::Build | IdeaAction::Kill => {
            update.resolved_at = Some(now);
        }
        IdeaAction::Snooze => {
            update.remind_at = remind_at_from(now);
            update.snooze_count = current.snooze_count.saturating_add(1);
        }
        IdeaAction::Park => {
            update.remind_at = remind_at_from(now);
            update.resolved_at = None;
        }
    }

    update
}

/// Reject `action` when it is not offered for `status`.
pub fn ensure_action_offered(status: IdeaStatus, action: IdeaAction) -> Result<(), CoreError> {
    if status.offers(action) {
        Ok(())
    } else {
        let allowed: Vec<&str> = status
            .available_actions()
            .iter()
            .map(|a| a.as_str())
            .collect();
        Err(CoreError::Conflict(format!(
            "Cannot {action} an idea that is {status}. Allowed actions: {}",
            allowed.join(", ")
        )))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
