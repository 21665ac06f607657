//! One-click action links.
//!
//! A reminder e-mail carries one link per decision:
//! `{base_url}/action/{idea_id}/{token}` with `token` in `build|snooze|kill`.
//! Re-parking is an in-app action only and has no link token.

use serde::Serialize;

use crate::lifecycle::{IdeaAction, IdeaStatus};
use crate::types::DbId;

/// A decision reachable through an e-mail link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkAction {
    Build,
    Snooze,
    Kill,
}

impl LinkAction {
    pub fn as_str(self) -> &'static str {
        self.action().as_str()
    }

    /// The lifecycle action this link applies.
    pub fn action(self) -> IdeaAction {
        match self {
            LinkAction::Build => IdeaAction::Build,
            LinkAction::Snooze => IdeaAction::Snooze,
            LinkAction::Kill => IdeaAction::Kill,
        }
    }
}

/// Link actions in the order they are offered.
pub const LINK_ACTIONS: [LinkAction; 3] = [LinkAction::Build, LinkAction::Snooze, LinkAction::Kill];

/// Parse the action segment of a link.
pub fn parse_link_token(token: &str) -> Option<LinkAction> {
    LINK_ACTIONS
        .into_iter()
        .find(|action| action.as_str() == token)
}

/// Build the public URL for an action link.
pub fn action_link_url(base_url: &str, idea_id: DbId, action: LinkAction) -> String {
    format!(
        "{}/action/{idea_id}/{}",
        base_url.trim_end_matches('/'),
        action.as_str()
    )
}

/// Link actions currently offered for an idea in `status`.
pub fn offered_link_actions(status: IdeaStatus) -> Vec<LinkAction> {
    LINK_ACTIONS
        .into_iter()
        .filter(|action| status.offers(action.action()))
        .collect()
}

/// Confirmation copy shown after a link action has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmationCopy {
    pub icon: &'static str,
    pub title: &'static str,
    pub message: &'static str,
}

pub fn confirmation_copy(action: LinkAction) -> ConfirmationCopy {
    match action {
        LinkAction::Build => ConfirmationCopy {
            icon: "🚀",
            title: "Let's go!",
            message: "You've decided to build this. Time to make it happen, dude.",
        },
        LinkAction::Snooze => ConfirmationCopy {
            icon: "😴",
            title: "Not yet, dude.",
            message: "We'll check in again in another 90 days. No rush.",
        },
        LinkAction::Kill => ConfirmationCopy {
            icon: "💀",
            title: "Idea killed.",
            message: "Rest in peace, little idea. The graveyard is a noble place.",
        },
    }
}

/// Message for a link that cannot be applied.
pub const INVALID_LINK_MESSAGE: &str = "That link doesn't look right, dude.";

/// Message for a link whose idea no longer exists.
pub const MISSING_IDEA_MESSAGE: &str =
    "Couldn't find that idea. It may have already been removed.";
