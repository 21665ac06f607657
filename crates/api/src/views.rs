//! JSON view models returned to the browser client.
//!
//! These carry the display strings the client renders verbatim (status
//! labels, relative dates, offered actions, action link URLs) so the
//! client stays free of lifecycle rules.

use notyetdude_core::action_link::{
    action_link_url, confirmation_copy, offered_link_actions, LinkAction,
};
use notyetdude_core::board::{IdeaCounts, StatusFilter};
use notyetdude_core::dates::{days_until, format_date, time_ago};
use notyetdude_core::identity::NormalizedEmail;
use notyetdude_core::lifecycle::{IdeaAction, IdeaStatus};
use notyetdude_core::types::{DbId, Timestamp};
use notyetdude_db::models::idea::Idea;
use serde::Serialize;

/// A URL that applies `action` in one click.
#[derive(Debug, Serialize)]
pub struct ActionLinkView {
    pub action: LinkAction,
    pub url: String,
}

/// One idea as shown on the board.
#[derive(Debug, Serialize)]
pub struct IdeaCard {
    #[serde(flatten)]
    pub idea: Idea,
    pub status_label: &'static str,
    pub status_icon: &'static str,
    pub parked_ago: String,
    pub parked_on: String,
    /// "Reminder in 3 months" / "Next check-in tomorrow"; parked and snoozed only.
    pub reminder: Option<String>,
    pub remind_on: Option<String>,
    pub actions: &'static [IdeaAction],
    pub action_links: Vec<ActionLinkView>,
}

impl IdeaCard {
    pub fn build(idea: Idea, now: Timestamp, base_url: &str) -> Self {
        let status = idea.status;
        let reminder = match status {
            IdeaStatus::Parked => Some(format!("Reminder {}", days_until(idea.remind_at, now))),
            IdeaStatus::Snoozed => Some(format!(
                "Next check-in {}",
                days_until(idea.remind_at, now)
            )),
            IdeaStatus::Building | IdeaStatus::Killed => None,
        };
        let remind_on = status
            .shows_reminder()
            .then(|| format_date(idea.remind_at));
        let action_links = offered_link_actions(status)
            .into_iter()
            .map(|action| ActionLinkView {
                action,
                url: action_link_url(base_url, idea.id, action),
            })
            .collect();

        Self {
            status_label: status.label(),
            status_icon: status.icon(),
            parked_ago: time_ago(idea.parked_at, now),
            parked_on: format_date(idea.parked_at),
            reminder,
            remind_on,
            actions: status.available_actions(),
            action_links,
            idea,
        }
    }
}

/// The visitor's board: counts over every idea plus the filtered cards.
#[derive(Debug, Serialize)]
pub struct IdeaBoard {
    pub email: NormalizedEmail,
    pub filter: StatusFilter,
    pub filter_label: &'static str,
    pub counts: IdeaCounts,
    pub ideas: Vec<IdeaCard>,
}

impl IdeaBoard {
    /// Build the board from the visitor's full list (newest first).
    pub fn build(
        email: NormalizedEmail,
        filter: StatusFilter,
        ideas: Vec<Idea>,
        now: Timestamp,
        base_url: &str,
    ) -> Self {
        let counts = IdeaCounts::from_statuses(ideas.iter().map(|idea| idea.status));
        let ideas = filter
            .apply(ideas, |idea| idea.status)
            .into_iter()
            .map(|idea| IdeaCard::build(idea, now, base_url))
            .collect();

        Self {
            email,
            filter,
            filter_label: filter.label(),
            counts,
            ideas,
        }
    }
}

/// Confirmation shown after an action link has been applied.
#[derive(Debug, Serialize)]
pub struct ActionConfirmation {
    pub idea_id: DbId,
    pub idea_title: String,
    pub action: IdeaAction,
    pub status: IdeaStatus,
    pub icon: &'static str,
    pub title: &'static str,
    pub message: &'static str,
}

impl ActionConfirmation {
    pub fn new(idea: &Idea, link: LinkAction) -> Self {
        let copy = confirmation_copy(link);
        Self {
            idea_id: idea.id,
            idea_title: idea.title.clone(),
            action: link.action(),
            status: idea.status,
            icon: copy.icon,
            title: copy.title,
            message: copy.message,
        }
    }
}
