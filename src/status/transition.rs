//! The call-status transition engine.
//!
//! Given a call-outcome change, [`handle_status_change`] decides what else
//! must happen and returns the result as a list of [`Action`]s instead of
//! performing any I/O. The decision layer is pure and infallible; only the
//! executor that consumes the list can fail, and only per action.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::registry::{ContactStatus, StatusCategory, TaskPriority, call_status_config, contact_status_config};
use crate::api::{Call, Contact, NewTask};

/// A side effect suggested by a call-status change.
///
/// Ephemeral: produced synchronously during the change, consumed immediately
/// by the executor, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum Action {
    CreateTask(NewTask),
    UpdateContactStatus {
        contact_id: String,
        new_status: ContactStatus,
    },
}

/// A status change blocked before dispatch because required contact data
/// is missing. Surfaced to the user as a validation message, never sent
/// to the API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreconditionError {
    #[error("\"{status}\" requires a phone number on the contact")]
    PhoneRequired { status: String },

    #[error("A contact is required before recording a call outcome")]
    MissingContact,
}

/// Checks that the contact carries the data the new outcome needs.
///
/// SMS outcomes require a phone number; everything requires a persisted
/// contact. This runs before [`handle_status_change`] so an impossible
/// change is rejected locally instead of attempted and failed remotely.
pub fn check_preconditions(new_status: &str, contact: &Contact) -> Result<(), PreconditionError> {
    if contact.id.trim().is_empty() {
        return Err(PreconditionError::MissingContact);
    }

    let config = call_status_config(new_status);
    let has_phone = contact
        .phone
        .as_deref()
        .is_some_and(|p| !p.trim().is_empty());
    if config.requires_phone && !has_phone {
        return Err(PreconditionError::PhoneRequired {
            status: config.label.to_string(),
        });
    }

    Ok(())
}

/// Default due date for a follow-up task generated by a status change,
/// derived from the new status's category rather than the status itself.
///
/// This is a courtesy default; the user can edit the task before it is
/// created.
pub fn default_follow_up_date(status: &str) -> DateTime<Utc> {
    default_follow_up_date_from(status, Utc::now())
}

/// [`default_follow_up_date`] against an explicit clock.
pub fn default_follow_up_date_from(status: &str, now: DateTime<Utc>) -> DateTime<Utc> {
    match call_status_config(status).category {
        StatusCategory::Incomplete => now + Duration::hours(24),
        StatusCategory::Partial => now + Duration::days(3),
        _ => now + Duration::days(7),
    }
}

/// Computes the side effects of changing a call's outcome from `old_status`
/// to `new_status`.
///
/// Rules are evaluated independently; every one that matches emits, in this
/// order:
///
/// 1. A follow-up task when the change moves *into* an outcome that needs
///    follow-up from one that did not.
/// 2. "Deal Closed" pushes a not-yet-Closed contact to Closed.
/// 3. "Not Interested" pushes a not-yet-Not-Qualified contact to Not
///    Qualified.
/// 4. "Connected"/"Completed" pushes an Open contact to In Progress.
///
/// Rule 1 compares the old and new outcome so repeated no-op changes do not
/// stack duplicate follow-up tasks. Rules 2 through 4 deliberately ignore the
/// old outcome: re-applying "Deal Closed" still corrects a contact that is
/// not Closed yet. Keep that asymmetry.
pub fn handle_status_change(
    old_status: &str,
    new_status: &str,
    call: &Call,
    contact: &Contact,
) -> Vec<Action> {
    handle_status_change_at(old_status, new_status, call, contact, Utc::now())
}

/// [`handle_status_change`] against an explicit clock.
pub fn handle_status_change_at(
    old_status: &str,
    new_status: &str,
    call: &Call,
    contact: &Contact,
    now: DateTime<Utc>,
) -> Vec<Action> {
    let old_config = call_status_config(old_status);
    let new_config = call_status_config(new_status);
    let contact_config = contact_status_config(&contact.status);

    let mut actions = Vec::new();

    // Rule 1: follow-up creation on a false -> true flip of the flag.
    if new_config.follow_up_required && !old_config.follow_up_required {
        let name = contact
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or("contact");
        actions.push(Action::CreateTask(NewTask {
            title: format!("Follow up on {} call", new_config.label.to_lowercase()),
            description: format!(
                "Follow up with {name}. Last call outcome: {}",
                new_config.description
            ),
            contact_id: contact.id.clone(),
            call_id: Some(call.id.clone()),
            due_date: default_follow_up_date_from(new_status, now),
            priority: TaskPriority::High,
        }));
    }

    // Rule 2: a closed deal closes the contact.
    if new_config.id == "deal_closed" && contact_config.id != "closed" {
        actions.push(Action::UpdateContactStatus {
            contact_id: contact.id.clone(),
            new_status: ContactStatus::Closed,
        });
    }

    // Rule 3: a not-interested contact is not qualified.
    if new_config.id == "not_interested" && contact_config.id != "not_qualified" {
        actions.push(Action::UpdateContactStatus {
            contact_id: contact.id.clone(),
            new_status: ContactStatus::NotQualified,
        });
    }

    // Rule 4: a real conversation moves an open contact into the pipeline.
    if matches!(new_config.id, "connected" | "completed") && contact_config.id == "open" {
        actions.push(Action::UpdateContactStatus {
            contact_id: contact.id.clone(),
            new_status: ContactStatus::InProgress,
        });
    }

    actions
}
