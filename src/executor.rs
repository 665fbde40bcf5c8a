//! Executes the side effects decided by the transition engine.
//!
//! Actions run sequentially in emitted order, each against the CRM API,
//! each with its own success/failure outcome. There is no transactionality:
//! a failure in one action neither rolls back earlier actions nor blocks
//! later ones, and partial application is the accepted failure mode.

use tracing::{debug, warn};
use uuid::Uuid;

use crate::api::{ApiError, Call, Contact, CrmApi, Task};
use crate::status::{Action, PreconditionError, check_preconditions, handle_status_change};

/// The record produced by a successfully executed action.
#[derive(Debug, Clone, PartialEq)]
pub enum ExecutionOutput {
    TaskCreated(Task),
    ContactUpdated(Contact),
}

/// One action paired with its individual outcome.
#[derive(Debug)]
pub struct ActionResult {
    pub action: Action,
    pub outcome: Result<ExecutionOutput, ApiError>,
}

impl ActionResult {
    pub fn succeeded(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Performs each action against the API, collecting per-action outcomes.
///
/// Errors are caught per action and recorded in the result list; the caller
/// is expected to surface each failed action to the user while leaving the
/// successful siblings in effect.
pub async fn execute_actions(api: &impl CrmApi, actions: Vec<Action>) -> Vec<ActionResult> {
    let batch_id = Uuid::new_v4();
    let mut results = Vec::with_capacity(actions.len());

    for action in actions {
        let outcome = match &action {
            Action::CreateTask(task) => {
                debug!(%batch_id, title = %task.title, "creating follow-up task");
                api.create_task(task).await.map(ExecutionOutput::TaskCreated)
            }
            Action::UpdateContactStatus {
                contact_id,
                new_status,
            } => {
                debug!(%batch_id, %contact_id, status = %new_status, "updating contact status");
                api.update_contact_status(contact_id, *new_status)
                    .await
                    .map(ExecutionOutput::ContactUpdated)
            }
        };

        if let Err(error) = &outcome {
            warn!(%batch_id, %error, "status change action failed");
        }

        results.push(ActionResult { action, outcome });
    }

    results
}

/// Full status-change flow: validate preconditions, compute the action list,
/// execute it.
///
/// A precondition failure blocks the whole change before any dispatch;
/// API failures after that point are reported per action in the result list.
pub async fn apply_status_change(
    api: &impl CrmApi,
    old_status: &str,
    new_status: &str,
    call: &Call,
    contact: &Contact,
) -> Result<Vec<ActionResult>, PreconditionError> {
    check_preconditions(new_status, contact)?;
    let actions = handle_status_change(old_status, new_status, call, contact);
    Ok(execute_actions(api, actions).await)
}
