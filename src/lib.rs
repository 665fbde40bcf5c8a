//! Dealflow — the status workflow engine behind a real-estate CRM.
//!
//! Call outcomes, contact statuses and task priorities live in immutable
//! registries ([`status`]). A pure transition engine turns a call-outcome
//! change into a list of side-effect [`Action`](status::Action)s, and the
//! [`executor`] performs them against the CRM REST API, reporting success
//! or failure per action. Task listing helpers ([`tasks`]) derive urgency
//! buckets and display ordering from the wall clock.
//!
//! Decision logic never does I/O and never fails; only execution can fail,
//! and only one action at a time.

pub mod api;
pub mod config;
pub mod error;
pub mod executor;
pub mod status;
pub mod tasks;

pub use api::{ApiError, Call, Contact, CrmApi, CrmClient, NewTask, Task};
pub use config::DealflowConfig;
pub use error::DealflowError;
pub use executor::{ActionResult, ExecutionOutput, apply_status_change, execute_actions};
pub use status::{
    Action, ContactStatus, PreconditionError, StatusCategory, TaskPriority, call_status_config,
    check_preconditions, contact_status_config, default_follow_up_date, handle_status_change,
    priority_config, task_status_config,
};
pub use tasks::{TaskUrgency, sort_tasks_by_priority, task_urgency, task_urgency_score};
