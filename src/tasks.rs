//! Task urgency computation and list ordering.
//!
//! Urgency is a function of the wall clock against the task's due date, so
//! it is recomputed on every read and never stored. Listing UIs consume
//! these helpers for ordering and highlighting only; nothing here makes a
//! scheduling decision.

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::Task;
use crate::status::{TaskStatusConfig, task_status_config};

/// The derived urgency bucket of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskUrgency {
    Overdue,
    DueToday,
    Upcoming,
    Future,
    Completed,
    NoDueDate,
}

impl TaskUrgency {
    pub fn as_id(&self) -> &'static str {
        match self {
            TaskUrgency::Overdue => "overdue",
            TaskUrgency::DueToday => "due-today",
            TaskUrgency::Upcoming => "upcoming",
            TaskUrgency::Future => "future",
            TaskUrgency::Completed => "completed",
            TaskUrgency::NoDueDate => "no-due-date",
        }
    }

    /// Display metadata for this bucket from the registry.
    pub fn config(&self) -> &'static TaskStatusConfig {
        task_status_config(self.as_id())
    }
}

impl fmt::Display for TaskUrgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_id())
    }
}

fn is_completed(task: &Task) -> bool {
    task.completed || task.status.as_deref() == Some("completed")
}

/// Whole days until the due date, rounded up. Zero means due within today,
/// negative means overdue.
fn days_until(due: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let secs = (due - now).num_seconds();
    (secs as f64 / 86_400.0).ceil() as i64
}

/// Computes the urgency bucket of a task against the current wall clock.
pub fn task_urgency(task: &Task) -> TaskUrgency {
    task_urgency_at(task, Utc::now())
}

/// [`task_urgency`] against an explicit clock.
///
/// Completed overrides everything; a missing due date yields `NoDueDate`;
/// otherwise the rounded-up day difference decides: negative is overdue,
/// zero is due today, up to three days out is upcoming, beyond that future.
pub fn task_urgency_at(task: &Task, now: DateTime<Utc>) -> TaskUrgency {
    if is_completed(task) {
        return TaskUrgency::Completed;
    }
    let Some(due) = task.due_date else {
        return TaskUrgency::NoDueDate;
    };

    let days = days_until(due, now);
    if days < 0 {
        TaskUrgency::Overdue
    } else if days == 0 {
        TaskUrgency::DueToday
    } else if days <= 3 {
        TaskUrgency::Upcoming
    } else {
        TaskUrgency::Future
    }
}

/// Orders a task list for display: incomplete before completed, then by
/// priority weight descending, then by due date ascending with dated tasks
/// before undated ones, then newest-created first as the final tiebreak.
pub fn sort_tasks_by_priority(tasks: &mut [Task]) {
    tasks.sort_by(|a, b| {
        // false < true, so incomplete tasks come first.
        is_completed(a)
            .cmp(&is_completed(b))
            .then_with(|| b.priority.weight().cmp(&a.priority.weight()))
            .then_with(|| match (a.due_date, b.due_date) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            })
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
}

/// Scores a task for highlighting: `priority weight * 10` plus a time
/// component. Overdue tasks accrue five points per day overdue; otherwise
/// a step function of how close the due date is.
pub fn task_urgency_score(task: &Task) -> u32 {
    task_urgency_score_at(task, Utc::now())
}

/// [`task_urgency_score`] against an explicit clock.
pub fn task_urgency_score_at(task: &Task, now: DateTime<Utc>) -> u32 {
    let weight = u32::from(task.priority.weight());

    let time_component = match task.due_date {
        None => 0,
        Some(due) => {
            let days = days_until(due, now);
            if days < 0 {
                days.unsigned_abs() as u32 * 5
            } else if days <= 1 {
                20
            } else if days <= 3 {
                10
            } else if days <= 7 {
                5
            } else {
                0
            }
        }
    };

    weight * 10 + time_component
}
