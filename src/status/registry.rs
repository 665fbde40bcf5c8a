//! Static registries for call outcomes, contact statuses, task priorities
//! and task urgency buckets.
//!
//! Every table is a module-level constant built at compile time. The lookup
//! functions are total: an unrecognized status string resolves to a
//! deterministic "Unknown" fallback instead of an error, because status
//! strings can originate from free-form external data (CSV imports, scraped
//! records) and rendering must never crash on them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Broad grouping of call outcomes, used by the follow-up due-date policy
/// and by analytics widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusCategory {
    /// The contact was not reached (no answer, voicemail).
    Incomplete,
    /// The contact was reached but the conversation was inconclusive.
    Partial,
    /// The call achieved its purpose.
    Success,
    /// The lead is no longer being pursued.
    Closed,
    /// A text-message touchpoint rather than a voice call.
    Communication,
    /// Fallback for status strings not present in the registry.
    Unknown,
}

impl fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusCategory::Incomplete => write!(f, "incomplete"),
            StatusCategory::Partial => write!(f, "partial"),
            StatusCategory::Success => write!(f, "success"),
            StatusCategory::Closed => write!(f, "closed"),
            StatusCategory::Communication => write!(f, "communication"),
            StatusCategory::Unknown => write!(f, "unknown"),
        }
    }
}

/// Display and rule metadata for a single call outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallStatusConfig {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub category: StatusCategory,
    /// Sort weight for dashboards; higher means closer to a closed deal.
    pub priority: u8,
    /// Whether landing on this outcome should spawn a follow-up task.
    pub follow_up_required: bool,
    /// Whether the contact must have a phone number for this outcome
    /// to be recorded (SMS outcomes).
    pub requires_phone: bool,
    pub color: &'static str,
    pub icon: &'static str,
}

const CALL_STATUSES: &[CallStatusConfig] = &[
    CallStatusConfig {
        id: "no_answer",
        label: "No Answer",
        description: "The call was not answered",
        category: StatusCategory::Incomplete,
        priority: 4,
        follow_up_required: true,
        requires_phone: false,
        color: "#f59e0b",
        icon: "phone-missed",
    },
    CallStatusConfig {
        id: "no_answer_voicemail",
        label: "No Answer / Voicemail",
        description: "No answer, a voicemail was left",
        category: StatusCategory::Incomplete,
        priority: 4,
        follow_up_required: true,
        requires_phone: false,
        color: "#f59e0b",
        icon: "voicemail",
    },
    CallStatusConfig {
        id: "follow_up",
        label: "Follow Up",
        description: "The contact asked to be called back",
        category: StatusCategory::Partial,
        priority: 6,
        follow_up_required: true,
        requires_phone: false,
        color: "#3b82f6",
        icon: "calendar-clock",
    },
    CallStatusConfig {
        id: "brief_contact",
        label: "Brief Contact",
        description: "A short conversation with no clear outcome",
        category: StatusCategory::Partial,
        priority: 5,
        follow_up_required: true,
        requires_phone: false,
        color: "#8b5cf6",
        icon: "phone",
    },
    CallStatusConfig {
        id: "connected",
        label: "Connected",
        description: "The contact was reached and a conversation took place",
        category: StatusCategory::Success,
        priority: 7,
        follow_up_required: false,
        requires_phone: false,
        color: "#22c55e",
        icon: "phone-call",
    },
    CallStatusConfig {
        id: "completed",
        label: "Completed",
        description: "The call finished with every point covered",
        category: StatusCategory::Success,
        priority: 8,
        follow_up_required: false,
        requires_phone: false,
        color: "#16a34a",
        icon: "check-circle",
    },
    CallStatusConfig {
        id: "deal_closed",
        label: "Deal Closed",
        description: "The deal was closed on this call",
        category: StatusCategory::Success,
        priority: 10,
        follow_up_required: false,
        requires_phone: false,
        color: "#15803d",
        icon: "badge-check",
    },
    CallStatusConfig {
        id: "not_interested",
        label: "Not Interested",
        description: "The contact is not interested in the property",
        category: StatusCategory::Closed,
        priority: 2,
        follow_up_required: false,
        requires_phone: false,
        color: "#6b7280",
        icon: "phone-off",
    },
    CallStatusConfig {
        id: "sms_sent",
        label: "SMS Sent",
        description: "A text message was sent to the contact",
        category: StatusCategory::Communication,
        priority: 3,
        follow_up_required: false,
        requires_phone: true,
        color: "#0ea5e9",
        icon: "message-square",
    },
    CallStatusConfig {
        id: "sms_received",
        label: "SMS Received",
        description: "A text message was received from the contact",
        category: StatusCategory::Communication,
        priority: 3,
        follow_up_required: true,
        requires_phone: true,
        color: "#0284c7",
        icon: "message-circle",
    },
];

const UNKNOWN_CALL_STATUS: CallStatusConfig = CallStatusConfig {
    id: "unknown",
    label: "Unknown",
    description: "Unrecognized call outcome",
    category: StatusCategory::Unknown,
    priority: 0,
    follow_up_required: false,
    requires_phone: false,
    color: "#9ca3af",
    icon: "help-circle",
};

/// Looks up the configuration for a call outcome by its label or id.
///
/// Total: unrecognized input yields the "Unknown" fallback, never an error.
pub fn call_status_config(status: &str) -> &'static CallStatusConfig {
    CALL_STATUSES
        .iter()
        .find(|c| c.label == status || c.id == status)
        .unwrap_or(&UNKNOWN_CALL_STATUS)
}

/// The pipeline status of a contact.
///
/// No transition legality is enforced anywhere: any status may follow any
/// other. The transition engine only suggests changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContactStatus {
    Open,
    #[serde(rename = "In Progress")]
    InProgress,
    Qualified,
    #[serde(rename = "Not Qualified")]
    NotQualified,
    Closed,
}

impl ContactStatus {
    /// The label used on the wire and in the registry table.
    pub fn as_label(&self) -> &'static str {
        match self {
            ContactStatus::Open => "Open",
            ContactStatus::InProgress => "In Progress",
            ContactStatus::Qualified => "Qualified",
            ContactStatus::NotQualified => "Not Qualified",
            ContactStatus::Closed => "Closed",
        }
    }
}

impl fmt::Display for ContactStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_label())
    }
}

/// Display metadata for a contact pipeline status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactStatusConfig {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    /// Sort weight for pipeline views; higher means further along.
    pub priority: u8,
    pub color: &'static str,
}

const CONTACT_STATUSES: &[ContactStatusConfig] = &[
    ContactStatusConfig {
        id: "open",
        label: "Open",
        description: "New lead, not yet worked",
        priority: 1,
        color: "#3b82f6",
    },
    ContactStatusConfig {
        id: "in_progress",
        label: "In Progress",
        description: "Actively being worked",
        priority: 2,
        color: "#f59e0b",
    },
    ContactStatusConfig {
        id: "qualified",
        label: "Qualified",
        description: "Confirmed as a viable prospect",
        priority: 3,
        color: "#22c55e",
    },
    ContactStatusConfig {
        id: "not_qualified",
        label: "Not Qualified",
        description: "Ruled out as a prospect",
        priority: 0,
        color: "#6b7280",
    },
    ContactStatusConfig {
        id: "closed",
        label: "Closed",
        description: "Deal closed",
        priority: 4,
        color: "#15803d",
    },
];

const UNKNOWN_CONTACT_STATUS: ContactStatusConfig = ContactStatusConfig {
    id: "unknown",
    label: "Unknown",
    description: "Unrecognized contact status",
    priority: 0,
    color: "#9ca3af",
};

/// Looks up the configuration for a contact status by its label or id.
/// Same total-lookup contract as [`call_status_config`].
pub fn contact_status_config(status: &str) -> &'static ContactStatusConfig {
    CONTACT_STATUSES
        .iter()
        .find(|c| c.label == status || c.id == status)
        .unwrap_or(&UNKNOWN_CONTACT_STATUS)
}

/// Priority of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    High,
    Medium,
    Low,
}

impl TaskPriority {
    /// Sort weight: high outranks medium outranks low.
    pub fn weight(&self) -> u8 {
        match self {
            TaskPriority::High => 3,
            TaskPriority::Medium => 2,
            TaskPriority::Low => 1,
        }
    }

    /// Default due-date offset in days when a task of this priority is
    /// created without an explicit due date.
    pub fn default_due_offset_days(&self) -> i64 {
        match self {
            TaskPriority::High => 1,
            TaskPriority::Medium => 3,
            TaskPriority::Low => 7,
        }
    }

    /// Parses a priority string, defaulting to `Medium` for anything
    /// unrecognized.
    pub fn parse(s: &str) -> TaskPriority {
        match s.to_lowercase().as_str() {
            "high" => TaskPriority::High,
            "low" => TaskPriority::Low,
            _ => TaskPriority::Medium,
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskPriority::High => write!(f, "high"),
            TaskPriority::Medium => write!(f, "medium"),
            TaskPriority::Low => write!(f, "low"),
        }
    }
}

/// Display metadata for a task priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityConfig {
    pub id: &'static str,
    pub label: &'static str,
    pub weight: u8,
    pub default_due_offset_days: i64,
    pub color: &'static str,
}

const PRIORITIES: &[PriorityConfig] = &[
    PriorityConfig {
        id: "high",
        label: "High",
        weight: 3,
        default_due_offset_days: 1,
        color: "#ef4444",
    },
    PriorityConfig {
        id: "medium",
        label: "Medium",
        weight: 2,
        default_due_offset_days: 3,
        color: "#f59e0b",
    },
    PriorityConfig {
        id: "low",
        label: "Low",
        weight: 1,
        default_due_offset_days: 7,
        color: "#22c55e",
    },
];

/// Looks up the configuration for a priority string (case-insensitive).
/// Unrecognized input falls back to the medium entry.
pub fn priority_config(priority: &str) -> &'static PriorityConfig {
    let lower = priority.to_lowercase();
    PRIORITIES
        .iter()
        .find(|c| c.id == lower)
        .unwrap_or(&PRIORITIES[1])
}

/// Display metadata for a computed task urgency bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskStatusConfig {
    pub id: &'static str,
    pub label: &'static str,
    /// Highlight weight: higher means more urgent in listing UIs.
    pub weight: u8,
    pub color: &'static str,
}

const TASK_STATUSES: &[TaskStatusConfig] = &[
    TaskStatusConfig {
        id: "overdue",
        label: "Overdue",
        weight: 5,
        color: "#ef4444",
    },
    TaskStatusConfig {
        id: "due-today",
        label: "Due Today",
        weight: 4,
        color: "#f59e0b",
    },
    TaskStatusConfig {
        id: "upcoming",
        label: "Upcoming",
        weight: 3,
        color: "#3b82f6",
    },
    TaskStatusConfig {
        id: "future",
        label: "Future",
        weight: 2,
        color: "#6b7280",
    },
    TaskStatusConfig {
        id: "no-due-date",
        label: "No Due Date",
        weight: 1,
        color: "#9ca3af",
    },
    TaskStatusConfig {
        id: "completed",
        label: "Completed",
        weight: 0,
        color: "#22c55e",
    },
];

const UNKNOWN_TASK_STATUS: TaskStatusConfig = TaskStatusConfig {
    id: "unknown",
    label: "Unknown",
    weight: 0,
    color: "#9ca3af",
};

/// Looks up the configuration for a task urgency bucket by id.
/// Same total-lookup contract as [`call_status_config`].
pub fn task_status_config(status: &str) -> &'static TaskStatusConfig {
    TASK_STATUSES
        .iter()
        .find(|c| c.id == status)
        .unwrap_or(&UNKNOWN_TASK_STATUS)
}
