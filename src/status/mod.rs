mod registry;
mod transition;

pub use registry::{
    CallStatusConfig, ContactStatus, ContactStatusConfig, PriorityConfig, StatusCategory,
    TaskPriority, TaskStatusConfig, call_status_config, contact_status_config, priority_config,
    task_status_config,
};
pub use transition::{
    Action, PreconditionError, check_preconditions, default_follow_up_date,
    default_follow_up_date_from, handle_status_change, handle_status_change_at,
};
