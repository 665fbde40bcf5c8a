mod client;
mod error;
mod types;

pub use client::{CrmApi, CrmClient};
pub use error::ApiError;
pub use types::{Call, Contact, NewTask, Task, UpdateContactStatusRequest};
