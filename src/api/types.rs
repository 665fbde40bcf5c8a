//! Wire types for the CRM REST API.
//!
//! All bodies are camelCase JSON, matching the persistence service. Records
//! are owned entirely by that service; this crate reads and writes them
//! through the API and never caches them beyond a single request/response.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::status::{ContactStatus, TaskPriority};

/// A CRM contact as returned by the API.
///
/// `status` stays a free-form string on the read path: contacts imported
/// from CSV or scraped sources can carry values outside the enumerated set,
/// and the registry's fallback lookup handles those.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A logged call against a contact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Call {
    pub id: String,
    pub contact_id: String,
    /// Current call outcome label, e.g. "No Answer" or "Deal Closed".
    #[serde(default)]
    pub outcome: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub duration_secs: Option<u32>,
    pub created_at: DateTime<Utc>,
}

/// A task as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub contact_id: String,
    #[serde(default)]
    pub call_id: Option<String>,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
    pub priority: TaskPriority,
    #[serde(default)]
    pub completed: bool,
    /// Raw status string from the service, if it tracks one alongside
    /// the completed flag.
    #[serde(default)]
    pub status: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Body for `POST /tasks`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub contact_id: String,
    #[serde(default)]
    pub call_id: Option<String>,
    pub due_date: DateTime<Utc>,
    pub priority: TaskPriority,
}

/// Body for `PUT /contacts/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateContactStatusRequest {
    pub status: ContactStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_serializes_camel_case_iso_dates() {
        let task = NewTask {
            title: "Follow up on no answer call".into(),
            description: "Follow up with Jane Doe".into(),
            contact_id: "c-1".into(),
            call_id: Some("call-9".into()),
            due_date: "2026-08-25T10:00:00Z".parse().unwrap(),
            priority: TaskPriority::High,
        };
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["contactId"], "c-1");
        assert_eq!(json["callId"], "call-9");
        let due: DateTime<Utc> = json["dueDate"].as_str().unwrap().parse().unwrap();
        assert_eq!(due, task.due_date);
        assert_eq!(json["priority"], "high");
    }

    #[test]
    fn contact_deserializes_with_missing_optionals() {
        let json = r#"{
            "id": "c-1",
            "status": "Open",
            "createdAt": "2026-08-01T00:00:00Z",
            "updatedAt": "2026-08-01T00:00:00Z"
        }"#;
        let contact: Contact = serde_json::from_str(json).unwrap();
        assert_eq!(contact.id, "c-1");
        assert_eq!(contact.name, None);
        assert_eq!(contact.phone, None);
        assert_eq!(contact.status, "Open");
    }

    #[test]
    fn contact_accepts_free_form_status() {
        let json = r#"{
            "id": "c-2",
            "status": "Imported Lead",
            "createdAt": "2026-08-01T00:00:00Z",
            "updatedAt": "2026-08-01T00:00:00Z"
        }"#;
        let contact: Contact = serde_json::from_str(json).unwrap();
        assert_eq!(contact.status, "Imported Lead");
    }

    #[test]
    fn update_contact_status_body() {
        let body = UpdateContactStatusRequest {
            status: ContactStatus::NotQualified,
        };
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"status":"Not Qualified"}"#);
    }

    #[test]
    fn task_roundtrip() {
        let task = Task {
            id: "t-1".into(),
            title: "Call back".into(),
            description: String::new(),
            contact_id: "c-1".into(),
            call_id: None,
            due_date: None,
            priority: TaskPriority::Medium,
            completed: false,
            status: None,
            created_at: "2026-08-01T00:00:00Z".parse().unwrap(),
        };
        let json = serde_json::to_string(&task).unwrap();
        let parsed: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, task);
    }
}
