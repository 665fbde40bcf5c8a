use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{Contact, NewTask, Task, UpdateContactStatusRequest};
use crate::config::DealflowConfig;
use crate::status::ContactStatus;

const DEFAULT_BASE_URL: &str = "https://api.dealflow.app/v1";

/// The two REST collaborators the status engine depends on.
///
/// Kept as a trait so executor logic can be tested against in-memory
/// implementations without a network.
#[allow(async_fn_in_trait)]
pub trait CrmApi {
    /// `POST /tasks` — create a task, returning the created record.
    async fn create_task(&self, task: &NewTask) -> Result<Task, ApiError>;

    /// `PUT /contacts/{id}` — set a contact's pipeline status, returning
    /// the updated record.
    async fn update_contact_status(
        &self,
        contact_id: &str,
        status: ContactStatus,
    ) -> Result<Contact, ApiError>;
}

/// HTTP client for the CRM persistence service.
pub struct CrmClient {
    token: String,
    client: Client,
    base_url: String,
}

impl CrmClient {
    pub fn new(token: String) -> Self {
        Self::with_base_url(token, DEFAULT_BASE_URL.to_string())
    }

    /// Create a client pointing at a custom base URL (useful for testing).
    pub fn with_base_url(token: String, base_url: String) -> Self {
        Self::with_timeout(token, base_url, Duration::from_secs(30))
    }

    /// Create a client from a loaded configuration.
    pub fn from_config(config: &DealflowConfig) -> Self {
        Self::with_timeout(
            config.api_token.clone(),
            config.api_base_url.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    fn with_timeout(token: String, base_url: String, timeout: Duration) -> Self {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(timeout)
            .build()
            .expect("failed to build HTTP client");
        Self {
            token,
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ApiError::Parse(e.to_string()))
    }

    fn map_transport(e: reqwest::Error) -> ApiError {
        if e.is_timeout() {
            ApiError::Timeout
        } else {
            ApiError::Transport(e)
        }
    }
}

impl CrmApi for CrmClient {
    async fn create_task(&self, task: &NewTask) -> Result<Task, ApiError> {
        let response = self
            .client
            .post(format!("{}/tasks", self.base_url))
            .bearer_auth(&self.token)
            .json(task)
            .send()
            .await
            .map_err(Self::map_transport)?;

        Self::read_json(response).await
    }

    async fn update_contact_status(
        &self,
        contact_id: &str,
        status: ContactStatus,
    ) -> Result<Contact, ApiError> {
        let response = self
            .client
            .put(format!("{}/contacts/{contact_id}", self.base_url))
            .bearer_auth(&self.token)
            .json(&UpdateContactStatusRequest { status })
            .send()
            .await
            .map_err(Self::map_transport)?;

        Self::read_json(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::TaskPriority;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn new_task() -> NewTask {
        NewTask {
            title: "Follow up on no answer call".into(),
            description: "Follow up with Jane Doe".into(),
            contact_id: "c-1".into(),
            call_id: Some("call-9".into()),
            due_date: "2026-08-25T10:00:00Z".parse().unwrap(),
            priority: TaskPriority::High,
        }
    }

    #[tokio::test]
    async fn create_task_posts_and_parses() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/tasks"))
            .and(header("authorization", "Bearer test-token"))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": "t-1",
                "title": "Follow up on no answer call",
                "description": "Follow up with Jane Doe",
                "contactId": "c-1",
                "callId": "call-9",
                "dueDate": "2026-08-25T10:00:00Z",
                "priority": "high",
                "completed": false,
                "createdAt": "2026-08-24T09:00:00Z"
            })))
            .mount(&server)
            .await;

        let client = CrmClient::with_base_url("test-token".into(), server.uri());
        let task = client.create_task(&new_task()).await.unwrap();

        assert_eq!(task.id, "t-1");
        assert_eq!(task.contact_id, "c-1");
        assert_eq!(task.priority, TaskPriority::High);
        assert!(!task.completed);
    }

    #[tokio::test]
    async fn create_task_surfaces_non_2xx() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/tasks"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let client = CrmClient::with_base_url("test-token".into(), server.uri());
        let err = client.create_task(&new_task()).await.unwrap_err();

        match err {
            ApiError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("expected ApiError::Api, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn update_contact_status_puts_label_body() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/contacts/c-1"))
            .and(body_json(json!({"status": "Closed"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "c-1",
                "name": "Jane Doe",
                "status": "Closed",
                "createdAt": "2026-08-01T00:00:00Z",
                "updatedAt": "2026-08-24T09:00:00Z"
            })))
            .mount(&server)
            .await;

        let client = CrmClient::with_base_url("test-token".into(), server.uri());
        let contact = client
            .update_contact_status("c-1", ContactStatus::Closed)
            .await
            .unwrap();

        assert_eq!(contact.id, "c-1");
        assert_eq!(contact.status, "Closed");
    }

    #[tokio::test]
    async fn update_contact_status_surfaces_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/contacts/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_string("contact not found"))
            .mount(&server)
            .await;

        let client = CrmClient::with_base_url("test-token".into(), server.uri());
        let err = client
            .update_contact_status("missing", ContactStatus::Closed)
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(404));
    }

    #[tokio::test]
    async fn garbage_body_is_a_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/tasks"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>nope</html>"))
            .mount(&server)
            .await;

        let client = CrmClient::with_base_url("test-token".into(), server.uri());
        let err = client.create_task(&new_task()).await.unwrap_err();

        assert!(matches!(err, ApiError::Parse(_)));
    }

    #[test]
    fn from_config_uses_configured_base_url() {
        let config = DealflowConfig {
            api_base_url: "http://localhost:8080/v1/".into(),
            api_token: "tk".into(),
            request_timeout_secs: 5,
        };
        let client = CrmClient::from_config(&config);
        assert_eq!(client.base_url, "http://localhost:8080/v1");
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = CrmClient::with_base_url("tk".into(), "http://localhost:9/api/".into());
        assert_eq!(client.base_url, "http://localhost:9/api");
    }
}
