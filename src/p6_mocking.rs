// Pattern 6: Mocks, Fakes and Stub Servers
// Demonstrates replacing network calls in tests: generated mocks (mockall),
// hand-written fakes injected at the call site, and a local HTTP stub
// server (wiremock) for the real client.

use crate::config::DrillsConfig;
use crate::error::Result;
use crate::p4_parameterizing::{STATUS_OK, STATUS_UNAUTHORIZED};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

// ============================================================================
// Example: The Dependency Behind a Trait
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Credentials {
            username: username.into(),
            password: password.into(),
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialChecker: Send + Sync {
    async fn check_user_credentials(&self, credentials: &Credentials) -> Result<bool>;
}

/// Maps the checker's answer to a status code.
pub async fn login<C>(checker: &C, credentials: &Credentials) -> Result<u16>
where
    C: CredentialChecker + ?Sized,
{
    if checker.check_user_credentials(credentials).await? {
        Ok(STATUS_OK)
    } else {
        Ok(STATUS_UNAUTHORIZED)
    }
}

// Real implementation
pub struct HttpCredentialChecker {
    client: Client,
    url: String,
}

impl HttpCredentialChecker {
    pub fn new(url: impl Into<String>) -> Self {
        HttpCredentialChecker {
            client: Client::new(),
            url: url.into(),
        }
    }

    pub fn from_config(config: &DrillsConfig) -> Self {
        Self::new(config.login_url.clone())
    }
}

#[async_trait]
impl CredentialChecker for HttpCredentialChecker {
    /// A non-success status means "invalid". A success status is valid unless
    /// the body is the JSON literal `false`.
    async fn check_user_credentials(&self, credentials: &Credentials) -> Result<bool> {
        tracing::debug!(url = %self.url, user = %credentials.username, "checking credentials");

        let response = self.client.post(&self.url).json(credentials).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::info!(%status, "credentials rejected");
            return Ok(false);
        }

        let body = response.text().await?;
        let accepted = !matches!(
            serde_json::from_str::<serde_json::Value>(body.trim()),
            Ok(serde_json::Value::Bool(false))
        );
        Ok(accepted)
    }
}

// ============================================================================
// Example: Todo Lookups
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub user_id: u64,
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoSource: Send + Sync {
    async fn fetch_todo(&self, id: u64) -> Result<Todo>;
}

pub async fn is_todo_completed<S>(source: &S, id: u64) -> Result<bool>
where
    S: TodoSource + ?Sized,
{
    let todo = source.fetch_todo(id).await?;
    Ok(todo.completed)
}

pub struct HttpTodoSource {
    client: Client,
    base_url: String,
}

impl HttpTodoSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        HttpTodoSource {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &DrillsConfig) -> Self {
        Self::new(config.todos_url.clone())
    }

    fn todo_url(&self, id: u64) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), id)
    }
}

#[async_trait]
impl TodoSource for HttpTodoSource {
    async fn fetch_todo(&self, id: u64) -> Result<Todo> {
        let url = self.todo_url(id);
        tracing::debug!(%url, "fetching todo");

        let todo = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<Todo>()
            .await?;
        Ok(todo)
    }
}

// ============================================================================
// Example: Generated Mocks
// ============================================================================

#[cfg(test)]
fn fake_check_credentials(credentials: &Credentials) -> bool {
    credentials.username == "existing_user" && credentials.password == "valid_password"
}


// ============================================================================
// Example: Hand-Written Fakes
// ============================================================================


// ============================================================================
// Example: Stub HTTP Server
// ============================================================================
