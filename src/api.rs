//! REST client for the task API
//!
//! Thin blocking wrapper over `ureq`. All task authority lives on the
//! server; this client only moves JSON in and out. Non-2xx responses
//! surface as errors (`ureq::Error::Status`), callers decide how loudly
//! to report them.

use std::time::Duration;

use serde::Deserialize;

use crate::error::Result;
use crate::model::{Task, TaskPayload};

/// Default API base when neither CLI flag nor config provide one
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

const TIMEOUT_SECS: u64 = 10;

/// Response envelope of GET /api/v1/tasks
#[derive(Debug, Deserialize)]
struct TaskListResponse {
    #[serde(default)]
    tasks: Vec<Task>,
}

/// Response envelope of GET /api/v1/stages
#[derive(Debug, Deserialize)]
struct StageListResponse {
    #[serde(default)]
    stages: Vec<String>,
}

/// Blocking client for the task API
pub struct ApiClient {
    agent: ureq::Agent,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given base URL (e.g. `http://localhost:3000`)
    pub fn new(base_url: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .build();

        Self {
            agent,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// The configured base URL (shown in the header bar)
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn tasks_url(&self) -> String {
        format!("{}/api/v1/tasks", self.base_url)
    }

    fn task_url(&self, id: &str) -> String {
        format!("{}/api/v1/tasks/{}", self.base_url, id)
    }

    fn stages_url(&self) -> String {
        format!("{}/api/v1/stages", self.base_url)
    }

    /// Fetch the full task collection, in server order
    pub fn list_tasks(&self) -> Result<Vec<Task>> {
        let response = self.agent.get(&self.tasks_url()).call()?;
        let body: TaskListResponse = response.into_json()?;
        Ok(body.tasks)
    }

    /// Fetch the known stage names
    pub fn list_stages(&self) -> Result<Vec<String>> {
        let response = self.agent.get(&self.stages_url()).call()?;
        let body: StageListResponse = response.into_json()?;
        Ok(body.stages)
    }

    /// Fetch a single task by identifier
    pub fn get_task(&self, id: &str) -> Result<Task> {
        let response = self.agent.get(&self.task_url(id)).call()?;
        Ok(response.into_json()?)
    }

    /// Create a new task. The server assigns the identifier.
    pub fn create_task(&self, payload: &TaskPayload) -> Result<()> {
        self.agent.post(&self.tasks_url()).send_json(payload)?;
        Ok(())
    }

    /// Update an existing task
    pub fn update_task(&self, id: &str, payload: &TaskPayload) -> Result<()> {
        self.agent.put(&self.task_url(id)).send_json(payload)?;
        Ok(())
    }

    /// Delete a task by identifier
    pub fn delete_task(&self, id: &str) -> Result<()> {
        self.agent.delete(&self.task_url(id)).call()?;
        Ok(())
    }
}
