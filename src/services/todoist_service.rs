use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::de::DeserializeOwned;

use crate::{
    config::Config,
    models::{Project, Task, User},
    utils::FetchError,
};

/// As três listagens da API REST do Todoist usadas pelo agregador
#[async_trait]
pub trait TodoistApi: Send + Sync {
    async fn fetch_projects(&self) -> Result<Vec<Project>, FetchError>;

    async fn fetch_tasks(&self) -> Result<Vec<Task>, FetchError>;

    async fn fetch_collaborators(&self, project_id: &str) -> Result<Vec<User>, FetchError>;
}

/// Cliente reqwest para a API do Todoist, com bearer token fixo
#[derive(Clone)]
pub struct TodoistClient {
    http: reqwest::Client,
    api_base: String,
    bearer_token: String,
}

impl TodoistClient {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| FetchError::Request(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            api_base: config.api_base.clone(),
            bearer_token: config.bearer_token.clone(),
        })
    }

    async fn get_list<T: DeserializeOwned + Send>(&self, path: &str) -> Result<Vec<T>, FetchError> {
        let url = format!("{}{}", self.api_base, path);
        log::debug!("📡 GET {}", url);

        // Token vazio também é enviado: o Todoist responde 401
        let request = self
            .http
            .get(&url)
            .header(AUTHORIZATION, format!("Bearer {}", self.bearer_token))
            .header(ACCEPT, "application/json")
            .build()
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let response = self
            .http
            .execute(request)
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        serde_json::from_slice(&bytes).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

#[async_trait]
impl TodoistApi for TodoistClient {
    async fn fetch_projects(&self) -> Result<Vec<Project>, FetchError> {
        self.get_list("/projects").await
    }

    async fn fetch_tasks(&self) -> Result<Vec<Task>, FetchError> {
        self.get_list("/tasks").await
    }

    async fn fetch_collaborators(&self, project_id: &str) -> Result<Vec<User>, FetchError> {
        let path = format!("/projects/{}/collaborators", urlencoding::encode(project_id));
        self.get_list(&path).await
    }
}
