use std::sync::Arc;

use crate::{
    config::{Config, FetchMode},
    models::{AggregateResponse, Project, Task, User, UserIndex},
    services::todoist_service::TodoistApi,
    utils::{AppError, Resource},
};

/// Resultado de uma agregação: projetos e tarefas como vieram da API,
/// mais o índice de usuários usado só para exibição
#[derive(Debug, Clone)]
pub struct Aggregate {
    pub projects: Vec<Project>,
    pub tasks: Vec<Task>,
    pub users: UserIndex,
}

impl Aggregate {
    pub fn from_parts(projects: Vec<Project>, tasks: Vec<Task>, users: &[User]) -> Self {
        Self {
            projects,
            tasks,
            users: UserIndex::from_users(users),
        }
    }

    /// Uma linha por tarefa, com o nome do responsável resolvido
    pub fn report_lines(&self) -> Vec<String> {
        self.tasks
            .iter()
            .map(|task| format_task_line(task, &self.users))
            .collect()
    }

    pub fn into_response(self) -> AggregateResponse {
        AggregateResponse {
            projects: self.projects,
            tasks: self.tasks,
        }
    }
}

/// `ID: t1, Assignee: u1:Alice, Project: 1, Content: Buy milk, Completed: false`
///
/// Responsável sem usuário correspondente sai com nome vazio (`u9:`).
pub fn format_task_line(task: &Task, users: &UserIndex) -> String {
    format!(
        "ID: {}, Assignee: {}:{}, Project: {}, Content: {}, Completed: {}",
        task.id,
        task.assignee_id,
        users.name_for(&task.assignee_id).unwrap_or(""),
        task.project_id,
        task.content,
        task.completed
    )
}

#[derive(Clone)]
pub struct Aggregator {
    api: Arc<dyn TodoistApi>,
    collaborators_project_id: String,
    fetch_mode: FetchMode,
}

impl Aggregator {
    pub fn new(api: Arc<dyn TodoistApi>, config: &Config) -> Self {
        Self {
            api,
            collaborators_project_id: config.collaborators_project_id.clone(),
            fetch_mode: config.fetch_mode,
        }
    }

    pub fn fetch_mode(&self) -> FetchMode {
        self.fetch_mode
    }

    pub fn collaborators_project_id(&self) -> &str {
        &self.collaborators_project_id
    }

    /// Busca projetos, tarefas e colaboradores; qualquer falha aborta tudo
    pub async fn aggregate(&self) -> Result<Aggregate, AppError> {
        let (projects, tasks, users) = match self.fetch_mode {
            FetchMode::Sequential => self.fetch_sequential().await?,
            FetchMode::Concurrent => self.fetch_concurrent().await?,
        };

        log::info!(
            "✅ Fetched {} projects, {} tasks, {} collaborators",
            projects.len(),
            tasks.len(),
            users.len()
        );

        Ok(Aggregate::from_parts(projects, tasks, &users))
    }

    async fn fetch_sequential(&self) -> Result<(Vec<Project>, Vec<Task>, Vec<User>), AppError> {
        let projects = self
            .api
            .fetch_projects()
            .await
            .map_err(AppError::fetch(Resource::Projects))?;

        let tasks = self
            .api
            .fetch_tasks()
            .await
            .map_err(AppError::fetch(Resource::Tasks))?;

        let users = self
            .api
            .fetch_collaborators(&self.collaborators_project_id)
            .await
            .map_err(AppError::fetch(Resource::Users))?;

        Ok((projects, tasks, users))
    }

    async fn fetch_concurrent(&self) -> Result<(Vec<Project>, Vec<Task>, Vec<User>), AppError> {
        let (projects, tasks, users) = futures::join!(
            self.api.fetch_projects(),
            self.api.fetch_tasks(),
            self.api.fetch_collaborators(&self.collaborators_project_id),
        );

        // erro reportado na mesma ordem do modo sequencial
        let projects = projects.map_err(AppError::fetch(Resource::Projects))?;
        let tasks = tasks.map_err(AppError::fetch(Resource::Tasks))?;
        let users = users.map_err(AppError::fetch(Resource::Users))?;

        Ok((projects, tasks, users))
    }
}
