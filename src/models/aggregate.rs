use serde::{Deserialize, Serialize};

use super::{Project, Task};

/// Corpo de `GET /tasks`
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq, utoipa::ToSchema)]
pub struct AggregateResponse {
    pub projects: Vec<Project>,
    pub tasks: Vec<Task>,
}
