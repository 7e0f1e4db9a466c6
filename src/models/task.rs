use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Campos ausentes ou `null` decodificam como vazio/false, nunca como erro.
/// O Todoist REST v2 manda `is_completed`, então `completed` costuma chegar ausente.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, utoipa::ToSchema)]
pub struct Task {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub completed: bool,
    /// Vazio quando a tarefa não tem responsável
    #[serde(default, deserialize_with = "null_as_default")]
    pub assignee_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub project_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_assignee_decodes_as_empty() {
        let task: Task = serde_json::from_str(
            r#"{"id":"t2","content":"Walk","completed":true,"assignee_id":null,"project_id":"1"}"#,
        )
        .unwrap();
        assert_eq!(task.assignee_id, "");

        let task: Task = serde_json::from_str(
            r#"{"id":"t3","content":"Read","completed":false,"project_id":"1"}"#,
        )
        .unwrap();
        assert_eq!(task.assignee_id, "");
    }

    #[test]
    fn test_missing_completed_and_null_fields_are_tolerated() {
        let tasks: Vec<Task> = serde_json::from_str(
            r#"[{"id":"t1","content":"Buy milk","is_completed":true,"assignee_id":"u1","project_id":"1"},
                {"id":"t2","content":null,"completed":null,"project_id":null}]"#,
        )
        .unwrap();

        assert!(!tasks[0].completed);
        assert_eq!(tasks[0].assignee_id, "u1");
        assert_eq!(
            tasks[1],
            Task {
                id: "t2".to_string(),
                content: String::new(),
                completed: false,
                assignee_id: String::new(),
                project_id: String::new(),
            }
        );
    }

    #[test]
    fn test_serializes_upstream_field_names_in_order() {
        let task = Task {
            id: "t1".to_string(),
            content: "Buy milk".to_string(),
            completed: false,
            assignee_id: "u1".to_string(),
            project_id: "1".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&task).unwrap(),
            r#"{"id":"t1","content":"Buy milk","completed":false,"assignee_id":"u1","project_id":"1"}"#
        );
    }
}
