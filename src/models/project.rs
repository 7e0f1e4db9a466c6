use serde::{Deserialize, Serialize};

use super::null_as_default;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, utoipa::ToSchema)]
pub struct Project {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_or_missing_fields_decode_as_empty() {
        let projects: Vec<Project> =
            serde_json::from_str(r#"[{"id":"1","name":null},{"id":"2"},{"name":"Inbox","color":"red"}]"#)
                .unwrap();
        assert_eq!(projects[0], Project { id: "1".to_string(), name: String::new() });
        assert_eq!(projects[1].name, "");
        assert_eq!(projects[2], Project { id: String::new(), name: "Inbox".to_string() });
    }
}
