use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::null_as_default;

/// Colaborador de um projeto no Todoist
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct User {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,  // não usado no relatório
}

/// Mapa user id -> nome, montado a cada requisição
#[derive(Debug, Default, Clone)]
pub struct UserIndex {
    names: HashMap<String, String>,
}

impl UserIndex {
    pub fn from_users(users: &[User]) -> Self {
        let mut names = HashMap::with_capacity(users.len());
        for user in users {
            // duplicados: o último vence
            names.insert(user.id.clone(), user.name.clone());
        }
        Self { names }
    }

    pub fn name_for(&self, user_id: &str) -> Option<&str> {
        self.names.get(user_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, name: &str) -> User {
        User {
            id: id.to_string(),
            name: name.to_string(),
            email: format!("{}@example.com", id),
        }
    }

    #[test]
    fn test_lookup_and_miss() {
        let index = UserIndex::from_users(&[user("u1", "Alice"), user("u2", "Bob")]);
        assert_eq!(index.len(), 2);
        assert_eq!(index.name_for("u2"), Some("Bob"));
        assert_eq!(index.name_for("u9"), None);
        assert_eq!(index.name_for(""), None);
    }

    #[test]
    fn test_last_duplicate_wins() {
        let index = UserIndex::from_users(&[user("u1", "Alice"), user("u1", "Alicia")]);
        assert_eq!(index.len(), 1);
        assert_eq!(index.name_for("u1"), Some("Alicia"));
    }

    #[test]
    fn test_collaborator_without_email_decodes() {
        let users: Vec<User> =
            serde_json::from_str(r#"[{"id":"u1","name":"Alice"},{"id":"u2","name":null,"email":null}]"#)
                .unwrap();
        assert_eq!(users[0].email, "");
        assert_eq!(users[1].name, "");

        let index = UserIndex::from_users(&users);
        assert_eq!(index.name_for("u1"), Some("Alice"));
        assert_eq!(index.name_for("u2"), Some(""));
    }

    #[test]
    fn test_empty_index() {
        let index = UserIndex::from_users(&[]);
        assert!(index.is_empty());
    }
}
