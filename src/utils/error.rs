use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::fmt;

/// Falha de uma chamada à API do Todoist
#[derive(Debug)]
pub enum FetchError {
    Request(String),
    Transport(String),
    Status(u16),
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Request(msg) => write!(f, "Request error: {}", msg),
            FetchError::Transport(msg) => write!(f, "Transport error: {}", msg),
            FetchError::Status(code) => write!(f, "Todoist API error: HTTP {}", code),
            FetchError::Decode(msg) => write!(f, "Decode error: {}", msg),
        }
    }
}

impl std::error::Error for FetchError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Projects,
    Tasks,
    Users,
}

impl Resource {
    pub const fn as_str(self) -> &'static str {
        match self {
            Resource::Projects => "projects",
            Resource::Tasks => "tasks",
            Resource::Users => "users",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug)]
pub enum AppError {
    Fetch { resource: Resource, source: FetchError },
}

impl AppError {
    pub fn fetch(resource: Resource) -> impl FnOnce(FetchError) -> AppError {
        move |source| AppError::Fetch { resource, source }
    }

    /// Mensagem genérica exposta ao cliente (a causa só vai para o log)
    pub fn public_message(&self) -> String {
        match self {
            AppError::Fetch { resource, .. } => format!("Error fetching {}", resource),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Fetch { resource, source } => {
                write!(f, "Error fetching {}: {}", resource, source)
            }
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Fetch { source, .. } => Some(source),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type("text/plain; charset=utf-8")
            .body(self.public_message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_message_hides_cause() {
        let err = AppError::fetch(Resource::Users)(FetchError::Status(401));
        assert_eq!(err.public_message(), "Error fetching users");
        assert_eq!(err.to_string(), "Error fetching users: Todoist API error: HTTP 401");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_every_resource_maps_to_500() {
        for resource in [Resource::Projects, Resource::Tasks, Resource::Users] {
            let err = AppError::fetch(resource)(FetchError::Decode("eof".to_string()));
            let resp = err.error_response();
            assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(
                resp.headers().get("content-type").unwrap(),
                "text/plain; charset=utf-8"
            );
            assert_eq!(err.public_message(), format!("Error fetching {}", resource.as_str()));
        }
    }
}
