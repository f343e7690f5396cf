use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stored in place of a description when the client omits one.
pub const DEFAULT_DESCRIPTION: &str = "No description provided";

pub const MAX_TITLE_LEN: usize = 255;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub completed: bool,
}

/// Field-level rejection of a request payload.
#[derive(Debug, Clone, Serialize, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateTaskRequest {
    pub title: String,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

/// Serves both PUT and PATCH: a full update is a partial update that
/// happens to name every field.
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.is_empty() {
        return Err(ValidationError {
            field: "title",
            message: "title must not be empty".to_string(),
        });
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(ValidationError {
            field: "title",
            message: format!("title must be at most {MAX_TITLE_LEN} characters"),
        });
    }
    Ok(())
}

impl CreateTaskRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_title(&self.title)
    }
}

impl UpdateTaskRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.title {
            Some(title) => validate_title(title),
            None => Ok(()),
        }
    }
}
