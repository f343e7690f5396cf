use shared::{CreateTaskRequest, Task, UpdateTaskRequest, DEFAULT_DESCRIPTION};
use sqlx::SqlitePool;

#[derive(Debug, Clone, sqlx::FromRow)]
struct TaskRow {
    id: i64,
    title: String,
    description: String,
    completed: bool,
}

impl From<TaskRow> for Task {
    fn from(row: TaskRow) -> Self {
        Task {
            id: row.id,
            title: row.title,
            description: row.description,
            completed: row.completed,
        }
    }
}

/// Row-level CRUD over the single `tasks` table. The pool is injected; its
/// lifecycle belongs to the process, not to this type.
#[derive(Clone)]
pub struct TaskRepository {
    pool: SqlitePool,
}

impl TaskRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn init(&self) -> Result<(), sqlx::Error> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS tasks (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                description TEXT NOT NULL,
                completed INTEGER NOT NULL DEFAULT 0
            )",
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    pub async fn create(&self, req: CreateTaskRequest) -> Result<Task, sqlx::Error> {
        let description = req
            .description
            .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());
        let completed = req.completed.unwrap_or(false);
        let row: TaskRow = sqlx::query_as(
            "INSERT INTO tasks (title, description, completed) VALUES (?1, ?2, ?3)
             RETURNING id, title, description, completed",
        )
        .bind(&req.title)
        .bind(&description)
        .bind(completed)
        .fetch_one(&self.pool)
        .await?;
        Ok(row.into())
    }

    pub async fn get(&self, id: i64) -> Result<Option<Task>, sqlx::Error> {
        let row: Option<TaskRow> =
            sqlx::query_as("SELECT id, title, description, completed FROM tasks WHERE id = ?1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(row.map(Task::from))
    }

    pub async fn list(&self) -> Result<Vec<Task>, sqlx::Error> {
        let rows: Vec<TaskRow> =
            sqlx::query_as("SELECT id, title, description, completed FROM tasks")
                .fetch_all(&self.pool)
                .await?;
        Ok(rows.into_iter().map(Task::from).collect())
    }

    /// Apply the supplied fields over the stored record; fields left out of
    /// the payload keep their prior values.
    pub async fn update(
        &self,
        id: i64,
        req: UpdateTaskRequest,
    ) -> Result<Option<Task>, sqlx::Error> {
        let Some(mut task) = self.get(id).await? else {
            return Ok(None);
        };
        if let Some(title) = req.title {
            task.title = title;
        }
        if let Some(description) = req.description {
            task.description = description;
        }
        if let Some(completed) = req.completed {
            task.completed = completed;
        }
        sqlx::query("UPDATE tasks SET title = ?1, description = ?2, completed = ?3 WHERE id = ?4")
            .bind(&task.title)
            .bind(&task.description)
            .bind(task.completed)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(Some(task))
    }

    pub async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_repo() -> TaskRepository {
        // One connection: each in-memory SQLite connection is its own database.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        let repo = TaskRepository::new(pool);
        repo.init().await.unwrap();
        repo
    }

    fn create_req(title: &str) -> CreateTaskRequest {
        CreateTaskRequest {
            title: title.to_string(),
            description: None,
            completed: None,
        }
    }

    #[tokio::test]
    async fn create_assigns_fresh_ids_and_defaults() {
        let repo = test_repo().await;
        let first = repo.create(create_req("Buy milk")).await.unwrap();
        let second = repo.create(create_req("Walk dog")).await.unwrap();
        assert_eq!(first.id, 1);
        assert_ne!(first.id, second.id);
        assert_eq!(first.description, DEFAULT_DESCRIPTION);
        assert!(!first.completed);
    }

    #[tokio::test]
    async fn get_missing_returns_none() {
        let repo = test_repo().await;
        assert!(repo.get(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_missing_returns_none() {
        let repo = test_repo().await;
        let req = UpdateTaskRequest {
            title: None,
            description: None,
            completed: Some(true),
        };
        assert!(repo.update(42, req).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_preserves_unspecified_fields() {
        let repo = test_repo().await;
        let task = repo.create(create_req("Buy milk")).await.unwrap();
        let req = UpdateTaskRequest {
            title: None,
            description: None,
            completed: Some(true),
        };
        let updated = repo.update(task.id, req).await.unwrap().unwrap();
        assert_eq!(updated.title, "Buy milk");
        assert_eq!(updated.description, DEFAULT_DESCRIPTION);
        assert!(updated.completed);
        // The change is durable, not just echoed.
        assert_eq!(repo.get(task.id).await.unwrap().unwrap(), updated);
    }

    #[tokio::test]
    async fn delete_reports_absence() {
        let repo = test_repo().await;
        let task = repo.create(create_req("Buy milk")).await.unwrap();
        assert!(repo.delete(task.id).await.unwrap());
        assert!(!repo.delete(task.id).await.unwrap());
        assert!(repo.get(task.id).await.unwrap().is_none());
    }
}
