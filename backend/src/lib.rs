pub mod error;
pub mod repo;
pub mod routes;

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

use crate::repo::TaskRepository;

/// Wire the task routes to a repository. Split out of `main` so tests can
/// drive the router directly.
pub fn build_router(repo: TaskRepository) -> Router {
    Router::new()
        .route("/tasks", get(routes::list_tasks).post(routes::create_task))
        .route(
            "/tasks/:id",
            get(routes::get_task)
                .put(routes::update_task)
                .patch(routes::update_task)
                .delete(routes::delete_task),
        )
        .layer(CorsLayer::permissive())
        .with_state(repo)
}
