pub mod admin;
pub mod auth;
pub mod comments;
pub mod error;
pub mod messages;
pub mod middleware;
pub mod notifications;
pub mod posts;
pub mod reactions;
mod rows;
pub mod state;

use axum::{
    Json, Router,
    routing::{delete, get, post},
};

use crate::middleware::{require_admin, require_auth};
use crate::state::AppState;

/// All HTTP routes. Path parameters share the `{id}` name so sibling
/// routes do not conflict in the router.
pub fn router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/health", get(health))
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login));

    let protected_routes = Router::new()
        .route("/feed", get(posts::get_feed))
        .route("/posts", post(posts::create_post))
        .route("/posts/{id}", delete(posts::delete_post))
        .route(
            "/posts/{id}/comments",
            get(comments::get_comments).post(comments::create_comment),
        )
        .route("/posts/{id}/reactions", post(reactions::toggle_reaction))
        .route("/messages", get(messages::get_inbox))
        .route(
            "/messages/{id}",
            get(messages::get_conversation).post(messages::send_message),
        )
        .route("/messages/{id}/read", post(messages::mark_read))
        .route("/notifications", get(notifications::get_notifications))
        .route("/notifications/read", post(notifications::mark_all_read))
        .route("/me/streak", get(notifications::get_streak))
        .layer(axum::middleware::from_fn_with_state(state.clone(), require_auth));

    let admin_routes = Router::new()
        .route("/admin/users", get(admin::list_users))
        .route("/admin/posts/{id}", delete(admin::delete_post))
        .route("/admin/comments/{id}", delete(admin::delete_comment))
        .layer(axum::middleware::from_fn(require_admin))
        .layer(axum::middleware::from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .merge(admin_routes)
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
