use crate::state::AppState;
use axum::Router;

mod dto;
pub mod handlers;
mod repo;
pub mod repo_types;

pub fn router() -> Router<AppState> {
    handlers::support_routes()
}
