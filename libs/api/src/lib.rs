use axum::{routing::get, Router};
use repository::Repository;
use tower_http::cors::CorsLayer;
use tracing::info;

pub mod healthz;
pub mod not_found;
pub mod post;
mod response;
pub mod slack;

pub enum ApiError {
    ClientError(String),
    NotFoundError(String),
    ServerError(String),
}

pub async fn serve(repository: Repository) -> anyhow::Result<Router> {
    info!(task = "start api serving");

    // posts
    let post_router = Router::new()
        .route("/", get(post::get_posts).post(post::create_post))
        .route(
            "/:id",
            get(post::get_post)
                .put(post::update_post)
                .patch(post::update_post)
                .delete(post::delete_post),
        )
        .fallback(not_found::get_404)
        .with_state(repository.clone());

    // slack webhook
    let slack_router = Router::new()
        .route("/command", axum::routing::post(slack::receive_command))
        .fallback(not_found::get_404)
        .with_state(repository);

    let router = Router::new()
        .route("/healthz", get(healthz::get_health))
        .nest("/posts", post_router)
        .nest("/slack", slack_router)
        .layer(CorsLayer::permissive())
        .fallback(not_found::get_404);

    Ok(router)
}
