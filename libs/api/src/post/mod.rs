use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use entity::prelude::*;
use repository::Repository;
use serde_json::Value;

pub mod response;

use crate::response::{ApiResponse, IntoApiResponse};
use crate::ApiError;

use self::response::{GetPostsResp, PostResp};

pub async fn get_posts(
    State(repo): State<Repository>,
) -> ApiResponse<Json<GetPostsResp>> {
    let posts = repo
        .post
        .find_all()
        .await
        .into_response("failed to list posts")?;

    let response = Json(GetPostsResp {
        posts: posts.into_iter().map(PostResp::from).collect(),
    });

    Ok(response)
}

pub async fn get_post(
    State(repo): State<Repository>,
    Path(id): Path<i32>,
) -> ApiResponse<Json<PostResp>> {
    let post = repo
        .post
        .find_by_id(id)
        .await
        .into_response("failed to fetch post")?;

    let Some(post) = post else {
        return Err(ApiError::NotFoundError(format!("no post with id {id}")));
    };

    Ok(Json(PostResp::from(post)))
}

pub async fn create_post(
    State(repo): State<Repository>,
    Json(body): Json<Value>,
) -> ApiResponse<(StatusCode, Json<PostResp>)> {
    let mut post = PostEntity::from_json(&body)?;

    let id = repo
        .post
        .save(post.clone())
        .await
        .into_response("failed to save post")?;
    post.id = Some(id);

    Ok((StatusCode::CREATED, Json(PostResp::from(post))))
}

pub async fn update_post(
    State(repo): State<Repository>,
    Path(id): Path<i32>,
    Json(body): Json<Value>,
) -> ApiResponse<Json<PostResp>> {
    let Some(doc) = body.as_object() else {
        return Err(ApiError::ClientError(
            "update body must be a JSON object".to_string(),
        ));
    };

    let post = repo
        .post
        .find_by_id(id)
        .await
        .into_response("failed to fetch post")?;
    let Some(mut post) = post else {
        return Err(ApiError::NotFoundError(format!("no post with id {id}")));
    };

    post.apply_update(doc)?;

    repo.post
        .save(post.clone())
        .await
        .into_response("failed to save post")?;

    Ok(Json(PostResp::from(post)))
}

pub async fn delete_post(
    State(repo): State<Repository>,
    Path(id): Path<i32>,
) -> ApiResponse<StatusCode> {
    let removed = repo
        .post
        .delete(id)
        .await
        .into_response("failed to delete post")?;

    if removed == 0 {
        return Err(ApiError::NotFoundError(format!("no post with id {id}")));
    }

    Ok(StatusCode::NO_CONTENT)
}
