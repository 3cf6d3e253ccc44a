use axum::{extract::State, Form, Json};
use entity::prelude::*;
use repository::Repository;
use tracing::info;

pub mod request;

use crate::post::response::PostResp;
use crate::response::{ApiResponse, IntoApiResponse};

use self::request::SlashCommand;

/// Stores the message carried by a Slack slash command and echoes the
/// created post back to Slack.
pub async fn receive_command(
    State(repo): State<Repository>,
    Form(command): Form<SlashCommand>,
) -> ApiResponse<Json<PostResp>> {
    info!(task = "receive slash command", user_id = %command.user_id);

    let mut post =
        PostEntity::new(command.user_id, command.user_name, command.text);

    let id = repo
        .post
        .save(post.clone())
        .await
        .into_response("failed to save post")?;
    post.id = Some(id);

    Ok(Json(PostResp::from(post)))
}
