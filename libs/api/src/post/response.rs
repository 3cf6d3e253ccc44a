use entity::prelude::*;
use serde::Serialize;

#[derive(Serialize)]
pub struct PostResp {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub user_id: String,
    pub user_name: String,
    pub text: String,
}

impl From<PostEntity> for PostResp {
    fn from(value: PostEntity) -> Self {
        Self {
            id: value.id,
            user_id: value.user_id,
            user_name: value.user_name,
            text: value.text,
        }
    }
}

#[derive(Serialize)]
pub struct GetPostsResp {
    pub posts: Vec<PostResp>,
}
