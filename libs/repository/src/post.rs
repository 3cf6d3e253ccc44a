use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait,
    QueryOrder,
};

use crate::active_models::{prelude::*, *};
use entity::prelude::*;

#[derive(Clone, Debug)]
pub struct PostRepository {
    db: DatabaseConnection,
}

impl PostRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<post::Model> for PostEntity {
    fn from(value: post::Model) -> Self {
        PostEntity {
            id: Some(value.id),
            user_id: value.user_id,
            user_name: value.user_name,
            text: value.text,
        }
    }
}

impl From<PostEntity> for post::ActiveModel {
    fn from(value: PostEntity) -> Self {
        Self {
            // unpersisted entities leave the id to the engine
            id: match value.id {
                Some(id) => ActiveValue::Set(id),
                None => ActiveValue::not_set(),
            },
            user_id: ActiveValue::Set(value.user_id),
            user_name: ActiveValue::Set(value.user_name),
            text: ActiveValue::Set(value.text),
        }
    }
}

impl PostRepository {
    pub async fn find_all(&self) -> anyhow::Result<Vec<PostEntity>> {
        let posts = Post::find()
            .order_by_asc(post::Column::Id)
            .all(&self.db)
            .await?;

        Ok(posts.into_iter().map(PostEntity::from).collect())
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> anyhow::Result<Option<PostEntity>> {
        let post = Post::find_by_id(id).one(&self.db).await?;

        Ok(post.map(PostEntity::from))
    }

    /// Inserts an unpersisted post (assigning its id) or updates a
    /// persisted one in place. Returns the id either way.
    pub async fn save(&self, post: PostEntity) -> anyhow::Result<i32> {
        let post = post::ActiveModel::from(post).save(&self.db).await?;

        Ok(post.id.unwrap())
    }

    pub async fn delete(&self, post_id: i32) -> anyhow::Result<u64> {
        let result = post::Entity::delete(post::ActiveModel {
            id: ActiveValue::Set(post_id),
            ..Default::default()
        })
        .exec(&self.db)
        .await?;

        Ok(result.rows_affected)
    }
}
