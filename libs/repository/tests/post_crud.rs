use entity::prelude::*;
use repository::{init_db, post::PostRepository, prepare_schema, revert_schema};

fn sample() -> PostEntity {
    PostEntity::new(
        "U2147483697".to_string(),
        "Steve".to_string(),
        "googlebot: What is the air-speed velocity of an unladen swallow?"
            .to_string(),
    )
}

#[tokio::test]
async fn persist_assigns_an_id_and_fetch_round_trips() -> anyhow::Result<()> {
    let db = init_db("sqlite::memory:").await?;
    let repo = PostRepository::new(db);

    let post = sample();
    assert_eq!(post.id, None);

    let id = repo.save(post.clone()).await?;

    let fetched = repo
        .find_by_id(id)
        .await?
        .expect("the post was just saved");
    assert_eq!(fetched.id, Some(id));
    assert_eq!(fetched.user_id, post.user_id);
    assert_eq!(fetched.user_name, post.user_name);
    assert_eq!(fetched.text, post.text);

    Ok(())
}

#[tokio::test]
async fn update_persists_only_the_changed_fields() -> anyhow::Result<()> {
    let db = init_db("sqlite::memory:").await?;
    let repo = PostRepository::new(db);

    let id = repo.save(sample()).await?;
    let mut post = repo.find_by_id(id).await?.expect("saved above");

    let update = serde_json::json!({ "text": "hi", "unknown_key": 5 });
    post.apply_update(update.as_object().unwrap())?;
    repo.save(post).await?;

    let fetched = repo.find_by_id(id).await?.expect("still present");
    assert_eq!(fetched.text, "hi");
    assert_eq!(fetched.user_name, "Steve");

    Ok(())
}

#[tokio::test]
async fn delete_reports_whether_a_row_was_removed() -> anyhow::Result<()> {
    let db = init_db("sqlite::memory:").await?;
    let repo = PostRepository::new(db);

    let id = repo.save(sample()).await?;

    assert_eq!(repo.delete(id).await?, 1);
    assert_eq!(repo.find_by_id(id).await?, None);
    assert_eq!(repo.delete(id).await?, 0);

    Ok(())
}

#[tokio::test]
async fn find_all_returns_posts_in_insertion_order() -> anyhow::Result<()> {
    let db = init_db("sqlite::memory:").await?;
    let repo = PostRepository::new(db);

    let first = repo.save(sample()).await?;
    let second = repo
        .save(PostEntity::new(
            "U0000000001".to_string(),
            "Gwen".to_string(),
            "".to_string(),
        ))
        .await?;

    let posts = repo.find_all().await?;
    assert_eq!(
        posts.iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![Some(first), Some(second)]
    );
    // empty text is allowed
    assert_eq!(posts[1].text, "");

    Ok(())
}

#[tokio::test]
async fn schema_can_be_prepared_again_and_reverted() -> anyhow::Result<()> {
    let db = init_db("sqlite::memory:").await?;

    // prepare is idempotent
    prepare_schema(&db).await?;

    let repo = PostRepository::new(db.clone());
    repo.save(sample()).await?;

    revert_schema(&db).await?;

    // the table is gone after teardown
    assert!(repo.find_all().await.is_err());

    Ok(())
}
