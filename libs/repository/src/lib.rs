use migration::{Migrator, MigratorTrait};
use post::PostRepository;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

mod active_models;
pub mod post;

#[derive(Clone, Debug)]
pub struct Repository {
    pub post: PostRepository,
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("storage backend unavailable: {}: {}", message, source)]
    Schema {
        message: String,
        source: sea_orm::DbErr,
    },
}

type Response<T> = Result<T, RepositoryError>;

pub trait IntoResponse<T> {
    fn into_response(self, message: &str) -> Response<T>;
}

impl<T> IntoResponse<T> for Result<T, sea_orm::DbErr> {
    fn into_response(self, message: &str) -> Response<T> {
        self.map_err(|e| RepositoryError::Schema {
            message: message.to_string(),
            source: e,
        })
    }
}

pub async fn init_repository(db_url: &str) -> Response<Repository> {
    let db = init_db(db_url).await?;

    let repository = Repository {
        post: PostRepository::new(db),
    };

    Ok(repository)
}

pub async fn init_db(db_url: &str) -> Response<DatabaseConnection> {
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(5)
        .min_connections(1)
        .sqlx_logging(true)
        .sqlx_logging_level(log::LevelFilter::Debug);

    let db = Database::connect(opt)
        .await
        .into_response("in database connect")?;

    prepare_schema(&db).await?;

    Ok(db)
}

/// Ensures the post table exists. Safe to call repeatedly; already-applied
/// migrations are skipped.
pub async fn prepare_schema(db: &DatabaseConnection) -> Response<()> {
    Migrator::up(db, None).await.into_response("in migrator up")
}

/// Drops the post table again. Teardown path for tests.
pub async fn revert_schema(db: &DatabaseConnection) -> Response<()> {
    Migrator::down(db, None)
        .await
        .into_response("in migrator down")
}
