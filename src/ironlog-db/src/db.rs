use anyhow::Context;
use ironlog_migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

#[derive(Clone)]
pub struct DatabaseHandler {
    pub(crate) db: DatabaseConnection,
}

impl DatabaseHandler {
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Connects and brings the schema up to date.
    pub async fn new<C>(path: C) -> anyhow::Result<Self>
    where
        C: Into<ConnectOptions>,
    {
        let db = Database::connect(path)
            .await
            .context("Unable to connect to db")?;

        Migrator::up(&db, None)
            .await
            .context("Error running migrations")?;

        Ok(Self { db })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ironlog_entities::users;
    use sea_orm::{EntityTrait, PaginatorTrait};

    #[tokio::test]
    async fn migrations_create_tables() {
        let db = DatabaseHandler::new("sqlite::memory:").await.unwrap();
        let count = users::Entity::find().count(db.connection()).await.unwrap();
        assert_eq!(count, 0);
    }

    #[tokio::test]
    async fn bad_url_is_an_error() {
        assert!(DatabaseHandler::new("nope://nowhere").await.is_err());
    }
}
