use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QuerySelect};
use sea_orm_migration::MigratorTrait;

use crate::domain::error::StorageError;
use crate::domain::models::{Registration, RegistrationRecord};
use crate::domain::repo::RegistrationRepository;

use super::entity::{self, Entity as UsersEntity};
use super::mapper::storage_error;
use super::migrations::Migrator;

pub struct SeaOrmRegistrationRepository {
    db: DatabaseConnection,
}

impl SeaOrmRegistrationRepository {
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    #[must_use]
    pub fn conn(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl RegistrationRepository for SeaOrmRegistrationRepository {
    async fn init(&self) -> Result<(), StorageError> {
        Migrator::up(&self.db, None)
            .await
            .map_err(|e| storage_error(&e))?;

        // A pre-existing `users` table survives the migration untouched, so
        // make sure it carries every column the entity writes.
        UsersEntity::find()
            .limit(0_u64)
            .all(&self.db)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "users table does not match the expected columns");
                StorageError::Unavailable(format!("incompatible users table: {e}"))
            })?;

        tracing::debug!("users table ready");
        Ok(())
    }

    async fn append(&self, record: &RegistrationRecord) -> Result<Registration, StorageError> {
        let active_model: entity::ActiveModel = record.into();

        let inserted = UsersEntity::insert(active_model)
            .exec(&self.db)
            .await
            .map_err(|e| storage_error(&e))?;

        Ok(Registration::new(inserted.last_insert_id, record.clone()))
    }
}
