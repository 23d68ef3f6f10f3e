use sea_orm::{ActiveValue, DbErr};

use crate::domain::error::StorageError;
use crate::domain::models::RegistrationRecord;

use super::entity;

impl From<&RegistrationRecord> for entity::ActiveModel {
    fn from(record: &RegistrationRecord) -> Self {
        Self {
            id: ActiveValue::NotSet,
            surname: ActiveValue::Set(record.surname().to_owned()),
            first_name: ActiveValue::Set(record.first_name().to_owned()),
            phone: ActiveValue::Set(record.phone().to_owned()),
            shop: ActiveValue::Set(record.shop().label().to_owned()),
        }
    }
}

/// Connection-level failures mean the store is unreachable; everything else
/// is a failed write.
#[must_use]
pub fn storage_error(err: &DbErr) -> StorageError {
    match err {
        DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => StorageError::Unavailable(err.to_string()),
        _ => StorageError::WriteFailed(err.to_string()),
    }
}
