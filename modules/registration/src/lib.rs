//! Registration Module
//!
//! Collects a person's surname, first name, phone number and shop, keeps the
//! typed values in shape while they are edited, validates the whole form on
//! submit and appends accepted records to a `SQLite` store.
//!
//! The crate is split the usual way:
//! - [`domain`]: field sanitizer, form draft, form state controller and the
//!   repository port
//! - [`infra`]: `SeaORM` entity, migrations and the repository adapter

pub mod config;
pub mod domain;
pub mod infra;

pub use config::DatabaseConfig;
pub use domain::controller::{FormController, FormSnapshot, Status, ViewState};
pub use domain::draft::{Field, FormDraft};
pub use domain::error::{FieldError, StorageError, SubmitError, ValidationErrors};
pub use domain::models::{Registration, RegistrationRecord, Shop, ShopParseError};
pub use domain::repo::RegistrationRepository;
pub use infra::storage::SeaOrmRegistrationRepository;
