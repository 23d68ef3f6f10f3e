#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end form flows over an in-memory `SQLite` store.

use std::path::Path;
use std::sync::Arc;

use registration::infra::storage::{db, entity};
use registration::{
    DatabaseConfig, Field, FieldError, FormController, RegistrationRepository,
    SeaOrmRegistrationRepository, Status, SubmitError, ViewState,
};
use sea_orm::{EntityTrait, QueryOrder};

async fn controller() -> (
    FormController<SeaOrmRegistrationRepository>,
    Arc<SeaOrmRegistrationRepository>,
) {
    let cfg = DatabaseConfig {
        in_memory: true,
        ..DatabaseConfig::default()
    };
    let conn = db::connect(&cfg, Path::new(".")).await.unwrap();
    let repo = Arc::new(SeaOrmRegistrationRepository::new(conn));
    repo.init().await.unwrap();
    (FormController::new(repo.clone()), repo)
}

async fn stored_rows(repo: &SeaOrmRegistrationRepository) -> Vec<entity::Model> {
    entity::Entity::find()
        .order_by_asc(entity::Column::Id)
        .all(repo.conn())
        .await
        .unwrap()
}

#[tokio::test]
async fn test_register_clear_and_register_again() {
    let (mut form, repo) = controller().await;

    form.on_field_changed(Field::Surname, "sidorova");
    form.on_field_changed(Field::FirstName, "anna");
    form.on_field_changed(Field::Phone, "9120001122");
    form.on_field_changed(Field::Shop, "9");
    let first = form.on_submit().await.unwrap();
    assert_eq!(form.view(), ViewState::Success);
    assert_eq!(first.record().phone(), "+79120001122");

    form.on_back();
    form.on_clear();
    assert!(!form.is_clear_enabled());

    form.on_field_changed(Field::Surname, "Orlov");
    form.on_field_changed(Field::FirstName, "Oleg");
    form.on_field_changed(Field::Phone, "900111");
    form.on_field_changed(Field::Shop, "Shop2");
    let err = form.on_submit().await.unwrap_err();
    assert!(matches!(err, SubmitError::Validation(ref e) if e.contains(FieldError::InvalidPhone)));

    form.on_field_changed(Field::Phone, "9001112233");
    let second = form.on_submit().await.unwrap();
    assert!(second.id() > first.id());

    let rows = stored_rows(&repo).await;
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].surname, "Sidorova");
    assert_eq!(rows[1].shop, "Shop2");
}

#[tokio::test]
async fn test_rejected_submit_writes_nothing() {
    let (mut form, repo) = controller().await;
    form.on_field_changed(Field::Surname, "Ivanov");
    form.on_field_changed(Field::FirstName, "Ivan");
    form.on_field_changed(Field::Phone, "9991234567");

    let err = form.on_submit().await.unwrap_err();

    assert!(matches!(err, SubmitError::Validation(_)));
    assert_eq!(form.view(), ViewState::Form);
    assert!(matches!(form.status(), Status::Rejected(_)));
    assert!(stored_rows(&repo).await.is_empty());
}

#[tokio::test]
async fn test_back_and_resubmit_inserts_duplicate() {
    let (mut form, repo) = controller().await;
    form.on_field_changed(Field::Surname, "Ivanov");
    form.on_field_changed(Field::FirstName, "Ivan");
    form.on_field_changed(Field::Phone, "9991234567");
    form.on_field_changed(Field::Shop, "1");

    form.on_submit().await.unwrap();
    form.on_back();
    form.on_submit().await.unwrap();

    let rows = stored_rows(&repo).await;
    assert_eq!(rows.len(), 2);
    assert_ne!(rows[0].id, rows[1].id);
    assert_eq!(rows[0].surname, rows[1].surname);
    assert_eq!(rows[0].phone, rows[1].phone);
}
