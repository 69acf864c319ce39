//! Account store integration tests.
//!
//! These run the real migration against an in-memory SQLite database, so
//! uniqueness is enforced by the store itself.

use account_service_lib::infra::Database;
use account_service_lib::repository::{AccountRepository, AccountStore};
use account_service_lib::service::{change_password, create_superuser, create_user, set_active};
use chrono::Utc;
use common::{AppError, DatabaseConfig};
use domain::{Credential, Principal};

async fn store() -> AccountStore {
    let db = Database::connect(&DatabaseConfig::in_memory())
        .await
        .expect("in-memory database");
    AccountStore::new(db.get_connection())
}

#[tokio::test]
async fn test_create_user_persists_record() {
    let store = store().await;

    let created = create_user(&store, "Ada", "Lovelace", "ada", "Ada@Example.COM", Some("pw"))
        .await
        .unwrap();

    let loaded = store.find_by_email("Ada@example.com").await.unwrap().unwrap();
    assert_eq!(loaded.id, created.id);
    assert_eq!(loaded.username, "ada");
    assert_eq!(loaded.to_string(), "Ada@example.com");
    assert_ne!(loaded.password.as_str(), "pw");
    assert!(loaded.check_password("pw"));
    assert!(!loaded.is_admin && !loaded.is_staff && !loaded.is_active && !loaded.is_superadmin);
}

#[tokio::test]
async fn test_duplicate_email_rejected_by_store() {
    let store = store().await;

    create_user(&store, "Ada", "Lovelace", "ada", "ada@example.com", Some("pw"))
        .await
        .unwrap();
    let result = create_user(&store, "Ada", "Byron", "ada2", "ada@EXAMPLE.com", Some("pw")).await;

    assert!(matches!(result, Err(AppError::UniquenessViolation(ref f)) if f == "Email"));
    assert!(store.find_by_username("ada2").await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_username_rejected_by_store() {
    let store = store().await;

    create_user(&store, "Ada", "Lovelace", "ada", "ada@example.com", Some("pw"))
        .await
        .unwrap();
    let result = create_user(&store, "Ada", "Byron", "ada", "byron@example.com", Some("pw")).await;

    assert!(matches!(result, Err(AppError::UniquenessViolation(ref f)) if f == "Username"));
    assert!(store.find_by_email("byron@example.com").await.unwrap().is_none());
}

#[tokio::test]
async fn test_invalid_input_leaves_nothing_behind() {
    let store = store().await;

    let result = create_user(&store, "", "", "", "", Some("x")).await;
    assert!(matches!(result, Err(AppError::InvalidInput(_))));

    let result = create_user(&store, "Ada", "Lovelace", "", "ada@example.com", Some("x")).await;
    assert!(matches!(result, Err(AppError::InvalidInput(_))));

    assert!(store.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_superuser_flags_are_stored() {
    let store = store().await;

    let created = create_superuser(&store, "Root", "Admin", "root", "root@example.com", Some("pw"))
        .await
        .unwrap();

    let loaded = store.find_by_id(created.id).await.unwrap().unwrap();
    assert!(loaded.is_admin && loaded.is_staff && loaded.is_active && loaded.is_superadmin);
    assert!(loaded.has_permission("accounts.change_account"));
    assert_eq!(store.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_persist_updates_existing_record() {
    let store = store().await;

    let mut account = create_user(&store, "Ada", "Lovelace", "ada", "ada@example.com", None)
        .await
        .unwrap();
    let login_at = Utc::now();
    account.phone_number = "+44 20 7946 0000".to_string();
    account.record_login(login_at);

    store.persist(account.clone()).await.unwrap();

    let loaded = store.find_by_id(account.id).await.unwrap().unwrap();
    assert_eq!(loaded.phone_number, "+44 20 7946 0000");
    assert_eq!(loaded.last_login.timestamp(), login_at.timestamp());
    assert_eq!(store.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_update_into_taken_email_is_rejected() {
    let store = store().await;

    create_user(&store, "Ada", "Lovelace", "ada", "ada@example.com", None)
        .await
        .unwrap();
    let mut other = create_user(&store, "Grace", "Hopper", "grace", "grace@example.com", None)
        .await
        .unwrap();

    other.email = "ada@example.com".to_string();
    let result = store.persist(other).await;

    assert!(matches!(result, Err(AppError::UniquenessViolation(ref f)) if f == "Email"));
}

#[tokio::test]
async fn test_change_password_and_activation_round_trip_through_store() {
    let store = store().await;

    create_user(&store, "Ada", "Lovelace", "ada", "ada@example.com", None)
        .await
        .unwrap();

    change_password(&store, "ada@example.com", Some("new-pw")).await.unwrap();
    set_active(&store, "ada@example.com", true).await.unwrap();

    let loaded = store.find_by_email("ada@example.com").await.unwrap().unwrap();
    assert!(loaded.check_password("new-pw"));
    assert!(Principal::is_active(&loaded));
}

#[tokio::test]
async fn test_lookup_misses() {
    let store = store().await;

    assert!(store.find_by_email("nobody@example.com").await.unwrap().is_none());
    assert!(store.find_by_username("nobody").await.unwrap().is_none());
    assert!(matches!(
        set_active(&store, "nobody@example.com", true).await,
        Err(AppError::NotFound)
    ));
}

#[tokio::test]
async fn test_failed_superuser_leaves_no_record() {
    let store = store().await;

    let original = create_user(&store, "Ada", "Lovelace", "ada", "ada@example.com", None)
        .await
        .unwrap();
    let result = create_superuser(&store, "Root", "Admin", "root", "ada@EXAMPLE.com", Some("pw")).await;

    assert!(matches!(result, Err(AppError::UniquenessViolation(ref f)) if f == "Email"));
    assert!(store.find_by_username("root").await.unwrap().is_none());
    let accounts = store.list().await.unwrap();
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].id, original.id);
    assert!(!accounts[0].is_superuser());
}

#[tokio::test]
async fn test_connect_applies_accounts_migration() {
    let db = Database::connect(&DatabaseConfig::in_memory())
        .await
        .expect("in-memory database");

    let status = db.migration_status().await.unwrap();

    assert!(status
        .iter()
        .any(|(name, applied)| name == "m20240101_000001_create_accounts_table" && *applied));
    assert!(status.iter().all(|(_, applied)| *applied));
}
