//! Session lifecycle against real files.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::sync::Arc;

use pretty_assertions::assert_eq;

use heirloom_application::ports::{SessionPersistence, SessionStore};
use heirloom_application::session::TenantSession;
use heirloom_domain::{Session, SessionRecord, Tenant};
use heirloom_infrastructure::FileSessionStorage;

#[tokio::test]
async fn test_load_before_any_save_is_none() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileSessionStorage::new(dir.path());
    assert!(storage.load(Tenant::Customer).await.unwrap().is_none());
}

#[tokio::test]
async fn test_save_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileSessionStorage::new(dir.path());

    let record = SessionRecord::new(
        Session::authenticated("abc", "ref"),
        Some("Ada".to_string()),
    );
    storage.save(Tenant::Seller, &record).await.unwrap();

    let loaded = storage.load(Tenant::Seller).await.unwrap().unwrap();
    assert_eq!(loaded, record);
}

#[tokio::test]
async fn test_clear_is_idempotent_and_scoped_to_tenant() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileSessionStorage::new(dir.path());

    let record = SessionRecord::new(Session::authenticated("abc", "ref"), None);
    storage.save(Tenant::Customer, &record).await.unwrap();
    storage.save(Tenant::Admin, &record).await.unwrap();

    storage.clear(Tenant::Customer).await.unwrap();
    storage.clear(Tenant::Customer).await.unwrap();

    assert!(storage.load(Tenant::Customer).await.unwrap().is_none());
    assert!(storage.load(Tenant::Admin).await.unwrap().is_some());
}

#[tokio::test]
async fn test_corrupt_record_is_a_serialization_error() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileSessionStorage::new(dir.path());

    tokio::fs::create_dir_all(dir.path()).await.unwrap();
    tokio::fs::write(storage.record_path(Tenant::Customer), b"not json")
        .await
        .unwrap();

    assert!(storage.load(Tenant::Customer).await.is_err());
}

#[tokio::test]
async fn test_session_survives_restart() {
    let dir = tempfile::tempdir().unwrap();

    // First run: login.
    {
        let storage = Arc::new(FileSessionStorage::new(dir.path()));
        let store = TenantSession::new(Tenant::Seller, storage);
        store.hydrate().await;
        store
            .login(
                Session::authenticated("abc", "ref"),
                Some("Walnut & Co.".to_string()),
            )
            .await
            .unwrap();
    }

    // Second run: hydration restores the token.
    let storage = Arc::new(FileSessionStorage::new(dir.path()));
    let store = TenantSession::new(Tenant::Seller, storage);
    assert!(!store.snapshot().is_ready());
    store.hydrate().await;
    assert_eq!(store.snapshot().access_token(), Some("abc"));
    assert_eq!(store.display_name().await.as_deref(), Some("Walnut & Co."));
}

#[tokio::test]
async fn test_logout_removes_the_record_file() {
    let dir = tempfile::tempdir().unwrap();
    let storage = Arc::new(FileSessionStorage::new(dir.path()));
    let store = TenantSession::new(
        Tenant::Customer,
        Arc::clone(&storage) as Arc<dyn SessionPersistence>,
    );
    store.hydrate().await;
    store
        .login(Session::authenticated("abc", "ref"), None)
        .await
        .unwrap();
    assert!(storage.record_path(Tenant::Customer).exists());

    store.logout().await;

    assert!(!storage.record_path(Tenant::Customer).exists());
    assert_eq!(store.snapshot().access_token(), None);
}
