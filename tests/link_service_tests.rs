//! LinkService tests
//!
//! Exercises the service layer against a real SQLite database created in a
//! temporary directory per test.

use std::sync::Arc;
use std::time::Duration;

use shortener::config::{DatabaseConfig, ShortenerConfig};
use shortener::errors::ShortenerError;
use shortener::services::{CodeGenerator, CodeRegistry, LinkService};
use shortener::storage::{SeaOrmStorage, StorageFactory};
use tempfile::TempDir;

// =============================================================================
// Test Setup
// =============================================================================

async fn create_storage(dir: &TempDir) -> Arc<SeaOrmStorage> {
    let db_path = dir.path().join("links.db");
    let config = DatabaseConfig {
        database_url: format!("sqlite://{}?mode=rwc", db_path.display()),
        ..Default::default()
    };
    StorageFactory::create(&config)
        .await
        .expect("Failed to create storage")
}

async fn setup() -> (TempDir, Arc<SeaOrmStorage>, LinkService) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let storage = create_storage(&dir).await;
    let service = LinkService::new(storage.clone(), &ShortenerConfig::default());
    (dir, storage, service)
}

// =============================================================================
// Create
// =============================================================================

#[tokio::test]
async fn test_create_returns_eight_char_code() {
    let (_dir, _storage, service) = setup().await;

    let result = service.create_link("https://example.com").await.unwrap();

    assert!(result.created);
    assert_eq!(result.record.short_code.len(), 8);
    assert_eq!(result.record.url, "https://example.com");
    assert_eq!(result.record.stats.access_count, 0);
}

#[tokio::test]
async fn test_same_url_twice_returns_same_code() {
    let (_dir, _storage, service) = setup().await;

    let first = service.create_link("test.dev").await.unwrap();
    let second = service.create_link("test.dev").await.unwrap();

    assert!(first.created);
    assert!(!second.created);
    assert_eq!(first.record.short_code, second.record.short_code);
    assert_eq!(first.record.id, second.record.id);
}

#[tokio::test]
async fn test_create_stores_trimmed_url() {
    let (_dir, _storage, service) = setup().await;

    let first = service.create_link("  test.dev \n").await.unwrap();
    assert_eq!(first.record.url, "test.dev");

    let second = service.create_link("test.dev").await.unwrap();
    assert!(!second.created);
    assert_eq!(first.record.short_code, second.record.short_code);
}

#[tokio::test]
async fn test_create_rejects_invalid_urls() {
    let (_dir, _storage, service) = setup().await;

    let err = service.create_link("   ").await.unwrap_err();
    assert!(matches!(err, ShortenerError::Validation(_)));

    let err = service.create_link("exa mple.com").await.unwrap_err();
    assert!(matches!(err, ShortenerError::InvalidUrl(_)));

    let err = service.create_link("javascript:alert(1)").await.unwrap_err();
    assert!(matches!(err, ShortenerError::InvalidUrl(_)));
}

#[tokio::test]
async fn test_distinct_urls_get_distinct_codes() {
    let (_dir, _storage, service) = setup().await;

    let a = service.create_link("a.example.com").await.unwrap();
    let b = service.create_link("b.example.com").await.unwrap();

    assert_ne!(a.record.short_code, b.record.short_code);
}

// =============================================================================
// Read / Stats
// =============================================================================

#[tokio::test]
async fn test_get_unknown_code_is_not_found() {
    let (_dir, _storage, service) = setup().await;

    let err = service.get_link("missing1").await.unwrap_err();
    assert!(matches!(err, ShortenerError::NotFound(_)));

    let err = service.get_stats("missing1").await.unwrap_err();
    assert!(matches!(err, ShortenerError::NotFound(_)));
}

#[tokio::test]
async fn test_get_returns_created_record() {
    let (_dir, _storage, service) = setup().await;
    let created = service.create_link("rust-lang.org").await.unwrap().record;

    let fetched = service.get_link(&created.short_code).await.unwrap();
    assert_eq!(fetched, created);
}

// =============================================================================
// Update
// =============================================================================

#[tokio::test]
async fn test_update_unknown_code_is_not_found() {
    let (_dir, _storage, service) = setup().await;

    let err = service
        .update_link("missing1", "https://example.org")
        .await
        .unwrap_err();
    assert!(matches!(err, ShortenerError::NotFound(_)));
}

#[tokio::test]
async fn test_update_changes_only_url() {
    let (_dir, _storage, service) = setup().await;
    let created = service.create_link("old.example.com").await.unwrap().record;

    tokio::time::sleep(Duration::from_millis(20)).await;
    let updated = service
        .update_link(&created.short_code, " new.example.com ")
        .await
        .unwrap();

    assert_eq!(updated.url, "new.example.com");
    assert_eq!(updated.short_code, created.short_code);
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > created.updated_at);
}

#[tokio::test]
async fn test_update_to_existing_url_is_rejected_by_unique_index() {
    let (_dir, _storage, service) = setup().await;
    service.create_link("taken.example.com").await.unwrap();
    let other = service.create_link("other.example.com").await.unwrap().record;

    let err = service
        .update_link(&other.short_code, "taken.example.com")
        .await
        .unwrap_err();

    assert!(matches!(err, ShortenerError::DuplicateRecord(_)));
    assert_eq!(err.http_status().as_u16(), 500);
}

// =============================================================================
// Delete
// =============================================================================

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let (_dir, _storage, service) = setup().await;
    let created = service.create_link("gone.example.com").await.unwrap().record;

    service.delete_link(&created.short_code).await.unwrap();

    let err = service.get_link(&created.short_code).await.unwrap_err();
    assert!(matches!(err, ShortenerError::NotFound(_)));

    let err = service.delete_link(&created.short_code).await.unwrap_err();
    assert!(matches!(err, ShortenerError::NotFound(_)));
}

#[tokio::test]
async fn test_url_can_be_shortened_again_after_delete() {
    let (_dir, _storage, service) = setup().await;
    let first = service.create_link("again.example.com").await.unwrap().record;
    service.delete_link(&first.short_code).await.unwrap();

    let second = service.create_link("again.example.com").await.unwrap();
    assert!(second.created);
}

// =============================================================================
// Redirect
// =============================================================================

#[tokio::test]
async fn test_resolve_redirect_normalizes_and_counts() {
    let (_dir, _storage, service) = setup().await;
    let created = service.create_link("test.dev").await.unwrap().record;

    let target = service.resolve_redirect(&created.short_code).await.unwrap();
    assert_eq!(target, "https://test.dev/");
    service.resolve_redirect(&created.short_code).await.unwrap();

    let stats = service.get_stats(&created.short_code).await.unwrap();
    assert_eq!(stats.stats.access_count, 2);
    // 访问计数不影响 updated_at
    assert_eq!(stats.updated_at, created.updated_at);
}

#[tokio::test]
async fn test_resolve_target_does_not_count() {
    let (_dir, _storage, service) = setup().await;
    let created = service.create_link("test.dev").await.unwrap().record;

    let target = service.resolve_target(&created.short_code).await.unwrap();
    assert_eq!(target, "https://test.dev/");

    let stats = service.get_stats(&created.short_code).await.unwrap();
    assert_eq!(stats.stats.access_count, 0);
}

#[tokio::test]
async fn test_resolve_redirect_unknown_code() {
    let (_dir, _storage, service) = setup().await;

    let err = service.resolve_redirect("missing1").await.unwrap_err();
    assert!(matches!(err, ShortenerError::NotFound(_)));
}

#[tokio::test]
async fn test_resolve_redirect_with_unparseable_stored_url() {
    let (_dir, storage, service) = setup().await;
    // 绕过校验直接写入一条无法规范化的记录
    storage.insert("exa mple", "broken01").await.unwrap();

    let err = service.resolve_redirect("broken01").await.unwrap_err();
    assert!(matches!(err, ShortenerError::InvalidStoredUrl(_)));

    let record = service.get_stats("broken01").await.unwrap();
    assert_eq!(record.stats.access_count, 0);
}

// =============================================================================
// Storage & code generation
// =============================================================================

#[tokio::test]
async fn test_storage_registry_sees_existing_codes() {
    let dir = TempDir::new().unwrap();
    let storage = create_storage(&dir).await;
    storage.insert("https://example.com", "abcdEFGH").await.unwrap();

    let registry: &dyn CodeRegistry = &*storage;
    assert!(registry.code_exists("abcdEFGH").await.unwrap());
    assert!(!registry.code_exists("zzzzzzzz").await.unwrap());

    let code = CodeGenerator::new(8, 16)
        .generate(&*storage)
        .await
        .unwrap();
    assert_ne!(code, "abcdEFGH");
}

#[tokio::test]
async fn test_duplicate_code_insert_is_duplicate_record() {
    let dir = TempDir::new().unwrap();
    let storage = create_storage(&dir).await;
    storage.insert("https://one.example.com", "samecode").await.unwrap();

    let err = storage
        .insert("https://two.example.com", "samecode")
        .await
        .unwrap_err();
    assert!(matches!(err, ShortenerError::DuplicateRecord(_)));
}

#[tokio::test]
async fn test_find_by_url_is_exact_match() {
    let dir = TempDir::new().unwrap();
    let storage = create_storage(&dir).await;
    storage.insert("example.com", "exact001").await.unwrap();

    assert!(storage.find_by_url("example.com").await.unwrap().is_some());
    assert!(storage.find_by_url("https://example.com").await.unwrap().is_none());
}
