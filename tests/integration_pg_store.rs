//! PostgreSQL store integration tests
//!
//! Skipped when DATABASE_URL is not set. Usernames carry a random suffix so
//! runs against a shared database do not collide.

use user_accounts::domain::{NewUser, UserChanges};
use user_accounts::{PgUserStore, StoreError, UserStore};
use uuid::Uuid;

mod common;

fn new_user(prefix: &str) -> NewUser {
    let unique = format!("{}_{}", prefix, Uuid::new_v4().simple());
    NewUser::new(
        unique.clone(),
        format!("{}@example.com", unique),
        "Pg User".to_string(),
        "pw".to_string(),
    )
}

#[tokio::test]
async fn test_pg_user_store() {
    let Some(pool) = common::pg_pool().await else {
        eprintln!("DATABASE_URL not set, skipping");
        return;
    };
    let store = PgUserStore::new(pool);

    // Create
    let alice = new_user("alice");
    let created = store.create(alice.clone()).await.unwrap();
    assert!(created.active);
    assert_eq!(created.username, alice.username);

    // Partial update leaves other columns alone
    let changes = UserChanges {
        name: Some("Alice Pg".to_string()),
        ..UserChanges::default()
    };
    let updated = store.update(created.id, changes).await.unwrap();
    assert_eq!(updated.name, "Alice Pg");
    assert_eq!(updated.username, alice.username);
    assert_eq!(updated.email, alice.email);

    // Deactivate keeps the row
    let deactivated = store
        .update(created.id, UserChanges::deactivate())
        .await
        .unwrap();
    assert!(!deactivated.active);
    let fetched = store.find_by_id(created.id).await.unwrap().unwrap();
    assert!(!fetched.active);

    // Unique username
    let mut duplicate = new_user("other");
    duplicate.username = alice.username.clone();
    let result = store.create(duplicate).await;
    assert!(matches!(result, Err(StoreError::Conflict(_))));

    // Missing ids
    assert!(store.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
    let missing = Uuid::new_v4();
    let result = store.update(missing, UserChanges::deactivate()).await;
    assert!(matches!(result, Err(StoreError::NotFound(id)) if id == missing));
}
