//! Integration tests for `SqliteRepository` against an in-memory database.

use roster_core::{Contact, ContactInput, ContactRepository};
use uuid::Uuid;

use crate::SqliteRepository;

async fn store() -> SqliteRepository {
  SqliteRepository::open_in_memory()
    .await
    .expect("in-memory store")
}

fn contact(name: &str, email: &str) -> Contact {
  Contact::new(ContactInput {
    name:    name.to_string(),
    email:   email.to_string(),
    phone:   Some("+353 1 555 0100".to_string()),
    company: None,
    notes:   None,
  })
}

// ─── find / save ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn save_and_find() {
  let s = store().await;
  let c = contact("Alice Liddell", "alice@example.com");

  s.save(&c).await.unwrap();

  let fetched = s.find(c.contact_id).await.unwrap().unwrap();
  assert_eq!(fetched.contact_id, c.contact_id);
  assert_eq!(fetched.name, "Alice Liddell");
  assert_eq!(fetched.email, "alice@example.com");
  assert_eq!(fetched.phone.as_deref(), Some("+353 1 555 0100"));
  assert!(fetched.company.is_none());
}

#[tokio::test]
async fn find_missing_returns_none() {
  let s = store().await;
  let result = s.find(Uuid::new_v4()).await.unwrap();
  assert!(result.is_none());
}

#[tokio::test]
async fn save_twice_replaces_fields_and_keeps_identity() {
  let s = store().await;
  let mut c = contact("Bob", "bob@example.com");
  s.save(&c).await.unwrap();

  c.apply(ContactInput {
    name:    "Robert".to_string(),
    email:   "robert@example.com".to_string(),
    phone:   None,
    company: Some("Acme".to_string()),
    notes:   Some("prefers full name".to_string()),
  });
  s.save(&c).await.unwrap();

  let all = s.find_all().await.unwrap();
  assert_eq!(all.len(), 1, "upsert must not create a second row");

  let fetched = s.find(c.contact_id).await.unwrap().unwrap();
  assert_eq!(fetched.name, "Robert");
  assert_eq!(fetched.phone, None);
  assert_eq!(fetched.company.as_deref(), Some("Acme"));
  assert_eq!(fetched.created_at, c.created_at);
}

// ─── find_all ordering ───────────────────────────────────────────────────────

#[tokio::test]
async fn find_all_orders_by_name_case_insensitive() {
  let s = store().await;
  s.save(&contact("carol", "carol@example.com")).await.unwrap();
  s.save(&contact("Alice", "alice@example.com")).await.unwrap();
  s.save(&contact("Bob", "bob@example.com")).await.unwrap();

  let names: Vec<String> = s
    .find_all()
    .await
    .unwrap()
    .into_iter()
    .map(|c| c.name)
    .collect();
  assert_eq!(names, ["Alice", "Bob", "carol"]);
}

// ─── delete ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_existing_returns_true_and_removes_row() {
  let s = store().await;
  let c = contact("Dora", "dora@example.com");
  s.save(&c).await.unwrap();

  assert!(s.delete(c.contact_id).await.unwrap());
  assert!(s.find(c.contact_id).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_missing_returns_false() {
  let s = store().await;
  assert!(!s.delete(Uuid::new_v4()).await.unwrap());
}
