//! [`SqliteRepository`] — the SQLite implementation of [`ContactRepository`].

use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use roster_core::{Contact, ContactRepository};

use crate::{Error, Result, schema::SCHEMA};

const COLUMNS: &str = "contact_id, created_at, name, email, phone, company, notes";

/// A contact store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteRepository {
  conn: tokio_rusqlite::Connection,
}

impl SqliteRepository {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── Row encoding ────────────────────────────────────────────────────────────

/// A `contacts` row as raw column values, decoded off the connection thread.
struct RawContact {
  contact_id: String,
  created_at: String,
  name:       String,
  email:      String,
  phone:      Option<String>,
  company:    Option<String>,
  notes:      Option<String>,
}

impl RawContact {
  fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(Self {
      contact_id: row.get(0)?,
      created_at: row.get(1)?,
      name:       row.get(2)?,
      email:      row.get(3)?,
      phone:      row.get(4)?,
      company:    row.get(5)?,
      notes:      row.get(6)?,
    })
  }

  fn decode(self) -> Result<Contact> {
    Ok(Contact {
      contact_id: Uuid::parse_str(&self.contact_id)?,
      created_at: decode_dt(&self.created_at)?,
      name:       self.name,
      email:      self.email,
      phone:      self.phone,
      company:    self.company,
      notes:      self.notes,
    })
  }
}

fn encode_dt(dt: DateTime<Utc>) -> String {
  dt.to_rfc3339()
}

fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

// ─── Trait implementation ────────────────────────────────────────────────────

impl ContactRepository for SqliteRepository {
  type Error = Error;

  async fn find(&self, id: Uuid) -> Result<Option<Contact>> {
    let id_str = id.to_string();
    let raw = self
      .conn
      .call(move |conn| {
        let raw = conn
          .query_row(
            &format!("SELECT {COLUMNS} FROM contacts WHERE contact_id = ?1"),
            rusqlite::params![id_str],
            RawContact::from_row,
          )
          .optional()?;
        Ok(raw)
      })
      .await?;

    raw.map(RawContact::decode).transpose()
  }

  async fn find_all(&self) -> Result<Vec<Contact>> {
    let raws: Vec<RawContact> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {COLUMNS} FROM contacts
            ORDER BY name COLLATE NOCASE, created_at"
        ))?;
        let rows = stmt
          .query_map([], RawContact::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawContact::decode).collect()
  }

  async fn save(&self, contact: &Contact) -> Result<()> {
    let contact_id = contact.contact_id.to_string();
    let created_at = encode_dt(contact.created_at);
    let name = contact.name.clone();
    let email = contact.email.clone();
    let phone = contact.phone.clone();
    let company = contact.company.clone();
    let notes = contact.notes.clone();

    self
      .conn
      .call(move |conn| {
        // created_at is deliberately absent from the update set: identity
        // metadata never changes after insert.
        conn.execute(
          "INSERT INTO contacts
             (contact_id, created_at, name, email, phone, company, notes)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
           ON CONFLICT (contact_id) DO UPDATE SET
             name    = excluded.name,
             email   = excluded.email,
             phone   = excluded.phone,
             company = excluded.company,
             notes   = excluded.notes",
          rusqlite::params![
            contact_id, created_at, name, email, phone, company, notes
          ],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  async fn delete(&self, id: Uuid) -> Result<bool> {
    let id_str = id.to_string();
    let removed = self
      .conn
      .call(move |conn| {
        let n = conn.execute(
          "DELETE FROM contacts WHERE contact_id = ?1",
          rusqlite::params![id_str],
        )?;
        Ok(n > 0)
      })
      .await?;
    Ok(removed)
  }
}
