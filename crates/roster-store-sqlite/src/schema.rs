//! SQL schema for the Roster SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS contacts (
    contact_id TEXT PRIMARY KEY,
    created_at TEXT NOT NULL,   -- ISO 8601 UTC; server-assigned
    name       TEXT NOT NULL,
    email      TEXT NOT NULL,
    phone      TEXT,
    company    TEXT,
    notes      TEXT
);

CREATE INDEX IF NOT EXISTS contacts_name_idx ON contacts(name COLLATE NOCASE);

PRAGMA user_version = 1;
";
