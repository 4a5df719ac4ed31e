//! SQLite schema definition.

/// Complete database schema for the clinique document store.
///
/// One table per root entity. `body` holds the sanitized JSON document
/// without its identity, which lives in `id`.
pub const SCHEMA: &str = r#"
-- ============================================================================
-- Physical Persons
-- ============================================================================

CREATE TABLE IF NOT EXISTS physical_persons (
    id TEXT PRIMARY KEY,
    body TEXT NOT NULL CHECK (json_valid(body)),
    created_at TEXT NOT NULL DEFAULT (datetime('now')),
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);

-- ============================================================================
-- Professionals
-- ============================================================================

CREATE TABLE IF NOT EXISTS professionals (
    id TEXT PRIMARY KEY,
    body TEXT NOT NULL CHECK (json_valid(body)),
    created_at TEXT NOT NULL DEFAULT (datetime('now')),
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);

-- ============================================================================
-- Persons Under Care
-- ============================================================================

CREATE TABLE IF NOT EXISTS persons_under_care (
    id TEXT PRIMARY KEY,
    body TEXT NOT NULL CHECK (json_valid(body)),
    created_at TEXT NOT NULL DEFAULT (datetime('now')),
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);

-- ============================================================================
-- Authorizations
-- ============================================================================

CREATE TABLE IF NOT EXISTS authorizations (
    id TEXT PRIMARY KEY,
    body TEXT NOT NULL CHECK (json_valid(body)),
    created_at TEXT NOT NULL DEFAULT (datetime('now')),
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);

-- ============================================================================
-- Authentication Devices
-- ============================================================================

CREATE TABLE IF NOT EXISTS authentication_devices (
    id TEXT PRIMARY KEY,
    body TEXT NOT NULL CHECK (json_valid(body)),
    created_at TEXT NOT NULL DEFAULT (datetime('now')),
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);
"#;

/// Tables created by [`SCHEMA`], one per collection.
pub const COLLECTIONS: &[&str] = &[
    "physical_persons",
    "professionals",
    "persons_under_care",
    "authorizations",
    "authentication_devices",
];
