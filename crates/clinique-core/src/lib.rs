//! La Clinique Core Library
//!
//! MOS-aligned clinical data model with NOS coded values, persisted as
//! sanitized JSON documents.
//!
//! # Architecture
//!
//! ```text
//!  typed value ──to_persisted──▶ sanitized document ──insert_one──▶ collection
//!                                                                      │
//!  Dto<T> { id, .. } ◀──from_persisted── document + _id ◀──find_by_id──┘
//! ```
//!
//! Sanitization never validates: it drops absent (`null`) fields at every
//! depth and hands each typed child to that child's own sanitizer. The only
//! validating failure in the domain layer is an unknown NOS domain or code.
//!
//! # Modules
//!
//! - [`models`]: MOS value types and entities (PhysicalPerson, Professional, ...)
//! - [`serialization`]: field tables, document sanitization, DTO conversion
//! - [`catalog`]: NOS nomenclature lookup
//! - [`db`]: SQLite document store with one collection per root entity
//! - [`config`]: store location resolved at startup
//! - [`fhir`]: FHIR-shaped projection of stored records

pub mod catalog;
pub mod config;
pub mod db;
pub mod fhir;
pub mod models;
pub mod serialization;

// Re-export commonly used types
pub use catalog::{resolve_code, CatalogError, NosCatalog};
pub use config::{ConfigError, StoreConfig};
pub use db::{Collection, Database, DbError, RootEntity};
pub use models::{
    AuthenticationDevice, Authorization, CapacityMeasure, MeasureKind, MosCode, PersonUnderCare,
    PhysicalPerson, Professional,
};
pub use serialization::{Document, Dto, ModelError, MosSerializer};

use thiserror::Error;

/// Errors surfaced by the clinique layer.
#[derive(Debug, Error)]
pub enum CliniqueError {
    #[error("Database error: {0}")]
    Database(#[from] DbError),

    #[error("Serialization error: {0}")]
    Model(#[from] ModelError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type CliniqueResult<T> = Result<T, CliniqueError>;

/// Store a typed entity in its collection and return the new identity.
pub fn persist<E: RootEntity>(db: &Database, entity: &E) -> CliniqueResult<String> {
    let document = entity.to_persisted()?;
    Ok(db.collection::<E>().insert_one(&document)?)
}

/// Load a typed entity by identity.
pub fn load<E: RootEntity>(db: &Database, id: &str) -> CliniqueResult<Option<Dto<E>>> {
    match db.collection::<E>().find_by_id(id)? {
        Some(stored) => Ok(Some(E::from_persisted(stored)?)),
        None => Ok(None),
    }
}

/// Load every entity of a collection.
pub fn load_all<E: RootEntity>(db: &Database) -> CliniqueResult<Vec<Dto<E>>> {
    db.collection::<E>()
        .find_all()?
        .into_iter()
        .map(|stored| E::from_persisted(stored).map_err(CliniqueError::from))
        .collect()
}
