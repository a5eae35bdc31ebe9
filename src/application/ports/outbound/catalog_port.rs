//! Catalog port - the reference-data boundary for races and classes

use async_trait::async_trait;

use crate::domain::entities::{ClassDetail, EntityKind, RaceDetail};

/// Failures surfaced by the catalog boundary
///
/// All three are recoverable for the caller: a failed detail lookup is
/// reported and the enclosing prompt continues; a failed list fetch is
/// surfaced to the session root.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog provider unavailable: {0}")]
    ProviderUnavailable(String),
    #[error("malformed catalog response: {0}")]
    MalformedResponse(String),
    #[error("{kind} '{index}' not found in catalog")]
    NotFound { kind: EntityKind, index: String },
}

/// Reference-data provider for races and classes
///
/// Two logical queries: list the catalog keys of a kind, and fetch the
/// detail record for one key. No retries and no caching; every call goes to
/// the provider.
#[async_trait]
pub trait CatalogPort: Send + Sync {
    /// List catalog keys of a kind, in provider order
    async fn list(&self, kind: EntityKind) -> Result<Vec<String>, CatalogError>;

    /// Fetch the detail record for a race
    async fn race_detail(&self, index: &str) -> Result<RaceDetail, CatalogError>;

    /// Fetch the detail record for a class
    async fn class_detail(&self, index: &str) -> Result<ClassDetail, CatalogError>;
}
