//! Backend access ports: the two store capabilities the reconciliation
//! engine coordinates.
//!
//! The engine never talks to Supabase directly; it is generic over these two
//! traits so the production client ([`crate::supabase::SupabaseBackend`]) and
//! test mocks substitute freely. Both traits must report failures as explicit
//! error values — the engine's partial-failure semantics depend on knowing
//! exactly which store call failed.
//!
//! The traits are annotated for `mockall`, so consumers get deterministic
//! mocks (`MockBlobStore`, `MockRowStore`) in unit and integration tests via
//! the `test-export-mocks` feature.

use async_trait::async_trait;

/// Errors from a store implementation, boxed and carried upward unchanged.
pub type StoreError = Box<dyn std::error::Error + Send + Sync>;

/// A single entry returned from listing the bucket.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct BlobEntry {
    pub name: String,
}

/// One row of the posts table. `slug` is the unique key shared with the
/// bucket; the remaining columns mirror the front matter fields.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PostRow {
    pub slug: String,
    pub title: Option<String>,
    pub tag: Option<String>,
    pub time_to_read: Option<String>,
    pub summary: Option<String>,
}

/// Object storage port: the bucket holding the raw markdown documents.
#[cfg_attr(any(test, feature = "test-export-mocks"), mockall::automock)]
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// List objects in the bucket, optionally narrowed by a name search.
    async fn list<'a>(&self, search: Option<&'a str>) -> Result<Vec<BlobEntry>, StoreError>;

    /// Upload `content` under `key`. With `upsert`, an existing object with
    /// the same key is overwritten instead of rejected.
    async fn upload(
        &self,
        key: &str,
        content: &str,
        content_type: &str,
        upsert: bool,
    ) -> Result<(), StoreError>;

    /// Remove the named objects from the bucket.
    async fn remove(&self, keys: &[String]) -> Result<(), StoreError>;
}

/// Row storage port: the metadata table keyed by unique `slug`.
#[cfg_attr(any(test, feature = "test-export-mocks"), mockall::automock)]
#[async_trait]
pub trait RowStore: Send + Sync {
    /// Return the slug column for all rows, or only for rows whose slug
    /// equals `filter`.
    async fn select_slugs<'a>(&self, filter: Option<&'a str>) -> Result<Vec<String>, StoreError>;

    /// Insert-or-replace the row, with `slug` as the conflict target.
    async fn upsert(&self, row: &PostRow) -> Result<(), StoreError>;

    /// Delete the row whose slug equals `slug`.
    async fn delete(&self, slug: &str) -> Result<(), StoreError>;
}
