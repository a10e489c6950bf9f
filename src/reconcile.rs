//! Dual-store reconciliation: publish, delete and list across the bucket and
//! the posts table.
//!
//! The two stores share no transaction. Publish writes the blob first and
//! the row second; delete probes both stores and then removes from each in
//! turn. Either write/delete can fail after the other already mutated remote
//! state, leaving a slug present in only one store. That drift is *not*
//! rolled back here — it is surfaced by [`list`], which classifies every
//! known slug as `both`, `bucket` or `table`, and repaired by the next
//! publish of the same slug (both store writes are idempotent upserts).
//!
//! All operations resolve the target slug before touching either store, and
//! every store call is awaited in sequence; a failure aborts the remaining
//! steps of the current invocation.

use std::collections::BTreeSet;

use tracing::{error, info};

use crate::contract::{BlobStore, PostRow, RowStore};
use crate::error::{Error, Result};
use crate::frontmatter;
use crate::slug::{normalize, slug_from_path};

/// Where a slug currently lives across the two stores. A post counts as
/// published only when present in both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresenceState {
    Both,
    Bucket,
    Table,
}

impl std::fmt::Display for PresenceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            PresenceState::Both => "both",
            PresenceState::Bucket => "bucket",
            PresenceState::Table => "table",
        })
    }
}

/// One line of the `list` report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub slug: String,
    pub presence: PresenceState,
}

/// Publishes `document` under its resolved slug: front matter slug override
/// if present, otherwise the slugified base name of `path_hint`.
///
/// Uploads the raw document as `{slug}.md` with upsert semantics, then
/// upserts the metadata row keyed by slug. Republishing the same slug
/// overwrites both entries rather than duplicating or failing. Returns the
/// published title (falling back to the slug when the front matter carries
/// no title).
pub async fn publish<B, R>(blobs: &B, rows: &R, document: &str, path_hint: &str) -> Result<String>
where
    B: BlobStore,
    R: RowStore,
{
    let parsed = frontmatter::parse(document)?;
    let fm = parsed.front_matter.ok_or(Error::MissingFrontMatter)?;

    let slug = match fm.slug.clone() {
        Some(s) => s,
        None => slug_from_path(path_hint),
    };
    if slug.is_empty() {
        return Err(Error::Slug(path_hint.to_string()));
    }

    info!(slug = %slug, "Publishing post");

    // Blob first, row second. A row failure after a successful upload leaves
    // the slug bucket-only until the next publish; `list` surfaces it.
    let key = format!("{slug}.md");
    blobs
        .upload(&key, document, "text/markdown", true)
        .await
        .map_err(|e| {
            error!(slug = %slug, error = %e, "Blob upload failed");
            Error::Backend(e)
        })?;

    let row = PostRow {
        slug: slug.clone(),
        title: fm.title.clone(),
        tag: fm.tag,
        time_to_read: fm.ttr,
        summary: fm.summary,
    };
    rows.upsert(&row).await.map_err(|e| {
        error!(slug = %slug, error = %e, "Metadata upsert failed after blob upload");
        Error::Backend(e)
    })?;

    let title = fm.title.unwrap_or_else(|| slug.clone());
    info!(slug = %slug, title = %title, "Published post");
    Ok(title)
}

/// Deletes the post identified by `input` (normalized to a slug first).
///
/// Probes both stores independently; a slug present in neither is an error,
/// not a no-op. With `soft` the blob is kept and only the metadata row is
/// removed — asymmetric on purpose, so the raw document survives an unlist.
/// Returns the normalized slug.
pub async fn delete<B, R>(blobs: &B, rows: &R, input: &str, soft: bool) -> Result<String>
where
    B: BlobStore,
    R: RowStore,
{
    let slug = normalize(input);
    let key = format!("{slug}.md");

    let found = blobs.list(Some(&key)).await.map_err(Error::Backend)?;
    let in_bucket = found.iter().any(|f| f.name == key);

    let matching = rows
        .select_slugs(Some(&slug))
        .await
        .map_err(Error::Backend)?;
    let in_table = !matching.is_empty();

    if !in_bucket && !in_table {
        return Err(Error::NotFound(slug));
    }

    if !soft && in_bucket {
        blobs.remove(&[key.clone()]).await.map_err(Error::Backend)?;
    }
    if in_table {
        rows.delete(&slug).await.map_err(Error::Backend)?;
    }

    info!(slug = %slug, soft, "Deleted post");
    Ok(slug)
}

/// Enumerates every slug known to either store and classifies its presence.
///
/// Bucket object names and table slugs are both normalized before the union,
/// so `my-post.md` and `my-post` compare equal. Entries come back sorted
/// lexicographically. This is the operator's diagnostic for the
/// non-transactional writes in [`publish`] and [`delete`].
pub async fn list<B, R>(blobs: &B, rows: &R) -> Result<Vec<ListEntry>>
where
    B: BlobStore,
    R: RowStore,
{
    let bucket_slugs: BTreeSet<String> = blobs
        .list(None)
        .await
        .map_err(Error::Backend)?
        .into_iter()
        .map(|f| normalize(&f.name))
        .collect();

    let table_slugs: BTreeSet<String> = rows
        .select_slugs(None)
        .await
        .map_err(Error::Backend)?
        .into_iter()
        .map(|s| normalize(&s))
        .collect();

    let entries: Vec<ListEntry> = bucket_slugs
        .union(&table_slugs)
        .map(|slug| {
            let presence = match (bucket_slugs.contains(slug), table_slugs.contains(slug)) {
                (true, true) => PresenceState::Both,
                (true, false) => PresenceState::Bucket,
                (false, _) => PresenceState::Table,
            };
            ListEntry {
                slug: slug.clone(),
                presence,
            }
        })
        .collect();

    info!(count = entries.len(), "Listed published slugs");
    Ok(entries)
}
