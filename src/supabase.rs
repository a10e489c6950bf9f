//! Supabase-backed implementations of the blob and row store ports.
//!
//! Bucket objects go through the Storage HTTP API, table rows through
//! PostgREST. The two stores are independent on the backend side; all
//! coordination between them lives in [`crate::reconcile`]. The backend
//! value is constructed explicitly from the resolved config and passed into
//! each operation, so tests can substitute mocks instead.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use tracing::debug;

use crate::config::ResolvedConfig;
use crate::contract::{BlobEntry, BlobStore, PostRow, RowStore, StoreError};

pub struct SupabaseBackend {
    client: Client,
    base_url: String,
    service_key: String,
    bucket: String,
    table: String,
}

impl SupabaseBackend {
    pub fn new(cfg: &ResolvedConfig) -> Self {
        Self {
            client: Client::new(),
            // avoid "//" when the configured URL has a trailing slash
            base_url: cfg.supabase_url.trim_end_matches('/').to_string(),
            service_key: cfg.service_key.clone(),
            bucket: cfg.bucket.clone(),
            table: cfg.table.clone(),
        }
    }

    fn authed(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        req.header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.table)
    }
}

/// Turns a non-2xx response into a `StoreError` carrying status and body.
async fn check_status(
    resp: reqwest::Response,
    what: &str,
) -> Result<reqwest::Response, StoreError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp
        .text()
        .await
        .unwrap_or_else(|_| String::from("<failed to decode response body>"));
    Err(format!("{what} returned {status}: {body}").into())
}

#[async_trait]
impl BlobStore for SupabaseBackend {
    async fn list<'a>(&self, search: Option<&'a str>) -> Result<Vec<BlobEntry>, StoreError> {
        let url = format!("{}/storage/v1/object/list/{}", self.base_url, self.bucket);
        let mut body = json!({ "prefix": "" });
        if let Some(s) = search {
            body["search"] = json!(s);
        }
        debug!(url = %url, search = ?search, "Listing bucket objects");

        let resp = self
            .authed(self.client.post(&url))
            .json(&body)
            .send()
            .await?;
        let resp = check_status(resp, "storage list").await?;
        let entries: Vec<BlobEntry> = resp.json().await?;
        Ok(entries)
    }

    async fn upload(
        &self,
        key: &str,
        content: &str,
        content_type: &str,
        upsert: bool,
    ) -> Result<(), StoreError> {
        let url = format!("{}/storage/v1/object/{}/{}", self.base_url, self.bucket, key);
        debug!(url = %url, content_type = content_type, upsert, "Uploading bucket object");

        let resp = self
            .authed(self.client.post(&url))
            .header("x-upsert", if upsert { "true" } else { "false" })
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(content.to_string())
            .send()
            .await?;
        check_status(resp, "storage upload").await?;
        Ok(())
    }

    async fn remove(&self, keys: &[String]) -> Result<(), StoreError> {
        let url = format!("{}/storage/v1/object/{}", self.base_url, self.bucket);
        debug!(url = %url, keys = ?keys, "Removing bucket objects");

        let resp = self
            .authed(self.client.delete(&url))
            .json(&json!({ "prefixes": keys }))
            .send()
            .await?;
        check_status(resp, "storage remove").await?;
        Ok(())
    }
}

#[async_trait]
impl RowStore for SupabaseBackend {
    async fn select_slugs<'a>(&self, filter: Option<&'a str>) -> Result<Vec<String>, StoreError> {
        #[derive(serde::Deserialize)]
        struct SlugRow {
            slug: String,
        }

        let mut req = self
            .authed(self.client.get(self.table_url()))
            .query(&[("select", "slug")]);
        if let Some(slug) = filter {
            req = req.query(&[("slug", format!("eq.{slug}"))]);
        }
        debug!(table = %self.table, filter = ?filter, "Selecting slugs from table");

        let resp = check_status(req.send().await?, "table select").await?;
        let rows: Vec<SlugRow> = resp.json().await?;
        Ok(rows.into_iter().map(|r| r.slug).collect())
    }

    async fn upsert(&self, row: &PostRow) -> Result<(), StoreError> {
        debug!(table = %self.table, slug = %row.slug, "Upserting table row");

        let resp = self
            .authed(self.client.post(self.table_url()))
            .query(&[("on_conflict", "slug")])
            .header("Prefer", "resolution=merge-duplicates")
            .json(row)
            .send()
            .await?;
        check_status(resp, "table upsert").await?;
        Ok(())
    }

    async fn delete(&self, slug: &str) -> Result<(), StoreError> {
        debug!(table = %self.table, slug = %slug, "Deleting table row");

        let resp = self
            .authed(self.client.delete(self.table_url()))
            .query(&[("slug", format!("eq.{slug}"))])
            .send()
            .await?;
        check_status(resp, "table delete").await?;
        Ok(())
    }
}
