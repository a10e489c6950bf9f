use thiserror::Error;

use crate::contract::StoreError;

/// Error taxonomy for a single CLI invocation.
///
/// Nothing here is recovered locally: every variant aborts the current run
/// and is printed to the operator with a non-zero exit. Partial dual-store
/// state left behind by an aborted publish or delete is inspectable via
/// `list`.
#[derive(Debug, Error)]
pub enum Error {
    /// Missing credentials, an unreadable/unparseable config file, or a
    /// gen-config collision with an existing file.
    #[error("{0}")]
    Config(String),

    /// A metadata block was present but did not parse into a mapping of the
    /// expected shape. Carries the YAML error with its location.
    #[error("invalid front matter: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The document has no metadata block at all.
    #[error("Missing or invalid frontmatter")]
    MissingFrontMatter,

    /// The delete target exists in neither store.
    #[error("Slug '{0}' not found")]
    NotFound(String),

    /// No non-empty slug could be derived for the document.
    #[error("cannot derive a slug from {0:?}")]
    Slug(String),

    /// An underlying store call failed; wraps the store's native error.
    #[error("backend call failed: {0}")]
    Backend(StoreError),

    #[error("file operation failed on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
