//! hermes: publish markdown posts to a Supabase storage bucket and a
//! companion posts table, keyed by slug.
//!
//! The two stores are independently mutable and share no transaction; the
//! [`reconcile`] module owns the ordering of the dual writes/deletes and the
//! presence classification that `list` reports to the operator.

pub mod cli;
pub mod config;
pub mod contract;
pub mod error;
pub mod frontmatter;
pub mod reconcile;
pub mod slug;
pub mod supabase;
