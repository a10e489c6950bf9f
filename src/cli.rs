//! CLI definitions and the extracted async entrypoint shared by `main()` and
//! integration tests.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::{gen_config, load_config, ResolvedConfig};
use crate::error::Error;
use crate::reconcile;
use crate::supabase::SupabaseBackend;

/// CLI for hermes: publish markdown posts to Supabase.
#[derive(Parser)]
#[clap(
    name = "hermes",
    version,
    about = "Publish markdown posts to Supabase (storage + posts table)"
)]
pub struct Cli {
    /// Path to the TOML config file
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Publish a markdown file to the bucket and the posts table
    Publish {
        /// Markdown file
        path: PathBuf,
    },
    /// Delete a published post by slug
    Delete {
        /// Post slug
        slug: String,
        /// Keep the storage file, remove only the metadata row
        #[clap(long)]
        soft: bool,
    },
    /// Show every known slug and which store(s) it lives in
    List,
    /// Write a sample config.toml to the current directory
    GenConfig,
}

/// Extracted async CLI logic entrypoint for integration tests and main()
pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Publish { path } => {
            let backend = backend(load_config(cli.config.as_deref())?);
            let document = fs::read_to_string(&path).map_err(|e| Error::Io {
                path: path.display().to_string(),
                source: e,
            })?;
            let hint = path.to_string_lossy();
            let title = reconcile::publish(&backend, &backend, &document, &hint).await?;
            println!("✓ Published: {title}");
        }
        Commands::Delete { slug, soft } => {
            let backend = backend(load_config(cli.config.as_deref())?);
            let deleted = reconcile::delete(&backend, &backend, &slug, soft).await?;
            println!("✓ Deleted {deleted}");
        }
        Commands::List => {
            let backend = backend(load_config(cli.config.as_deref())?);
            let entries = reconcile::list(&backend, &backend).await?;
            if entries.is_empty() {
                println!("No slugs found.");
            } else {
                println!("{:<32} {}", "slug", "location");
                for entry in entries {
                    println!("{:<32} {}", entry.slug, entry.presence);
                }
            }
        }
        Commands::GenConfig => {
            let path = gen_config()?;
            println!("Sample config written to {path}");
        }
    }
    Ok(())
}

fn backend(cfg: ResolvedConfig) -> SupabaseBackend {
    SupabaseBackend::new(&cfg)
}
