//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::cms::CmsClient;
use crate::config::SiteConfig;
use crate::error::Result;
use crate::http::HttpClient;
use crate::post::PostSummary;
use crate::site::{all_post_uids, ListingView, PostView};
use serde::Serialize;
use serde_json::json;
use std::io::Write;
use tracing::instrument;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let client = self.build_client()?;

        match &self.cli.command {
            Commands::Check => self.check(&client).await,
            Commands::Posts { pages, all } => {
                let max_pages = if *all { None } else { Some(*pages) };
                self.posts(&client, max_pages).await
            }
            Commands::Post { uid } => self.post(&client, uid).await,
            Commands::Paths => self.paths(&client).await,
        }
    }

    /// Load configuration: file, then environment, then command-line flags
    pub fn load_config(&self) -> Result<SiteConfig> {
        let config = match &self.cli.config {
            Some(path) => SiteConfig::from_file(path)?,
            None => SiteConfig::default(),
        };
        let mut config = config.with_env_overrides();
        if let Some(endpoint) = &self.cli.endpoint {
            config.cms.endpoint.clone_from(endpoint);
        }
        config.validate()?;
        Ok(config)
    }

    fn build_client(&self) -> Result<CmsClient> {
        let config = self.load_config()?;
        let http = HttpClient::with_config(config.http.to_client_config())?;
        Ok(CmsClient::new(http, config.cms))
    }

    async fn check(&self, client: &CmsClient) -> Result<()> {
        let master_ref = client.master_ref().await?;
        match self.cli.format {
            OutputFormat::Json => emit_json(&json!({ "status": "ok", "ref": master_ref })),
            OutputFormat::Pretty => {
                println!("Connected to {}", client.settings().endpoint);
                println!("Master ref: {master_ref}");
                Ok(())
            }
        }
    }

    #[instrument(skip(self, client))]
    async fn posts(&self, client: &CmsClient, max_pages: Option<u32>) -> Result<()> {
        let mut listing = ListingView::load(client).await?;
        listing.load_pages(client, max_pages).await?;

        match self.cli.format {
            OutputFormat::Json => emit_json(&json!({
                "posts": listing.posts(),
                "has_more": listing.has_more(),
            })),
            OutputFormat::Pretty => {
                for post in listing.posts() {
                    print_summary(post);
                }
                if listing.has_more() {
                    println!("Carregar mais posts (--pages N)");
                }
                Ok(())
            }
        }
    }

    #[instrument(skip(self, client))]
    async fn post(&self, client: &CmsClient, uid: &str) -> Result<()> {
        let view = PostView::load(client, uid).await?;

        match self.cli.format {
            OutputFormat::Json => emit_json(&view),
            OutputFormat::Pretty => {
                let post = &view.post;
                println!("{}", post.title);
                println!(
                    "{} | {} | {} min",
                    post.first_publication_date.as_deref().unwrap_or("-"),
                    post.author,
                    view.reading_time
                );
                if let Some(banner) = &post.banner_url {
                    println!("Banner: {banner}");
                }
                for block in &post.content {
                    println!();
                    println!("## {}", block.heading);
                    for fragment in &block.body {
                        println!("{fragment}");
                    }
                }
                println!();
                if let Some(previous) = &view.previous {
                    println!("Post anterior: {} ({})", previous.title, previous.uid);
                }
                if let Some(next) = &view.next {
                    println!("Próximo post: {} ({})", next.title, next.uid);
                }
                Ok(())
            }
        }
    }

    async fn paths(&self, client: &CmsClient) -> Result<()> {
        let uids = all_post_uids(client).await?;
        match self.cli.format {
            OutputFormat::Json => emit_json(&uids),
            OutputFormat::Pretty => {
                for uid in uids {
                    println!("/post/{uid}");
                }
                Ok(())
            }
        }
    }
}

fn emit_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let mut out = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}

fn print_summary(post: &PostSummary) {
    println!("{}", post.title);
    println!("  {}", post.subtitle);
    println!(
        "  {} | {} | /post/{}",
        post.first_publication_date.as_deref().unwrap_or("-"),
        post.author,
        post.key()
    );
}
