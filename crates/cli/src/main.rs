//! `rawav`: query the content API from the command line.
//!
//! Every command prints pretty JSON on stdout. Exit status is 2 when a
//! lookup matched nothing and 1 for any other failure.

mod summary;

use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rawav_content::{CmsConfig, ContentApi, ContentError, ErrorKind};
use rawav_core::byline::AuthorGroups;
use rawav_core::contact::ContactMessage;
use rawav_core::types::EntryId;

const EXIT_NOT_FOUND: u8 = 2;

#[derive(Debug, Parser)]
#[command(name = "rawav", version, about = "Query published aviation content")]
struct Cli {
    /// Print compact cards (title, byline, image, excerpt) instead of full entries.
    #[arg(long, global = true)]
    summary: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, clap::Args)]
struct PageArgs {
    #[arg(long, default_value_t = 1)]
    page: u32,
    #[arg(long, default_value_t = 10)]
    page_size: u32,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Latest articles, reports, and galleries.
    Landing {
        #[arg(long, default_value_t = 6)]
        page_size: u32,
    },
    /// One page of articles, newest first.
    Articles(PageArgs),
    /// One page of reports, newest first.
    Reports(PageArgs),
    /// One page of galleries, newest first.
    Galleries(PageArgs),
    /// Article by slug.
    Article { slug: String },
    /// Report by slug.
    Report { slug: String },
    /// Gallery by slug.
    Gallery { slug: String },
    /// Gallery by numeric id.
    GalleryId { id: EntryId },
    /// Public author profiles.
    Authors {
        /// Split into founders, external contributors, and guests.
        #[arg(long)]
        grouped: bool,
    },
    /// Submit a contact form message.
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        message: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rawav_content=info,rawav_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            let not_found = err
                .downcast_ref::<ContentError>()
                .is_some_and(|e| e.kind() == ErrorKind::NotFound);
            if not_found {
                ExitCode::from(EXIT_NOT_FOUND)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // --- Configuration ---
    let config = CmsConfig::from_env()?;
    tracing::debug!(
        base_url = ?config.base_url,
        timeout_secs = config.request_timeout_secs,
        "Loaded content API configuration"
    );
    let api = ContentApi::new(config)?;
    let compact = cli.summary;

    match cli.command {
        Command::Landing { page_size } => {
            let landing = api.fetch_landing(page_size).await?;
            if compact {
                let media = api.client().media()?;
                print_json(&summary::landing(&media, &landing))
            } else {
                print_json(&landing)
            }
        }
        Command::Articles(p) => {
            let page = api.list_articles(p.page, p.page_size).await?;
            if compact {
                let media = api.client().media()?;
                print_json(&page.items.iter().map(|a| summary::article(&media, a)).collect::<Vec<_>>())
            } else {
                print_json(&page)
            }
        }
        Command::Reports(p) => {
            let page = api.list_reports(p.page, p.page_size).await?;
            if compact {
                let media = api.client().media()?;
                print_json(&page.items.iter().map(|r| summary::report(&media, r)).collect::<Vec<_>>())
            } else {
                print_json(&page)
            }
        }
        Command::Galleries(p) => {
            let page = api.list_galleries(p.page, p.page_size).await?;
            if compact {
                let media = api.client().media()?;
                print_json(&page.items.iter().map(|g| summary::gallery(&media, g)).collect::<Vec<_>>())
            } else {
                print_json(&page)
            }
        }
        Command::Article { slug } => {
            let article = api.get_article_by_slug(&slug).await?;
            if compact {
                print_json(&summary::article(&api.client().media()?, &article))
            } else {
                print_json(&article)
            }
        }
        Command::Report { slug } => {
            let report = api.get_report_by_slug(&slug).await?;
            if compact {
                print_json(&summary::report(&api.client().media()?, &report))
            } else {
                print_json(&report)
            }
        }
        Command::Gallery { slug } => {
            let gallery = api.get_gallery_by_slug(&slug).await?;
            if compact {
                print_json(&summary::gallery(&api.client().media()?, &gallery))
            } else {
                print_json(&gallery)
            }
        }
        Command::GalleryId { id } => {
            let gallery = api.get_gallery_by_id(id).await?;
            if compact {
                print_json(&summary::gallery(&api.client().media()?, &gallery))
            } else {
                print_json(&gallery)
            }
        }
        Command::Authors { grouped } => {
            let profiles = api.list_public_author_profiles().await?;
            if compact {
                let media = api.client().media()?;
                print_json(&profiles.iter().map(|p| summary::author(&media, p)).collect::<Vec<_>>())
            } else if grouped {
                print_json(&AuthorGroups::from_profiles(profiles))
            } else {
                print_json(&profiles)
            }
        }
        Command::Contact {
            name,
            email,
            subject,
            message,
        } => {
            let message = ContactMessage {
                name,
                email,
                subject,
                message,
            };
            api.submit_contact_message(&message).await?;
            print_json(&serde_json::json!({ "submitted": true }))
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let out = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{out}");
    Ok(())
}
