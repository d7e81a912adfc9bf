//! Terminal admin for a GitHub-hosted blog: draft, render, hand off.

use std::{env::current_dir, path::PathBuf, process::exit};

use clap::{Parser, Subcommand};
use color_eyre::{config::HookBuilder, eyre};
use quill::{
    handoff::{Artifact, system_dispatcher},
    manifest::Manifest,
    media::UploadTarget,
    remote::SiteRepo,
};
use tracing::{error, info, level_filters::LevelFilter};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod links;
mod media;
mod post;
mod settings;

#[derive(Parser)]
#[command(about = "Draft blog content and hand it off for commit", long_about = None)]
#[command(version, author)]
struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit the artifact and destination as JSON instead of handing off
    #[arg(long, global = true)]
    json: bool,

    /// Print the artifact instead of copying it and opening the browser
    #[arg(long, global = true)]
    dry_run: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draft a new post and hand its front matter off for commit.
    Post {
        /// Post title; prompted for when omitted
        title: Option<String>,

        /// One-paragraph summary
        #[arg(long)]
        summary: Option<String>,

        /// Comma-separated tag list
        #[arg(long)]
        tags: Option<String>,

        /// Read the post body from a file instead of opening an editor
        #[arg(long)]
        body: Option<PathBuf>,

        /// Keep the post unpublished (true) or publish it (false)
        #[arg(long)]
        draft: Option<bool>,
    },

    /// Edit site settings and hand the config module off for commit.
    Settings,

    /// Stage media files and hand the upload instructions off.
    Media {
        /// Files to include in the upload
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Directory under the site's image tree
        #[arg(long, default_value = "blog")]
        target: UploadTarget,
    },

    /// Print the repository quick links for manual management.
    Links,
}

fn main() {
    HookBuilder::default()
        .display_env_section(true)
        .issue_url("https://github.com/Howdrian/quill/issues/new")
        .panic_section("It looks like Quill encountered a bug")
        .install()
        .expect("Failed to install color-eyre hook");

    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .without_time()
        .with_target(false);
    let filter_layer = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(tracing_error::ErrorLayer::default())
        .init();

    if let Err(err) = entry(cli) {
        error!("{:#}", err);
        exit(1);
    }
}

fn entry(cli: Cli) -> eyre::Result<()> {
    let manifest = Manifest::load(current_dir()?)?;
    let repo = SiteRepo::new(manifest.site_repo().clone())?;
    let output = Output {
        json: cli.json,
        dry_run: cli.dry_run,
    };

    match cli.command {
        Commands::Post {
            title,
            summary,
            tags,
            body,
            draft,
        } => post::command(
            &repo,
            post::PostArgs {
                title,
                summary,
                tags,
                body,
                draft,
            },
            &output,
        ),
        Commands::Settings => settings::command(&repo, &manifest, &output),
        Commands::Media { files, target } => media::command(&repo, files, target, &output),
        Commands::Links => links::command(&repo, &output),
    }
}

/// How a generated artifact leaves the process.
#[derive(Debug, Clone, Copy)]
pub struct Output {
    pub(crate) json: bool,
    pub(crate) dry_run: bool,
}

impl Output {
    /// Hand the artifact off, or print it in `--json` / `--dry-run` mode.
    pub fn deliver(&self, artifact: &Artifact, what: &str) -> eyre::Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(artifact)?);
            return Ok(());
        }

        if self.dry_run {
            println!("{}", artifact.text());
            info!("would open {}", artifact.destination());
            return Ok(());
        }

        let mut dispatcher = system_dispatcher();
        dispatcher.dispatch(artifact)?;
        info!("{what} copied to clipboard");
        info!(
            "opened {}, paste the clipboard content there and commit",
            artifact.destination()
        );
        Ok(())
    }
}
