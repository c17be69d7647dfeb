use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::debug;

use version_selector::catalog::VersionCatalog;
use version_selector::catalog::builder::catalog_for_site;
use version_selector::config::{CATALOG_FILE_NAME, SelectorConfig, log_path};
use version_selector::navigate::probes::{FsProbe, HttpProbe};
use version_selector::navigate::{ExistenceProbe, Navigation, NavigationHandler};
use version_selector::page::PageContext;
use version_selector::render::{outdated_banner, render_selector};
use version_selector::site::stamp_site;

#[derive(Parser)]
#[command(name = "version-selector")]
#[command(version, about = "Version picker for multi-version documentation sites")]
struct Cli {
    /// Configuration file (JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Also write JSON logs to this file ("-" for the default location)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the catalog generated from a published site
    Catalog {
        /// Site root containing one directory per version
        site: PathBuf,
    },
    /// Print selector and banner markup for a page
    Render {
        #[command(flatten)]
        page: PageArgs,
    },
    /// Print the URL a selection navigates to
    Navigate {
        #[command(flatten)]
        page: PageArgs,

        /// Version id picked in the selector
        #[arg(long)]
        to: String,

        /// Probe targets over HTTP against this origin
        #[arg(long, conflicts_with = "site")]
        base_url: Option<String>,

        /// Probe targets against a published site on disk
        #[arg(long)]
        site: Option<PathBuf>,
    },
    /// Stamp selector and banner into every page of a published site
    Stamp {
        /// Site root containing one directory per version
        site: PathBuf,
    },
}

#[derive(clap::Args)]
struct PageArgs {
    /// Catalog file (defaults to versions.json in the current directory)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Documentation root path; overrides the configured one
    #[arg(long)]
    root: Option<String>,

    /// Current page path relative to its version directory
    #[arg(long)]
    page: String,

    /// Path the page is served at
    #[arg(long)]
    location: String,
}

impl PageArgs {
    fn load(&self, config: &SelectorConfig) -> anyhow::Result<(VersionCatalog, PageContext)> {
        let catalog_path = self
            .catalog
            .clone()
            .unwrap_or_else(|| PathBuf::from(CATALOG_FILE_NAME));
        let catalog = VersionCatalog::load(&catalog_path)?;

        let root = self.root.as_deref().unwrap_or(&config.url_root);
        let context = PageContext::from_location(root, &self.page, &self.location)?;
        debug!("Resolved current version {}", context.current_version());

        Ok((catalog, context))
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_file = cli.log_file.as_ref().map(|path| {
        if path == Path::new("-") {
            log_path()
        } else {
            path.clone()
        }
    });
    let _guard = version_selector::logging::init(cli.verbose, log_file.as_deref())?;

    let config = match &cli.config {
        Some(path) => SelectorConfig::load(path)?,
        None => SelectorConfig::default(),
    };

    match cli.command {
        Command::Catalog { site } => {
            let catalog = catalog_for_site(&site, &config.development)?;
            println!("{}", catalog.to_json()?);
        }
        Command::Render { page } => {
            let (catalog, context) = page.load(&config)?;
            println!("{}", render_selector(&catalog, context.current_version()));
            if let Some(banner) =
                outdated_banner(&catalog, &context, config.project_name.as_deref())
            {
                println!("{banner}");
            }
        }
        Command::Navigate {
            page,
            to,
            base_url,
            site,
        } => {
            let (catalog, context) = page.load(&config)?;
            if !catalog.contains(&to) {
                anyhow::bail!("Version {to:?} is not in the catalog");
            }

            let probe: Arc<dyn ExistenceProbe> = match (site, base_url.or(config.probe.base_url)) {
                (Some(site), _) => Arc::new(FsProbe::new(&site, context.root())),
                (None, Some(base_url)) => Arc::new(
                    HttpProbe::new(&base_url, config.probe.timeout_ms)
                        .context("Failed to create HTTP probe")?,
                ),
                (None, None) => anyhow::bail!("Either --base-url or --site is required"),
            };

            let mut handler = NavigationHandler::new(probe, context);
            let navigation = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?
                .block_on(handler.on_change(&to, &page.location));

            match navigation {
                Navigation::Stay => println!("{}", page.location),
                Navigation::Redirect { url, .. } => println!("{url}"),
            }
        }
        Command::Stamp { site } => {
            let report = stamp_site(&site, &config)
                .with_context(|| format!("Failed to stamp {}", site.display()))?;
            println!(
                "Stamped {} pages across {} versions ({} skipped)",
                report.pages_stamped, report.versions, report.pages_skipped
            );
        }
    }

    Ok(())
}
