//! Navkit command-line driver.
//!
//! Compiles a route tree for a set of roles and prints the menu, the
//! breadcrumb for a path, and the page layout as JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use navkit::access::AnyRole;
use navkit::config::Config;
use navkit::layout::{LayoutConfig, UrlOverrides};
use navkit::locale::LocaleCatalog;
use navkit::menu::{BreadcrumbLabel, MenuNode, Omission};
use navkit::models::{Settings, load_routes};
use navkit::selection::SyncPolicy;
use navkit::shell::NavigationShell;

#[derive(Debug, Parser)]
#[command(
    name = "navkit",
    version,
    about = "Compile a route tree into a menu, breadcrumb, and layout"
)]
struct Cli {
    /// Route tree file; falls back to NAVKIT_ROUTES.
    #[arg(long)]
    routes: Option<PathBuf>,

    /// Layout settings JSON.
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Flat locale JSON.
    #[arg(long)]
    locale: Option<PathBuf>,

    /// Comma-separated roles of the current user.
    #[arg(long, value_delimiter = ',')]
    roles: Vec<String>,

    /// Current page path, optionally with a query string.
    #[arg(long, default_value = "/")]
    path: String,

    /// Render with the menu collapsed.
    #[arg(long)]
    collapsed: bool,

    /// Role that passes every access check.
    #[arg(long)]
    superuser: Option<String>,

    /// Selection sync policy: click-only or resync.
    #[arg(long)]
    sync: Option<SyncPolicy>,
}

#[derive(Serialize)]
struct Report<'a> {
    menu: &'a [MenuNode],
    breadcrumb: Vec<BreadcrumbLabel>,
    selected_keys: &'a [String],
    open_keys: &'a [String],
    layout: LayoutConfig,
    omitted: &'a [Omission],
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing();

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    info!(routes = %config.routes_path.display(), "Configuration loaded");

    let routes = load_routes(&config.routes_path).context("failed to load route tree")?;

    let settings = match &config.settings_path {
        Some(path) => Settings::load(path).context("failed to load settings")?,
        None => Settings::default(),
    };

    let locale = match &config.locale_path {
        Some(path) => {
            LocaleCatalog::load(&config.language, path).context("failed to load locale")?
        }
        None => LocaleCatalog::new(&config.language),
    };

    let policy = match &cli.superuser {
        Some(role) => AnyRole::with_superuser(role),
        None => AnyRole::new(),
    };

    let mut shell = NavigationShell::new(
        routes,
        policy,
        locale,
        &cli.path,
        &config.default_route,
        config.selection_sync,
    );
    shell.set_collapsed(cli.collapsed);
    shell.compile_for(&cli.roles);
    shell.commit();

    let overrides = UrlOverrides::from_path(&cli.path);
    let layout = shell.layout(&settings, &overrides);
    let omitted = shell
        .compilation()
        .map(|c| c.omitted.as_slice())
        .unwrap_or_default();

    let report = Report {
        menu: shell.menu(),
        breadcrumb: shell.rendered_breadcrumb(),
        selected_keys: shell.selection().selected_keys(),
        open_keys: shell.selection().open_keys(),
        layout,
        omitted,
    };

    let json = serde_json::to_string_pretty(&report).context("failed to serialize report")?;
    println!("{json}");

    Ok(())
}

/// CLI flags win over environment variables.
fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::from_env_with_routes(cli.routes.clone())
        .context("failed to load configuration")?;

    if let Some(path) = &cli.settings {
        config.settings_path = Some(path.clone());
    }
    if let Some(path) = &cli.locale {
        config.locale_path = Some(path.clone());
    }
    if let Some(sync) = cli.sync {
        config.selection_sync = sync;
    }

    Ok(config)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
