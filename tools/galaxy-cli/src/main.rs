//! Galaxy CLI - terminal front end for the TechGalaxy storefront.
//!
//! Commands:
//! - `galaxy browse` - List products with filters and sorting
//! - `galaxy facets` - List categories and brands
//! - `galaxy show` - Show one product
//! - `galaxy cart` - Run a scripted cart session
//! - `galaxy shell` - Interactive storefront session
//! - `galaxy config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use galaxy_observability::init_subscriber;

use commands::{BrowseArgs, CartArgs, ConfigArgs, ShowArgs};

/// Galaxy CLI - Browse the TechGalaxy catalog and shop from the terminal
#[derive(Parser)]
#[command(name = "galaxy")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products
    Browse(BrowseArgs),

    /// List categories and brands
    Facets,

    /// Show a product's details
    Show(ShowArgs),

    /// Apply cart changes and print the cart
    Cart(CartArgs),

    /// Start an interactive session
    Shell,

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let config_path = cli.config.as_deref();
    let ctx = context::Context::load(config_path, output)?;

    let mut logging = ctx.config.logging;
    if cli.verbose {
        logging = logging.verbose();
    }
    init_subscriber(&logging)?;
    if let Some(path) = &ctx.config_path {
        tracing::debug!(path = %path.display(), "configuration loaded");
    }

    // Execute command
    let result = match cli.command {
        Commands::Browse(args) => commands::browse::run(args, &ctx),
        Commands::Facets => commands::facets::run(&ctx),
        Commands::Show(args) => commands::show::run(args, &ctx),
        Commands::Cart(args) => commands::cart::run(args, &ctx),
        Commands::Shell => commands::shell::run(&ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
