//! Configuration management commands.

use std::fs;

use anyhow::{bail, Context as _, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { name, force } => init_config(&name, force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let store = &ctx.config.store;
    ctx.output.info("[store]");
    ctx.output.kv("name", &store.name);
    ctx.output.kv("currency", store.currency.code());
    ctx.output.kv("open_cart_on_add", &store.open_cart_on_add.to_string());
    match &store.seed {
        Some(seed) => ctx.output.kv("seed", &seed.display().to_string()),
        None => ctx.output.kv("seed", "(built-in catalog)"),
    }

    ctx.output.info("[logging]");
    ctx.output.kv("level", ctx.config.logging.level.as_str());
    ctx.output.kv("format", &format!("{:?}", ctx.config.logging.format).to_lowercase());
    Ok(())
}

fn init_config(name: &str, force: bool, ctx: &Context) -> Result<()> {
    let path = ctx.cwd.join("galaxy.toml");
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    fs::write(&path, generate_default_config(name))
        .with_context(|| format!("Failed to write config file: {}", path.display()))?;
    ctx.output.success(&format!("Created {}", path.display()));
    Ok(())
}
