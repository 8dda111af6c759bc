//! sitegen - build a static site from a directory of Markdown pages.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use sitegen_config::Config;
use sitegen_engine::{
    markdown_to_html,
    site::{copy_directory, generate_pages_recursive},
};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "sitegen")]
#[command(author, version, about = "Markdown static site generator", long_about = None)]
struct Cli {
    /// Config file; built-in defaults are used when it does not exist
    #[arg(short, long, global = true, default_value = Config::DEFAULT_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Copy static assets and render every content page into the output directory
    Build {
        /// Prefix for root-relative links, overriding `base_path` from the config
        base_path: Option<String>,
    },

    /// Print the HTML fragment for a single Markdown file
    Render {
        input: PathBuf,
    },

    /// Write a config file with the default settings
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Build { base_path } => {
            let mut config = load_config(&cli.config)?;
            if let Some(base_path) = base_path {
                config.base_path = base_path;
            }
            build(&config)
        }
        Commands::Render { input } => render(&input),
        Commands::Init { force } => init(&cli.config, force),
    }
}

fn load_config(path: &Path) -> Result<Config> {
    match Config::load_from_path(path)? {
        Some(config) => {
            log::info!("Using config {}", path.display());
            Ok(config)
        }
        None => {
            log::info!("No config at {}, using defaults", path.display());
            Ok(Config::default())
        }
    }
}

fn build(config: &Config) -> Result<()> {
    copy_directory(&config.static_dir, &config.output_dir).with_context(|| {
        format!(
            "Failed to copy {} to {}",
            config.static_dir.display(),
            config.output_dir.display()
        )
    })?;

    let pages = generate_pages_recursive(
        &config.content_dir,
        &config.template_path,
        &config.output_dir,
        &config.base_path,
    )
    .with_context(|| format!("Failed to generate pages from {}", config.content_dir.display()))?;

    log::info!(
        "Built {} pages into {} (base path {})",
        pages.len(),
        config.output_dir.display(),
        config.base_path
    );
    Ok(())
}

fn render(input: &Path) -> Result<()> {
    let markdown = fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    let html =
        markdown_to_html(&markdown).with_context(|| format!("Failed to render {}", input.display()))?;
    println!("{html}");
    Ok(())
}

fn init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    Config::default()
        .save_to_path(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    log::info!("Wrote default config to {}", path.display());
    Ok(())
}
