use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use console::Style;

use portfolio::{
    FileStore, PageSession, PreferenceStore, SiteConfig, ThemeMode, UnavailableStore, Variant,
};

/// Render the portfolio page and manage its persisted theme preference.
#[derive(Parser)]
#[command(name = "portfolio", version)]
struct Cli {
    /// YAML config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Origin the theme preference is scoped to.
    #[arg(long, global = true)]
    origin: Option<String>,

    /// Directory holding per-origin preference files (default: platform data dir).
    #[arg(long, global = true)]
    store_dir: Option<PathBuf>,

    /// Run with storage switched off; nothing is read or persisted.
    #[arg(long, global = true)]
    no_storage: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the page as a standalone HTML document.
    Render {
        /// Page variant: component or scripted.
        #[arg(long)]
        variant: Option<Variant>,

        /// Templates overriding the embedded ones.
        #[arg(long)]
        templates: Option<PathBuf>,

        /// Output file (default: stdout).
        #[arg(long, short)]
        out: Option<PathBuf>,
    },

    /// Inspect or change the persisted theme.
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
}

#[derive(Subcommand)]
enum ThemeAction {
    /// Show the persisted, system and effective modes.
    Show,
    /// Flip the mode as a click on the toggle would.
    Toggle,
    /// Persist an explicit mode.
    Set { mode: ThemeMode },
    /// Forget the persisted choice.
    Clear,
}

fn main() {
    env_logger::init();

    let stdout = io::stdout();
    if let Err(e) = run(Cli::parse(), &mut stdout.lock()) {
        eprintln!("{} {e:#}", Style::new().red().bold().apply_to("error:"));
        process::exit(1);
    }
}

/// Executes one parsed invocation, writing command output to `out`.
fn run(cli: Cli, out: &mut dyn Write) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => SiteConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SiteConfig::default(),
    };
    if let Some(origin) = &cli.origin {
        config.origin = origin.clone();
    }

    let store = open_store(&cli, &config);

    match cli.command {
        Command::Render {
            variant,
            templates,
            out: out_path,
        } => {
            if let Some(variant) = variant {
                config.variant = variant;
            }
            if let Some(dir) = templates {
                config.templates_dir = Some(dir);
            }
            render(&config, store, out_path, out)
        }
        Command::Theme { action } => theme(&config, store, action, out),
    }
}

fn open_store(cli: &Cli, config: &SiteConfig) -> Box<dyn PreferenceStore> {
    if cli.no_storage {
        return Box::new(UnavailableStore);
    }
    match &cli.store_dir {
        Some(dir) => Box::new(FileStore::new(dir, &config.origin)),
        None => match FileStore::in_data_dir(&config.origin) {
            Some(store) => {
                log::debug!("preference file: {}", store.path().display());
                Box::new(store)
            }
            None => {
                log::warn!("no data directory on this platform; theme will not persist");
                Box::new(UnavailableStore)
            }
        },
    }
}

fn render(
    config: &SiteConfig,
    store: Box<dyn PreferenceStore>,
    out_path: Option<PathBuf>,
    out: &mut dyn Write,
) -> Result<()> {
    let mut session = PageSession::new(config, store).context("preparing page")?;
    let mode = session.start().context("rendering page")?;
    let html = session.html()?;

    match out_path {
        Some(path) => {
            fs::write(&path, html).with_context(|| format!("writing {}", path.display()))?;
            eprintln!(
                "{} {} ({} variant, {} mode)",
                Style::new().green().bold().apply_to("rendered"),
                path.display(),
                session.variant(),
                mode
            );
        }
        None => write!(out, "{html}")?,
    }
    Ok(())
}

fn theme(
    config: &SiteConfig,
    store: Box<dyn PreferenceStore>,
    action: ThemeAction,
    out: &mut dyn Write,
) -> Result<()> {
    let mut session = PageSession::new(config, store)?;
    let label = Style::new().dim();
    let value = Style::new().cyan().bold();

    match action {
        ThemeAction::Show => {
            let persisted = match session.preference().persisted_mode() {
                Ok(Some(mode)) => mode.to_string(),
                Ok(None) => "none".to_string(),
                Err(e) => format!("unavailable ({e})"),
            };
            let system = portfolio::detect_system_preference()
                .map(|m| m.to_string())
                .unwrap_or_else(|| "unknown".to_string());
            let effective = session.preference().resolve_initial_mode();

            writeln!(out, "{} {}", label.apply_to("persisted:"), value.apply_to(persisted))?;
            writeln!(out, "{} {}", label.apply_to("system:   "), value.apply_to(system))?;
            writeln!(out, "{} {}", label.apply_to("effective:"), value.apply_to(effective))?;
        }
        ThemeAction::Toggle => {
            session.start()?;
            let mode = session.click_toggle();
            writeln!(out, "{} {}", mode.toggle_glyph(), value.apply_to(mode))?;
        }
        ThemeAction::Set { mode } => {
            session.set_mode(mode);
            writeln!(out, "{} {}", mode.toggle_glyph(), value.apply_to(mode))?;
        }
        ThemeAction::Clear => {
            session.preference_mut().clear_persisted();
            writeln!(out, "{}", label.apply_to("persisted theme cleared"))?;
        }
    }
    Ok(())
}
