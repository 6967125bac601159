use std::{
    io::{self, BufRead},
    path::PathBuf,
};

use anyhow::{bail, Context, Result};
use clap::Parser;
use client_core::{Renderer, ScheduleController, TalksClient, TextRenderer, ThemeStore};
use schedule::ScheduleConfig;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Terminal view of the conference schedule")]
struct Args {
    #[arg(long, default_value = "http://127.0.0.1:3000")]
    server_url: String,
    /// Print the schedule filtered by this term and exit.
    #[arg(long)]
    search: Option<String>,
    #[arg(long)]
    theme_file: Option<PathBuf>,
    #[arg(long)]
    no_color: bool,
}

#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Search(&'a str),
    ToggleTheme,
    Quit,
}

fn parse_command(line: &str) -> Command<'_> {
    match line.trim() {
        ":quit" | ":q" => Command::Quit,
        ":theme" => Command::ToggleTheme,
        _ => Command::Search(line),
    }
}

fn default_theme_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("conference-schedule")
        .join("theme")
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
    let args = Args::parse();

    let theme_store = ThemeStore::new(args.theme_file.clone().unwrap_or_else(default_theme_path));
    let theme = theme_store.load_or_default();
    let provider = TalksClient::new(&args.server_url)?;
    let renderer = TextRenderer::new(io::stdout(), !args.no_color);
    let mut controller = ScheduleController::new(renderer, ScheduleConfig::default(), theme);

    if let Some(term) = args.search.as_deref() {
        controller.search(term)?;
    }
    controller.load(&provider).await?;
    if controller.has_failed() {
        bail!("could not load the schedule from {}", args.server_url);
    }
    if args.search.is_some() {
        return Ok(());
    }

    eprintln!("Type to search. ':theme' toggles light/dark, ':quit' exits.");
    run_interactive(&mut controller, &theme_store, io::stdin().lock())
}

fn run_interactive<R: Renderer>(
    controller: &mut ScheduleController<R>,
    theme_store: &ThemeStore,
    input: impl BufRead,
) -> Result<()> {
    for line in input.lines() {
        let line = line.context("failed to read input")?;
        match parse_command(&line) {
            Command::Quit => break,
            Command::ToggleTheme => match controller.toggle_theme(theme_store) {
                Ok(theme) => info!(%theme, "theme switched"),
                Err(error) => warn!(%error, "failed to switch theme"),
            },
            Command::Search(term) => controller.search(term)?,
        }
    }
    Ok(())
}
