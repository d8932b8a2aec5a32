//! ctxgraph - Git history with Claude sessions in the terminal
//!
//! Binary entry point for the TUI application.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use tracing_subscriber::EnvFilter;

use ctxgraph::app::App;
use ctxgraph::git::GitExecutor;
use ctxgraph::git::constants::DEFAULT_LOG_LIMIT;
use ctxgraph::layout::{LayoutConfig, LayoutEngine};
use ctxgraph::source::CommitSource;

/// Filter used when RUST_LOG is not set
const DEFAULT_LOG_FILTER: &str = "ctxgraph=debug";

#[derive(Parser, Debug)]
#[command(version, about = "Git history with linked Claude conversation sessions")]
struct Cli {
    /// Repository to read (defaults to the current directory)
    #[arg(long, value_name = "PATH")]
    repo: Option<PathBuf>,

    /// JSON file with conversation contexts (and optional transcripts)
    #[arg(long, value_name = "FILE")]
    contexts: Option<PathBuf>,

    /// Maximum number of commits to load (0 = no limit)
    #[arg(long, default_value_t = DEFAULT_LOG_LIMIT)]
    limit: usize,

    /// Show the built-in sample history instead of a repository
    #[arg(long, conflicts_with_all = ["repo", "contexts"])]
    demo: bool,

    /// Print the computed layout as JSON and exit
    #[arg(long)]
    json: bool,

    /// Horizontal distance between lanes
    #[arg(long)]
    lane_spacing: Option<f64>,

    /// Vertical distance between depth levels
    #[arg(long)]
    depth_spacing: Option<f64>,

    /// Write debug logs to this file (filter with RUST_LOG)
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn source(&self) -> CommitSource {
        if self.demo {
            return CommitSource::Demo;
        }
        let executor = match &self.repo {
            Some(path) => GitExecutor::with_repo_path(path),
            None => GitExecutor::new(),
        };
        CommitSource::Git {
            executor,
            limit: (self.limit > 0).then_some(self.limit),
            contexts: self.contexts.clone(),
        }
    }

    fn layout_config(&self) -> LayoutConfig {
        let mut config = LayoutConfig::default();
        if let Some(lane_spacing) = self.lane_spacing {
            config.lane_spacing = lane_spacing;
        }
        if let Some(depth_spacing) = self.depth_spacing {
            config.depth_spacing = depth_spacing;
        }
        config
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let engine = LayoutEngine::new(cli.layout_config())?;
    let source = cli.source();

    if cli.json {
        let history = source.load()?;
        let layout = engine.compute(&history.commits);
        println!("{}", serde_json::to_string_pretty(&layout)?);
        return Ok(());
    }

    let terminal = ratatui::init();
    let _guard = scopeguard::guard((), |_| ratatui::restore());
    run(terminal, App::new(source, engine))
}

/// Send tracing events to a log file, leaving the terminal to the UI
fn init_logging(log_file: Option<&Path>) -> color_eyre::Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(File::create(path)?))
        .with_ansi(false)
        .init();
    Ok(())
}

/// Run the application's main loop.
fn run(mut terminal: DefaultTerminal, mut app: App) -> color_eyre::Result<()> {
    while app.running {
        terminal.draw(|frame| app.render(frame))?;
        handle_events(&mut app)?;
    }

    Ok(())
}

/// Handle crossterm events.
fn handle_events(app: &mut App) -> color_eyre::Result<()> {
    if event::poll(Duration::from_millis(200))? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.on_key_event(key);
            }
            _ => {}
        }
    }
    Ok(())
}
