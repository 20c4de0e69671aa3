mod app;
mod components;
mod config;
mod error;
mod event;
mod fs;
mod handler;
mod highlight;
mod logging;
mod pane;
mod theme;
mod tui;
mod ui;

use std::path::PathBuf;

use clap::Parser;
use log::{debug, info};

use crate::app::App;
use crate::config::{AppConfig, ContentConfig, LogConfig, ThemeConfig};
use crate::event::Event;
use crate::tui::{install_panic_hook, Tui};

/// A two-pane terminal file browser and text viewer.
#[derive(Parser, Debug)]
#[command(name = "fv", version, about)]
struct Cli {
    /// Directory to start browsing in (defaults to the current directory)
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Path to a TOML config file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Append log output to this file
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Color scheme: dark, light or custom
    #[arg(long)]
    theme: Option<String>,

    /// Disable syntax highlighting in the content pane
    #[arg(long)]
    no_highlight: bool,
}

impl Cli {
    /// Partial config carrying only the values given on the command line.
    fn overrides(&self) -> AppConfig {
        AppConfig {
            content: ContentConfig {
                syntax_highlight: self.no_highlight.then_some(false),
                ..Default::default()
            },
            theme: ThemeConfig {
                scheme: self.theme.clone(),
                custom: None,
            },
            log: LogConfig {
                file: self
                    .log_file
                    .as_ref()
                    .map(|p| p.to_string_lossy().to_string()),
                level: None,
            },
            ..Default::default()
        }
    }
}

fn run(cli: Cli) -> error::Result<()> {
    let config = AppConfig::load(cli.config.as_deref(), Some(&cli.overrides()));

    if let Some(log_path) = config.log_file() {
        logging::init(&log_path, config.log_level())?;
    }

    let path = cli.path.canonicalize().map_err(|_| {
        error::AppError::InvalidPath(format!("{} does not exist", cli.path.display()))
    })?;

    // The starting directory is validated before the terminal is touched
    let mut app = App::new(&path, &config)?;

    install_panic_hook();
    let mut tui = Tui::new()?;

    while !app.should_quit {
        app.clear_expired_status();
        tui.terminal_mut().draw(|frame| {
            ui::render(&mut app, frame);
        })?;

        match event::next_event()? {
            Event::Key(key) => handler::handle_key_event(&mut app, key),
            Event::Resize(w, h) => debug!("terminal resized to {}x{}", w, h),
        }
    }

    tui.restore()?;
    info!("exiting");
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
