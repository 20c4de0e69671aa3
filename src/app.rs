use std::path::Path;
use std::time::{Duration, Instant};

use log::{debug, info, warn};

use crate::config::AppConfig;
use crate::error::Result;
use crate::highlight::Highlighter;
use crate::pane::content::ContentPane;
use crate::pane::directory::{Activation, DirectoryPane};
use crate::theme::{self, ThemeColors};

/// Which pane receives focus-dependent actions.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Directory,
    Content,
}

impl Focus {
    pub fn toggled(self) -> Self {
        match self {
            Focus::Directory => Focus::Content,
            Focus::Content => Focus::Directory,
        }
    }
}

/// Logical input actions, independent of the keys that produce them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MovePrevious,
    MoveNext,
    Activate,
    PageUp,
    PageDown,
    ToggleFocus,
    Refresh,
    Quit,
    Unrecognized,
}

/// Rendering options resolved from config once at startup.
pub struct UiOptions {
    pub theme: ThemeColors,
    pub line_numbers: bool,
    pub tab_width: usize,
    pub help_bar: bool,
    pub status_timeout: Duration,
}

impl UiOptions {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            theme: theme::resolve_theme(config),
            line_numbers: config.line_numbers(),
            tab_width: config.tab_width(),
            help_bar: config.help_bar(),
            status_timeout: Duration::from_secs(config.status_timeout_secs()),
        }
    }
}

/// Main application state.
pub struct App {
    pub directory: DirectoryPane,
    pub content: ContentPane,
    pub focus: Focus,
    pub should_quit: bool,
    /// Error shown in place of the help line, with the time it was set.
    pub status_message: Option<(String, Instant)>,
    pub options: UiOptions,
    pub highlighter: Option<Highlighter>,
}

impl App {
    /// Create a new App browsing `path`.
    pub fn new(path: &Path, config: &AppConfig) -> Result<Self> {
        let directory = DirectoryPane::new(path)?;
        let highlighter = config
            .syntax_highlight()
            .then(|| Highlighter::new(config.syntax_theme_name()));
        info!("browsing {}", path.display());
        Ok(Self {
            directory,
            content: ContentPane::new(),
            focus: Focus::default(),
            should_quit: false,
            status_message: None,
            options: UiOptions::from_config(config),
            highlighter,
        })
    }

    /// Route one action according to the current focus.
    ///
    /// Page up/down always scroll the content pane, whichever pane has focus.
    pub fn dispatch(&mut self, action: Action) {
        match (action, self.focus) {
            (Action::MovePrevious, Focus::Directory) => self.directory.move_selection(-1),
            (Action::MovePrevious, Focus::Content) => self.content.scroll(-1),
            (Action::MoveNext, Focus::Directory) => self.directory.move_selection(1),
            (Action::MoveNext, Focus::Content) => self.content.scroll(1),
            (Action::Activate, Focus::Directory) => self.activate_selected(),
            (Action::Activate, Focus::Content) => {}
            (Action::PageUp, _) => self.page_content(-1),
            (Action::PageDown, _) => self.page_content(1),
            (Action::ToggleFocus, _) => self.toggle_focus(),
            (Action::Refresh, _) => self.refresh(),
            (Action::Quit, _) => self.quit(),
            (Action::Unrecognized, _) => {}
        }
    }

    fn activate_selected(&mut self) {
        match self.directory.activate_selected() {
            Ok(Activation::FileChosen(path)) => {
                if !self.content.load(&path) {
                    self.set_status_message(format!("Cannot open {}", path.display()));
                }
            }
            Ok(Activation::Navigated) => {
                debug!("now at {}", self.directory.current_path().display());
            }
            Ok(Activation::Empty) => {}
            Err(e) => {
                warn!("{}", e);
                self.set_status_message(e.to_string());
            }
        }
    }

    fn page_content(&mut self, direction: isize) {
        let height = self.content.viewport_height();
        self.content.page_scroll(direction, height);
    }

    fn refresh(&mut self) {
        if let Err(e) = self.directory.refresh() {
            warn!("{}", e);
            self.set_status_message(e.to_string());
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = self.focus.toggled();
    }

    /// Quit the application.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message with current timestamp.
    pub fn set_status_message(&mut self, msg: String) {
        self.status_message = Some((msg, Instant::now()));
    }

    /// Clear the status message once it has outlived the configured timeout.
    pub fn clear_expired_status(&mut self) {
        if let Some((_, created)) = &self.status_message {
            if created.elapsed() > self.options.status_timeout {
                self.status_message = None;
            }
        }
    }
}
