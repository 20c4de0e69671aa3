//! Application configuration: TOML file loading, CLI overrides, and defaults.
//!
//! Resolution order (first found wins, values merge/override):
//! 1. CLI flags (`--theme`, `--log-file`, `--no-highlight`)
//! 2. File given with `--config`
//! 3. Global `~/.config/fv-tui/config.toml`
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

use serde::Deserialize;

// ── Section configs ──────────────────────────────────────────────────────────

/// General application settings.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct GeneralConfig {
    /// Show the key help line at the bottom of the screen.
    pub help_bar: Option<bool>,
    /// How long an error message replaces the help line.
    pub status_timeout_secs: Option<u64>,
}

/// Content pane settings.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ContentConfig {
    /// Prefix each line with its 1-based number.
    pub line_numbers: Option<bool>,
    /// Tab rendering width.
    pub tab_width: Option<usize>,
    /// Enable syntax highlighting.
    pub syntax_highlight: Option<bool>,
    /// Syntax highlighting theme (syntect theme name).
    pub syntax_theme: Option<String>,
}

/// Color overrides for the `custom` scheme.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ThemeColorsConfig {
    pub dir_fg: Option<String>,
    pub file_fg: Option<String>,
    pub selected_bg: Option<String>,
    pub selected_fg: Option<String>,
    pub header_fg: Option<String>,
    pub line_nr_fg: Option<String>,
    pub content_fg: Option<String>,
    pub border_fg: Option<String>,
    pub border_focused_fg: Option<String>,
    pub help_bg: Option<String>,
    pub help_fg: Option<String>,
}

/// Theme configuration section.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct ThemeConfig {
    /// Color scheme: "dark", "light", "custom".
    pub scheme: Option<String>,
    /// Custom color overrides.
    pub custom: Option<ThemeColorsConfig>,
}

/// Log file settings. Without a file no logger is installed.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct LogConfig {
    /// Level filter: "error", "warn", "info", "debug", "trace", "off".
    pub level: Option<String>,
    /// Path of the log file.
    pub file: Option<String>,
}

// ── Top-level config ─────────────────────────────────────────────────────────

/// Top-level application configuration.
///
/// All fields are optional so that partial configs from different sources
/// can be merged together (CLI overrides file, file overrides defaults).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub general: GeneralConfig,
    pub content: ContentConfig,
    pub theme: ThemeConfig,
    pub log: LogConfig,
}

// ── Default constants ────────────────────────────────────────────────────────

/// Default tab width in the content pane.
pub const DEFAULT_TAB_WIDTH: usize = 4;
/// Default lifetime of a status message.
pub const DEFAULT_STATUS_TIMEOUT_SECS: u64 = 3;
/// Default syntect theme.
pub const DEFAULT_SYNTAX_THEME: &str = "base16-ocean.dark";

// ── Config file locator ──────────────────────────────────────────────────────

/// Global config file location, if the platform has a config directory.
fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("fv-tui").join("config.toml"))
}

/// Try to read and parse a TOML config file. Returns `None` if the file
/// doesn't exist or can't be parsed (with a warning printed to stderr).
fn load_file(path: &Path) -> Option<AppConfig> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(_) => return None,
    };
    match toml::from_str::<AppConfig>(&content) {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            eprintln!(
                "Warning: failed to parse config file {}: {}",
                path.display(),
                e
            );
            None
        }
    }
}

// ── Merge logic ──────────────────────────────────────────────────────────────

impl AppConfig {
    /// Merge `other` on top of `self` — `other`'s `Some` values win.
    pub fn merge(self, other: &AppConfig) -> AppConfig {
        AppConfig {
            general: GeneralConfig {
                help_bar: other.general.help_bar.or(self.general.help_bar),
                status_timeout_secs: other
                    .general
                    .status_timeout_secs
                    .or(self.general.status_timeout_secs),
            },
            content: ContentConfig {
                line_numbers: other.content.line_numbers.or(self.content.line_numbers),
                tab_width: other.content.tab_width.or(self.content.tab_width),
                syntax_highlight: other
                    .content
                    .syntax_highlight
                    .or(self.content.syntax_highlight),
                syntax_theme: other
                    .content
                    .syntax_theme
                    .clone()
                    .or(self.content.syntax_theme),
            },
            theme: ThemeConfig {
                scheme: other.theme.scheme.clone().or(self.theme.scheme),
                custom: match (&self.theme.custom, &other.theme.custom) {
                    (_, Some(o)) => Some(o.clone()),
                    (Some(s), None) => Some(s.clone()),
                    (None, None) => None,
                },
            },
            log: LogConfig {
                level: other.log.level.clone().or(self.log.level),
                file: other.log.file.clone().or(self.log.file),
            },
        }
    }

    /// Load the final merged configuration.
    ///
    /// `cli_config_path` is an explicit config file path from `--config`.
    /// `cli_overrides` are partial overrides derived from CLI flags.
    pub fn load(cli_config_path: Option<&Path>, cli_overrides: Option<&AppConfig>) -> AppConfig {
        let mut config = AppConfig::default();

        if let Some(path) = global_config_path() {
            if let Some(file_cfg) = load_file(&path) {
                config = config.merge(&file_cfg);
            }
        }

        if let Some(cli_path) = cli_config_path {
            match load_file(cli_path) {
                Some(file_cfg) => config = config.merge(&file_cfg),
                None if !cli_path.exists() => {
                    eprintln!("Warning: config file {} not found", cli_path.display());
                }
                None => {}
            }
        }

        if let Some(overrides) = cli_overrides {
            config = config.merge(overrides);
        }

        config
    }

    // ── Convenience getters with built-in defaults ──────────────────────────

    /// Whether the help line is shown.
    pub fn help_bar(&self) -> bool {
        self.general.help_bar.unwrap_or(true)
    }

    /// Seconds a status message stays on screen.
    pub fn status_timeout_secs(&self) -> u64 {
        self.general
            .status_timeout_secs
            .unwrap_or(DEFAULT_STATUS_TIMEOUT_SECS)
    }

    /// Whether line numbers are drawn in the content pane.
    pub fn line_numbers(&self) -> bool {
        self.content.line_numbers.unwrap_or(true)
    }

    /// Tab width, never zero.
    pub fn tab_width(&self) -> usize {
        self.content
            .tab_width
            .filter(|&w| w > 0)
            .unwrap_or(DEFAULT_TAB_WIDTH)
    }

    /// Whether syntax highlighting is enabled.
    pub fn syntax_highlight(&self) -> bool {
        self.content.syntax_highlight.unwrap_or(true)
    }

    /// Syntax highlighting theme name.
    pub fn syntax_theme_name(&self) -> &str {
        self.content
            .syntax_theme
            .as_deref()
            .unwrap_or(DEFAULT_SYNTAX_THEME)
    }

    /// Theme scheme: "dark", "light", or "custom".
    pub fn theme_scheme(&self) -> &str {
        self.theme.scheme.as_deref().unwrap_or("dark")
    }

    /// Log level filter name.
    pub fn log_level(&self) -> &str {
        self.log.level.as_deref().unwrap_or("info")
    }

    /// Log file path, if logging is enabled.
    pub fn log_file(&self) -> Option<PathBuf> {
        self.log.file.as_ref().map(PathBuf::from)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
