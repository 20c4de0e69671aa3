//! Theme data model: built-in palettes and resolution from config.
//!
//! Two built-in palettes (dark and light) plus custom hex overrides from the
//! config file on top of the dark palette.

use ratatui::style::Color;

use crate::config::{AppConfig, ThemeColorsConfig};

// ── Runtime theme colors ─────────────────────────────────────────────────────

/// All runtime colors used in the UI.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Directory pane
    pub dir_fg: Color,
    pub file_fg: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub header_fg: Color,

    // Content pane
    pub content_fg: Color,
    pub line_nr_fg: Color,

    // Borders
    pub border_fg: Color,
    pub border_focused_fg: Color,

    // Help / status line
    pub help_bg: Color,
    pub help_fg: Color,

    // Semantic colors (not configurable)
    pub error_fg: Color,
    pub dim_fg: Color,
}

// ── Built-in palettes ────────────────────────────────────────────────────────

/// Dark theme using Catppuccin Mocha palette.
pub fn dark_theme() -> ThemeColors {
    ThemeColors {
        dir_fg: Color::Rgb(137, 180, 250),       // #89b4fa (blue)
        file_fg: Color::Rgb(166, 227, 161),      // #a6e3a1 (green)
        selected_bg: Color::Rgb(69, 71, 90),     // #45475a (surface1)
        selected_fg: Color::Rgb(205, 214, 244),  // #cdd6f4 (text)
        header_fg: Color::Rgb(186, 194, 222),    // #bac2de (subtext1)

        content_fg: Color::Rgb(205, 214, 244),
        line_nr_fg: Color::Rgb(108, 112, 134),   // #6c7086 (overlay0)

        border_fg: Color::Rgb(88, 91, 112),      // #585b70 (surface2)
        border_focused_fg: Color::Rgb(137, 180, 250),

        help_bg: Color::Rgb(205, 214, 244),
        help_fg: Color::Rgb(30, 30, 46),         // #1e1e2e (base)

        error_fg: Color::Rgb(243, 139, 168),     // #f38ba8 (red)
        dim_fg: Color::Rgb(108, 112, 134),
    }
}

/// Light theme — Catppuccin Latte.
pub fn light_theme() -> ThemeColors {
    ThemeColors {
        dir_fg: Color::Rgb(30, 102, 245),        // #1e66f5 (blue)
        file_fg: Color::Rgb(64, 160, 43),        // #40a02b (green)
        selected_bg: Color::Rgb(204, 208, 218),  // #ccd0da (surface1)
        selected_fg: Color::Rgb(76, 79, 105),    // #4c4f69 (text)
        header_fg: Color::Rgb(92, 95, 119),      // #5c5f77 (subtext1)

        content_fg: Color::Rgb(76, 79, 105),
        line_nr_fg: Color::Rgb(156, 160, 176),   // #9ca0b0 (overlay0)

        border_fg: Color::Rgb(172, 176, 190),    // #acb0be (surface2)
        border_focused_fg: Color::Rgb(30, 102, 245),

        help_bg: Color::Rgb(76, 79, 105),
        help_fg: Color::Rgb(239, 241, 245),      // #eff1f5 (base)

        error_fg: Color::Rgb(210, 15, 57),       // #d20f39 (red)
        dim_fg: Color::Rgb(156, 160, 176),
    }
}

// ── Color parsing ────────────────────────────────────────────────────────────

/// Parse a hex color string like `"#aabbcc"` into a `ratatui::style::Color`.
/// Returns `None` for malformed input.
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

fn apply(slot: &mut Color, value: Option<&String>) {
    if let Some(color) = value.and_then(|v| parse_hex_color(v)) {
        *slot = color;
    }
}

// ── Theme resolution ─────────────────────────────────────────────────────────

/// Resolve the final `ThemeColors` from config.
///
/// - `"dark"` (default): dark Catppuccin palette
/// - `"light"`: light Catppuccin palette
/// - `"custom"`: start from dark palette, then override with custom hex values
pub fn resolve_theme(config: &AppConfig) -> ThemeColors {
    match config.theme_scheme() {
        "light" => light_theme(),
        "custom" => {
            let mut theme = dark_theme();
            if let Some(custom) = &config.theme.custom {
                apply_custom_colors(&mut theme, custom);
            }
            theme
        }
        _ => dark_theme(),
    }
}

/// Apply custom hex color overrides on top of an existing theme.
fn apply_custom_colors(theme: &mut ThemeColors, custom: &ThemeColorsConfig) {
    apply(&mut theme.dir_fg, custom.dir_fg.as_ref());
    apply(&mut theme.file_fg, custom.file_fg.as_ref());
    apply(&mut theme.selected_bg, custom.selected_bg.as_ref());
    apply(&mut theme.selected_fg, custom.selected_fg.as_ref());
    apply(&mut theme.header_fg, custom.header_fg.as_ref());
    apply(&mut theme.content_fg, custom.content_fg.as_ref());
    apply(&mut theme.line_nr_fg, custom.line_nr_fg.as_ref());
    apply(&mut theme.border_fg, custom.border_fg.as_ref());
    apply(&mut theme.border_focused_fg, custom.border_focused_fg.as_ref());
    apply(&mut theme.help_bg, custom.help_bg.as_ref());
    apply(&mut theme.help_fg, custom.help_fg.as_ref());
}

// ── Tests ────────────────────────────────────────────────────────────────────
