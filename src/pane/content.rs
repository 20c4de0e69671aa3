use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::error::Result;
use crate::fs::content::read_text_file;

/// What the content pane should draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentWindow {
    /// Nothing has been loaded yet.
    NoFile,
    /// A file is loaded but has no lines.
    EmptyFile,
    /// Draw `count` lines starting at `start`.
    Lines { start: usize, count: usize },
}

/// State for the file content pane.
///
/// Lines are kept untruncated; fitting them to the pane width happens at
/// render time. `viewport_start` never exceeds
/// `lines.len().saturating_sub(viewport_height)`.
#[derive(Debug, Default)]
pub struct ContentPane {
    source_path: Option<PathBuf>,
    lines: Vec<String>,
    viewport_start: usize,
    viewport_height: usize,
}

impl ContentPane {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    #[cfg(test)]
    pub fn viewport_start(&self) -> usize {
        self.viewport_start
    }

    pub fn viewport_height(&self) -> usize {
        self.viewport_height
    }

    /// Load `path`, replacing the current content.
    ///
    /// Returns `false` and keeps the previous content if the file cannot be
    /// read. See [`ContentPane::try_load`] for the underlying error.
    pub fn load(&mut self, path: &Path) -> bool {
        match self.try_load(path) {
            Ok(()) => true,
            Err(e) => {
                warn!("{}", e);
                false
            }
        }
    }

    /// Like [`ContentPane::load`], but hands the error back to the caller.
    pub fn try_load(&mut self, path: &Path) -> Result<()> {
        let lines = read_text_file(path)?;
        info!("loaded {} ({} lines)", path.display(), lines.len());
        self.lines = lines;
        self.source_path = Some(path.to_path_buf());
        self.viewport_start = 0;
        Ok(())
    }

    /// Largest valid viewport start for the current height.
    ///
    /// Before the first draw the height is unknown, so the start is kept on
    /// the last line.
    fn max_start(&self) -> usize {
        let height = self.viewport_height.max(1);
        self.lines.len().saturating_sub(height)
    }

    fn scroll_by(&mut self, delta: isize) {
        self.viewport_start = self
            .viewport_start
            .saturating_add_signed(delta)
            .min(self.max_start());
    }

    /// Scroll by single lines.
    pub fn scroll(&mut self, delta: isize) {
        self.scroll_by(delta);
    }

    /// Scroll by whole pages of `viewport_height` lines.
    pub fn page_scroll(&mut self, direction: isize, viewport_height: usize) {
        self.viewport_height = viewport_height;
        let step = isize::try_from(viewport_height).unwrap_or(isize::MAX);
        self.scroll_by(direction.saturating_mul(step));
    }

    /// Record the drawable height, re-clamp the viewport and describe what
    /// to draw.
    pub fn visible_window(&mut self, viewport_height: usize) -> ContentWindow {
        self.viewport_height = viewport_height;
        self.viewport_start = self.viewport_start.min(self.max_start());

        if self.source_path.is_none() {
            return ContentWindow::NoFile;
        }
        if self.lines.is_empty() {
            return ContentWindow::EmptyFile;
        }
        ContentWindow::Lines {
            start: self.viewport_start,
            count: viewport_height.min(self.lines.len() - self.viewport_start),
        }
    }
}
