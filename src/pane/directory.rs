use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::error::Result;
use crate::fs::listing::{self, Entry};

/// What happened when the selected entry was activated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// The pane moved to another directory, or stayed put at the root.
    Navigated,
    /// A file was selected; the caller decides what to do with it.
    FileChosen(PathBuf),
    /// Nothing to activate.
    Empty,
}

/// State for the directory listing pane.
///
/// Invariants: `selected < entries.len()` whenever the listing is non-empty,
/// and after `visible_window` the selection lies inside the viewport.
#[derive(Debug)]
pub struct DirectoryPane {
    current_path: PathBuf,
    entries: Vec<Entry>,
    selected: usize,
    viewport_start: usize,
}

impl DirectoryPane {
    /// Open a pane on `path`, which must be a readable directory.
    pub fn new(path: &Path) -> Result<Self> {
        listing::ensure_readable_dir(path)?;
        let entries = listing::list_directory(path)?;
        Ok(Self {
            current_path: path.to_path_buf(),
            entries,
            selected: 0,
            viewport_start: 0,
        })
    }

    pub fn current_path(&self) -> &Path {
        &self.current_path
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    #[cfg(test)]
    pub fn viewport_start(&self) -> usize {
        self.viewport_start
    }

    /// Switch to another directory and reset selection and scroll.
    ///
    /// On failure the pane keeps showing the previous directory.
    pub fn set_path(&mut self, path: &Path) -> Result<()> {
        listing::ensure_readable_dir(path)?;
        let entries = listing::list_directory(path)?;
        info!("entering {}", path.display());
        self.current_path = path.to_path_buf();
        self.entries = entries;
        self.selected = 0;
        self.viewport_start = 0;
        Ok(())
    }

    /// Re-list the current directory, keeping the selection as close to
    /// where it was as the new listing allows.
    pub fn refresh(&mut self) -> Result<()> {
        let entries = listing::list_directory(&self.current_path)?;
        debug!(
            "refreshed {} ({} entries)",
            self.current_path.display(),
            entries.len()
        );
        self.entries = entries;
        self.selected = self.selected.min(self.entries.len().saturating_sub(1));
        self.viewport_start = self.viewport_start.min(self.selected);
        Ok(())
    }

    /// Move the selection by `delta`, stopping at either end.
    pub fn move_selection(&mut self, delta: isize) {
        if self.entries.is_empty() {
            return;
        }
        let last = self.entries.len() - 1;
        self.selected = self.selected.saturating_add_signed(delta).min(last);
    }

    /// Enter the selected directory, or report the selected file.
    pub fn activate_selected(&mut self) -> Result<Activation> {
        let Some(entry) = self.entries.get(self.selected) else {
            return Ok(Activation::Empty);
        };

        if !entry.is_dir() {
            return Ok(Activation::FileChosen(listing::join_path(
                &self.current_path,
                &entry.name,
            )));
        }

        if entry.is_parent() {
            match listing::parent_of(&self.current_path) {
                Some(parent) => self.set_path(&parent)?,
                None => debug!("already at filesystem root"),
            }
        } else {
            let target = listing::join_path(&self.current_path, &entry.name);
            self.set_path(&target)?;
        }
        Ok(Activation::Navigated)
    }

    /// Scroll the viewport just enough to keep the selection visible and
    /// return `(start, count)` of the rows to draw.
    pub fn visible_window(&mut self, viewport_height: usize) -> (usize, usize) {
        if viewport_height == 0 || self.entries.is_empty() {
            return (self.viewport_start, 0);
        }
        if self.selected < self.viewport_start {
            self.viewport_start = self.selected;
        } else if self.selected >= self.viewport_start + viewport_height {
            self.viewport_start = self.selected + 1 - viewport_height;
        }
        let count = viewport_height.min(self.entries.len() - self.viewport_start);
        (self.viewport_start, count)
    }
}
