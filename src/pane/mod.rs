//! Per-pane state: what each pane shows and where it is scrolled to.

pub mod content;
pub mod directory;
