use crossterm::event::{self, Event as CrosstermEvent, KeyEvent};

use crate::error::Result;

/// Application events.
#[derive(Debug)]
pub enum Event {
    /// A key press event.
    Key(KeyEvent),
    /// Terminal resize event; the next draw picks up the new size.
    Resize(u16, u16),
}

/// Block until the next event the application cares about.
///
/// Mouse, focus and paste events are skipped.
pub fn next_event() -> Result<Event> {
    loop {
        match event::read()? {
            CrosstermEvent::Key(key) => return Ok(Event::Key(key)),
            CrosstermEvent::Resize(w, h) => return Ok(Event::Resize(w, h)),
            _ => {}
        }
    }
}
