pub mod content;
pub mod extensions;
pub mod listing;
