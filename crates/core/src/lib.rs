//! Core deck types, outline parsing, and slide-builder payload assembly
//! for turning freeform outlines into slide decks.

pub mod classify;
pub mod error;
pub mod formatter;
pub mod outline;
pub mod request;
pub mod types;

pub use error::{Error, Result};
pub use formatter::OutlineFormatter;
pub use outline::{OutlineParser, DEFAULT_SLIDE_TITLE};
pub use request::{BuildPayload, DeckConfig, DeckRequest};
pub use types::{Deck, SlideDraft};
