//! Outline text output.
//!
//! Renders a deck back into the marker grammar the parser reads, with slides
//! separated by a blank line.

use crate::{Deck, SlideDraft};

/// Markers the parser recognizes as bullets.
const BULLET_MARKERS: &[char] = &['-', '*', '•'];

/// Formatter that writes a [`Deck`] as outline text.
#[derive(Debug, Clone)]
pub struct OutlineFormatter {
    /// Character written before each bullet.
    bullet_marker: char,
}

impl Default for OutlineFormatter {
    fn default() -> Self {
        Self { bullet_marker: '-' }
    }
}

impl OutlineFormatter {
    /// Create a new formatter using `-` bullets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different bullet marker. Characters the parser would not read
    /// back as a bullet are ignored.
    pub fn with_bullet_marker(mut self, marker: char) -> Self {
        if BULLET_MARKERS.contains(&marker) {
            self.bullet_marker = marker;
        }
        self
    }

    /// Format a deck as outline text.
    ///
    /// # Example output
    /// ```text
    /// # My Deck
    ///
    /// ## Intro
    /// - A
    /// - B
    /// Notes: see speaker
    ///
    /// ## Next
    /// - Hello world.
    /// ```
    pub fn format(&self, deck: &Deck) -> String {
        let mut blocks: Vec<String> = Vec::with_capacity(deck.slides.len() + 1);

        if let Some(title) = &deck.title {
            blocks.push(format!("# {}", title));
        }

        blocks.extend(deck.slides.iter().map(|slide| self.format_slide(slide)));

        blocks.join("\n\n")
    }

    /// Format and add a trailing newline, unless the output is empty.
    pub fn format_with_newline(&self, deck: &Deck) -> String {
        let formatted = self.format(deck);
        if formatted.is_empty() {
            formatted
        } else {
            format!("{}\n", formatted)
        }
    }

    fn format_slide(&self, slide: &SlideDraft) -> String {
        let mut lines = vec![format!("## {}", slide.title)];

        lines.extend(
            slide
                .bullets
                .iter()
                .map(|b| format!("{} {}", self.bullet_marker, b)),
        );

        if let Some(notes) = &slide.notes {
            lines.extend(notes.split('\n').map(|n| format!("Notes: {}", n)));
        }

        lines.join("\n")
    }
}
