//! Domain types for representing a parsed deck.

use serde::{Deserialize, Serialize};

/// A parsed deck: an optional title plus slides in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    /// Deck title from a `# ` line, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Slides in the order their content appeared.
    #[serde(default)]
    pub slides: Vec<SlideDraft>,
}

impl Deck {
    /// Create an empty deck.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finished slide.
    pub fn add_slide(&mut self, slide: SlideDraft) {
        self.slides.push(slide);
    }

    /// Whether the deck has no slides.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Total number of bullets across all slides.
    pub fn bullet_count(&self) -> usize {
        self.slides.iter().map(|s| s.bullets.len()).sum()
    }
}

/// One slide's title, bullets, and speaker notes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideDraft {
    /// Slide title. May be empty when the heading had no text.
    pub title: String,

    /// Bullet statements in insertion order.
    #[serde(default)]
    pub bullets: Vec<String>,

    /// Speaker notes, newline-joined when several note lines were given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl SlideDraft {
    /// Create a slide with the given title and no content.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            bullets: Vec::new(),
            notes: None,
        }
    }

    /// Add a bullet to this slide.
    pub fn add_bullet(&mut self, text: impl Into<String>) {
        self.bullets.push(text.into());
    }

    /// Append a line of speaker notes, joining with a newline if notes exist.
    pub fn add_note(&mut self, text: &str) {
        match &mut self.notes {
            Some(notes) => {
                notes.push('\n');
                notes.push_str(text);
            }
            None => self.notes = Some(text.to_string()),
        }
    }
}
