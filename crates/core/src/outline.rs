//! Outline parser: freeform text into an ordered slide deck.
//!
//! The input is read line by line in a single pass. `# ` sets the deck title,
//! `## ` starts a new slide, bullet and `Notes:` lines fill the open slide,
//! and any other line is split into sentences that each become a bullet.

use crate::classify::{
    bullet_item, normalize_line_endings, notes_item, section_heading, split_sentences,
    title_heading,
};
use crate::{Deck, SlideDraft};

/// Title given to a slide whose content appears before any `## ` heading.
pub const DEFAULT_SLIDE_TITLE: &str = "Slide";

/// Parser for outline text.
#[derive(Debug, Clone)]
pub struct OutlineParser {
    /// Title for content that precedes the first section heading.
    default_title: String,
}

impl Default for OutlineParser {
    fn default() -> Self {
        Self {
            default_title: DEFAULT_SLIDE_TITLE.to_string(),
        }
    }
}

impl OutlineParser {
    /// Create a parser using [`DEFAULT_SLIDE_TITLE`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom title for content before the first heading.
    pub fn with_default_title(mut self, title: impl Into<String>) -> Self {
        self.default_title = title.into();
        self
    }

    /// Parse outline text into a deck. Never fails.
    pub fn parse(&self, raw: &str) -> Deck {
        let text = normalize_line_endings(raw);
        let mut deck = Deck::new();
        let mut current: Option<SlideDraft> = None;

        for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            if let Some(title) = title_heading(line) {
                deck.title = Some(title.to_string());
                continue;
            }

            if let Some(title) = section_heading(line) {
                flush(&mut deck, &mut current);
                current = Some(SlideDraft::new(title));
                continue;
            }

            let slide = current.get_or_insert_with(|| SlideDraft::new(self.default_title.as_str()));

            if let Some(item) = bullet_item(line) {
                slide.add_bullet(item);
            } else if let Some(note) = notes_item(line) {
                slide.add_note(note);
            } else {
                for sentence in split_sentences(line) {
                    slide.add_bullet(sentence);
                }
            }
        }

        flush(&mut deck, &mut current);

        log::debug!(
            "Parsed outline into {} slides ({} bullets)",
            deck.slides.len(),
            deck.bullet_count()
        );

        deck
    }
}

/// Move the open slide, if any, into the deck.
fn flush(deck: &mut Deck, current: &mut Option<SlideDraft>) {
    if let Some(slide) = current.take() {
        deck.add_slide(slide);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Deck {
        OutlineParser::new().parse(raw)
    }

    fn slide(title: &str, bullets: &[&str], notes: Option<&str>) -> SlideDraft {
        SlideDraft {
            title: title.to_string(),
            bullets: bullets.iter().map(|b| b.to_string()).collect(),
            notes: notes.map(str::to_string),
        }
    }

    #[test]
    fn test_parse_empty() {
        let deck = parse("");
        assert_eq!(deck.title, None);
        assert!(deck.slides.is_empty());
    }

    #[test]
    fn test_parse_only_blank_lines() {
        let deck = parse("\n   \n\t\n\r\n");
        assert_eq!(deck, Deck::new());
    }

    #[test]
    fn test_parse_title_only() {
        let deck = parse("# My Deck");
        assert_eq!(deck.title.as_deref(), Some("My Deck"));
        assert!(deck.slides.is_empty());
    }

    #[test]
    fn test_parse_full_example() {
        let deck = parse(
            "## Intro\n- A\n- B\nNotes: see speaker\n## Next\nHello world. Second sentence.",
        );

        assert_eq!(deck.title, None);
        assert_eq!(
            deck.slides,
            vec![
                slide("Intro", &["A", "B"], Some("see speaker")),
                slide("Next", &["Hello world.", "Second sentence."], None),
            ]
        );
    }

    #[test]
    fn test_parse_sentence_split() {
        assert_eq!(parse("## S\nOne. Two.").slides[0].bullets, vec!["One.", "Two."]);
        assert_eq!(parse("## S\nfoo.bar").slides[0].bullets, vec!["foo.bar"]);
    }

    #[test]
    fn test_notes_accumulate_in_order() {
        let deck = parse("## S\nNotes: first\nNote: second");
        assert_eq!(deck.slides[0].notes.as_deref(), Some("first\nsecond"));
    }

    #[test]
    fn test_empty_note_then_note_joins_after_newline() {
        assert_eq!(parse("## S\nNotes:").slides[0].notes.as_deref(), Some(""));
        assert_eq!(parse("## S\nNotes:\nNotes: x").slides[0].notes.as_deref(), Some("\nx"));
    }

    #[test]
    fn test_default_title_before_first_heading() {
        let deck = parse("Opening remark.\n## Real\n- x");
        assert_eq!(
            deck.slides,
            vec![
                slide(DEFAULT_SLIDE_TITLE, &["Opening remark."], None),
                slide("Real", &["x"], None),
            ]
        );
    }

    #[test]
    fn test_custom_default_title() {
        let deck = OutlineParser::new()
            .with_default_title("Untitled")
            .parse("- loose bullet");
        assert_eq!(deck.slides[0].title, "Untitled");
    }

    #[test]
    fn test_empty_section_heading_keeps_empty_title() {
        let deck = parse("## \n- a");
        assert_eq!(deck.slides, vec![slide("", &["a"], None)]);
    }

    #[test]
    fn test_heading_without_content_still_produces_slide() {
        let deck = parse("## One\n## Two");
        assert_eq!(deck.slides, vec![slide("One", &[], None), slide("Two", &[], None)]);
    }

    #[test]
    fn test_title_does_not_close_slide() {
        let deck = parse("## S\n- a\n# Deck\n- b");
        assert_eq!(deck.title.as_deref(), Some("Deck"));
        assert_eq!(deck.slides, vec![slide("S", &["a", "b"], None)]);
    }

    #[test]
    fn test_later_title_replaces_earlier() {
        let deck = parse("# First\n# Second");
        assert_eq!(deck.title.as_deref(), Some("Second"));
    }

    #[test]
    fn test_bullet_marker_takes_precedence_over_notes() {
        let deck = parse("## S\n- Notes: not a note");
        assert_eq!(deck.slides, vec![slide("S", &["Notes: not a note"], None)]);
    }

    #[test]
    fn test_malformed_markers_fall_through_to_prose() {
        let deck = parse("## S\n-dash. Next one\n### Deep heading");
        assert_eq!(
            deck.slides[0].bullets,
            vec!["-dash.", "Next one", "### Deep heading"]
        );
    }

    #[test]
    fn test_crlf_and_indentation() {
        let deck = parse("# T\r\n  ## S  \r\n\t* item\r\n");
        assert_eq!(deck.title.as_deref(), Some("T"));
        assert_eq!(deck.slides, vec![slide("S", &["item"], None)]);
    }

    #[test]
    fn test_slide_count_matches_headings() {
        let raw = "intro text\n## A\n## B\nprose\n## C";
        let deck = parse(raw);
        let headings = raw.lines().filter(|l| l.starts_with("## ")).count();
        assert_eq!(deck.slides.len(), headings + 1);
    }

    #[test]
    fn test_parse_is_deterministic() {
        let raw = "# D\n## A\n- x\nNotes: n\nSome prose. More prose!\n## B\n• y";
        assert_eq!(parse(raw), parse(raw));
    }
}
