//! Line classification for outline text.
//!
//! Each predicate looks at a single trimmed line and either recognizes its
//! marker, returning the remainder, or returns `None`.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Bullet marker (`-`, `*`, `•`) followed by at least one whitespace character.
static BULLET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*•]\s+(.*)$").unwrap());

/// Case-insensitive `Note:` / `Notes:` prefix.
static NOTES_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^notes?:\s*(.*)$").unwrap());

/// Punctuation that can end a sentence.
const SENTENCE_TERMINALS: &[char] = &['.', '!', '?'];

/// Convert `\r\n` and lone `\r` line endings to `\n`.
pub fn normalize_line_endings(raw: &str) -> Cow<'_, str> {
    if raw.contains('\r') {
        Cow::Owned(raw.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(raw)
    }
}

/// Strip a heading marker, returning the trimmed remainder.
///
/// A line that is exactly the marker is a heading with empty text, since
/// trimming has already removed the space that followed it.
fn heading<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    if line == marker {
        return Some("");
    }
    line.strip_prefix(marker)
        .and_then(|rest| rest.strip_prefix(' '))
        .map(str::trim)
}

/// Deck title line: `# Title`.
pub fn title_heading(line: &str) -> Option<&str> {
    heading(line, "#")
}

/// Slide heading line: `## Section`.
pub fn section_heading(line: &str) -> Option<&str> {
    heading(line, "##")
}

/// Bullet line: `- item`, `* item`, or `• item`.
pub fn bullet_item(line: &str) -> Option<&str> {
    BULLET_REGEX
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Speaker-notes line: `Note: text` or `Notes: text`, any case.
pub fn notes_item(line: &str) -> Option<&str> {
    NOTES_REGEX
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Whether a character may start a new sentence.
fn starts_sentence(c: char) -> bool {
    c.is_uppercase() || c.is_ascii_digit()
}

/// Split prose into sentence-like segments.
///
/// A split happens after `.`, `!` or `?` only when whitespace follows and the
/// next non-space character is an uppercase letter or a digit. Segments are
/// trimmed and empty ones dropped.
pub fn split_sentences(line: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;
    for (idx, c) in line.char_indices() {
        if !SENTENCE_TERMINALS.contains(&c) {
            continue;
        }

        let end = idx + c.len_utf8();
        let rest = &line[end..];
        let after_space = rest.trim_start();

        // Require at least one whitespace character after the punctuation
        if after_space.len() == rest.len() {
            continue;
        }

        if after_space.chars().next().is_some_and(starts_sentence) {
            segments.push(&line[start..end]);
            start = end;
        }
    }
    segments.push(&line[start..]);

    segments
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}
