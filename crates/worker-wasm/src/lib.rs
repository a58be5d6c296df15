//! WASM-compatible wrapper for outline parsing.
//!
//! This crate exposes deck parsing and payload assembly to JavaScript
//! for use in Cloudflare Workers. The worker owns the HTTP side: it hands the
//! request body in here and forwards the returned payload to the slide builder.

use deck_core::{BuildPayload, Deck, DeckConfig, DeckRequest, OutlineFormatter, OutlineParser};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    // Set up better panic messages in the console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Result of formatting a deck as outline text.
#[derive(Debug, Serialize, Deserialize)]
pub struct FormatResult {
    /// The outline text.
    pub text: String,
    /// Number of slides written.
    pub slide_count: usize,
}

/// Serialize to plain JS objects rather than `Map`s, so pass-through metadata
/// reaches `JSON.stringify` intact.
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Parse outline text into a deck object.
///
/// # Returns
/// `{ title?: string, slides: [{ title, bullets, notes? }] }`
#[wasm_bindgen]
pub fn parse_outline(text: &str) -> Result<JsValue, JsValue> {
    to_js(&parse_outline_impl(text))
}

fn parse_outline_impl(text: &str) -> Deck {
    OutlineParser::new().parse(text)
}

/// Validate a request body and build the slide-builder payload.
///
/// # Arguments
/// * `request` - The caller's JSON body (`outline`, `title`, `templateId`, `metadata`)
/// * `default_template` - Template to use when the request names none, usually
///   read from the worker environment
///
/// # Returns
/// The payload object, or throws a string describing why the request was rejected.
#[wasm_bindgen]
pub fn build_payload(
    request: JsValue,
    default_template: Option<String>,
) -> Result<JsValue, JsValue> {
    let request: DeckRequest = serde_wasm_bindgen::from_value(request)
        .map_err(|e| JsValue::from_str(&format!("Invalid request: {}", e)))?;

    let payload = build_payload_impl(request, default_template)
        .map_err(|e| JsValue::from_str(&e))?;

    to_js(&payload)
}

fn build_payload_impl(
    request: DeckRequest,
    default_template: Option<String>,
) -> Result<BuildPayload, String> {
    let mut config = DeckConfig::new();
    if let Some(template) = default_template.filter(|t| !t.trim().is_empty()) {
        config = config.with_default_template(template);
    }

    request.into_payload(&config).map_err(|e| e.to_string())
}

/// Render a deck object back to outline text.
#[wasm_bindgen]
pub fn format_outline(deck: JsValue) -> Result<JsValue, JsValue> {
    let deck: Deck = serde_wasm_bindgen::from_value(deck)
        .map_err(|e| JsValue::from_str(&format!("Invalid deck: {}", e)))?;

    to_js(&format_outline_impl(&deck))
}

fn format_outline_impl(deck: &Deck) -> FormatResult {
    FormatResult {
        text: OutlineFormatter::new().format_with_newline(deck),
        slide_count: deck.slides.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_outline_impl() {
        let deck = parse_outline_impl("# Course\n## Week 1\n- Intro");
        assert_eq!(deck.title.as_deref(), Some("Course"));
        assert_eq!(deck.slides.len(), 1);
        assert_eq!(deck.slides[0].bullets, vec!["Intro"]);
    }

    #[test]
    fn test_build_payload_uses_default_template() {
        let payload =
            build_payload_impl(DeckRequest::new("## A"), Some("env-template".to_string()))
                .unwrap();
        assert_eq!(payload.template_id, "env-template");
    }

    #[test]
    fn test_build_payload_blank_default_is_missing() {
        let err = build_payload_impl(DeckRequest::new("## A"), Some("  ".to_string())).unwrap_err();
        assert!(err.contains("template"));
    }

    #[test]
    fn test_build_payload_missing_outline() {
        let err = build_payload_impl(DeckRequest::default(), Some("t".to_string())).unwrap_err();
        assert_eq!(err, "Missing outline text");
    }

    #[test]
    fn test_format_outline_impl() {
        let deck = parse_outline_impl("## A\n- x\n## B");
        let result = format_outline_impl(&deck);

        assert_eq!(result.slide_count, 2);
        assert_eq!(result.text, "## A\n- x\n\n## B\n");
    }
}
