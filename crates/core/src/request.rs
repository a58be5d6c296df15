//! Request handling around the outline parser.
//!
//! A host (HTTP handler, CLI, worker) receives a [`DeckRequest`], turns it
//! into a [`BuildPayload`] with [`DeckRequest::into_payload`], and forwards the
//! payload to the slide-building service itself.

use crate::{Error, OutlineParser, Result, SlideDraft, DEFAULT_SLIDE_TITLE};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Environment variable naming the default slide template.
pub const TEMPLATE_ENV_VAR: &str = "DECK_TEMPLATE_ID";

/// Environment variable overriding the title of untitled leading slides.
pub const DEFAULT_SLIDE_TITLE_ENV_VAR: &str = "DECK_DEFAULT_SLIDE_TITLE";

/// Settings a host supplies alongside each request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeckConfig {
    /// Template used when the request does not name one.
    pub default_template: Option<String>,

    /// Title for content that precedes the first section heading.
    pub default_slide_title: String,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            default_template: None,
            default_slide_title: DEFAULT_SLIDE_TITLE.to_string(),
        }
    }
}

impl DeckConfig {
    /// Create a config with no default template.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from `DECK_TEMPLATE_ID` and `DECK_DEFAULT_SLIDE_TITLE`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(template) = non_blank(lookup(TEMPLATE_ENV_VAR).as_deref()) {
            config.default_template = Some(template.to_string());
        }
        if let Some(title) = non_blank(lookup(DEFAULT_SLIDE_TITLE_ENV_VAR).as_deref()) {
            config.default_slide_title = title.to_string();
        }

        config
    }

    /// Set the fallback template. A blank value leaves it unset.
    pub fn with_default_template(mut self, template: impl Into<String>) -> Self {
        let template = template.into();
        if let Some(template) = non_blank(Some(template.as_str())) {
            self.default_template = Some(template.to_string());
        }
        self
    }

    /// Set the title for content before the first heading. A blank value
    /// keeps the current title.
    pub fn with_default_slide_title(mut self, title: impl Into<String>) -> Self {
        let title = title.into();
        if let Some(title) = non_blank(Some(title.as_str())) {
            self.default_slide_title = title.to_string();
        }
        self
    }

    /// Build the parser these settings describe.
    pub fn parser(&self) -> OutlineParser {
        OutlineParser::new().with_default_title(self.default_slide_title.as_str())
    }
}

/// A caller's request to build a deck from outline text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeckRequest {
    /// Raw outline text.
    #[serde(default, alias = "text")]
    pub outline: Option<String>,

    /// Explicit deck title; wins over a `# ` line in the outline.
    #[serde(default)]
    pub title: Option<String>,

    /// Slide template identifier.
    #[serde(default, alias = "templateId")]
    pub template_id: Option<String>,

    /// Extra fields passed through to the slide builder untouched.
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

impl DeckRequest {
    /// Create a request for the given outline text.
    pub fn new(outline: impl Into<String>) -> Self {
        Self {
            outline: Some(outline.into()),
            ..Self::default()
        }
    }

    /// Parse a request from a JSON body.
    pub fn from_json(body: &str) -> Result<Self> {
        serde_json::from_str(body).map_err(|e| Error::InvalidRequest(e.to_string()))
    }

    /// Override the deck title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Select a template.
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template_id = Some(template.into());
        self
    }

    /// Validate the request, parse its outline, and assemble the payload.
    pub fn into_payload(self, config: &DeckConfig) -> Result<BuildPayload> {
        let outline = match self.outline.as_deref() {
            Some(text) if !text.trim().is_empty() => text,
            _ => return Err(Error::MissingOutline),
        };

        let template_id = non_blank(self.template_id.as_deref())
            .map(str::to_string)
            .or_else(|| non_blank(config.default_template.as_deref()).map(str::to_string))
            .ok_or(Error::MissingTemplate)?;

        let deck = config.parser().parse(outline);

        let title = non_blank(self.title.as_deref())
            .map(str::to_string)
            .or(deck.title);

        log::debug!(
            "Built payload for template {} with {} slides",
            template_id,
            deck.slides.len()
        );

        Ok(BuildPayload {
            title,
            template_id,
            slides: deck.slides,
            metadata: self.metadata,
        })
    }
}

/// Body forwarded to the slide-building service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildPayload {
    /// Deck title: the request override, else the parsed title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Selected slide template.
    pub template_id: String,

    /// Parsed slides in order.
    pub slides: Vec<SlideDraft>,

    /// Caller metadata passed through.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub metadata: Map<String, Value>,
}

impl BuildPayload {
    /// Serialize to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
