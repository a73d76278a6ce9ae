//! Plugin options and the reference configuration payload.
//!
//! [`ReferenceConfiguration`] is the JSON object handed to the browser client;
//! every field is optional and omitted from the wire format when unset. The
//! fallback rules that complete a partial configuration live here as well:
//! a missing specification source is filled from a registered [`SpecProvider`],
//! and missing styling is filled with [`DEFAULT_CSS`](crate::theme::DEFAULT_CSS).

use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

use crate::theme::DEFAULT_CSS;

/// Capability interface for a companion that can produce an OpenAPI document
/// on demand, e.g. a specification generator that knows the host's routes.
///
/// The provider is injected at registration time; the plugin only calls it
/// while rendering, so the generated document may depend on state that is not
/// available until the host is fully wired up.
pub trait SpecProvider: Send + Sync {
    /// Produce the specification document to render.
    fn generate_spec(&self) -> serde_json::Value;
}

/// Options accepted at plugin registration time.
#[derive(Debug, Clone)]
pub struct ApiReferenceOptions {
    /// Route the HTML document is served from.
    pub route_prefix: String,
    /// Configuration forwarded to the browser client.
    pub configuration: Option<ReferenceConfiguration>,
}

impl Default for ApiReferenceOptions {
    fn default() -> Self {
        Self {
            route_prefix: "/".to_string(),
            configuration: None,
        }
    }
}

/// Configuration object for the Scalar API Reference client.
///
/// Serialized to camelCase JSON and embedded into the served HTML document.
/// Unset fields are left out entirely so the client applies its own defaults.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceConfiguration {
    /// Where the specification document comes from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec: Option<SpecSource>,
    /// Name of a predefined client theme.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    /// Client layout, `modern` or `classic`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    /// Proxy URL the client routes its try-it requests through.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy: Option<String>,
    /// Stylesheet injected into the client.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_css: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_sidebar: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark_mode: Option<bool>,
    /// Keyboard key opening the client's search palette.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_hot_key: Option<String>,
    /// Extra metadata (page title, OpenGraph tags) for the rendered page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_data: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_models: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_default_fonts: Option<bool>,
}

/// Specification source: inline content, or a URL the client fetches itself.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SpecSource {
    /// Inline specification content.
    ///
    /// Deferred content is omitted from the serialized configuration; it only
    /// shows up resolved, in the document body.
    #[serde(skip_serializing_if = "content_is_deferred_or_absent")]
    pub content: Option<SpecContent>,
    /// URL of a specification document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

fn content_is_deferred_or_absent(content: &Option<SpecContent>) -> bool {
    !matches!(content, Some(SpecContent::Inline(_)))
}

/// Inline specification content: a ready JSON value, or a deferred call into
/// a [`SpecProvider`] made once per render.
#[derive(Clone)]
pub enum SpecContent {
    /// A specification document supplied up front.
    Inline(serde_json::Value),
    /// A specification document generated when the page is rendered.
    Generated(Arc<dyn SpecProvider>),
}

impl SpecContent {
    /// Produce the specification document, invoking the provider if deferred.
    pub fn resolve(&self) -> serde_json::Value {
        match self {
            SpecContent::Inline(value) => value.clone(),
            SpecContent::Generated(provider) => provider.generate_spec(),
        }
    }
}

impl fmt::Debug for SpecContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpecContent::Inline(value) => f.debug_tuple("Inline").field(value).finish(),
            SpecContent::Generated(_) => f.write_str("Generated(..)"),
        }
    }
}

impl Serialize for SpecContent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SpecContent::Inline(value) => value.serialize(serializer),
            // Skipped at the field level; kept total for completeness.
            SpecContent::Generated(_) => serializer.serialize_unit(),
        }
    }
}

impl ReferenceConfiguration {
    /// Whether any specification source is configured, inline or by URL.
    pub fn has_spec_source(&self) -> bool {
        self.spec
            .as_ref()
            .map(|spec| spec.content.is_some() || spec.url.is_some())
            .unwrap_or(false)
    }

    pub(crate) fn needs_fallback(&self) -> bool {
        !self.has_spec_source() || (self.custom_css.is_none() && self.theme.is_none())
    }

    /// Derive the effective configuration for rendering.
    ///
    /// Two fills, both idempotent: a missing specification source becomes a
    /// deferred call into `provider` (when one is registered), and missing
    /// styling becomes the default stylesheet. Supplying either `theme` or
    /// `custom_css` suppresses the stylesheet fill. The receiver is left
    /// untouched.
    pub fn with_fallbacks(&self, provider: Option<&Arc<dyn SpecProvider>>) -> Self {
        let mut effective = self.clone();
        if !effective.has_spec_source() {
            if let Some(provider) = provider {
                effective.spec = Some(SpecSource {
                    content: Some(SpecContent::Generated(provider.clone())),
                    url: None,
                });
            }
        }
        if effective.custom_css.is_none() && effective.theme.is_none() {
            effective.custom_css = Some(DEFAULT_CSS.to_string());
        }
        effective
    }
}
