//! Declarative view configuration.
//!
//! A `ViewConfig` is immutable per render: the host builds a fresh value on
//! every prop change and hands it to the controller, which decides through
//! [`crate::update::equivalent`] whether anything material changed. Defaults
//! are baked in at construction from a [`PlatformProfile`] table and validated
//! once, never re-checked per access.
//!
//! Host notification callbacks deliberately live elsewhere
//! ([`crate::view::ViewCallbacks`]) so that swapping a callback can never look
//! like a configuration change.

use serde::{Deserialize, Serialize};

use crate::platform::PlatformProfile;

/// What the embedded webview should display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Source {
    /// Load a URI.
    Uri { uri: String },
    /// Render inline markup. `base_url` anchors relative asset references;
    /// when absent the platform default convention applies.
    Html {
        html: String,
        #[serde(rename = "baseUrl", default, skip_serializing_if = "Option::is_none")]
        base_url: Option<String>,
    },
}

impl Source {
    /// Base URL for resolving relative assets, falling back to the platform
    /// default convention. Only meaningful for inline markup.
    pub fn base_url_or_default(&self, profile: PlatformProfile) -> Option<&str> {
        match self {
            Source::Uri { .. } => None,
            Source::Html { base_url, .. } => Some(
                base_url
                    .as_deref()
                    .unwrap_or_else(|| profile.default_base_url()),
            ),
        }
    }
}

/// An external stylesheet or script to inject into the page head.
///
/// Injection order follows list order; files load in the order given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileLink {
    pub href: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    pub rel: String,
}

/// Host-side layout style. `height`/`width` seed the initial size before the
/// first measurement arrives.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewStyle {
    pub width: Option<f64>,
    pub height: Option<f64>,
}

/// Full declarative configuration of one embedding.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewConfig {
    /// Content to display; `None` means render nothing at all.
    pub source: Option<Source>,
    #[serde(default)]
    pub style: ViewStyle,
    /// Overrides the seeded height until the first size report lands.
    pub initial_height: Option<f64>,
    /// Injected verbatim into the bootstrap script.
    pub custom_script: Option<String>,
    /// Wrapped as an injected stylesheet block.
    pub custom_style: Option<String>,
    /// `false` disables pinch and double-tap zoom inside the page.
    pub zoomable: bool,
    /// External stylesheet/script references, injected in order.
    pub files: Vec<FileLink>,
    /// Origins the page may navigate to. `["*"]` allows everything.
    pub origin_whitelist: Vec<String>,
    pub scales_page_to_fit: bool,
    pub shows_scroll_indicators: bool,
}

impl ViewConfig {
    /// Defaults for an explicit platform profile.
    pub fn for_profile(profile: PlatformProfile) -> Self {
        Self {
            source: None,
            style: ViewStyle::default(),
            initial_height: None,
            custom_script: None,
            custom_style: None,
            zoomable: true,
            files: Vec::new(),
            origin_whitelist: vec!["*".to_string()],
            scales_page_to_fit: profile.scales_page_to_fit(),
            shows_scroll_indicators: false,
        }
    }

    /// A config that loads a URI, with detected-platform defaults.
    pub fn with_uri(uri: impl Into<String>) -> Self {
        Self {
            source: Some(Source::Uri { uri: uri.into() }),
            ..Default::default()
        }
    }

    /// A config that renders inline markup, with detected-platform defaults.
    pub fn with_html(html: impl Into<String>) -> Self {
        Self {
            source: Some(Source::Html {
                html: html.into(),
                base_url: None,
            }),
            ..Default::default()
        }
    }

    /// Whether there is anything to render. An absent source is the valid
    /// "render nothing" contract, not an error.
    pub fn has_source(&self) -> bool {
        self.source.is_some()
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self::for_profile(PlatformProfile::detect())
    }
}
