//! `wry`-backed engine.
//!
//! Builds a child webview inside a host window, injects the bootstrap script
//! as an initialization script, and wires the page's `window.ipc.postMessage`
//! channel into a [`MessageSink`] for the host event loop to drain.

use tracing::{debug, warn};

use ::wry::raw_window_handle;
use ::wry::{WebView, WebViewBuilder};

use crate::config::{Source, ViewConfig};
use crate::engine::{MessageSink, WebViewEngine};
use crate::error::{Result, ViewError};
use crate::script::build_bootstrap_script;

/// A live child webview bound to a host window.
pub struct WryEngine {
    webview: WebView,
}

impl WryEngine {
    /// Create a child webview for `config` inside `window`.
    ///
    /// The bootstrap script is attached as an initialization script so it
    /// runs in the page context at every content load. Raw message bodies
    /// posted by the page land in `sink` in arrival order.
    ///
    /// Inline markup is loaded as-is: wry exposes no per-document base URL,
    /// so [`Source::base_url_or_default`] is not applied here. Hosts that
    /// bundle assets resolve it themselves, typically by serving them under
    /// a custom protocol and using absolute hrefs.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        window: &W,
        bounds: ::wry::Rect,
        config: &ViewConfig,
        sink: MessageSink,
    ) -> Result<Self> {
        let bootstrap = build_bootstrap_script(config);
        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_transparent(true)
            .with_focused(false)
            .with_initialization_script(bootstrap.as_str());

        builder = attach_message_channel(builder, sink);
        builder = attach_origin_whitelist(builder, config.origin_whitelist.clone());

        builder = match &config.source {
            Some(Source::Uri { uri }) => builder.with_url(uri),
            Some(Source::Html { html, .. }) => builder.with_html(html),
            // An empty source never reaches the engine; the controller stays
            // in its empty state. Render a blank page if it happens anyway.
            None => builder.with_html("<html><body></body></html>"),
        };

        let webview = builder
            .build_as_child(window)
            .map_err(|e| ViewError::Engine(e.to_string()))?;

        debug!("child webview created");
        Ok(Self { webview })
    }

    /// The underlying wry webview.
    pub fn inner(&self) -> &WebView {
        &self.webview
    }
}

fn attach_message_channel(builder: WebViewBuilder<'_>, sink: MessageSink) -> WebViewBuilder<'_> {
    builder.with_ipc_handler(move |request| {
        let body = request.body().to_string();
        debug!(body_len = body.len(), "message from page");
        sink.push(body);
    })
}

fn attach_origin_whitelist(
    builder: WebViewBuilder<'_>,
    whitelist: Vec<String>,
) -> WebViewBuilder<'_> {
    builder.with_navigation_handler(move |url| {
        if origin_allowed(&whitelist, &url) {
            debug!(url = %url, "navigation allowed");
            true
        } else {
            warn!(url = %url, "navigation blocked: origin not whitelisted");
            false
        }
    })
}

/// Check a URL against the origin whitelist.
///
/// `"*"` allows everything; an entry ending in `*` is a prefix pattern. Any
/// other entry must match the URL up to a path/query boundary, so
/// `https://example.com` admits `https://example.com/page` but not the
/// lookalike host `https://example.com.evil.org/`.
pub fn origin_allowed(whitelist: &[String], url: &str) -> bool {
    whitelist.iter().any(|pattern| {
        if pattern == "*" {
            return true;
        }
        if let Some(prefix) = pattern.strip_suffix('*') {
            return url.starts_with(prefix);
        }
        match url.strip_prefix(pattern.as_str()) {
            Some(rest) => matches!(rest.chars().next(), None | Some('/' | '?' | '#')),
            None => false,
        }
    })
}

impl WebViewEngine for WryEngine {
    fn evaluate_script(&self, js: &str) -> Result<()> {
        self.webview
            .evaluate_script(js)
            .map_err(|e| ViewError::Engine(e.to_string()))
    }

    // History and load control run through the page context: wry does not
    // expose native history navigation on the webview itself.

    fn stop_loading(&self) -> Result<()> {
        self.evaluate_script("window.stop();")
    }

    fn go_back(&self) -> Result<()> {
        self.evaluate_script("history.back();")
    }

    fn go_forward(&self) -> Result<()> {
        self.evaluate_script("history.forward();")
    }

    fn reload(&self) -> Result<()> {
        self.evaluate_script("location.reload();")
    }
}
