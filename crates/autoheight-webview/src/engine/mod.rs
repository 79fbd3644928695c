//! Seam between the controller and the native webview engine.
//!
//! The engine is an external collaborator: it renders the content, runs the
//! injected bootstrap, and delivers raw message bodies back through a one-way
//! mailbox. The controller only ever talks to it through [`WebViewEngine`],
//! so tests run against a mock and real hosts use the `wry` backend.

use std::sync::{Arc, Mutex};

use crate::error::Result;

#[cfg(feature = "wry")]
pub mod wry;

/// Imperative surface of the live engine instance.
///
/// Every operation is forwarded verbatim; the controller adds no semantics
/// beyond refusing to forward once the instance is gone.
pub trait WebViewEngine {
    /// Execute JavaScript in the page's execution context.
    fn evaluate_script(&self, js: &str) -> Result<()>;
    fn stop_loading(&self) -> Result<()>;
    fn go_back(&self) -> Result<()>;
    fn go_forward(&self) -> Result<()>;
    fn reload(&self) -> Result<()>;
}

/// One-way mailbox carrying raw message bodies from the page to the host.
///
/// The engine's message handler pushes; the host event loop drains and feeds
/// each body to the controller, in arrival order.
#[derive(Debug, Clone, Default)]
pub struct MessageSink {
    inner: Arc<Mutex<Vec<String>>>,
}

impl MessageSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, body: String) {
        if let Ok(mut messages) = self.inner.lock() {
            messages.push(body);
        }
    }

    /// Drain all pending message bodies, in arrival order.
    pub fn drain(&self) -> Vec<String> {
        match self.inner.lock() {
            Ok(mut messages) => std::mem::take(&mut *messages),
            Err(_) => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_preserves_arrival_order() {
        let sink = MessageSink::new();
        sink.push(r#"{"height":100,"width":320}"#.to_string());
        sink.push(r#"{"height":200,"width":320}"#.to_string());

        let drained = sink.drain();
        assert_eq!(drained.len(), 2);
        assert!(drained[0].contains("100"));
        assert!(drained[1].contains("200"));
    }

    #[test]
    fn drain_empties_the_sink() {
        let sink = MessageSink::new();
        sink.push("one".to_string());
        assert_eq!(sink.drain().len(), 1);
        assert!(sink.drain().is_empty());
    }

    #[test]
    fn clones_share_the_mailbox() {
        let sink = MessageSink::new();
        let handler_side = sink.clone();
        handler_side.push("body".to_string());
        assert_eq!(sink.drain(), vec!["body".to_string()]);
    }
}
