use crate::engine::WebViewEngine;
use crate::error::Result;

/// Imperative pass-through surface over the live engine.
///
/// Obtainable only from a view that still has its engine; a torn-down view
/// reports `StaleHandle` at acquisition instead of handing out a dangling
/// capability. Every operation forwards verbatim.
pub struct ControlHandle<'a, E: WebViewEngine> {
    engine: &'a E,
}

impl<'a, E: WebViewEngine> ControlHandle<'a, E> {
    pub(super) fn new(engine: &'a E) -> Self {
        Self { engine }
    }

    pub fn stop_loading(&self) -> Result<()> {
        self.engine.stop_loading()
    }

    pub fn go_back(&self) -> Result<()> {
        self.engine.go_back()
    }

    pub fn go_forward(&self) -> Result<()> {
        self.engine.go_forward()
    }

    pub fn reload(&self) -> Result<()> {
        self.engine.reload()
    }

    /// Run arbitrary JavaScript in the page context.
    pub fn inject_script(&self, js: &str) -> Result<()> {
        self.engine.evaluate_script(js)
    }
}
