//! The embedded view controller.
//!
//! `AutoHeightView` orchestrates one logical embedding: it builds the
//! bootstrap script for the current configuration, routes inbound messages
//! through decode and reconciliation, notifies the host on real size changes,
//! gates re-creation through the equivalence predicate, and exposes the
//! imperative control surface while the engine is alive.

use tracing::{debug, warn};

use crate::config::ViewConfig;
use crate::engine::WebViewEngine;
use crate::error::{Result, ViewError};
use crate::report::SizeReport;
use crate::script::build_bootstrap_script;
use crate::size::{Size, SizeReconciler};
use crate::update;

mod handle;

pub use handle::ControlHandle;

/// Lifecycle of one logical embedding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    /// No source configured; nothing renders, no script, no channel.
    Empty,
    /// Script built and size seeded, waiting for the engine to exist.
    Initializing,
    /// Engine bound; reports flow and control operations forward.
    Active,
    /// Torn down by the host. Late messages and control operations are
    /// no-ops; state never mutates again.
    Unmounted,
}

/// Host notification callbacks.
///
/// Kept apart from [`ViewConfig`] on purpose: hosts recreate these on every
/// render, and swapping a callback must never count as a configuration
/// change. Replace them any time via [`AutoHeightView::set_callbacks`].
#[derive(Default)]
pub struct ViewCallbacks {
    /// Every raw message body, forwarded before the size protocol sees it.
    pub on_message: Option<Box<dyn Fn(&str)>>,
    /// Invoked with the new dimensions, only on an actual size change.
    pub on_size_updated: Option<Box<dyn Fn(Size)>>,
}

/// What a configuration update amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Render-equivalent; existing instance kept untouched.
    Unchanged,
    /// Engine released and script rebuilt; the embedding must be recreated.
    Reconfigured,
    /// Source removed; embedding torn down, nothing renders.
    Cleared,
}

/// Controller for one auto-sizing embedded webview.
pub struct AutoHeightView<E: WebViewEngine> {
    state: ViewState,
    config: ViewConfig,
    script: Option<String>,
    reconciler: SizeReconciler,
    engine: Option<E>,
    callbacks: ViewCallbacks,
    layout_width: f64,
}

impl<E: WebViewEngine> AutoHeightView<E> {
    /// Create a controller for `config`.
    ///
    /// `layout_width` is the width the host environment lays the surface out
    /// at; it seeds the width until the first report lands when the style
    /// carries none.
    pub fn new(config: ViewConfig, callbacks: ViewCallbacks, layout_width: f64) -> Self {
        let reconciler = SizeReconciler::seed(&config, layout_width);
        let (state, script) = if config.has_source() {
            (
                ViewState::Initializing,
                Some(build_bootstrap_script(&config)),
            )
        } else {
            (ViewState::Empty, None)
        };
        Self {
            state,
            config,
            script,
            reconciler,
            engine: None,
            callbacks,
            layout_width,
        }
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    /// Currently displayed dimensions.
    pub fn size(&self) -> Size {
        self.reconciler.last()
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Script to inject at content load; `None` while nothing should render.
    pub fn bootstrap_script(&self) -> Option<&str> {
        self.script.as_deref()
    }

    /// Bind the live engine instance. `Initializing` becomes `Active`.
    ///
    /// Ignored (the engine is dropped) when there is nothing to render or the
    /// view was already unmounted.
    pub fn attach_engine(&mut self, engine: E) {
        match self.state {
            ViewState::Initializing | ViewState::Active => {
                self.engine = Some(engine);
                self.state = ViewState::Active;
                debug!("engine attached");
            }
            ViewState::Empty => warn!("engine attach ignored: no source configured"),
            ViewState::Unmounted => warn!("engine attach ignored: view unmounted"),
        }
    }

    /// Route one raw message body from the measurement channel.
    ///
    /// The raw text is forwarded to `on_message` first; then the size
    /// protocol decodes, reconciles, and notifies `on_size_updated` exactly
    /// once per actual change. Malformed payloads are absorbed. Messages
    /// arriving after teardown are discarded without touching state.
    pub fn handle_message(&mut self, raw: &str) {
        match self.state {
            ViewState::Unmounted | ViewState::Empty => {
                debug!("message discarded: no live embedding");
                return;
            }
            ViewState::Initializing | ViewState::Active => {}
        }

        if let Some(on_message) = &self.callbacks.on_message {
            on_message(raw);
        }

        let report = match SizeReport::decode(raw) {
            Ok(report) => report,
            Err(e) => {
                debug!(error = %e, "size report discarded");
                return;
            }
        };

        if let Some(size) = self.reconciler.reconcile(report) {
            debug!(height = size.height, width = size.width, "size updated");
            if let Some(on_size_updated) = &self.callbacks.on_size_updated {
                on_size_updated(size);
            }
        }
    }

    /// Apply a new configuration from the host.
    ///
    /// Equivalent configs leave the instance untouched. A materially changed
    /// config means reconstruction: the engine is released, the bootstrap
    /// script is rebuilt, and the host recreates the embedding through
    /// [`Self::bootstrap_script`] and [`Self::attach_engine`], exactly as on
    /// first mount. Removing the source tears the embedding down into the
    /// valid "render nothing" state.
    pub fn update(&mut self, next: ViewConfig) -> UpdateOutcome {
        if self.state == ViewState::Unmounted {
            warn!("config update ignored: view unmounted");
            return UpdateOutcome::Unchanged;
        }

        if !next.has_source() {
            let had_content = self.state != ViewState::Empty;
            self.engine = None;
            self.script = None;
            self.config = next;
            self.state = ViewState::Empty;
            if had_content {
                debug!("source removed, embedding torn down");
                UpdateOutcome::Cleared
            } else {
                UpdateOutcome::Unchanged
            }
        } else if self.config.has_source() && update::equivalent(&self.config, &next) {
            debug!("config equivalent, instance kept");
            UpdateOutcome::Unchanged
        } else {
            // Non-equivalence means reconstruction: the old engine is
            // released so the stale page cannot stay bound, and the host
            // goes through the first-mount path again.
            if self.engine.take().is_some() {
                debug!("config changed, engine released for rebuild");
            }
            if self.state == ViewState::Empty {
                // First config with a source: seed size state afresh.
                self.reconciler = SizeReconciler::seed(&next, self.layout_width);
            }
            self.script = Some(build_bootstrap_script(&next));
            self.config = next;
            self.state = ViewState::Initializing;
            UpdateOutcome::Reconfigured
        }
    }

    /// Replace the host callbacks. Never counts as a configuration change.
    pub fn set_callbacks(&mut self, callbacks: ViewCallbacks) {
        self.callbacks = callbacks;
    }

    /// Borrow the imperative control surface.
    ///
    /// Fails with [`ViewError::StaleHandle`] once the engine is gone, so a
    /// stale capability can never be invoked.
    pub fn control(&self) -> Result<ControlHandle<'_, E>> {
        match &self.engine {
            Some(engine) => Ok(ControlHandle::new(engine)),
            None => Err(ViewError::StaleHandle),
        }
    }

    /// Tear the embedding down. Terminal: every later message is a no-op and
    /// every later control acquisition reports `StaleHandle`.
    pub fn unmount(&mut self) {
        self.engine = None;
        self.script = None;
        self.state = ViewState::Unmounted;
        debug!("view unmounted");
    }
}
