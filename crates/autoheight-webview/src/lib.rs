//! Auto-sizing webview embedding.
//!
//! Lets a host embed HTML/JS content and have the surface track the content's
//! rendered dimensions, so the host never hard-codes a height:
//! - Bootstrap script generation (zoom policy, extra files/styles, the
//!   measurement loop)
//! - One-way size telemetry from the page, decoded and validated
//! - Reconciliation that notifies the host only on real size changes
//! - Config equivalence gating, so unchanged renders never re-create the
//!   webview instance
//! - Imperative pass-through control (stop/back/forward/reload/inject)
//!
//! The native engine is pluggable through [`WebViewEngine`]; enable the `wry`
//! feature for the [`wry`](https://crates.io/crates/wry)-backed child webview.

pub mod config;
pub mod engine;
pub mod error;
pub mod platform;
pub mod report;
pub mod script;
pub mod size;
pub mod update;
pub mod view;

pub use config::{FileLink, Source, ViewConfig, ViewStyle};
pub use engine::{MessageSink, WebViewEngine};
pub use error::{DecodeError, Result, ViewError};
pub use platform::PlatformProfile;
pub use report::SizeReport;
pub use script::build_bootstrap_script;
pub use size::{Size, SizeReconciler};
pub use update::equivalent;
pub use view::{AutoHeightView, ControlHandle, UpdateOutcome, ViewCallbacks, ViewState};

#[cfg(feature = "wry")]
pub use engine::wry::WryEngine;
