//! Size state and reconciliation.
//!
//! The measurement bootstrap re-measures on every layout pass, so the channel
//! carries many duplicate reports. The reconciler is what keeps duplicates
//! from reaching the host: it owns the last-known size and only signals when a
//! field actually changed.

use serde::{Deserialize, Serialize};

use crate::config::ViewConfig;
use crate::report::SizeReport;

/// Rendered dimensions of the embedded content.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub height: f64,
    pub width: f64,
}

impl Size {
    pub const ZERO: Size = Size {
        height: 0.0,
        width: 0.0,
    };
}

/// Holds the last-known size and applies new measurements.
#[derive(Debug, Clone)]
pub struct SizeReconciler {
    last: Size,
}

impl SizeReconciler {
    pub fn new(initial: Size) -> Self {
        Self { last: initial }
    }

    /// Seed the initial size from the configuration, before any report lands.
    ///
    /// Height: `initial_height`, else `style.height`, else zero. Width:
    /// `style.width`, else `layout_width` — the width the host environment
    /// lays the surface out at.
    pub fn seed(config: &ViewConfig, layout_width: f64) -> Self {
        let height = config
            .initial_height
            .or(config.style.height)
            .unwrap_or(0.0);
        let width = config.style.width.unwrap_or(layout_width);
        Self::new(Size { height, width })
    }

    /// The last-known size.
    pub fn last(&self) -> Size {
        self.last
    }

    /// Apply a report. Returns the new size if either field changed, `None`
    /// if the report is a duplicate (state untouched).
    ///
    /// Comparison is exact; the page-side measurement rounds to whole pixels.
    pub fn reconcile(&mut self, report: SizeReport) -> Option<Size> {
        let next = Size {
            height: report.height,
            width: report.width,
        };
        if next == self.last {
            return None;
        }
        self.last = next;
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(height: f64, width: f64) -> SizeReport {
        SizeReport { height, width }
    }

    // -- Seeding --

    #[test]
    fn seed_prefers_initial_height() {
        let mut config = ViewConfig::default();
        config.initial_height = Some(100.0);
        config.style.height = Some(50.0);

        let reconciler = SizeReconciler::seed(&config, 320.0);
        assert_eq!(reconciler.last().height, 100.0);
    }

    #[test]
    fn seed_falls_back_to_style_height() {
        let mut config = ViewConfig::default();
        config.style.height = Some(50.0);

        let reconciler = SizeReconciler::seed(&config, 320.0);
        assert_eq!(reconciler.last().height, 50.0);
    }

    #[test]
    fn seed_height_defaults_to_zero() {
        let config = ViewConfig::default();
        let reconciler = SizeReconciler::seed(&config, 320.0);
        assert_eq!(reconciler.last().height, 0.0);
    }

    #[test]
    fn seed_width_prefers_style_over_layout() {
        let mut config = ViewConfig::default();
        config.style.width = Some(200.0);

        let reconciler = SizeReconciler::seed(&config, 320.0);
        assert_eq!(reconciler.last().width, 200.0);
    }

    #[test]
    fn seed_width_uses_layout_width() {
        let config = ViewConfig::default();
        let reconciler = SizeReconciler::seed(&config, 320.0);
        assert_eq!(reconciler.last().width, 320.0);
    }

    // -- Reconciliation --

    #[test]
    fn change_in_either_field_signals_once() {
        let mut reconciler = SizeReconciler::new(Size {
            height: 100.0,
            width: 320.0,
        });

        let changed = reconciler.reconcile(report(250.0, 320.0));
        assert_eq!(
            changed,
            Some(Size {
                height: 250.0,
                width: 320.0
            })
        );
        assert_eq!(reconciler.last().height, 250.0);

        let changed = reconciler.reconcile(report(250.0, 300.0));
        assert_eq!(
            changed,
            Some(Size {
                height: 250.0,
                width: 300.0
            })
        );
    }

    #[test]
    fn duplicate_report_is_suppressed() {
        let mut reconciler = SizeReconciler::new(Size {
            height: 250.0,
            width: 300.0,
        });

        assert_eq!(reconciler.reconcile(report(250.0, 300.0)), None);
        assert_eq!(
            reconciler.last(),
            Size {
                height: 250.0,
                width: 300.0
            }
        );
    }

    #[test]
    fn repeated_duplicates_never_signal() {
        let mut reconciler = SizeReconciler::new(Size::ZERO);

        assert!(reconciler.reconcile(report(100.0, 320.0)).is_some());
        for _ in 0..5 {
            assert_eq!(reconciler.reconcile(report(100.0, 320.0)), None);
        }
        assert!(reconciler.reconcile(report(101.0, 320.0)).is_some());
    }
}
