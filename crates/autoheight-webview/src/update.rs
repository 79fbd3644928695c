//! Render-equivalence gate.
//!
//! Decides whether two successive configurations would render the same
//! embedded content. Equivalent configs must not trigger re-creation of the
//! webview instance: that would reload the page, flicker, and drop scroll
//! position. The comparison is structural over every declarative field and,
//! by construction, can never see host callbacks — those live in
//! [`crate::view::ViewCallbacks`], outside [`ViewConfig`], because hosts
//! recreate callbacks freely without any semantic change.

use crate::config::ViewConfig;

/// Structural equivalence over all declarative fields.
///
/// `ViewConfig` intentionally does not implement `PartialEq`; this is the one
/// place configurations are compared, so a new declarative field shows up
/// here or nowhere.
pub fn equivalent(prev: &ViewConfig, next: &ViewConfig) -> bool {
    prev.source == next.source
        && prev.style == next.style
        && prev.initial_height == next.initial_height
        && prev.custom_script == next.custom_script
        && prev.custom_style == next.custom_style
        && prev.zoomable == next.zoomable
        && prev.files == next.files
        && prev.origin_whitelist == next.origin_whitelist
        && prev.scales_page_to_fit == next.scales_page_to_fit
        && prev.shows_scroll_indicators == next.shows_scroll_indicators
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FileLink, Source, ViewConfig};

    fn base() -> ViewConfig {
        let mut config = ViewConfig::with_uri("https://example.com/doc.html");
        config.initial_height = Some(100.0);
        config.custom_style = Some("body { margin: 0; }".to_string());
        config
    }

    #[test]
    fn reflexive() {
        let config = base();
        assert!(equivalent(&config, &config));
        assert!(equivalent(&config, &config.clone()));
    }

    #[test]
    fn detects_source_change() {
        let prev = base();
        let mut next = base();
        next.source = Some(Source::Uri {
            uri: "https://example.com/other.html".to_string(),
        });
        assert!(!equivalent(&prev, &next));
    }

    #[test]
    fn detects_source_removal() {
        let prev = base();
        let mut next = base();
        next.source = None;
        assert!(!equivalent(&prev, &next));
    }

    #[test]
    fn detects_style_change() {
        let prev = base();
        let mut next = base();
        next.style.width = Some(480.0);
        assert!(!equivalent(&prev, &next));
    }

    #[test]
    fn detects_custom_script_change() {
        let prev = base();
        let mut next = base();
        next.custom_script = Some("console.log(1);".to_string());
        assert!(!equivalent(&prev, &next));
    }

    #[test]
    fn detects_custom_style_change() {
        let prev = base();
        let mut next = base();
        next.custom_style = Some("body { margin: 8px; }".to_string());
        assert!(!equivalent(&prev, &next));
    }

    #[test]
    fn detects_zoomable_change() {
        let prev = base();
        let mut next = base();
        next.zoomable = false;
        assert!(!equivalent(&prev, &next));
    }

    #[test]
    fn detects_files_change() {
        let prev = base();
        let mut next = base();
        next.files.push(FileLink {
            href: "extra.css".to_string(),
            mime_type: "text/css".to_string(),
            rel: "stylesheet".to_string(),
        });
        assert!(!equivalent(&prev, &next));
    }

    #[test]
    fn detects_file_reordering() {
        let css = FileLink {
            href: "a.css".to_string(),
            mime_type: "text/css".to_string(),
            rel: "stylesheet".to_string(),
        };
        let js = FileLink {
            href: "b.js".to_string(),
            mime_type: "text/javascript".to_string(),
            rel: "script".to_string(),
        };

        let mut prev = base();
        prev.files = vec![css.clone(), js.clone()];
        let mut next = base();
        next.files = vec![js, css];
        // Files load in list order, so order is semantically significant.
        assert!(!equivalent(&prev, &next));
    }

    #[test]
    fn detects_origin_whitelist_change() {
        let prev = base();
        let mut next = base();
        next.origin_whitelist = vec!["https://example.com".to_string()];
        assert!(!equivalent(&prev, &next));
    }

    #[test]
    fn detects_initial_height_change() {
        let prev = base();
        let mut next = base();
        next.initial_height = Some(200.0);
        assert!(!equivalent(&prev, &next));
    }

    #[test]
    fn both_empty_sources_are_equivalent() {
        let prev = ViewConfig::default();
        let next = ViewConfig::default();
        assert!(equivalent(&prev, &next));
    }
}
