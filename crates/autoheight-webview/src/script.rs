//! Bootstrap script generation.
//!
//! The bootstrap is injected into the page's execution context at content
//! load. It wires the zoom policy, extra files and styles, any host-supplied
//! script, and finally the measurement loop that sustains auto-resize.
//!
//! Generation is pure and deterministic: the same configuration, by value,
//! always yields byte-identical script text, so re-injecting an unchanged
//! config is a no-op on the page.

use crate::config::{FileLink, ViewConfig};

/// Disables pinch and double-tap zoom inside the page by pinning the
/// viewport scale.
pub const ZOOM_DISABLE_SCRIPT: &str = r#"
(function() {
    var meta = document.querySelector('meta[name="viewport"]');
    if (!meta) {
        meta = document.createElement('meta');
        meta.name = 'viewport';
        (document.head || document.documentElement).appendChild(meta);
    }
    meta.content = 'width=device-width, initial-scale=1.0, maximum-scale=1.0, user-scalable=no';
})();
"#;

/// Measurement bootstrap. Measures the rendered document, posts
/// `{"height": h, "width": w}` as JSON text through the one-way channel,
/// and re-posts on load and on every subsequent layout-affecting mutation.
pub const SIZE_REPORT_SCRIPT: &str = r#"
(function() {
    function postSize() {
        if (!window.ipc || !document.documentElement) {
            return;
        }
        var doc = document.documentElement;
        var height = doc.scrollHeight;
        var width = doc.scrollWidth;
        if (document.body) {
            var rect = document.body.getBoundingClientRect();
            height = Math.max(height, Math.ceil(rect.height));
            width = Math.max(width, Math.ceil(rect.width));
        }
        window.ipc.postMessage(JSON.stringify({ height: height, width: width }));
    }
    window.addEventListener('load', postSize);
    window.addEventListener('resize', postSize);
    if (window.MutationObserver) {
        new MutationObserver(postSize).observe(document.documentElement, {
            attributes: true,
            childList: true,
            subtree: true,
            characterData: true
        });
    }
    if (window.ResizeObserver) {
        window.addEventListener('DOMContentLoaded', function() {
            new ResizeObserver(postSize).observe(document.body);
        });
    }
    postSize();
})();
"#;

/// Build the full bootstrap script for a configuration.
///
/// Concatenation order is fixed: zoom directive (only when zoom is disabled),
/// file tags in list order, custom style, custom script, then the measurement
/// bootstrap. Absent optional fields are simply omitted; building never fails.
pub fn build_bootstrap_script(config: &ViewConfig) -> String {
    let mut script = String::new();
    if !config.zoomable {
        script.push_str(ZOOM_DISABLE_SCRIPT);
    }
    for file in &config.files {
        script.push_str(&file_tag_js(file));
    }
    if let Some(css) = &config.custom_style {
        script.push_str(&style_injection_js(css));
    }
    if let Some(js) = &config.custom_script {
        script.push_str(js);
        script.push('\n');
    }
    script.push_str(SIZE_REPORT_SCRIPT);
    script
}

/// Escape a value for embedding in a single-quoted JS string literal.
fn escape_js(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}

/// JS that appends one `<link>` or `<script>` tag to the page head.
fn file_tag_js(file: &FileLink) -> String {
    let href = escape_js(&file.href);
    let mime = escape_js(&file.mime_type);
    if is_script_mime(&file.mime_type) {
        format!(
            "(function() {{\n  \
             var script = document.createElement('script');\n  \
             script.type = '{mime}';\n  \
             script.src = '{href}';\n  \
             (document.head || document.documentElement).appendChild(script);\n\
             }})();\n"
        )
    } else {
        let rel = escape_js(&file.rel);
        format!(
            "(function() {{\n  \
             var link = document.createElement('link');\n  \
             link.rel = '{rel}';\n  \
             link.type = '{mime}';\n  \
             link.href = '{href}';\n  \
             (document.head || document.documentElement).appendChild(link);\n\
             }})();\n"
        )
    }
}

fn is_script_mime(mime: &str) -> bool {
    matches!(mime, "application/javascript" | "text/javascript" | "module")
}

/// JS that injects the host-supplied CSS as a `<style>` block.
fn style_injection_js(css: &str) -> String {
    format!(
        "(function() {{\n  \
         var style = document.createElement('style');\n  \
         style.type = 'text/css';\n  \
         style.appendChild(document.createTextNode('{}'));\n  \
         (document.head || document.documentElement).appendChild(style);\n\
         }})();\n",
        escape_js(css)
    )
}
