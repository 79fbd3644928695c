//! Platform default profiles.
//!
//! Two webview environments differ in how a page is fitted to the surface and
//! where bundled asset files live. The profile is picked once at startup and
//! carries an explicit default table; nothing mutates shared defaults later.

/// Environment-specific configuration defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformProfile {
    /// Android system webview: page-fit scaling off, assets under
    /// `file:///android_asset/`.
    Android,
    /// WebKit-family hosts (iOS, macOS and everything else): page-fit scaling
    /// on, assets resolved relative to `web/`.
    Apple,
}

struct ProfileDefaults {
    scales_page_to_fit: bool,
    base_url: &'static str,
}

const ANDROID_DEFAULTS: ProfileDefaults = ProfileDefaults {
    scales_page_to_fit: false,
    base_url: "file:///android_asset/",
};

const APPLE_DEFAULTS: ProfileDefaults = ProfileDefaults {
    scales_page_to_fit: true,
    base_url: "web/",
};

impl PlatformProfile {
    /// Detect the profile for the current host environment.
    pub fn detect() -> Self {
        if cfg!(target_os = "android") {
            Self::Android
        } else {
            Self::Apple
        }
    }

    fn defaults(self) -> &'static ProfileDefaults {
        match self {
            Self::Android => &ANDROID_DEFAULTS,
            Self::Apple => &APPLE_DEFAULTS,
        }
    }

    /// Whether pages are scaled to fit the surface by default.
    pub fn scales_page_to_fit(self) -> bool {
        self.defaults().scales_page_to_fit
    }

    /// Default base URL for resolving bundled asset files.
    pub fn default_base_url(self) -> &'static str {
        self.defaults().base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn android_profile_disables_page_fit() {
        assert!(!PlatformProfile::Android.scales_page_to_fit());
        assert_eq!(
            PlatformProfile::Android.default_base_url(),
            "file:///android_asset/"
        );
    }

    #[test]
    fn apple_profile_keeps_page_fit() {
        assert!(PlatformProfile::Apple.scales_page_to_fit());
        assert_eq!(PlatformProfile::Apple.default_base_url(), "web/");
    }

    #[test]
    fn detect_picks_exactly_one_variant() {
        let profile = PlatformProfile::detect();
        assert!(matches!(
            profile,
            PlatformProfile::Android | PlatformProfile::Apple
        ));
    }
}
