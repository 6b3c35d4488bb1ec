//! Host platform description and emoji font support rules.
//!
//! Android's system emoji font lags behind Unicode emoji releases, so a
//! record is only offered on Android when the device's API level is known
//! to render its release. Every other host is assumed to render anything.

use std::fmt;

/// Minimum Android API level per emoji release tag.
///
/// Supporting a new release is a row added here.
pub const ANDROID_MIN_API_BY_VERSION: &[(&str, u32)] =
    &[("2.0", 0), ("4.0", 24), ("5.0", 26), ("11.0", 28)];

/// API level required for any release tag missing from
/// [`ANDROID_MIN_API_BY_VERSION`].
pub const ANDROID_FALLBACK_MIN_API: u32 = 29;

/// Host operating system family.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Os {
    Android,
    /// Any non-Android host, keeping its reported name.
    Other(String),
}

impl Os {
    /// Classifies an OS name. Matching `"android"` is case-insensitive.
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("android") {
            Self::Android
        } else {
            Self::Other(name.to_string())
        }
    }

    pub fn is_android(&self) -> bool {
        matches!(self, Self::Android)
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Android => f.write_str("android"),
            Self::Other(name) => f.write_str(name),
        }
    }
}

/// Returns the minimum Android API level able to render emoji from `added_in`.
pub fn min_android_api(added_in: &str) -> u32 {
    ANDROID_MIN_API_BY_VERSION
        .iter()
        .find(|(tag, _)| *tag == added_in)
        .map(|(_, api)| *api)
        .unwrap_or(ANDROID_FALLBACK_MIN_API)
}

/// The platform the picker runs on, read once at initialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformContext {
    os: Os,
    version: u32,
}

impl PlatformContext {
    pub fn new(os: Os, version: u32) -> Self {
        Self { os, version }
    }

    /// Shorthand for an Android host at the given API level.
    pub fn android(api_level: u32) -> Self {
        Self::new(Os::Android, api_level)
    }

    pub fn os(&self) -> &Os {
        &self.os
    }

    /// OS version number; the API level on Android.
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Returns `true` if this host can render emoji first released in `added_in`.
    pub fn supports(&self, added_in: &str) -> bool {
        if !self.os.is_android() {
            return true;
        }
        self.version >= min_android_api(added_in)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn os_from_name_detects_android_case_insensitively() {
        assert_eq!(Os::from_name("android"), Os::Android);
        assert_eq!(Os::from_name("Android"), Os::Android);
        assert_eq!(Os::from_name("ios"), Os::Other("ios".to_string()));
    }

    #[test]
    fn os_display_round_trips_name() {
        assert_eq!(Os::Android.to_string(), "android");
        assert_eq!(Os::from_name("web").to_string(), "web");
    }

    #[test]
    fn min_api_table_lookup() {
        assert_eq!(min_android_api("2.0"), 0);
        assert_eq!(min_android_api("4.0"), 24);
        assert_eq!(min_android_api("5.0"), 26);
        assert_eq!(min_android_api("11.0"), 28);
    }

    #[test]
    fn unknown_tag_uses_fallback() {
        assert_eq!(min_android_api("12.1"), ANDROID_FALLBACK_MIN_API);
        assert_eq!(min_android_api("6.1"), ANDROID_FALLBACK_MIN_API);
        assert_eq!(min_android_api(""), ANDROID_FALLBACK_MIN_API);
    }

    #[test]
    fn android_2_0_always_supported() {
        assert!(PlatformContext::android(0).supports("2.0"));
        assert!(PlatformContext::android(16).supports("2.0"));
    }

    #[test]
    fn android_4_0_threshold() {
        assert!(!PlatformContext::android(23).supports("4.0"));
        assert!(PlatformContext::android(24).supports("4.0"));
    }

    #[test]
    fn android_5_0_threshold() {
        assert!(!PlatformContext::android(25).supports("5.0"));
        assert!(PlatformContext::android(26).supports("5.0"));
    }

    #[test]
    fn android_11_0_threshold() {
        assert!(!PlatformContext::android(27).supports("11.0"));
        assert!(PlatformContext::android(28).supports("11.0"));
    }

    #[test]
    fn android_unknown_tag_threshold() {
        assert!(!PlatformContext::android(28).supports("13.0"));
        assert!(PlatformContext::android(29).supports("13.0"));
    }

    #[test]
    fn non_android_supports_everything() {
        let ios = PlatformContext::new(Os::from_name("ios"), 1);
        assert!(ios.supports("4.0"));
        assert!(ios.supports("15.0"));
    }
}
