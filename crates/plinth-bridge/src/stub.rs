// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Stub bridge for desktop/CI builds where native mobile APIs are unavailable.
//
// Every trait method returns `PlatformUnavailable` — the real implementation
// lives in the `android` module.

use plinth_core::error::{PlinthError, Result};
use plinth_core::types::ComponentName;
use plinth_icon::IconSource;

use crate::traits::*;

/// No-op bridge returned on non-mobile platforms.
pub struct StubBridge;

impl PlatformBridge for StubBridge {
    fn platform_name(&self) -> &str {
        "Desktop (stub)"
    }
}

impl NativeShade for StubBridge {
    fn expand_notifications(&self) -> Result<()> {
        tracing::warn!("NativeShade::expand_notifications called on stub bridge");
        Err(PlinthError::PlatformUnavailable)
    }
}

impl NativeHomeSettings for StubBridge {
    fn open_home_settings(&self) -> Result<()> {
        tracing::warn!("NativeHomeSettings::open_home_settings called on stub bridge");
        Err(PlinthError::PlatformUnavailable)
    }
}

impl NativeWebSearch for StubBridge {
    fn web_search(&self, _query: &str) -> Result<()> {
        tracing::warn!("NativeWebSearch::web_search called on stub bridge");
        Err(PlinthError::PlatformUnavailable)
    }
}

impl NativeAppRegistry for StubBridge {
    fn load_icon(&self, _package: &str) -> Result<IconSource> {
        tracing::warn!("NativeAppRegistry::load_icon called on stub bridge");
        Err(PlinthError::PlatformUnavailable)
    }

    fn activity_exists(&self, _component: &ComponentName) -> bool {
        false
    }

    fn launch_activity(&self, _component: &ComponentName) -> Result<()> {
        Err(PlinthError::PlatformUnavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_declines_every_capability() {
        let bridge = StubBridge;
        assert!(matches!(
            bridge.expand_notifications(),
            Err(PlinthError::PlatformUnavailable)
        ));
        assert!(matches!(
            bridge.open_home_settings(),
            Err(PlinthError::PlatformUnavailable)
        ));
        assert!(matches!(
            bridge.web_search("anything"),
            Err(PlinthError::PlatformUnavailable)
        ));
        assert!(matches!(
            bridge.load_icon("com.example.app"),
            Err(PlinthError::PlatformUnavailable)
        ));
        assert!(!bridge.activity_exists(&ComponentName::new("a", "b")));
    }
}
