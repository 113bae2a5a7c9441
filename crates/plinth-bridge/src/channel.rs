// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Method-channel dispatcher — maps a named request to exactly one native
// capability and produces exactly one response.
//
// Every call is independent and synchronous from the bridge's perspective.
// Operations that launch another app (clock, settings) hand control to the
// OS asynchronously; the bridge submits the intent and returns immediately
// without awaiting any downstream result. That is an intentional
// non-guarantee, not an oversight.

use plinth_core::error::{PlinthError, Result};
use plinth_core::types::{ErrorCode, MethodCall, MethodResponse};
use plinth_core::BridgeConfig;
use plinth_icon::{rasterize, IconCache};
use tracing::{debug, info, warn};

use crate::clock;
use crate::traits::PlatformBridge;

/// The closed set of supported request names.
///
/// Unknown names fall into a single well-defined default case (the
/// not-implemented response) rather than a runtime string comparison chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BridgeMethod {
    ExpandNotifications,
    ChangeLauncher,
    GetAppIconPath,
    SearchWeb,
    ShowClock,
}

impl BridgeMethod {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "expandNotis" => Some(Self::ExpandNotifications),
            "changeLauncher" => Some(Self::ChangeLauncher),
            "getAppIconPath" => Some(Self::GetAppIconPath),
            "searchGoogle" => Some(Self::SearchWeb),
            "showClock" => Some(Self::ShowClock),
            _ => None,
        }
    }
}

/// The boundary object the UI layer exchanges named calls and single
/// responses through.
pub struct BridgeChannel {
    bridge: Box<dyn PlatformBridge>,
    icons: IconCache,
}

impl BridgeChannel {
    /// Wire up the channel for the current platform.
    pub fn new(config: &BridgeConfig) -> Result<Self> {
        Self::with_bridge(crate::platform_bridge(config), config)
    }

    /// Wire up the channel over an explicit bridge implementation.
    pub fn with_bridge(bridge: Box<dyn PlatformBridge>, config: &BridgeConfig) -> Result<Self> {
        let icons = IconCache::new(&config.cache_dir)?;
        info!(platform = bridge.platform_name(), "bridge channel ready");
        Ok(Self { bridge, icons })
    }

    /// Dispatch one request and produce its single response. Never panics;
    /// every failure is caught at the point of the native call and converted
    /// to one of the documented outcomes.
    pub fn handle(&self, call: &MethodCall) -> MethodResponse {
        debug!(method = %call.method, "dispatching method call");
        match BridgeMethod::from_name(&call.method) {
            Some(BridgeMethod::ExpandNotifications) => self.expand_notifications(),
            Some(BridgeMethod::ChangeLauncher) => self.change_launcher(),
            Some(BridgeMethod::GetAppIconPath) => self.get_app_icon_path(call),
            Some(BridgeMethod::SearchWeb) => self.search_web(call),
            Some(BridgeMethod::ShowClock) => self.show_clock(),
            None => {
                debug!(method = %call.method, "no handler for method");
                MethodResponse::NotImplemented
            }
        }
    }

    /// JSON entry point for the embedding host: one request document in, one
    /// response document out.
    pub fn handle_json(&self, payload: &str) -> Result<String> {
        let call: MethodCall = serde_json::from_str(payload)?;
        let response = self.handle(&call);
        Ok(serde_json::to_string(&response)?)
    }

    // -- Handlers ------------------------------------------------------------

    /// `expandNotis` — always succeeds once the trigger is issued; underlying
    /// OS failures are logged, never surfaced.
    fn expand_notifications(&self) -> MethodResponse {
        if let Err(err) = self.bridge.expand_notifications() {
            warn!(error = %err, "notification shade expansion failed");
        }
        MethodResponse::ok_empty()
    }

    /// `changeLauncher` — success is reported once the navigation intent is
    /// dispatched, independent of whether the user completes the change.
    fn change_launcher(&self) -> MethodResponse {
        if let Err(err) = self.bridge.open_home_settings() {
            warn!(error = %err, "home settings navigation failed");
        }
        MethodResponse::ok_empty()
    }

    /// `getAppIconPath` — resolve, rasterize, and cache the app icon,
    /// returning the file path. Argument and package lookups fail loudly;
    /// rasterization and storage degrade to a null result.
    fn get_app_icon_path(&self, call: &MethodCall) -> MethodResponse {
        let Some(package) = call.str_arg("packageName") else {
            return MethodResponse::error(
                ErrorCode::MissingPackageName,
                "Package name not provided",
            );
        };

        let source = match self.bridge.load_icon(package) {
            Ok(source) => source,
            Err(PlinthError::AppNotFound(_)) => {
                return MethodResponse::error(
                    ErrorCode::NotFound,
                    format!("package not installed: {package}"),
                );
            }
            Err(err) => {
                warn!(package, error = %err, "icon load failed");
                return MethodResponse::ok_empty();
            }
        };

        let icon = match rasterize(source) {
            Ok(Some(icon)) => icon,
            // Drawable type we do not rasterize: null, not an error.
            Ok(None) => return MethodResponse::ok_empty(),
            Err(err) => {
                warn!(package, error = %err, "icon rasterization failed");
                return MethodResponse::ok_empty();
            }
        };

        match self.icons.store(package, &icon) {
            Ok(path) => MethodResponse::ok(path.to_string_lossy().into_owned()),
            Err(err) => {
                warn!(package, error = %err, "icon write failed");
                MethodResponse::ok_empty()
            }
        }
    }

    /// `searchGoogle` — dispatch failures (provider app missing, intent
    /// refused) are swallowed and the call still reports success, so the
    /// caller cannot tell a no-op from a dispatch. Preserved as-is.
    fn search_web(&self, call: &MethodCall) -> MethodResponse {
        let Some(query) = call.str_arg("query") else {
            return MethodResponse::error(ErrorCode::MissingArgument, "Query parameter is missing");
        };
        if let Err(err) = self.bridge.web_search(query) {
            debug!(error = %err, "web search dispatch failed, swallowing");
        }
        MethodResponse::ok_empty()
    }

    /// `showClock` — probe the fixed catalog in order, launch the first
    /// resolvable candidate.
    fn show_clock(&self) -> MethodResponse {
        let Some(component) = clock::resolve_clock_app(|cn| self.bridge.activity_exists(cn))
        else {
            return MethodResponse::error(ErrorCode::Unavailable, "Clock app not found");
        };

        info!(component = %component, "launching clock app");
        match self.bridge.launch_activity(&component) {
            Ok(()) => MethodResponse::ok_empty(),
            Err(err) => {
                warn!(component = %component, error = %err, "clock launch failed");
                MethodResponse::error(ErrorCode::Unavailable, "Could not open the clock app.")
            }
        }
    }
}
