// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-agnostic trait definitions for native capabilities.
//
// The dispatcher never talks to the OS directly; it goes through these
// traits, so the channel semantics are testable with a mock bridge and the
// JNI plumbing stays confined to the `android` module.

use plinth_core::error::Result;
use plinth_core::types::ComponentName;
use plinth_icon::IconSource;

/// Unified bridge that groups all native capabilities.
///
/// Each capability is a one-shot call into the host OS. Platforms without
/// native support (desktop/CI) return `PlinthError::PlatformUnavailable`
/// from the stub implementation.
pub trait PlatformBridge:
    NativeShade + NativeHomeSettings + NativeWebSearch + NativeAppRegistry
{
    /// Human-readable platform name (e.g. "Android 14").
    fn platform_name(&self) -> &str;
}

/// Open the OS notification / quick-settings shade.
pub trait NativeShade {
    /// Trigger shade expansion via whatever privileged or reflective surface
    /// the platform exposes. Fire-and-forget: the caller reports success once
    /// the trigger is issued, whatever the OS does with it.
    fn expand_notifications(&self) -> Result<()>;
}

/// Navigate to the OS "home app" selection settings.
pub trait NativeHomeSettings {
    /// Dispatch the home-settings navigation intent (general settings on OS
    /// versions without a dedicated screen). Returns Ok(()) once dispatched;
    /// whether the user completes the change is never observed.
    fn open_home_settings(&self) -> Result<()>;
}

/// Delegate a query to the device's web-search provider app.
pub trait NativeWebSearch {
    /// Dispatch a web-search intent scoped to the configured provider,
    /// pre-filled with `query`.
    fn web_search(&self, query: &str) -> Result<()>;
}

/// Installed-app lookups: icons, activity resolution, activity launch.
pub trait NativeAppRegistry {
    /// Load the installed app's icon in whatever form the OS holds it.
    /// Returns `PlinthError::AppNotFound` when the package does not exist.
    fn load_icon(&self, package: &str) -> Result<IconSource>;

    /// Whether the given activity resolves on this device.
    fn activity_exists(&self, component: &ComponentName) -> bool;

    /// Launch the given activity. Hands control to the OS asynchronously;
    /// the subsequent lifecycle is not tracked.
    fn launch_activity(&self, component: &ComponentName) -> Result<()>;
}
