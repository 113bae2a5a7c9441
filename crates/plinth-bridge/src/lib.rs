// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Plinth — Native platform bridge for the minimal launcher.
//
// This crate defines the capability traits, the method-channel dispatcher the
// UI layer talks to, and the platform implementations: Android (ART/JNI) on
// device, a warning stub everywhere else. Every request is a one-shot call
// into the host OS; no state is retained between calls.

pub mod channel;
pub mod clock;
pub mod traits;

#[cfg(target_os = "android")]
pub mod android;

#[cfg(not(target_os = "android"))]
pub mod stub;

pub use channel::BridgeChannel;

use plinth_core::BridgeConfig;

/// Retrieves the bridge implementation for the target operating system.
///
/// RETURNS: A boxed trait object (`dyn PlatformBridge`) that abstracts away
/// the underlying native SDK details.
pub fn platform_bridge(config: &BridgeConfig) -> Box<dyn traits::PlatformBridge> {
    #[cfg(target_os = "android")]
    {
        // Android: Uses `jni-rs` to invoke methods on the JVM/ART.
        Box::new(android::AndroidBridge::new(config.search_provider.clone()))
    }
    #[cfg(not(target_os = "android"))]
    {
        // DESKTOP/CI: Uses a mock implementation to allow non-native builds.
        let _ = config;
        Box::new(stub::StubBridge)
    }
}

/// Initialise `tracing` for the embedding host.
///
/// Call once before the first method call. Safe to call again after an
/// engine restart — a second call is a no-op.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init()
        .ok();
}
