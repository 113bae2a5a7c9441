// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Bridge configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Package identifier of the default web-search provider app.
pub const DEFAULT_SEARCH_PROVIDER: &str = "com.google.android.googlequicksearchbox";

/// Settings the embedding host supplies when wiring up the bridge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Directory icon files are written into (the app's cache dir).
    pub cache_dir: PathBuf,
    /// Package the web-search intent is scoped to.
    pub search_provider: String,
}

impl BridgeConfig {
    /// Config with the stock search provider.
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
            search_provider: DEFAULT_SEARCH_PROVIDER.to_string(),
        }
    }
}
