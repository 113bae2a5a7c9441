// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Plinth.

use thiserror::Error;

/// Top-level error type for all Plinth operations.
#[derive(Debug, Error)]
pub enum PlinthError {
    // -- App / package errors --
    #[error("package not installed: {0}")]
    AppNotFound(String),

    // -- Icon errors --
    #[error("icon processing failed: {0}")]
    Icon(String),

    // -- Storage --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // -- Platform bridge --
    #[error("platform bridge error: {0}")]
    Bridge(String),

    #[error("feature not available on this platform")]
    PlatformUnavailable,
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, PlinthError>;
