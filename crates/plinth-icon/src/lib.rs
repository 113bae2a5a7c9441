// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// plinth-icon — App-icon rasterization for the Plinth launcher bridge.
//
// Turns whatever the platform hands back for an installed app's icon (flat
// bitmap or dual-layer adaptive icon) into a single RGBA image, encodes it as
// PNG, and stores it under a deterministic name in the app's cache directory.

pub mod cache;
pub mod raster;

pub use cache::IconCache;
pub use raster::{rasterize, IconSource};
