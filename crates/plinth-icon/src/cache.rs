// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// On-disk icon cache — one PNG per package, deterministically named.

use image::codecs::png::PngEncoder;
use image::RgbaImage;
use plinth_core::error::{PlinthError, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Writes rasterized app icons into the host application's cache directory.
///
/// File names derive only from the package identifier, so at most one icon
/// file per package exists at any time — a later write for the same package
/// overwrites the earlier one. Eviction is left to the OS cache cleaner.
pub struct IconCache {
    dir: PathBuf,
}

impl IconCache {
    /// Open the cache rooted at `dir`, creating the directory if needed.
    ///
    /// The host is expected to pass its absolute cache directory; returned
    /// paths are built from it unmodified.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        debug!(dir = %dir.display(), "icon cache ready");
        Ok(Self { dir })
    }

    /// The stable path an icon for `package` lives at, whether or not it has
    /// been written yet.
    pub fn path_for(&self, package: &str) -> PathBuf {
        self.dir.join(format!("icon_{package}.png"))
    }

    /// PNG-encode `icon` and write it to [`path_for`](Self::path_for),
    /// replacing any previous file for the same package.
    ///
    /// The output stream is scoped to this call and closed on every exit
    /// path, including errors.
    pub fn store(&self, package: &str, icon: &RgbaImage) -> Result<PathBuf> {
        let path = self.path_for(package);
        write_png(&path, icon)?;
        info!(
            package,
            path = %path.display(),
            width = icon.width(),
            height = icon.height(),
            "icon written"
        );
        Ok(path)
    }
}

/// Encode `icon` as PNG into a freshly created file at `path`.
///
/// PNG is lossless; the encoder's default compression is used (the quality
/// knob the original platform API exposes is a no-op for PNG there too).
fn write_png(path: &Path, icon: &RgbaImage) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    icon.write_with_encoder(PngEncoder::new(&mut writer))
        .map_err(|err| PlinthError::Icon(format!("PNG encoding failed: {err}")))?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn sample_icon(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba([200, 100, 50, 255]))
    }

    #[test]
    fn path_is_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        let cache = IconCache::new(dir.path()).unwrap();
        assert_eq!(
            cache.path_for("com.example.app"),
            dir.path().join("icon_com.example.app.png")
        );
        assert_eq!(
            cache.path_for("com.example.app"),
            cache.path_for("com.example.app")
        );
    }

    #[test]
    fn stored_icon_round_trips_with_same_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let cache = IconCache::new(dir.path()).unwrap();
        let path = cache.store("com.example.app", &sample_icon(48, 48)).unwrap();

        let decoded = image::open(&path).unwrap().to_rgba8();
        assert_eq!((decoded.width(), decoded.height()), (48, 48));
        assert_eq!(*decoded.get_pixel(10, 10), Rgba([200, 100, 50, 255]));
    }

    #[test]
    fn second_store_overwrites_rather_than_duplicates() {
        let dir = tempfile::tempdir().unwrap();
        let cache = IconCache::new(dir.path()).unwrap();

        let first = cache.store("com.example.app", &sample_icon(48, 48)).unwrap();
        let second = cache.store("com.example.app", &sample_icon(96, 96)).unwrap();
        assert_eq!(first, second);

        let files: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(files.len(), 1);

        // Latest write wins.
        let decoded = image::open(&second).unwrap();
        assert_eq!(decoded.width(), 96);
    }

    #[test]
    fn creates_missing_cache_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("icons").join("v1");
        let cache = IconCache::new(&nested).unwrap();
        cache.store("a.b.c", &sample_icon(8, 8)).unwrap();
        assert!(nested.join("icon_a.b.c.png").exists());
    }
}
