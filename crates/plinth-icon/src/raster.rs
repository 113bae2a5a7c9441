// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Icon rasterization — flatten a platform icon into a single RGBA bitmap.
//
// Flat bitmap icons pass through untouched. Adaptive icons are composited
// onto a transparent canvas sized to the icon's reported intrinsic
// dimensions: background layer first, foreground alpha-blended on top.

use image::imageops::{self, FilterType};
use image::RgbaImage;
use plinth_core::error::{PlinthError, Result};
use tracing::debug;

/// What the platform hands back when an installed app's icon is loaded.
pub enum IconSource {
    /// Plain bitmap icon.
    Flat(RgbaImage),
    /// Dual-layer adaptive icon plus its reported intrinsic dimensions.
    Adaptive {
        foreground: RgbaImage,
        background: RgbaImage,
        width: u32,
        height: u32,
    },
    /// A drawable type the bridge does not know how to rasterize.
    /// The payload names the type for diagnostics.
    Unsupported(String),
}

/// Flatten an [`IconSource`] into one RGBA image.
///
/// Returns `Ok(None)` for unsupported drawable types — the caller degrades
/// to a null result rather than an error.
pub fn rasterize(source: IconSource) -> Result<Option<RgbaImage>> {
    match source {
        IconSource::Flat(image) => {
            debug!(width = image.width(), height = image.height(), "flat icon");
            Ok(Some(image))
        }
        IconSource::Adaptive {
            foreground,
            background,
            width,
            height,
        } => composite_adaptive(foreground, background, width, height).map(Some),
        IconSource::Unsupported(kind) => {
            debug!(drawable = %kind, "unsupported drawable type, skipping");
            Ok(None)
        }
    }
}

/// Composite foreground over background onto a transparent canvas of the
/// icon's intrinsic size.
fn composite_adaptive(
    foreground: RgbaImage,
    background: RgbaImage,
    width: u32,
    height: u32,
) -> Result<RgbaImage> {
    if width == 0 || height == 0 {
        return Err(PlinthError::Icon(format!(
            "adaptive icon reported zero intrinsic size ({width}x{height})"
        )));
    }

    debug!(width, height, "compositing adaptive icon layers");

    // RgbaImage::new zeroes every pixel, so the canvas starts fully
    // transparent.
    let mut canvas = RgbaImage::new(width, height);
    let background = fit_layer(background, width, height);
    imageops::overlay(&mut canvas, &background, 0, 0);
    let foreground = fit_layer(foreground, width, height);
    imageops::overlay(&mut canvas, &foreground, 0, 0);
    Ok(canvas)
}

/// Scale a layer to the canvas size when its own dimensions differ.
fn fit_layer(layer: RgbaImage, width: u32, height: u32) -> RgbaImage {
    if layer.width() == width && layer.height() == height {
        layer
    } else {
        imageops::resize(&layer, width, height, FilterType::Lanczos3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn solid(width: u32, height: u32, pixel: [u8; 4]) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba(pixel))
    }

    #[test]
    fn flat_icon_passes_through_unchanged() {
        let icon = solid(48, 48, [10, 20, 30, 255]);
        let out = rasterize(IconSource::Flat(icon)).unwrap().unwrap();
        assert_eq!((out.width(), out.height()), (48, 48));
        assert_eq!(*out.get_pixel(0, 0), Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn adaptive_icon_composites_to_intrinsic_size() {
        let background = solid(108, 108, [0, 0, 255, 255]);
        // Foreground transparent except one opaque green pixel.
        let mut foreground = solid(108, 108, [0, 0, 0, 0]);
        foreground.put_pixel(5, 5, Rgba([0, 255, 0, 255]));

        let out = rasterize(IconSource::Adaptive {
            foreground,
            background,
            width: 108,
            height: 108,
        })
        .unwrap()
        .unwrap();

        assert_eq!((out.width(), out.height()), (108, 108));
        // Foreground wins where it is opaque, background shows elsewhere.
        assert_eq!(*out.get_pixel(5, 5), Rgba([0, 255, 0, 255]));
        assert_eq!(*out.get_pixel(0, 0), Rgba([0, 0, 255, 255]));
    }

    #[test]
    fn adaptive_canvas_stays_transparent_where_layers_are() {
        let background = solid(16, 16, [0, 0, 0, 0]);
        let foreground = solid(16, 16, [0, 0, 0, 0]);
        let out = rasterize(IconSource::Adaptive {
            foreground,
            background,
            width: 16,
            height: 16,
        })
        .unwrap()
        .unwrap();
        assert_eq!(out.get_pixel(8, 8).0[3], 0);
    }

    #[test]
    fn adaptive_layers_scale_to_reported_dimensions() {
        let background = solid(32, 32, [255, 0, 0, 255]);
        let foreground = solid(64, 64, [0, 0, 0, 0]);
        let out = rasterize(IconSource::Adaptive {
            foreground,
            background,
            width: 108,
            height: 108,
        })
        .unwrap()
        .unwrap();
        assert_eq!((out.width(), out.height()), (108, 108));
    }

    #[test]
    fn unsupported_drawable_is_none_not_error() {
        let out = rasterize(IconSource::Unsupported(
            "android.graphics.drawable.VectorDrawable".into(),
        ))
        .unwrap();
        assert!(out.is_none());
    }

    #[test]
    fn zero_intrinsic_size_is_an_error() {
        let result = rasterize(IconSource::Adaptive {
            foreground: solid(8, 8, [0, 0, 0, 0]),
            background: solid(8, 8, [0, 0, 0, 0]),
            width: 0,
            height: 8,
        });
        assert!(matches!(result, Err(PlinthError::Icon(_))));
    }
}
