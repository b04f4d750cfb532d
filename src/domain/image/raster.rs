// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/image/raster.rs
//
// Re-rasterize a source image at new dimensions and encode the result.

use std::sync::Arc;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::codecs::webp::WebPEncoder;
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView};

use crate::constant::MAX_DIMENSION;
use crate::domain::error::ResizeError;

use super::asset::ImageAsset;
use super::output::{download_file_name, OutputFormat, OutputSpec};

/// Resampling filter used for every render.
const RESAMPLE_FILTER: FilterType = FilterType::CatmullRom;

/// Encoded output of a render request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderResult {
    bytes: Arc<[u8]>,
    width: u32,
    height: u32,
    format: OutputFormat,
}

impl RenderResult {
    pub fn new(bytes: impl Into<Arc<[u8]>>, width: u32, height: u32, format: OutputFormat) -> Self {
        Self {
            bytes: bytes.into(),
            width,
            height,
            format,
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Name the result is saved under.
    pub fn file_name(&self) -> String {
        download_file_name(self.width, self.height, self.format)
    }
}

/// Reject targets that must not be rasterized.
///
/// This is the caller's precondition; [`render`] does not repeat it.
pub fn validate_target(width: i64, height: i64) -> Result<(u32, u32), ResizeError> {
    let reason = if width <= 0 || height <= 0 {
        Some("dimensions must be positive".to_string())
    } else if width > i64::from(MAX_DIMENSION) || height > i64::from(MAX_DIMENSION) {
        Some(format!("maximum size is {MAX_DIMENSION}px"))
    } else {
        None
    };

    match (reason, u32::try_from(width), u32::try_from(height)) {
        (None, Ok(w), Ok(h)) => Ok((w, h)),
        (reason, _, _) => Err(ResizeError::Validation {
            width,
            height,
            reason: reason.unwrap_or_else(|| "dimensions out of range".to_string()),
        }),
    }
}

/// Render `asset` at `width` x `height` on the blocking pool.
pub async fn render(
    asset: Arc<ImageAsset>,
    width: u32,
    height: u32,
    spec: OutputSpec,
) -> Result<RenderResult, ResizeError> {
    tokio::task::spawn_blocking(move || rasterize(&asset, width, height, spec))
        .await
        .map_err(|e| ResizeError::Encode {
            format: spec.format.label(),
            reason: format!("render task failed: {e}"),
        })?
}

/// Decode, resample and encode synchronously.
pub fn rasterize(
    asset: &ImageAsset,
    width: u32,
    height: u32,
    spec: OutputSpec,
) -> Result<RenderResult, ResizeError> {
    let source = image::load_from_memory(asset.bytes()).map_err(|e| ResizeError::Decode(e.to_string()))?;

    let resized = if source.dimensions() == (width, height) {
        source
    } else {
        source.resize_exact(width, height, RESAMPLE_FILTER)
    };

    let bytes = encode(&resized, spec)?;
    if bytes.is_empty() {
        return Err(ResizeError::Encode {
            format: spec.format.label(),
            reason: "encoder produced no data".into(),
        });
    }

    Ok(RenderResult::new(bytes, width, height, spec.format))
}

fn encode(img: &DynamicImage, spec: OutputSpec) -> Result<Vec<u8>, ResizeError> {
    let mut buf = Vec::new();

    let result = match spec.format {
        OutputFormat::Png => img.write_with_encoder(PngEncoder::new(&mut buf)),
        // JPEG has no alpha channel.
        OutputFormat::Jpeg => DynamicImage::ImageRgb8(img.to_rgb8())
            .write_with_encoder(JpegEncoder::new_with_quality(&mut buf, spec.jpeg_quality())),
        // Lossless only; quality does not apply.
        OutputFormat::WebP => DynamicImage::ImageRgba8(img.to_rgba8())
            .write_with_encoder(WebPEncoder::new_lossless(&mut buf)),
    };

    result.map_err(|e| ResizeError::Encode {
        format: spec.format.label(),
        reason: e.to_string(),
    })?;

    Ok(buf)
}
