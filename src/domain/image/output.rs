// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/image/output.rs
//
// Output encodings, quality, and saving of render results.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::constant::{DEFAULT_QUALITY, DOWNLOAD_PREFIX, MAX_QUALITY, MIN_QUALITY};

use super::raster::RenderResult;

/// Supported output encodings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputFormat {
    #[default]
    Png,
    Jpeg,
    WebP,
}

impl OutputFormat {
    pub const ALL: [Self; 3] = [Self::Png, Self::Jpeg, Self::WebP];

    pub fn mime(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::WebP => "image/webp",
        }
    }

    /// File extension, taken from the MIME subtype.
    pub fn extension(self) -> &'static str {
        let mime = self.mime();
        mime.split_once('/').map_or(mime, |(_, subtype)| subtype)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Png => "PNG",
            Self::Jpeg => "JPEG",
            Self::WebP => "WebP",
        }
    }

    /// Whether the quality setting has an effect.
    pub fn uses_quality(self) -> bool {
        matches!(self, Self::Jpeg)
    }
}

/// Encoding and quality for a render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutputSpec {
    pub format: OutputFormat,
    quality: f32,
}

impl Default for OutputSpec {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            quality: DEFAULT_QUALITY,
        }
    }
}

impl OutputSpec {
    pub fn new(format: OutputFormat, quality: f32) -> Self {
        let mut spec = Self {
            format,
            quality: DEFAULT_QUALITY,
        };
        spec.set_quality(quality);
        spec
    }

    /// Quality in `[MIN_QUALITY, MAX_QUALITY]`.
    pub fn quality(&self) -> f32 {
        self.quality
    }

    /// Clamp and store `quality`; non-finite values are ignored.
    pub fn set_quality(&mut self, quality: f32) {
        if quality.is_finite() {
            self.quality = quality.clamp(MIN_QUALITY, MAX_QUALITY);
        }
    }

    /// Quality as the 1..=100 scale used by JPEG encoders.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn jpeg_quality(&self) -> u8 {
        (self.quality * 100.0).round().clamp(1.0, 100.0) as u8
    }

    /// Quality as a whole percentage for display.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn percent(&self) -> u32 {
        (self.quality * 100.0).round() as u32
    }
}

/// `resized-image-{width}x{height}.{extension}`
pub fn download_file_name(width: u32, height: u32, format: OutputFormat) -> String {
    format!("{DOWNLOAD_PREFIX}-{width}x{height}.{}", format.extension())
}

/// Write `result` into `dir` under its download name.
pub async fn save_render(result: &RenderResult, dir: &Path) -> anyhow::Result<PathBuf> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    let path = dir.join(result.file_name());
    tokio::fs::write(&path, result.bytes())
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(path)
}
