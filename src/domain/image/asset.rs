// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/image/asset.rs
//
// Uploaded source image: encoded bytes plus probed natural dimensions.

use std::fmt;
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

use image::{ImageFormat, ImageReader};

use crate::domain::error::UploadError;

/// Formats accepted as upload input.
const ACCEPTED_FORMATS: &[(ImageFormat, &str)] = &[
    (ImageFormat::Jpeg, "image/jpeg"),
    (ImageFormat::Png, "image/png"),
    (ImageFormat::Gif, "image/gif"),
    (ImageFormat::WebP, "image/webp"),
];

/// An uploaded image. Immutable once created.
#[derive(Clone)]
pub struct ImageAsset {
    name: String,
    mime: &'static str,
    natural_width: u32,
    natural_height: u32,
    bytes: Arc<[u8]>,
}

impl fmt::Debug for ImageAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageAsset")
            .field("name", &self.name)
            .field("mime", &self.mime)
            .field("natural_width", &self.natural_width)
            .field("natural_height", &self.natural_height)
            .field("byte_size", &self.bytes.len())
            .finish()
    }
}

impl ImageAsset {
    /// Validate `bytes` and probe the natural dimensions from the header.
    ///
    /// The pixels themselves are only decoded when rasterizing.
    pub fn from_bytes(name: impl Into<String>, bytes: Vec<u8>, max_bytes: u64) -> Result<Self, UploadError> {
        let size = bytes.len() as u64;

        let format = image::guess_format(&bytes).map_err(|_| UploadError::UnsupportedFormat)?;
        let mime = ACCEPTED_FORMATS
            .iter()
            .find(|(accepted, _)| *accepted == format)
            .map(|(_, mime)| *mime)
            .ok_or(UploadError::UnsupportedFormat)?;

        if size > max_bytes {
            return Err(UploadError::TooLarge { size, max: max_bytes });
        }

        let (natural_width, natural_height) = ImageReader::with_format(Cursor::new(&bytes), format)
            .into_dimensions()
            .map_err(|e| UploadError::Unreadable(e.to_string()))?;

        if natural_width == 0 || natural_height == 0 {
            return Err(UploadError::Unreadable(format!(
                "empty image ({natural_width}x{natural_height})"
            )));
        }

        Ok(Self {
            name: name.into(),
            mime,
            natural_width,
            natural_height,
            bytes: bytes.into(),
        })
    }

    /// Read and validate an image file.
    pub async fn open(path: &Path, max_bytes: u64) -> Result<Self, UploadError> {
        let len = tokio::fs::metadata(path).await?.len();
        if len > max_bytes {
            return Err(UploadError::TooLarge { size: len, max: max_bytes });
        }

        let bytes = tokio::fs::read(path).await?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("image")
            .to_string();

        Self::from_bytes(name, bytes, max_bytes)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared MIME type, sniffed from the content.
    pub fn mime(&self) -> &'static str {
        self.mime
    }

    pub fn byte_size(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn natural_width(&self) -> u32 {
        self.natural_width
    }

    pub fn natural_height(&self) -> u32 {
        self.natural_height
    }

    /// Encoded source bytes.
    pub fn bytes(&self) -> &Arc<[u8]> {
        &self.bytes
    }
}
