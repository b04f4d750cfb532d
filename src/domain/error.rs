// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/error.rs
//
// Error types for the resize pipeline and the upload collaborator.

use thiserror::Error;

/// Failures of a resize request.
///
/// All variants are recoverable: the caller reports them and keeps its
/// previous dimension state and render result.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResizeError {
    #[error("invalid dimensions {width}x{height}: {reason}")]
    Validation {
        width: i64,
        height: i64,
        reason: String,
    },

    #[error("failed to decode source image: {0}")]
    Decode(String),

    #[error("failed to encode {format}: {reason}")]
    Encode { format: &'static str, reason: String },
}

/// Failures while turning a file into an image asset.
#[derive(Debug, Error)]
pub enum UploadError {
    #[error("unsupported file format, please use JPG, PNG, GIF, or WebP images")]
    UnsupportedFormat,

    #[error("file is too large ({size} bytes), please use images smaller than {max} bytes")]
    TooLarge { size: u64, max: u64 },

    #[error("image header could not be read: {0}")]
    Unreadable(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
