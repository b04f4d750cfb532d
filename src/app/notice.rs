// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/notice.rs
//
// Discrete success/failure events raised for the notification bar.

use std::path::PathBuf;

use crate::fl;

#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    UploadSucceeded { name: String },
    UploadFailed(String),
    InvalidDimensions(String),
    ResizeSucceeded { width: u32, height: u32 },
    ResizeFailed(String),
    DownloadTriggered(PathBuf),
    DownloadFailed(String),
}

impl Notice {
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Self::UploadFailed(_)
                | Self::InvalidDimensions(_)
                | Self::ResizeFailed(_)
                | Self::DownloadFailed(_)
        )
    }

    /// Localized text for display.
    pub fn message(&self) -> String {
        match self {
            Self::UploadSucceeded { name } => fl!("notice-upload-succeeded", name = name.as_str()),
            Self::UploadFailed(reason) => fl!("notice-upload-failed", reason = reason.as_str()),
            Self::InvalidDimensions(reason) => {
                fl!("notice-invalid-dimensions", reason = reason.as_str())
            }
            Self::ResizeSucceeded { width, height } => {
                fl!("notice-resize-succeeded", width = *width, height = *height)
            }
            Self::ResizeFailed(reason) => fl!("notice-resize-failed", reason = reason.as_str()),
            Self::DownloadTriggered(path) => {
                fl!("notice-download-triggered", path = path.display().to_string())
            }
            Self::DownloadFailed(reason) => fl!("notice-download-failed", reason = reason.as_str()),
        }
    }

    /// Mirror the event into the log.
    pub fn log(&self) {
        match self {
            Self::UploadSucceeded { name } => log::info!("Loaded {name}"),
            Self::ResizeSucceeded { width, height } => log::info!("Resized to {width}x{height}"),
            Self::DownloadTriggered(path) => log::info!("Saved {}", path.display()),
            Self::UploadFailed(reason) => log::warn!("Upload rejected: {reason}"),
            Self::InvalidDimensions(reason) => log::warn!("Resize rejected: {reason}"),
            Self::ResizeFailed(reason) => log::error!("Resize failed: {reason}"),
            Self::DownloadFailed(reason) => log::error!("Download failed: {reason}"),
        }
    }
}
