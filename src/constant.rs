// SPDX-License-Identifier: GPL-3.0-or-later
// src/constant.rs
//
// Application constants that should not be changed by the user.

/// Hard upper bound for either output dimension in pixels.
pub const MAX_DIMENSION: u32 = 10_000;

/// Smallest dimension an interactive drag may produce (usability floor).
pub const MIN_DRAG_DIMENSION: u32 = 50;

/// Lowest accepted output quality (JPEG).
pub const MIN_QUALITY: f32 = 0.1;

/// Highest accepted output quality (JPEG).
pub const MAX_QUALITY: f32 = 1.0;

/// Quality slider step.
pub const QUALITY_STEP: f32 = 0.1;

/// Default output quality (matches the slider's initial position).
pub const DEFAULT_QUALITY: f32 = 0.9;

/// Default on-screen cap for the resize preview, in logical units.
pub const DEFAULT_PREVIEW_CAP: f32 = 400.0;

/// Default upload size limit (10 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Space around the preview reserved for resize handles.
pub const HANDLE_GUTTER: f32 = 16.0;

/// Prefix of downloaded file names.
pub const DOWNLOAD_PREFIX: &str = "resized-image";
