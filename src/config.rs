// SPDX-License-Identifier: GPL-3.0-or-later
// src/config.rs
//
// Startup configuration read through cosmic-config.

use cosmic::cosmic_config::{self, CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};
use std::path::PathBuf;

use crate::constant::{DEFAULT_MAX_UPLOAD_BYTES, DEFAULT_PREVIEW_CAP, DEFAULT_QUALITY};
use crate::domain::image::{OutputFormat, OutputSpec};

/// Application defaults. Read at startup, never written back.
#[derive(Debug, Clone, CosmicConfigEntry, PartialEq)]
#[version = 1]
pub struct AppConfig {
    /// Optional default directory to open images from.
    pub default_image_dir: Option<PathBuf>,
    /// Directory downloads are written to.
    pub download_dir: Option<PathBuf>,
    /// Largest on-screen side of the resize preview, in logical units.
    pub preview_cap: f32,
    /// Output format selected when an image is loaded.
    pub default_format: OutputFormat,
    /// Output quality selected when an image is loaded (JPEG only).
    pub default_quality: f32,
    /// Largest accepted upload in bytes.
    pub max_upload_bytes: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_image_dir: dirs::picture_dir().or_else(dirs::home_dir),
            download_dir: dirs::download_dir().or_else(dirs::home_dir),
            preview_cap: DEFAULT_PREVIEW_CAP,
            default_format: OutputFormat::Png,
            default_quality: DEFAULT_QUALITY,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl AppConfig {
    /// Load the stored entry, falling back to defaults field by field.
    pub fn load(app_id: &str) -> Self {
        match cosmic_config::Config::new(app_id, Self::VERSION) {
            Ok(handler) => match Self::get_entry(&handler) {
                Ok(config) => config,
                Err((errors, config)) => {
                    for err in errors.iter().filter(|e| e.is_err()) {
                        log::warn!("Config entry could not be read: {err}");
                    }
                    config
                }
            },
            Err(e) => {
                log::warn!("Config unavailable, using defaults: {e}");
                Self::default()
            }
        }
    }

    /// Output spec a freshly loaded image starts with.
    pub fn initial_output_spec(&self) -> OutputSpec {
        OutputSpec::new(self.default_format, self.default_quality)
    }

    /// Directory downloads go to, falling back to the working directory.
    pub fn download_dir(&self) -> PathBuf {
        self.download_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }

    /// Preview cap, guarded against nonsensical stored values.
    pub fn preview_cap(&self) -> f32 {
        if self.preview_cap.is_finite() && self.preview_cap >= 1.0 {
            self.preview_cap
        } else {
            DEFAULT_PREVIEW_CAP
        }
    }
}
