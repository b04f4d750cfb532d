// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/model.rs
//
// Application state.

use std::path::PathBuf;
use std::sync::Arc;

use cosmic::widget::image::Handle as ImageHandle;

use crate::app::notice::Notice;
use crate::config::AppConfig;
use crate::domain::image::{ImageAsset, OutputSpec, RenderResult, RenderSequencer};
use crate::domain::resize::{parse_dimension_input, DimensionController, DisplayBox, ResizeSurface};

pub struct AppModel {
    // Source.
    pub asset: Option<Arc<ImageAsset>>,
    pub source_handle: Option<ImageHandle>,
    pub source_path: Option<PathBuf>,

    // Dimensions.
    pub dimensions: DimensionController,
    pub width_input: String,
    pub height_input: String,
    pub surface: ResizeSurface,

    // Output.
    pub output: OutputSpec,
    pub renders: RenderSequencer,
    pub render: Option<RenderResult>,
    pub render_handle: Option<ImageHandle>,
    pub last_download: Option<PathBuf>,

    // UI state.
    pub notice: Option<Notice>,

    // Settings from config / CLI.
    pub preview_cap: f32,
    pub download_dir: PathBuf,
    pub max_upload_bytes: u64,
    initial_output: OutputSpec,
}

impl AppModel {
    pub fn new(config: &AppConfig) -> Self {
        let initial_output = config.initial_output_spec();
        Self {
            asset: None,
            source_handle: None,
            source_path: None,
            dimensions: DimensionController::default(),
            width_input: String::new(),
            height_input: String::new(),
            surface: ResizeSurface::default(),
            output: initial_output,
            renders: RenderSequencer::default(),
            render: None,
            render_handle: None,
            last_download: None,
            notice: None,
            preview_cap: config.preview_cap(),
            download_dir: config.download_dir(),
            max_upload_bytes: config.max_upload_bytes,
            initial_output,
        }
    }

    /// Replace the source image and reset everything derived from it.
    pub fn set_image_asset(&mut self, asset: Arc<ImageAsset>) {
        self.dimensions.set_image_asset(&asset);
        self.surface.end();
        self.renders.reset();
        self.render = None;
        self.render_handle = None;
        self.last_download = None;
        self.source_handle = Some(ImageHandle::from_bytes(asset.bytes().to_vec()));
        self.asset = Some(asset);
        self.sync_inputs();
    }

    /// Drop the source image and return to the empty state.
    pub fn start_over(&mut self) {
        self.asset = None;
        self.source_handle = None;
        self.source_path = None;
        self.dimensions = DimensionController::default();
        self.surface.end();
        self.renders.reset();
        self.render = None;
        self.render_handle = None;
        self.last_download = None;
        self.output = self.initial_output;
        self.notice = None;
        self.width_input.clear();
        self.height_input.clear();
    }

    pub fn set_render(&mut self, result: RenderResult) {
        self.render_handle = Some(ImageHandle::from_bytes(result.bytes().to_vec()));
        self.render = Some(result);
        self.last_download = None;
    }

    /// Rewrite both fields from the current dimension state.
    pub fn sync_inputs(&mut self) {
        self.width_input = self.dimensions.width().to_string();
        self.height_input = self.dimensions.height().to_string();
    }

    /// Rewrite the height field only (the width field is being edited).
    pub fn sync_height_input(&mut self) {
        self.height_input = self.dimensions.height().to_string();
    }

    /// Rewrite the width field only (the height field is being edited).
    pub fn sync_width_input(&mut self) {
        self.width_input = self.dimensions.width().to_string();
    }

    /// Values typed into the dimension fields, as the resize guard sees them.
    #[allow(clippy::cast_possible_truncation)]
    pub fn requested_size(&self) -> (i64, i64) {
        (
            parse_dimension_input(&self.width_input) as i64,
            parse_dimension_input(&self.height_input) as i64,
        )
    }

    /// Resize is offered once the target differs from the natural size.
    pub fn can_resize(&self) -> bool {
        self.asset.is_some() && self.dimensions.has_changes()
    }

    pub fn display_box(&self) -> DisplayBox {
        DisplayBox::fit(
            self.dimensions.width(),
            self.dimensions.height(),
            self.preview_cap,
        )
    }

    /// Image shown inside the resize surface.
    pub fn preview_handle(&self) -> Option<&ImageHandle> {
        self.render_handle.as_ref().or(self.source_handle.as_ref())
    }

    pub fn notify(&mut self, notice: Notice) {
        notice.log();
        self.notice = Some(notice);
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }
}
