// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/message.rs
//
// Application messages: events, user actions, and internal signals.

use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::error::ResizeError;
use crate::domain::image::{ImageAsset, OutputFormat, RenderResult, RenderTicket};
use crate::domain::resize::ResizeHandle;

#[derive(Debug, Clone)]
pub enum AppMessage {
    // File / upload.
    OpenPath(PathBuf),
    ReloadSource,
    AssetLoaded(Result<Arc<ImageAsset>, String>),
    StartOver,

    // Dimension fields.
    WidthInput(String),
    HeightInput(String),
    ToggleAspectRatioLock,

    // Resize handles.
    ResizeDragStart {
        handle: ResizeHandle,
        x: f32,
        y: f32,
    },
    ResizeDragMove {
        x: f32,
        y: f32,
    },
    ResizeDragEnd,

    // Output settings.
    SelectFormat(OutputFormat),
    QualityChanged(f32),

    // Rendering.
    Resize,
    RenderFinished(RenderTicket, Result<RenderResult, ResizeError>),

    // Download.
    Download,
    Downloaded(Result<PathBuf, String>),
    ShowDownload,

    // Notifications.
    DismissNotice,
}
