// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/update.rs
//
// Message handling: applies user actions to the model and spawns async work.

use std::sync::Arc;

use cosmic::{Action, Task};

use crate::app::message::AppMessage;
use crate::app::model::AppModel;
use crate::app::notice::Notice;
use crate::domain::image::{render, save_render, validate_target, Completion, ImageAsset};
use crate::domain::resize::parse_dimension_input;

pub enum UpdateResult {
    None,
    Task(Task<Action<AppMessage>>),
}

pub fn update(model: &mut AppModel, message: AppMessage) -> UpdateResult {
    match message {
        // ---- File / upload ------------------------------------------------
        AppMessage::OpenPath(path) => {
            log::info!("Opening {}", path.display());
            model.source_path = Some(path.clone());
            let max = model.max_upload_bytes;
            return UpdateResult::Task(Task::perform(
                async move {
                    ImageAsset::open(&path, max)
                        .await
                        .map(Arc::new)
                        .map_err(|e| e.to_string())
                },
                |result| Action::App(AppMessage::AssetLoaded(result)),
            ));
        }

        AppMessage::ReloadSource => {
            if let Some(path) = model.source_path.clone() {
                return update(model, AppMessage::OpenPath(path));
            }
        }

        AppMessage::AssetLoaded(Ok(asset)) => {
            log::debug!("Asset ready: {asset:?}");
            let name = asset.name().to_string();
            model.set_image_asset(asset);
            model.notify(Notice::UploadSucceeded { name });
        }

        AppMessage::AssetLoaded(Err(reason)) => {
            model.notify(Notice::UploadFailed(reason));
        }

        AppMessage::StartOver => model.start_over(),

        // ---- Dimension fields ---------------------------------------------
        AppMessage::WidthInput(text) => {
            let value = parse_dimension_input(&text);
            model.width_input = text;
            if model.dimensions.set_width(value) {
                model.sync_height_input();
            }
        }

        AppMessage::HeightInput(text) => {
            let value = parse_dimension_input(&text);
            model.height_input = text;
            if model.dimensions.set_height(value) {
                model.sync_width_input();
            }
        }

        AppMessage::ToggleAspectRatioLock => {
            let locked = model.dimensions.toggle_aspect_ratio_lock();
            log::debug!("Aspect ratio lock: {locked}");
        }

        // ---- Resize handles -----------------------------------------------
        AppMessage::ResizeDragStart { handle, x, y } => {
            if model.asset.is_some() && model.surface.begin(handle, (x, y), model.dimensions.state()) {
                log::debug!("Drag start on {} at {x},{y}", handle.code());
            }
        }

        AppMessage::ResizeDragMove { x, y } => {
            let ratio = model.dimensions.natural_aspect_ratio();
            if let Some((width, height)) = model.surface.drag_to((x, y), ratio)
                && model.dimensions.set_dimensions(width, height)
            {
                model.sync_inputs();
            }
        }

        AppMessage::ResizeDragEnd => {
            if let Some(gesture) = model.surface.end() {
                log::debug!(
                    "Drag end on {}: {}x{}",
                    gesture.handle.code(),
                    model.dimensions.width(),
                    model.dimensions.height()
                );
            }
        }

        // ---- Output settings ----------------------------------------------
        AppMessage::SelectFormat(format) => model.output.format = format,

        AppMessage::QualityChanged(quality) => model.output.set_quality(quality),

        // ---- Rendering ----------------------------------------------------
        AppMessage::Resize => {
            let Some(asset) = model.asset.clone() else {
                return UpdateResult::None;
            };

            let (req_w, req_h) = model.requested_size();
            let (width, height) = match validate_target(req_w, req_h) {
                Ok(size) => size,
                Err(e) => {
                    model.notify(Notice::InvalidDimensions(e.to_string()));
                    return UpdateResult::None;
                }
            };

            // Same gate as the button; Enter reaches here too.
            if !model.can_resize() {
                log::debug!("Resize skipped: target equals natural size");
                return UpdateResult::None;
            }

            let spec = model.output;
            let ticket = model.renders.issue();
            log::info!(
                "Render #{} issued: {width}x{height} {}",
                ticket.id(),
                spec.format.label()
            );

            return UpdateResult::Task(Task::perform(
                render(asset, width, height, spec),
                move |result| Action::App(AppMessage::RenderFinished(ticket, result)),
            ));
        }

        AppMessage::RenderFinished(ticket, result) => match model.renders.complete(ticket) {
            Completion::Stale => {
                log::debug!("Render #{} discarded as stale", ticket.id());
            }
            Completion::Apply => match result {
                Ok(output) => {
                    let (width, height) = (output.width(), output.height());
                    log::debug!("Render #{} produced {} bytes", ticket.id(), output.bytes().len());
                    model.set_render(output);
                    model.notify(Notice::ResizeSucceeded { width, height });
                }
                Err(e) => model.notify(Notice::ResizeFailed(e.to_string())),
            },
        },

        // ---- Download -----------------------------------------------------
        AppMessage::Download => {
            let Some(result) = model.render.clone() else {
                return UpdateResult::None;
            };
            let dir = model.download_dir.clone();
            return UpdateResult::Task(Task::perform(
                async move {
                    save_render(&result, &dir)
                        .await
                        .map_err(|e| format!("{e:#}"))
                },
                |result| Action::App(AppMessage::Downloaded(result)),
            ));
        }

        AppMessage::Downloaded(Ok(path)) => {
            model.last_download = Some(path.clone());
            model.notify(Notice::DownloadTriggered(path));
        }

        AppMessage::Downloaded(Err(reason)) => model.notify(Notice::DownloadFailed(reason)),

        AppMessage::ShowDownload => {
            if let Some(path) = &model.last_download
                && let Err(e) = open::that_detached(path)
            {
                log::error!("Failed to open {}: {e}", path.display());
            }
        }

        // ---- Notifications ------------------------------------------------
        AppMessage::DismissNotice => model.clear_notice(),
    }

    UpdateResult::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::domain::error::ResizeError;
    use crate::domain::image::{OutputFormat, RenderResult};
    use crate::domain::resize::ResizeHandle;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn png(width: u32, height: u32) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        RgbaImage::from_pixel(width, height, Rgba([10, 20, 30, 255]))
            .write_to(&mut buf, ImageFormat::Png)
            .unwrap();
        buf.into_inner()
    }

    fn loaded(width: u32, height: u32) -> AppModel {
        let mut model = AppModel::new(&AppConfig::default());
        let asset = ImageAsset::from_bytes("a.png", png(width, height), u64::MAX).unwrap();
        update(&mut model, AppMessage::AssetLoaded(Ok(Arc::new(asset))));
        model
    }

    fn rendered(width: u32, height: u32) -> RenderResult {
        RenderResult::new(vec![0_u8; 4], width, height, OutputFormat::Png)
    }

    #[test]
    fn loading_resets_dimensions_and_fields() {
        let model = loaded(1200, 800);
        assert_eq!(model.dimensions.state().size(), (1200, 800));
        assert!(model.dimensions.is_locked());
        assert_eq!((model.width_input.as_str(), model.height_input.as_str()), ("1200", "800"));
        assert!(!model.can_resize());
        assert!(matches!(model.notice, Some(Notice::UploadSucceeded { .. })));
    }

    #[test]
    fn width_field_drives_height_field() {
        let mut model = loaded(1200, 800);
        update(&mut model, AppMessage::WidthInput("600".into()));
        assert_eq!(model.height_input, "400");
        assert!(model.can_resize());
    }

    #[test]
    fn invalid_field_text_keeps_state() {
        let mut model = loaded(1200, 800);
        update(&mut model, AppMessage::WidthInput("".into()));
        assert_eq!(model.dimensions.state().size(), (1200, 800));
        assert_eq!(model.width_input, "");

        update(&mut model, AppMessage::HeightInput("-5".into()));
        assert_eq!(model.dimensions.state().size(), (1200, 800));
    }

    #[test]
    fn resize_with_empty_field_is_rejected() {
        let mut model = loaded(1200, 800);
        update(&mut model, AppMessage::WidthInput("".into()));
        let result = update(&mut model, AppMessage::Resize);

        assert!(matches!(result, UpdateResult::None));
        assert!(matches!(model.notice, Some(Notice::InvalidDimensions(_))));
        assert!(!model.renders.is_pending());
    }

    #[test]
    fn resize_without_changes_does_nothing() {
        let mut model = loaded(1200, 800);
        let result = update(&mut model, AppMessage::Resize);

        assert!(matches!(result, UpdateResult::None));
        assert!(!model.renders.is_pending());
        assert!(matches!(model.notice, Some(Notice::UploadSucceeded { .. })));

        // A change re-enables it.
        update(&mut model, AppMessage::WidthInput("600".into()));
        let result = update(&mut model, AppMessage::Resize);
        assert!(matches!(result, UpdateResult::Task(_)));
        assert!(model.renders.is_pending());
    }

    #[test]
    fn resize_over_maximum_is_rejected() {
        let mut model = loaded(1200, 800);
        update(&mut model, AppMessage::WidthInput("20000".into()));
        let result = update(&mut model, AppMessage::Resize);

        assert!(matches!(result, UpdateResult::None));
        assert!(matches!(model.notice, Some(Notice::InvalidDimensions(_))));
    }

    #[test]
    fn drag_updates_dimensions_and_fields() {
        let mut model = loaded(800, 400);
        update(
            &mut model,
            AppMessage::ResizeDragStart {
                handle: ResizeHandle::SouthEast,
                x: 10.0,
                y: 10.0,
            },
        );
        update(&mut model, AppMessage::ResizeDragMove { x: 110.0, y: 5000.0 });
        assert_eq!(model.dimensions.state().size(), (900, 450));
        assert_eq!((model.width_input.as_str(), model.height_input.as_str()), ("900", "450"));

        update(&mut model, AppMessage::ResizeDragEnd);
        assert!(!model.surface.is_dragging());

        // Moves after release are ignored.
        update(&mut model, AppMessage::ResizeDragMove { x: 500.0, y: 500.0 });
        assert_eq!(model.dimensions.state().size(), (900, 450));
    }

    #[test]
    fn drag_without_asset_is_ignored() {
        let mut model = AppModel::new(&AppConfig::default());
        update(
            &mut model,
            AppMessage::ResizeDragStart {
                handle: ResizeHandle::East,
                x: 0.0,
                y: 0.0,
            },
        );
        assert!(!model.surface.is_dragging());
    }

    #[test]
    fn newer_render_wins_over_late_older_one() {
        let mut model = loaded(300, 300);
        let a = model.renders.issue();
        let b = model.renders.issue();

        update(&mut model, AppMessage::RenderFinished(b, Ok(rendered(200, 200))));
        update(&mut model, AppMessage::RenderFinished(a, Ok(rendered(100, 100))));

        let shown = model.render.as_ref().unwrap();
        assert_eq!((shown.width(), shown.height()), (200, 200));
    }

    #[test]
    fn failed_render_keeps_previous_result() {
        let mut model = loaded(300, 300);
        let a = model.renders.issue();
        update(&mut model, AppMessage::RenderFinished(a, Ok(rendered(150, 150))));

        let b = model.renders.issue();
        update(
            &mut model,
            AppMessage::RenderFinished(b, Err(ResizeError::Decode("corrupt".into()))),
        );

        assert_eq!(model.render.as_ref().map(RenderResult::width), Some(150));
        assert!(matches!(model.notice, Some(Notice::ResizeFailed(_))));
    }

    #[test]
    fn new_asset_discards_render_and_late_completions() {
        let mut model = loaded(300, 300);
        let a = model.renders.issue();
        update(&mut model, AppMessage::RenderFinished(a, Ok(rendered(150, 150))));
        let late = model.renders.issue();

        let asset = ImageAsset::from_bytes("b.png", png(40, 20), u64::MAX).unwrap();
        update(&mut model, AppMessage::AssetLoaded(Ok(Arc::new(asset))));
        assert!(model.render.is_none());

        update(&mut model, AppMessage::RenderFinished(late, Ok(rendered(99, 99))));
        assert!(model.render.is_none());
        assert_eq!(model.dimensions.state().size(), (40, 20));
    }

    #[test]
    fn start_over_clears_everything() {
        let mut model = loaded(300, 300);
        update(&mut model, AppMessage::SelectFormat(OutputFormat::Jpeg));
        update(&mut model, AppMessage::StartOver);

        assert!(model.asset.is_none());
        assert!(model.render.is_none());
        assert!(model.notice.is_none());
        assert_eq!(model.output.format, OutputFormat::Png);
    }

    #[tokio::test]
    async fn download_writes_into_download_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut model = loaded(300, 300);
        model.download_dir = dir.path().to_path_buf();
        model.set_render(rendered(64, 32));

        let result = model.render.clone().unwrap();
        let path = save_render(&result, &model.download_dir).await.unwrap();
        update(&mut model, AppMessage::Downloaded(Ok(path.clone())));

        assert_eq!(path.file_name().unwrap(), "resized-image-64x32.png");
        assert_eq!(model.last_download.as_deref(), Some(path.as_path()));
        assert!(matches!(model.notice, Some(Notice::DownloadTriggered(_))));
    }
}
