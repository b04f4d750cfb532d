// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/mod.rs
//
// View composition: empty state, settings panel and preview.

mod footer;
mod preview;
mod resize_overlay;
mod settings;

use cosmic::iced::{Alignment, Length};
use cosmic::widget::{button, column, container, row, text};
use cosmic::Element;

use crate::app::{AppMessage, AppModel};
use crate::fl;

pub use footer::view as footer;

/// Render the main window content.
pub fn view(model: &AppModel) -> Element<'_, AppMessage> {
    if model.asset.is_none() {
        return empty_state(model);
    }

    let content = row()
        .push(
            container(settings::view(model))
                .width(Length::Fixed(320.0))
                .padding(16),
        )
        .push(
            container(preview::view(model))
                .width(Length::Fill)
                .height(Length::Fill)
                .center(Length::Fill),
        )
        .spacing(8)
        .align_y(Alignment::Start);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn empty_state(model: &AppModel) -> Element<'_, AppMessage> {
    let mut content = column()
        .push(text::title3(fl!("empty-title")))
        .push(text::body(fl!("empty-hint")))
        .push(text::caption(fl!(
            "empty-limits",
            size = format_megabytes(model.max_upload_bytes)
        )))
        .spacing(12)
        .align_x(Alignment::Center);

    // A failed load leaves the path around for another attempt.
    if model.source_path.is_some() {
        content = content.push(
            button::standard(fl!("retry")).on_press(AppMessage::ReloadSource),
        );
    }

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center(Length::Fill)
        .into()
}

fn format_megabytes(bytes: u64) -> String {
    format!("{:.0}", bytes as f64 / (1024.0 * 1024.0))
}

fn format_kilobytes(bytes: usize) -> String {
    format!("{:.1}", bytes as f64 / 1024.0)
}
