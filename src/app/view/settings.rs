// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/settings.rs
//
// Dimension fields, output options and the resize action.

use cosmic::iced::{Alignment, Length};
use cosmic::widget::{button, column, row, slider, text, text_input};
use cosmic::Element;

use super::format_kilobytes;
use crate::app::{AppMessage, AppModel};
use crate::constant::{MAX_QUALITY, MIN_QUALITY, QUALITY_STEP};
use crate::domain::image::OutputFormat;
use crate::fl;

pub fn view(model: &AppModel) -> Element<'_, AppMessage> {
    let mut panel = column()
        .push(source_info(model))
        .push(dimension_fields(model))
        .push(format_picker(model))
        .spacing(20)
        .width(Length::Fill);

    if model.output.format.uses_quality() {
        panel = panel.push(quality_slider(model));
    }

    panel.push(actions(model)).into()
}

fn source_info(model: &AppModel) -> Element<'_, AppMessage> {
    let mut info = column().spacing(4);

    if let Some(asset) = &model.asset {
        info = info
            .push(text::title4(asset.name().to_string()))
            .push(text::caption(fl!(
                "source-info",
                width = asset.natural_width(),
                height = asset.natural_height(),
                size = format_kilobytes(asset.byte_size() as usize),
                mime = asset.mime()
            )));
    }

    info.into()
}

fn dimension_fields(model: &AppModel) -> Element<'_, AppMessage> {
    let width = column()
        .push(text::body(fl!("width")))
        .push(
            text_input(fl!("pixels"), &model.width_input)
                .on_input(AppMessage::WidthInput)
                .width(Length::Fill),
        )
        .spacing(4)
        .width(Length::Fill);

    let height = column()
        .push(text::body(fl!("height")))
        .push(
            text_input(fl!("pixels"), &model.height_input)
                .on_input(AppMessage::HeightInput)
                .width(Length::Fill),
        )
        .spacing(4)
        .width(Length::Fill);

    let lock_label = if model.dimensions.is_locked() {
        fl!("aspect-ratio-locked")
    } else {
        fl!("aspect-ratio-unlocked")
    };

    column()
        .push(row().push(width).push(height).spacing(12))
        .push(button::standard(lock_label).on_press(AppMessage::ToggleAspectRatioLock))
        .spacing(8)
        .into()
}

fn format_picker(model: &AppModel) -> Element<'_, AppMessage> {
    let buttons = OutputFormat::ALL.into_iter().fold(row().spacing(8), |row, format| {
        let label = format.label().to_string();
        let button = if model.output.format == format {
            button::suggested(label)
        } else {
            button::standard(label)
        };
        row.push(button.on_press(AppMessage::SelectFormat(format)))
    });

    column()
        .push(text::body(fl!("output-format")))
        .push(buttons)
        .spacing(4)
        .into()
}

fn quality_slider(model: &AppModel) -> Element<'_, AppMessage> {
    column()
        .push(text::body(fl!("quality", percent = model.output.percent())))
        .push(
            slider(
                MIN_QUALITY..=MAX_QUALITY,
                model.output.quality(),
                AppMessage::QualityChanged,
            )
            .step(QUALITY_STEP),
        )
        .spacing(4)
        .into()
}

fn actions(model: &AppModel) -> Element<'_, AppMessage> {
    let resize_label = if model.renders.is_pending() {
        fl!("resizing")
    } else {
        fl!("resize")
    };

    row()
        .push(
            button::suggested(resize_label)
                .on_press_maybe(model.can_resize().then_some(AppMessage::Resize)),
        )
        .push(button::standard(fl!("start-over")).on_press(AppMessage::StartOver))
        .spacing(8)
        .align_y(Alignment::Center)
        .into()
}
