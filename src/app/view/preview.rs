// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/preview.rs
//
// Interactive resize preview and the result/download section.

use cosmic::iced::{Alignment, ContentFit, Length};
use cosmic::iced_widget::{image, stack};
use cosmic::widget::{button, column, container, row, text};
use cosmic::Element;

use super::format_kilobytes;
use super::resize_overlay::resize_overlay;
use crate::app::{AppMessage, AppModel};
use crate::constant::HANDLE_GUTTER;
use crate::domain::image::RenderResult;
use crate::fl;

pub fn view(model: &AppModel) -> Element<'_, AppMessage> {
    let mut content = column()
        .push(surface(model))
        .push(text::body(fl!(
            "dimension-readout",
            width = model.dimensions.width(),
            height = model.dimensions.height()
        )))
        .spacing(12)
        .align_x(Alignment::Center);

    let display = model.display_box();
    if display.scale < 1.0 {
        content = content.push(text::caption(fl!(
            "preview-scale",
            percent = (display.scale * 100.0).round() as u32
        )));
    }

    if let Some(render) = &model.render {
        content = content.push(result(model, render));
    }

    content.into()
}

/// Image stretched to the target size with the handle overlay on top.
fn surface(model: &AppModel) -> Element<'_, AppMessage> {
    let display = model.display_box();

    let picture: Element<'_, AppMessage> = match model.preview_handle() {
        Some(handle) => image(handle.clone())
            .width(Length::Fixed(display.width))
            .height(Length::Fixed(display.height))
            .content_fit(ContentFit::Fill)
            .into(),
        None => container(text::caption(fl!("no-preview")))
            .width(Length::Fixed(display.width))
            .height(Length::Fixed(display.height))
            .into(),
    };

    let overlay = resize_overlay(display, HANDLE_GUTTER, model.surface.active_handle());

    stack![container(picture).padding(HANDLE_GUTTER), overlay].into()
}

fn result<'a>(model: &'a AppModel, render: &'a RenderResult) -> Element<'a, AppMessage> {
    let mut actions = row()
        .push(button::suggested(fl!("download")).on_press(AppMessage::Download))
        .spacing(8);

    if model.last_download.is_some() {
        actions = actions.push(button::standard(fl!("show-file")).on_press(AppMessage::ShowDownload));
    }

    column()
        .push(text::title4(fl!("result-title")))
        .push(text::caption(fl!(
            "result-info",
            width = render.width(),
            height = render.height(),
            format = render.format().label(),
            size = format_kilobytes(render.bytes().len())
        )))
        .push(actions)
        .spacing(8)
        .align_x(Alignment::Center)
        .into()
}
