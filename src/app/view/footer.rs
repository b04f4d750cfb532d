// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/footer.rs
//
// Notification bar for upload, resize and download outcomes.

use cosmic::iced::{Alignment, Length};
use cosmic::widget::{button, container, horizontal_space, row, text};
use cosmic::Element;

use crate::app::{AppMessage, AppModel};
use crate::fl;

pub fn view(model: &AppModel) -> Option<Element<'_, AppMessage>> {
    let notice = model.notice.as_ref()?;

    let label = if notice.is_error() {
        fl!("notice-error")
    } else {
        fl!("notice-success")
    };

    let bar = row()
        .push(text::heading(label))
        .push(text::body(notice.message()))
        .push(horizontal_space())
        .push(button::text(fl!("dismiss")).on_press(AppMessage::DismissNotice))
        .spacing(12)
        .align_y(Alignment::Center);

    Some(container(bar).width(Length::Fill).padding([8, 16]).into())
}
