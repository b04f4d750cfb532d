// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/app.rs
//
// COSMIC application wiring and main app struct.

use std::path::{Path, PathBuf};

use cosmic::app::Core;
use cosmic::iced::keyboard::{self, key::Named, Key, Modifiers};
use cosmic::iced::{event, window, Event, Subscription};
use cosmic::{Action, Element, Task};

use crate::app::update::{self, UpdateResult};
use crate::app::{view, AppMessage, AppModel};
use crate::config::AppConfig;
use crate::Args;

/// Flags passed from `main` into the application.
#[derive(Debug, Clone)]
pub enum Flags {
    Args(Args),
}

/// Main application type.
pub struct QuickResizeApp {
    core: Core,
    pub model: AppModel,
}

impl cosmic::Application for QuickResizeApp {
    type Executor = cosmic::SingleThreadExecutor;
    type Flags = Flags;
    type Message = AppMessage;

    const APP_ID: &'static str = "org.quickresize.QuickResize";

    fn core(&self) -> &Core {
        &self.core
    }

    fn core_mut(&mut self) -> &mut Core {
        &mut self.core
    }

    fn init(core: Core, flags: Self::Flags) -> (Self, Task<Action<Self::Message>>) {
        let mut config = AppConfig::load(Self::APP_ID);

        let Flags::Args(args) = flags;

        // CLI overrides stored config.
        if let Some(dir) = args.download_dir {
            config.download_dir = Some(dir);
        }

        let mut model = AppModel::new(&config);

        let initial_path = args
            .file
            .and_then(|path| resolve_initial_file(path, config.default_image_dir.as_deref()));

        let task = match initial_path {
            Some(path) => match update::update(&mut model, AppMessage::OpenPath(path)) {
                UpdateResult::None => Task::none(),
                UpdateResult::Task(task) => task,
            },
            None => Task::none(),
        };

        (Self { core, model }, task)
    }

    fn update(&mut self, message: Self::Message) -> Task<Action<Self::Message>> {
        match update::update(&mut self.model, message) {
            UpdateResult::None => Task::none(),
            UpdateResult::Task(task) => task,
        }
    }

    fn view(&self) -> Element<'_, Self::Message> {
        view::view(&self.model)
    }

    fn footer(&self) -> Option<Element<'_, Self::Message>> {
        view::footer(&self.model)
    }

    fn subscription(&self) -> Subscription<Self::Message> {
        Subscription::batch([
            keyboard::on_key_press(handle_key_press),
            event::listen_with(handle_window_event),
        ])
    }
}

/// Resolve the CLI path, falling back to the configured image directory
/// for relative names.
fn resolve_initial_file(path: PathBuf, image_dir: Option<&Path>) -> Option<PathBuf> {
    if path.is_file() {
        return Some(path);
    }
    if path.is_relative()
        && let Some(candidate) = image_dir.map(|dir| dir.join(&path))
        && candidate.is_file()
    {
        return Some(candidate);
    }
    log::error!("Not a file: {}", path.display());
    None
}

/// Map raw key presses + modifiers into high-level application messages.
fn handle_key_press(key: Key, modifiers: Modifiers) -> Option<AppMessage> {
    // Ignore key presses when command-style modifiers are pressed.
    if modifiers.command() || modifiers.alt() || modifiers.logo() || modifiers.control() {
        return None;
    }

    match key.as_ref() {
        Key::Named(Named::Enter) => Some(AppMessage::Resize),
        Key::Named(Named::Escape) => Some(AppMessage::DismissNotice),
        Key::Character(ch) if ch.eq_ignore_ascii_case("l") => {
            Some(AppMessage::ToggleAspectRatioLock)
        }
        Key::Character(ch) if ch.eq_ignore_ascii_case("d") => Some(AppMessage::Download),
        _ => None,
    }
}

/// Files dropped onto the window are loaded like a CLI argument.
fn handle_window_event(event: Event, _status: event::Status, _id: window::Id) -> Option<AppMessage> {
    match event {
        Event::Window(window::Event::FileDropped(path)) => Some(AppMessage::OpenPath(path)),
        _ => None,
    }
}
