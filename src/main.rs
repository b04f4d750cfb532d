// SPDX-License-Identifier: GPL-3.0-or-later
// src/main.rs
//
// Entry point: command line, logging, localization and the COSMIC runtime.

mod app;
mod config;
mod constant;
mod domain;
mod i18n;
mod ui;

use std::path::PathBuf;

use clap::Parser;
use cosmic::iced::Limits;

use crate::ui::{Flags, QuickResizeApp};

/// Resize images with precise dimension control.
#[derive(Parser, Debug, Clone)]
#[command(name = "quickresize", version, about)]
pub struct Args {
    /// Image to open (JPEG, PNG, GIF or WebP)
    pub file: Option<PathBuf>,

    /// Directory resized images are saved to
    #[arg(long)]
    pub download_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

fn main() -> cosmic::iced::Result {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(format!("warn,quickresize={level}")),
    )
    .init();

    let requested_languages = i18n_embed::DesktopLanguageRequester::requested_languages();
    i18n::init(&requested_languages);

    let settings = cosmic::app::Settings::default()
        .size_limits(Limits::NONE.min_width(720.0).min_height(540.0));

    log::info!("Starting quickresize {}", env!("CARGO_PKG_VERSION"));
    cosmic::app::run::<QuickResizeApp>(settings, Flags::Args(args))
}
