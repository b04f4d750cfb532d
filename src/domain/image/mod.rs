// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/image/mod.rs
//
// Source assets, output encodings, rasterization and render ordering.

mod asset;
mod output;
mod raster;
mod sequence;

pub use asset::ImageAsset;
pub use output::{download_file_name, save_render, OutputFormat, OutputSpec};
pub use raster::{rasterize, render, validate_target, RenderResult};
pub use sequence::{Completion, RenderSequencer, RenderTicket};
