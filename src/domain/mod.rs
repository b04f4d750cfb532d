// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/mod.rs
//
// Toolkit-independent core: resize geometry, dimension state and rasterization.

pub mod error;
pub mod image;
pub mod resize;
