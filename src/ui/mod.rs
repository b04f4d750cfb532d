// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/mod.rs
//
// COSMIC application shell.

mod app;

pub use app::{Flags, QuickResizeApp};
