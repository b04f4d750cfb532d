// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/mod.rs
//
// Application state, messages, update loop and views.

pub mod message;
pub mod model;
pub mod notice;
pub mod update;
pub mod view;

pub use message::AppMessage;
pub use model::AppModel;
