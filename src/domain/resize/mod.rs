// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/resize/mod.rs
//
// Resize geometry, dimension state and the interactive drag surface.

mod dimensions;
mod geometry;
mod surface;

pub use dimensions::{parse_dimension_input, DimensionController, DimensionState};
pub use geometry::{compute_resized_dimensions, ResizeHandle};
pub use surface::{DisplayBox, DragState, ResizeGesture, ResizeSurface};
