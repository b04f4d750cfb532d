// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/resize/surface.rs
//
// Drag lifecycle of the interactive resize preview and its display scaling.

use super::dimensions::DimensionState;
use super::geometry::{compute_resized_dimensions, ResizeHandle};

/// Snapshot taken when a handle is grabbed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeGesture {
    pub handle: ResizeHandle,
    pub origin: (f32, f32),
    pub start: DimensionState,
}

impl ResizeGesture {
    /// Dimensions for the pointer at `position`.
    pub fn dimensions_at(&self, position: (f32, f32), natural_aspect_ratio: f64) -> (u32, u32) {
        let delta = (position.0 - self.origin.0, position.1 - self.origin.1);
        compute_resized_dimensions(
            self.handle,
            delta,
            self.start.size(),
            self.start.aspect_ratio_locked,
            natural_aspect_ratio,
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(ResizeGesture),
}

/// State machine for the preview's resize handles.
#[derive(Debug, Clone, Default)]
pub struct ResizeSurface {
    state: DragState,
}

impl ResizeSurface {
    /// Grab `handle` at `position`. Ignored while another gesture is active.
    pub fn begin(&mut self, handle: ResizeHandle, position: (f32, f32), start: DimensionState) -> bool {
        if self.is_dragging() {
            return false;
        }
        self.state = DragState::Dragging(ResizeGesture {
            handle,
            origin: position,
            start,
        });
        true
    }

    /// Dimensions for a pointer move, or `None` when no gesture is active.
    pub fn drag_to(&self, position: (f32, f32), natural_aspect_ratio: f64) -> Option<(u32, u32)> {
        match &self.state {
            DragState::Idle => None,
            DragState::Dragging(gesture) => Some(gesture.dimensions_at(position, natural_aspect_ratio)),
        }
    }

    /// Release the active gesture, if any.
    pub fn end(&mut self) -> Option<ResizeGesture> {
        match std::mem::take(&mut self.state) {
            DragState::Idle => None,
            DragState::Dragging(gesture) => Some(gesture),
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    pub fn active_handle(&self) -> Option<ResizeHandle> {
        match &self.state {
            DragState::Idle => None,
            DragState::Dragging(gesture) => Some(gesture.handle),
        }
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }
}

/// On-screen size of the preview for a target of `width` x `height`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayBox {
    pub scale: f32,
    pub width: f32,
    pub height: f32,
}

impl DisplayBox {
    /// Fit the target inside `cap` x `cap` without upscaling.
    pub fn fit(width: u32, height: u32, cap: f32) -> Self {
        let (w, h) = (width.max(1) as f32, height.max(1) as f32);
        let scale = (cap / w).min(cap / h).min(1.0);
        Self {
            scale,
            width: w * scale,
            height: h * scale,
        }
    }

    /// Center of `handle` relative to the box's top-left corner.
    pub fn handle_center(&self, handle: ResizeHandle) -> (f32, f32) {
        let (ax, ay) = handle.anchor();
        (ax * self.width, ay * self.height)
    }

    /// Handle whose square hit target (side `hit_size`) contains `point`.
    ///
    /// Corners win over edges when targets overlap on small boxes.
    pub fn hit_test(&self, point: (f32, f32), hit_size: f32) -> Option<ResizeHandle> {
        let half = hit_size / 2.0;
        ResizeHandle::ALL.into_iter().find(|&handle| {
            let (cx, cy) = self.handle_center(handle);
            (point.0 - cx).abs() <= half && (point.1 - cy).abs() <= half
        })
    }
}
