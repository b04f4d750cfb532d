// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/resize/geometry.rs
//
// Resize handle types and the pure drag-to-dimensions calculation.

use crate::constant::{MAX_DIMENSION, MIN_DRAG_DIMENSION};

/// One of the eight drag affordances around the preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResizeHandle {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

/// Horizontal effect of a handle on the width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Horizontal {
    /// Dragging right grows the box.
    East,
    /// Dragging left grows the box.
    West,
}

/// Vertical effect of a handle on the height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Vertical {
    /// Dragging up grows the box.
    North,
    /// Dragging down grows the box.
    South,
}

impl ResizeHandle {
    /// All handles, corners first then edges.
    ///
    /// [`DisplayBox::hit_test`](super::DisplayBox::hit_test) returns the first
    /// match in this order, so corners win where hit targets overlap.
    pub const ALL: [Self; 8] = [
        Self::NorthWest,
        Self::NorthEast,
        Self::SouthWest,
        Self::SouthEast,
        Self::North,
        Self::South,
        Self::West,
        Self::East,
    ];

    /// Short compass code (`n`, `se`, ...).
    pub fn code(self) -> &'static str {
        match self {
            Self::North => "n",
            Self::South => "s",
            Self::East => "e",
            Self::West => "w",
            Self::NorthEast => "ne",
            Self::NorthWest => "nw",
            Self::SouthEast => "se",
            Self::SouthWest => "sw",
        }
    }

    pub fn is_corner(self) -> bool {
        self.horizontal().is_some() && self.vertical().is_some()
    }

    /// Position of the handle on a unit box, `(0, 0)` top-left to `(1, 1)`.
    pub fn anchor(self) -> (f32, f32) {
        let x = match self.horizontal() {
            Some(Horizontal::West) => 0.0,
            Some(Horizontal::East) => 1.0,
            None => 0.5,
        };
        let y = match self.vertical() {
            Some(Vertical::North) => 0.0,
            Some(Vertical::South) => 1.0,
            None => 0.5,
        };
        (x, y)
    }

    fn horizontal(self) -> Option<Horizontal> {
        match self {
            Self::East | Self::NorthEast | Self::SouthEast => Some(Horizontal::East),
            Self::West | Self::NorthWest | Self::SouthWest => Some(Horizontal::West),
            Self::North | Self::South => None,
        }
    }

    fn vertical(self) -> Option<Vertical> {
        match self {
            Self::North | Self::NorthEast | Self::NorthWest => Some(Vertical::North),
            Self::South | Self::SouthEast | Self::SouthWest => Some(Vertical::South),
            Self::East | Self::West => None,
        }
    }
}

/// Clamp a dragged dimension into `[MIN_DRAG_DIMENSION, MAX_DIMENSION]`.
fn clamp_dragged(value: f64) -> f64 {
    if value.is_nan() {
        return f64::from(MIN_DRAG_DIMENSION);
    }
    value.clamp(f64::from(MIN_DRAG_DIMENSION), f64::from(MAX_DIMENSION))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_pixels(value: f64) -> u32 {
    clamp_dragged(value).round() as u32
}

/// Compute the dimensions produced by dragging `handle` by `delta` pixels.
///
/// Handles with a horizontal component drive the width (east adds the
/// horizontal delta, west subtracts it); pure `n`/`s` handles drive the
/// height (south adds the vertical delta, north subtracts it). When the
/// aspect ratio is locked the other dimension is derived from the driven
/// one through `natural_aspect_ratio`, pulling the driven side back when the
/// derived one would pass `MAX_DIMENSION`; otherwise corners apply both
/// deltas independently and edges leave the other dimension untouched.
///
/// Both results always lie within `[MIN_DRAG_DIMENSION, MAX_DIMENSION]`.
pub fn compute_resized_dimensions(
    handle: ResizeHandle,
    delta: (f32, f32),
    start: (u32, u32),
    aspect_ratio_locked: bool,
    natural_aspect_ratio: f64,
) -> (u32, u32) {
    let (dx, dy) = (f64::from(delta.0), f64::from(delta.1));
    let (start_w, start_h) = (f64::from(start.0), f64::from(start.1));
    let ratio = if natural_aspect_ratio.is_finite() && natural_aspect_ratio > 0.0 {
        natural_aspect_ratio
    } else {
        1.0
    };

    let max = f64::from(MAX_DIMENSION);

    let dragged_width = handle.horizontal().map(|h| match h {
        Horizontal::East => start_w + dx,
        Horizontal::West => start_w - dx,
    });
    let dragged_height = handle.vertical().map(|v| match v {
        Vertical::North => start_h - dy,
        Vertical::South => start_h + dy,
    });

    let (width, height) = match (dragged_width, dragged_height) {
        // Width drives every handle that has a horizontal component.
        (Some(w), dragged_h) => {
            let width = clamp_dragged(w);
            if !aspect_ratio_locked {
                (width, dragged_h.unwrap_or(start_h))
            } else if width / ratio > max {
                // Derived side hits the cap first.
                (max * ratio, max)
            } else {
                (width, width / ratio)
            }
        }
        (None, Some(h)) => {
            let height = clamp_dragged(h);
            if !aspect_ratio_locked {
                (start_w, height)
            } else if height * ratio > max {
                (max, max / ratio)
            } else {
                (height * ratio, height)
            }
        }
        (None, None) => (start_w, start_h),
    };

    (to_pixels(width), to_pixels(height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn se_locked_ignores_vertical_delta() {
        // 800x400 => ratio 2.0
        let dims = compute_resized_dimensions(
            ResizeHandle::SouthEast,
            (100.0, 9999.0),
            (800, 400),
            true,
            2.0,
        );
        assert_eq!(dims, (900, 450));
    }

    #[test]
    fn north_unlocked_changes_height_only() {
        let dims =
            compute_resized_dimensions(ResizeHandle::North, (0.0, -30.0), (400, 300), false, 4.0 / 3.0);
        assert_eq!(dims, (400, 330));
    }

    #[test]
    fn west_subtracts_horizontal_delta() {
        let dims =
            compute_resized_dimensions(ResizeHandle::West, (-40.0, 12.0), (200, 100), false, 2.0);
        assert_eq!(dims, (240, 100));
    }

    #[test]
    fn south_locked_derives_width() {
        let dims =
            compute_resized_dimensions(ResizeHandle::South, (77.0, 50.0), (300, 200), true, 1.5);
        assert_eq!(dims, (375, 250));
    }

    #[test]
    fn corner_unlocked_applies_both_deltas() {
        let dims =
            compute_resized_dimensions(ResizeHandle::NorthWest, (10.0, 20.0), (300, 200), false, 1.5);
        assert_eq!(dims, (290, 180));

        let dims =
            compute_resized_dimensions(ResizeHandle::SouthWest, (10.0, 20.0), (300, 200), false, 1.5);
        assert_eq!(dims, (290, 220));
    }

    #[test]
    fn floors_at_drag_minimum() {
        let dims =
            compute_resized_dimensions(ResizeHandle::East, (-5000.0, 0.0), (400, 300), true, 1.0);
        assert_eq!(dims, (50, 50));
    }

    #[test]
    fn caps_at_maximum() {
        let dims = compute_resized_dimensions(
            ResizeHandle::SouthEast,
            (50_000.0, 50_000.0),
            (400, 300),
            false,
            1.0,
        );
        assert_eq!(dims, (MAX_DIMENSION, MAX_DIMENSION));
    }

    #[test]
    fn locked_cap_pulls_driven_side_back() {
        // 1000x5000 => ratio 0.2; width 3000 would need height 15000.
        let dims =
            compute_resized_dimensions(ResizeHandle::East, (2000.0, 0.0), (1000, 5000), true, 0.2);
        assert_eq!(dims, (2000, MAX_DIMENSION));

        let dims =
            compute_resized_dimensions(ResizeHandle::South, (0.0, 2000.0), (5000, 1000), true, 5.0);
        assert_eq!(dims, (MAX_DIMENSION, 2000));
    }

    #[test]
    fn small_passive_dimension_is_lifted_to_floor() {
        let dims = compute_resized_dimensions(ResizeHandle::East, (10.0, 0.0), (100, 3), false, 1.0);
        assert_eq!(dims, (110, 50));
    }

    #[test]
    fn every_handle_and_delta_stays_in_bounds() {
        let deltas = [
            -100_000.0, -10_000.0, -999.5, -51.0, -1.0, 0.0, 0.4, 1.0, 49.0, 777.7, 9_999.0,
            100_000.0,
        ];
        let starts = [(1, 1), (50, 50), (800, 400), (10_000, 10_000), (3, 9_000)];
        let ratios = [0.01, 0.5, 1.0, 2.0, 300.0];

        for handle in ResizeHandle::ALL {
            for &dx in &deltas {
                for &dy in &deltas {
                    for &start in &starts {
                        for &ratio in &ratios {
                            for locked in [true, false] {
                                let (w, h) =
                                    compute_resized_dimensions(handle, (dx, dy), start, locked, ratio);
                                assert!(
                                    (MIN_DRAG_DIMENSION..=MAX_DIMENSION).contains(&w)
                                        && (MIN_DRAG_DIMENSION..=MAX_DIMENSION).contains(&h),
                                    "{} {dx},{dy} from {start:?} ratio {ratio} locked {locked} => {w}x{h}",
                                    handle.code()
                                );
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn repeated_calls_do_not_accumulate() {
        let first =
            compute_resized_dimensions(ResizeHandle::SouthEast, (33.3, 0.0), (640, 480), true, 4.0 / 3.0);
        for _ in 0..100 {
            let again = compute_resized_dimensions(
                ResizeHandle::SouthEast,
                (33.3, 0.0),
                (640, 480),
                true,
                4.0 / 3.0,
            );
            assert_eq!(first, again);
        }
    }

    #[test]
    fn corners_come_first() {
        let (corners, edges) = ResizeHandle::ALL.split_at(4);
        assert!(corners.iter().all(|h| h.is_corner()));
        assert!(edges.iter().all(|h| !h.is_corner()));
    }

    #[test]
    fn anchors_and_codes() {
        assert_eq!(ResizeHandle::NorthWest.anchor(), (0.0, 0.0));
        assert_eq!(ResizeHandle::East.anchor(), (1.0, 0.5));
        assert_eq!(ResizeHandle::South.anchor(), (0.5, 1.0));
        assert!(ResizeHandle::SouthEast.is_corner());
        assert!(!ResizeHandle::North.is_corner());
        assert_eq!(ResizeHandle::SouthWest.code(), "sw");
    }
}
