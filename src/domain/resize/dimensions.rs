// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/resize/dimensions.rs
//
// Width/height/lock state and the operations allowed to change it.

use crate::constant::MAX_DIMENSION;
use crate::domain::image::ImageAsset;

/// Current target dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimensionState {
    pub width: u32,
    pub height: u32,
    pub aspect_ratio_locked: bool,
}

impl DimensionState {
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Owner of [`DimensionState`].
///
/// Every mutation keeps both dimensions in `1..=MAX_DIMENSION`; values that
/// are not positive finite numbers are ignored instead of being stored.
#[derive(Debug, Clone)]
pub struct DimensionController {
    state: DimensionState,
    natural: (u32, u32),
}

impl Default for DimensionController {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

/// Convert a raw input into a stored dimension, or `None` if it is not usable.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn accept(value: f64) -> Option<u32> {
    if !value.is_finite() {
        return None;
    }
    let rounded = value.round();
    if rounded < 1.0 {
        return None;
    }
    Some(rounded.min(f64::from(MAX_DIMENSION)) as u32)
}

/// Scale `width` x `height` down together until both fit `MAX_DIMENSION`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn fit_within_max(width: u32, height: u32) -> (u32, u32) {
    let longest = width.max(height);
    if longest <= MAX_DIMENSION {
        return (width, height);
    }
    let scale = f64::from(MAX_DIMENSION) / f64::from(longest);
    let shrink = |v: u32| ((f64::from(v) * scale).round() as u32).clamp(1, MAX_DIMENSION);
    (shrink(width), shrink(height))
}

impl DimensionController {
    /// Start at the given natural size with the aspect ratio locked.
    ///
    /// Oversized naturals start scaled down to fit, keeping their ratio.
    pub fn new(natural_width: u32, natural_height: u32) -> Self {
        let natural = (natural_width.max(1), natural_height.max(1));
        let (width, height) = fit_within_max(natural.0, natural.1);
        Self {
            state: DimensionState {
                width,
                height,
                aspect_ratio_locked: true,
            },
            natural,
        }
    }

    /// Reset to the asset's natural dimensions with the ratio locked.
    pub fn set_image_asset(&mut self, asset: &ImageAsset) {
        *self = Self::new(asset.natural_width(), asset.natural_height());
    }

    pub fn state(&self) -> DimensionState {
        self.state
    }

    pub fn width(&self) -> u32 {
        self.state.width
    }

    pub fn height(&self) -> u32 {
        self.state.height
    }

    pub fn is_locked(&self) -> bool {
        self.state.aspect_ratio_locked
    }

    /// Natural width divided by natural height of the current asset.
    pub fn natural_aspect_ratio(&self) -> f64 {
        f64::from(self.natural.0) / f64::from(self.natural.1)
    }

    /// Whether the target differs from the asset's natural size.
    pub fn has_changes(&self) -> bool {
        self.state.size() != self.natural
    }

    /// Set the width; derives the height when locked. Returns `false` on no-op.
    ///
    /// A locked height that would pass `MAX_DIMENSION` is capped and the
    /// width is pulled back to keep the ratio.
    pub fn set_width(&mut self, value: f64) -> bool {
        let Some(mut width) = accept(value) else {
            return false;
        };
        if self.state.aspect_ratio_locked {
            let ratio = self.natural_aspect_ratio();
            let derived = f64::from(width) / ratio;
            if derived.round() > f64::from(MAX_DIMENSION) {
                self.state.height = MAX_DIMENSION;
                width = accept(f64::from(MAX_DIMENSION) * ratio).unwrap_or(1);
            } else if let Some(height) = accept(derived) {
                self.state.height = height;
            }
        }
        self.state.width = width;
        true
    }

    /// Set the height; derives the width when locked. Returns `false` on no-op.
    ///
    /// Mirrors [`Self::set_width`] for the cap.
    pub fn set_height(&mut self, value: f64) -> bool {
        let Some(mut height) = accept(value) else {
            return false;
        };
        if self.state.aspect_ratio_locked {
            let ratio = self.natural_aspect_ratio();
            let derived = f64::from(height) * ratio;
            if derived.round() > f64::from(MAX_DIMENSION) {
                self.state.width = MAX_DIMENSION;
                height = accept(f64::from(MAX_DIMENSION) / ratio).unwrap_or(1);
            } else if let Some(width) = accept(derived) {
                self.state.width = width;
            }
        }
        self.state.height = height;
        true
    }

    /// Apply both dimensions at once, skipping lock recomputation.
    pub fn set_dimensions(&mut self, width: u32, height: u32) -> bool {
        match (accept(f64::from(width)), accept(f64::from(height))) {
            (Some(width), Some(height)) => {
                self.state.width = width;
                self.state.height = height;
                true
            }
            _ => false,
        }
    }

    /// Flip the lock. Current dimensions are left as they are.
    pub fn toggle_aspect_ratio_lock(&mut self) -> bool {
        self.state.aspect_ratio_locked = !self.state.aspect_ratio_locked;
        self.state.aspect_ratio_locked
    }
}

/// Parse the text of a dimension field. Unparseable text yields `0.0`.
pub fn parse_dimension_input(text: &str) -> f64 {
    let trimmed = text.trim();
    let digits_end = trimmed
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+'))))
        .map_or(trimmed.len(), |(i, _)| i);

    trimmed[..digits_end].parse::<i64>().map_or(0.0, |v| v as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_natural_size_locked() {
        let controller = DimensionController::new(1200, 800);
        assert_eq!(
            controller.state(),
            DimensionState {
                width: 1200,
                height: 800,
                aspect_ratio_locked: true,
            }
        );
        assert!(!controller.has_changes());
    }

    #[test]
    fn locked_width_derives_height() {
        let mut controller = DimensionController::new(1920, 1080);
        for width in [1_u32, 7, 333, 1000, 1919, 4096] {
            assert!(controller.set_width(f64::from(width)));
            let expected = (f64::from(width) / controller.natural_aspect_ratio()).round();
            if expected >= 1.0 {
                assert_eq!(f64::from(controller.height()), expected);
            }
            let true_height = f64::from(width) * 1080.0 / 1920.0;
            assert!((f64::from(controller.height()) - true_height).abs() <= 1.0);
        }
    }

    #[test]
    fn locked_height_derives_width() {
        let mut controller = DimensionController::new(800, 400);
        controller.set_height(100.0);
        assert_eq!(controller.state().size(), (200, 100));
    }

    #[test]
    fn derived_zero_keeps_previous_value() {
        let mut controller = DimensionController::new(3000, 10);
        controller.set_width(1.0);
        assert_eq!(controller.state().size(), (1, 10));
    }

    #[test]
    fn invalid_values_are_ignored() {
        let mut controller = DimensionController::new(640, 480);
        let before = controller.state();

        assert!(!controller.set_width(-5.0));
        assert!(!controller.set_width(f64::NAN));
        assert!(!controller.set_width(0.0));
        assert!(!controller.set_height(f64::INFINITY));
        assert!(!controller.set_dimensions(0, 10));

        assert_eq!(controller.state(), before);
    }

    #[test]
    fn values_are_capped() {
        let mut controller = DimensionController::new(1000, 500);
        controller.set_width(50_000.0);
        assert_eq!(controller.state().size(), (MAX_DIMENSION, 5000));

        controller.toggle_aspect_ratio_lock();
        controller.set_height(20_000.0);
        assert_eq!(controller.height(), MAX_DIMENSION);
    }

    #[test]
    fn oversized_natural_starts_scaled_to_fit() {
        let controller = DimensionController::new(12_000, 8_000);
        assert_eq!(controller.state().size(), (MAX_DIMENSION, 6667));
        assert!(controller.is_locked());
        assert!(controller.has_changes());
        assert_eq!(controller.natural_aspect_ratio(), 1.5);

        let tall = DimensionController::new(3_000, 30_000);
        assert_eq!(tall.state().size(), (1000, MAX_DIMENSION));
    }

    #[test]
    fn locked_cap_keeps_ratio() {
        let mut controller = DimensionController::new(1000, 5000);
        assert!(controller.set_width(3000.0));
        assert_eq!(controller.state().size(), (2000, MAX_DIMENSION));

        let mut controller = DimensionController::new(5000, 1000);
        assert!(controller.set_height(3000.0));
        assert_eq!(controller.state().size(), (MAX_DIMENSION, 2000));

        // Both sides stay within one pixel of the natural ratio.
        let mut controller = DimensionController::new(12_000, 8_000);
        controller.set_height(9_999.0);
        let (w, h) = controller.state().size();
        assert!(w <= MAX_DIMENSION && h <= MAX_DIMENSION);
        assert!((f64::from(w) / 1.5 - f64::from(h)).abs() <= 1.0);
    }

    #[test]
    fn set_dimensions_is_idempotent() {
        let mut controller = DimensionController::new(640, 480);
        controller.set_dimensions(321, 123);
        let once = controller.state();
        controller.set_dimensions(321, 123);
        assert_eq!(controller.state(), once);
        assert_eq!(once.size(), (321, 123));
    }

    #[test]
    fn toggle_does_not_touch_dimensions() {
        let mut controller = DimensionController::new(640, 480);
        controller.set_dimensions(100, 100);
        assert!(!controller.toggle_aspect_ratio_lock());
        assert_eq!(controller.state().size(), (100, 100));
        assert!(controller.toggle_aspect_ratio_lock());
        assert_eq!(controller.state().size(), (100, 100));
    }

    #[test]
    fn relock_uses_natural_ratio() {
        let mut controller = DimensionController::new(1200, 800);

        controller.set_width(600.0);
        assert_eq!(controller.state().size(), (600, 400));

        controller.toggle_aspect_ratio_lock();
        controller.set_height(500.0);
        assert_eq!(controller.state().size(), (600, 500));

        controller.toggle_aspect_ratio_lock();
        controller.set_width(700.0);
        assert_eq!(controller.state().size(), (700, 467));
    }

    #[test]
    fn parses_like_a_number_field() {
        assert_eq!(parse_dimension_input("640"), 640.0);
        assert_eq!(parse_dimension_input(" 12px "), 12.0);
        assert_eq!(parse_dimension_input("-5"), -5.0);
        assert_eq!(parse_dimension_input(""), 0.0);
        assert_eq!(parse_dimension_input("abc"), 0.0);
        assert_eq!(parse_dimension_input("12.7"), 12.0);
    }
}
