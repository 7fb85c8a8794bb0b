//! Helper functions for layout calculations.
//!
//! Provides the integer split and slice operations used by the tile layout.

use crate::tiling::state::Rect;

/// Splits a frame horizontally (left/right), giving `left_width` to the left part.
///
/// `left_width` is clamped to the frame, so the two parts always partition it.
///
/// # Returns
///
/// A tuple of (`left_frame`, `right_frame`)
#[must_use]
pub fn split_horizontal(frame: &Rect, left_width: i32) -> (Rect, Rect) {
    let total = frame.width.max(0);
    let left_width = left_width.clamp(0, total);

    let left = Rect::new(frame.x, frame.y, left_width, frame.height);
    let right = Rect::new(frame.x.saturating_add(left_width), frame.y, total - left_width, frame.height);

    (left, right)
}

/// Splits a frame vertically (top/bottom), giving `top_height` to the top part.
///
/// `top_height` is clamped to the frame, so the two parts always partition it.
///
/// # Returns
///
/// A tuple of (`top_frame`, `bottom_frame`)
#[must_use]
pub fn split_vertical(frame: &Rect, top_height: i32) -> (Rect, Rect) {
    let total = frame.height.max(0);
    let top_height = top_height.clamp(0, total);

    let top = Rect::new(frame.x, frame.y, frame.width, top_height);
    let bottom = Rect::new(frame.x, frame.y.saturating_add(top_height), frame.width, total - top_height);

    (top, bottom)
}

/// Returns `floor(extent * fraction)`, kept within `0..=extent`.
#[allow(clippy::cast_possible_truncation)] // Bounded by `extent`, which is an i32
#[must_use]
pub fn fraction_of(extent: i32, fraction: f64) -> i32 {
    let extent = extent.max(0);
    let share = (f64::from(extent) * fraction.clamp(0.0, 1.0)).floor() as i32;
    share.clamp(0, extent)
}

/// Cuts `extent` into `count` equal slices.
///
/// Every slice gets `extent / count`; the last one also absorbs the division
/// remainder. Returns `(offset, length)` pairs measured from the leading edge.
#[must_use]
pub fn slices(extent: i32, count: usize) -> Vec<(i32, i32)> {
    if count == 0 {
        return Vec::new();
    }

    let extent = extent.max(0);
    let count = i32::try_from(count).unwrap_or(i32::MAX);
    let each = extent / count;

    (0..count)
        .map(|i| {
            let offset = i * each;
            let length = if i == count - 1 { extent - offset } else { each };
            (offset, length)
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
