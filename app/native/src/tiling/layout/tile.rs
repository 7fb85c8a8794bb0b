//! Tile layout - master area plus stack area, each subdivided along its own axis.
//!
//! The primary axis splits the working area in two. The master area takes
//! `factor` of the primary dimension (rounded down) and the stack area takes
//! the exact complement, so the two always partition the working area. When one
//! area has no windows the other one takes everything.
//!
//! ```text
//! left-to-right:         right-to-left:         top-to-bottom:
//! ┌──────────┬─────┐     ┌─────┬──────────┐     ┌──────────────┐
//! │          │  2  │     │  2  │          │     │    Master    │
//! │  Master  ├─────┤     ├─────┤  Master  │     ├──────┬───────┤
//! │          │  3  │     │  3  │          │     │  2   │   3   │
//! └──────────┴─────┘     └─────┴──────────┘     └──────┴───────┘
//! ```
//!
//! Inside an area, windows are cut into equal slices along the area axis.
//! Reverse axes start from the far edge. The last window of the sequence
//! absorbs the integer division remainder. A `Monocle` area axis gives every
//! window the whole area.

use super::helpers::{fraction_of, slices, split_horizontal, split_vertical};
use crate::config::{AxisDirection, LayoutAxis};
use crate::tiling::state::Rect;

/// Which side of the master/stack split a set of windows belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Area {
    /// The first `master_count` windows.
    Master,
    /// All remaining windows.
    Stack,
}

/// Returns the frame of one area of the working area.
///
/// `other_count` is the number of windows in the opposite area; when it is
/// zero the requested area covers the whole working area.
#[must_use]
pub fn area_frame(
    working_area: &Rect,
    primary: LayoutAxis,
    factor: f64,
    area: Area,
    other_count: usize,
) -> Rect {
    if other_count == 0 {
        return *working_area;
    }

    let Some(direction) = primary.direction() else {
        // Monocle primary axis: both areas span the working area
        return *working_area;
    };

    let (leading, trailing) = if primary.is_horizontal() {
        let master_width = fraction_of(working_area.width, factor);
        let leading_width = match direction {
            AxisDirection::Forward => master_width,
            AxisDirection::Reverse => working_area.width.max(0) - master_width,
        };
        split_horizontal(working_area, leading_width)
    } else {
        let master_height = fraction_of(working_area.height, factor);
        let leading_height = match direction {
            AxisDirection::Forward => master_height,
            AxisDirection::Reverse => working_area.height.max(0) - master_height,
        };
        split_vertical(working_area, leading_height)
    };

    match (direction, area) {
        (AxisDirection::Forward, Area::Master) | (AxisDirection::Reverse, Area::Stack) => leading,
        (AxisDirection::Forward, Area::Stack) | (AxisDirection::Reverse, Area::Master) => trailing,
    }
}

/// Subdivides `frame` into `count` window frames along `axis`.
///
/// Frames are returned in window order.
#[must_use]
pub fn subdivide(frame: &Rect, axis: LayoutAxis, count: usize) -> Vec<Rect> {
    let Some(direction) = axis.direction() else {
        return vec![*frame; count];
    };

    if axis.is_horizontal() {
        slices(frame.width, count)
            .into_iter()
            .map(|(offset, width)| {
                let x = match direction {
                    AxisDirection::Forward => frame.x.saturating_add(offset),
                    AxisDirection::Reverse => frame.x.saturating_add(frame.width.max(0) - offset - width),
                };
                Rect::new(x, frame.y, width, frame.height)
            })
            .collect()
    } else {
        slices(frame.height, count)
            .into_iter()
            .map(|(offset, height)| {
                let y = match direction {
                    AxisDirection::Forward => frame.y.saturating_add(offset),
                    AxisDirection::Reverse => frame.y.saturating_add(frame.height.max(0) - offset - height),
                };
                Rect::new(frame.x, y, frame.width, height)
            })
            .collect()
    }
}

/// Computes the frames for the windows of one area.
///
/// # Arguments
///
/// * `working_area` - The usable screen region
/// * `primary` - Axis splitting master from stack
/// * `area_axis` - Axis subdividing this area
/// * `factor` - Master fraction of the primary dimension (0.0-1.0)
/// * `area` - Whether these are the master or the stack windows
/// * `count` - Number of windows in this area
/// * `other_count` - Number of windows in the opposite area
///
/// # Returns
///
/// One frame per window, in window order. Empty when `count` is zero.
#[must_use]
pub fn compute_region(
    working_area: &Rect,
    primary: LayoutAxis,
    area_axis: LayoutAxis,
    factor: f64,
    area: Area,
    count: usize,
    other_count: usize,
) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }

    let frame = area_frame(working_area, primary, factor, area, other_count);
    subdivide(&frame, area_axis, count)
}

// ============================================================================
// Tests
// ============================================================================
