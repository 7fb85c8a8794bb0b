//! Layout algorithms for the tile layout.
//!
//! The tile layout takes an ordered list of windows, the working area and the
//! layout parameters, and returns a frame for each window.
//!
//! # Performance
//!
//! Layout results use `SmallVec` to avoid heap allocations for workspaces with
//! up to 16 windows (the common case).

mod helpers;
mod tile;

pub use helpers::{fraction_of, slices, split_horizontal, split_vertical};
use smallvec::SmallVec;
pub use tile::{Area, area_frame, compute_region, subdivide};

use crate::tiling::state::{LayoutParams, Rect};
use crate::tiling::window::{Window, WindowId};

// ============================================================================
// Layout Result
// ============================================================================

/// Inline capacity for layout results.
pub const LAYOUT_INLINE_CAP: usize = 16;

/// Result of a layout calculation.
///
/// Maps window IDs to their calculated frames, master windows first.
pub type LayoutResult = SmallVec<[(WindowId, Rect); LAYOUT_INLINE_CAP]>;

// ============================================================================
// Main Layout Function
// ============================================================================

/// Calculates window frames for the tile layout.
///
/// # Arguments
///
/// * `windows` - Windows to arrange, in layout order
/// * `working_area` - The usable screen region
/// * `params` - Axes, master fraction and master count
///
/// # Returns
///
/// A (`window_id`, frame) pair per window: the master area first, then the stack.
#[must_use]
pub fn calculate_layout(windows: &[Window], working_area: &Rect, params: &LayoutParams) -> LayoutResult {
    let split = params.master_count.min(windows.len());
    let (masters, stack) = windows.split_at(split);

    let master_frames = compute_region(
        working_area,
        params.primary_axis,
        params.master_area_axis,
        params.master_fraction,
        Area::Master,
        masters.len(),
        stack.len(),
    );
    let stack_frames = compute_region(
        working_area,
        params.primary_axis,
        params.stack_area_axis,
        params.master_fraction,
        Area::Stack,
        stack.len(),
        masters.len(),
    );

    masters
        .iter()
        .zip(master_frames)
        .chain(stack.iter().zip(stack_frames))
        .map(|(window, frame)| (window.id, frame))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
