//! The tile layout engine.
//!
//! Owns the layout parameters and the window ordering. Every mutation ends in a
//! reflow: the frames of all windows are recomputed from the current working
//! area and submitted to the platform as one batch.

use std::time::Duration;

use super::layout::{LayoutResult, calculate_layout};
use super::order::WindowOrder;
use super::platform::{MoveFlags, Platform};
use super::state::{LayoutParams, Rect, clamp_fraction};
use super::window::{Window, WindowId};
use crate::config::{AxisDirection, LayoutAxis, TileConfig};

/// Human-readable identifier of the tile layout.
pub const LAYOUT_NAME: &str = "Tile";

/// Default step for [`TileLayout::adjust_master_fraction`].
pub const DEFAULT_FRACTION_STEP: f64 = 0.05;

/// Symbol rendered for the master area when it holds at most one window.
const SINGLE_MASTER_SYMBOL: &str = "[]";

/// Selects one of the three axes of a tile layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisKind {
    /// The axis splitting master from stack.
    Primary,
    /// The axis subdividing the master area.
    MasterArea,
    /// The axis subdividing the stack area.
    StackArea,
}

type LayoutListener = Box<dyn FnMut(&LayoutParams)>;

/// Master/stack tile layout bound to a platform.
pub struct TileLayout<P: Platform> {
    params: LayoutParams,
    windows: WindowOrder,
    platform: P,
    settle_delay: Duration,
    listeners: Vec<LayoutListener>,
}

impl<P: Platform> TileLayout<P> {
    /// Creates a layout with default parameters and no windows.
    pub fn new(platform: P) -> Self { Self::from_config(platform, &TileConfig::default()) }

    /// Creates a layout from configuration. Out-of-range values are clamped.
    pub fn from_config(platform: P, config: &TileConfig) -> Self {
        Self::with_params(platform, LayoutParams::from(config)).with_settle_delay(config.restore_delay())
    }

    /// Creates a layout with explicit parameters. Out-of-range values are clamped.
    pub fn with_params(platform: P, params: LayoutParams) -> Self {
        Self {
            params: params.normalized(),
            windows: WindowOrder::new(),
            platform,
            settle_delay: Duration::from_millis(crate::config::types::DEFAULT_RESTORE_DELAY_MS),
            listeners: Vec::new(),
        }
    }

    /// Sets the delay waited for restored windows during reconciliation.
    #[must_use]
    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Current layout parameters.
    pub const fn params(&self) -> &LayoutParams { &self.params }

    /// Current window ordering.
    pub const fn windows(&self) -> &WindowOrder { &self.windows }

    /// The platform this layout drives.
    pub const fn platform(&self) -> &P { &self.platform }

    /// Mutable access to the platform.
    pub const fn platform_mut(&mut self) -> &mut P { &mut self.platform }

    /// Delay waited for restored windows during reconciliation.
    pub const fn settle_delay(&self) -> Duration { self.settle_delay }

    /// Registers a callback fired whenever an axis setting actually changes.
    pub fn on_layout_changed(&mut self, listener: impl FnMut(&LayoutParams) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    // ========================================================================
    // Axis Settings
    // ========================================================================

    /// Sets the axis splitting master from stack.
    ///
    /// Returns `false` (and does nothing) if the axis is unchanged.
    pub fn set_primary_axis(&mut self, axis: LayoutAxis) -> bool {
        self.set_axis(AxisKind::Primary, axis)
    }

    /// Sets the axis subdividing the master area.
    pub fn set_master_area_axis(&mut self, axis: LayoutAxis) -> bool {
        self.set_axis(AxisKind::MasterArea, axis)
    }

    /// Sets the axis subdividing the stack area.
    pub fn set_stack_area_axis(&mut self, axis: LayoutAxis) -> bool {
        self.set_axis(AxisKind::StackArea, axis)
    }

    /// Advances the selected axis to the next value, wrapping around.
    pub fn cycle_axis(&mut self, which: AxisKind) -> bool {
        let next = self.axis(which).next();
        self.set_axis(which, next)
    }

    /// Returns the selected axis.
    pub const fn axis(&self, which: AxisKind) -> LayoutAxis {
        match which {
            AxisKind::Primary => self.params.primary_axis,
            AxisKind::MasterArea => self.params.master_area_axis,
            AxisKind::StackArea => self.params.stack_area_axis,
        }
    }

    /// Sets the selected axis, reflowing and notifying listeners on change.
    pub fn set_axis(&mut self, which: AxisKind, axis: LayoutAxis) -> bool {
        let slot = match which {
            AxisKind::Primary => &mut self.params.primary_axis,
            AxisKind::MasterArea => &mut self.params.master_area_axis,
            AxisKind::StackArea => &mut self.params.stack_area_axis,
        };
        if *slot == axis {
            return false;
        }

        let previous = std::mem::replace(slot, axis);
        tracing::info!(?which, from = %previous, to = %axis, "layout axis changed");

        self.reflow();
        self.notify_layout_changed();
        true
    }

    fn notify_layout_changed(&mut self) {
        let params = self.params;
        for listener in &mut self.listeners {
            listener(&params);
        }
    }

    // ========================================================================
    // Master Area
    // ========================================================================

    /// Adds `delta` to the master window count, never going below zero.
    ///
    /// Always reflows, even when clamping leaves the count unchanged.
    pub fn adjust_master_count(&mut self, delta: isize) {
        self.params.master_count = self.params.master_count.saturating_add_signed(delta);
        tracing::debug!(delta, master_count = self.params.master_count, "master count adjusted");
        self.reflow();
    }

    /// Adds `delta` to the master fraction, clamped into `[0.0, 1.0]`.
    ///
    /// Always reflows, even when clamping leaves the fraction unchanged.
    pub fn adjust_master_fraction(&mut self, delta: f64) {
        let adjusted = self.params.master_fraction + delta;
        if adjusted.is_nan() {
            tracing::warn!(delta, "ignoring non-numeric master fraction delta");
        } else {
            self.params.master_fraction = clamp_fraction(adjusted);
        }
        tracing::debug!(delta, master_fraction = self.params.master_fraction, "master fraction adjusted");
        self.reflow();
    }

    // ========================================================================
    // Window Ordering
    // ========================================================================

    /// Swaps a window with the next one. Reflows only if the order changed.
    pub fn shift_next(&mut self, window: WindowId) -> bool {
        let moved = self.windows.move_to_next(window);
        self.reflow_if(moved, window, "shifted to next position")
    }

    /// Swaps a window with the previous one. Reflows only if the order changed.
    pub fn shift_previous(&mut self, window: WindowId) -> bool {
        let moved = self.windows.move_to_previous(window);
        self.reflow_if(moved, window, "shifted to previous position")
    }

    /// Moves a window to the head of the ordering. Reflows only if the order changed.
    pub fn shift_to_head(&mut self, window: WindowId) -> bool {
        let moved = self.windows.promote_to_head(window);
        self.reflow_if(moved, window, "shifted to master position")
    }

    fn reflow_if(&mut self, moved: bool, window: WindowId, what: &str) -> bool {
        if moved {
            tracing::trace!(window, "{what}");
            self.reflow();
        }
        moved
    }

    /// Inserts a window at the head without reflowing.
    pub(crate) fn insert_window(&mut self, window: Window) -> bool {
        let inserted = self.windows.insert_head(window);
        tracing::trace!(window = window.id, inserted, "window inserted at head");
        inserted
    }

    /// Removes a window without reflowing.
    pub(crate) fn remove_window(&mut self, window: WindowId) -> bool {
        let removed = self.windows.remove(window);
        tracing::trace!(window, removed, "window removed");
        removed
    }

    /// Replaces the ordering with `windows`.
    ///
    /// When the membership changes, every window is first shown without
    /// activation and the settle delay is waited before the ordering is
    /// replaced. With unchanged membership only the `counted` flags are taken
    /// over. Always reflows afterwards.
    pub fn reconcile(&mut self, windows: &[Window]) {
        if self.windows.same_members(windows) {
            let refreshed = self.windows.refresh_flags(windows);
            tracing::debug!(count = windows.len(), refreshed, "reconcile: membership unchanged");
        } else {
            tracing::debug!(
                previous = self.windows.len(),
                count = windows.len(),
                delay_ms = self.settle_delay.as_millis(),
                "reconcile: membership changed, restoring windows"
            );
            for window in windows {
                self.platform.show_without_activating(window.id);
            }
            self.platform.wait_for_settle(self.settle_delay);
            self.windows.replace_all(windows.iter().copied());
        }

        self.reflow();
    }

    // ========================================================================
    // Layout
    // ========================================================================

    /// Computes the frames of all windows for `working_area` without applying them.
    pub fn compute_frames(&self, working_area: &Rect) -> LayoutResult {
        calculate_layout(self.windows.as_slice(), working_area, &self.params)
    }

    /// Recomputes every window frame and applies them as one batch.
    ///
    /// Unresponsive windows are left out of the batch; they are picked up
    /// again by the next reflow. Returns the number of windows moved.
    pub fn reflow(&mut self) -> usize {
        let working_area = self.platform.working_area();
        let frames = self.compute_frames(&working_area);

        let mut batch = self.platform.begin_batch(frames.len());
        let mut moved = 0;
        for (window, frame) in frames {
            if !self.platform.is_window_responsive(window) {
                tracing::warn!(window, "skipping unresponsive window");
                continue;
            }
            batch = self.platform.defer_move(batch, window, frame, MoveFlags::TILE);
            moved += 1;
        }
        self.platform.end_batch(batch);

        tracing::debug!(
            windows = self.windows.len(),
            moved,
            skipped = self.windows.len() - moved,
            %working_area,
            "reflow complete"
        );
        moved
    }

    // ========================================================================
    // Symbol
    // ========================================================================

    /// Renders a short summary of the layout, e.g. `[]=` or `[3]`.
    ///
    /// `visible_count` is the number of counted windows on the workspace.
    ///
    /// # Panics
    ///
    /// Panics if the primary axis has no direction; `Monocle` is handled
    /// before that point, so this indicates a broken axis enumeration.
    pub fn symbol(&self, visible_count: usize) -> String {
        let primary = self.params.primary_axis;
        if primary == LayoutAxis::Monocle {
            return format!("[{visible_count}]");
        }

        let master_count = self
            .windows
            .take(self.params.master_count)
            .iter()
            .filter(|w| w.counted)
            .count();
        let stack_count = visible_count.saturating_sub(master_count);

        let stack = area_symbol(stack_count, self.params.stack_area_axis);

        if self.params.master_count <= 1 {
            return match primary.direction() {
                Some(AxisDirection::Forward) => format!("{SINGLE_MASTER_SYMBOL}{stack}"),
                Some(AxisDirection::Reverse) => format!("{stack}{SINGLE_MASTER_SYMBOL}"),
                None => unreachable!("primary axis {primary} has no direction"),
            };
        }

        // Several masters close a single bracket on the stack side: `|]=`, `=[|`
        let master = area_symbol(master_count, self.params.master_area_axis);
        match primary.direction() {
            Some(AxisDirection::Forward) => format!("{master}]{stack}"),
            Some(AxisDirection::Reverse) => format!("{stack}[{master}"),
            None => unreachable!("primary axis {primary} has no direction"),
        }
    }
}

impl<P: Platform + std::fmt::Debug> std::fmt::Debug for TileLayout<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TileLayout")
            .field("params", &self.params)
            .field("windows", &self.windows)
            .field("platform", &self.platform)
            .field("settle_delay", &self.settle_delay)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Symbol of one area: `|` for horizontal axes, `=` for vertical ones and the
/// window count for `Monocle`.
fn area_symbol(count: usize, axis: LayoutAxis) -> String {
    if axis.is_horizontal() {
        "|".to_string()
    } else if axis.is_vertical() {
        "=".to_string()
    } else {
        count.to_string()
    }
}

// ============================================================================
// Tests
// ============================================================================
