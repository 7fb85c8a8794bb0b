//! Contracts the tile layout consumes from the windowing platform.
//!
//! The layout never talks to the operating system directly. It reads the
//! working area and window responsiveness from an [`Environment`] and submits
//! geometry through a [`PositioningService`], which applies every deferred move
//! of a batch atomically.

use std::time::Duration;

use bitflags::bitflags;

use super::state::Rect;
use super::window::WindowId;

bitflags! {
    /// Options attached to each deferred window move.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MoveFlags: u32 {
        /// Do not activate the window.
        const NO_ACTIVATE = 1 << 0;
        /// Keep the window's z-order.
        const NO_Z_ORDER = 1 << 1;
        /// Keep the owner window's z-order.
        const NO_OWNER_Z_ORDER = 1 << 2;
        /// Discard the client area contents instead of copying them.
        const NO_COPY_BITS = 1 << 3;
        /// Recalculate the window frame.
        const FRAME_CHANGED = 1 << 4;

        /// Flags used for every tiling move.
        const TILE = Self::NO_ACTIVATE.bits()
            | Self::NO_Z_ORDER.bits()
            | Self::NO_OWNER_Z_ORDER.bits()
            | Self::NO_COPY_BITS.bits()
            | Self::FRAME_CHANGED.bits();
    }
}

/// Opaque handle to an open batch of deferred moves.
///
/// Implementations may hand back a different handle from every
/// [`PositioningService::defer_move`] call; the layout always threads the most
/// recent one through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BatchHandle(pub u64);

/// Native service that moves and resizes windows in atomic batches.
pub trait PositioningService {
    /// Opens a batch sized for `expected_count` moves.
    fn begin_batch(&mut self, expected_count: usize) -> BatchHandle;

    /// Queues a move of `window` to `frame` in the batch.
    fn defer_move(
        &mut self,
        batch: BatchHandle,
        window: WindowId,
        frame: Rect,
        flags: MoveFlags,
    ) -> BatchHandle;

    /// Applies every queued move of the batch at once.
    fn end_batch(&mut self, batch: BatchHandle);
}

/// Queries and side effects provided by the surrounding window manager.
pub trait Environment {
    /// Returns the usable screen region.
    fn working_area(&self) -> Rect;

    /// Returns `false` for windows that stopped responding; they are left out
    /// of the next batch.
    fn is_window_responsive(&self, window: WindowId) -> bool;

    /// Un-minimizes and shows a window without giving it focus.
    fn show_without_activating(&mut self, window: WindowId);

    /// Blocks until shown windows have finished animating.
    fn wait_for_settle(&mut self, delay: Duration) { std::thread::sleep(delay); }
}

/// Everything a tile layout needs from the platform.
pub trait Platform: PositioningService + Environment {}

impl<T: PositioningService + Environment> Platform for T {}
