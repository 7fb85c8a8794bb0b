//! In-memory platform used by the CLI simulator and the tests.
//!
//! Records every committed batch, every window shown and every settle wait
//! instead of touching real windows. Settle waits are recorded, not slept.
//! [`SimulatedPlatform::calls`] keeps all three in the order they happened.

use std::collections::{HashMap, HashSet};
use std::time::Duration;

use super::platform::{BatchHandle, Environment, MoveFlags, PositioningService};
use super::state::Rect;
use super::window::WindowId;

/// A single deferred move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordedMove {
    /// The window being moved.
    pub window: WindowId,
    /// The target frame.
    pub frame: Rect,
    /// Flags requested for the move.
    pub flags: MoveFlags,
}

/// One observable call made on the platform, in call order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformCall {
    /// A window was shown without activation.
    Shown(WindowId),
    /// The layout waited for windows to settle.
    Settled(Duration),
    /// A batch holding this many moves was committed.
    Committed(usize),
}

/// A platform that keeps window geometry in memory.
#[derive(Debug, Clone, Default)]
pub struct SimulatedPlatform {
    working_area: Rect,
    unresponsive: HashSet<WindowId>,
    next_handle: u64,
    pending: HashMap<BatchHandle, Vec<RecordedMove>>,
    batches: Vec<Vec<RecordedMove>>,
    frames: HashMap<WindowId, Rect>,
    shown: Vec<WindowId>,
    settle_waits: Vec<Duration>,
    calls: Vec<PlatformCall>,
}

impl SimulatedPlatform {
    /// Creates a platform with the given working area.
    #[must_use]
    pub fn new(working_area: Rect) -> Self {
        Self {
            working_area,
            ..Self::default()
        }
    }

    /// Changes the working area reported to the layout.
    pub fn set_working_area(&mut self, working_area: Rect) { self.working_area = working_area; }

    /// Marks a window as hung (or responsive again).
    pub fn set_responsive(&mut self, window: WindowId, responsive: bool) {
        if responsive {
            self.unresponsive.remove(&window);
        } else {
            self.unresponsive.insert(window);
        }
    }

    /// Every committed batch, oldest first.
    #[must_use]
    pub fn batches(&self) -> &[Vec<RecordedMove>] { &self.batches }

    /// The most recently committed batch.
    #[must_use]
    pub fn last_batch(&self) -> Option<&[RecordedMove]> { self.batches.last().map(Vec::as_slice) }

    /// Current frame of a window, as of the last batch that moved it.
    #[must_use]
    pub fn frame_of(&self, window: WindowId) -> Option<Rect> { self.frames.get(&window).copied() }

    /// Windows shown through [`Environment::show_without_activating`], in call order.
    #[must_use]
    pub fn shown(&self) -> &[WindowId] { &self.shown }

    /// Settle delays requested by the layout.
    #[must_use]
    pub fn settle_waits(&self) -> &[Duration] { &self.settle_waits }

    /// Shows, settle waits and batch commits interleaved as they happened.
    #[must_use]
    pub fn calls(&self) -> &[PlatformCall] { &self.calls }

    /// Forgets recorded batches, shown windows and waits. Frames are kept.
    pub fn clear_history(&mut self) {
        self.batches.clear();
        self.shown.clear();
        self.settle_waits.clear();
        self.calls.clear();
    }
}

impl PositioningService for SimulatedPlatform {
    fn begin_batch(&mut self, expected_count: usize) -> BatchHandle {
        self.next_handle += 1;
        let handle = BatchHandle(self.next_handle);
        self.pending.insert(handle, Vec::with_capacity(expected_count));
        handle
    }

    fn defer_move(
        &mut self,
        batch: BatchHandle,
        window: WindowId,
        frame: Rect,
        flags: MoveFlags,
    ) -> BatchHandle {
        if let Some(moves) = self.pending.get_mut(&batch) {
            moves.push(RecordedMove { window, frame, flags });
        } else {
            tracing::warn!(?batch, window, "deferred move on unknown batch ignored");
        }
        batch
    }

    fn end_batch(&mut self, batch: BatchHandle) {
        let Some(moves) = self.pending.remove(&batch) else {
            tracing::warn!(?batch, "ending unknown batch");
            return;
        };

        for mv in &moves {
            self.frames.insert(mv.window, mv.frame);
        }
        self.calls.push(PlatformCall::Committed(moves.len()));
        self.batches.push(moves);
    }
}

impl Environment for SimulatedPlatform {
    fn working_area(&self) -> Rect { self.working_area }

    fn is_window_responsive(&self, window: WindowId) -> bool { !self.unresponsive.contains(&window) }

    fn show_without_activating(&mut self, window: WindowId) {
        self.shown.push(window);
        self.calls.push(PlatformCall::Shown(window));
    }

    fn wait_for_settle(&mut self, delay: Duration) {
        self.settle_waits.push(delay);
        self.calls.push(PlatformCall::Settled(delay));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_is_applied_on_end() {
        let mut platform = SimulatedPlatform::new(Rect::new(0, 0, 100, 100));
        let batch = platform.begin_batch(2);
        let batch = platform.defer_move(batch, 1, Rect::new(0, 0, 50, 100), MoveFlags::TILE);
        let batch = platform.defer_move(batch, 2, Rect::new(50, 0, 50, 100), MoveFlags::TILE);

        assert_eq!(platform.frame_of(1), None, "Moves are deferred until the batch ends");
        platform.end_batch(batch);

        assert_eq!(platform.frame_of(1), Some(Rect::new(0, 0, 50, 100)));
        assert_eq!(platform.frame_of(2), Some(Rect::new(50, 0, 50, 100)));
        assert_eq!(platform.batches().len(), 1);
        assert_eq!(platform.last_batch().map(<[_]>::len), Some(2));
    }

    #[test]
    fn test_unknown_batch_is_ignored() {
        let mut platform = SimulatedPlatform::default();
        platform.end_batch(BatchHandle(42));
        assert!(platform.batches().is_empty());
    }

    #[test]
    fn test_responsiveness_toggle() {
        let mut platform = SimulatedPlatform::default();
        assert!(platform.is_window_responsive(3));
        platform.set_responsive(3, false);
        assert!(!platform.is_window_responsive(3));
        platform.set_responsive(3, true);
        assert!(platform.is_window_responsive(3));
    }

    #[test]
    fn test_settle_waits_are_recorded() {
        let mut platform = SimulatedPlatform::default();
        platform.wait_for_settle(Duration::from_millis(200));
        assert_eq!(platform.settle_waits(), &[Duration::from_millis(200)]);
    }

    #[test]
    fn test_calls_keep_interleaved_order() {
        let mut platform = SimulatedPlatform::new(Rect::new(0, 0, 100, 100));
        platform.show_without_activating(7);
        platform.wait_for_settle(Duration::from_millis(10));
        let batch = platform.begin_batch(1);
        let batch = platform.defer_move(batch, 7, Rect::new(0, 0, 100, 100), MoveFlags::TILE);
        platform.end_batch(batch);

        assert_eq!(
            platform.calls(),
            &[
                PlatformCall::Shown(7),
                PlatformCall::Settled(Duration::from_millis(10)),
                PlatformCall::Committed(1),
            ]
        );

        platform.clear_history();
        assert!(platform.calls().is_empty());
    }
}
