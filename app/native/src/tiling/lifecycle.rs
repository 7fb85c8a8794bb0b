//! Window lifecycle handling.
//!
//! The surrounding window manager reports window events either by calling the
//! [`Layout`] methods directly or by pushing [`WindowEvent`]s through an
//! [`EventSender`]. Queued events are applied in arrival order when the owner
//! of the layout calls [`LifecycleAdapter::drain`].

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use super::engine::{LAYOUT_NAME, TileLayout};
use super::platform::Platform;
use super::window::{Window, WindowId};

// ============================================================================
// Layout Contract
// ============================================================================

/// Capabilities a layout offers to the window manager.
pub trait Layout {
    /// Human-readable layout name.
    fn layout_name(&self) -> &'static str;

    /// Short summary of the layout for `visible_count` counted windows.
    fn layout_symbol(&self, visible_count: usize) -> String;

    /// Whether saved window positions should be restored when windows are
    /// shared between workspaces.
    fn should_restore_shared_windows_position(&self) -> bool;

    /// Reconciles the layout with the current window set and reflows.
    fn reposition(&mut self, windows: &[Window]);

    /// A window's titlebar was shown or hidden.
    fn window_titlebar_toggled(&mut self, window: WindowId);

    /// A window's border was shown or hidden.
    fn window_border_toggled(&mut self, window: WindowId);

    /// A window was minimized.
    fn window_minimized(&mut self, window: WindowId);

    /// A window was restored from the minimized state.
    fn window_restored(&mut self, window: Window);

    /// A window was created. `reflow` is `false` during bulk startup.
    fn window_created(&mut self, window: Window, reflow: bool);

    /// A window was destroyed.
    fn window_destroyed(&mut self, window: WindowId, reflow: bool);
}

impl<P: Platform> Layout for TileLayout<P> {
    fn layout_name(&self) -> &'static str { LAYOUT_NAME }

    fn layout_symbol(&self, visible_count: usize) -> String { self.symbol(visible_count) }

    fn should_restore_shared_windows_position(&self) -> bool { false }

    fn reposition(&mut self, windows: &[Window]) { self.reconcile(windows); }

    fn window_titlebar_toggled(&mut self, window: WindowId) {
        tracing::trace!(window, "titlebar toggled");
    }

    fn window_border_toggled(&mut self, window: WindowId) {
        tracing::trace!(window, "border toggled");
    }

    fn window_minimized(&mut self, window: WindowId) {
        self.remove_window(window);
        self.reflow();
    }

    fn window_restored(&mut self, window: Window) {
        self.insert_window(window);
        self.reflow();
    }

    fn window_created(&mut self, window: Window, reflow: bool) {
        self.insert_window(window);
        if reflow {
            self.reflow();
        }
    }

    fn window_destroyed(&mut self, window: WindowId, reflow: bool) {
        self.remove_window(window);
        if reflow {
            self.reflow();
        }
    }
}

// ============================================================================
// Events
// ============================================================================

const fn default_reflow() -> bool { true }

/// A window lifecycle notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum WindowEvent {
    /// A window was created.
    Created {
        window: Window,
        #[serde(default = "default_reflow")]
        reflow: bool,
    },
    /// A window was destroyed.
    Destroyed {
        window: WindowId,
        #[serde(default = "default_reflow")]
        reflow: bool,
    },
    /// A window was minimized.
    Minimized { window: WindowId },
    /// A window was restored.
    Restored { window: Window },
    /// The window manager reports the full current window set.
    Reconciled { windows: Vec<Window> },
    /// A window's titlebar was toggled.
    TitlebarToggled { window: WindowId },
    /// A window's border was toggled.
    BorderToggled { window: WindowId },
}

/// Applies a single event to a layout.
pub fn dispatch<L: Layout + ?Sized>(layout: &mut L, event: WindowEvent) {
    tracing::trace!(?event, "dispatching window event");
    match event {
        WindowEvent::Created { window, reflow } => layout.window_created(window, reflow),
        WindowEvent::Destroyed { window, reflow } => layout.window_destroyed(window, reflow),
        WindowEvent::Minimized { window } => layout.window_minimized(window),
        WindowEvent::Restored { window } => layout.window_restored(window),
        WindowEvent::Reconciled { windows } => layout.reposition(&windows),
        WindowEvent::TitlebarToggled { window } => layout.window_titlebar_toggled(window),
        WindowEvent::BorderToggled { window } => layout.window_border_toggled(window),
    }
}

// ============================================================================
// Channel
// ============================================================================

/// Handle for queueing window events. Cheap to clone.
#[derive(Debug, Clone)]
pub struct EventSender {
    tx: mpsc::UnboundedSender<WindowEvent>,
}

impl EventSender {
    /// Queues an event. Returns `false` if the adapter was dropped.
    pub fn send(&self, event: WindowEvent) -> bool { self.tx.send(event).is_ok() }

    /// Queues a window creation.
    pub fn window_created(&self, window: Window, reflow: bool) -> bool {
        self.send(WindowEvent::Created { window, reflow })
    }

    /// Queues a window destruction.
    pub fn window_destroyed(&self, window: WindowId, reflow: bool) -> bool {
        self.send(WindowEvent::Destroyed { window, reflow })
    }

    /// Queues a window minimization.
    pub fn window_minimized(&self, window: WindowId) -> bool { self.send(WindowEvent::Minimized { window }) }

    /// Queues a window restoration.
    pub fn window_restored(&self, window: Window) -> bool { self.send(WindowEvent::Restored { window }) }

    /// Queues a reconciliation with the given window set.
    pub fn reconciled(&self, windows: Vec<Window>) -> bool { self.send(WindowEvent::Reconciled { windows }) }
}

/// Receiving end of the window event channel.
#[derive(Debug)]
pub struct LifecycleAdapter {
    rx: mpsc::UnboundedReceiver<WindowEvent>,
}

impl LifecycleAdapter {
    /// Creates an adapter and the sender feeding it.
    #[must_use]
    pub fn channel() -> (Self, EventSender) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { rx }, EventSender { tx })
    }

    /// Applies every queued event to `layout`, oldest first.
    ///
    /// Returns the number of events applied. Never blocks waiting for new
    /// events.
    pub fn drain<L: Layout + ?Sized>(&mut self, layout: &mut L) -> usize {
        let mut applied = 0;
        while let Ok(event) = self.rx.try_recv() {
            dispatch(layout, event);
            applied += 1;
        }
        if applied > 0 {
            tracing::debug!(applied, "drained window events");
        }
        applied
    }

    /// Number of events waiting to be applied.
    #[must_use]
    pub fn pending(&self) -> usize { self.rx.len() }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::tiling::simulated::SimulatedPlatform;
    use crate::tiling::state::Rect;

    fn layout() -> TileLayout<SimulatedPlatform> {
        TileLayout::new(SimulatedPlatform::new(Rect::new(0, 0, 1000, 1000)))
    }

    fn order(layout: &TileLayout<SimulatedPlatform>) -> Vec<WindowId> { layout.windows().ids().collect() }

    // ========================================================================
    // Layout Contract
    // ========================================================================

    #[test]
    fn test_layout_identity() {
        let layout = layout();
        assert_eq!(layout.layout_name(), "Tile");
        assert!(!layout.should_restore_shared_windows_position());
        assert_eq!(layout.layout_symbol(0), "[]=");
    }

    #[test]
    fn test_window_created_respects_reflow_flag() {
        let mut layout = layout();
        layout.window_created(Window::new(1), false);
        layout.window_created(Window::new(2), false);
        assert!(layout.platform().batches().is_empty());

        layout.window_created(Window::new(3), true);
        assert_eq!(order(&layout), vec![3, 2, 1]);
        assert_eq!(layout.platform().batches().len(), 1);
    }

    #[test]
    fn test_window_destroyed_respects_reflow_flag() {
        let mut layout = layout();
        layout.window_created(Window::new(1), false);
        layout.window_created(Window::new(2), false);

        layout.window_destroyed(1, false);
        assert!(layout.platform().batches().is_empty());
        layout.window_destroyed(2, true);
        assert!(layout.windows().is_empty());
        assert_eq!(layout.platform().batches().len(), 1);
    }

    #[test]
    fn test_minimize_and_restore_always_reflow() {
        let mut layout = layout();
        layout.window_created(Window::new(1), false);
        layout.window_created(Window::new(2), false);

        layout.window_minimized(2);
        assert_eq!(order(&layout), vec![1]);
        layout.window_restored(Window::new(2));
        assert_eq!(order(&layout), vec![2, 1]);
        assert_eq!(layout.platform().batches().len(), 2);
    }

    #[test]
    fn test_minimize_unknown_window_still_reflows() {
        let mut layout = layout();
        layout.window_minimized(99);
        assert_eq!(layout.platform().batches().len(), 1);
    }

    #[test]
    fn test_cosmetic_toggles_do_nothing() {
        let mut layout = layout();
        layout.window_created(Window::new(1), false);
        layout.window_titlebar_toggled(1);
        layout.window_border_toggled(1);
        assert_eq!(order(&layout), vec![1]);
        assert!(layout.platform().batches().is_empty());
    }

    #[test]
    fn test_reposition_reconciles() {
        let mut layout = layout();
        layout.reposition(&[Window::new(5), Window::new(6)]);
        assert_eq!(order(&layout), vec![5, 6]);
        assert_eq!(layout.platform().shown(), &[5, 6]);
        assert_eq!(layout.platform().settle_waits(), &[Duration::from_millis(200)]);
    }

    // ========================================================================
    // Channel
    // ========================================================================

    #[test]
    fn test_drain_applies_events_in_order() {
        let (mut adapter, sender) = LifecycleAdapter::channel();
        let mut layout = layout();

        assert!(sender.window_created(Window::new(1), false));
        assert!(sender.window_created(Window::new(2), false));
        assert!(sender.window_minimized(1));
        assert_eq!(adapter.pending(), 3);

        assert_eq!(adapter.drain(&mut layout), 3);
        assert_eq!(order(&layout), vec![2]);
        assert_eq!(adapter.drain(&mut layout), 0);
    }

    #[test]
    fn test_sender_clones_share_channel() {
        let (mut adapter, sender) = LifecycleAdapter::channel();
        let other = sender.clone();
        let mut layout = layout();

        sender.window_created(Window::new(1), false);
        other.window_created(Window::new(2), true);
        adapter.drain(&mut layout);
        assert_eq!(order(&layout), vec![2, 1]);
    }

    #[test]
    fn test_send_after_adapter_dropped_fails() {
        let (adapter, sender) = LifecycleAdapter::channel();
        drop(adapter);
        assert!(!sender.window_minimized(1));
    }

    #[test]
    fn test_dispatch_through_trait_object() {
        let mut layout = layout();
        let dynamic: &mut dyn Layout = &mut layout;
        dispatch(dynamic, WindowEvent::Created { window: Window::new(7), reflow: true });
        assert_eq!(order(&layout), vec![7]);
    }

    // ========================================================================
    // Event Serialization
    // ========================================================================

    #[test]
    fn test_event_deserialize_defaults_reflow() {
        let event: WindowEvent = serde_json::from_str(r#"{"event":"created","window":{"id":4}}"#).unwrap();
        assert_eq!(event, WindowEvent::Created { window: Window::new(4), reflow: true });
    }

    #[test]
    fn test_event_deserialize_camel_case_tags() {
        let event: WindowEvent = serde_json::from_str(r#"{"event":"titlebarToggled","window":3}"#).unwrap();
        assert_eq!(event, WindowEvent::TitlebarToggled { window: 3 });

        let event: WindowEvent =
            serde_json::from_str(r#"{"event":"reconciled","windows":[{"id":1},{"id":2,"counted":false}]}"#)
                .unwrap();
        assert_eq!(event, WindowEvent::Reconciled {
            windows: vec![Window::new(1), Window::uncounted(2)],
        });
    }
}
