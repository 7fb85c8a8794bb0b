//! Master/stack tile layout.
//!
//! The working area is split along a primary axis into a master area, holding
//! the first `master_count` windows, and a stack area holding the rest. Each
//! area is then subdivided along its own axis.
//!
//! # Components
//!
//! - [`layout`] - pure frame computation
//! - [`order`] - the ordered window set
//! - [`engine`] - [`TileLayout`], which owns the parameters and the ordering
//!   and applies every reflow as one batch
//! - [`lifecycle`] - the [`Layout`] contract and the window event channel
//! - [`platform`] - what the layout needs from the windowing system
//! - [`simulated`] - an in-memory platform
//!
//! # Example
//!
//! ```
//! use tessera_lib::tiling::{Layout, Rect, SimulatedPlatform, TileLayout, Window};
//!
//! let mut layout = TileLayout::new(SimulatedPlatform::new(Rect::new(0, 0, 1000, 1000)));
//! layout.window_created(Window::new(1), true);
//! layout.window_created(Window::new(2), true);
//!
//! assert_eq!(layout.platform().frame_of(2), Some(Rect::new(0, 0, 600, 1000)));
//! assert_eq!(layout.platform().frame_of(1), Some(Rect::new(600, 0, 400, 1000)));
//! assert_eq!(layout.layout_symbol(2), "[]=");
//! ```

pub mod engine;
pub mod layout;
pub mod lifecycle;
pub mod order;
pub mod platform;
pub mod simulated;
pub mod state;
pub mod window;

pub use engine::{AxisKind, DEFAULT_FRACTION_STEP, LAYOUT_NAME, TileLayout};
pub use layout::{LayoutResult, calculate_layout};
pub use lifecycle::{EventSender, Layout, LifecycleAdapter, WindowEvent, dispatch};
pub use order::WindowOrder;
pub use platform::{BatchHandle, Environment, MoveFlags, Platform, PositioningService};
pub use simulated::{PlatformCall, RecordedMove, SimulatedPlatform};
pub use state::{LayoutParams, Rect};
pub use window::{Window, WindowId};
