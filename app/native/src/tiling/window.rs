//! Window identity as seen by the tile layout.

use serde::{Deserialize, Serialize};

/// Opaque identifier of an on-screen window, assigned by the platform.
pub type WindowId = u32;

/// A window managed by the tile layout.
///
/// `counted` controls whether the window contributes to the tallies shown in
/// the layout symbol. Uncounted windows are still tiled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Window {
    /// Platform window identifier.
    pub id: WindowId,
    /// Whether the window is included in layout symbol counts.
    #[serde(default = "default_counted")]
    pub counted: bool,
}

const fn default_counted() -> bool { true }

impl Window {
    /// Creates a window that participates in symbol counts.
    #[must_use]
    pub const fn new(id: WindowId) -> Self { Self { id, counted: true } }

    /// Creates a window that is tiled but left out of symbol counts.
    #[must_use]
    pub const fn uncounted(id: WindowId) -> Self { Self { id, counted: false } }
}

impl From<WindowId> for Window {
    fn from(id: WindowId) -> Self { Self::new(id) }
}
