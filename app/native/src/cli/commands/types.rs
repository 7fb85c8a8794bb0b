//! Shared types for CLI commands.
//!
//! This module contains the layout arguments shared by the `layout` and
//! `symbol` commands.

use clap::Args;

use crate::config::{LayoutAxis, TileConfig};
use crate::tiling::{Layout, Rect, SimulatedPlatform, TileLayout, Window, WindowId};

/// Working area used when none is given on the command line.
pub const DEFAULT_AREA: &str = "0,0,1920,1080";

/// Layout parameters and window set for one computation.
///
/// Every parameter defaults to the value from the configuration file.
#[derive(Args, Debug, Clone)]
pub struct LayoutArgs {
    /// Number of windows to lay out. Windows are numbered from 1 and the
    /// highest number is the most recently created (the head).
    #[arg(long, short = 'n', default_value_t = 3)]
    pub windows: WindowId,

    /// Working area as x,y,width,height.
    #[arg(long, short, default_value = DEFAULT_AREA, value_name = "RECT", allow_hyphen_values = true)]
    pub area: Rect,

    /// Axis splitting the working area into master and stack.
    #[arg(long, value_name = "AXIS")]
    pub axis: Option<LayoutAxis>,

    /// Axis subdividing the master area.
    #[arg(long, value_name = "AXIS")]
    pub master_axis: Option<LayoutAxis>,

    /// Axis subdividing the stack area.
    #[arg(long, value_name = "AXIS")]
    pub stack_axis: Option<LayoutAxis>,

    /// Fraction of the primary axis given to the master area (0.0 - 1.0).
    #[arg(long, short, value_name = "FRACTION", allow_hyphen_values = true)]
    pub factor: Option<f64>,

    /// Number of windows in the master area.
    #[arg(long, short, value_name = "COUNT")]
    pub master_count: Option<usize>,

    /// Windows left out of the layout symbol counts.
    #[arg(long, value_name = "ID", value_delimiter = ',')]
    pub uncounted: Vec<WindowId>,
}

impl LayoutArgs {
    /// Applies the command-line overrides on top of `base`.
    #[must_use]
    pub fn tile_config(&self, base: &TileConfig) -> TileConfig {
        TileConfig {
            layout_axis: self.axis.unwrap_or(base.layout_axis),
            master_area_axis: self.master_axis.unwrap_or(base.master_area_axis),
            stack_area_axis: self.stack_axis.unwrap_or(base.stack_area_axis),
            master_area_factor: self.factor.unwrap_or(base.master_area_factor),
            master_area_windows_count: self.master_count.unwrap_or(base.master_area_windows_count),
            ..base.clone()
        }
    }

    /// Builds a layout on a simulated platform holding the requested windows.
    ///
    /// Windows are created without reflowing; nothing is applied until the
    /// caller reflows.
    #[must_use]
    pub fn build_layout(&self, base: &TileConfig) -> TileLayout<SimulatedPlatform> {
        let mut layout =
            TileLayout::from_config(SimulatedPlatform::new(self.area), &self.tile_config(base));

        for id in 1..=self.windows {
            let window = if self.uncounted.contains(&id) { Window::uncounted(id) } else { Window::new(id) };
            layout.window_created(window, false);
        }

        layout
    }

    /// Number of windows that count toward the layout symbol.
    #[must_use]
    pub fn counted_windows(&self) -> usize {
        (1..=self.windows).filter(|id| !self.uncounted.contains(id)).count()
    }
}
