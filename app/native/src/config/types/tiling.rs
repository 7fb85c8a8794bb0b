//! Tiling layout configuration types.
//!
//! Core configuration types for the tile layout: the orientation axes that
//! drive the master/stack split, the master area factor, and the number of
//! windows living in the master area.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Orientation used to split or subdivide an area.
///
/// The same enumeration drives three independent settings: the primary axis
/// (how the working area divides into master and stack), the master area axis
/// and the stack area axis (how windows inside each region are laid out).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutAxis {
    /// Left to right. As a primary axis the master area is on the left.
    #[default]
    LeftToRight,
    /// Right to left. As a primary axis the master area is on the right.
    RightToLeft,
    /// Top to bottom. As a primary axis the master area is on top.
    TopToBottom,
    /// Bottom to top. As a primary axis the master area is at the bottom.
    BottomToTop,
    /// Every window takes the whole area, one on top of the other.
    Monocle,
}

/// Whether a directional axis runs along or against increasing coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisDirection {
    /// Left to right or top to bottom.
    Forward,
    /// Right to left or bottom to top.
    Reverse,
}

impl LayoutAxis {
    /// All axes in cycling order.
    pub const ALL: [Self; 5] = [
        Self::LeftToRight,
        Self::RightToLeft,
        Self::TopToBottom,
        Self::BottomToTop,
        Self::Monocle,
    ];

    /// Returns the next axis in cycling order, wrapping after `Monocle`.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::LeftToRight => Self::RightToLeft,
            Self::RightToLeft => Self::TopToBottom,
            Self::TopToBottom => Self::BottomToTop,
            Self::BottomToTop => Self::Monocle,
            Self::Monocle => Self::LeftToRight,
        }
    }

    /// Returns `true` for the two axes that run along the x coordinate.
    #[must_use]
    pub const fn is_horizontal(self) -> bool { matches!(self, Self::LeftToRight | Self::RightToLeft) }

    /// Returns `true` for the two axes that run along the y coordinate.
    #[must_use]
    pub const fn is_vertical(self) -> bool { matches!(self, Self::TopToBottom | Self::BottomToTop) }

    /// Returns the direction of a directional axis, or `None` for `Monocle`.
    #[must_use]
    pub const fn direction(self) -> Option<AxisDirection> {
        match self {
            Self::LeftToRight | Self::TopToBottom => Some(AxisDirection::Forward),
            Self::RightToLeft | Self::BottomToTop => Some(AxisDirection::Reverse),
            Self::Monocle => None,
        }
    }

    /// Returns the kebab-case name used in configuration files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LeftToRight => "left-to-right",
            Self::RightToLeft => "right-to-left",
            Self::TopToBottom => "top-to-bottom",
            Self::BottomToTop => "bottom-to-top",
            Self::Monocle => "monocle",
        }
    }
}

impl std::fmt::Display for LayoutAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(self.as_str()) }
}

impl std::str::FromStr for LayoutAxis {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|axis| axis.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                format!(
                    "Invalid axis '{s}'. Expected one of: left-to-right, right-to-left, \
                    top-to-bottom, bottom-to-top, monocle."
                )
            })
    }
}

/// Default master area factor.
pub const DEFAULT_MASTER_AREA_FACTOR: f64 = 0.6;

/// Default delay, in milliseconds, for restored windows to finish animating.
pub const DEFAULT_RESTORE_DELAY_MS: u64 = 200;

/// Tile layout configuration.
///
/// Values outside their valid range are clamped when a layout is built from
/// this configuration, never rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct TileConfig {
    /// How the working area splits into master and stack areas.
    /// Default: "left-to-right"
    pub layout_axis: LayoutAxis,

    /// How windows inside the master area are laid out.
    /// Default: "monocle"
    pub master_area_axis: LayoutAxis,

    /// How windows inside the stack area are laid out.
    /// Default: "top-to-bottom"
    pub stack_area_axis: LayoutAxis,

    /// Fraction of the primary axis given to the master area (0.0-1.0).
    /// Default: 0.6
    pub master_area_factor: f64,

    /// Number of windows, counted from the head, that live in the master area.
    /// Default: 1
    pub master_area_windows_count: usize,

    /// Milliseconds to wait for restored windows to settle before re-tiling
    /// after an external reorder.
    /// Default: 200
    pub restore_delay_ms: u64,
}

impl Default for TileConfig {
    fn default() -> Self {
        Self {
            layout_axis: LayoutAxis::LeftToRight,
            master_area_axis: LayoutAxis::Monocle,
            stack_area_axis: LayoutAxis::TopToBottom,
            master_area_factor: DEFAULT_MASTER_AREA_FACTOR,
            master_area_windows_count: 1,
            restore_delay_ms: DEFAULT_RESTORE_DELAY_MS,
        }
    }
}

impl TileConfig {
    /// Returns the restore delay as a `Duration`.
    #[must_use]
    pub const fn restore_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.restore_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_axis_default_is_left_to_right() {
        assert_eq!(LayoutAxis::default(), LayoutAxis::LeftToRight);
    }

    #[test]
    fn test_layout_axis_next_wraps() {
        let mut axis = LayoutAxis::LeftToRight;
        for expected in LayoutAxis::ALL.iter().skip(1) {
            axis = axis.next();
            assert_eq!(axis, *expected);
        }
        assert_eq!(axis.next(), LayoutAxis::LeftToRight);
    }

    #[test]
    fn test_layout_axis_classification() {
        assert!(LayoutAxis::LeftToRight.is_horizontal());
        assert!(LayoutAxis::RightToLeft.is_horizontal());
        assert!(LayoutAxis::TopToBottom.is_vertical());
        assert!(LayoutAxis::BottomToTop.is_vertical());
        assert!(!LayoutAxis::Monocle.is_horizontal());
        assert!(!LayoutAxis::Monocle.is_vertical());

        assert_eq!(LayoutAxis::TopToBottom.direction(), Some(AxisDirection::Forward));
        assert_eq!(LayoutAxis::RightToLeft.direction(), Some(AxisDirection::Reverse));
        assert_eq!(LayoutAxis::Monocle.direction(), None);
    }

    #[test]
    fn test_layout_axis_parse() {
        assert_eq!("monocle".parse::<LayoutAxis>(), Ok(LayoutAxis::Monocle));
        assert_eq!("Bottom-To-Top".parse::<LayoutAxis>(), Ok(LayoutAxis::BottomToTop));
        assert!("diagonal".parse::<LayoutAxis>().is_err());
    }

    #[test]
    fn test_tile_config_default() {
        let config = TileConfig::default();
        assert_eq!(config.layout_axis, LayoutAxis::LeftToRight);
        assert_eq!(config.master_area_axis, LayoutAxis::Monocle);
        assert_eq!(config.stack_area_axis, LayoutAxis::TopToBottom);
        assert!((config.master_area_factor - 0.6).abs() < f64::EPSILON);
        assert_eq!(config.master_area_windows_count, 1);
        assert_eq!(config.restore_delay_ms, 200);
    }

    #[test]
    fn test_tile_config_deserialization() {
        let json = r#"{"layoutAxis": "top-to-bottom", "masterAreaWindowsCount": 2}"#;
        let config: TileConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.layout_axis, LayoutAxis::TopToBottom);
        assert_eq!(config.master_area_windows_count, 2);
        // Unspecified fields keep their defaults
        assert_eq!(config.stack_area_axis, LayoutAxis::TopToBottom);
    }
}
