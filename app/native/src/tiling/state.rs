//! State types for the tile layout.
//!
//! This module defines the geometric types and the parameter snapshot shared
//! by the layout algorithms and the engine.

use serde::{Deserialize, Serialize};

use crate::config::{LayoutAxis, TileConfig};

// ============================================================================
// Geometric Types
// ============================================================================

/// A rectangle in screen pixels, defined by its top-left corner and size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    /// X coordinate of the origin (top-left corner).
    pub x: i32,
    /// Y coordinate of the origin (top-left corner).
    pub y: i32,
    /// Width of the rectangle.
    pub width: i32,
    /// Height of the rectangle.
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Returns the x coordinate one past the right edge, saturating at `i32::MAX`.
    #[must_use]
    pub const fn right(&self) -> i32 { self.x.saturating_add(self.width) }

    /// Returns the y coordinate one past the bottom edge, saturating at `i32::MAX`.
    #[must_use]
    pub const fn bottom(&self) -> i32 { self.y.saturating_add(self.height) }

    /// Returns the area of the rectangle. Degenerate rectangles have no area.
    #[must_use]
    pub fn area(&self) -> i64 { i64::from(self.width.max(0)) * i64::from(self.height.max(0)) }

    /// Returns `true` if the rectangle has no area.
    #[must_use]
    pub const fn is_empty(&self) -> bool { self.width <= 0 || self.height <= 0 }

    /// Returns whether `other` lies entirely within this rectangle.
    #[must_use]
    pub const fn contains_rect(&self, other: &Self) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Returns whether the two rectangles share any area.
    #[must_use]
    pub const fn intersects(&self, other: &Self) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {}x{})", self.x, self.y, self.width, self.height)
    }
}

impl std::str::FromStr for Rect {
    type Err = String;

    /// Parses `x,y,width,height`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s
            .split(',')
            .map(|part| part.trim().parse::<i32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| format!("Invalid rectangle '{s}': {err}"))?;

        match parts.as_slice() {
            &[x, y, width, height] => Ok(Self::new(x, y, width, height)),
            _ => Err(format!("Invalid rectangle '{s}'. Expected x,y,width,height.")),
        }
    }
}

// ============================================================================
// Layout Parameters
// ============================================================================

/// Snapshot of the tunable parameters of a tile layout.
///
/// `master_fraction` is always within `[0.0, 1.0]` once normalized.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutParams {
    /// Axis splitting the working area into master and stack.
    pub primary_axis: LayoutAxis,
    /// Axis subdividing the master area.
    pub master_area_axis: LayoutAxis,
    /// Axis subdividing the stack area.
    pub stack_area_axis: LayoutAxis,
    /// Fraction of the primary axis given to the master area.
    pub master_fraction: f64,
    /// Number of windows from the head of the ordering in the master area.
    pub master_count: usize,
}

impl Default for LayoutParams {
    fn default() -> Self { Self::from(&TileConfig::default()) }
}

impl LayoutParams {
    /// Returns the parameters with the master fraction clamped into `[0.0, 1.0]`.
    ///
    /// A NaN fraction falls back to the default fraction.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.master_fraction = clamp_fraction(self.master_fraction);
        self
    }
}

impl From<&TileConfig> for LayoutParams {
    fn from(config: &TileConfig) -> Self {
        Self {
            primary_axis: config.layout_axis,
            master_area_axis: config.master_area_axis,
            stack_area_axis: config.stack_area_axis,
            master_fraction: config.master_area_factor,
            master_count: config.master_area_windows_count,
        }
        .normalized()
    }
}

/// Clamps a master fraction into `[0.0, 1.0]`.
#[must_use]
pub fn clamp_fraction(fraction: f64) -> f64 {
    if fraction.is_nan() {
        crate::config::types::DEFAULT_MASTER_AREA_FACTOR
    } else {
        fraction.clamp(0.0, 1.0)
    }
}

// ============================================================================
// Tests
// ============================================================================
