//! Fundamental geometric and frame-timing types.

use serde::{Deserialize, Serialize};

/// 2D position on the render surface (surface units).
/// x = right, y = down, origin at the top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// 2D velocity in surface units per frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

/// The bounded surface points drift across.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    pub width: f64,
    pub height: f64,
}

/// Frame counter for the animation loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameClock {
    /// Number of frames that have mutated the field.
    pub frame: u64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Velocity {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Speed magnitude (units/frame).
    pub fn speed(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

impl Default for Surface {
    fn default() -> Self {
        Self {
            width: crate::constants::DEFAULT_SURFACE_WIDTH,
            height: crate::constants::DEFAULT_SURFACE_HEIGHT,
        }
    }
}

impl Surface {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// A surface with no drawable area. Fields on it never move.
    pub fn is_empty(&self) -> bool {
        !has_extent(self.width) || !has_extent(self.height)
    }

    /// True if `pos` lies in `[0, width) x [0, height)`.
    pub fn contains(&self, pos: &Position) -> bool {
        (0.0..self.width).contains(&pos.x) && (0.0..self.height).contains(&pos.y)
    }

    /// Wrap a position toroidally back onto the surface, axis by axis.
    pub fn wrap(&self, pos: Position) -> Position {
        Position {
            x: wrap_axis(pos.x, self.width),
            y: wrap_axis(pos.y, self.height),
        }
    }
}

impl FrameClock {
    /// Advance by one frame.
    pub fn advance(&mut self) {
        self.frame += 1;
    }
}

/// Wrap a single coordinate into `[0, extent)`.
///
/// Crossing the far edge re-enters at 0. Crossing the near edge re-enters
/// from the far edge, carrying the overshoot. Never clamps.
pub fn wrap_axis(value: f64, extent: f64) -> f64 {
    if !has_extent(extent) {
        return 0.0;
    }
    if value >= extent {
        return 0.0;
    }
    if value < 0.0 {
        // rem_euclid can round up to exactly `extent` for tiny overshoots
        let wrapped = (extent + value).rem_euclid(extent);
        return if wrapped < extent { wrapped } else { 0.0 };
    }
    value
}

fn has_extent(extent: f64) -> bool {
    extent.is_finite() && extent > 0.0
}
