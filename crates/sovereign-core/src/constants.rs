//! Field tuning, render palette, and briefing constants.

/// Animation frame rate (Hz).
pub const FRAME_RATE: u32 = 60;

// --- Field generation ---

/// Default number of vector points in a field.
pub const DEFAULT_POINT_COUNT: usize = 24;

/// Default surface width (surface units).
pub const DEFAULT_SURFACE_WIDTH: f64 = 1000.0;

/// Default surface height (surface units).
pub const DEFAULT_SURFACE_HEIGHT: f64 = 600.0;

/// Half-range of the horizontal drift component (units/frame).
pub const DRIFT_X_MAX: f64 = 0.015;

/// Half-range of the vertical drift component (units/frame).
/// Smaller than the horizontal range for a mostly-horizontal glacial drift.
pub const DRIFT_Y_MAX: f64 = 0.005;

/// Identifier numbering starts here: `VEC-100`, `VEC-101`, ...
pub const POINT_ID_BASE: usize = 100;

/// Sector label range for decorative labels (`SEC-10` .. `SEC-99`).
pub const SECTOR_LABEL_MIN: u32 = 10;
pub const SECTOR_LABEL_MAX: u32 = 99;

/// Probability that a point is drawn with the large glyph.
pub const LARGE_RADIUS_PROBABILITY: f64 = 0.2;

/// Glyph half-size for small points.
pub const SMALL_RADIUS: f64 = 2.0;

/// Glyph half-size for large points.
pub const LARGE_RADIUS: f64 = 5.0;

// --- Render palette ---

pub const COLOR_VOID: &str = "#0A0C10";
pub const COLOR_TEXT: &str = "#EDEFF2";

/// Horizon lines as fractions of the surface height.
pub const HORIZON_FRACTIONS: [f64; 3] = [0.3, 0.5, 0.7];

pub const HORIZON_OPACITY: f64 = 0.05;

pub const GLYPH_OPACITY: f64 = 0.2;

// --- Briefings ---

/// Classification stamped on every generated briefing.
pub const BRIEFING_CLASSIFICATION: &str = "TOP SECRET // NOFORN";

/// Prefix of generated briefing ids.
pub const BRIEFING_ID_PREFIX: &str = "BRF-";

/// Generated briefing ids are `BRF-0` .. `BRF-9999`.
pub const BRIEFING_ID_RANGE: u32 = 10_000;

pub const DEFAULT_SUBJECT: &str = "SIGNAL LOSS";
pub const DEFAULT_SUMMARY: &str = "Telemetry undecipherable.";
pub const DEFAULT_RECOMMENDATION: &str = "HOLD POSITION";

/// Display format for military timestamps: minute precision, UTC.
pub const MILITARY_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%MZ";
