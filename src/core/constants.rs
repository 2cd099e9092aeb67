// Tuning constants for the particle text field.

// Display text
pub const DISPLAY_TEXT: &str = "CONNECTA";
pub const FONT_WEIGHT: u32 = 900;
pub const FONT_FAMILY: &str = "'Syne','Poppins',sans-serif";

// Layout (all in CSS pixels)
pub const FONT_SCALE_OF_WIDTH: f32 = 0.072; // font size as a fraction of viewport width
pub const FONT_PX_MAX: f32 = 92.0;
pub const GAP_DIVISOR: f32 = 28.0; // sampling gap = font size / divisor
pub const GAP_MIN_PX: u32 = 3;
pub const TEXT_Y_FRACTION: f32 = 0.08; // text baseline sits near the top strip
pub const SCATTER_OF_FONT: f32 = 1.0; // initial scatter spread relative to font size

// Sampling
pub const ALPHA_THRESHOLD: u8 = 128; // strictly greater counts as "ink"

// Simulation
pub const SPRING: f32 = 0.048;
pub const DAMPING: f32 = 0.80;
pub const REPEL_RADIUS: f32 = 100.0;
pub const REPEL_STRENGTH: f32 = 6.5;
pub const JITTER: f32 = 0.06;

// Per-particle attribute ranges [min, max)
pub const RADIUS_MIN: f32 = 0.4;
pub const RADIUS_SPAN: f32 = 1.6;
pub const HUE_MIN: f32 = 196.0;
pub const HUE_SPAN: f32 = 30.0;
pub const SATURATION_MIN: f32 = 60.0;
pub const SATURATION_SPAN: f32 = 40.0;
pub const LIGHTNESS_MIN: f32 = 72.0;
pub const LIGHTNESS_SPAN: f32 = 26.0;
pub const OPACITY_MIN: f32 = 0.65;
pub const OPACITY_SPAN: f32 = 0.35;
pub const GLOW_PROBABILITY: f64 = 0.15;

// Speed-driven brightening
pub const LIGHTNESS_PER_SPEED: f32 = 9.0;
pub const SATURATION_PER_SPEED: f32 = 12.0;
pub const LIGHTNESS_MAX: f32 = 98.0;
pub const SATURATION_MAX: f32 = 100.0;

// Glow rendering
pub const GLOW_RADIUS_SCALE: f32 = 1.8;
pub const GLOW_BLUR_BASE: f32 = 10.0;
pub const GLOW_BLUR_PER_SPEED: f32 = 5.0;
pub const GLOW_SHADOW_ALPHA: f32 = 0.95;

// Pointer sentinel used when nothing is hovering or touching
pub const POINTER_OFF_CANVAS: f32 = -9999.0;
