/// DOM wiring constants for the particle text overlay.
///
/// The overlay sits above the page background (snow layer at z-index 1) and
/// below the registration card (z-index 10).
pub const DEFAULT_CANVAS_ID: &str = "particle-text";

pub const OVERLAY_STYLE: &str =
    "position:absolute;top:0;left:0;width:100%;height:100%;z-index:2;pointer-events:none";

// Scratch raster fill; any opaque color works since only alpha is sampled
pub const SCRATCH_FILL: &str = "#fff";
