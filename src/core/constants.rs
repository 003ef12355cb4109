// Shared tuning constants for the reveal mechanic. Used by the core and the
// web frontend; presets in `config.rs` are built from these.

// Closeness shaping
pub const CLOSENESS_EXPONENT: i32 = 6; // steepness of the click-into-place curve

// Assist / reveal thresholds (closeness units, 0..1)
pub const TOY_ASSIST_THRESHOLD: f64 = 0.965;
pub const STAGED_ASSIST_THRESHOLD: f64 = 0.90;
pub const REVEAL_THRESHOLD: f64 = 0.985;

// Snap easing
pub const SNAP_FRACTION: f64 = 0.18; // share of remaining delta covered per frame
pub const SNAP_EPSILON_RAD: f64 = 0.0015; // below this the angle is set exactly

// Input
pub const DRAG_RADIANS_PER_PX: f64 = 0.01;

// Grid
pub const DEFAULT_GRID: u32 = 22;
pub const MAX_GRID: u32 = 64;

// Scoring
pub const MAX_POINTS: u32 = 1000;
pub const MIN_POINTS: u32 = 100;
pub const SCORE_CEILING_SEC: f64 = 60.0;

// Board layout
pub const PLACEHOLDER_ASPECT: f64 = 1.0; // height / width until the image reports its size
pub const BOARD_FILL: f64 = 0.62; // share of the limiting viewport dimension
pub const SCATTER_MIN: f64 = 0.35; // scatter radius floor, in half-diagonals
pub const SCATTER_SPAN: f64 = 0.95;
pub const WOBBLE_AMPLITUDE: f64 = 0.18; // in tile widths
pub const WOBBLE_HZ: f64 = 0.35;
pub const MAX_TILE_SPIN_RAD: f64 = 1.2;
