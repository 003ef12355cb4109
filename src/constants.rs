/// DOM hooks and presentation tuning for the browser frontend.
///
/// Mechanic tuning lives in `core::constants`; only things the page layout
/// and drawing care about belong here.
// Element ids
pub const CANVAS_ID: &str = "puzzle-canvas";
pub const IMAGE_ID: &str = "puzzle-image";
pub const SLIDER_ID: &str = "angle-slider";
pub const PROGRESS_FILL_ID: &str = "progress-fill";
pub const PROGRESS_TEXT_ID: &str = "progress-text";
pub const TIMER_ID: &str = "stage-timer";
pub const STAGE_LABEL_ID: &str = "stage-label";
pub const MENU_SCREEN_ID: &str = "menu-screen";
pub const HUD_ID: &str = "hud";
pub const STAGE_SOLVED_ID: &str = "stage-solved";
pub const STAGE_SOLVED_TEXT_ID: &str = "stage-solved-text";
pub const COMPLETED_SCREEN_ID: &str = "completed-screen";
pub const SCORE_BREAKDOWN_ID: &str = "score-breakdown";
pub const SCORE_TOTAL_ID: &str = "score-total";

// Buttons
pub const START_BUTTON_ID: &str = "start-button";
pub const NEXT_BUTTON_ID: &str = "next-button";
pub const MENU_BUTTON_ID: &str = "menu-button";
pub const RESTART_BUTTON_ID: &str = "restart-button";

// Staged images are discovered by class
pub const STAGE_IMAGE_SELECTOR: &str = "img.stage-image";

// Canvas data attributes
pub const ATTR_MODE: &str = "data-mode";
pub const ATTR_GRID: &str = "data-grid";
pub const ATTR_ASSIST: &str = "data-assist";

// CSS classes
pub const HIDDEN_CLASS: &str = "hidden";
pub const REVEALED_CLASS: &str = "revealed";

// Drawing
pub const BACKGROUND: &str = "#0b0e16";
pub const PLACEHOLDER_TILE: &str = "rgba(120, 150, 200, 0.35)";
pub const TILE_GAP_PX: f64 = 1.5; // inset per side while scattered, gone once assembled
