use super::constants::*;

/// Runtime tuning for a single puzzle instance.
///
/// Two presets mirror the two ways the toy is played: the free-form toy and
/// the staged game. Everything can still be overridden field by field.
#[derive(Clone, Debug, PartialEq)]
pub struct PuzzleParams {
    pub grid: u32,
    /// Closeness at which the snap assist takes over.
    pub assist_threshold: f64,
    /// Closeness at which the image counts as visually revealed.
    pub reveal_threshold: f64,
    pub snap_fraction: f64,
    pub snap_epsilon: f64,
    pub drag_sensitivity: f64,
    /// Reject drag and slider input once solved.
    pub lock_on_solve: bool,
}

impl Default for PuzzleParams {
    fn default() -> Self {
        Self::toy()
    }
}

impl PuzzleParams {
    pub fn toy() -> Self {
        Self {
            grid: DEFAULT_GRID,
            assist_threshold: TOY_ASSIST_THRESHOLD,
            reveal_threshold: REVEAL_THRESHOLD,
            snap_fraction: SNAP_FRACTION,
            snap_epsilon: SNAP_EPSILON_RAD,
            drag_sensitivity: DRAG_RADIANS_PER_PX,
            lock_on_solve: false,
        }
    }

    pub fn staged() -> Self {
        Self {
            assist_threshold: STAGED_ASSIST_THRESHOLD,
            lock_on_solve: true,
            ..Self::toy()
        }
    }

    pub fn with_grid(mut self, grid: u32) -> Self {
        self.grid = grid;
        self.sanitized()
    }

    pub fn with_assist_threshold(mut self, threshold: f64) -> Self {
        self.assist_threshold = threshold;
        self.sanitized()
    }

    /// Clamp every field into a range the mechanic can work with.
    pub fn sanitized(mut self) -> Self {
        self.grid = self.grid.clamp(1, MAX_GRID);
        self.assist_threshold = unit_or(self.assist_threshold, TOY_ASSIST_THRESHOLD);
        self.reveal_threshold = unit_or(self.reveal_threshold, REVEAL_THRESHOLD);
        if !(self.snap_fraction > 0.0 && self.snap_fraction <= 1.0) {
            self.snap_fraction = SNAP_FRACTION;
        }
        if !(self.snap_epsilon > 0.0 && self.snap_epsilon.is_finite()) {
            self.snap_epsilon = SNAP_EPSILON_RAD;
        }
        if !self.drag_sensitivity.is_finite() {
            self.drag_sensitivity = DRAG_RADIANS_PER_PX;
        }
        self
    }
}

#[inline]
fn unit_or(value: f64, fallback: f64) -> f64 {
    if value > 0.0 && value <= 1.0 {
        value
    } else {
        fallback
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScoringParams {
    pub max_points: u32,
    pub min_points: u32,
    /// Elapsed seconds at which a stage is only worth `min_points`.
    pub ceiling_sec: f64,
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self {
            max_points: MAX_POINTS,
            min_points: MIN_POINTS,
            ceiling_sec: SCORE_CEILING_SEC,
        }
    }
}

/// Which flavour of the toy a page hosts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionMode {
    Toy,
    Staged,
}

impl SessionMode {
    pub fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") | Some("toy") => SessionMode::Toy,
            Some("staged") | Some("game") => SessionMode::Staged,
            Some(other) => {
                log::warn!("[config] unknown mode {:?}, using toy", other);
                SessionMode::Toy
            }
        }
    }

    pub fn default_params(self) -> PuzzleParams {
        match self {
            SessionMode::Toy => PuzzleParams::toy(),
            SessionMode::Staged => PuzzleParams::staged(),
        }
    }
}

/// Build params from optional textual overrides (e.g. `data-*` attributes).
/// Unparsable values are logged and ignored.
pub fn params_from_overrides(
    mode: SessionMode,
    grid: Option<&str>,
    assist: Option<&str>,
) -> PuzzleParams {
    let mut params = mode.default_params();
    if let Some(raw) = grid {
        match raw.trim().parse::<u32>() {
            Ok(g) => params = params.with_grid(g),
            Err(_) => log::warn!("[config] ignoring grid override {:?}", raw),
        }
    }
    if let Some(raw) = assist {
        match raw.trim().parse::<f64>() {
            Ok(a) if a > 0.0 && a <= 1.0 => params = params.with_assist_threshold(a),
            _ => log::warn!("[config] ignoring assist override {:?}", raw),
        }
    }
    params
}
