use super::config::ScoringParams;

/// Points for a stage solved after `elapsed_sec` seconds.
///
/// Linear from `max_points` at zero down to `min_points` at the ceiling,
/// flat afterwards.
pub fn calculate_points(elapsed_sec: f64, params: &ScoringParams) -> u32 {
    let max = params.max_points.max(params.min_points) as f64;
    let min = params.min_points.min(params.max_points) as f64;
    let elapsed = if elapsed_sec.is_nan() {
        0.0
    } else {
        elapsed_sec.max(0.0)
    };
    if params.ceiling_sec <= 0.0 || elapsed >= params.ceiling_sec {
        return min as u32;
    }
    let frac = elapsed / params.ceiling_sec;
    (max - (max - min) * frac).round() as u32
}

#[derive(Clone, Debug, PartialEq)]
pub struct StageScore {
    pub stage_id: String,
    pub elapsed_sec: f64,
    pub points: u32,
}

/// Per-stage scores in the order they were earned.
#[derive(Clone, Debug, Default)]
pub struct ScoreBoard {
    entries: Vec<StageScore>,
}

impl ScoreBoard {
    pub fn record(&mut self, stage_id: &str, elapsed_sec: f64, params: &ScoringParams) -> StageScore {
        let score = StageScore {
            stage_id: stage_id.to_string(),
            elapsed_sec,
            points: calculate_points(elapsed_sec, params),
        };
        self.entries.push(score.clone());
        score
    }

    pub fn total(&self) -> u32 {
        self.entries.iter().map(|s| s.points).sum()
    }

    pub fn total_elapsed_sec(&self) -> f64 {
        self.entries.iter().map(|s| s.elapsed_sec).sum()
    }

    pub fn breakdown(&self) -> &[StageScore] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
