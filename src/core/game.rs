use super::angle::random_target;
use super::config::{PuzzleParams, ScoringParams};
use super::puzzle::Puzzle;
use super::scoring::{ScoreBoard, StageScore};
use super::scramble::ScrambleSeed;
use super::snap::FrameScheduler;
use instant::Instant;
use rand::Rng;

/// One image in the staged run.
#[derive(Clone, Debug, PartialEq)]
pub struct StageSpec {
    pub id: String,
    pub image_src: String,
}

impl StageSpec {
    pub fn new(id: impl Into<String>, image_src: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            image_src: image_src.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    Menu,
    Playing { stage: usize },
    Completed,
}

#[derive(Clone, Debug, PartialEq)]
pub enum GameEvent {
    StageStarted { stage: usize },
    StageSolved(StageScore),
    Completed { total: u32 },
}

/// Staged variant: a fixed list of images played in order, each with its own
/// puzzle, timer and score.
#[derive(Debug)]
pub struct Game {
    stages: Vec<StageSpec>,
    params: PuzzleParams,
    scoring: ScoringParams,
    base_seed: ScrambleSeed,
    phase: GamePhase,
    puzzle: Option<Puzzle>,
    scores: ScoreBoard,
}

impl Game {
    pub fn new(
        stages: Vec<StageSpec>,
        params: PuzzleParams,
        scoring: ScoringParams,
        base_seed: ScrambleSeed,
    ) -> Self {
        Self {
            stages,
            params,
            scoring,
            base_seed,
            phase: GamePhase::Menu,
            puzzle: None,
            scores: ScoreBoard::default(),
        }
    }

    #[inline]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[inline]
    pub fn base_seed(&self) -> ScrambleSeed {
        self.base_seed
    }

    /// Replace the base seed used by the next `start`. Ignored mid-run so the
    /// current stages keep the scatter they were built with.
    pub fn reseed(&mut self, seed: ScrambleSeed) -> bool {
        if matches!(self.phase, GamePhase::Playing { .. }) {
            log::debug!("[game] reseed ignored while playing");
            return false;
        }
        self.base_seed = seed;
        true
    }

    #[inline]
    pub fn stages(&self) -> &[StageSpec] {
        &self.stages
    }

    #[inline]
    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    #[inline]
    pub fn puzzle(&self) -> Option<&Puzzle> {
        self.puzzle.as_ref()
    }

    pub fn current_stage(&self) -> Option<&StageSpec> {
        match self.phase {
            GamePhase::Playing { stage } => self.stages.get(stage),
            _ => None,
        }
    }

    /// Menu or Completed -> first stage, scattered from the current base seed.
    /// Stage targets are drawn from `rng`.
    pub fn start<R: Rng + ?Sized, S: FrameScheduler + ?Sized>(
        &mut self,
        now: Instant,
        rng: &mut R,
        sched: &mut S,
    ) -> Option<GameEvent> {
        if matches!(self.phase, GamePhase::Playing { .. }) {
            log::debug!("[game] start ignored while playing");
            return None;
        }
        self.scores.clear();
        self.enter_stage(0, now, rng, sched)
    }

    /// Solved stage -> next stage, or Completed after the last one.
    pub fn next_stage<R: Rng + ?Sized, S: FrameScheduler + ?Sized>(
        &mut self,
        now: Instant,
        rng: &mut R,
        sched: &mut S,
    ) -> Option<GameEvent> {
        let GamePhase::Playing { stage } = self.phase else {
            log::debug!("[game] next_stage ignored outside play");
            return None;
        };
        if !self.puzzle.as_ref().is_some_and(Puzzle::is_solved) {
            log::debug!("[game] next_stage ignored, stage {} unsolved", stage);
            return None;
        }
        self.enter_stage(stage + 1, now, rng, sched)
    }

    /// Abandon the run from any phase.
    pub fn quit_to_menu<S: FrameScheduler + ?Sized>(&mut self, sched: &mut S) {
        self.teardown(sched);
        self.phase = GamePhase::Menu;
        log::info!("[game] back to menu");
    }

    /// Cancel anything the current stage has queued.
    pub fn teardown<S: FrameScheduler + ?Sized>(&mut self, sched: &mut S) {
        if let Some(mut puzzle) = self.puzzle.take() {
            puzzle.teardown(sched);
        }
    }

    fn enter_stage<R: Rng + ?Sized, S: FrameScheduler + ?Sized>(
        &mut self,
        stage: usize,
        now: Instant,
        rng: &mut R,
        sched: &mut S,
    ) -> Option<GameEvent> {
        self.teardown(sched);
        if stage >= self.stages.len() {
            self.phase = GamePhase::Completed;
            let total = self.scores.total();
            log::info!(
                "[game] completed {} stages, total {} points",
                self.scores.len(),
                total
            );
            return Some(GameEvent::Completed { total });
        }
        let target = random_target(rng);
        self.puzzle = Some(Puzzle::new(
            self.params.clone(),
            self.base_seed,
            stage as u32,
            target,
            now,
        ));
        self.phase = GamePhase::Playing { stage };
        log::info!("[game] stage {}/{} started", stage + 1, self.stages.len());
        Some(GameEvent::StageStarted { stage })
    }

    fn playing_puzzle(&mut self) -> Option<&mut Puzzle> {
        match self.phase {
            GamePhase::Playing { .. } => self.puzzle.as_mut(),
            _ => None,
        }
    }

    pub fn set_angle<S: FrameScheduler + ?Sized>(&mut self, value: f64, sched: &mut S) -> bool {
        self.playing_puzzle()
            .is_some_and(|p| p.set_angle(value, sched))
    }

    pub fn begin_drag<S: FrameScheduler + ?Sized>(&mut self, sched: &mut S) -> bool {
        self.playing_puzzle().is_some_and(|p| p.begin_drag(sched))
    }

    pub fn drag_by<S: FrameScheduler + ?Sized>(&mut self, dx_px: f64, sched: &mut S) -> bool {
        self.playing_puzzle().is_some_and(|p| p.drag_by(dx_px, sched))
    }

    pub fn end_drag<S: FrameScheduler + ?Sized>(&mut self, sched: &mut S) {
        if let Some(p) = self.playing_puzzle() {
            p.end_drag(sched);
        }
    }

    /// Forward a display frame to the current stage and score a solve.
    pub fn on_frame<S: FrameScheduler + ?Sized>(
        &mut self,
        now: Instant,
        sched: &mut S,
    ) -> Option<GameEvent> {
        let GamePhase::Playing { stage } = self.phase else {
            return None;
        };
        let solved = self.puzzle.as_mut()?.on_frame(now, sched)?;
        let stage_id = self
            .stages
            .get(stage)
            .map(|s| s.id.clone())
            .unwrap_or_default();
        let score = self
            .scores
            .record(&stage_id, solved.elapsed.as_secs_f64(), &self.scoring);
        log::info!(
            "[game] stage {} scored {} points",
            score.stage_id,
            score.points
        );
        Some(GameEvent::StageSolved(score))
    }
}
