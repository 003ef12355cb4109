use super::angle::{closeness, drag_to_angle_delta, slider_to_angle, start_angle};
use super::config::PuzzleParams;
use super::scramble::{generate_tiles, ScrambleSeed, Tile};
use super::snap::{FrameScheduler, SnapController, SnapInputs, SnapState, SolvedEvent};
use instant::Instant;
use std::time::Duration;

/// One puzzle (or one stage) from scramble to solve.
///
/// Owns the player's control angle, the hidden target, the fixed tile set and
/// the snap controller. Every input method re-evaluates the controller so the
/// assist engages or backs off immediately.
#[derive(Debug)]
pub struct Puzzle {
    params: PuzzleParams,
    seed: ScrambleSeed,
    stage_index: u32,
    tiles: Vec<Tile>,
    target: f64,
    angle: f64,
    dragging: bool,
    active: bool,
    snap: SnapController,
    started_at: Instant,
    solved_elapsed: Option<Duration>,
}

impl Puzzle {
    pub fn new(
        params: PuzzleParams,
        seed: ScrambleSeed,
        stage_index: u32,
        target: f64,
        now: Instant,
    ) -> Self {
        let params = params.sanitized();
        let tiles = generate_tiles(seed, stage_index, params.grid);
        let snap = SnapController::from_params(&params);
        let window = params.assist_threshold.min(params.reveal_threshold);
        Self {
            params,
            seed,
            stage_index,
            tiles,
            target,
            angle: start_angle(target, window),
            dragging: false,
            active: true,
            snap,
            started_at: now,
            solved_elapsed: None,
        }
    }

    #[inline]
    pub fn params(&self) -> &PuzzleParams {
        &self.params
    }

    #[inline]
    pub fn seed(&self) -> ScrambleSeed {
        self.seed
    }

    #[inline]
    pub fn stage_index(&self) -> u32 {
        self.stage_index
    }

    #[inline]
    pub fn grid(&self) -> u32 {
        self.params.grid
    }

    #[inline]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    #[inline]
    pub fn closeness(&self) -> f64 {
        closeness(self.angle, self.target)
    }

    #[inline]
    pub fn state(&self) -> SnapState {
        self.snap.state()
    }

    #[inline]
    pub fn is_solved(&self) -> bool {
        self.snap.is_solved()
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Closeness as drawn: pinned to 1 once solved, even if the toy keeps
    /// turning afterwards.
    pub fn display_closeness(&self) -> f64 {
        if self.is_solved() {
            1.0
        } else {
            self.closeness()
        }
    }

    /// Whether the presentation should show the assembled look.
    pub fn is_revealed(&self) -> bool {
        self.is_solved() || self.closeness() >= self.params.reveal_threshold
    }

    /// Time since the puzzle started, frozen once solved.
    pub fn elapsed(&self, now: Instant) -> Duration {
        self.solved_elapsed.unwrap_or_else(|| {
            if now > self.started_at {
                now - self.started_at
            } else {
                Duration::ZERO
            }
        })
    }

    #[inline]
    fn input_locked(&self) -> bool {
        self.params.lock_on_solve && self.is_solved()
    }

    fn inputs(&self) -> SnapInputs {
        SnapInputs {
            closeness: self.closeness(),
            dragging: self.dragging,
            active: self.active,
        }
    }

    fn reevaluate<S: FrameScheduler + ?Sized>(&mut self, sched: &mut S) {
        let inputs = self.inputs();
        self.snap.evaluate(inputs, sched);
    }

    /// Slider input: jump straight to a wrapped angle. Returns false if rejected.
    pub fn set_angle<S: FrameScheduler + ?Sized>(&mut self, value: f64, sched: &mut S) -> bool {
        if self.input_locked() {
            return false;
        }
        self.angle = slider_to_angle(value);
        self.reevaluate(sched);
        true
    }

    pub fn begin_drag<S: FrameScheduler + ?Sized>(&mut self, sched: &mut S) -> bool {
        if self.input_locked() {
            return false;
        }
        self.dragging = true;
        self.reevaluate(sched);
        true
    }

    /// Rotate by a horizontal pointer displacement in CSS pixels.
    pub fn drag_by<S: FrameScheduler + ?Sized>(&mut self, dx_px: f64, sched: &mut S) -> bool {
        if !self.dragging || self.input_locked() {
            return false;
        }
        self.angle += drag_to_angle_delta(dx_px, self.params.drag_sensitivity);
        self.reevaluate(sched);
        true
    }

    pub fn end_drag<S: FrameScheduler + ?Sized>(&mut self, sched: &mut S) {
        if !self.dragging {
            return;
        }
        self.dragging = false;
        self.reevaluate(sched);
    }

    pub fn set_active<S: FrameScheduler + ?Sized>(&mut self, active: bool, sched: &mut S) {
        self.active = active;
        self.reevaluate(sched);
    }

    /// Display-frame callback for the snap assist.
    pub fn on_frame<S: FrameScheduler + ?Sized>(
        &mut self,
        now: Instant,
        sched: &mut S,
    ) -> Option<SolvedEvent> {
        let inputs = self.inputs();
        let elapsed = self.elapsed(now);
        let event = self
            .snap
            .on_frame(&mut self.angle, self.target, inputs, elapsed, sched);
        if let Some(ev) = event {
            self.solved_elapsed = Some(ev.elapsed);
            log::info!(
                "[puzzle] stage {} solved in {:.2}s",
                self.stage_index,
                ev.elapsed.as_secs_f64()
            );
        }
        event
    }

    /// Cancel any queued frame before the puzzle is dropped or replaced.
    pub fn teardown<S: FrameScheduler + ?Sized>(&mut self, sched: &mut S) {
        self.dragging = false;
        self.snap.cancel(sched);
    }
}
