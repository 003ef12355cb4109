use super::angle::shortest_delta;
use super::config::PuzzleParams;
use std::time::Duration;

/// Opaque id for a requested frame callback (a requestAnimationFrame id in
/// the browser).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

/// Host hook for "call me on the next display frame".
///
/// The controller never steps itself; it asks for a frame and the host calls
/// back into `SnapController::on_frame` when that frame arrives. A request
/// that the host could not queue returns `None`; the controller then stays
/// re-armable and asks again on the next evaluation.
pub trait FrameScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle>;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnapState {
    Idle,
    Easing,
    Solved,
}

/// Snapshot of everything outside the controller that decides whether the
/// assist may run.
#[derive(Clone, Copy, Debug)]
pub struct SnapInputs {
    pub closeness: f64,
    pub dragging: bool,
    pub active: bool,
}

/// Emitted exactly once, on the easing -> solved transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolvedEvent {
    pub elapsed: Duration,
}

#[derive(Debug)]
pub struct SnapController {
    state: SnapState,
    pending: Option<FrameHandle>,
    assist_threshold: f64,
    fraction: f64,
    epsilon: f64,
}

impl SnapController {
    pub fn new(assist_threshold: f64, fraction: f64, epsilon: f64) -> Self {
        Self {
            state: SnapState::Idle,
            pending: None,
            assist_threshold,
            fraction,
            epsilon,
        }
    }

    pub fn from_params(params: &PuzzleParams) -> Self {
        Self::new(
            params.assist_threshold,
            params.snap_fraction,
            params.snap_epsilon,
        )
    }

    #[inline]
    pub fn state(&self) -> SnapState {
        self.state
    }

    #[inline]
    pub fn is_solved(&self) -> bool {
        self.state == SnapState::Solved
    }

    #[inline]
    pub fn has_pending_frame(&self) -> bool {
        self.pending.is_some()
    }

    #[inline]
    fn eligible(&self, inputs: SnapInputs) -> bool {
        !inputs.dragging && inputs.active && inputs.closeness >= self.assist_threshold
    }

    /// Re-check whether the assist should run. Call after every input change.
    pub fn evaluate<S: FrameScheduler + ?Sized>(&mut self, inputs: SnapInputs, sched: &mut S) {
        match (self.state, self.eligible(inputs)) {
            (SnapState::Idle, true) => {
                log::debug!("[snap] easing engaged t={:.3}", inputs.closeness);
                self.state = SnapState::Easing;
                self.ensure_frame(sched);
            }
            (SnapState::Easing, true) => self.ensure_frame(sched),
            (SnapState::Easing, false) => {
                log::debug!(
                    "[snap] easing abandoned (dragging={}, active={})",
                    inputs.dragging,
                    inputs.active
                );
                self.state = SnapState::Idle;
                self.cancel_pending(sched);
            }
            (SnapState::Idle, false) | (SnapState::Solved, _) => {}
        }
    }

    /// Advance one display frame, pulling `angle` a fixed fraction of the
    /// remaining way toward `target`.
    pub fn on_frame<S: FrameScheduler + ?Sized>(
        &mut self,
        angle: &mut f64,
        target: f64,
        inputs: SnapInputs,
        elapsed: Duration,
        sched: &mut S,
    ) -> Option<SolvedEvent> {
        // the frame that got us here has fired
        self.pending = None;
        if self.state != SnapState::Easing {
            return None;
        }
        if !self.eligible(inputs) {
            self.state = SnapState::Idle;
            return None;
        }
        let d = shortest_delta(*angle, target);
        if d.abs() < self.epsilon {
            *angle = target;
            self.state = SnapState::Solved;
            log::debug!("[snap] solved after {:.2}s", elapsed.as_secs_f64());
            return Some(SolvedEvent { elapsed });
        }
        *angle += d * self.fraction;
        self.pending = sched.request_frame();
        None
    }

    /// Withdraw any queued frame; used on teardown and when superseded.
    pub fn cancel<S: FrameScheduler + ?Sized>(&mut self, sched: &mut S) {
        self.cancel_pending(sched);
        if self.state == SnapState::Easing {
            self.state = SnapState::Idle;
        }
    }

    fn ensure_frame<S: FrameScheduler + ?Sized>(&mut self, sched: &mut S) {
        if self.pending.is_none() {
            self.pending = sched.request_frame();
            if self.pending.is_none() {
                log::warn!("[snap] frame request refused, will retry");
            }
        }
    }

    fn cancel_pending<S: FrameScheduler + ?Sized>(&mut self, sched: &mut S) {
        if let Some(handle) = self.pending.take() {
            sched.cancel_frame(handle);
        }
    }
}
