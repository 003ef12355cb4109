use crate::core::{FrameScheduler, Game, GameEvent, GamePhase, Puzzle, ScrambleSeed, SolvedEvent};
use instant::Instant;
use rand::Rng;

/// What the page is running: the free-form toy or the staged game.
pub enum Session {
    Toy { puzzle: Puzzle, image_src: String },
    Staged { game: Game },
}

#[derive(Clone, Debug)]
pub enum SessionEvent {
    ToySolved(SolvedEvent),
    Game(GameEvent),
}

impl Session {
    pub fn puzzle(&self) -> Option<&Puzzle> {
        match self {
            Session::Toy { puzzle, .. } => Some(puzzle),
            Session::Staged { game } => game.puzzle(),
        }
    }

    pub fn phase(&self) -> Option<GamePhase> {
        match self {
            Session::Toy { .. } => None,
            Session::Staged { game } => Some(game.phase()),
        }
    }

    pub fn image_src(&self) -> Option<&str> {
        match self {
            Session::Toy { image_src, .. } => Some(image_src.as_str()),
            Session::Staged { game } => game.current_stage().map(|s| s.image_src.as_str()),
        }
    }

    pub fn set_angle<S: FrameScheduler + ?Sized>(&mut self, value: f64, sched: &mut S) -> bool {
        match self {
            Session::Toy { puzzle, .. } => puzzle.set_angle(value, sched),
            Session::Staged { game } => game.set_angle(value, sched),
        }
    }

    pub fn begin_drag<S: FrameScheduler + ?Sized>(&mut self, sched: &mut S) -> bool {
        match self {
            Session::Toy { puzzle, .. } => puzzle.begin_drag(sched),
            Session::Staged { game } => game.begin_drag(sched),
        }
    }

    pub fn drag_by<S: FrameScheduler + ?Sized>(&mut self, dx_px: f64, sched: &mut S) -> bool {
        match self {
            Session::Toy { puzzle, .. } => puzzle.drag_by(dx_px, sched),
            Session::Staged { game } => game.drag_by(dx_px, sched),
        }
    }

    pub fn end_drag<S: FrameScheduler + ?Sized>(&mut self, sched: &mut S) {
        match self {
            Session::Toy { puzzle, .. } => puzzle.end_drag(sched),
            Session::Staged { game } => game.end_drag(sched),
        }
    }

    pub fn on_frame<S: FrameScheduler + ?Sized>(
        &mut self,
        now: Instant,
        sched: &mut S,
    ) -> Option<SessionEvent> {
        match self {
            Session::Toy { puzzle, .. } => puzzle.on_frame(now, sched).map(SessionEvent::ToySolved),
            Session::Staged { game } => game.on_frame(now, sched).map(SessionEvent::Game),
        }
    }

    pub fn start<R: Rng + ?Sized, S: FrameScheduler + ?Sized>(
        &mut self,
        now: Instant,
        rng: &mut R,
        sched: &mut S,
    ) -> Option<GameEvent> {
        match self {
            Session::Toy { .. } => None,
            Session::Staged { game } => game.start(now, rng, sched),
        }
    }

    /// Start over with a freshly drawn scatter.
    pub fn restart<R: Rng + ?Sized, S: FrameScheduler + ?Sized>(
        &mut self,
        now: Instant,
        rng: &mut R,
        sched: &mut S,
    ) -> Option<GameEvent> {
        match self {
            Session::Toy { .. } => None,
            Session::Staged { game } => {
                game.reseed(ScrambleSeed::random(rng));
                game.start(now, rng, sched)
            }
        }
    }

    pub fn next_stage<R: Rng + ?Sized, S: FrameScheduler + ?Sized>(
        &mut self,
        now: Instant,
        rng: &mut R,
        sched: &mut S,
    ) -> Option<GameEvent> {
        match self {
            Session::Toy { .. } => None,
            Session::Staged { game } => game.next_stage(now, rng, sched),
        }
    }

    pub fn quit_to_menu<S: FrameScheduler + ?Sized>(&mut self, sched: &mut S) {
        if let Session::Staged { game } = self {
            game.quit_to_menu(sched);
        }
    }
}
