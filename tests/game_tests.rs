// Host-side tests for the staged game loop.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod reveal {
    pub mod angle {
        include!("../src/core/angle.rs");
    }
    pub mod config {
        include!("../src/core/config.rs");
    }
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod game {
        include!("../src/core/game.rs");
    }
    pub mod puzzle {
        include!("../src/core/puzzle.rs");
    }
    pub mod scoring {
        include!("../src/core/scoring.rs");
    }
    pub mod scramble {
        include!("../src/core/scramble.rs");
    }
    pub mod snap {
        include!("../src/core/snap.rs");
    }
}

use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use reveal::angle::random_target;
use reveal::config::{PuzzleParams, ScoringParams};
use reveal::game::*;
use reveal::scramble::ScrambleSeed;
use reveal::snap::{FrameHandle, FrameScheduler, SnapState};
use std::time::Duration;

#[derive(Default)]
struct RecordingScheduler {
    next_id: i32,
    requested: Vec<FrameHandle>,
    cancelled: Vec<FrameHandle>,
}

impl FrameScheduler for RecordingScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.requested.push(handle);
        Some(handle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.cancelled.push(handle);
    }
}

fn make_game() -> Game {
    let stages = vec![
        StageSpec::new("harbor", "img/harbor.jpg"),
        StageSpec::new("forest", "img/forest.jpg"),
        StageSpec::new("desert", "img/desert.jpg"),
    ];
    Game::new(
        stages,
        PuzzleParams::staged().with_grid(6),
        ScoringParams::default(),
        ScrambleSeed(0.42),
    )
}

/// Replays the game's draws on a cloned rng to learn each hidden target.
struct TargetOracle {
    rng: StdRng,
}

impl TargetOracle {
    fn before_start(rng: &StdRng) -> Self {
        Self { rng: rng.clone() }
    }

    fn next_target(&mut self) -> f64 {
        random_target(&mut self.rng)
    }
}

fn solve_current(game: &mut Game, target: f64, at: Instant, sched: &mut RecordingScheduler) -> GameEvent {
    assert!(game.set_angle(target, sched));
    for _ in 0..60 {
        if let Some(ev) = game.on_frame(at, sched) {
            return ev;
        }
    }
    panic!("stage did not solve");
}

#[test]
fn starts_in_menu_and_ignores_input() {
    let mut game = make_game();
    let mut sched = RecordingScheduler::default();
    assert_eq!(game.phase(), GamePhase::Menu);
    assert!(game.puzzle().is_none());
    assert!(!game.set_angle(1.0, &mut sched));
    assert!(!game.begin_drag(&mut sched));
    assert!(game.on_frame(Instant::now(), &mut sched).is_none());
    assert!(sched.requested.is_empty());
}

#[test]
fn full_run_scores_every_stage() {
    let mut game = make_game();
    let mut sched = RecordingScheduler::default();
    let mut rng = StdRng::seed_from_u64(11);
    let mut oracle = TargetOracle::before_start(&rng);
    let t0 = Instant::now();

    assert_eq!(
        game.start(t0, &mut rng, &mut sched),
        Some(GameEvent::StageStarted { stage: 0 })
    );
    assert_eq!(game.phase(), GamePhase::Playing { stage: 0 });
    assert_eq!(game.current_stage().map(|s| s.id.as_str()), Some("harbor"));

    let ev = solve_current(&mut game, oracle.next_target(), t0 + Duration::from_secs(2), &mut sched);
    match ev {
        GameEvent::StageSolved(score) => {
            assert_eq!(score.stage_id, "harbor");
            assert_eq!(score.points, 970);
        }
        other => panic!("unexpected {other:?}"),
    }

    let t1 = t0 + Duration::from_secs(5);
    assert_eq!(
        game.next_stage(t1, &mut rng, &mut sched),
        Some(GameEvent::StageStarted { stage: 1 })
    );
    solve_current(&mut game, oracle.next_target(), t1 + Duration::from_secs(30), &mut sched);

    let t2 = t1 + Duration::from_secs(40);
    game.next_stage(t2, &mut rng, &mut sched);
    solve_current(&mut game, oracle.next_target(), t2 + Duration::from_secs(120), &mut sched);

    let done = game.next_stage(t2, &mut rng, &mut sched);
    assert_eq!(done, Some(GameEvent::Completed { total: 970 + 550 + 100 }));
    assert_eq!(game.phase(), GamePhase::Completed);
    assert!(game.puzzle().is_none());
    assert_eq!(game.scores().len(), 3);
}

#[test]
fn cannot_advance_an_unsolved_stage() {
    let mut game = make_game();
    let mut sched = RecordingScheduler::default();
    let mut rng = StdRng::seed_from_u64(3);
    game.start(Instant::now(), &mut rng, &mut sched);
    assert!(game.next_stage(Instant::now(), &mut rng, &mut sched).is_none());
    assert_eq!(game.phase(), GamePhase::Playing { stage: 0 });
}

#[test]
fn solved_stage_rejects_further_input() {
    let mut game = make_game();
    let mut sched = RecordingScheduler::default();
    let mut rng = StdRng::seed_from_u64(5);
    let mut oracle = TargetOracle::before_start(&rng);
    let now = Instant::now();
    game.start(now, &mut rng, &mut sched);
    solve_current(&mut game, oracle.next_target(), now, &mut sched);

    assert!(!game.set_angle(0.0, &mut sched));
    assert!(!game.begin_drag(&mut sched));
    assert!(game.on_frame(now, &mut sched).is_none(), "solve event fired twice");
    assert_eq!(game.scores().len(), 1);
}

#[test]
fn each_stage_gets_its_own_scramble() {
    let mut game = make_game();
    let mut sched = RecordingScheduler::default();
    let mut rng = StdRng::seed_from_u64(21);
    let mut oracle = TargetOracle::before_start(&rng);
    let now = Instant::now();
    game.start(now, &mut rng, &mut sched);
    let first = game.puzzle().map(|p| p.tiles().to_vec()).unwrap();
    assert_eq!(first.len(), 36);

    solve_current(&mut game, oracle.next_target(), now, &mut sched);
    game.next_stage(now, &mut rng, &mut sched);
    let second = game.puzzle().map(|p| p.tiles().to_vec()).unwrap();
    assert_ne!(first, second);
    assert_eq!(game.puzzle().map(|p| p.stage_index()), Some(1));
}

#[test]
fn quitting_mid_ease_cancels_the_pending_frame() {
    let mut game = make_game();
    let mut sched = RecordingScheduler::default();
    let mut rng = StdRng::seed_from_u64(8);
    let mut oracle = TargetOracle::before_start(&rng);
    game.start(Instant::now(), &mut rng, &mut sched);

    game.set_angle(oracle.next_target() + 0.05, &mut sched);
    assert_eq!(game.puzzle().map(|p| p.state()), Some(SnapState::Easing));
    let pending = sched.requested[0];

    game.quit_to_menu(&mut sched);
    assert_eq!(game.phase(), GamePhase::Menu);
    assert_eq!(sched.cancelled, vec![pending]);
    assert!(game.puzzle().is_none());
}

#[test]
fn restart_from_completed_clears_scores() {
    let mut game = Game::new(
        vec![StageSpec::new("only", "img/only.jpg")],
        PuzzleParams::staged().with_grid(3),
        ScoringParams::default(),
        ScrambleSeed(0.9),
    );
    let mut sched = RecordingScheduler::default();
    let mut rng = StdRng::seed_from_u64(99);
    let mut oracle = TargetOracle::before_start(&rng);
    let now = Instant::now();
    game.start(now, &mut rng, &mut sched);
    solve_current(&mut game, oracle.next_target(), now, &mut sched);
    assert_eq!(
        game.next_stage(now, &mut rng, &mut sched),
        Some(GameEvent::Completed { total: 1000 })
    );

    assert!(game.start(now, &mut rng, &mut sched).is_some());
    assert_eq!(game.phase(), GamePhase::Playing { stage: 0 });
    assert!(game.scores().is_empty());
}

#[test]
fn start_is_ignored_while_playing() {
    let mut game = make_game();
    let mut sched = RecordingScheduler::default();
    let mut rng = StdRng::seed_from_u64(1);
    game.start(Instant::now(), &mut rng, &mut sched);
    assert!(game.start(Instant::now(), &mut rng, &mut sched).is_none());
}

#[test]
fn empty_stage_list_completes_immediately() {
    let mut game = Game::new(
        Vec::new(),
        PuzzleParams::staged(),
        ScoringParams::default(),
        ScrambleSeed(0.1),
    );
    let mut sched = RecordingScheduler::default();
    let mut rng = StdRng::seed_from_u64(2);
    assert_eq!(
        game.start(Instant::now(), &mut rng, &mut sched),
        Some(GameEvent::Completed { total: 0 })
    );
    assert_eq!(game.phase(), GamePhase::Completed);
}

fn stage_tiles(seed: ScrambleSeed, target_seed: u64) -> Vec<Vec<reveal::scramble::Tile>> {
    let mut game = make_game();
    assert!(game.reseed(seed));
    let mut sched = RecordingScheduler::default();
    let mut rng = StdRng::seed_from_u64(target_seed);
    let mut oracle = TargetOracle::before_start(&rng);
    let now = Instant::now();
    game.start(now, &mut rng, &mut sched);
    let mut tiles = Vec::new();
    while let Some(puzzle) = game.puzzle() {
        assert_eq!(puzzle.seed(), seed);
        tiles.push(puzzle.tiles().to_vec());
        solve_current(&mut game, oracle.next_target(), now, &mut sched);
        game.next_stage(now, &mut rng, &mut sched);
    }
    tiles
}

#[test]
fn same_base_seed_replays_every_stage_scatter() {
    // targets come from different rngs; the scatter must not care
    let first = stage_tiles(ScrambleSeed(0.77), 1);
    let second = stage_tiles(ScrambleSeed(0.77), 2);
    assert_eq!(first.len(), 3);
    assert_eq!(first, second);

    let other = stage_tiles(ScrambleSeed(0.78), 1);
    assert_ne!(first[0], other[0]);
}

#[test]
fn start_uses_the_constructor_seed() {
    let mut game = make_game();
    let mut sched = RecordingScheduler::default();
    let mut rng = StdRng::seed_from_u64(4);
    assert_eq!(game.base_seed(), ScrambleSeed(0.42));
    game.start(Instant::now(), &mut rng, &mut sched);
    assert_eq!(game.puzzle().map(|p| p.seed()), Some(ScrambleSeed(0.42)));
}

#[test]
fn reseed_is_ignored_mid_run() {
    let mut game = make_game();
    let mut sched = RecordingScheduler::default();
    let mut rng = StdRng::seed_from_u64(6);
    game.start(Instant::now(), &mut rng, &mut sched);
    assert!(!game.reseed(ScrambleSeed(0.1)));
    assert_eq!(game.base_seed(), ScrambleSeed(0.42));

    game.quit_to_menu(&mut sched);
    assert!(game.reseed(ScrambleSeed(0.1)));
    game.start(Instant::now(), &mut rng, &mut sched);
    assert_eq!(game.puzzle().map(|p| p.seed()), Some(ScrambleSeed(0.1)));
}
