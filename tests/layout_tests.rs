// Host-side tests for board geometry and tile interpolation.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod reveal {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod layout {
        include!("../src/core/layout.rs");
    }
    pub mod scramble {
        include!("../src/core/scramble.rs");
    }
}

use glam::DVec2;
use reveal::constants::PLACEHOLDER_ASPECT;
use reveal::layout::*;
use reveal::scramble::{generate_tiles, ScrambleSeed};

fn close(a: DVec2, b: DVec2) -> bool {
    (a - b).length() < 1e-9
}

#[test]
fn aspect_uses_placeholder_until_dimensions_arrive() {
    assert_eq!(aspect_ratio(0.0, 0.0), PLACEHOLDER_ASPECT);
    assert_eq!(aspect_ratio(640.0, 0.0), PLACEHOLDER_ASPECT);
    assert_eq!(aspect_ratio(f64::NAN, 480.0), PLACEHOLDER_ASPECT);
    assert_eq!(aspect_ratio(200.0, 100.0), 0.5);
}

#[test]
fn board_fits_and_centers_in_viewport() {
    let layout = BoardLayout::fit(1000.0, 800.0, 0.5, 10);
    assert!(close(layout.size, DVec2::new(620.0, 310.0)));
    assert!(close(layout.origin, DVec2::new(190.0, 245.0)));
    assert!(close(layout.tile, DVec2::new(62.0, 31.0)));
    assert!(close(layout.center(), DVec2::new(500.0, 400.0)));
}

#[test]
fn tall_images_are_limited_by_height() {
    let layout = BoardLayout::fit(1000.0, 500.0, 2.0, 4);
    assert!(layout.size.y <= 500.0);
    assert!((layout.size.y / layout.size.x - 2.0).abs() < 1e-12);
}

#[test]
fn degenerate_inputs_stay_finite() {
    let tiles = generate_tiles(ScrambleSeed(0.5), 0, 22);
    for layout in [
        BoardLayout::fit(0.0, 0.0, aspect_ratio(0.0, 0.0), 22),
        BoardLayout::fit(800.0, 600.0, 0.0, 0),
        BoardLayout::fit(800.0, 600.0, f64::NAN, 22),
    ] {
        for tile in &tiles {
            let c = layout.tile_center(tile, 0.3, 1.0);
            assert!(c.x.is_finite() && c.y.is_finite());
        }
    }
}

#[test]
fn full_closeness_lands_tiles_on_the_grid() {
    let layout = BoardLayout::fit(800.0, 800.0, 1.0, 4);
    for tile in generate_tiles(ScrambleSeed(0.25), 0, 4) {
        let at_one = layout.tile_center(&tile, 1.0, 12.5);
        assert!(close(at_one, layout.assembled_center(&tile)));
        assert_eq!(layout.tile_spin(&tile, 1.0), 0.0);
    }
    let first = generate_tiles(ScrambleSeed(0.25), 0, 4)[0];
    assert!(close(
        layout.assembled_center(&first),
        layout.origin + layout.tile * 0.5
    ));
}

#[test]
fn zero_closeness_is_scattered_plus_wobble() {
    let layout = BoardLayout::fit(800.0, 600.0, 0.75, 6);
    for tile in generate_tiles(ScrambleSeed(0.8), 1, 6) {
        let expected = layout.scattered_center(&tile) + layout.wobble(&tile, 2.0, 0.0);
        assert!(close(layout.tile_center(&tile, 0.0, 2.0), expected));
    }
}

#[test]
fn scatter_radius_follows_tile_fraction() {
    let layout = BoardLayout::fit(800.0, 800.0, 1.0, 8);
    let half_diag = layout.size.length() * 0.5;
    for tile in generate_tiles(ScrambleSeed(0.3), 0, 8) {
        let r = (layout.scattered_center(&tile) - layout.center()).length();
        assert!(r >= 0.35 * half_diag - 1e-9);
        assert!(r <= 1.30 * half_diag + 1e-9);
    }
}

#[test]
fn wobble_fades_as_closeness_rises() {
    let layout = BoardLayout::fit(800.0, 800.0, 1.0, 8);
    let tile = generate_tiles(ScrambleSeed(0.3), 0, 8)[5];
    let loose = layout.wobble(&tile, 0.7, 0.0).length();
    let tight = layout.wobble(&tile, 0.7, 0.9).length();
    assert!(tight <= loose * 0.1 + 1e-12);
    assert_eq!(layout.wobble(&tile, 0.7, 1.0), DVec2::ZERO);
}

#[test]
fn source_rect_slices_the_image() {
    let layout = BoardLayout::fit(800.0, 800.0, 0.5, 22);
    let tile = generate_tiles(ScrambleSeed(0.5), 0, 22)[2 * 22 + 3];
    assert_eq!((tile.x, tile.y), (3, 2));
    let (sx, sy, sw, sh) = layout.source_rect(&tile, 440.0, 220.0);
    assert!((sx - 60.0).abs() < 1e-9);
    assert!((sy - 20.0).abs() < 1e-9);
    assert!((sw - 20.0).abs() < 1e-9);
    assert!((sh - 10.0).abs() < 1e-9);
}

#[test]
fn progress_percent_rounds_and_clamps() {
    assert_eq!(progress_percent(0.0), 0);
    assert_eq!(progress_percent(0.504), 50);
    assert_eq!(progress_percent(1.0), 100);
    assert_eq!(progress_percent(1.7), 100);
    assert_eq!(progress_percent(-0.2), 0);
}
