use super::constants::*;
use super::scramble::Tile;
use glam::DVec2;
use std::f64::consts::TAU;

/// Height over width of the source image, or the placeholder while the
/// image has not reported a usable size yet.
#[inline]
pub fn aspect_ratio(width: f64, height: f64) -> f64 {
    if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
        height / width
    } else {
        PLACEHOLDER_ASPECT
    }
}

#[inline]
pub fn progress_percent(t: f64) -> u32 {
    (t.clamp(0.0, 1.0) * 100.0).round() as u32
}

/// Where the assembled board sits inside the viewport and how big each
/// tile is. All values are in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardLayout {
    pub origin: DVec2,
    pub size: DVec2,
    pub tile: DVec2,
    pub grid: u32,
}

impl BoardLayout {
    pub fn fit(viewport_w: f64, viewport_h: f64, aspect: f64, grid: u32) -> Self {
        let grid = grid.max(1);
        let aspect = if aspect.is_finite() && aspect > 0.0 {
            aspect
        } else {
            PLACEHOLDER_ASPECT
        };
        let vw = viewport_w.max(1.0);
        let vh = viewport_h.max(1.0);
        // widest board that fits both dimensions at the given aspect
        let width = (vw * BOARD_FILL).min(vh * BOARD_FILL / aspect);
        let size = DVec2::new(width, width * aspect);
        let origin = (DVec2::new(vw, vh) - size) * 0.5;
        Self {
            origin,
            size,
            tile: size / grid as f64,
            grid,
        }
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        self.origin + self.size * 0.5
    }

    pub fn assembled_center(&self, tile: &Tile) -> DVec2 {
        self.origin + DVec2::new(tile.x as f64 + 0.5, tile.y as f64 + 0.5) * self.tile
    }

    pub fn scattered_center(&self, tile: &Tile) -> DVec2 {
        let half_diag = self.size.length() * 0.5;
        let radius = (SCATTER_MIN + tile.radius_frac * SCATTER_SPAN) * half_diag;
        let theta = tile.angle_frac * TAU;
        self.center() + DVec2::new(theta.cos(), theta.sin()) * radius
    }

    /// Idle drift around the scattered spot; fades out as `t` reaches 1.
    pub fn wobble(&self, tile: &Tile, time_sec: f64, t: f64) -> DVec2 {
        let amp = WOBBLE_AMPLITUDE * self.tile.x * (1.0 - t.clamp(0.0, 1.0));
        let phase = tile.phase_frac * TAU + time_sec * WOBBLE_HZ * TAU;
        DVec2::new(phase.sin(), (phase * 1.3).cos()) * amp
    }

    /// Rendered tile center for closeness `t`.
    pub fn tile_center(&self, tile: &Tile, t: f64, time_sec: f64) -> DVec2 {
        let t = t.clamp(0.0, 1.0);
        let scattered = self.scattered_center(tile) + self.wobble(tile, time_sec, t);
        scattered.lerp(self.assembled_center(tile), t)
    }

    /// Rendered tile rotation in radians, zero once assembled.
    pub fn tile_spin(&self, tile: &Tile, t: f64) -> f64 {
        (tile.angle_frac - 0.5) * 2.0 * MAX_TILE_SPIN_RAD * (1.0 - t.clamp(0.0, 1.0))
    }

    /// Source rectangle `(sx, sy, sw, sh)` of this tile inside an image of
    /// the given natural size.
    pub fn source_rect(&self, tile: &Tile, image_w: f64, image_h: f64) -> (f64, f64, f64, f64) {
        let sw = image_w.max(0.0) / self.grid as f64;
        let sh = image_h.max(0.0) / self.grid as f64;
        (tile.x as f64 * sw, tile.y as f64 * sh, sw, sh)
    }
}
