use rand::prelude::*;

/// Seed from which every tile's scatter is derived.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrambleSeed(pub f64);

impl ScrambleSeed {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.gen())
    }

    /// Mix the seed with a stage index so each stage scrambles differently
    /// while staying reproducible for a fixed (seed, stage) pair.
    pub fn rng_for_stage(self, stage_index: u32) -> StdRng {
        let mix = self.0.to_bits() ^ (stage_index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
        StdRng::seed_from_u64(mix)
    }
}

/// One cell of the N×N grid plus the random fractions that place it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tile {
    pub x: u32,
    pub y: u32,
    pub angle_frac: f64,
    pub radius_frac: f64,
    pub phase_frac: f64,
}

/// Build the full tile set in row-major order from a single generator.
pub fn generate_tiles(seed: ScrambleSeed, stage_index: u32, grid: u32) -> Vec<Tile> {
    let mut rng = seed.rng_for_stage(stage_index);
    let mut tiles = Vec::with_capacity((grid as usize) * (grid as usize));
    for y in 0..grid {
        for x in 0..grid {
            let angle_frac: f64 = rng.gen();
            let radius_frac: f64 = rng.gen();
            let phase_frac: f64 = rng.gen();
            tiles.push(Tile {
                x,
                y,
                angle_frac,
                radius_frac,
                phase_frac,
            });
        }
    }
    tiles
}
