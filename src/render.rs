use crate::constants::{BACKGROUND, PLACEHOLDER_TILE, TILE_GAP_PX};
use crate::core::{aspect_ratio, BoardLayout, Puzzle};
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct Renderer {
    ctx: web::CanvasRenderingContext2d,
}

impl Renderer {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        ctx.set_image_smoothing_enabled(true);
        Ok(Self { ctx })
    }

    /// Draw every tile of `puzzle` at its closeness-driven position.
    ///
    /// Until the image reports a natural size the board uses the placeholder
    /// aspect and tiles are drawn as flat rectangles.
    pub fn draw(
        &self,
        canvas: &web::HtmlCanvasElement,
        image: &web::HtmlImageElement,
        puzzle: &Puzzle,
        time_sec: f64,
    ) {
        let vw = canvas.width() as f64;
        let vh = canvas.height() as f64;
        let ctx = &self.ctx;
        ctx.set_fill_style_str(BACKGROUND);
        ctx.fill_rect(0.0, 0.0, vw, vh);

        let img_w = image.natural_width() as f64;
        let img_h = image.natural_height() as f64;
        let image_ready = image.complete() && img_w > 0.0 && img_h > 0.0;
        let layout = BoardLayout::fit(vw, vh, aspect_ratio(img_w, img_h), puzzle.grid());

        let t = puzzle.display_closeness();
        let gap = TILE_GAP_PX * (1.0 - t);
        let dw = (layout.tile.x - 2.0 * gap).max(0.5);
        let dh = (layout.tile.y - 2.0 * gap).max(0.5);
        if !image_ready {
            ctx.set_fill_style_str(PLACEHOLDER_TILE);
        }

        for tile in puzzle.tiles() {
            let center = layout.tile_center(tile, t, time_sec);
            let spin = layout.tile_spin(tile, t);
            ctx.save();
            _ = ctx.translate(center.x, center.y);
            _ = ctx.rotate(spin);
            if image_ready {
                let (sx, sy, sw, sh) = layout.source_rect(tile, img_w, img_h);
                _ = ctx.draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                    image,
                    sx,
                    sy,
                    sw,
                    sh,
                    -dw * 0.5,
                    -dh * 0.5,
                    dw,
                    dh,
                );
            } else {
                ctx.fill_rect(-dw * 0.5, -dh * 0.5, dw, dh);
            }
            ctx.restore();
        }
    }
}
