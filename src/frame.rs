use crate::core::{angle_to_slider, GamePhase};
use crate::dom;
use crate::overlay;
use crate::render::Renderer;
use crate::session::Session;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Per-frame presentation state. The snap assist has its own scheduler;
/// this loop only redraws and refreshes the HUD.
pub struct FrameContext {
    pub session: Rc<RefCell<Session>>,
    pub canvas: web::HtmlCanvasElement,
    pub image: web::HtmlImageElement,
    pub slider: Option<web::HtmlInputElement>,
    pub renderer: Renderer,
    pub document: web::Document,
    pub started: Instant,
    pub shown_src: Option<String>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let time_sec = (now - self.started).as_secs_f64();
        let session = self.session.borrow();

        if let Some(src) = session.image_src() {
            if self.shown_src.as_deref() != Some(src) {
                log::info!("[frame] switching image to {}", src);
                self.image.set_src(src);
                self.shown_src = Some(src.to_string());
            }
        }

        let Some(puzzle) = session.puzzle() else {
            return;
        };
        self.renderer.draw(&self.canvas, &self.image, puzzle, time_sec);

        if let Some(slider) = &self.slider {
            if !puzzle.is_dragging() {
                slider.set_value(&format!("{:.4}", angle_to_slider(puzzle.angle())));
            }
        }
        let stage = match &*session {
            Session::Staged { game } => match game.phase() {
                GamePhase::Playing { stage } => Some((stage, game.stages().len())),
                _ => None,
            },
            Session::Toy { .. } => None,
        };
        overlay::update_hud(
            &self.document,
            &overlay::HudSnapshot {
                closeness: puzzle.display_closeness(),
                elapsed_sec: puzzle.elapsed(now).as_secs_f64(),
                revealed: puzzle.is_revealed(),
                stage,
            },
        );
    }
}

pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
