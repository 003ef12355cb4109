#![cfg(target_arch = "wasm32")]
use crate::core::{
    params_from_overrides, random_target, Game, Puzzle, ScoringParams, ScrambleSeed, SessionMode,
    StageSpec,
};
use crate::session::{Session, SessionEvent};
use constants::*;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
pub mod core;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;
mod scheduler;
mod session;

fn build_session(
    document: &web::Document,
    canvas: &web::HtmlCanvasElement,
    image: &web::HtmlImageElement,
) -> Session {
    let mode = SessionMode::parse(canvas.get_attribute(ATTR_MODE).as_deref());
    let params = params_from_overrides(
        mode,
        canvas.get_attribute(ATTR_GRID).as_deref(),
        canvas.get_attribute(ATTR_ASSIST).as_deref(),
    );
    log::info!(
        "[init] mode={:?} grid={} assist={:.3}",
        mode,
        params.grid,
        params.assist_threshold
    );
    let mut rng = rand::thread_rng();
    match mode {
        SessionMode::Toy => {
            let puzzle = Puzzle::new(
                params,
                ScrambleSeed::random(&mut rng),
                0,
                random_target(&mut rng),
                Instant::now(),
            );
            Session::Toy {
                puzzle,
                image_src: image.src(),
            }
        }
        SessionMode::Staged => {
            let stages: Vec<StageSpec> = dom::collect_stage_images(document, STAGE_IMAGE_SELECTOR)
                .into_iter()
                .map(|(id, src)| StageSpec::new(id, src))
                .collect();
            if stages.is_empty() {
                log::warn!("[init] staged mode without any {}", STAGE_IMAGE_SELECTOR);
            }
            Session::Staged {
                game: Game::new(
                    stages,
                    params,
                    ScoringParams::default(),
                    ScrambleSeed::random(&mut rng),
                ),
            }
        }
    }
}

/// Install the snap assist's frame callback. Each fired frame steps the
/// session once; the controller re-arms the scheduler while easing.
fn wire_snap_frames(
    document: &web::Document,
    session: &Rc<RefCell<Session>>,
    scheduler: &scheduler::RafScheduler,
) {
    let document = document.clone();
    let session = session.clone();
    let mut sched = scheduler.clone();
    scheduler.set_callback(move |_ts: f64| {
        let event = session.borrow_mut().on_frame(Instant::now(), &mut sched);
        match event {
            Some(SessionEvent::ToySolved(ev)) => {
                log::info!("[snap] revealed in {:.2}s", ev.elapsed.as_secs_f64());
            }
            Some(SessionEvent::Game(ev)) => {
                events::buttons::present_game_event(&document, &session.borrow(), &ev);
            }
            None => {}
        }
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("tile-reveal starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let image: web::HtmlImageElement = match dom::element_as(&document, IMAGE_ID) {
        Some(img) => img,
        None => web::HtmlImageElement::new().map_err(|e| anyhow::anyhow!("{:?}", e))?,
    };
    let slider: Option<web::HtmlInputElement> = dom::element_as(&document, SLIDER_ID);
    if slider.is_none() {
        log::warn!("[init] no #{}; drag is the only input", SLIDER_ID);
    }

    frame::wire_canvas_resize(&canvas);

    let session = Rc::new(RefCell::new(build_session(&document, &canvas, &image)));
    let scheduler = scheduler::RafScheduler::new();
    wire_snap_frames(&document, &session, &scheduler);

    let wiring = events::InputWiring {
        document: document.clone(),
        canvas: canvas.clone(),
        session: session.clone(),
        scheduler: scheduler.clone(),
        drag: Rc::new(RefCell::new(events::DragState::default())),
    };
    events::pointer::wire_pointer_handlers(&wiring);
    if let Some(slider) = &slider {
        events::slider::wire_slider(&wiring, slider);
    }
    if session.borrow().phase().is_some() {
        events::buttons::wire_game_buttons(&wiring);
    }
    overlay::sync_screens(&document, session.borrow().phase());

    let renderer = render::Renderer::new(&canvas)?;
    let shown_src = Some(image.src()).filter(|s| !s.is_empty());
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        session,
        canvas,
        image,
        slider,
        renderer,
        document,
        started: Instant::now(),
        shown_src,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
