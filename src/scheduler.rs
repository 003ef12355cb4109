use crate::core::{FrameHandle, FrameScheduler};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `FrameScheduler` backed by `requestAnimationFrame`.
///
/// Clones share one callback; the callback is installed once during init and
/// every request re-arms it for the next display frame.
#[derive(Clone, Default)]
pub struct RafScheduler {
    callback: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
}

impl RafScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_callback(&self, f: impl FnMut(f64) + 'static) {
        *self.callback.borrow_mut() = Some(Closure::wrap(Box::new(f) as Box<dyn FnMut(f64)>));
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        match (web::window(), self.callback.borrow().as_ref()) {
            (Some(w), Some(cb)) => w
                .request_animation_frame(cb.as_ref().unchecked_ref())
                .map(FrameHandle)
                .map_err(|e| log::error!("[raf] request failed: {:?}", e))
                .ok(),
            _ => {
                log::error!("[raf] no window or callback for frame request");
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if let Some(w) = web::window() {
            _ = w.cancel_animation_frame(handle.0);
        }
    }
}
