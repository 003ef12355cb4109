pub mod buttons;
pub mod pointer;
pub mod slider;

use crate::scheduler::RafScheduler;
use crate::session::Session;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Default, Clone, Copy)]
pub struct DragState {
    pub active: bool,
    pub last_x: f64,
}

/// Everything an input handler needs to reach the session.
#[derive(Clone)]
pub struct InputWiring {
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub session: Rc<RefCell<Session>>,
    pub scheduler: RafScheduler,
    pub drag: Rc<RefCell<DragState>>,
}
