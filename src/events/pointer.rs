use super::InputWiring;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_pointer_handlers(w: &InputWiring) {
    wire_pointerdown(w);
    wire_pointermove(w);
    wire_pointerup(w, "pointerup");
    wire_pointerup(w, "pointercancel");
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let mut sched = w.scheduler.clone();
        if w.session.borrow_mut().begin_drag(&mut sched) {
            let mut ds = w.drag.borrow_mut();
            ds.active = true;
            ds.last_x = ev.client_x() as f64;
            _ = w.canvas.set_pointer_capture(ev.pointer_id());
            log::debug!("[pointer] begin drag at x={}", ev.client_x());
        }
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let dx = {
            let mut ds = w.drag.borrow_mut();
            if !ds.active {
                return;
            }
            let x = ev.client_x() as f64;
            let dx = x - ds.last_x;
            ds.last_x = x;
            dx
        };
        if dx != 0.0 {
            let mut sched = w.scheduler.clone();
            w.session.borrow_mut().drag_by(dx, &mut sched);
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerup(w: &InputWiring, event_name: &str) {
    let w = w.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let was_dragging = std::mem::take(&mut w.drag.borrow_mut().active);
        if was_dragging {
            let mut sched = w.scheduler.clone();
            w.session.borrow_mut().end_drag(&mut sched);
            _ = w.canvas.release_pointer_capture(ev.pointer_id());
            log::debug!("[pointer] end drag");
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback(event_name, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
