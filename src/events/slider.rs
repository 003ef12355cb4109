use super::InputWiring;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Range input spanning one full turn, mapped straight onto the angle.
pub fn wire_slider(w: &InputWiring, slider: &web::HtmlInputElement) {
    let w = w.clone();
    let slider_for_closure = slider.clone();

    let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
        let raw = slider_for_closure.value();
        match raw.parse::<f64>() {
            Ok(value) => {
                let mut sched = w.scheduler.clone();
                if !w.session.borrow_mut().set_angle(value, &mut sched) {
                    log::debug!("[slider] input rejected");
                }
            }
            Err(_) => log::warn!("[slider] unparsable value {:?}", raw),
        }
    }) as Box<dyn FnMut(_)>);
    _ = slider.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
    closure.forget();
}
