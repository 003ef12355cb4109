use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn element_as<T: JsCast>(document: &web::Document, element_id: &str) -> Option<T> {
    document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    match document.get_element_by_id(element_id) {
        Some(el) => {
            let closure = wasm_bindgen::closure::Closure::wrap(
                Box::new(move || handler()) as Box<dyn FnMut()>
            );
            _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
        None => log::warn!("[dom] no #{} to wire", element_id),
    }
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Stage list from `<img class="stage-image" data-stage-id=".." src="..">`.
pub fn collect_stage_images(document: &web::Document, selector: &str) -> Vec<(String, String)> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<web::HtmlImageElement>().ok())
        .enumerate()
        .map(|(i, img)| {
            let id = img
                .get_attribute("data-stage-id")
                .unwrap_or_else(|| format!("stage-{}", i + 1));
            (id, img.src())
        })
        .collect()
}
