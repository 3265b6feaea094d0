use crate::controls::ControlId;
use crate::params::sample_window_options;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// First element matching `selector`, cast to `T`.
pub fn query<T: JsCast>(document: &web::Document, selector: &str) -> anyhow::Result<T> {
    document
        .query_selector(selector)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("missing {}", selector))?
        .dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!("{} has the wrong type: {:?}", selector, e))
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("[dom] missing #{}", element_id);
    }
}

/// Canvas backing store follows the window's inner size.
pub fn sync_canvas_to_window(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let inner = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
            v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as u32
        };
        canvas.set_width(inner(w.inner_width()).max(1));
        canvas.set_height(inner(w.inner_height()).max(1));
    }
}

pub fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    sync_canvas_to_window(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        sync_canvas_to_window(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

/// Fills the sample-size select with every valid window and selects `current`.
pub fn populate_sample_select(document: &web::Document, current: u32) -> anyhow::Result<()> {
    let selector = format!("#{}", ControlId::SampleSize.element_id());
    let select: web::HtmlSelectElement = query(document, &selector)?;
    for window in sample_window_options() {
        let label = window.to_string();
        let option = document
            .create_element("option")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        option.set_text_content(Some(&label));
        option
            .set_attribute("value", &label)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        select
            .append_child(&option)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    }
    select.set_value(&current.to_string());
    Ok(())
}
