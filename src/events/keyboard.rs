use crate::constants::CLICK_BAR_ID;
use crate::controls::is_play_pause_key;
use crate::dom;
use crate::overlay;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

fn toggle_playback(audio_el: &web::HtmlMediaElement) {
    if !audio_el.paused() {
        _ = audio_el.pause();
        log::info!("[keys] paused");
        return;
    }
    match audio_el.play() {
        Ok(promise) => spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                log::warn!("[keys] play rejected: {:?}", e);
            }
        }),
        Err(e) => log::warn!("[keys] play failed: {:?}", e),
    }
}

pub fn wire_play_pause_key(audio_el: web::HtmlMediaElement) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                if is_play_pause_key(&ev.key()) {
                    toggle_playback(&audio_el);
                    ev.prevent_default();
                }
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub fn wire_controls_minimizer(document: &web::Document) {
    let doc = document.clone();
    dom::add_click_listener(document, CLICK_BAR_ID, move || overlay::toggle_controls(&doc));
}
