use crate::audio::AudioGraph;
use crate::controls::{ControlEffect, ControlId, ControlTable};
use crate::params::RenderParameters;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct ControlWiring {
    pub document: web::Document,
    pub params: Rc<RefCell<RenderParameters>>,
    pub table: Rc<ControlTable>,
    pub graph: Rc<AudioGraph>,
    pub audio_el: web::HtmlMediaElement,
}

pub fn wire_controls(w: ControlWiring) {
    for id in ControlId::ALL {
        wire_control(&w, id);
    }
}

fn wire_control(w: &ControlWiring, id: ControlId) {
    let Some(el) = w.document.get_element_by_id(id.element_id()) else {
        log::warn!("[controls] missing #{}", id.element_id());
        return;
    };
    let w = w.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::Event| {
        let value = if id.is_toggle() {
            String::new()
        } else {
            control_value(&ev)
        };
        let result = w.table.apply(id, &value, &mut w.params.borrow_mut());
        match result {
            Ok(effect) => apply_effect(effect, &w.graph, &w.audio_el),
            Err(e) => log::warn!("[controls] {}", e),
        }
    }) as Box<dyn FnMut(_)>);
    _ = el.add_event_listener_with_callback(id.event_name(), closure.as_ref().unchecked_ref());
    closure.forget();
}

fn control_value(ev: &web::Event) -> String {
    let Some(target) = ev.target() else {
        return String::new();
    };
    if let Some(input) = target.dyn_ref::<web::HtmlInputElement>() {
        return input.value();
    }
    if let Some(select) = target.dyn_ref::<web::HtmlSelectElement>() {
        return select.value();
    }
    String::new()
}

fn apply_effect(effect: ControlEffect, graph: &AudioGraph, audio_el: &web::HtmlMediaElement) {
    match effect {
        ControlEffect::None => {}
        ControlEffect::Reverb(on) => graph.set_reverb(on),
        ControlEffect::LoadTrack(url) => {
            log::info!("[controls] loading {}", url);
            audio_el.set_src(&url);
        }
    }
}
