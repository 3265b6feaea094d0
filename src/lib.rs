//! Line-graphics audio visualizer.
//!
//! The rendering core (parameters, controls, renderer, frame loop) is plain
//! Rust and builds on any target; the browser glue that wires it to
//! WebAudio and a canvas is compiled for `wasm32` only.

pub mod constants;
pub mod controls;
pub mod frame;
pub mod params;
pub mod render;
pub mod reverb;
pub mod sampler;
pub mod surface;

#[cfg(target_arch = "wasm32")]
mod audio;
#[cfg(target_arch = "wasm32")]
mod canvas;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod overlay;

pub use controls::{ControlEffect, ControlError, ControlId, ControlTable};
pub use frame::FrameLoop;
pub use params::{InvertSign, ParamError, RenderMode, RenderParameters, StrokeColor};
pub use render::FrameRenderer;
pub use sampler::{AudioSampler, SyntheticSampler};
pub use surface::{DrawCommand, DrawSurface, RecordingSurface};

#[cfg(target_arch = "wasm32")]
mod web_app {
    use crate::constants::START_BUTTON_ID;
    use crate::controls::ControlTable;
    use crate::frame::{self, FrameLoop};
    use crate::params::RenderParameters;
    use crate::{audio, canvas, dom, events, overlay};
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use wasm_bindgen::prelude::*;
    use web_sys as web;

    // Browsers refuse to start an AudioContext before a user gesture, so
    // everything below waits for the start button.
    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("wavelines starting");

        static STARTED: AtomicBool = AtomicBool::new(false);
        if let Some(document) = dom::window_document() {
            dom::add_click_listener(&document, START_BUTTON_ID, move || {
                if STARTED.swap(true, Ordering::SeqCst) {
                    return;
                }
                if let Err(e) = init() {
                    log::error!("init error: {:?}", e);
                }
            });
        }
        Ok(())
    }

    fn init() -> anyhow::Result<()> {
        let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

        let canvas: web::HtmlCanvasElement = dom::query(&document, "canvas")?;
        dom::wire_canvas_resize(&canvas);
        let audio_el: web::HtmlMediaElement = dom::query(&document, "audio")?;

        let params = Rc::new(RefCell::new(RenderParameters::default()));
        let sample_window = params.borrow().sample_window();
        let graph = Rc::new(audio::AudioGraph::build(&audio_el, sample_window)?);

        if let Err(e) = dom::populate_sample_select(&document, sample_window) {
            log::warn!("[dom] sample select: {:?}", e);
        }
        events::wire_controls(events::ControlWiring {
            document: document.clone(),
            params: params.clone(),
            table: Rc::new(ControlTable::new()),
            graph: graph.clone(),
            audio_el: audio_el.clone(),
        });
        events::wire_play_pause_key(audio_el);
        events::wire_controls_minimizer(&document);
        overlay::hide_start_button(&document);

        let surface = canvas::CanvasSurface::new(canvas)?;
        let sampler = audio::AnalyserSampler::new(graph.analyser.clone());
        frame::start_loop(FrameLoop::new(sampler), params, surface);
        Ok(())
    }
}
