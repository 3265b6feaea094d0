use crate::params::RenderParameters;
use crate::render::FrameRenderer;
use crate::sampler::AudioSampler;
use crate::surface::DrawSurface;
use std::ops::ControlFlow;

/// Sample-then-draw loop. Owns the per-frame sample buffer so it is reused
/// across frames instead of reallocated.
pub struct FrameLoop<S: AudioSampler> {
    sampler: S,
    renderer: FrameRenderer,
    buffer: Vec<u8>,
}

impl<S: AudioSampler> FrameLoop<S> {
    pub fn new(sampler: S) -> Self {
        Self {
            sampler,
            renderer: FrameRenderer::new(),
            buffer: Vec::new(),
        }
    }

    /// Samples of the most recent frame.
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    pub fn sampler_mut(&mut self) -> &mut S {
        &mut self.sampler
    }

    pub fn frames_rendered(&self) -> u64 {
        self.renderer.frames_rendered()
    }

    pub fn tick<D: DrawSurface + ?Sized>(&mut self, params: &RenderParameters, surface: &mut D) {
        self.sampler
            .sample(params.mode(), params.sample_window(), &mut self.buffer);
        self.renderer.render(surface, &self.buffer, params);
    }

    /// Renders frames until `present` breaks. `present` runs after each frame
    /// with the frame number and may change parameters for the next one, the
    /// same way control events interleave with animation frames in the page.
    pub fn drive<D, F>(&mut self, params: &mut RenderParameters, surface: &mut D, mut present: F) -> u64
    where
        D: DrawSurface + ?Sized,
        F: FnMut(u64, &mut RenderParameters, &mut D) -> ControlFlow<()>,
    {
        loop {
            self.tick(params, surface);
            let n = self.frames_rendered();
            if present(n, params, surface).is_break() {
                return n;
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web_loop::start_loop;

#[cfg(target_arch = "wasm32")]
mod web_loop {
    use super::FrameLoop;
    use crate::params::RenderParameters;
    use crate::sampler::AudioSampler;
    use crate::surface::DrawSurface;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;
    use web_sys as web;

    /// Drives `frame_loop` from `requestAnimationFrame`. The next frame is
    /// requested only after the current one has been drawn.
    pub fn start_loop<S, D>(
        mut frame_loop: FrameLoop<S>,
        params: Rc<RefCell<RenderParameters>>,
        mut surface: D,
    ) where
        S: AudioSampler + 'static,
        D: DrawSurface + 'static,
    {
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let tick_clone = tick.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            frame_loop.tick(&params.borrow(), &mut surface);
            if let Some(w) = web::window() {
                if let Some(cb) = tick_clone.borrow().as_ref() {
                    _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
                }
            }
        }) as Box<dyn FnMut()>));
        if let Some(w) = web::window() {
            if let Some(cb) = tick.borrow().as_ref() {
                _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }
        log::info!("[frame] render loop started");
    }
}
