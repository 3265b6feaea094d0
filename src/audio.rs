use crate::constants::{REVERB_CHANNELS, REVERB_SECONDS};
use crate::params::RenderMode;
use crate::reverb;
use crate::sampler::AudioSampler;
use std::cell::Cell;
use wasm_bindgen::JsValue;
use web_sys as web;

fn js_err(label: &'static str) -> impl Fn(JsValue) -> anyhow::Error {
    move |e| anyhow::anyhow!("{} error: {:?}", label, e)
}

/// media element -> analyser -> destination, plus a convolver fed by the
/// same source that only reaches the destination while reverb is on.
pub struct AudioGraph {
    pub ctx: web::AudioContext,
    pub analyser: web::AnalyserNode,
    pub convolver: web::ConvolverNode,
    reverb_connected: Cell<bool>,
}

impl AudioGraph {
    pub fn build(audio_el: &web::HtmlMediaElement, sample_window: u32) -> anyhow::Result<Self> {
        let ctx = web::AudioContext::new().map_err(js_err("AudioContext"))?;
        _ = ctx.resume();

        let analyser = ctx.create_analyser().map_err(js_err("AnalyserNode"))?;
        analyser.set_fft_size(sample_window);
        let source = ctx
            .create_media_element_source(audio_el)
            .map_err(js_err("MediaElementAudioSourceNode"))?;
        source
            .connect_with_audio_node(&analyser)
            .map_err(js_err("source -> analyser"))?;
        analyser
            .connect_with_audio_node(&ctx.destination())
            .map_err(js_err("analyser -> destination"))?;

        let convolver = ctx.create_convolver().map_err(js_err("ConvolverNode"))?;
        let impulse = build_noise_impulse(&ctx)?;
        convolver.set_buffer(Some(&impulse));
        source
            .connect_with_audio_node(&convolver)
            .map_err(js_err("source -> convolver"))?;

        log::info!(
            "[audio] graph ready: sample_rate={} fft_size={}",
            ctx.sample_rate(),
            analyser.fft_size()
        );
        Ok(Self {
            ctx,
            analyser,
            convolver,
            reverb_connected: Cell::new(false),
        })
    }

    /// Routes the convolver to the destination or removes it again.
    /// Repeated calls with the same value are no-ops.
    pub fn set_reverb(&self, on: bool) {
        if self.reverb_connected.get() == on {
            return;
        }
        let destination = self.ctx.destination();
        let result = if on {
            self.convolver
                .connect_with_audio_node(&destination)
                .map(|_| ())
        } else {
            self.convolver.disconnect_with_audio_node(&destination)
        };
        match result {
            Ok(()) => {
                self.reverb_connected.set(on);
                log::info!("[audio] reverb={}", on);
            }
            Err(e) => log::error!("[audio] reverb toggle failed: {:?}", e),
        }
    }
}

fn build_noise_impulse(ctx: &web::AudioContext) -> anyhow::Result<web::AudioBuffer> {
    let sr = ctx.sample_rate();
    let len = reverb::impulse_len(sr, REVERB_SECONDS);
    let ir = ctx
        .create_buffer(REVERB_CHANNELS, len as u32, sr)
        .map_err(js_err("AudioBuffer"))?;
    let mut rng = rand::thread_rng();
    let channels = reverb::noise_impulse(REVERB_CHANNELS as usize, len, &mut rng);
    for (ch, mut samples) in channels.into_iter().enumerate() {
        ir.copy_to_channel(&mut samples, ch as i32)
            .map_err(js_err("AudioBuffer channel copy"))?;
    }
    Ok(ir)
}

/// Reads byte frequency or time-domain data from the graph's analyser.
pub struct AnalyserSampler {
    analyser: web::AnalyserNode,
}

impl AnalyserSampler {
    pub fn new(analyser: web::AnalyserNode) -> Self {
        Self { analyser }
    }
}

impl AudioSampler for AnalyserSampler {
    fn sample(&mut self, mode: RenderMode, sample_window: u32, out: &mut Vec<u8>) {
        if self.analyser.fft_size() != sample_window {
            self.analyser.set_fft_size(sample_window);
        }
        out.clear();
        out.resize(mode.buffer_len(sample_window), 0);
        match mode {
            RenderMode::Frequency => self.analyser.get_byte_frequency_data(out),
            RenderMode::Waveform => self.analyser.get_byte_time_domain_data(out),
        }
    }
}
