use crate::params::RenderMode;
use std::f64::consts::TAU;

/// Source of one frame of analyser bytes.
///
/// Implementations set the analysis window to `sample_window` before
/// reading and resize `out` to [`RenderMode::buffer_len`]. Nothing is
/// carried between calls; a source with no audio playing yields silence.
pub trait AudioSampler {
    fn sample(&mut self, mode: RenderMode, sample_window: u32, out: &mut Vec<u8>);
}

/// Deterministic stand-in for the analyser: a decaying spectrum with a
/// moving ripple, or a four-cycle sine, advancing one step per call.
#[derive(Debug, Clone)]
pub struct SyntheticSampler {
    phase: f64,
    step: f64,
    amplitude: f64,
}

impl Default for SyntheticSampler {
    fn default() -> Self {
        Self {
            phase: 0.0,
            step: 0.1,
            amplitude: 1.0,
        }
    }
}

impl SyntheticSampler {
    pub fn new(step: f64, amplitude: f64) -> Self {
        Self {
            phase: 0.0,
            step,
            amplitude: amplitude.clamp(0.0, 1.0),
        }
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }
}

impl AudioSampler for SyntheticSampler {
    fn sample(&mut self, mode: RenderMode, sample_window: u32, out: &mut Vec<u8>) {
        let len = mode.buffer_len(sample_window);
        out.clear();
        out.reserve(len);
        let n = len.max(1) as f64;
        match mode {
            RenderMode::Frequency => {
                for k in 0..len {
                    let t = k as f64 / n;
                    let ripple = 0.6 + 0.4 * (self.phase + k as f64 * 0.3).sin();
                    let v = 255.0 * self.amplitude * (-4.0 * t).exp() * ripple;
                    out.push(v.clamp(0.0, 255.0) as u8);
                }
            }
            RenderMode::Waveform => {
                for k in 0..len {
                    let t = k as f64 / n;
                    let wave = (t * TAU * 4.0 + self.phase).sin();
                    let v = 128.0 + wave * 64.0 * self.amplitude;
                    out.push(v.clamp(0.0, 255.0) as u8);
                }
            }
        }
        self.phase += self.step;
    }
}
