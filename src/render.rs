use crate::constants::*;
use crate::params::{RenderMode, RenderParameters};
use crate::surface::DrawSurface;
use glam::DVec2;

pub type Polyline = Vec<DVec2>;

/// Where a sample index sits within a frequency line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Margin,
    Middle,
}

#[inline]
fn quarter() -> usize {
    LINES_PER_GROUP / 4
}

#[inline]
pub fn classify(j: usize) -> Region {
    let q = quarter();
    if j < q || j > 3 * q {
        Region::Margin
    } else {
        Region::Middle
    }
}

/// Extra divisor applied around the margin/middle seams. Ramps 5, 5/2,
/// 5/3, 5/4 going into the middle and the mirror image coming out of it;
/// 1.0 everywhere else.
pub fn transition_divisor(j: usize) -> f64 {
    let lower = quarter();
    let upper = 3 * quarter();
    let mut divisor = 1.0;
    if (lower..=lower + TRANSITION_LENGTH).contains(&j) {
        let step = j - lower + 1;
        divisor *= TRANSITION_PEAK / step as f64;
    }
    if (upper - TRANSITION_LENGTH..=upper).contains(&j) {
        let step = upper - j + 1;
        divisor *= TRANSITION_PEAK / step as f64;
    }
    divisor
}

/// Scaled amplitude of sample `j` of a frequency line.
pub fn attenuate(sample: u8, j: usize, intensity: f64) -> f64 {
    let mut value = sample as f64;
    value /= match classify(j) {
        Region::Margin => MARGIN_ATTENUATION * intensity,
        Region::Middle => intensity,
    };
    value / transition_divisor(j)
}

#[inline]
pub fn canvas_center<S: DrawSurface + ?Sized>(surface: &S) -> DVec2 {
    DVec2::new(surface.width() / 2.0, surface.height() / 2.0)
}

/// One polyline per group of `LINES_PER_GROUP` bins, stacked downwards from
/// `cy / 2`. Bin 0 of each group is not plotted.
pub fn frequency_polylines(
    buffer: &[u8],
    params: &RenderParameters,
    center: DVec2,
) -> Vec<Polyline> {
    let invert = params.invert().factor();
    let intensity = params.intensity();
    buffer
        .chunks_exact(LINES_PER_GROUP)
        .take(params.line_count())
        .enumerate()
        .map(|(i, group)| {
            let y_offset = center.y / 2.0 + (i as f64 * center.y) / FREQ_LINE_SPACING_DIVISOR;
            (1..LINES_PER_GROUP)
                .map(|j| {
                    let value = attenuate(group[j], j, intensity);
                    DVec2::new(
                        center.x / 2.0 + j as f64 * center.x / FREQ_X_STEP_DIVISOR,
                        y_offset - value * invert,
                    )
                })
                .collect()
        })
        .collect()
}

/// `line_count / 4` copies of the whole waveform, each shifted down by
/// `cy / 15`. Samples are plotted raw: no invert, no intensity.
pub fn waveform_polylines(
    buffer: &[u8],
    params: &RenderParameters,
    center: DVec2,
) -> Vec<Polyline> {
    let bands = params.line_count() / WAVEFORM_BAND_DIVISOR;
    let len = buffer.len() as f64;
    (0..bands)
        .map(|i| {
            let y_offset = center.y + (i as f64 * center.y) / WAVE_BAND_SPACING_DIVISOR;
            buffer
                .iter()
                .enumerate()
                .map(|(k, &sample)| {
                    DVec2::new(
                        center.x / 2.0 + k as f64 * center.x / len,
                        y_offset - sample as f64,
                    )
                })
                .collect()
        })
        .collect()
}

pub fn polylines_for(buffer: &[u8], params: &RenderParameters, center: DVec2) -> Vec<Polyline> {
    match params.mode() {
        RenderMode::Frequency => frequency_polylines(buffer, params, center),
        RenderMode::Waveform => waveform_polylines(buffer, params, center),
    }
}

/// Strokes one frame of line graphics onto a surface.
#[derive(Debug, Default)]
pub struct FrameRenderer {
    frames: u64,
}

impl FrameRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames
    }

    pub fn render<S: DrawSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        buffer: &[u8],
        params: &RenderParameters,
    ) {
        let center = canvas_center(&*surface);
        surface.clear();
        surface.set_stroke_style(params.color().as_str());
        surface.set_line_width(params.stroke_width());

        let dash = params.dash_pattern();
        for line in polylines_for(buffer, params, center) {
            surface.set_line_dash(dash);
            surface.begin_path();
            for p in &line {
                surface.line_to(p.x, p.y);
            }
            surface.stroke();
        }
        self.frames += 1;
    }
}
