use crate::constants::*;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    #[error("sample window {0} is not a power of two in [64, 8192)")]
    InvalidSampleWindow(u32),
    #[error("invalid hex color {0:?}")]
    InvalidColor(String),
    #[error("stroke width must be positive, got {0}")]
    InvalidStrokeWidth(f64),
    #[error("intensity must be positive, got {0}")]
    InvalidIntensity(f64),
}

/// Sign applied to frequency-mode amplitudes before they are subtracted
/// from the line baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvertSign {
    #[default]
    Normal,
    Inverted,
}

impl InvertSign {
    #[inline]
    pub fn factor(self) -> f64 {
        match self {
            InvertSign::Normal => 1.0,
            InvertSign::Inverted => -1.0,
        }
    }

    #[inline]
    pub fn flipped(self) -> Self {
        match self {
            InvertSign::Normal => InvertSign::Inverted,
            InvertSign::Inverted => InvertSign::Normal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    #[default]
    Frequency,
    Waveform,
}

impl RenderMode {
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            RenderMode::Frequency => RenderMode::Waveform,
            RenderMode::Waveform => RenderMode::Frequency,
        }
    }

    /// Number of samples the analyser hands back for this mode.
    #[inline]
    pub fn buffer_len(self, sample_window: u32) -> usize {
        match self {
            RenderMode::Frequency => sample_window as usize / 2,
            RenderMode::Waveform => sample_window as usize,
        }
    }
}

/// CSS hex color, normalized to carry a leading `#`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrokeColor(String);

impl StrokeColor {
    /// Accepts `rgb`, `rrggbb`, `#rgb` and `#rrggbb` (the color picker
    /// reports its value without the hash).
    pub fn parse(raw: &str) -> Result<Self, ParamError> {
        let trimmed = raw.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let valid_len = digits.len() == 3 || digits.len() == 6;
        if !valid_len || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParamError::InvalidColor(raw.to_string()));
        }
        Ok(Self(format!("#{}", digits.to_ascii_lowercase())))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for StrokeColor {
    fn default() -> Self {
        Self(DEFAULT_COLOR.to_string())
    }
}

#[inline]
pub fn is_valid_sample_window(sample_window: u32) -> bool {
    sample_window.is_power_of_two()
        && (SAMPLE_WINDOW_MIN..SAMPLE_WINDOW_MAX_EXCLUSIVE).contains(&sample_window)
}

/// Lines rendered for a window size, minus the lowest lines that barely move.
#[inline]
pub fn line_count_for(sample_window: u32) -> usize {
    let raw = sample_window as usize / LINES_PER_GROUP / 2;
    raw - (raw as f64 / STATIC_LINE_RATIO).floor() as usize
}

/// Every selectable window size, smallest first.
pub fn sample_window_options() -> impl Iterator<Item = u32> {
    std::iter::successors(Some(SAMPLE_WINDOW_MIN), |w| w.checked_mul(2))
        .take_while(|w| *w < SAMPLE_WINDOW_MAX_EXCLUSIVE)
}

/// Render state shared between the control handlers and the frame loop.
///
/// `line_count` is derived from `sample_window` and is only ever written by
/// [`RenderParameters::set_sample_window`], so the two can never disagree.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderParameters {
    invert: InvertSign,
    mode: RenderMode,
    dashed: bool,
    color: StrokeColor,
    stroke_width: f64,
    intensity: f64,
    sample_window: u32,
    line_count: usize,
    reverb: bool,
}

impl Default for RenderParameters {
    fn default() -> Self {
        Self {
            invert: InvertSign::Normal,
            mode: RenderMode::Frequency,
            dashed: false,
            color: StrokeColor::default(),
            stroke_width: DEFAULT_STROKE_WIDTH,
            intensity: DEFAULT_INTENSITY,
            sample_window: SAMPLE_WINDOW_DEFAULT,
            line_count: line_count_for(SAMPLE_WINDOW_DEFAULT),
            reverb: false,
        }
    }
}

impl RenderParameters {
    pub fn invert(&self) -> InvertSign {
        self.invert
    }
    pub fn mode(&self) -> RenderMode {
        self.mode
    }
    pub fn dashed(&self) -> bool {
        self.dashed
    }
    pub fn color(&self) -> &StrokeColor {
        &self.color
    }
    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }
    pub fn intensity(&self) -> f64 {
        self.intensity
    }
    pub fn sample_window(&self) -> u32 {
        self.sample_window
    }
    pub fn lines_per_group(&self) -> usize {
        LINES_PER_GROUP
    }
    pub fn line_count(&self) -> usize {
        self.line_count
    }
    pub fn reverb(&self) -> bool {
        self.reverb
    }

    /// Dash pattern for the canvas; empty means a solid stroke.
    pub fn dash_pattern(&self) -> &'static [f64] {
        if self.dashed {
            &DASH_PATTERN
        } else {
            &[]
        }
    }

    pub fn toggle_invert(&mut self) {
        self.invert = self.invert.flipped();
        log::debug!("[params] invert={:?}", self.invert);
    }

    pub fn set_mode(&mut self, mode: RenderMode) {
        self.mode = mode;
        log::debug!("[params] mode={:?}", self.mode);
    }

    pub fn toggle_mode(&mut self) {
        self.set_mode(self.mode.toggled());
    }

    pub fn set_dashed(&mut self, dashed: bool) {
        self.dashed = dashed;
        log::debug!("[params] dashed={}", self.dashed);
    }

    pub fn toggle_dashed(&mut self) {
        self.set_dashed(!self.dashed);
    }

    pub fn set_color(&mut self, color: StrokeColor) {
        log::debug!("[params] color={}", color.as_str());
        self.color = color;
    }

    pub fn set_stroke_width(&mut self, width: f64) -> Result<(), ParamError> {
        if !(width.is_finite() && width > 0.0) {
            return Err(ParamError::InvalidStrokeWidth(width));
        }
        self.stroke_width = width;
        log::debug!("[params] stroke_width={}", self.stroke_width);
        Ok(())
    }

    pub fn set_intensity(&mut self, intensity: f64) -> Result<(), ParamError> {
        if !(intensity.is_finite() && intensity > 0.0) {
            return Err(ParamError::InvalidIntensity(intensity));
        }
        self.intensity = intensity;
        log::debug!("[params] intensity={}", self.intensity);
        Ok(())
    }

    /// Changes the analysis window and recomputes the line count in the same
    /// step, so the next frame always sees a consistent pair.
    pub fn set_sample_window(&mut self, sample_window: u32) -> Result<(), ParamError> {
        if !is_valid_sample_window(sample_window) {
            return Err(ParamError::InvalidSampleWindow(sample_window));
        }
        self.sample_window = sample_window;
        self.line_count = line_count_for(sample_window);
        log::debug!(
            "[params] sample_window={} line_count={}",
            self.sample_window,
            self.line_count
        );
        Ok(())
    }

    pub fn set_reverb(&mut self, on: bool) {
        self.reverb = on;
        log::debug!("[params] reverb={}", self.reverb);
    }

    pub fn toggle_reverb(&mut self) -> bool {
        self.set_reverb(!self.reverb);
        self.reverb
    }
}
