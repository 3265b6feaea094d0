//! Control identifiers and the table of state updates they trigger.
//!
//! Handlers are plain functions over [`RenderParameters`], so the whole
//! control surface can be exercised without a page. Anything that has to
//! touch the audio graph or the media element comes back as a
//! [`ControlEffect`] for the browser layer to carry out.

use crate::constants::{TRACK_DIR, TRACK_EXT};
use crate::params::{ParamError, RenderParameters, StrokeColor};
use fnv::FnvHashMap;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlId {
    Invert,
    Waveform,
    Reverb,
    Dash,
    Song,
    Color,
    SampleSize,
    Width,
    Intensity,
}

impl ControlId {
    pub const ALL: [ControlId; 9] = [
        ControlId::Invert,
        ControlId::Waveform,
        ControlId::Reverb,
        ControlId::Dash,
        ControlId::Song,
        ControlId::Color,
        ControlId::SampleSize,
        ControlId::Width,
        ControlId::Intensity,
    ];

    pub fn element_id(self) -> &'static str {
        match self {
            ControlId::Invert => "invertCheck",
            ControlId::Waveform => "waveformCheck",
            ControlId::Reverb => "reverbCheck",
            ControlId::Dash => "dashCheck",
            ControlId::Song => "songSelect",
            ControlId::Color => "hexPicker",
            ControlId::SampleSize => "sampleSelect",
            ControlId::Width => "widthSlider",
            ControlId::Intensity => "intensitySlider",
        }
    }

    /// DOM event the control reports changes with. Sliders update live.
    pub fn event_name(self) -> &'static str {
        match self {
            ControlId::Width | ControlId::Intensity => "input",
            _ => "change",
        }
    }

    /// Checkboxes flip state on every change and ignore the element value.
    pub fn is_toggle(self) -> bool {
        matches!(
            self,
            ControlId::Invert | ControlId::Waveform | ControlId::Reverb | ControlId::Dash
        )
    }
}

/// Side effect a control change asks of the audio layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlEffect {
    None,
    /// Connect (`true`) or disconnect the convolver from the destination.
    Reverb(bool),
    /// Point the audio element at a new source URL.
    LoadTrack(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ControlError {
    #[error("no handler bound for {0:?}")]
    Unbound(ControlId),
    #[error("{control:?}: {value:?} is not a number")]
    NotANumber { control: ControlId, value: String },
    #[error("{0:?}: empty track name")]
    EmptyTrack(ControlId),
    #[error(transparent)]
    Param(#[from] ParamError),
}

pub type Handler = fn(&mut RenderParameters, &str) -> Result<ControlEffect, ControlError>;

/// Maps each control to the state update it performs.
pub struct ControlTable {
    handlers: FnvHashMap<ControlId, Handler>,
}

impl Default for ControlTable {
    fn default() -> Self {
        let mut table = Self::empty();
        table.bind(ControlId::Invert, on_invert);
        table.bind(ControlId::Waveform, on_waveform);
        table.bind(ControlId::Reverb, on_reverb);
        table.bind(ControlId::Dash, on_dash);
        table.bind(ControlId::Song, on_song);
        table.bind(ControlId::Color, on_color);
        table.bind(ControlId::SampleSize, on_sample_size);
        table.bind(ControlId::Width, on_width);
        table.bind(ControlId::Intensity, on_intensity);
        table
    }
}

impl ControlTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn empty() -> Self {
        Self {
            handlers: FnvHashMap::default(),
        }
    }

    /// Installs `handler` for `id`, returning the one it replaced.
    pub fn bind(&mut self, id: ControlId, handler: Handler) -> Option<Handler> {
        self.handlers.insert(id, handler)
    }

    pub fn is_bound(&self, id: ControlId) -> bool {
        self.handlers.contains_key(&id)
    }

    pub fn controls(&self) -> impl Iterator<Item = ControlId> + '_ {
        self.handlers.keys().copied()
    }

    /// Runs the handler for `id`. On error `params` is left as it was.
    pub fn apply(
        &self,
        id: ControlId,
        value: &str,
        params: &mut RenderParameters,
    ) -> Result<ControlEffect, ControlError> {
        let handler = self.handlers.get(&id).ok_or(ControlError::Unbound(id))?;
        handler(params, value)
    }
}

/// Relative URL of a bundled track.
pub fn track_url(name: &str) -> Option<String> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    Some(format!("{TRACK_DIR}{name}{TRACK_EXT}"))
}

fn parse_number(control: ControlId, value: &str) -> Result<f64, ControlError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| ControlError::NotANumber {
            control,
            value: value.to_string(),
        })
}

fn on_invert(params: &mut RenderParameters, _: &str) -> Result<ControlEffect, ControlError> {
    params.toggle_invert();
    Ok(ControlEffect::None)
}

fn on_waveform(params: &mut RenderParameters, _: &str) -> Result<ControlEffect, ControlError> {
    params.toggle_mode();
    Ok(ControlEffect::None)
}

fn on_reverb(params: &mut RenderParameters, _: &str) -> Result<ControlEffect, ControlError> {
    Ok(ControlEffect::Reverb(params.toggle_reverb()))
}

fn on_dash(params: &mut RenderParameters, _: &str) -> Result<ControlEffect, ControlError> {
    params.toggle_dashed();
    Ok(ControlEffect::None)
}

fn on_song(_: &mut RenderParameters, value: &str) -> Result<ControlEffect, ControlError> {
    track_url(value)
        .map(ControlEffect::LoadTrack)
        .ok_or(ControlError::EmptyTrack(ControlId::Song))
}

fn on_color(params: &mut RenderParameters, value: &str) -> Result<ControlEffect, ControlError> {
    params.set_color(StrokeColor::parse(value)?);
    Ok(ControlEffect::None)
}

fn on_sample_size(
    params: &mut RenderParameters,
    value: &str,
) -> Result<ControlEffect, ControlError> {
    let window = value
        .trim()
        .parse::<u32>()
        .map_err(|_| ControlError::NotANumber {
            control: ControlId::SampleSize,
            value: value.to_string(),
        })?;
    params.set_sample_window(window)?;
    Ok(ControlEffect::None)
}

fn on_width(params: &mut RenderParameters, value: &str) -> Result<ControlEffect, ControlError> {
    params.set_stroke_width(parse_number(ControlId::Width, value)?)?;
    Ok(ControlEffect::None)
}

fn on_intensity(
    params: &mut RenderParameters,
    value: &str,
) -> Result<ControlEffect, ControlError> {
    params.set_intensity(parse_number(ControlId::Intensity, value)?)?;
    Ok(ControlEffect::None)
}

/// Space bar toggles playback of the audio element.
#[inline]
pub fn is_play_pause_key(key: &str) -> bool {
    key == " " || key == "Spacebar"
}
