// Host-side tests for the control dispatch table.

use std::collections::HashSet;
use wavelines::controls::{is_play_pause_key, track_url};
use wavelines::{
    ControlEffect, ControlError, ControlId, ControlTable, InvertSign, ParamError, RenderMode,
    RenderParameters,
};

#[test]
fn every_control_is_bound_by_default() {
    let table = ControlTable::new();
    for id in ControlId::ALL {
        assert!(table.is_bound(id), "{id:?} unbound");
    }
    assert_eq!(table.controls().count(), ControlId::ALL.len());
}

#[test]
fn element_ids_are_unique() {
    let ids: HashSet<&str> = ControlId::ALL.iter().map(|c| c.element_id()).collect();
    assert_eq!(ids.len(), ControlId::ALL.len());
}

#[test]
fn sliders_listen_to_input_everything_else_to_change() {
    assert_eq!(ControlId::Width.event_name(), "input");
    assert_eq!(ControlId::Intensity.event_name(), "input");
    for id in [ControlId::Invert, ControlId::Song, ControlId::SampleSize, ControlId::Color] {
        assert_eq!(id.event_name(), "change");
    }
}

#[test]
fn checkbox_controls_toggle() {
    let table = ControlTable::new();
    let mut p = RenderParameters::default();

    table.apply(ControlId::Invert, "", &mut p).unwrap();
    assert_eq!(p.invert(), InvertSign::Inverted);
    table.apply(ControlId::Waveform, "", &mut p).unwrap();
    assert_eq!(p.mode(), RenderMode::Waveform);
    table.apply(ControlId::Dash, "", &mut p).unwrap();
    assert!(p.dashed());

    table.apply(ControlId::Invert, "", &mut p).unwrap();
    table.apply(ControlId::Waveform, "", &mut p).unwrap();
    table.apply(ControlId::Dash, "", &mut p).unwrap();
    assert_eq!(p, RenderParameters::default());
}

#[test]
fn reverb_reports_connection_effect() {
    let table = ControlTable::new();
    let mut p = RenderParameters::default();
    assert_eq!(
        table.apply(ControlId::Reverb, "", &mut p),
        Ok(ControlEffect::Reverb(true))
    );
    assert!(p.reverb());
    assert_eq!(
        table.apply(ControlId::Reverb, "", &mut p),
        Ok(ControlEffect::Reverb(false))
    );
    assert!(!p.reverb());
}

#[test]
fn song_select_loads_track_url() {
    let table = ControlTable::new();
    let mut p = RenderParameters::default();
    assert_eq!(
        table.apply(ControlId::Song, "nightcall", &mut p),
        Ok(ControlEffect::LoadTrack("music/nightcall.mp3".into()))
    );
    assert_eq!(
        table.apply(ControlId::Song, "  ", &mut p),
        Err(ControlError::EmptyTrack(ControlId::Song))
    );
    assert_eq!(track_url("a"), Some("music/a.mp3".into()));
    assert_eq!(track_url(""), None);
}

#[test]
fn value_controls_update_state() {
    let table = ControlTable::new();
    let mut p = RenderParameters::default();

    table.apply(ControlId::Color, "00ff00", &mut p).unwrap();
    assert_eq!(p.color().as_str(), "#00ff00");
    table.apply(ControlId::Width, "4", &mut p).unwrap();
    assert_eq!(p.stroke_width(), 4.0);
    table.apply(ControlId::Intensity, " 3.5 ", &mut p).unwrap();
    assert_eq!(p.intensity(), 3.5);
    table.apply(ControlId::SampleSize, "256", &mut p).unwrap();
    assert_eq!(p.sample_window(), 256);
    assert_eq!(p.line_count(), 3);
}

#[test]
fn rejected_values_leave_state_untouched() {
    let table = ControlTable::new();
    let mut p = RenderParameters::default();
    let before = p.clone();

    assert_eq!(
        table.apply(ControlId::SampleSize, "300", &mut p),
        Err(ControlError::Param(ParamError::InvalidSampleWindow(300)))
    );
    assert!(matches!(
        table.apply(ControlId::SampleSize, "lots", &mut p),
        Err(ControlError::NotANumber { control: ControlId::SampleSize, .. })
    ));
    assert!(matches!(
        table.apply(ControlId::Width, "", &mut p),
        Err(ControlError::NotANumber { control: ControlId::Width, .. })
    ));
    assert!(table.apply(ControlId::Intensity, "0", &mut p).is_err());
    assert!(table.apply(ControlId::Color, "not-a-color", &mut p).is_err());
    assert_eq!(p, before);
}

#[test]
fn unbound_control_is_an_error() {
    let table = ControlTable::empty();
    let mut p = RenderParameters::default();
    assert_eq!(
        table.apply(ControlId::Invert, "", &mut p),
        Err(ControlError::Unbound(ControlId::Invert))
    );
}

#[test]
fn handlers_can_be_rebound() {
    fn force_waveform(
        p: &mut RenderParameters,
        _: &str,
    ) -> Result<ControlEffect, ControlError> {
        p.set_mode(RenderMode::Waveform);
        Ok(ControlEffect::None)
    }

    let mut table = ControlTable::new();
    assert!(table.bind(ControlId::Waveform, force_waveform).is_some());
    let mut p = RenderParameters::default();
    table.apply(ControlId::Waveform, "", &mut p).unwrap();
    table.apply(ControlId::Waveform, "", &mut p).unwrap();
    assert_eq!(p.mode(), RenderMode::Waveform);
}

#[test]
fn play_pause_key() {
    assert!(is_play_pause_key(" "));
    assert!(!is_play_pause_key("p"));
    assert!(!is_play_pause_key("Enter"));
}
