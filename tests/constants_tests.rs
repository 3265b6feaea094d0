// Host-side tests for constants and their relationships.

use wavelines::constants::*;
use wavelines::params::is_valid_sample_window;

#[test]
#[allow(clippy::assertions_on_constants)]
fn margin_math_needs_a_divisible_group() {
    assert!(LINES_PER_GROUP >= 4);
    assert_eq!(LINES_PER_GROUP % 4, 0);
    // both transition ramps fit inside the middle region
    assert!(LINES_PER_GROUP / 4 + TRANSITION_LENGTH < 3 * LINES_PER_GROUP / 4 - TRANSITION_LENGTH);
}

#[test]
fn default_window_is_selectable() {
    assert!(is_valid_sample_window(SAMPLE_WINDOW_DEFAULT));
    assert!(SAMPLE_WINDOW_MIN.is_power_of_two());
    assert!(SAMPLE_WINDOW_MAX_EXCLUSIVE.is_power_of_two());
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn stroke_defaults_are_positive() {
    assert!(DEFAULT_STROKE_WIDTH > 0.0);
    assert!(DEFAULT_INTENSITY > 0.0);
    assert!(MARGIN_ATTENUATION > 1.0);
    assert!(TRANSITION_PEAK > 1.0);
    assert!(DASH_PATTERN.iter().all(|v| *v > 0.0));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn reverb_impulse_is_stereo_and_long() {
    assert_eq!(REVERB_CHANNELS, 2);
    assert!(REVERB_SECONDS > 0.0);
}
