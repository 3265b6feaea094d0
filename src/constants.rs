/// Visual and audio tuning constants for the line renderer.
///
/// Geometry divisors are expressed relative to the canvas center so the
/// picture scales with the window.

// Analysis window (fftSize) bounds and default
pub const SAMPLE_WINDOW_DEFAULT: u32 = 4096;
pub const SAMPLE_WINDOW_MIN: u32 = 64;
pub const SAMPLE_WINDOW_MAX_EXCLUSIVE: u32 = 8192;

// Line grouping
pub const LINES_PER_GROUP: usize = 32; // frequency bins per rendered line
pub const STATIC_LINE_RATIO: f64 = 3.5; // drops the low, mostly static lines
pub const WAVEFORM_BAND_DIVISOR: usize = 4; // waveform bands = line count / 4

// Margin/middle attenuation
pub const MARGIN_ATTENUATION: f64 = 10.0;
pub const TRANSITION_LENGTH: usize = 3;
pub const TRANSITION_PEAK: f64 = 5.0;

// Frequency-mode layout
pub const FREQ_LINE_SPACING_DIVISOR: f64 = 50.0; // yOffset step = cy / 50
pub const FREQ_X_STEP_DIVISOR: f64 = 32.0; // x step = cx / 32

// Waveform-mode layout
pub const WAVE_BAND_SPACING_DIVISOR: f64 = 15.0; // yOffset step = cy / 15

// Stroke
pub const DASH_PATTERN: [f64; 2] = [1.0, 10.0];
pub const DEFAULT_COLOR: &str = "#fff";
pub const DEFAULT_STROKE_WIDTH: f64 = 1.0;
pub const DEFAULT_INTENSITY: f64 = 2.0;

// Reverb impulse response
pub const REVERB_CHANNELS: u32 = 2;
pub const REVERB_SECONDS: f32 = 3.0;

// Track selection
pub const TRACK_DIR: &str = "music/";
pub const TRACK_EXT: &str = ".mp3";

// DOM ids
pub const START_BUTTON_ID: &str = "start";
pub const CONTROLS_ID: &str = "controls";
pub const CONTROL_MINIMIZER_ID: &str = "controlMinimizer";
pub const CLICK_BAR_ID: &str = "clickBar";
pub const MINIMIZED_CLASS: &str = "minimized";
