use rand::Rng;

/// Frames in an impulse response of `seconds` at `sample_rate`.
#[inline]
pub fn impulse_len(sample_rate: f32, seconds: f32) -> usize {
    (sample_rate * seconds).max(0.0) as usize
}

/// White-noise impulse response, one buffer per channel, samples uniform
/// in `[-1, 1)`. Convolving with it gives a long, flat room tail.
pub fn noise_impulse<R: Rng + ?Sized>(channels: usize, len: usize, rng: &mut R) -> Vec<Vec<f32>> {
    (0..channels)
        .map(|_| (0..len).map(|_| rng.gen_range(-1.0f32..1.0)).collect())
        .collect()
}
