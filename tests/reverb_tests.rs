// Host-side tests for the reverb impulse response.

use rand::rngs::StdRng;
use rand::SeedableRng;
use wavelines::reverb::{impulse_len, noise_impulse};

#[test]
fn impulse_len_is_seconds_times_rate() {
    assert_eq!(impulse_len(48_000.0, 3.0), 144_000);
    assert_eq!(impulse_len(44_100.0, 3.0), 132_300);
    assert_eq!(impulse_len(44_100.0, 0.0), 0);
}

#[test]
fn noise_impulse_shape_and_range() {
    let mut rng = StdRng::seed_from_u64(7);
    let ir = noise_impulse(2, 4096, &mut rng);
    assert_eq!(ir.len(), 2);
    for ch in &ir {
        assert_eq!(ch.len(), 4096);
        assert!(ch.iter().all(|v| (-1.0..1.0).contains(v)));
    }
    assert_ne!(ir[0], ir[1]);
}

#[test]
fn noise_impulse_is_seeded() {
    let a = noise_impulse(2, 256, &mut StdRng::seed_from_u64(42));
    let b = noise_impulse(2, 256, &mut StdRng::seed_from_u64(42));
    assert_eq!(a, b);
}
