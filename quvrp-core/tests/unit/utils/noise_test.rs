use super::*;
use crate::helpers::utils::FakeRandom;

#[test]
fn can_apply_multiplicative_jitter() {
    let random = Arc::new(FakeRandom::new(vec![], vec![0.25, -0.25]));
    let noise = Noise::new(1., (-0.25, 0.25), random);

    assert_eq!(noise.generate(10.), 12.5);
    assert_eq!(noise.generate(10.), 7.5);
}

#[test]
fn can_fallback_to_plain_sample_for_zero_value() {
    let random = Arc::new(FakeRandom::new(vec![], vec![0.1]));
    let noise = Noise::new(1., (-0.25, 0.25), random);

    assert_eq!(noise.generate(0.), 0.1);
}

#[test]
fn can_skip_noise_when_probability_is_zero() {
    let random = Arc::new(FakeRandom::new(vec![], vec![0.5]));
    let noise = Noise::new(0., (-0.25, 0.25), random);

    assert_eq!(noise.generate(10.), 10.);
}
