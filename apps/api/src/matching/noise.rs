use rand::Rng;

/// Half-width of the uniform perturbation added to every overall score.
pub const NOISE_AMPLITUDE: f64 = 0.05;

/// Source of the small perturbation added to each overall score.
///
/// Carried by `Matcher` as `Arc<dyn NoiseSource>` so tests can pin it.
pub trait NoiseSource: Send + Sync {
    fn sample(&self) -> f64;
}

/// Uniform noise in `[-NOISE_AMPLITUDE, NOISE_AMPLITUDE]` from the thread-local RNG.
/// No state is shared between threads, so concurrent matches do not interfere.
#[derive(Debug, Default, Clone, Copy)]
pub struct UniformNoise;

impl NoiseSource for UniformNoise {
    fn sample(&self) -> f64 {
        rand::thread_rng().gen_range(-NOISE_AMPLITUDE..=NOISE_AMPLITUDE)
    }
}

/// Always returns the same offset. `FixedNoise(0.0)` makes ranking deterministic.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixedNoise(pub f64);

impl NoiseSource for FixedNoise {
    fn sample(&self) -> f64 {
        self.0
    }
}
