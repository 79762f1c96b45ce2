// Candidate matching: rule-based skill/experience scoring and ranking.
// Pure and synchronous; the noise source is injected so tests can pin it.

pub mod handlers;
pub mod matcher;
pub mod noise;
pub mod reasoning;
pub mod scoring;
