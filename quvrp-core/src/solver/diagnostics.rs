#[cfg(test)]
#[path = "../../tests/unit/solver/diagnostics_test.rs"]
mod diagnostics_test;

use super::QaoaConfig;
use crate::utils::{Float, GenericResult};

/// An energy value the synthetic convergence curve decays towards.
const GROUND_ENERGY: Float = -10.;

/// Amount of curve samples generated per QAOA layer.
const SAMPLES_PER_LAYER: usize = 20;

/// Keeps a measured probability of a computational basis state.
#[derive(Clone, Debug)]
pub struct StateProbability {
    /// A basis state bitstring.
    pub state: String,
    /// A probability of measuring the state.
    pub probability: Float,
    /// Amount of shots which measured the state.
    pub counts: usize,
}

/// Encapsulates synthetic telemetry of a QAOA run.
///
/// All values are closed-form curves and fixed literals parameterized only by the
/// pipeline configuration: they describe no actual solved instance and exist to
/// furnish deterministic mock telemetry for display.
#[derive(Clone, Debug)]
pub struct QaoaMetrics {
    /// An energy curve decaying towards the ground state energy.
    pub energy_levels: Vec<Float>,
    /// Residuals between the energy curve and the ground state energy.
    pub convergence: Vec<Float>,
    /// Eigenvalues of the mocked problem Hamiltonian.
    pub eigenvalues: Vec<Float>,
    /// Measured basis state probabilities, summing to 1.
    pub state_probabilities: Vec<StateProbability>,
    /// A backend label copied from the configuration.
    pub backend: String,
}

/// Computes synthetic QAOA telemetry for the given configuration.
///
/// The output is a pure function of the configuration: layer count sizes the
/// convergence curves, shot count scales the per-state measurement counts and the
/// backend name is echoed back as a label.
pub fn compute_metrics(config: &QaoaConfig) -> GenericResult<QaoaMetrics> {
    config.validate()?;

    let samples = config.layers * SAMPLES_PER_LAYER;

    let energy_levels: Vec<_> = (0..samples)
        .map(|step| GROUND_ENERGY * (1. - (-3. * step as Float / samples as Float).exp()))
        .collect();
    let convergence = energy_levels.iter().map(|energy| (energy - GROUND_ENERGY).abs()).collect();

    let eigenvalues = vec![-10., -8.7, -7.9, -6.4, -5.2, -4.8, -3.1, -1.6];

    let state_probabilities = [
        ("000", 0.28),
        ("001", 0.19),
        ("010", 0.15),
        ("011", 0.12),
        ("100", 0.10),
        ("101", 0.08),
        ("110", 0.05),
        ("111", 0.03),
    ]
    .iter()
    .map(|&(state, probability)| StateProbability {
        state: state.to_string(),
        probability,
        counts: (probability * config.shots as Float).round() as usize,
    })
    .collect();

    Ok(QaoaMetrics {
        energy_levels,
        convergence,
        eigenvalues,
        state_probabilities,
        backend: config.backend.to_string(),
    })
}
