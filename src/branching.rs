use crate::stats::Accumulator;
use rand::prelude::*;
use rand_chacha::ChaCha12Rng;

/// Generation counts of the fixed sweep.
pub const GENERATION_SWEEP: std::ops::RangeInclusive<u32> = 1..=12;

/// Trials averaged per (distribution, generation count) point.
pub const TRIALS_PER_POINT: usize = 1000;

/// Offspring-count distribution of a Galton-Watson branching process.
///
/// The `(count, probability)` pairs are scanned in order by the inverse-CDF
/// sampler. Probabilities must be non-negative and sum to 1; this is a caller
/// precondition, not a runtime-checked error.
#[derive(Debug, Clone)]
pub struct OffspringDistribution {
    name: &'static str,
    outcomes: Vec<(u64, f64)>,
}

impl OffspringDistribution {
    pub fn new(name: &'static str, outcomes: Vec<(u64, f64)>) -> Self {
        debug_assert!(!outcomes.is_empty());
        debug_assert!(
            (outcomes.iter().map(|&(_, prob)| prob).sum::<f64>() - 1.0).abs() < 1e-8,
            "offspring probabilities must sum to 1"
        );
        Self { name, outcomes }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The three distributions the sweep compares: D1 subcritical (mean
    /// offspring 0.75), D2 supercritical (1.25), D3 critical (1).
    pub fn standard_set() -> [Self; 3] {
        [
            Self::new("D1", vec![(0, 0.50), (1, 0.25), (2, 0.25)]),
            Self::new("D2", vec![(0, 0.25), (1, 0.25), (2, 0.50)]),
            Self::new("D3", vec![(0, 1.0 / 3.0), (1, 1.0 / 3.0), (2, 1.0 / 3.0)]),
        ]
    }
}

/// Per-generation averages for one offspring distribution, in generation
/// order 1..=12.
#[derive(Debug, Clone)]
pub struct GenerationSeries {
    pub name: &'static str,
    pub averages: Vec<f64>,
}

/// Galton-Watson branching simulator.
///
/// Holds the random number generator; the sweep seeds it once and draws a
/// single stream across all distributions, so a fixed seed reproduces the
/// whole comparison bit-for-bit.
pub struct BranchingSimulator {
    rng: ChaCha12Rng,
}

impl BranchingSimulator {
    /// Create a simulator with a fixed seed.
    pub fn from_seed(seed: u64) -> Self {
        let rng = ChaCha12Rng::seed_from_u64(seed);
        Self { rng }
    }

    /// Draw one offspring count from `dist` by inverse-CDF scan.
    ///
    /// The cumulative sum may fall just short of 1.0 in floating point, so
    /// the final entry is selected whenever the draw exceeds every partial
    /// sum. Never fails to select for a non-empty distribution.
    fn draw_offspring_count(&mut self, dist: &OffspringDistribution) -> u64 {
        let r: f64 = self.rng.random();

        let mut cumulative = 0.0;
        for &(count, prob) in &dist.outcomes {
            cumulative += prob;
            if r <= cumulative {
                return count;
            }
        }

        let &(count, _) = dist.outcomes.last().unwrap_or(&(0, 0.0));
        count
    }

    /// Advance the population by one generation: the sum of one independent
    /// offspring draw per individual. Population 0 is absorbing.
    pub fn advance_generation(&mut self, population: u64, dist: &OffspringDistribution) -> u64 {
        if population == 0 {
            return 0;
        }
        (0..population)
            .map(|_| self.draw_offspring_count(dist))
            .sum()
    }

    /// Evolve a single root individual for `generations` generations and
    /// return the final population. Stops early on extinction; the remaining
    /// generations would all be 0.
    pub fn run_trial(&mut self, dist: &OffspringDistribution, generations: u32) -> u64 {
        let mut population = 1;
        for _ in 0..generations {
            population = self.advance_generation(population, dist);
            if population == 0 {
                break;
            }
        }
        population
    }

    /// Run `trials` independent trials and return the mean final population.
    pub fn average_over_trials(
        &mut self,
        dist: &OffspringDistribution,
        generations: u32,
        trials: usize,
    ) -> f64 {
        let mut acc = Accumulator::new();
        for _ in 0..trials {
            acc.add(self.run_trial(dist, generations) as f64);
        }
        acc.report().mean
    }

    /// Run the fixed sweep: for each of D1, D2, D3 in order, the average
    /// final population at every generation count in 1..=12, 1000 trials per
    /// point.
    pub fn run_sweep(&mut self) -> Vec<GenerationSeries> {
        let mut series = Vec::new();

        for dist in OffspringDistribution::standard_set() {
            let averages: Vec<f64> = GENERATION_SWEEP
                .map(|gens| self.average_over_trials(&dist, gens, TRIALS_PER_POINT))
                .collect();

            let last = averages.last().copied().unwrap_or(f64::NAN);
            log::info!(
                "completed {}: final generation average population = {last:.3}",
                dist.name()
            );
            series.push(GenerationSeries {
                name: dist.name(),
                averages,
            });
        }

        series
    }
}
