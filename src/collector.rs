use crate::stats::Accumulator;
use anyhow::Result;
use rand::prelude::*;
use rand_chacha::ChaCha12Rng;
use rand_distr::Uniform;
use std::collections::HashSet;

/// Exponents of the fixed sweep: n = 2^k for k in this range.
pub const K_SWEEP: std::ops::RangeInclusive<u32> = 8..=16;

/// Trials averaged per sweep point.
pub const TRIALS_PER_POINT: usize = 10;

/// One point of the coupon-collector sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepPoint {
    pub k: u32,
    pub n: u64,
    pub average: f64,
}

/// Coupon-collector simulator.
///
/// Holds the random number generator and provides methods to run single
/// trials, average over repeated trials, and drive the fixed sweep.
pub struct CollectorSimulator {
    rng: ChaCha12Rng,
}

impl CollectorSimulator {
    /// Create a simulator seeded from the operating system.
    pub fn from_os_rng() -> Result<Self> {
        let rng = ChaCha12Rng::try_from_os_rng()?;
        Ok(Self { rng })
    }

    /// Create a simulator with a fixed seed.
    pub fn from_seed(seed: u64) -> Self {
        let rng = ChaCha12Rng::seed_from_u64(seed);
        Self { rng }
    }

    /// Draw uniform labels in [1, n] until all n distinct labels have been
    /// seen at least once; return the number of draws.
    ///
    /// Terminates with probability 1 for any n >= 1, so the loop carries no
    /// iteration cap. A trial can never take fewer than n draws.
    pub fn run_trial(&mut self, n: u64) -> Result<u64> {
        let label_dist = Uniform::new_inclusive(1, n)?;

        let mut collected = HashSet::with_capacity(n as usize);
        let mut draws = 0;
        while (collected.len() as u64) < n {
            collected.insert(label_dist.sample(&mut self.rng));
            draws += 1;
        }

        Ok(draws)
    }

    /// Run `trials` independent trials and return the mean draw count.
    pub fn average_over_trials(&mut self, n: u64, trials: usize) -> Result<f64> {
        let mut acc = Accumulator::new();
        for _ in 0..trials {
            acc.add(self.run_trial(n)? as f64);
        }
        Ok(acc.report().mean)
    }

    /// Run the fixed sweep (k = 8..=16, n = 2^k, 10 trials per point) and
    /// return the `(k, n, average)` triples in order of increasing k.
    pub fn run_sweep(&mut self) -> Result<Vec<SweepPoint>> {
        let mut points = Vec::new();

        for k in K_SWEEP {
            let n = 1u64 << k;
            let average = self.average_over_trials(n, TRIALS_PER_POINT)?;
            log::info!("completed k={k}, n={n}: average coupons needed = {average:.1}");
            points.push(SweepPoint { k, n, average });
        }

        Ok(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn harmonic(n: u64) -> f64 {
        (1..=n).map(|i| 1.0 / i as f64).sum()
    }

    #[test]
    fn trial_needs_at_least_n_draws() {
        let mut sim = CollectorSimulator::from_seed(7);
        for n in [1, 2, 16, 64] {
            let draws = sim.run_trial(n).unwrap();
            assert!(draws >= n, "n={n}: only {draws} draws");
        }
    }

    #[test]
    fn single_label_is_collected_in_one_draw() {
        let mut sim = CollectorSimulator::from_seed(11);
        assert_eq!(sim.run_trial(1).unwrap(), 1);
        assert_eq!(sim.average_over_trials(1, 50).unwrap(), 1.0);
    }

    #[test]
    fn average_stays_near_harmonic_asymptotic() {
        let mut sim = CollectorSimulator::from_seed(23);
        let average = sim.average_over_trials(256, 10).unwrap();

        let upper = 256.0 * harmonic(256) * 1.5;
        assert!(
            (256.0..=upper).contains(&average),
            "average {average} outside [256, {upper}]"
        );
    }

    #[test]
    fn average_grows_with_label_count() {
        let mut sim = CollectorSimulator::from_seed(3);
        let small = sim.average_over_trials(1 << 8, TRIALS_PER_POINT).unwrap();
        let large = sim.average_over_trials(1 << 9, TRIALS_PER_POINT).unwrap();
        assert!(large > small);
    }
}
