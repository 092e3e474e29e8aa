use crate::aa::{AAFramework, ArgumentSet, LabelType};
use anyhow::{anyhow, Result};
use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;

/// A generator of random argumentation frameworks.
///
/// The generator is seeded: two generators built with the same seed produce the same sequence of frameworks
/// when they are given the same inputs.
///
/// # Example
///
/// ```
/// # use dungaf::utils::RandomFrameworkGenerator;
/// let pool = (0..10).map(|i| format!("a{}", i)).collect::<Vec<String>>();
/// let mut generator = RandomFrameworkGenerator::new_with_seed(0);
/// let af = generator.generate(2, 5, 1, 8, &pool).unwrap();
/// assert!((2..=5).contains(&af.n_arguments()));
/// assert!((1..=8).contains(&af.n_attacks()));
/// ```
pub struct RandomFrameworkGenerator {
    rng: StdRng,
}

impl RandomFrameworkGenerator {
    /// Builds a new generator given its seed.
    pub fn new_with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generates a framework which arguments are taken from the pool.
    ///
    /// The number of arguments lies between `min_args` and `max_args`,
    /// and the number of attacks lies between `min_attacks` and `max_attacks`.
    /// Repeated labels in the pool are considered once.
    ///
    /// `max_args` is lowered to the size of the pool if needed,
    /// and `max_attacks` is lowered to the maximal number of attacks among the selected arguments.
    /// An error is returned if the bounds cannot be met, that is if one of the minimal values exceeds the corresponding maximal one,
    /// if the pool is too small for `min_args`,
    /// or if `min_attacks` exceeds the number of attacks that can be built on `max_args` arguments.
    pub fn generate<T>(
        &mut self,
        min_args: usize,
        max_args: usize,
        min_attacks: usize,
        max_attacks: usize,
        pool: &[T],
    ) -> Result<AAFramework<T>>
    where
        T: LabelType,
    {
        let pool = pool.iter().collect::<BTreeSet<&T>>();
        if min_args > max_args {
            return Err(anyhow!(
                "the minimal number of arguments ({}) exceeds the maximal one ({})",
                min_args,
                max_args
            ));
        }
        if min_args > pool.len() {
            return Err(anyhow!(
                "the minimal number of arguments ({}) exceeds the size of the pool ({})",
                min_args,
                pool.len()
            ));
        }
        if min_attacks > max_attacks {
            return Err(anyhow!(
                "the minimal number of attacks ({}) exceeds the maximal one ({})",
                min_attacks,
                max_attacks
            ));
        }
        if min_attacks > pool.len().saturating_mul(pool.len()) {
            return Err(anyhow!(
                "the minimal number of attacks ({}) exceeds the number of attacks allowed by the pool ({})",
                min_attacks,
                pool.len().saturating_mul(pool.len())
            ));
        }
        let max_args = usize::min(max_args, pool.len());
        if min_attacks > max_args.saturating_mul(max_args) {
            return Err(anyhow!(
                "the minimal number of attacks ({}) cannot be reached with at most {} argument(s)",
                min_attacks,
                max_args
            ));
        }
        let min_args = usize::max(min_args, ceil_sqrt(min_attacks));
        let n_args = self.rng.gen_range(min_args..=max_args);
        let pool = pool.into_iter().collect::<Vec<&T>>();
        let labels = pool
            .choose_multiple(&mut self.rng, n_args)
            .map(|l| (*l).clone())
            .collect::<Vec<T>>();
        let max_attacks = usize::min(max_attacks, n_args * n_args);
        let n_attacks = self.rng.gen_range(min_attacks..=max_attacks);
        debug!(
            "generating a framework with {} argument(s) and {} attack(s)",
            n_args, n_attacks
        );
        let mut af = AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&labels));
        rand::seq::index::sample(&mut self.rng, n_args * n_args, n_attacks)
            .iter()
            .for_each(|i| {
                af.new_attack(&labels[i / n_args], &labels[i % n_args]);
            });
        Ok(af)
    }
}

fn ceil_sqrt(n: usize) -> usize {
    let mut root = (n as f64).sqrt() as usize;
    while root * root < n {
        root += 1;
    }
    while root > 0 && (root - 1) * (root - 1) >= n {
        root -= 1;
    }
    root
}
