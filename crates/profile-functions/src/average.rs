//! Averaging a list of profiles into one
//!
//! The profiles are summed with repeated merges and the sum is scaled by
//! `1 / count`. Summation either folds left to right or runs as a balanced
//! merge tree, which keeps intermediate profiles small and, with the
//! `parallel` feature, merges independent pairs concurrently.

use profile_core::{
    AveragingStrategy, DefaultBackend, Error, MergeBackend, Profile, ProfileConfig, Result,
};
use tracing::{debug, instrument};

/// Folds profiles of one kind into their pointwise mean
#[derive(Debug, Clone, Copy)]
pub struct ProfileAverager<B = DefaultBackend> {
    backend: B,
    strategy: AveragingStrategy,
}

impl ProfileAverager<DefaultBackend> {
    /// Sequential averager on the build-time selected backend
    pub fn new() -> Self {
        Self::with_backend(DefaultBackend::new())
    }

    /// Averager following the strategy of `config`
    pub fn from_config(config: &ProfileConfig) -> Self {
        Self::new().with_strategy(config.averaging)
    }
}

impl Default for ProfileAverager<DefaultBackend> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: MergeBackend + Sync> ProfileAverager<B> {
    /// Sequential averager on an explicit backend
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            strategy: AveragingStrategy::default(),
        }
    }

    pub fn with_strategy(mut self, strategy: AveragingStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn strategy(&self) -> AveragingStrategy {
        self.strategy
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Average `profiles`; at least two are required.
    ///
    /// The inputs are left untouched and the result is a fresh profile.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use profile_functions::{PiecewiseConstantFunction, ProfileAverager};
    /// let a = PiecewiseConstantFunction::new(&[0.0, 1.0, 2.0], &[1.0, 3.0]).unwrap();
    /// let b = PiecewiseConstantFunction::new(&[0.0, 2.0], &[1.0]).unwrap();
    /// let avg = ProfileAverager::new().average(&[a, b]).unwrap();
    /// assert_eq!(avg.y(), &[1.0, 2.0]);
    /// ```
    #[instrument(
        skip(self, profiles),
        fields(n_profiles = profiles.len(), strategy = self.strategy.name())
    )]
    pub fn average<P: Profile>(&self, profiles: &[P]) -> Result<P> {
        if profiles.len() < 2 {
            return Err(Error::InsufficientInput {
                expected: 2,
                actual: profiles.len(),
            });
        }

        let mut sum = match self.strategy {
            AveragingStrategy::Sequential => self.fold_sequential(profiles)?,
            AveragingStrategy::PairwiseTree => self.fold_tree(profiles)?,
        };
        sum.mul_scalar(1.0 / profiles.len() as f64);

        debug!(
            backend = self.backend.backend_name(),
            "averaged {} profiles",
            profiles.len()
        );
        Ok(sum)
    }

    fn fold_sequential<P: Profile>(&self, profiles: &[P]) -> Result<P> {
        let (first, rest) = profiles
            .split_first()
            .ok_or(Error::InsufficientInput {
                expected: 2,
                actual: 0,
            })?;
        let mut sum = first.copy();
        for profile in rest {
            sum.add_with(profile, &self.backend)?;
        }
        Ok(sum)
    }

    fn fold_tree<P: Profile>(&self, profiles: &[P]) -> Result<P> {
        match profiles {
            [] => Err(Error::InsufficientInput {
                expected: 2,
                actual: 0,
            }),
            [single] => Ok(single.copy()),
            _ => {
                let (left, right) = profiles.split_at(profiles.len() / 2);
                let (left, right) = self.join(|| self.fold_tree(left), || self.fold_tree(right));
                let mut sum = left?;
                sum.add_with(&right?, &self.backend)?;
                Ok(sum)
            }
        }
    }

    #[cfg(feature = "parallel")]
    fn join<P, F, G>(&self, left: F, right: G) -> (Result<P>, Result<P>)
    where
        P: Profile,
        F: FnOnce() -> Result<P> + Send,
        G: FnOnce() -> Result<P> + Send,
    {
        rayon::join(left, right)
    }

    #[cfg(not(feature = "parallel"))]
    fn join<P, F, G>(&self, left: F, right: G) -> (Result<P>, Result<P>)
    where
        P: Profile,
        F: FnOnce() -> Result<P> + Send,
        G: FnOnce() -> Result<P> + Send,
    {
        (left(), right())
    }
}

/// Average profiles sequentially on the default backend
pub fn average_profile<P: Profile>(profiles: &[P]) -> Result<P> {
    ProfileAverager::new().average(profiles)
}

/// Average profiles with the strategy from `config`
pub fn average_profile_with<P: Profile>(profiles: &[P], config: &ProfileConfig) -> Result<P> {
    ProfileAverager::from_config(config).average(profiles)
}
