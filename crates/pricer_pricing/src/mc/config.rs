//! Monte Carlo simulation configuration.

use super::error::ConfigError;

/// Maximum number of simulation paths allowed.
pub const MAX_PATHS: usize = 10_000_000;

/// Maximum number of time steps allowed per path.
pub const MAX_STEPS: usize = 10_000;

/// Monte Carlo simulation configuration.
///
/// Immutable once built. Use [`MonteCarloConfigBuilder`] to construct
/// instances.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::MonteCarloConfig;
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(100_000)
///     .antithetic(true)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_paths(), 100_000);
/// assert_eq!(config.n_steps(), 1);
/// assert!(config.antithetic());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonteCarloConfig {
    n_paths: usize,
    n_steps: usize,
    antithetic: bool,
    seed: Option<u64>,
}

impl MonteCarloConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> MonteCarloConfigBuilder {
        MonteCarloConfigBuilder::default()
    }

    /// Returns the number of simulated paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the number of time steps per path.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Returns `true` if every normal draw is paired with its negation.
    #[inline]
    pub fn antithetic(&self) -> bool {
        self.antithetic
    }

    /// Returns the optional seed; `None` reseeds from entropy on every run.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Copy of this configuration with a different seed.
    #[inline]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `n_paths` is 0 or greater than [`MAX_PATHS`]
    /// - `n_steps` is 0 or greater than [`MAX_STEPS`]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_paths == 0 || self.n_paths > MAX_PATHS {
            return Err(ConfigError::InvalidPathCount {
                count: self.n_paths,
                max: MAX_PATHS,
            });
        }
        if self.n_steps == 0 || self.n_steps > MAX_STEPS {
            return Err(ConfigError::InvalidStepCount {
                count: self.n_steps,
                max: MAX_STEPS,
            });
        }
        Ok(())
    }
}

/// Builder for [`MonteCarloConfig`].
///
/// `n_paths` is required; `n_steps` defaults to 1 (a single exact step to
/// expiry) and antithetic sampling is off unless requested.
#[derive(Clone, Debug, Default)]
pub struct MonteCarloConfigBuilder {
    n_paths: Option<usize>,
    n_steps: Option<usize>,
    antithetic: bool,
    seed: Option<u64>,
}

impl MonteCarloConfigBuilder {
    /// Sets the number of simulation paths, in `[1, MAX_PATHS]`.
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Sets the number of time steps per path, in `[1, MAX_STEPS]`.
    #[inline]
    pub fn n_steps(mut self, n_steps: usize) -> Self {
        self.n_steps = Some(n_steps);
        self
    }

    /// Enables or disables antithetic variates.
    #[inline]
    pub fn antithetic(mut self, antithetic: bool) -> Self {
        self.antithetic = antithetic;
        self
    }

    /// Fixes the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets or clears the seed.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `n_paths` is missing or any count is out of
    /// range.
    pub fn build(self) -> Result<MonteCarloConfig, ConfigError> {
        let n_paths = self.n_paths.ok_or(ConfigError::InvalidParameter {
            name: "n_paths",
            value: "must be specified".to_string(),
        })?;

        let config = MonteCarloConfig {
            n_paths,
            n_steps: self.n_steps.unwrap_or(1),
            antithetic: self.antithetic,
            seed: self.seed,
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder_defaults() {
        let config = MonteCarloConfig::builder().n_paths(10_000).build().unwrap();

        assert_eq!(config.n_paths(), 10_000);
        assert_eq!(config.n_steps(), 1);
        assert!(!config.antithetic());
        assert_eq!(config.seed(), None);
    }

    #[test]
    fn test_config_builder_all_fields() {
        let config = MonteCarloConfig::builder()
            .n_paths(2_000)
            .n_steps(50)
            .antithetic(true)
            .seed(42)
            .build()
            .unwrap();

        assert_eq!(config.n_steps(), 50);
        assert!(config.antithetic());
        assert_eq!(config.seed(), Some(42));
        assert_eq!(config.with_seed(None).seed(), None);
    }

    #[test]
    fn test_config_invalid_path_counts() {
        assert!(matches!(
            MonteCarloConfig::builder().n_paths(0).build(),
            Err(ConfigError::InvalidPathCount { count: 0, .. })
        ));
        assert!(matches!(
            MonteCarloConfig::builder().n_paths(MAX_PATHS + 1).build(),
            Err(ConfigError::InvalidPathCount { .. })
        ));
    }

    #[test]
    fn test_config_invalid_step_counts() {
        assert!(matches!(
            MonteCarloConfig::builder().n_paths(1000).n_steps(0).build(),
            Err(ConfigError::InvalidStepCount { count: 0, .. })
        ));
        assert!(matches!(
            MonteCarloConfig::builder()
                .n_paths(1000)
                .n_steps(MAX_STEPS + 1)
                .build(),
            Err(ConfigError::InvalidStepCount { .. })
        ));
    }

    #[test]
    fn test_config_missing_paths() {
        let result = MonteCarloConfig::builder().n_steps(100).build();

        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "n_paths",
                ..
            })
        ));
    }
}
