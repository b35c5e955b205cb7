use std::env;

use anyhow::{Context, Result};

/// Tunable parameters for the statistical topic extractor.
///
/// The defaults are the values the pipeline has always run with; the env
/// overrides exist for experiments, not routine configuration.
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Upper document-frequency bound as a fraction of the corpus. Terms
    /// appearing in more than this share of documents are dropped as too
    /// generic to be topics.
    pub max_df: f64,
    /// Ceiling on the corpus-size-derived minimum document frequency.
    pub min_df_cap: usize,
    /// Over-fetch factor: the ranking keeps `factor * k` candidates for
    /// the quality gates to chew through.
    pub candidate_factor: usize,
    /// Quality floor divisor: fewer than `k / divisor` gate survivors
    /// discards the statistical result in favor of the fallback.
    pub quality_floor_divisor: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_df: 0.8,
            min_df_cap: 3,
            candidate_factor: 3,
            quality_floor_divisor: 2,
        }
    }
}

impl ExtractorConfig {
    /// Load the configuration, honoring `GLEANER_*` env overrides where
    /// set.
    pub fn load() -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            max_df: env_parse("GLEANER_MAX_DF", defaults.max_df)?,
            min_df_cap: env_parse("GLEANER_MIN_DF_CAP", defaults.min_df_cap)?,
            candidate_factor: env_parse("GLEANER_CANDIDATE_FACTOR", defaults.candidate_factor)?,
            quality_floor_divisor: env_parse(
                "GLEANER_QUALITY_FLOOR_DIVISOR",
                defaults.quality_floor_divisor,
            )?,
        })
    }

    /// Minimum document frequency for a corpus of `n` documents: a tenth
    /// of the corpus, at least 1, capped at `min_df_cap`.
    pub fn min_df(&self, n: usize) -> usize {
        self.min_df_cap.min((n / 10).max(1))
    }
}

fn env_parse<T>(var: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(var) {
        Ok(value) => value
            .parse::<T>()
            .with_context(|| format!("invalid value for {var}: {value:?}")),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(e) => Err(e).with_context(|| format!("could not read {var}")),
    }
}
