use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::constants::caps::{
    DEFAULT_CORRELATION_SAMPLE_CAP, DEFAULT_ROW_CAP, DEFAULT_SENTIMENT_SAMPLE_CAP,
};
use crate::constants::columns::{DASHBOARD_WHITELIST, EXPLORATORY_WHITELIST};
use crate::types::ColumnName;

/// Caps and toggles for one analysis run.
///
/// The two original front-ends use different caps and schemas; they are kept
/// as distinct named profiles rather than unified.
#[derive(Clone, Debug)]
pub struct AnalysisProfile {
    /// Max rows ingested from a source, applied at read time.
    pub row_cap: usize,
    /// Max records classified by the sentiment stage.
    pub sentiment_sample_cap: usize,
    /// Max records fed into the length/helpfulness correlation.
    pub correlation_sample_cap: usize,
    /// Parse the `Time` column into a calendar date during derivation.
    pub derive_dates: bool,
    /// RNG seed for the sampled stages.
    ///
    /// `None` seeds from the OS, so samples vary across runs exactly as the
    /// original unseeded sampling did. Tests and demos pin `Some(seed)`.
    pub seed: Option<u64>,
    /// CSV columns this profile reads; anything else is ignored at ingestion.
    pub columns: Vec<ColumnName>,
}

impl Default for AnalysisProfile {
    fn default() -> Self {
        Self::dashboard()
    }
}

impl AnalysisProfile {
    /// Dashboard profile: tight sample caps, no timestamp column.
    pub fn dashboard() -> Self {
        Self {
            row_cap: DEFAULT_ROW_CAP,
            sentiment_sample_cap: DEFAULT_SENTIMENT_SAMPLE_CAP,
            correlation_sample_cap: DEFAULT_CORRELATION_SAMPLE_CAP,
            derive_dates: false,
            seed: None,
            columns: owned(DASHBOARD_WHITELIST),
        }
    }

    /// Exploratory profile: scores the whole capped set (caps equal the row
    /// cap) and derives calendar dates from the `Time` column.
    pub fn exploratory() -> Self {
        Self {
            row_cap: DEFAULT_ROW_CAP,
            sentiment_sample_cap: DEFAULT_ROW_CAP,
            correlation_sample_cap: DEFAULT_ROW_CAP,
            derive_dates: true,
            seed: None,
            columns: owned(EXPLORATORY_WHITELIST),
        }
    }

    /// Build the RNG the sampled stages draw from.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

fn owned(names: &[&str]) -> Vec<ColumnName> {
    names.iter().map(|name| (*name).to_string()).collect()
}
