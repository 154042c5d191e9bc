use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct SweepConfig {
    /// Seconds between sweeps. 0 runs a single sweep and exits.
    #[serde(default)]
    pub interval_secs: u64,
}

impl SweepConfig {
    pub fn is_periodic(&self) -> bool {
        self.interval_secs > 0
    }
}
