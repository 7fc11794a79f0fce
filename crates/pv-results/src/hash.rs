//! Content-based hashing for sweep IDs.

use pv_project::SweepConfig;
use sha2::{Digest, Sha256};

pub fn compute_sweep_id(config: &SweepConfig) -> String {
    let mut hasher = Sha256::new();

    let config_json = serde_json::to_string(config).unwrap_or_default();
    hasher.update(config_json.as_bytes());

    let result = hasher.finalize();
    format!("{:x}", result)
}
