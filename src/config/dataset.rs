//! Dataset configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Location of the reference CSV file
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    pub path: PathBuf,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("LifeExpectancy.csv"),
        }
    }
}
