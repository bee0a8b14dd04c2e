//! Content factory for loading combat data from a data directory.

use std::path::{Path, PathBuf};

use combat_core::CombatConfig;

use crate::loaders::{ConfigLoader, LoadResult, ScenarioLoader};
use crate::scenario::Scenario;

/// Content factory that loads all combat content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── scenarios/
///     ├── duel.ron
///     └── skirmish.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Path to the directory containing data files
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load combat configuration from `config.toml`.
    ///
    /// A missing file is not an error; defaults apply.
    pub fn load_config(&self) -> LoadResult<CombatConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            return Ok(CombatConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load a scenario from `scenarios/{name}.ron`.
    ///
    /// # Arguments
    ///
    /// * `name` - Name of the scenario file (without `.ron` extension)
    pub fn load_scenario(&self, name: &str) -> LoadResult<Scenario> {
        let path = self
            .data_dir
            .join("scenarios")
            .join(format!("{}.ron", name));
        ScenarioLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
