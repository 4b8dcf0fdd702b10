//! Operator-facing datastore configuration.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use resindex::{IndexLevel, IndexParams};
use serde::{Deserialize, Serialize};

/// Connection target of the index's triplestore.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Backend {
	/// File-backed store managed in place by this process.
	Local { path: PathBuf },

	/// Store reachable only through an external connector. Not listable:
	/// a rebuild requires the operator to clear it manually.
	Remote { url: String },
}

/// Datastore module configuration, read from a RON file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
	/// Alias naming this datastore in operator tooling.
	pub alias: String,

	pub backend: Backend,

	/// Raw index level; validated into an [`IndexLevel`] on load.
	pub index_level: i64,

	/// Whether update calls flush synchronously before returning.
	pub sync_updates: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error(transparent)]
	Io(#[from] io::Error),

	#[error("unable to parse configuration `{}`", path.display())]
	Parse {
		path: PathBuf,
		#[source]
		source: ron::error::SpannedError,
	},

	#[error(transparent)]
	Invalid(#[from] resindex::Error),
}

impl StoreConfig {
	/// Loads a configuration file, failing fast on out-of-range values.
	pub fn load(path: &Path) -> Result<Self, ConfigError> {
		let content = fs::read_to_string(path)?;
		let config: Self = ron::from_str(&content).map_err(|source| ConfigError::Parse {
			path: path.to_owned(),
			source,
		})?;
		config.index_params()?;
		Ok(config)
	}

	/// Validated engine parameters for this configuration.
	pub fn index_params(&self) -> Result<IndexParams, resindex::Error> {
		Ok(IndexParams::new(IndexLevel::from_level(self.index_level)?)
			.with_sync_updates(self.sync_updates))
	}
}
