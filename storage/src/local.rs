use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use resindex::{ClearableStore, ExportFormat, Term, TripleSet, TriplestoreWriter};
use serde::{Deserialize, Serialize};

use crate::serialize;

/// Errors raised by the local file-backed store.
#[derive(Debug, thiserror::Error)]
pub enum LocalStoreError {
	#[error(transparent)]
	Io(#[from] io::Error),

	#[error("unable to decode store file `{}`", path.display())]
	Decode {
		path: PathBuf,
		#[source]
		source: ron::error::SpannedError,
	},

	#[error("unable to encode store file `{}`", path.display())]
	Encode {
		path: PathBuf,
		#[source]
		source: ron::Error,
	},
}

/// Durable representation of the corpus.
#[derive(Serialize, Deserialize)]
struct StoreFile {
	triples: Vec<(Term, Term, Term)>,
}

/// File-backed local triplestore.
///
/// The whole corpus lives in memory; `flush` rewrites the backing file, and
/// updates requesting a synchronous flush hit the disk before returning.
#[derive(Debug)]
pub struct LocalStore {
	path: PathBuf,
	triples: TripleSet,
	dirty: bool,
}

impl LocalStore {
	/// Opens an existing store, starting empty when the file does not exist
	/// yet.
	pub fn open(path: impl Into<PathBuf>) -> Result<Self, LocalStoreError> {
		let path = path.into();
		let triples = if path.exists() {
			let content = fs::read_to_string(&path)?;
			let file: StoreFile = ron::from_str(&content).map_err(|source| {
				LocalStoreError::Decode {
					path: path.clone(),
					source,
				}
			})?;
			file.triples
				.into_iter()
				.map(|(s, p, o)| rdf_types::Triple(s, p, o))
				.collect()
		} else {
			TripleSet::new()
		};

		Ok(Self {
			path,
			triples,
			dirty: false,
		})
	}

	/// Creates an empty store, truncating any existing file.
	pub fn create(path: impl Into<PathBuf>) -> Result<Self, LocalStoreError> {
		let mut store = Self {
			path: path.into(),
			triples: TripleSet::new(),
			dirty: false,
		};
		store.write_file()?;
		Ok(store)
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	pub fn triples(&self) -> &TripleSet {
		&self.triples
	}

	fn write_file(&self) -> Result<(), LocalStoreError> {
		let file = StoreFile {
			triples: self
				.triples
				.iter()
				.map(|t| (t.0.clone(), t.1.clone(), t.2.clone()))
				.collect(),
		};
		let content = ron::ser::to_string_pretty(&file, ron::ser::PrettyConfig::default())
			.map_err(|source| LocalStoreError::Encode {
				path: self.path.clone(),
				source,
			})?;
		fs::write(&self.path, content)?;
		Ok(())
	}
}

impl TriplestoreWriter for LocalStore {
	type Error = LocalStoreError;

	fn add(&mut self, triples: &TripleSet, flush: bool) -> Result<(), Self::Error> {
		if !triples.is_empty() {
			self.triples.extend(triples.iter().cloned());
			self.dirty = true;
		}
		if flush {
			self.flush()?;
		}
		Ok(())
	}

	fn delete(&mut self, triples: &TripleSet, flush: bool) -> Result<(), Self::Error> {
		for triple in triples {
			if self.triples.remove(triple) {
				self.dirty = true;
			}
		}
		if flush {
			self.flush()?;
		}
		Ok(())
	}

	fn flush(&mut self) -> Result<(), Self::Error> {
		if self.dirty {
			self.write_file()?;
			self.dirty = false;
		}
		Ok(())
	}

	fn export(&self, out: &mut dyn io::Write, format: ExportFormat) -> Result<(), Self::Error> {
		Ok(serialize::write_corpus(out, &self.triples, format)?)
	}

	fn len(&self) -> usize {
		self.triples.len()
	}
}

impl ClearableStore for LocalStore {
	fn is_listable(&self) -> bool {
		true
	}

	/// Empties the corpus and re-creates the backing file empty.
	fn clear(&mut self) -> Result<(), Self::Error> {
		self.triples.clear();
		if self.path.exists() {
			fs::remove_file(&self.path)?;
		}
		self.write_file()?;
		self.dirty = false;
		Ok(())
	}
}
