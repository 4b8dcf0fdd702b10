//! The index engine: turns object lifecycle events into minimal changesets
//! against the triplestore.

use std::io;

use serde::{Deserialize, Serialize};

use crate::{
	Error, ExportFormat, ModelBasedTripleGenerator, ObjectReader, TripleGenerator, TripleSet,
	TriplestoreWriter,
};

/// Whether the index is maintained at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum IndexLevel {
	Off,
	On,
}

impl IndexLevel {
	/// Parses the operator-facing numeric level.
	///
	/// Anything outside {0, 1} is a configuration error, raised before any
	/// indexing is attempted.
	pub fn from_level(level: i64) -> Result<Self, Error> {
		match level {
			0 => Ok(Self::Off),
			1 => Ok(Self::On),
			other => Err(Error::InvalidIndexLevel(other)),
		}
	}

	pub fn is_on(self) -> bool {
		matches!(self, Self::On)
	}
}

/// Validated index engine parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexParams {
	pub level: IndexLevel,

	/// Flush the store before an update call returns.
	pub sync_updates: bool,
}

impl IndexParams {
	pub fn new(level: IndexLevel) -> Self {
		Self {
			level,
			sync_updates: false,
		}
	}

	pub fn with_sync_updates(mut self, sync_updates: bool) -> Self {
		self.sync_updates = sync_updates;
		self
	}
}

/// The minimal delete/add pair turning one triple set into another.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Changeset {
	pub deletes: TripleSet,
	pub adds: TripleSet,
}

impl Changeset {
	/// Computes the changeset between a previous and a current view.
	///
	/// Triples present in both sets appear in neither half: they are never
	/// deleted and re-added, so the write volume is proportional to the
	/// actual delta rather than to the object size.
	pub fn between(old: &TripleSet, new: &TripleSet) -> Self {
		Self {
			deletes: old.difference(new).cloned().collect(),
			adds: new.difference(old).cloned().collect(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.deletes.is_empty() && self.adds.is_empty()
	}

	/// Total number of write operations this changeset will issue.
	pub fn len(&self) -> usize {
		self.deletes.len() + self.adds.len()
	}
}

/// The live resource index.
///
/// Synchronous and call-and-return: every operation generates the affected
/// object's triples fresh, applies them to the writer and returns. Nothing
/// is cached across calls, and correctness under concurrent modification of
/// the same object is the caller's responsibility.
#[derive(Debug)]
pub struct ResourceIndex<W> {
	params: IndexParams,
	generator: ModelBasedTripleGenerator,
	writer: W,
}

impl<W: TriplestoreWriter> ResourceIndex<W> {
	pub fn new(params: IndexParams, generator: ModelBasedTripleGenerator, writer: W) -> Self {
		Self {
			params,
			generator,
			writer,
		}
	}

	pub fn params(&self) -> IndexParams {
		self.params
	}

	pub fn writer(&self) -> &W {
		&self.writer
	}

	pub fn into_writer(self) -> W {
		self.writer
	}

	/// Indexes a newly ingested object.
	pub fn add_object<R: ObjectReader>(&mut self, reader: &R) -> Result<(), Error> {
		if !self.params.level.is_on() {
			return Ok(());
		}

		let triples = self.generator.triples_for_object(reader)?;
		log::debug!("adding {}: {} triples", reader.pid(), triples.len());
		self.writer
			.add(&triples, self.params.sync_updates)
			.map_err(Error::store)
	}

	/// Applies the minimal changeset between the pre- and post-modification
	/// views of an object.
	pub fn modify_object<R: ObjectReader>(&mut self, old: &R, new: &R) -> Result<(), Error> {
		if !self.params.level.is_on() {
			return Ok(());
		}

		let previous = self.generator.triples_for_object(old)?;
		let current = self.generator.triples_for_object(new)?;
		let changeset = Changeset::between(&previous, &current);
		log::debug!(
			"modifying {}: -{} +{}",
			new.pid(),
			changeset.deletes.len(),
			changeset.adds.len()
		);

		if changeset.is_empty() {
			return Ok(());
		}

		self.writer
			.delete(&changeset.deletes, false)
			.map_err(Error::store)?;
		self.writer
			.add(&changeset.adds, self.params.sync_updates)
			.map_err(Error::store)
	}

	/// Removes every triple of a purged object.
	pub fn delete_object<R: ObjectReader>(&mut self, old: &R) -> Result<(), Error> {
		if !self.params.level.is_on() {
			return Ok(());
		}

		let triples = self.generator.triples_for_object(old)?;
		log::debug!("deleting {}: {} triples", old.pid(), triples.len());
		self.writer
			.delete(&triples, self.params.sync_updates)
			.map_err(Error::store)
	}

	/// Serializes the entire indexed corpus.
	pub fn export(&self, out: &mut dyn io::Write, format: ExportFormat) -> Result<(), Error> {
		self.writer.export(out, format).map_err(Error::store)
	}
}
