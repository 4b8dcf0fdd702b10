//! The triplestore contract consumed by the index engine.

use std::io;
use std::str::FromStr;

use crate::TripleSet;

/// RDF serialization of an exported corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
	NTriples,
	Turtle,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown format `{0}`")]
pub struct UnknownFormat(pub String);

impl FromStr for ExportFormat {
	type Err = UnknownFormat;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"ntriples" => Ok(Self::NTriples),
			"turtle" => Ok(Self::Turtle),
			other => Err(UnknownFormat(other.to_owned())),
		}
	}
}

/// Batched triple sink backed by a triplestore.
///
/// The index treats the writer as an opaque, shared resource: it adds no
/// locking of its own, and a failed call means the whole batch failed — no
/// partial-success state is exposed.
pub trait TriplestoreWriter {
	type Error: std::error::Error + Send + Sync + 'static;

	/// Adds every triple of the set, flushing before returning when asked.
	fn add(&mut self, triples: &TripleSet, flush: bool) -> Result<(), Self::Error>;

	/// Deletes every triple of the set.
	fn delete(&mut self, triples: &TripleSet, flush: bool) -> Result<(), Self::Error>;

	/// Forces buffered updates down to the store.
	fn flush(&mut self) -> Result<(), Self::Error>;

	/// Serializes the entire corpus currently held by the store.
	fn export(&self, out: &mut dyn io::Write, format: ExportFormat) -> Result<(), Self::Error>;

	/// Number of triples currently in the store.
	fn len(&self) -> usize;

	fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

/// A store whose contents can be enumerated and wiped in place.
///
/// A store that cannot (a remote connector, say) reports non-listable and
/// forces the operator-confirmation path during an offline rebuild.
pub trait ClearableStore: TriplestoreWriter {
	fn is_listable(&self) -> bool;

	fn clear(&mut self) -> Result<(), Self::Error>;
}
