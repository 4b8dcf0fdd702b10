//! Resource Index core: derives RDF triples from digital objects and keeps a
//! pluggable triplestore in sync with the object store.
//!
//! Triples describing an object's properties, datastreams and relationships
//! are produced by content-model-specific [`generator`]s, fanned out by the
//! [`ModelBasedTripleGenerator`] over every content model the object
//! declares. The [`ResourceIndex`] engine turns object lifecycle events into
//! minimal add/delete changesets against a [`TriplestoreWriter`]: on
//! modification only the triples that actually changed are written, computed
//! as the symmetric set difference between the previous and current views.
//!
//! The same generator chain drives the offline rebuild path (see the
//! `resindex-storage` crate), which replays every persisted object into a
//! freshly cleared store.
pub mod dc;
pub mod error;
pub mod generator;
pub mod index;
pub mod object;
pub mod service;
pub mod triplestore;
pub mod vocab;

pub use error::Error;
pub use generator::{ModelBasedTripleGenerator, TripleGenerator};
pub use index::{Changeset, IndexLevel, IndexParams, ResourceIndex};
pub use object::{ControlGroup, Datastream, DigitalObject, ObjectReader, RelationshipTuple};
pub use triplestore::{ClearableStore, ExportFormat, TriplestoreWriter};

use std::collections::BTreeSet;

pub use rdf_types::Term;

/// An RDF statement over concrete terms.
///
/// Subjects and predicates produced by this crate are always IRIs; objects
/// are IRIs or typed/language-tagged literals.
pub type Triple = rdf_types::Triple<Term, Term, Term>;

/// The transient triple set produced by one generator run.
///
/// Equality of members is structural, duplicates collapse, and iteration
/// order is deterministic (sorted by subject first), which keeps changeset
/// computation and exports reproducible.
pub type TripleSet = BTreeSet<Triple>;
