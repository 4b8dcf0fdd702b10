//! Read-only view of a digital object, as consumed by the triple generators.

use std::borrow::Cow;
use std::convert::Infallible;

use chrono::{DateTime, Utc};
use iref::{Iri, IriBuf};
use serde::{Deserialize, Serialize};

/// Storage classification of a datastream's bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ControlGroup {
	/// XML stored inline with the object.
	InlineXml,

	/// Content managed by the repository itself.
	Managed,

	/// Content referenced at an external location.
	External,

	/// Content the repository redirects clients to.
	Redirect,
}

impl ControlGroup {
	/// Whether the bytes live outside the repository's custody.
	///
	/// Externally held content can change without the repository noticing,
	/// so the index marks such datastreams volatile.
	pub fn is_volatile(self) -> bool {
		matches!(self, Self::External | Self::Redirect)
	}
}

/// A named unit of content attached to a digital object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Datastream {
	pub id: String,

	pub control_group: ControlGroup,

	/// Raw state code (`A`, `I` or `D`).
	pub state: String,

	pub mime_type: Option<String>,

	pub created_date: Option<DateTime<Utc>>,

	/// Inline content. Externally stored control groups carry none.
	pub content: Option<String>,
}

impl Datastream {
	/// Creates an active inline-XML datastream with the given content.
	pub fn inline_xml(id: impl Into<String>, content: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			control_group: ControlGroup::InlineXml,
			state: "A".into(),
			mime_type: Some("text/xml".into()),
			created_date: None,
			content: Some(content.into()),
		}
	}
}

/// A raw relationship fact stored with an object.
///
/// Copied near-verbatim into index triples: the object value becomes a
/// resource, a plain literal or a typed literal depending on `is_literal`
/// and `datatype`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipTuple {
	pub subject: String,
	pub predicate: String,
	pub object: String,
	pub is_literal: bool,
	pub datatype: Option<String>,
}

/// A digital object as persisted by low-level storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitalObject {
	/// Persistent identifier.
	pub pid: String,

	/// Raw state code (`A`, `I` or `D`).
	pub state: String,

	pub label: Option<String>,

	pub owner_id: Option<String>,

	pub created_date: Option<DateTime<Utc>>,

	pub last_modified_date: Option<DateTime<Utc>>,

	/// Content models this object declares, in declaration order.
	pub content_models: Vec<IriBuf>,

	pub datastreams: Vec<Datastream>,

	pub relationships: Vec<RelationshipTuple>,
}

impl DigitalObject {
	/// Creates an empty active object with the given PID.
	pub fn new(pid: impl Into<String>) -> Self {
		Self {
			pid: pid.into(),
			state: "A".into(),
			label: None,
			owner_id: None,
			created_date: None,
			last_modified_date: None,
			content_models: Vec::new(),
			datastreams: Vec::new(),
			relationships: Vec::new(),
		}
	}
}

/// Read access to a digital object, abstracting over the storage layer.
///
/// Metadata accessors are cheap and infallible; content access goes through
/// the storage layer and may fail with the implementation's own error.
pub trait ObjectReader {
	/// Error raised when the underlying storage cannot be read.
	type Error: std::error::Error + Send + Sync + 'static;

	fn pid(&self) -> &str;

	/// Raw state code, mapped to a state resource by the generators.
	fn state_code(&self) -> &str;

	fn label(&self) -> Option<&str>;

	fn owner_id(&self) -> Option<&str>;

	fn created_date(&self) -> Option<DateTime<Utc>>;

	fn last_modified_date(&self) -> Option<DateTime<Utc>>;

	fn content_models(&self) -> &[IriBuf];

	fn datastreams(&self) -> &[Datastream];

	/// Content of the given datastream, if it has any.
	fn datastream_content(&self, id: &str) -> Result<Option<Cow<'_, str>>, Self::Error>;

	fn relationships(&self) -> &[RelationshipTuple];

	/// Relationship tuples carrying the given predicate.
	fn relationships_with_predicate<'a>(
		&'a self,
		predicate: &'a Iri,
	) -> impl Iterator<Item = &'a RelationshipTuple> {
		self.relationships()
			.iter()
			.filter(move |tuple| tuple.predicate == predicate.as_str())
	}
}

impl ObjectReader for DigitalObject {
	type Error = Infallible;

	fn pid(&self) -> &str {
		&self.pid
	}

	fn state_code(&self) -> &str {
		&self.state
	}

	fn label(&self) -> Option<&str> {
		self.label.as_deref()
	}

	fn owner_id(&self) -> Option<&str> {
		self.owner_id.as_deref()
	}

	fn created_date(&self) -> Option<DateTime<Utc>> {
		self.created_date
	}

	fn last_modified_date(&self) -> Option<DateTime<Utc>> {
		self.last_modified_date
	}

	fn content_models(&self) -> &[IriBuf] {
		&self.content_models
	}

	fn datastreams(&self) -> &[Datastream] {
		&self.datastreams
	}

	fn datastream_content(&self, id: &str) -> Result<Option<Cow<'_, str>>, Infallible> {
		Ok(self
			.datastreams
			.iter()
			.find(|ds| ds.id == id)
			.and_then(|ds| ds.content.as_deref().map(Cow::Borrowed)))
	}

	fn relationships(&self) -> &[RelationshipTuple] {
		&self.relationships
	}
}
