use std::error::Error as StdError;

/// Any failure surfaced by the resource index.
///
/// The causing error is always carried along, never swallowed: generation
/// errors keep their parse cause, store errors keep the writer's error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// A state code outside the fixed `A`/`I`/`D` table.
	#[error("unrecognized state code `{0}`")]
	UnrecognizedState(String),

	/// A PID, datastream id, relationship component or Dublin Core element
	/// that does not form a valid IRI.
	#[error(transparent)]
	InvalidUri(iref::InvalidIri<String>),

	#[error("invalid language tag `{0}`")]
	InvalidLanguageTag(String),

	/// Unparseable XML content in a datastream the generators consume.
	#[error("malformed content in datastream `{dsid}`")]
	MalformedDatastream {
		dsid: String,
		#[source]
		source: quick_xml::Error,
	},

	/// The underlying storage could not produce the object's content.
	#[error("unable to read object `{pid}`")]
	ObjectRead {
		pid: String,
		#[source]
		source: Box<dyn StdError + Send + Sync>,
	},

	/// Fail-fast configuration error raised before any indexing happens.
	#[error("index level must be 0 (off) or 1 (on), got {0}")]
	InvalidIndexLevel(i64),

	#[error("triplestore operation failed")]
	Store(#[source] Box<dyn StdError + Send + Sync>),
}

impl Error {
	pub fn object_read(pid: impl Into<String>, source: impl StdError + Send + Sync + 'static) -> Self {
		Self::ObjectRead {
			pid: pid.into(),
			source: Box::new(source),
		}
	}

	pub fn store(source: impl StdError + Send + Sync + 'static) -> Self {
		Self::Store(Box::new(source))
	}
}
