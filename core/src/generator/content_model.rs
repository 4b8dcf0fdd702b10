use rdf_types::Term;

use super::{base, TripleGenerator};
use crate::{service, vocab, Error, ObjectReader, TripleSet};

/// Generator for content model objects.
///
/// Emits one `definesDatastream` triple per datastream type declared by the
/// model's composite-model datastream. A model without one indexes to an
/// empty set, like a definition without a method map.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentModelGenerator;

impl TripleGenerator for ContentModelGenerator {
	fn triples_for_object<R: ObjectReader>(&self, reader: &R) -> Result<TripleSet, Error> {
		let mut triples = TripleSet::new();

		let content = reader
			.datastream_content(service::DS_COMPOSITE_MODEL_DSID)
			.map_err(|e| Error::object_read(reader.pid(), e))?;

		let Some(content) = content else {
			return Ok(triples);
		};

		let subject = Term::iri(vocab::object_uri(reader.pid())?);
		for dsid in service::parse_composite_model(service::DS_COMPOSITE_MODEL_DSID, &content)? {
			base::push_literal(
				&mut triples,
				&subject,
				vocab::MODEL_DEFINES_DATASTREAM,
				Some(&dsid),
			);
		}

		Ok(triples)
	}
}
