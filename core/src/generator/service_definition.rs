use rdf_types::Term;

use super::{base, TripleGenerator};
use crate::{service, vocab, Error, ObjectReader, TripleSet};

/// Generator for service definition objects.
///
/// Emits one `definesMethod` triple per method declared in the definition's
/// method map. A definition without a method-map datastream indexes to an
/// empty set.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServiceDefinitionGenerator;

impl TripleGenerator for ServiceDefinitionGenerator {
	fn triples_for_object<R: ObjectReader>(&self, reader: &R) -> Result<TripleSet, Error> {
		let mut triples = TripleSet::new();

		let content = reader
			.datastream_content(service::METHOD_MAP_DSID)
			.map_err(|e| Error::object_read(reader.pid(), e))?;

		let Some(content) = content else {
			return Ok(triples);
		};

		let subject = Term::iri(vocab::object_uri(reader.pid())?);
		for method in service::parse_method_map(service::METHOD_MAP_DSID, &content)? {
			base::push_literal(
				&mut triples,
				&subject,
				vocab::MODEL_DEFINES_METHOD,
				Some(&method),
			);
		}

		Ok(triples)
	}
}
