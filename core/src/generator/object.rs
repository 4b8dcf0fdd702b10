use rdf_types::{Literal, LiteralType, Term, XSD_STRING};

use super::{base, TripleGenerator};
use crate::object::Datastream;
use crate::{dc, vocab, Error, ObjectReader, RelationshipTuple, Triple, TripleSet};

/// Generator for the base object content model.
///
/// The richest of the generators: core object properties, per-datastream
/// properties, Dublin Core field triples and relationship triples.
#[derive(Debug, Clone, Copy, Default)]
pub struct CoreObjectGenerator;

impl TripleGenerator for CoreObjectGenerator {
	fn triples_for_object<R: ObjectReader>(&self, reader: &R) -> Result<TripleSet, Error> {
		let mut triples = TripleSet::new();
		let object = Term::iri(vocab::object_uri(reader.pid())?);

		base::push_date(
			&mut triples,
			&object,
			vocab::MODEL_CREATED_DATE,
			reader.created_date(),
		);
		base::push_literal(&mut triples, &object, vocab::MODEL_LABEL, reader.label());
		base::push_literal(
			&mut triples,
			&object,
			vocab::MODEL_OWNER_ID,
			reader.owner_id(),
		);
		base::push_resource(
			&mut triples,
			&object,
			vocab::MODEL_STATE,
			Some(base::state_resource(reader.state_code())?.to_owned()),
		);
		base::push_date(
			&mut triples,
			&object,
			vocab::VIEW_LAST_MODIFIED_DATE,
			reader.last_modified_date(),
		);

		for datastream in reader.datastreams() {
			datastream_triples(&mut triples, reader, &object, datastream)?;
		}

		for tuple in reader.relationships() {
			triples.insert(relationship_triple(tuple)?);
		}

		Ok(triples)
	}
}

fn datastream_triples<R: ObjectReader>(
	triples: &mut TripleSet,
	reader: &R,
	object: &Term,
	datastream: &Datastream,
) -> Result<(), Error> {
	let subject = Term::iri(vocab::datastream_uri(reader.pid(), &datastream.id)?);

	base::push_resource(
		triples,
		object,
		vocab::VIEW_DISSEMINATES,
		Some(vocab::datastream_uri(reader.pid(), &datastream.id)?),
	);
	base::push_resource(
		triples,
		&subject,
		vocab::VIEW_DISSEMINATION_TYPE,
		Some(vocab::dissemination_type_uri(&datastream.id)?),
	);
	base::push_bool(
		triples,
		&subject,
		vocab::VIEW_IS_VOLATILE,
		datastream.control_group.is_volatile(),
	);
	base::push_date(
		triples,
		&subject,
		vocab::VIEW_LAST_MODIFIED_DATE,
		datastream.created_date,
	);
	base::push_literal(
		triples,
		&subject,
		vocab::VIEW_MIME_TYPE,
		datastream.mime_type.as_deref(),
	);
	base::push_resource(
		triples,
		&subject,
		vocab::MODEL_STATE,
		Some(base::state_resource(&datastream.state)?.to_owned()),
	);

	if datastream.id == dc::DC_DSID {
		dublin_core_triples(triples, reader, object, &datastream.id)?;
	}

	Ok(())
}

/// One triple per Dublin Core field occurrence; repeating fields each
/// produce their own triple.
fn dublin_core_triples<R: ObjectReader>(
	triples: &mut TripleSet,
	reader: &R,
	object: &Term,
	dsid: &str,
) -> Result<(), Error> {
	let content = reader
		.datastream_content(dsid)
		.map_err(|e| Error::object_read(reader.pid(), e))?;

	let Some(content) = content else {
		return Ok(());
	};

	for field in dc::parse_record(dsid, &content)? {
		let predicate = vocab::dc_predicate(&field.element)?;
		base::push_lang_literal(
			triples,
			object,
			&predicate,
			&field.value,
			field.language.as_deref(),
		)?;
	}

	Ok(())
}

/// Translates a stored relationship fact into an index triple, keeping its
/// literal, typed or resource nature.
fn relationship_triple(tuple: &RelationshipTuple) -> Result<Triple, Error> {
	let subject = Term::iri(vocab::parse_uri(tuple.subject.clone())?);
	let predicate = Term::iri(vocab::parse_uri(tuple.predicate.clone())?);

	let object = if tuple.is_literal {
		let type_ = match &tuple.datatype {
			Some(datatype) => LiteralType::Any(vocab::parse_uri(datatype.clone())?),
			None => LiteralType::Any(XSD_STRING.to_owned()),
		};
		Term::Literal(Literal::new(tuple.object.clone(), type_))
	} else {
		Term::iri(vocab::parse_uri(tuple.object.clone())?)
	};

	Ok(rdf_types::Triple(subject, predicate, object))
}
