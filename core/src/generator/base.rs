//! Shared triple construction helpers.
//!
//! Every `push_*` helper silently omits the triple when the optional value
//! is absent: missing metadata must not generate noise triples.

use chrono::{DateTime, Utc};
use iref::{Iri, IriBuf};
use langtag::LangTagBuf;
use rdf_types::{Literal, LiteralType, Term, XSD_STRING};
use xsd_types::{XSD_BOOLEAN, XSD_DATE_TIME};

use crate::{vocab, Error, TripleSet};

pub(super) fn push_resource(
	set: &mut TripleSet,
	subject: &Term,
	predicate: &Iri,
	object: Option<IriBuf>,
) {
	if let Some(object) = object {
		set.insert(rdf_types::Triple(
			subject.clone(),
			Term::iri(predicate.to_owned()),
			Term::iri(object),
		));
	}
}

pub(super) fn push_literal(
	set: &mut TripleSet,
	subject: &Term,
	predicate: &Iri,
	value: Option<&str>,
) {
	if let Some(value) = value {
		push_term(
			set,
			subject,
			predicate,
			Term::Literal(Literal::new(
				value.to_owned(),
				LiteralType::Any(XSD_STRING.to_owned()),
			)),
		);
	}
}

/// Pushes a literal carrying an optional language tag.
pub(super) fn push_lang_literal(
	set: &mut TripleSet,
	subject: &Term,
	predicate: &Iri,
	value: &str,
	language: Option<&str>,
) -> Result<(), Error> {
	let type_ = match language {
		Some(tag) => LiteralType::LangString(
			LangTagBuf::new(tag.to_owned())
				.map_err(|_| Error::InvalidLanguageTag(tag.to_owned()))?,
		),
		None => LiteralType::Any(XSD_STRING.to_owned()),
	};
	push_term(
		set,
		subject,
		predicate,
		Term::Literal(Literal::new(value.to_owned(), type_)),
	);
	Ok(())
}

pub(super) fn push_date(
	set: &mut TripleSet,
	subject: &Term,
	predicate: &Iri,
	date: Option<DateTime<Utc>>,
) {
	if let Some(date) = date {
		push_term(
			set,
			subject,
			predicate,
			Term::Literal(Literal::new(
				date_time_lexical(&date),
				LiteralType::Any(XSD_DATE_TIME.to_owned()),
			)),
		);
	}
}

pub(super) fn push_bool(set: &mut TripleSet, subject: &Term, predicate: &Iri, value: bool) {
	push_term(
		set,
		subject,
		predicate,
		Term::Literal(Literal::new(
			if value { "true" } else { "false" }.to_owned(),
			LiteralType::Any(XSD_BOOLEAN.to_owned()),
		)),
	);
}

fn push_term(set: &mut TripleSet, subject: &Term, predicate: &Iri, object: Term) {
	set.insert(rdf_types::Triple(
		subject.clone(),
		Term::iri(predicate.to_owned()),
		object,
	));
}

/// Canonical XML-Schema `dateTime` lexical form: UTC, millisecond
/// precision, `Z` suffix.
pub fn date_time_lexical(date: &DateTime<Utc>) -> String {
	date.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

/// Maps a raw state code to its state resource.
pub fn state_resource(code: &str) -> Result<&'static Iri, Error> {
	match code {
		"A" => Ok(vocab::MODEL_ACTIVE),
		"I" => Ok(vocab::MODEL_INACTIVE),
		"D" => Ok(vocab::MODEL_DELETED),
		other => Err(Error::UnrecognizedState(other.to_owned())),
	}
}

#[cfg(test)]
mod tests {
	use chrono::TimeZone;

	use super::*;

	#[test]
	fn dates_use_the_canonical_lexical_form() {
		let date = Utc.with_ymd_and_hms(2006, 3, 12, 4, 5, 6).unwrap()
			+ chrono::Duration::milliseconds(7);
		assert_eq!(date_time_lexical(&date), "2006-03-12T04:05:06.007Z");
	}

	#[test]
	fn state_codes_map_to_state_resources() {
		assert_eq!(state_resource("A").unwrap(), vocab::MODEL_ACTIVE);
		assert_eq!(state_resource("I").unwrap(), vocab::MODEL_INACTIVE);
		assert_eq!(state_resource("D").unwrap(), vocab::MODEL_DELETED);
		assert!(matches!(
			state_resource("X"),
			Err(Error::UnrecognizedState(code)) if code == "X"
		));
	}
}
