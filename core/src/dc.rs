//! Dublin Core record parsing.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::Error;

/// Identifier of the Dublin Core datastream of an object.
pub const DC_DSID: &str = "DC";

/// The Dublin Core 1.1 element set.
const DC_ELEMENTS: &[&str] = &[
	"title",
	"creator",
	"subject",
	"description",
	"publisher",
	"contributor",
	"date",
	"type",
	"format",
	"identifier",
	"source",
	"language",
	"relation",
	"coverage",
	"rights",
];

/// One Dublin Core element occurrence.
///
/// Repeating elements each produce their own occurrence; values are never
/// concatenated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DcField {
	/// Local name of the element (`title`, `creator`, ...).
	pub element: String,

	pub value: String,

	/// Value of the `xml:lang` attribute, when present.
	pub language: Option<String>,
}

/// Parses an `oai_dc` record into its field occurrences.
///
/// Elements outside the Dublin Core 1.1 set are skipped; empty values
/// produce no field, matching the policy that absent metadata generates no
/// triple.
pub fn parse_record(dsid: &str, content: &str) -> Result<Vec<DcField>, Error> {
	let mut reader = Reader::from_str(content);
	let mut fields = Vec::new();
	let mut current: Option<(String, Option<String>)> = None;
	let mut text = String::new();

	loop {
		match reader.read_event().map_err(|e| malformed(dsid, e))? {
			Event::Start(e) => {
				let local = local_name(e.name().as_ref());
				if DC_ELEMENTS.contains(&local.as_str()) {
					current = Some((local, xml_lang(&e)));
					text.clear();
				}
			}
			Event::Text(e) => {
				if current.is_some() {
					text.push_str(&e.unescape().map_err(|e| malformed(dsid, e))?);
				}
			}
			Event::End(e) => {
				let local = local_name(e.name().as_ref());
				if current
					.as_ref()
					.is_some_and(|(element, _)| *element == local)
				{
					if let Some((element, language)) = current.take() {
						let value = text.trim();
						if !value.is_empty() {
							fields.push(DcField {
								element,
								value: value.to_owned(),
								language,
							});
						}
					}
				}
			}
			Event::Eof => break,
			_ => {}
		}
	}

	Ok(fields)
}

fn malformed(dsid: &str, source: impl Into<quick_xml::Error>) -> Error {
	Error::MalformedDatastream {
		dsid: dsid.to_owned(),
		source: source.into(),
	}
}

/// Local part of a possibly prefixed XML name.
fn local_name(name: &[u8]) -> String {
	let name = String::from_utf8_lossy(name);
	match name.rfind(':') {
		Some(i) => name[i + 1..].to_owned(),
		None => name.into_owned(),
	}
}

fn xml_lang(e: &BytesStart) -> Option<String> {
	for attr in e.attributes().flatten() {
		if attr.key.as_ref() == b"xml:lang" {
			let value = String::from_utf8_lossy(&attr.value).into_owned();
			if !value.is_empty() {
				return Some(value);
			}
		}
	}
	None
}

#[cfg(test)]
mod tests {
	use super::*;

	const RECORD: &str = r#"<oai_dc:dc
			xmlns:oai_dc="http://www.openarchives.org/OAI/2.0/oai_dc/"
			xmlns:dc="http://purl.org/dc/elements/1.1/">
		<dc:title>Winter Scene</dc:title>
		<dc:title xml:lang="fr">Paysage d'hiver</dc:title>
		<dc:creator>Brueghel</dc:creator>
		<dc:description></dc:description>
	</oai_dc:dc>"#;

	#[test]
	fn repeating_elements_stay_separate() {
		let fields = parse_record(DC_DSID, RECORD).unwrap();
		let titles: Vec<_> = fields.iter().filter(|f| f.element == "title").collect();
		assert_eq!(titles.len(), 2);
		assert_eq!(titles[0].value, "Winter Scene");
		assert_eq!(titles[0].language, None);
		assert_eq!(titles[1].value, "Paysage d'hiver");
		assert_eq!(titles[1].language.as_deref(), Some("fr"));
	}

	#[test]
	fn empty_values_are_dropped() {
		let fields = parse_record(DC_DSID, RECORD).unwrap();
		assert!(!fields.iter().any(|f| f.element == "description"));
	}

	#[test]
	fn malformed_content_names_the_datastream() {
		let result = parse_record(DC_DSID, "<oai_dc:dc><dc:title");
		assert!(matches!(
			result,
			Err(Error::MalformedDatastream { dsid, .. }) if dsid == DC_DSID
		));
	}
}
