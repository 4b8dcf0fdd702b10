//! Service and model description datastream parsing.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::Error;

/// Identifier of the method-map datastream of a service definition.
pub const METHOD_MAP_DSID: &str = "METHODMAP";

/// Identifier of the composite-model datastream of a content model.
pub const DS_COMPOSITE_MODEL_DSID: &str = "DS-COMPOSITE-MODEL";

/// Extracts the operation names declared by a method map.
///
/// Every `Method` element with an `operationName` attribute counts, in
/// document order.
pub fn parse_method_map(dsid: &str, content: &str) -> Result<Vec<String>, Error> {
	collect_attributes(dsid, content, "Method", b"operationName")
}

/// Extracts the datastream type identifiers declared by a composite model.
pub fn parse_composite_model(dsid: &str, content: &str) -> Result<Vec<String>, Error> {
	collect_attributes(dsid, content, "dsTypeModel", b"ID")
}

fn collect_attributes(
	dsid: &str,
	content: &str,
	element: &str,
	attribute: &[u8],
) -> Result<Vec<String>, Error> {
	let mut reader = Reader::from_str(content);
	let mut values = Vec::new();

	loop {
		match reader.read_event().map_err(|e| Error::MalformedDatastream {
			dsid: dsid.to_owned(),
			source: e,
		})? {
			Event::Start(e) | Event::Empty(e) => {
				if local_name(e.name().as_ref()) == element {
					values.extend(attribute_value(&e, attribute));
				}
			}
			Event::Eof => break,
			_ => {}
		}
	}

	Ok(values)
}

fn attribute_value(e: &BytesStart, name: &[u8]) -> Option<String> {
	e.attributes()
		.flatten()
		.find(|attr| attr.key.as_ref() == name)
		.map(|attr| String::from_utf8_lossy(&attr.value).into_owned())
}

/// Local part of a possibly prefixed XML name.
fn local_name(name: &[u8]) -> String {
	let name = String::from_utf8_lossy(name);
	match name.rfind(':') {
		Some(i) => name[i + 1..].to_owned(),
		None => name.into_owned(),
	}
}
