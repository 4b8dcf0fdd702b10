use std::collections::HashMap;

use chrono::{TimeZone, Utc};
use iref::Iri;
use rdf_types::{Literal, LiteralType, Term};
use resindex::generator::{
	ContentModelGenerator, CoreObjectGenerator, ServiceDefinitionGenerator,
	ServiceDeploymentGenerator,
};
use resindex::{
	vocab, ControlGroup, Datastream, DigitalObject, Error, ModelBasedTripleGenerator,
	RelationshipTuple, TripleGenerator, TripleSet,
};

fn term(iri: &Iri) -> Term {
	Term::iri(iri.to_owned())
}

fn with_predicate<'a>(
	triples: &'a TripleSet,
	predicate: &Iri,
) -> impl Iterator<Item = &'a resindex::Triple> + 'a {
	let predicate = term(predicate);
	triples.iter().filter(move |t| t.1 == predicate)
}

fn base_object(pid: &str) -> DigitalObject {
	let mut object = DigitalObject::new(pid);
	object
		.content_models
		.push(vocab::FEDORA_OBJECT_3_0.to_owned());
	object.label = Some("Image of Pavonia".into());
	object.owner_id = Some("fedoraAdmin".into());
	object.created_date = Some(Utc.with_ymd_and_hms(2008, 4, 30, 12, 0, 0).unwrap());
	object.last_modified_date = Some(Utc.with_ymd_and_hms(2008, 5, 1, 8, 30, 0).unwrap());
	object
}

const DC_RECORD: &str = r#"<oai_dc:dc
		xmlns:oai_dc="http://www.openarchives.org/OAI/2.0/oai_dc/"
		xmlns:dc="http://purl.org/dc/elements/1.1/">
	<dc:title>Pavonia</dc:title>
	<dc:title>Study in Red</dc:title>
	<dc:creator>Leighton</dc:creator>
</oai_dc:dc>"#;

const METHOD_MAP: &str = r#"<fmm:MethodMap xmlns:fmm="http://fedora.comm.nsdlib.org/service/methodmap" name="methods">
	<fmm:Method operationName="getThumbnail"/>
	<fmm:Method operationName="getRegion"/>
</fmm:MethodMap>"#;

#[test]
fn core_object_properties_are_emitted() {
	let object = base_object("demo:1");
	let triples = CoreObjectGenerator.triples_for_object(&object).unwrap();

	let subject = Term::iri(vocab::object_uri("demo:1").unwrap());
	assert!(triples.contains(&rdf_types::Triple(
		subject.clone(),
		term(vocab::MODEL_LABEL),
		Term::Literal(Literal::new(
			"Image of Pavonia".to_owned(),
			LiteralType::Any(rdf_types::XSD_STRING.to_owned())
		))
	)));
	assert!(triples.contains(&rdf_types::Triple(
		subject.clone(),
		term(vocab::MODEL_STATE),
		term(vocab::MODEL_ACTIVE)
	)));
	assert!(triples.contains(&rdf_types::Triple(
		subject,
		term(vocab::MODEL_CREATED_DATE),
		Term::Literal(Literal::new(
			"2008-04-30T12:00:00.000Z".to_owned(),
			LiteralType::Any(xsd_types::XSD_DATE_TIME.to_owned())
		))
	)));
}

#[test]
fn absent_optional_fields_produce_no_triples() {
	let mut object = base_object("demo:2");
	object.label = None;
	object.owner_id = None;
	object.created_date = None;
	object.last_modified_date = None;

	let triples = CoreObjectGenerator.triples_for_object(&object).unwrap();

	assert_eq!(with_predicate(&triples, vocab::MODEL_LABEL).count(), 0);
	assert_eq!(with_predicate(&triples, vocab::MODEL_OWNER_ID).count(), 0);
	assert_eq!(
		with_predicate(&triples, vocab::MODEL_CREATED_DATE).count(),
		0
	);
	// The state is never optional.
	assert_eq!(with_predicate(&triples, vocab::MODEL_STATE).count(), 1);
}

#[test]
fn present_label_produces_exactly_one_triple() {
	let triples = CoreObjectGenerator
		.triples_for_object(&base_object("demo:3"))
		.unwrap();
	assert_eq!(with_predicate(&triples, vocab::MODEL_LABEL).count(), 1);
}

#[test]
fn unrecognized_state_code_is_an_error() {
	let mut object = base_object("demo:4");
	object.state = "Z".into();

	let result = CoreObjectGenerator.triples_for_object(&object);
	assert!(matches!(
		result,
		Err(Error::UnrecognizedState(code)) if code == "Z"
	));
}

#[test]
fn datastreams_are_disseminated_with_their_properties() {
	let mut object = base_object("demo:5");
	object.datastreams.push(Datastream {
		id: "IMAGE".into(),
		control_group: ControlGroup::Redirect,
		state: "A".into(),
		mime_type: Some("image/jpeg".into()),
		created_date: Some(Utc.with_ymd_and_hms(2008, 4, 30, 12, 0, 0).unwrap()),
		content: None,
	});

	let triples = CoreObjectGenerator.triples_for_object(&object).unwrap();

	let object_term = Term::iri(vocab::object_uri("demo:5").unwrap());
	let ds_term = Term::iri(vocab::datastream_uri("demo:5", "IMAGE").unwrap());

	assert!(triples.contains(&rdf_types::Triple(
		object_term,
		term(vocab::VIEW_DISSEMINATES),
		ds_term.clone()
	)));
	assert!(triples.contains(&rdf_types::Triple(
		ds_term.clone(),
		term(vocab::VIEW_DISSEMINATION_TYPE),
		Term::iri(vocab::dissemination_type_uri("IMAGE").unwrap())
	)));
	// Redirect control group: externally held bytes, hence volatile.
	assert!(triples.contains(&rdf_types::Triple(
		ds_term.clone(),
		term(vocab::VIEW_IS_VOLATILE),
		Term::Literal(Literal::new(
			"true".to_owned(),
			LiteralType::Any(xsd_types::XSD_BOOLEAN.to_owned())
		))
	)));
	assert!(triples.contains(&rdf_types::Triple(
		ds_term,
		term(vocab::VIEW_MIME_TYPE),
		Term::Literal(Literal::new(
			"image/jpeg".to_owned(),
			LiteralType::Any(rdf_types::XSD_STRING.to_owned())
		))
	)));
}

#[test]
fn managed_datastreams_are_not_volatile() {
	let mut object = base_object("demo:6");
	object.datastreams.push(Datastream {
		id: "IMAGE".into(),
		control_group: ControlGroup::Managed,
		state: "A".into(),
		mime_type: None,
		created_date: None,
		content: None,
	});

	let triples = CoreObjectGenerator.triples_for_object(&object).unwrap();
	let ds_term = Term::iri(vocab::datastream_uri("demo:6", "IMAGE").unwrap());

	assert!(triples.contains(&rdf_types::Triple(
		ds_term,
		term(vocab::VIEW_IS_VOLATILE),
		Term::Literal(Literal::new(
			"false".to_owned(),
			LiteralType::Any(xsd_types::XSD_BOOLEAN.to_owned())
		))
	)));
}

#[test]
fn repeating_dublin_core_fields_each_produce_a_triple() {
	let mut object = base_object("demo:7");
	object
		.datastreams
		.push(Datastream::inline_xml("DC", DC_RECORD));

	let triples = CoreObjectGenerator.triples_for_object(&object).unwrap();
	let title = vocab::dc_predicate("title").unwrap();

	assert_eq!(with_predicate(&triples, &title).count(), 2);
	assert_eq!(
		with_predicate(&triples, &vocab::dc_predicate("creator").unwrap()).count(),
		1
	);
}

#[test]
fn relationship_tuples_keep_their_object_nature() {
	let mut object = base_object("demo:8");
	object.relationships.push(RelationshipTuple {
		subject: "info:fedora/demo:8".into(),
		predicate: "info:fedora/fedora-system:def/relations-external#isMemberOf".into(),
		object: "info:fedora/demo:collection".into(),
		is_literal: false,
		datatype: None,
	});
	object.relationships.push(RelationshipTuple {
		subject: "info:fedora/demo:8".into(),
		predicate: "http://example.org/terms#rank".into(),
		object: "12".into(),
		is_literal: true,
		datatype: Some("http://www.w3.org/2001/XMLSchema#int".into()),
	});

	let triples = CoreObjectGenerator.triples_for_object(&object).unwrap();
	let subject = Term::iri(vocab::object_uri("demo:8").unwrap());

	assert!(triples.contains(&rdf_types::Triple(
		subject.clone(),
		Term::iri(
			vocab::parse_uri(
				"info:fedora/fedora-system:def/relations-external#isMemberOf".to_owned()
			)
			.unwrap()
		),
		Term::iri(vocab::parse_uri("info:fedora/demo:collection".to_owned()).unwrap())
	)));
	assert!(triples.contains(&rdf_types::Triple(
		subject,
		Term::iri(vocab::parse_uri("http://example.org/terms#rank".to_owned()).unwrap()),
		Term::Literal(Literal::new(
			"12".to_owned(),
			LiteralType::Any(
				vocab::parse_uri("http://www.w3.org/2001/XMLSchema#int".to_owned()).unwrap()
			)
		))
	)));
}

#[test]
fn service_definition_methods_come_from_the_method_map() {
	let mut object = DigitalObject::new("demo:sdef");
	object
		.content_models
		.push(vocab::SERVICE_DEFINITION_3_0.to_owned());
	object
		.datastreams
		.push(Datastream::inline_xml("METHODMAP", METHOD_MAP));

	let triples = ServiceDefinitionGenerator
		.triples_for_object(&object)
		.unwrap();

	assert_eq!(
		with_predicate(&triples, vocab::MODEL_DEFINES_METHOD).count(),
		2
	);
}

#[test]
fn service_definition_without_method_map_is_empty() {
	let mut object = DigitalObject::new("demo:sdef-bare");
	object
		.content_models
		.push(vocab::SERVICE_DEFINITION_3_0.to_owned());

	let triples = ServiceDefinitionGenerator
		.triples_for_object(&object)
		.unwrap();
	assert!(triples.is_empty());
}

#[test]
fn service_deployments_contribute_nothing() {
	let mut object = base_object("demo:sdep");
	object
		.datastreams
		.push(Datastream::inline_xml("METHODMAP", METHOD_MAP));

	let triples = ServiceDeploymentGenerator
		.triples_for_object(&object)
		.unwrap();
	assert!(triples.is_empty());
}

#[test]
fn content_models_describe_their_datastream_types() {
	let mut object = DigitalObject::new("demo:cmodel");
	object
		.content_models
		.push(vocab::CONTENT_MODEL_3_0.to_owned());
	object.datastreams.push(Datastream::inline_xml(
		"DS-COMPOSITE-MODEL",
		r#"<dsCompositeModel xmlns="info:fedora/fedora-system:def/dsCompositeModel#">
			<dsTypeModel ID="DC"/>
			<dsTypeModel ID="IMAGE"/>
		</dsCompositeModel>"#,
	));

	let triples = ContentModelGenerator.triples_for_object(&object).unwrap();
	assert_eq!(
		with_predicate(&triples, vocab::MODEL_DEFINES_DATASTREAM).count(),
		2
	);
}

#[test]
fn dispatcher_unions_every_registered_model() {
	let mut object = base_object("demo:union");
	object
		.content_models
		.push(vocab::SERVICE_DEFINITION_3_0.to_owned());
	object
		.datastreams
		.push(Datastream::inline_xml("DC", DC_RECORD));
	object
		.datastreams
		.push(Datastream::inline_xml("METHODMAP", METHOD_MAP));

	let dispatcher = ModelBasedTripleGenerator::new();
	let union = dispatcher.triples_for_object(&object).unwrap();

	let mut expected = CoreObjectGenerator.triples_for_object(&object).unwrap();
	expected.extend(
		ServiceDefinitionGenerator
			.triples_for_object(&object)
			.unwrap(),
	);

	assert_eq!(union, expected);
}

#[test]
fn unregistered_models_contribute_nothing() {
	let mut object = base_object("demo:custom");
	object.content_models = vec![vocab::parse_uri("info:fedora/demo:CustomModel".to_owned())
		.unwrap()];
	object
		.datastreams
		.push(Datastream::inline_xml("DC", DC_RECORD));

	let triples = ModelBasedTripleGenerator::new()
		.triples_for_object(&object)
		.unwrap();
	assert!(triples.is_empty());
}

#[test]
fn empty_registration_table_indexes_nothing() {
	let object = base_object("demo:empty-table");
	let dispatcher = ModelBasedTripleGenerator::with_generators(HashMap::new());

	let triples = dispatcher.triples_for_object(&object).unwrap();
	assert!(triples.is_empty());
}

#[test]
fn generation_is_idempotent() {
	let mut object = base_object("demo:idem");
	object
		.datastreams
		.push(Datastream::inline_xml("DC", DC_RECORD));
	object.relationships.push(RelationshipTuple {
		subject: "info:fedora/demo:idem".into(),
		predicate: "http://example.org/terms#note".into(),
		object: "stable".into(),
		is_literal: true,
		datatype: None,
	});

	let dispatcher = ModelBasedTripleGenerator::new();
	let first = dispatcher.triples_for_object(&object).unwrap();
	let second = dispatcher.triples_for_object(&object).unwrap();

	assert_eq!(first, second);
}
