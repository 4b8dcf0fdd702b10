//! IRI constants of the repository system ontology.

use iref::{Iri, IriBuf};
use static_iref::iri;

use crate::Error;

/// Base content model declared by every regular digital object.
pub const FEDORA_OBJECT_3_0: &Iri = iri!("info:fedora/fedora-system:FedoraObject-3.0");

/// Content model of service definition objects.
pub const SERVICE_DEFINITION_3_0: &Iri = iri!("info:fedora/fedora-system:ServiceDefinition-3.0");

/// Content model of service deployment objects.
pub const SERVICE_DEPLOYMENT_3_0: &Iri = iri!("info:fedora/fedora-system:ServiceDeployment-3.0");

/// Content model of content model objects themselves.
pub const CONTENT_MODEL_3_0: &Iri = iri!("info:fedora/fedora-system:ContentModel-3.0");

pub const MODEL_CREATED_DATE: &Iri = iri!("info:fedora/fedora-system:def/model#createdDate");
pub const MODEL_LABEL: &Iri = iri!("info:fedora/fedora-system:def/model#label");
pub const MODEL_OWNER_ID: &Iri = iri!("info:fedora/fedora-system:def/model#ownerId");
pub const MODEL_STATE: &Iri = iri!("info:fedora/fedora-system:def/model#state");
pub const MODEL_ACTIVE: &Iri = iri!("info:fedora/fedora-system:def/model#Active");
pub const MODEL_INACTIVE: &Iri = iri!("info:fedora/fedora-system:def/model#Inactive");
pub const MODEL_DELETED: &Iri = iri!("info:fedora/fedora-system:def/model#Deleted");
pub const MODEL_DEFINES_METHOD: &Iri = iri!("info:fedora/fedora-system:def/model#definesMethod");
pub const MODEL_DEFINES_DATASTREAM: &Iri =
	iri!("info:fedora/fedora-system:def/model#definesDatastream");

pub const VIEW_LAST_MODIFIED_DATE: &Iri =
	iri!("info:fedora/fedora-system:def/view#lastModifiedDate");
pub const VIEW_DISSEMINATES: &Iri = iri!("info:fedora/fedora-system:def/view#disseminates");
pub const VIEW_DISSEMINATION_TYPE: &Iri =
	iri!("info:fedora/fedora-system:def/view#disseminationType");
pub const VIEW_IS_VOLATILE: &Iri = iri!("info:fedora/fedora-system:def/view#isVolatile");
pub const VIEW_MIME_TYPE: &Iri = iri!("info:fedora/fedora-system:def/view#mimeType");

/// Namespace of the Dublin Core 1.1 element set.
pub const DC_NAMESPACE: &str = "http://purl.org/dc/elements/1.1/";

/// Resource URI of the object itself.
pub fn object_uri(pid: &str) -> Result<IriBuf, Error> {
	parse_uri(format!("info:fedora/{pid}"))
}

/// Resource URI of one datastream of an object.
pub fn datastream_uri(pid: &str, dsid: &str) -> Result<IriBuf, Error> {
	parse_uri(format!("info:fedora/{pid}/{dsid}"))
}

/// Dissemination type shared by every datastream with the given id,
/// regardless of which object carries it.
pub fn dissemination_type_uri(dsid: &str) -> Result<IriBuf, Error> {
	parse_uri(format!("info:fedora/*/{dsid}"))
}

/// Predicate URI of one Dublin Core element.
pub fn dc_predicate(element: &str) -> Result<IriBuf, Error> {
	parse_uri(format!("{DC_NAMESPACE}{element}"))
}

pub fn parse_uri(uri: String) -> Result<IriBuf, Error> {
	IriBuf::new(uri).map_err(Error::InvalidUri)
}
