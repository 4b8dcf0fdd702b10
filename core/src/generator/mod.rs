//! Content-model-driven triple generation.
//!
//! Each content model a digital object declares selects one generator; the
//! [`ModelBasedTripleGenerator`] unions their output. The registration
//! table is fixed at construction — a closed strategy table, not a dynamic
//! plugin registry.

mod base;
mod content_model;
mod object;
mod service_definition;
mod service_deployment;

pub use base::{date_time_lexical, state_resource};
pub use content_model::ContentModelGenerator;
pub use object::CoreObjectGenerator;
pub use service_definition::ServiceDefinitionGenerator;
pub use service_deployment::ServiceDeploymentGenerator;

use std::collections::HashMap;

use iref::IriBuf;

use crate::{vocab, Error, ObjectReader, TripleSet};

/// Produces the complete set of triples implied by an object under one
/// content model.
pub trait TripleGenerator {
	/// Two calls over the same unchanged reader yield identical sets.
	fn triples_for_object<R: ObjectReader>(&self, reader: &R) -> Result<TripleSet, Error>;
}

/// The known generator kinds, one per registered content model.
#[derive(Debug, Clone, Copy)]
pub enum ModelGenerator {
	CoreObject(CoreObjectGenerator),
	ServiceDefinition(ServiceDefinitionGenerator),
	ServiceDeployment(ServiceDeploymentGenerator),
	ContentModel(ContentModelGenerator),
}

impl TripleGenerator for ModelGenerator {
	fn triples_for_object<R: ObjectReader>(&self, reader: &R) -> Result<TripleSet, Error> {
		match self {
			Self::CoreObject(g) => g.triples_for_object(reader),
			Self::ServiceDefinition(g) => g.triples_for_object(reader),
			Self::ServiceDeployment(g) => g.triples_for_object(reader),
			Self::ContentModel(g) => g.triples_for_object(reader),
		}
	}
}

/// Dispatches triple generation over every content model an object
/// declares, unioning the output of each registered generator.
///
/// Unregistered models contribute nothing; an object declaring only
/// unknown models indexes to an empty set.
#[derive(Debug, Clone)]
pub struct ModelBasedTripleGenerator {
	generators: HashMap<IriBuf, ModelGenerator>,
}

impl ModelBasedTripleGenerator {
	/// Builds the dispatcher with the standard four-entry registration
	/// table.
	pub fn new() -> Self {
		let mut generators = HashMap::new();
		generators.insert(
			vocab::FEDORA_OBJECT_3_0.to_owned(),
			ModelGenerator::CoreObject(CoreObjectGenerator),
		);
		generators.insert(
			vocab::SERVICE_DEFINITION_3_0.to_owned(),
			ModelGenerator::ServiceDefinition(ServiceDefinitionGenerator),
		);
		generators.insert(
			vocab::SERVICE_DEPLOYMENT_3_0.to_owned(),
			ModelGenerator::ServiceDeployment(ServiceDeploymentGenerator),
		);
		generators.insert(
			vocab::CONTENT_MODEL_3_0.to_owned(),
			ModelGenerator::ContentModel(ContentModelGenerator),
		);
		Self { generators }
	}

	/// Builds a dispatcher with an explicit registration table.
	pub fn with_generators(generators: HashMap<IriBuf, ModelGenerator>) -> Self {
		Self { generators }
	}

	/// The generator registered for the given content model, if any.
	pub fn generator(&self, model: &IriBuf) -> Option<&ModelGenerator> {
		self.generators.get(model)
	}
}

impl Default for ModelBasedTripleGenerator {
	fn default() -> Self {
		Self::new()
	}
}

impl TripleGenerator for ModelBasedTripleGenerator {
	fn triples_for_object<R: ObjectReader>(&self, reader: &R) -> Result<TripleSet, Error> {
		let mut triples = TripleSet::new();
		for model in reader.content_models() {
			if let Some(generator) = self.generators.get(model) {
				triples.extend(generator.triples_for_object(reader)?);
			}
		}
		Ok(triples)
	}
}
