use super::TripleGenerator;
use crate::{Error, ObjectReader, TripleSet};

/// Generator for service deployment objects.
///
/// Deployments contribute no triples of their own; whatever else a
/// deployment object declares (the base object model, typically) is covered
/// by the other registered generators. Whether deployments should mirror
/// the method triples of service definitions is an open question recorded
/// in DESIGN.md.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServiceDeploymentGenerator;

impl TripleGenerator for ServiceDeploymentGenerator {
	fn triples_for_object<R: ObjectReader>(&self, _reader: &R) -> Result<TripleSet, Error> {
		Ok(TripleSet::new())
	}
}
