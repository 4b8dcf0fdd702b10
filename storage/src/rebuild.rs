//! Offline full rebuild of the resource index.
//!
//! The rebuilder replays every object in low-level storage through the same
//! generator chain as the live index into a freshly cleared store. Live
//! indexing is all-or-nothing per call; the rebuild is deliberately
//! best-effort per object, because aborting a long maintenance run over one
//! bad object helps nobody.

use std::io::{self, Write};

use resindex::{
	ClearableStore, DigitalObject, Error, ModelBasedTripleGenerator, TripleGenerator,
	TriplestoreWriter,
};

/// Operator confirmation hook, used when a store cannot be cleared in
/// place.
pub trait Prompt {
	/// Asks the operator a yes/no question.
	fn confirm(&mut self, message: &str) -> io::Result<bool>;
}

/// Reads the answer from standard input.
#[derive(Debug, Default)]
pub struct StdinPrompt;

impl Prompt for StdinPrompt {
	fn confirm(&mut self, message: &str) -> io::Result<bool> {
		let mut answer = String::new();
		loop {
			eprint!("{message} [yes/no] ");
			io::stderr().flush()?;
			answer.clear();
			io::stdin().read_line(&mut answer)?;
			match answer.trim() {
				"yes" | "y" => return Ok(true),
				"no" | "n" => return Ok(false),
				_ => {}
			}
		}
	}
}

/// Answers yes to everything, for unattended runs.
#[derive(Debug, Default)]
pub struct AssumeYes;

impl Prompt for AssumeYes {
	fn confirm(&mut self, _message: &str) -> io::Result<bool> {
		Ok(true)
	}
}

/// Errors that abort a rebuild outright; per-object failures do not.
#[derive(Debug, thiserror::Error)]
pub enum RebuildError<S: std::error::Error + 'static> {
	/// The operator declined to confirm a manually cleared store.
	#[error("rebuild aborted by operator")]
	Aborted,

	#[error(transparent)]
	Io(#[from] io::Error),

	#[error("unable to prepare the triplestore")]
	Store(#[source] S),
}

/// One object the rebuild could not index.
#[derive(Debug)]
pub struct FailureRecord {
	/// PID, when the object could at least be identified.
	pub pid: Option<String>,

	pub error: Box<dyn std::error::Error + Send + Sync>,
}

/// Outcome of a full rebuild pass.
#[derive(Debug, Default)]
pub struct RebuildReport {
	pub succeeded: usize,
	pub failures: Vec<FailureRecord>,
}

impl RebuildReport {
	pub fn total(&self) -> usize {
		self.succeeded + self.failures.len()
	}
}

/// Replays every object in low-level storage into a cleared store.
pub struct Rebuilder<W> {
	generator: ModelBasedTripleGenerator,
	store: W,
}

impl<W: ClearableStore> Rebuilder<W> {
	pub fn new(store: W) -> Self {
		Self::with_generator(ModelBasedTripleGenerator::new(), store)
	}

	pub fn with_generator(generator: ModelBasedTripleGenerator, store: W) -> Self {
		Self { generator, store }
	}

	/// Prepares the store for the rebuild.
	///
	/// A listable store is physically cleared and re-created empty. A store
	/// that cannot be cleared in place requires the operator to confirm it
	/// was emptied manually; declining aborts the rebuild. The prompt is
	/// never skipped silently.
	pub fn init<P: Prompt>(&mut self, prompt: &mut P) -> Result<(), RebuildError<W::Error>> {
		if self.store.is_listable() {
			log::info!("clearing the triplestore");
			self.store.clear().map_err(RebuildError::Store)
		} else if prompt.confirm(
			"The target store cannot be cleared automatically. \
			 Has it been manually emptied?",
		)? {
			Ok(())
		} else {
			Err(RebuildError::Aborted)
		}
	}

	/// Indexes one object.
	///
	/// The store is empty by contract, so this is an unconditional add with
	/// no diffing.
	pub fn add_object(&mut self, object: &DigitalObject) -> Result<(), Error> {
		let triples = self.generator.triples_for_object(object)?;
		self.store.add(&triples, false).map_err(Error::store)
	}

	/// Replays a full object iterator, folding per-object outcomes into a
	/// report. Failures are logged and recorded, never fatal to the batch.
	pub fn run<E>(
		&mut self,
		objects: impl Iterator<Item = Result<DigitalObject, E>>,
	) -> RebuildReport
	where
		E: std::error::Error + Send + Sync + 'static,
	{
		let mut report = RebuildReport::default();

		for entry in objects {
			match entry {
				Ok(object) => match self.add_object(&object) {
					Ok(()) => {
						log::debug!("indexed {}", object.pid);
						report.succeeded += 1;
					}
					Err(e) => {
						log::warn!("unable to index {}: {e}", object.pid);
						report.failures.push(FailureRecord {
							pid: Some(object.pid.clone()),
							error: Box::new(e),
						});
					}
				},
				Err(e) => {
					log::warn!("unable to read object: {e}");
					report.failures.push(FailureRecord {
						pid: None,
						error: Box::new(e),
					});
				}
			}
		}

		report
	}

	/// Flushes pending updates and releases the store.
	pub fn finish(mut self) -> Result<W, RebuildError<W::Error>> {
		self.store.flush().map_err(RebuildError::Store)?;
		Ok(self.store)
	}
}
