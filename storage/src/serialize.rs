//! Text serialization of a triple corpus.

use std::io::{self, Write};

use rdf_types::RdfDisplay;
use resindex::{ExportFormat, TripleSet};

/// Writes the corpus in the requested serialization.
pub fn write_corpus(
	out: &mut dyn io::Write,
	triples: &TripleSet,
	format: ExportFormat,
) -> io::Result<()> {
	match format {
		ExportFormat::NTriples => write_ntriples(out, triples),
		ExportFormat::Turtle => write_turtle(out, triples),
	}
}

/// One triple per line, in set order.
pub fn write_ntriples(out: &mut dyn io::Write, triples: &TripleSet) -> io::Result<()> {
	for triple in triples {
		writeln!(out, "{} .", triple.rdf_display())?;
	}
	Ok(())
}

/// Triples grouped by subject, predicate/object pairs separated by `;`.
///
/// The set's ordering sorts by subject first, so grouping is a single pass.
pub fn write_turtle(out: &mut dyn io::Write, triples: &TripleSet) -> io::Result<()> {
	let mut subject = None;

	for rdf_types::Triple(s, p, o) in triples {
		if subject == Some(s) {
			writeln!(out, " ;")?;
		} else {
			if subject.is_some() {
				writeln!(out, " .")?;
				writeln!(out)?;
			}
			writeln!(out, "{}", s.rdf_display())?;
			subject = Some(s);
		}
		write!(out, "\t{} {}", p.rdf_display(), o.rdf_display())?;
	}

	if subject.is_some() {
		writeln!(out, " .")?;
	}

	Ok(())
}
