use std::error::Error;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use resindex::{ExportFormat, TriplestoreWriter};
use resindex_storage::{
	AssumeYes, Backend, LocalStore, ObjectStore, Rebuilder, StdinPrompt, StoreConfig,
};

/// Offline maintenance tool for the resource index.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
	#[command(subcommand)]
	command: Command,

	/// Turn debugging information on.
	#[arg(short, long = "verbose", action = clap::ArgAction::Count, global = true)]
	verbosity: u8,
}

#[derive(Subcommand)]
enum Command {
	/// Replays every stored object into a freshly cleared triplestore.
	Rebuild {
		/// Directory holding the serialized digital objects.
		objects: PathBuf,

		/// Datastore configuration file.
		#[arg(short, long)]
		config: PathBuf,

		/// Answer yes to every prompt.
		#[arg(short, long)]
		yes: bool,
	},

	/// Serializes the entire indexed corpus.
	Export {
		/// Datastore configuration file.
		#[arg(short, long)]
		config: PathBuf,

		#[arg(short, long, default_value = "ntriples")]
		format: ExportFormat,

		/// Output file path; standard output by default.
		#[arg(short, long)]
		output: Option<PathBuf>,
	},
}

fn main() -> ExitCode {
	let args = Args::parse();

	stderrlog::new()
		.verbosity(args.verbosity as usize)
		.init()
		.expect("unable to initialize logger");

	match run(args.command) {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			log::error!("{e}");
			let mut source = e.source();
			while let Some(cause) = source {
				log::error!("caused by: {cause}");
				source = cause.source();
			}
			ExitCode::FAILURE
		}
	}
}

fn run(command: Command) -> Result<(), Box<dyn Error>> {
	match command {
		Command::Rebuild {
			objects,
			config,
			yes,
		} => rebuild(&objects, &config, yes),
		Command::Export {
			config,
			format,
			output,
		} => export(&config, format, output),
	}
}

fn open_store(config: &StoreConfig) -> Result<LocalStore, Box<dyn Error>> {
	match &config.backend {
		Backend::Local { path } => Ok(LocalStore::open(path.clone())?),
		Backend::Remote { url } => Err(format!(
			"datastore `{}` points at remote store `{url}`, \
			 which has no connector in this build",
			config.alias
		)
		.into()),
	}
}

fn rebuild(objects: &PathBuf, config: &PathBuf, yes: bool) -> Result<(), Box<dyn Error>> {
	let config = StoreConfig::load(config)?;

	let mut rebuilder = Rebuilder::new(open_store(&config)?);
	if yes {
		rebuilder.init(&mut AssumeYes)?;
	} else {
		rebuilder.init(&mut StdinPrompt)?;
	}

	let report = rebuilder.run(ObjectStore::new(objects).iter()?);
	let store = rebuilder.finish()?;

	log::info!("store `{}` now holds {} triples", config.alias, store.len());
	println!(
		"{} objects processed, {} succeeded, {} failed",
		report.total(),
		report.succeeded,
		report.failures.len()
	);
	for failure in &report.failures {
		match &failure.pid {
			Some(pid) => println!("  failed: {pid} ({})", failure.error),
			None => println!("  failed: <unreadable object> ({})", failure.error),
		}
	}

	Ok(())
}

fn export(
	config: &PathBuf,
	format: ExportFormat,
	output: Option<PathBuf>,
) -> Result<(), Box<dyn Error>> {
	let config = StoreConfig::load(config)?;
	let store = open_store(&config)?;

	let mut out = match output {
		Some(path) => Output::File(BufWriter::new(fs::File::create(path)?)),
		None => Output::StdOut(BufWriter::new(io::stdout().lock())),
	};

	store.export(&mut out, format)?;
	out.flush()?;
	Ok(())
}

enum Output {
	File(BufWriter<fs::File>),
	StdOut(BufWriter<io::StdoutLock<'static>>),
}

impl Write for Output {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		match self {
			Self::File(f) => f.write(buf),
			Self::StdOut(s) => s.write(buf),
		}
	}

	fn flush(&mut self) -> io::Result<()> {
		match self {
			Self::File(f) => f.flush(),
			Self::StdOut(s) => s.flush(),
		}
	}
}
