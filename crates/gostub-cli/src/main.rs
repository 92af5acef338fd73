//! CLI entrypoint.

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser};
use gostub_core::{Config, GostubError};
use owo_colors::OwoColorize;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Parsed command-line options for the gostub CLI.
struct Cli {
	/// Input Go file (defaults to stdin; `-` also reads stdin)
	#[arg(short = 'i', long, env = "GOSTUB_INPUT", value_name = "PATH")]
	input: Option<PathBuf>,

	/// Output file (defaults to stdout)
	#[arg(short = 'o', long, env = "GOSTUB_OUTPUT", value_name = "PATH")]
	output: Option<PathBuf>,

	/// Only generate prototypes of exported functions
	#[arg(
		long,
		env = "GOSTUB_PUBLIC_ONLY",
		action = ArgAction::Set,
		default_value_t = true,
		value_name = "BOOL"
	)]
	public_only: bool,

	/// Include a //go:binary-only-package compilation comment
	#[arg(
		long,
		env = "GOSTUB_INCLUDE_COMP_COMMENT",
		action = ArgAction::Set,
		default_value_t = true,
		value_name = "BOOL"
	)]
	include_comp_comment: bool,

	/// Enable verbose mode, logging parse and render details to stderr
	#[arg(short = 'v', long, default_value_t = false)]
	verbose: bool,
}

impl Cli {
	/// Build the run configuration from parsed flags.
	fn config(&self) -> Config {
		Config {
			input: self.input.clone(),
			output: self.output.clone(),
			exported_only: self.public_only,
			include_directive: self.include_comp_comment,
		}
	}
}

/// Setup logging to stderr so it never mixes with a stub written to stdout.
fn setup_logging(verbose: bool) {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("debug")
		} else {
			EnvFilter::new("warn")
		}
	});

	tracing_subscriber::registry()
		.with(
			fmt::layer()
				.compact()
				.with_target(false)
				.with_writer(std::io::stderr),
		)
		.with(filter)
		.init();
}

/// Run one extraction and map failures to a single diagnostic line.
fn run_cmdline(cli: &Cli) -> Result<(), GostubError> {
	let config = cli.config();
	debug!(?config, "resolved configuration");
	gostub_core::run(&config)
}

fn main() {
	let cli = Cli::parse();
	setup_logging(cli.verbose);

	if let Err(e) = run_cmdline(&cli) {
		eprintln!("{} {e}", "error:".red().bold());
		process::exit(1);
	}
}
