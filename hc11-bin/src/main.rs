//! 68HC11 emulator CLI
//!
//! Assembles a source file into the 64 KiB machine image and either runs
//! it to the halt sentinel, single-steps it interactively, or dumps the
//! loaded image.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use hc11_asm::Assembler;
use hc11_core::{Engine, Machine};

mod dump;
mod shell;

#[derive(Parser)]
#[command(
	name = "hc11",
	version,
	about = "A Motorola 68HC11 assembler and emulator",
	long_about = "Assembles 68HC11 assembly source into a 64 KiB memory image and \
	              executes it in a simulated processor with memory-mapped ports."
)]
struct Cli {
	/// Assembly source file
	#[arg(value_name = "SOURCE")]
	source: PathBuf,

	/// Run in interactive single-step mode
	#[arg(short, long)]
	step: bool,

	/// Dump the memory image after load instead of executing;
	/// writes to PATH when given, stdout otherwise
	#[arg(short, long, value_name = "PATH", num_args = 0..=1)]
	dump: Option<Option<PathBuf>>,

	/// Break the dump with a newline every 16 bytes
	#[arg(short, long)]
	readable: bool,

	/// Verbose output (-v, -vv, ...)
	#[arg(short, long, action = clap::ArgAction::Count)]
	verbose: u8,
}

fn main() {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	if let Err(e) = run(&cli) {
		eprintln!("Error: {e}");
		process::exit(1);
	}
}

fn run(cli: &Cli) -> anyhow::Result<()> {
	if cli.readable && cli.dump.is_none() {
		log::warn!("--readable is ignored without --dump");
	}

	let mut machine = Machine::new();
	let mut assembler = Assembler::new();
	assembler.assemble_file(&cli.source, &mut machine)?;
	log::info!("loaded {} labels", machine.labels.len());

	if let Some(target) = &cli.dump {
		return dump::write(&machine, target.as_deref(), cli.readable);
	}

	let engine = Engine::new();
	if cli.step {
		shell::run(&engine, &mut machine)?;
	} else {
		engine.run(&mut machine)?;
	}
	log::info!("execution ended at pc {:#06x}", machine.pc);
	Ok(())
}

fn init_logging(verbose: u8) {
	let level = match verbose {
		0 => log::LevelFilter::Error,
		1 => log::LevelFilter::Warn,
		2 => log::LevelFilter::Info,
		3 => log::LevelFilter::Debug,
		_ => log::LevelFilter::Trace,
	};

	env_logger::Builder::from_default_env().filter_level(level).init();
}

#[cfg(test)]
mod tests {
	use super::*;
	use clap::CommandFactory;

	#[test]
	fn cli_definition_is_consistent() {
		Cli::command().debug_assert();
	}

	#[test]
	fn dump_path_is_optional() {
		let cli = Cli::try_parse_from(["hc11", "f.asm", "--dump"]).unwrap();
		assert_eq!(cli.dump, Some(None));

		let cli = Cli::try_parse_from(["hc11", "--dump", "out.txt", "f.asm"]).unwrap();
		assert_eq!(cli.dump, Some(Some(PathBuf::from("out.txt"))));
		assert_eq!(cli.source, PathBuf::from("f.asm"));
	}

	#[test]
	fn step_and_readable_are_plain_switches() {
		let cli = Cli::try_parse_from(["hc11", "-s", "-r", "f.asm"]).unwrap();
		assert!(cli.step);
		assert!(cli.readable);
		assert!(cli.dump.is_none());
	}
}
