//! Memory image dump.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use hc11_core::Machine;

/// Write the full 64 KiB image, each byte as `0xNN` with a trailing
/// space, to the given path or stdout.
pub fn write(machine: &Machine, path: Option<&Path>, readable: bool) -> anyhow::Result<()> {
	match path {
		Some(path) => {
			let file = File::create(path)?;
			emit(machine, &mut BufWriter::new(file), readable)?;
		}
		None => {
			let stdout = io::stdout();
			emit(machine, &mut stdout.lock(), readable)?;
		}
	}
	Ok(())
}

/// In readable mode a newline lands before every 16th byte.
fn emit<W: Write>(machine: &Machine, out: &mut W, readable: bool) -> io::Result<()> {
	for (i, byte) in machine.memory.iter().enumerate() {
		if readable && i % 16 == 0 && i != 0 {
			writeln!(out)?;
		}
		write!(out, "{byte:#04x} ")?;
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn bytes_are_hex_with_a_trailing_space() {
		let mut machine = Machine::new();
		machine.memory[0] = 0xAB;
		machine.memory[1] = 0x05;
		let mut out = Vec::new();
		emit(&machine, &mut out, false).unwrap();
		let text = String::from_utf8(out).unwrap();
		assert!(text.starts_with("0xab 0x05 0x00 "));
		assert!(!text.contains('\n'));
	}

	#[test]
	fn readable_mode_breaks_every_sixteen_bytes() {
		let machine = Machine::new();
		let mut out = Vec::new();
		emit(&machine, &mut out, true).unwrap();
		let text = String::from_utf8(out).unwrap();
		let first_line = text.lines().next().unwrap();
		assert_eq!(first_line.split_whitespace().count(), 16);
		// 65536 bytes over 16 per line.
		assert_eq!(text.lines().count(), 4096);
	}
}
