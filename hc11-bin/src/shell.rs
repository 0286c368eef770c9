//! Interactive single-step shell.
//!
//! Before each instruction the shell prints the next opcode and prompts
//! for inspection commands; any unrecognised input executes one
//! instruction. After the halt sentinel the prompt runs once more so the
//! final state can still be inspected.

use std::io::{self, BufRead, Write};

use hc11_core::{Engine, Machine, Step};

/// Drive the machine one instruction at a time from stdin.
pub fn run(engine: &Engine, machine: &mut Machine) -> anyhow::Result<()> {
	let stdin = io::stdin();
	let mut input = stdin.lock();
	loop {
		let opcode = machine.memory[machine.pc as usize];
		if opcode == 0x00 {
			break;
		}
		println!("Next inst : {opcode:#04x}");
		prompt(machine, &mut input)?;
		if engine.step(machine)? == Step::Halted {
			break;
		}
	}
	println!("Execution ended, you can still see last values");
	prompt(machine, &mut input)?;
	Ok(())
}

/// Read commands until one resumes execution (anything unrecognised).
fn prompt<R: BufRead>(machine: &Machine, input: &mut R) -> io::Result<()> {
	loop {
		print!("> ");
		io::stdout().flush()?;
		let mut line = String::new();
		if input.read_line(&mut line)? == 0 {
			// EOF: free-run the rest of the program.
			return Ok(());
		}
		let command = line.trim();
		match command {
			"ra" => println!("Register A: {:#04x}", machine.a),
			"rb" => println!("Register B: {:#04x}", machine.b),
			"rd" => println!("Register D: {:#06x}", machine.d()),
			"pc" => println!("PC : {:#06x}", machine.pc),
			"sp" => println!("SP : {:#06x}", machine.sp),
			"status" => print_state(machine),
			"labels" => {
				println!("{} labels loaded", machine.labels.len());
				for label in &machine.labels {
					println!("    {}: {:#06x}", label.name, label.value);
				}
			}
			"ports" => {
				for (i, value) in machine.ports.iter().enumerate() {
					let letter = char::from(b'a' + u8::try_from(i).unwrap_or(0));
					println!("    PORT{letter}: {value:#04x}");
				}
			}
			_ if command.starts_with("next") => {
				show_range(machine, command.trim_start_matches("next"), true);
			}
			_ if command.starts_with("prev") => {
				show_range(machine, command.trim_start_matches("prev"), false);
			}
			_ => return Ok(()),
		}
	}
}

/// Print `count` bytes of memory forward of PC, or backward up to it.
fn show_range(machine: &Machine, arg: &str, forward: bool) {
	let Ok(count) = arg.trim().parse::<u16>() else {
		println!("Invalid argument");
		return;
	};
	let start = if forward {
		machine.pc
	} else {
		// Clamp instead of running off the front of memory.
		machine.pc.saturating_sub(count)
	};
	let count = if forward { count } else { machine.pc - start };
	for offset in 0..count {
		let Some(addr) = start.checked_add(offset) else {
			println!("Outside of memory range");
			return;
		};
		println!("{addr:04x}: {:02x}", machine.memory[addr as usize]);
	}
}

fn print_state(machine: &Machine) {
	println!("ACC A: {:#04x}", machine.a);
	println!("ACC B: {:#04x}", machine.b);
	println!("ACC D: {:#06x}", machine.d());
	println!("SP: {:#06x}", machine.sp);
	println!("PC: {:#06x}", machine.pc);
	print!("Status : ");
	let status = machine.ccr.to_byte();
	for i in 0..8 {
		print!("{}", (status >> i) & 1);
	}
	println!();
	println!("Next memory range");
	for offset in 0..10u16 {
		let Some(addr) = machine.pc.checked_add(offset) else {
			println!("Outside of memory range");
			break;
		};
		println!("{addr:04x}: {:02x}", machine.memory[addr as usize]);
	}
}
