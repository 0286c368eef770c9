//! The two-pass assembler.
//!
//! Pass 1 walks the source with a running address cursor, recording `equ`
//! constants and code labels; pass 2 re-walks it encoding instruction
//! bytes straight into the machine's memory. Forward references work
//! because pass 2 reads the finished table; the sizing rules of both
//! passes are identical by construction, so the cursors agree at
//! end-of-file.

use std::fs;
use std::path::Path;

use hc11_core::instructions::{self, AddressingMode, Instruction};
use hc11_core::{Label, LabelKind, Machine};

use crate::error::{AsmError, AsmResult};
use crate::lexer::{self, Statement};
use crate::operand::OperandExpr;
use crate::symbols::SymbolTable;

/// Translates assembly source into a loaded [`Machine`] image.
#[derive(Debug, Default)]
pub struct Assembler {
	symbols: SymbolTable,
}

impl Assembler {
	/// A fresh assembler with an empty label table.
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Read a source file and assemble it into the machine.
	///
	/// # Errors
	/// [`AsmError::Io`] when the file cannot be read; otherwise any
	/// assembly error from [`Assembler::assemble`].
	pub fn assemble_file(&mut self, path: &Path, machine: &mut Machine) -> AsmResult<()> {
		let source = fs::read_to_string(path).map_err(|source| AsmError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		self.assemble(&source, machine)
	}

	/// Assemble source text into the machine: program bytes into memory,
	/// the frozen label table into `machine.labels`, and the initial PC
	/// from the last `org` preceding the first instruction.
	///
	/// # Errors
	/// The first fatal error of either pass, with its source line.
	pub fn assemble(&mut self, source: &str, machine: &mut Machine) -> AsmResult<()> {
		let first_end = self.first_pass(source)?;
		log::debug!("first pass done: {} labels, cursor at {first_end:#06x}", self.symbols.len());
		let second_end = self.second_pass(source, machine)?;
		debug_assert_eq!(first_end, second_end, "pass cursors diverged");
		machine.labels = std::mem::take(&mut self.symbols).into_labels();
		log::debug!("second pass done: pc starts at {:#06x}", machine.pc);
		Ok(())
	}

	/// Pass 1: assign addresses and build the label table.
	fn first_pass(&mut self, source: &str) -> AsmResult<u16> {
		let mut cursor: u16 = 0;
		for (index, raw) in source.lines().enumerate() {
			let line = index + 1;
			match lexer::scan(raw, line)? {
				Statement::Empty => {}
				Statement::Equ {
					name,
					value,
				} => {
					let expr = OperandExpr::parse(&value, line)?;
					let (value, mode) = self.eval(&expr, line)?;
					self.symbols.define(Label {
						name,
						value,
						mode,
						kind: LabelKind::Constant,
						line,
					})?;
				}
				Statement::Org {
					addr,
				} => {
					let expr = OperandExpr::parse(&addr, line)?;
					let (value, _) = self.eval(&expr, line)?;
					cursor = value;
				}
				Statement::Line {
					label,
					mnemonic,
					operand,
				} => {
					if let Some(name) = label {
						self.symbols.define(Label {
							name,
							value: cursor,
							mode: AddressingMode::Extended,
							kind: LabelKind::Label,
							line,
						})?;
					}
					if let Some(name) = mnemonic {
						let inst = find_instruction(&name, line)?;
						check_arity(inst, operand.as_deref(), line)?;
						let size = match operand {
							Some(text) => {
								let expr = OperandExpr::parse(&text, line)?;
								1 + self.operand_width(inst, &expr, line)
							}
							None => 1,
						};
						cursor = cursor.wrapping_add(size);
					}
				}
			}
		}
		Ok(cursor)
	}

	/// Pass 2: re-walk the source and emit bytes at the same cursor.
	fn second_pass(&mut self, source: &str, machine: &mut Machine) -> AsmResult<u16> {
		let mut cursor: u16 = 0;
		let mut origin: u16 = 0;
		let mut emitted = false;
		for (index, raw) in source.lines().enumerate() {
			let line = index + 1;
			match lexer::scan(raw, line)? {
				Statement::Empty
				| Statement::Equ {
					..
				} => {}
				Statement::Org {
					addr,
				} => {
					let expr = OperandExpr::parse(&addr, line)?;
					let (value, _) = self.eval(&expr, line)?;
					cursor = value;
					if !emitted {
						origin = value;
					}
				}
				Statement::Line {
					mnemonic,
					operand,
					..
				} => {
					if let Some(name) = mnemonic {
						let inst = find_instruction(&name, line)?;
						check_arity(inst, operand.as_deref(), line)?;
						let bytes = self.encode(inst, operand.as_deref(), cursor, line)?;
						for byte in bytes {
							machine.memory[cursor as usize] = byte;
							cursor = cursor.wrapping_add(1);
						}
						emitted = true;
					}
				}
			}
		}
		machine.pc = origin;
		Ok(cursor)
	}

	/// Resolve an operand expression to a value and addressing class, for
	/// directives (symbols must already be defined).
	fn eval(&self, expr: &OperandExpr, line: usize) -> AsmResult<(u16, AddressingMode)> {
		match expr {
			OperandExpr::Immediate(value) => Ok((*value, AddressingMode::Immediate)),
			OperandExpr::Direct(value) => Ok((u16::from(*value), AddressingMode::Direct)),
			OperandExpr::Extended(value) => Ok((*value, AddressingMode::Extended)),
			OperandExpr::Symbol(name) => {
				let record = self.symbols.get(name).ok_or_else(|| AsmError::UnknownSymbol {
					line,
					name: name.clone(),
				})?;
				Ok((record.value, record.mode))
			}
		}
	}

	/// Resolve an instruction operand. An identifier takes its recorded
	/// addressing class only when it names a constant defined on an
	/// earlier line; anything else resolves as an extended address. Pass 1
	/// sizes with the same rule, which is what keeps the cursors in step.
	fn resolve(
		&self,
		expr: &OperandExpr,
		line: usize,
	) -> AsmResult<(u16, AddressingMode, bool)> {
		match expr {
			OperandExpr::Immediate(value) => Ok((*value, AddressingMode::Immediate, false)),
			OperandExpr::Direct(value) => Ok((u16::from(*value), AddressingMode::Direct, false)),
			OperandExpr::Extended(value) => Ok((*value, AddressingMode::Extended, false)),
			OperandExpr::Symbol(name) => {
				let record = self.symbols.get(name).ok_or_else(|| AsmError::UnknownSymbol {
					line,
					name: name.clone(),
				})?;
				if record.kind == LabelKind::Constant && record.line < line {
					Ok((record.value, record.mode, true))
				} else {
					Ok((record.value, AddressingMode::Extended, true))
				}
			}
		}
	}

	/// Operand bytes an instruction will encode, by pass-1 rules.
	fn operand_width(&self, inst: &Instruction, expr: &OperandExpr, line: usize) -> u16 {
		if inst.is_relative() {
			return 1;
		}
		let mode = match expr {
			OperandExpr::Immediate(_) => AddressingMode::Immediate,
			OperandExpr::Direct(_) => AddressingMode::Direct,
			OperandExpr::Extended(_) => AddressingMode::Extended,
			OperandExpr::Symbol(name) => match self.symbols.get(name) {
				Some(record) if record.kind == LabelKind::Constant && record.line < line => {
					record.mode
				}
				// Forward references can only be code labels.
				_ => AddressingMode::Extended,
			},
		};
		inst.operand_size(mode)
	}

	/// Encode one instruction line: opcode byte, then operand bytes in
	/// big-endian order.
	fn encode(
		&self,
		inst: &Instruction,
		operand: Option<&str>,
		cursor: u16,
		line: usize,
	) -> AsmResult<Vec<u8>> {
		let Some(text) = operand else {
			// Arity is already checked: no operand means inherent.
			let opcode = inst.opcode(AddressingMode::Inherent).unwrap_or_else(|| {
				unreachable!("{} has no inherent encoding", inst.name())
			});
			return Ok(vec![opcode]);
		};

		let expr = OperandExpr::parse(text, line)?;
		let (value, mode, from_symbol) = self.resolve(&expr, line)?;

		if inst.is_relative() {
			let byte = if from_symbol {
				// The branch itself is two bytes; the displacement is
				// relative to the PC after it.
				let displacement = i32::from(value) - i32::from(cursor) - 2;
				if !(-128..=127).contains(&displacement) {
					return Err(AsmError::RelativeOutOfRange {
						line,
						displacement,
					});
				}
				(displacement as i8) as u8
			} else {
				if value > 0xFF {
					return Err(AsmError::RelativeOutOfRange {
						line,
						displacement: i32::from(value),
					});
				}
				(value & 0xFF) as u8
			};
			let opcode = inst.opcode(AddressingMode::Relative).unwrap_or_else(|| {
				unreachable!("{} has no relative encoding", inst.name())
			});
			return Ok(vec![opcode, byte]);
		}

		if mode == AddressingMode::Immediate && !inst.imm16 && value > 0xFF {
			return Err(AsmError::ImmediateTooLarge {
				line,
				name: inst.name().to_string(),
				value,
			});
		}

		let opcode = inst.opcode(mode).ok_or(AsmError::InvalidAddressingMode {
			line,
			name: inst.name().to_string(),
			mode,
		})?;

		let mut bytes = vec![opcode];
		match inst.operand_size(mode) {
			1 => bytes.push((value & 0xFF) as u8),
			2 => {
				bytes.push((value >> 8) as u8);
				bytes.push((value & 0xFF) as u8);
			}
			_ => {}
		}
		Ok(bytes)
	}
}

/// Look up a mnemonic, mapping a miss to the assembly error.
fn find_instruction(name: &str, line: usize) -> AsmResult<&'static Instruction> {
	instructions::lookup_by_name(name).ok_or_else(|| AsmError::UnknownMnemonic {
		line,
		name: name.to_string(),
	})
}

/// Operand arity per the descriptor: inherent mnemonics take none,
/// everything else exactly one.
fn check_arity(inst: &Instruction, operand: Option<&str>, line: usize) -> AsmResult<()> {
	if inst.is_inherent() {
		if operand.is_some() {
			return Err(AsmError::Syntax {
				line,
				message: format!("`{}` takes no operand", inst.name()),
			});
		}
	} else if operand.is_none() {
		return Err(AsmError::Syntax {
			line,
			message: format!("`{}` requires an operand", inst.name()),
		});
	}
	Ok(())
}
