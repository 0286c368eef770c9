//! Assembly errors.
//!
//! Every error is fatal and carries the 1-based source line it was raised
//! on; the caller reports it and exits. Nothing is retried.

use std::io;
use std::path::PathBuf;

use hc11_core::AddressingMode;
use thiserror::Error;

/// Result type for assembly operations.
pub type AsmResult<T> = Result<T, AsmError>;

/// Fatal errors raised while translating a source file.
#[derive(Error, Debug)]
pub enum AsmError {
	/// The source file cannot be opened or read.
	#[error("cannot read {}: {source}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	/// A line exceeds the scanner's fixed buffer.
	#[error("l.{line}: line is {length} characters long, the scanner caps lines at 99")]
	LineTooLong {
		line: usize,
		length: usize,
	},

	/// More whitespace-separated tokens than any line form allows.
	#[error("l.{line}: too many tokens on one line")]
	TooManyTokens {
		line: usize,
	},

	/// Wrong shape for a directive or instruction line.
	#[error("l.{line}: {message}")]
	Syntax {
		line: usize,
		message: String,
	},

	/// A literal does not parse in its indicated base, or overflows 16 bits.
	#[error("l.{line}: `{text}` is not a valid base-{base} number")]
	BadNumber {
		line: usize,
		text: String,
		base: u32,
	},

	/// An operand token matches no rule of the operand grammar.
	#[error("l.{line}: `{text}` is not a valid operand")]
	BadOperand {
		line: usize,
		text: String,
	},

	/// A token in mnemonic position is not in the instruction table.
	#[error("l.{line}: `{name}` is an undefined (or not implemented) instruction")]
	UnknownMnemonic {
		line: usize,
		name: String,
	},

	/// The resolved addressing mode is not in the descriptor's set.
	#[error("l.{line}: `{name}` does not support {mode} addressing")]
	InvalidAddressingMode {
		line: usize,
		name: String,
		mode: AddressingMode,
	},

	/// An 8-bit immediate literal exceeds 0xFF.
	#[error("l.{line}: `{name}` immediates only go up to 0xff, got {value:#06x}")]
	ImmediateTooLarge {
		line: usize,
		name: String,
		value: u16,
	},

	/// A direct-mode operand exceeds the direct page.
	#[error("l.{line}: direct addressing only reaches 0x00ff, got {value:#06x}")]
	DirectOutOfRange {
		line: usize,
		value: u16,
	},

	/// A relative operand or label displacement does not fit in 8 bits.
	#[error("l.{line}: relative displacement {displacement} does not fit in 8 bits")]
	RelativeOutOfRange {
		line: usize,
		displacement: i32,
	},

	/// An identifier operand is neither a constant nor a label.
	#[error("l.{line}: `{name}` is neither a constant nor a label")]
	UnknownSymbol {
		line: usize,
		name: String,
	},

	/// The bounded label table is full.
	#[error("l.{line}: label table is full, `{name}` does not fit (255 records)")]
	TooManyLabels {
		line: usize,
		name: String,
	},
}

impl AsmError {
	/// The source line the error was raised on, when it has one.
	#[must_use]
	pub fn line(&self) -> Option<usize> {
		match self {
			Self::Io {
				..
			} => None,
			Self::LineTooLong {
				line, ..
			}
			| Self::TooManyTokens {
				line,
			}
			| Self::Syntax {
				line, ..
			}
			| Self::BadNumber {
				line, ..
			}
			| Self::BadOperand {
				line, ..
			}
			| Self::UnknownMnemonic {
				line, ..
			}
			| Self::InvalidAddressingMode {
				line, ..
			}
			| Self::ImmediateTooLarge {
				line, ..
			}
			| Self::DirectOutOfRange {
				line, ..
			}
			| Self::RelativeOutOfRange {
				line, ..
			}
			| Self::UnknownSymbol {
				line, ..
			}
			| Self::TooManyLabels {
				line, ..
			} => Some(*line),
		}
	}
}
