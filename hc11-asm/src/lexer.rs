//! Line scanner.
//!
//! Lines are whitespace-separated and context-sensitive: a token starting
//! at column 0 declares a label, tokens after leading whitespace are
//! mnemonics or directives. The whole line is folded to lowercase before
//! classification, so mnemonics and symbols are case-insensitive.

use crate::error::{AsmError, AsmResult};

/// Longest accepted source line, matching the scanner's fixed buffer.
pub const MAX_LINE_LEN: usize = 99;

/// A classified source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
	/// Blank, comment-only, or nothing significant.
	Empty,
	/// `org <addr>`, optionally preceded by a discarded label.
	Org {
		/// Unparsed operand text.
		addr: String,
	},
	/// `<label> equ <value>`.
	Equ {
		/// The constant's name, from column 0.
		name: String,
		/// Unparsed operand text.
		value: String,
	},
	/// `[label] [mnemonic [operand]]`.
	Line {
		/// Label declared at column 0, if any.
		label: Option<String>,
		/// Mnemonic token, if any.
		mnemonic: Option<String>,
		/// Unparsed operand text, if any.
		operand: Option<String>,
	},
}

/// Strip comments: `;` and `//` anywhere, `*` at column 0 only.
fn strip_comment(line: &str) -> &str {
	if line.starts_with('*') {
		return "";
	}
	let mut end = line.len();
	if let Some(pos) = line.find(';') {
		end = end.min(pos);
	}
	if let Some(pos) = line.find("//") {
		end = end.min(pos);
	}
	&line[..end]
}

/// Scan one raw line into a classified [`Statement`].
///
/// # Errors
/// [`AsmError::LineTooLong`] past the buffer cap, [`AsmError::TooManyTokens`]
/// past the label + mnemonic + operand shape, [`AsmError::Syntax`] for a
/// malformed directive.
pub fn scan(raw: &str, line: usize) -> AsmResult<Statement> {
	if raw.len() > MAX_LINE_LEN {
		return Err(AsmError::LineTooLong {
			line,
			length: raw.len(),
		});
	}

	let significant = strip_comment(raw);
	let labelled = significant.starts_with(|c: char| !c.is_whitespace());
	let lowered = significant.to_lowercase();
	let tokens: Vec<&str> = lowered.split_whitespace().collect();

	if tokens.is_empty() {
		return Ok(Statement::Empty);
	}

	// Directives are recognised by their keyword, wherever it sits.
	if tokens.contains(&"equ") {
		if labelled && tokens.len() == 3 && tokens[1] == "equ" {
			return Ok(Statement::Equ {
				name: tokens[0].to_string(),
				value: tokens[2].to_string(),
			});
		}
		return Err(AsmError::Syntax {
			line,
			message: "equ format: <label> equ <value>".to_string(),
		});
	}
	if tokens.contains(&"org") {
		// An optional leading label is accepted and discarded; org
		// records no label.
		let addr = match tokens.as_slice() {
			["org", addr] => addr,
			[_, "org", addr] if labelled => addr,
			_ => {
				return Err(AsmError::Syntax {
					line,
					message: "org format: [label] org <addr>".to_string(),
				});
			}
		};
		return Ok(Statement::Org {
			addr: (*addr).to_string(),
		});
	}

	let mut parts = tokens.into_iter();
	let label = if labelled { parts.next().map(str::to_string) } else { None };
	let mnemonic = parts.next().map(str::to_string);
	let operand = parts.next().map(str::to_string);
	if parts.next().is_some() {
		return Err(AsmError::TooManyTokens {
			line,
		});
	}

	Ok(Statement::Line {
		label,
		mnemonic,
		operand,
	})
}
