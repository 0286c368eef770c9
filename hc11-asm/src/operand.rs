//! The operand grammar.
//!
//! ```text
//! #number    immediate (decimal), #$hex, #%binary
//! <$hex      direct, forced 1-byte
//! >$hex      extended, forced 2-byte
//! $hex       direct when <= 0xFF, extended otherwise
//! ident      symbol reference, resolved against the label table
//! ```

use crate::error::{AsmError, AsmResult};

/// A parsed operand, before symbol resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperandExpr {
	/// `#` literal.
	Immediate(u16),
	/// Direct-page address.
	Direct(u8),
	/// Full 16-bit address.
	Extended(u16),
	/// Identifier, resolved during encoding.
	Symbol(String),
}

/// Parse a 16-bit literal in the given base.
fn number(text: &str, base: u32, line: usize) -> AsmResult<u16> {
	let bad = || AsmError::BadNumber {
		line,
		text: text.to_string(),
		base,
	};
	let value = u32::from_str_radix(text, base).map_err(|_| bad())?;
	u16::try_from(value).map_err(|_| bad())
}

impl OperandExpr {
	/// Parse an operand token. The token is already lowercase.
	///
	/// # Errors
	/// [`AsmError::BadNumber`] for unparsable literals,
	/// [`AsmError::DirectOutOfRange`] for `<$` past the direct page,
	/// [`AsmError::BadOperand`] when no grammar rule matches.
	pub fn parse(text: &str, line: usize) -> AsmResult<Self> {
		if let Some(rest) = text.strip_prefix('#') {
			let value = if let Some(hex) = rest.strip_prefix('$') {
				number(hex, 16, line)?
			} else if let Some(bin) = rest.strip_prefix('%') {
				number(bin, 2, line)?
			} else if rest.starts_with(|c: char| c.is_ascii_digit()) {
				number(rest, 10, line)?
			} else {
				return Err(AsmError::BadOperand {
					line,
					text: text.to_string(),
				});
			};
			return Ok(Self::Immediate(value));
		}
		if let Some(hex) = text.strip_prefix("<$") {
			let value = number(hex, 16, line)?;
			let narrow = u8::try_from(value).map_err(|_| AsmError::DirectOutOfRange {
				line,
				value,
			})?;
			return Ok(Self::Direct(narrow));
		}
		if let Some(hex) = text.strip_prefix(">$") {
			return Ok(Self::Extended(number(hex, 16, line)?));
		}
		if let Some(hex) = text.strip_prefix('$') {
			let value = number(hex, 16, line)?;
			return Ok(match u8::try_from(value) {
				Ok(narrow) => Self::Direct(narrow),
				Err(_) => Self::Extended(value),
			});
		}
		if text.starts_with(|c: char| c.is_ascii_alphabetic() || c == '_') {
			return Ok(Self::Symbol(text.to_string()));
		}
		Err(AsmError::BadOperand {
			line,
			text: text.to_string(),
		})
	}
}
