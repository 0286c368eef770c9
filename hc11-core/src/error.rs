//! Execution errors.
//!
//! Every error here is fatal: the engine reports the faulting program
//! counter (or port address) and stops. Nothing is retried.

use thiserror::Error;

/// Result type for execution operations.
pub type ExecResult<T> = Result<T, ExecError>;

/// Fatal errors raised while executing a loaded program.
#[derive(Error, Debug)]
pub enum ExecError {
	/// The byte at PC has no entry in the dispatch table.
	#[error("no handler for opcode {opcode:#04x} at pc {pc:#06x}")]
	BadOpcode {
		pc: u16,
		opcode: u8,
	},

	/// A load or store touched a port the hardware model does not provide.
	#[error("{port} is not implemented (address {addr:#06x})")]
	PortNotImplemented {
		port: &'static str,
		addr: u16,
	},
}
